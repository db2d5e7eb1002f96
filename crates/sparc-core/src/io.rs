use crate::error::{Result, SparcError};
use std::io::Write;
use std::path::{Component, Path, PathBuf};
use tempfile::NamedTempFile;

/// Atomically write `data` to `path` using a tempfile in the same directory.
pub fn atomic_write(path: &Path, data: &[u8]) -> Result<()> {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)?;
    }
    let dir = path.parent().unwrap_or(Path::new("."));
    let mut tmp = NamedTempFile::new_in(dir)?;
    tmp.write_all(data)?;
    tmp.persist(path).map_err(|e| e.error)?;
    Ok(())
}

/// Create a directory and all parents, idempotent.
pub fn ensure_dir(path: &Path) -> Result<()> {
    std::fs::create_dir_all(path)?;
    Ok(())
}

/// Join a generated file name onto `root`, rejecting names that would
/// land outside it (absolute paths, `..`, drive prefixes).
pub fn contained_path(root: &Path, name: &str) -> Result<PathBuf> {
    let relative = Path::new(name);
    let mut depth = 0usize;
    for component in relative.components() {
        match component {
            Component::Normal(_) => depth += 1,
            Component::CurDir => {}
            Component::ParentDir | Component::RootDir | Component::Prefix(_) => {
                return Err(SparcError::InvalidFileName(name.to_string()));
            }
        }
    }
    if depth == 0 {
        return Err(SparcError::InvalidFileName(name.to_string()));
    }
    Ok(root.join(relative))
}
