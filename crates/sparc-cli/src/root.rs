use anyhow::Context;
use sparc_agent::ProviderConfig;
use sparc_core::config::{Config, CONFIG_FILE};
use std::path::{Path, PathBuf};

/// Resolve the path of `sparc.yaml`.
///
/// Priority:
/// 1. `--config` flag / `SPARC_CONFIG` env var (passed in as `explicit`)
/// 2. Walk upward from `start` looking for an existing `sparc.yaml`
/// 3. Fall back to `start/sparc.yaml` (which may not exist)
pub fn resolve_config_path(explicit: Option<&Path>, start: &Path) -> PathBuf {
    if let Some(p) = explicit {
        return p.to_path_buf();
    }

    let mut dir = start.to_path_buf();
    loop {
        let candidate = dir.join(CONFIG_FILE);
        if candidate.is_file() {
            return candidate;
        }
        match dir.parent() {
            Some(p) => dir = p.to_path_buf(),
            None => break,
        }
    }

    start.join(CONFIG_FILE)
}

/// API keys supplied on the command line or through the environment.
#[derive(Debug, Default, Clone)]
pub struct KeyOverrides {
    pub openai: Option<String>,
    pub anthropic: Option<String>,
}

/// Load the effective config: file (or defaults) with CLI/env keys on top.
pub fn load_config(path: &Path, keys: KeyOverrides) -> anyhow::Result<Config> {
    let mut config = Config::load(path)
        .with_context(|| format!("failed to load config from {}", path.display()))?;
    if keys.openai.is_some() {
        config.providers.openai_api_key = keys.openai;
    }
    if keys.anthropic.is_some() {
        config.providers.anthropic_api_key = keys.anthropic;
    }
    Ok(config)
}

pub fn provider_config(config: &Config) -> ProviderConfig {
    ProviderConfig::from(&config.providers)
}
