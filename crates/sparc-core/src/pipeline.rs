use crate::error::{Result, SparcError};
use crate::io;
use crate::phase::{generate_all_phases, SparcFile};
use crate::scaffold::{self, GeneratedFile, ScaffoldOptions};
use crate::spec::{generate_structured_spec, GenerationOptions, StructuredSpec};
use crate::types::{FileType, Phase};
use crate::validate::validate_input;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::time::Instant;

// ---------------------------------------------------------------------------
// FeatureRequest
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FeatureRequest {
    pub description: String,
    #[serde(flatten)]
    pub options: GenerationOptions,
}

impl FeatureRequest {
    pub fn new(description: impl Into<String>) -> Self {
        Self {
            description: description.into(),
            options: GenerationOptions::default(),
        }
    }
}

// ---------------------------------------------------------------------------
// SparcOutput
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SparcOutput {
    pub files: Vec<GeneratedFile>,
    pub specification: String,
    pub architecture: String,
    /// Wall-clock milliseconds spent in the pipeline.
    pub generation_time: u64,
    pub timestamp: DateTime<Utc>,
}

// ---------------------------------------------------------------------------
// Generation (intermediate)
// ---------------------------------------------------------------------------

/// A spec plus its five phase documents, before scaffolding.
///
/// Callers that want to post-process the documents (for example, appending
/// generated notes) do so between [`plan`] and [`Generation::finish`].
#[derive(Debug)]
pub struct Generation {
    pub spec: StructuredSpec,
    pub phases: Vec<SparcFile>,
    started: Instant,
}

impl Generation {
    pub fn options(&self) -> GenerationOptions {
        self.spec.metadata.clone().unwrap_or_default()
    }

    pub fn elapsed_ms(&self) -> u64 {
        u64::try_from(self.started.elapsed().as_millis()).unwrap_or(u64::MAX)
    }

    /// Emit scaffold files and assemble the final bundle.
    pub fn finish(self) -> Result<SparcOutput> {
        let options = self.options();
        let scaffold = scaffold::emit(
            options.framework,
            &self.spec,
            ScaffoldOptions {
                include_tests: options.include_tests,
                include_docs: options.include_docs,
            },
        )
        .map_err(SparcError::generation)?;

        let document = |phase: Phase| {
            self.phases
                .iter()
                .find(|f| f.phase == phase)
                .map(|f| f.content.clone())
                .unwrap_or_default()
        };
        let specification = document(Phase::Specification);
        let architecture = document(Phase::Architecture);

        let mut files: Vec<GeneratedFile> = self
            .phases
            .iter()
            .map(|f| {
                GeneratedFile::new(f.phase.filename(), f.content.clone(), FileType::Documentation)
            })
            .collect();
        files.extend(scaffold);

        let generation_time = self.elapsed_ms();
        tracing::info!(
            project = %self.spec.project_name,
            files = files.len(),
            generation_time_ms = generation_time,
            "generation complete"
        );

        Ok(SparcOutput {
            files,
            specification,
            architecture,
            generation_time,
            timestamp: Utc::now(),
        })
    }
}

// ---------------------------------------------------------------------------
// Entry points
// ---------------------------------------------------------------------------

/// Validate and sanitize the description, then build the structured spec
/// and the five phase documents. Invalid input is reported as
/// "Failed to process input" with `InvalidInput` as the cause.
pub fn plan(request: &FeatureRequest) -> Result<Generation> {
    let started = Instant::now();
    let description = validate_input(&request.description)
        .into_sanitized()
        .map_err(SparcError::processing)?;
    let spec = generate_structured_spec(&description)?
        .with_metadata(request.options.clone());
    tracing::info!(
        project = %spec.project_name,
        category = %spec.category.project_type,
        features = spec.features.len(),
        "structured spec built"
    );
    let phases = generate_all_phases(&spec)?;
    Ok(Generation {
        spec,
        phases,
        started,
    })
}

/// Run the whole pipeline: validate, analyse, synthesize, scaffold.
pub fn generate(request: &FeatureRequest) -> Result<SparcOutput> {
    plan(request)?.finish()
}

/// Write every file of `output` under `dir`. Returns the written paths.
pub fn write_output(output: &SparcOutput, dir: &Path) -> Result<Vec<PathBuf>> {
    io::ensure_dir(dir)?;
    let mut written = Vec::with_capacity(output.files.len());
    for file in &output.files {
        let path = io::contained_path(dir, &file.name)?;
        io::atomic_write(&path, file.content.as_bytes())?;
        written.push(path);
    }
    Ok(written)
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
