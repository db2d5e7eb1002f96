//! SPARC phase synthesis.
//!
//! One template per [`Phase`]. Every document opens with
//! `# Phase {N}: {Title} - {projectName}` and is rendered from a
//! [`StructuredSpec`] alone, so the same spec always yields the same text
//! apart from `generated_at`.

mod architecture;
mod completion;
mod pseudocode;
mod refinement;
mod specification;

use crate::error::{Result, SparcError};
use crate::spec::StructuredSpec;
use crate::types::{Complexity, Phase};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::str::FromStr;

// ---------------------------------------------------------------------------
// SparcFile
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PhaseMetadata {
    pub generated_at: DateTime<Utc>,
    pub project_name: String,
    /// Document complexity, recomputed from the structured spec for every file.
    pub complexity: Complexity,
    pub phase: Phase,
    pub technologies: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SparcFile {
    pub phase: Phase,
    pub content: String,
    pub metadata: PhaseMetadata,
}

// ---------------------------------------------------------------------------
// Rendering
// ---------------------------------------------------------------------------

pub fn heading(phase: Phase, spec: &StructuredSpec) -> String {
    format!(
        "# Phase {}: {} - {}",
        phase.number(),
        phase.title(),
        spec.project_name
    )
}

/// Render a single phase document.
pub fn synthesize(phase: Phase, spec: &StructuredSpec) -> Result<SparcFile> {
    let content = match phase {
        Phase::Specification => specification::render(spec)?,
        Phase::Pseudocode => pseudocode::render(spec)?,
        Phase::Architecture => architecture::render(spec)?,
        Phase::Refinement => refinement::render(spec)?,
        Phase::Completion => completion::render(spec)?,
    };
    tracing::debug!(phase = %phase, bytes = content.len(), "phase rendered");

    Ok(SparcFile {
        phase,
        content,
        metadata: PhaseMetadata {
            generated_at: Utc::now(),
            project_name: spec.project_name.clone(),
            complexity: spec.document_complexity(),
            phase,
            technologies: spec.technologies.suggested.clone(),
        },
    })
}

/// Render one phase by name. Unknown names fail with `InvalidPhase`.
pub fn generate_phase(name: &str, spec: &StructuredSpec) -> Result<SparcFile> {
    let phase = Phase::from_str(name)?;
    synthesize(phase, spec)
}

/// Render all five phases in order. Any failure discards the whole set.
pub fn generate_all_phases(spec: &StructuredSpec) -> Result<Vec<SparcFile>> {
    Phase::all()
        .iter()
        .map(|phase| synthesize(*phase, spec))
        .collect::<Result<Vec<_>>>()
        .map_err(SparcError::generation)
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
