use crate::classifier::{categorize_project, ProjectCategory};
use crate::error::{Result, SparcError};
use crate::extract::{extract_entities, ExtractedEntities};
use crate::types::{AiProvider, Complexity, Framework};
use serde::{Deserialize, Serialize};

// ---------------------------------------------------------------------------
// Derivation tables
// ---------------------------------------------------------------------------

/// (substring, project name), checked in order.
const PROJECT_NAMES: &[(&str, &str)] = &[
    ("blog", "Blog Application"),
    ("e-commerce", "E-commerce Platform"),
    ("todo", "Todo Application"),
    ("trading", "Trading Platform"),
];

const DEFAULT_PROJECT_NAME: &str = "Web Application";

const BASE_TECHNOLOGIES: &[&str] = &["React", "Node.js"];
const HEAVY_TECHNOLOGIES: &[&str] = &["PostgreSQL", "Redis"];

/// (technology, common substitute).
const ALTERNATIVES: &[(&str, &str)] = &[
    ("React", "Vue"),
    ("Vue", "React"),
    ("Angular", "React"),
    ("Svelte", "React"),
    ("Node.js", "Python"),
    ("Express", "Fastify"),
    ("Django", "Flask"),
    ("Flask", "Django"),
    ("PostgreSQL", "MySQL"),
    ("MySQL", "PostgreSQL"),
    ("MongoDB", "PostgreSQL"),
    ("Redis", "Memcached"),
    ("GraphQL", "REST"),
    ("Docker", "Podman"),
    ("Kubernetes", "Docker Swarm"),
];

pub const TIMELINE_PHASES: &[&str] = &["Planning", "Development", "Testing", "Deployment"];

// ---------------------------------------------------------------------------
// GenerationOptions
// ---------------------------------------------------------------------------

/// Caller-supplied flags that travel with a spec built from a full request.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GenerationOptions {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub complexity: Option<Complexity>,
    #[serde(default)]
    pub framework: Framework,
    #[serde(default = "default_true")]
    pub include_tests: bool,
    #[serde(default = "default_true")]
    pub include_docs: bool,
    #[serde(default)]
    pub ai_provider: AiProvider,
}

fn default_true() -> bool {
    true
}

impl Default for GenerationOptions {
    fn default() -> Self {
        Self {
            complexity: None,
            framework: Framework::default(),
            include_tests: true,
            include_docs: true,
            ai_provider: AiProvider::default(),
        }
    }
}

// ---------------------------------------------------------------------------
// StructuredSpec
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Technologies {
    pub suggested: Vec<String>,
    pub alternatives: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Timeline {
    pub phases: Vec<String>,
    pub total_weeks: u32,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StructuredSpec {
    pub project_name: String,
    pub description: String,
    pub features: Vec<String>,
    pub technologies: Technologies,
    pub requirements: Vec<String>,
    pub constraints: Vec<String>,
    pub acceptance_criteria: Vec<String>,
    pub estimated_timeline: Timeline,
    /// Category from the rule table; drives the stack and the timeline.
    pub category: ProjectCategory,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub metadata: Option<GenerationOptions>,
}

impl StructuredSpec {
    /// Assemble a spec from already-extracted parts. Infallible.
    pub fn assemble(text: &str, entities: ExtractedEntities, category: ProjectCategory) -> Self {
        let lower = text.to_lowercase();

        let suggested = suggested_technologies(category.complexity, &entities.technologies);
        let alternatives = alternatives_for(&suggested);

        let acceptance_criteria = entities
            .features
            .iter()
            .map(|f| format!("User should be able to use {f} successfully"))
            .collect();

        Self {
            project_name: project_name(&lower).to_string(),
            description: describe(&entities.features),
            features: entities.features,
            technologies: Technologies {
                suggested,
                alternatives,
            },
            requirements: entities.requirements,
            constraints: entities.constraints,
            acceptance_criteria,
            estimated_timeline: Timeline {
                phases: TIMELINE_PHASES.iter().map(|s| s.to_string()).collect(),
                total_weeks: category.complexity.total_weeks(),
            },
            category,
            metadata: None,
        }
    }

    pub fn with_metadata(mut self, options: GenerationOptions) -> Self {
        self.metadata = Some(options);
        self
    }

    /// Complexity of the generated documents, derived from entity counts.
    ///
    /// Independent of `category.complexity`: a short e-commerce request is a
    /// high-complexity category but may still yield low-complexity documents.
    pub fn document_complexity(&self) -> Complexity {
        let busy = self.requirements.len() > 3 || self.constraints.len() > 1;
        let features = self.features.len();
        if features <= 2 && !busy {
            Complexity::Low
        } else if features <= 5 && !busy {
            Complexity::Medium
        } else {
            Complexity::High
        }
    }

    pub fn suggests(&self, technology: &str) -> bool {
        self.technologies.suggested.iter().any(|t| t == technology)
    }
}

fn project_name(lower: &str) -> &'static str {
    PROJECT_NAMES
        .iter()
        .find(|(kw, _)| lower.contains(kw))
        .map(|(_, name)| *name)
        .unwrap_or(DEFAULT_PROJECT_NAME)
}

fn describe(features: &[String]) -> String {
    if features.is_empty() {
        "A comprehensive application".to_string()
    } else {
        format!(
            "A comprehensive application featuring {}",
            features.join(", ")
        )
    }
}

fn suggested_technologies(complexity: Complexity, extracted: &[String]) -> Vec<String> {
    let mut out: Vec<String> = Vec::new();
    let heavy: &[&str] = if complexity.is_heavy() {
        HEAVY_TECHNOLOGIES
    } else {
        &[]
    };
    let candidates = BASE_TECHNOLOGIES
        .iter()
        .chain(heavy)
        .map(|s| s.to_string())
        .chain(extracted.iter().cloned());
    for tech in candidates {
        if !out.contains(&tech) {
            out.push(tech);
        }
    }
    out
}

fn alternatives_for(suggested: &[String]) -> Vec<String> {
    let mut out: Vec<String> = Vec::new();
    for tech in suggested {
        if let Some((_, alt)) = ALTERNATIVES.iter().find(|(t, _)| t == tech) {
            let alt = alt.to_string();
            if !suggested.contains(&alt) && !out.contains(&alt) {
                out.push(alt);
            }
        }
    }
    out
}

// ---------------------------------------------------------------------------
// Public entry point
// ---------------------------------------------------------------------------

/// Extract, categorize, and assemble a spec from `text` as given.
///
/// The caller decides whether to validate or sanitize first. Any failure is
/// reported as "Failed to process input"; the underlying error stays
/// reachable through `source()`.
pub fn generate_structured_spec(text: &str) -> Result<StructuredSpec> {
    build(text).map_err(SparcError::processing)
}

fn build(text: &str) -> Result<StructuredSpec> {
    let entities = extract_entities(text);
    let category = categorize_project(text);
    tracing::debug!(
        features = entities.features.len(),
        technologies = entities.technologies.len(),
        category = %category.project_type,
        "entities extracted"
    );

    Ok(StructuredSpec::assemble(text, entities, category))
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
