use crate::types::{Complexity, ProjectType};
use serde::{Deserialize, Serialize};

// ---------------------------------------------------------------------------
// EvalContext
// ---------------------------------------------------------------------------

pub struct EvalContext<'a> {
    /// The description as given, used for length checks.
    pub text: &'a str,
    /// Lowercased copy, used for keyword checks.
    pub lower: &'a str,
}

impl EvalContext<'_> {
    fn contains_any(&self, keywords: &[&str]) -> bool {
        keywords.iter().any(|kw| self.lower.contains(kw))
    }
}

// ---------------------------------------------------------------------------
// ProjectCategory (output)
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProjectCategory {
    #[serde(rename = "type")]
    pub project_type: ProjectType,
    pub complexity: Complexity,
}

// ---------------------------------------------------------------------------
// Rule
// ---------------------------------------------------------------------------

pub struct Rule {
    pub id: &'static str,
    pub condition: fn(&EvalContext) -> bool,
    pub project_type: ProjectType,
    pub complexity: Complexity,
}

pub const UTILITY_MAX_CHARS: usize = 50;

fn is_ecommerce(ctx: &EvalContext) -> bool {
    ctx.contains_any(&["e-commerce", "shopping", "payment"])
}

fn is_microservices(ctx: &EvalContext) -> bool {
    ctx.contains_any(&["microservices", "financial trading"])
}

fn is_small_todo(ctx: &EvalContext) -> bool {
    ctx.lower.contains("todo") && ctx.text.chars().count() < UTILITY_MAX_CHARS
}

/// Evaluated in order; the first match wins.
pub fn default_rules() -> Vec<Rule> {
    vec![
        Rule {
            id: "e-commerce",
            condition: is_ecommerce,
            project_type: ProjectType::ECommerce,
            complexity: Complexity::High,
        },
        Rule {
            id: "microservices",
            condition: is_microservices,
            project_type: ProjectType::Microservices,
            complexity: Complexity::Enterprise,
        },
        Rule {
            id: "utility",
            condition: is_small_todo,
            project_type: ProjectType::Utility,
            complexity: Complexity::Low,
        },
    ]
}

// ---------------------------------------------------------------------------
// Classifier
// ---------------------------------------------------------------------------

pub struct Classifier {
    rules: Vec<Rule>,
}

impl Default for Classifier {
    fn default() -> Self {
        Self::new(default_rules())
    }
}

impl Classifier {
    pub fn new(rules: Vec<Rule>) -> Self {
        Self { rules }
    }

    pub fn classify(&self, text: &str) -> ProjectCategory {
        let lower = text.to_lowercase();
        let ctx = EvalContext { text, lower: &lower };

        for rule in &self.rules {
            if (rule.condition)(&ctx) {
                tracing::debug!(rule = rule.id, "project category matched");
                return ProjectCategory {
                    project_type: rule.project_type,
                    complexity: rule.complexity,
                };
            }
        }

        // Fallback
        ProjectCategory {
            project_type: ProjectType::WebApplication,
            complexity: Complexity::Medium,
        }
    }
}

pub fn categorize_project(text: &str) -> ProjectCategory {
    Classifier::default().classify(text)
}
