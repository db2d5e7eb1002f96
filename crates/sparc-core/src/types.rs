use crate::error::SparcError;
use serde::{Deserialize, Serialize};
use std::fmt;

// ---------------------------------------------------------------------------
// Phase
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Phase {
    Specification,
    Pseudocode,
    Architecture,
    Refinement,
    Completion,
}

impl Phase {
    pub fn all() -> &'static [Phase] {
        &[
            Phase::Specification,
            Phase::Pseudocode,
            Phase::Architecture,
            Phase::Refinement,
            Phase::Completion,
        ]
    }

    /// 1-based position in the fixed SPARC order.
    pub fn number(self) -> usize {
        self as usize + 1
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Phase::Specification => "specification",
            Phase::Pseudocode => "pseudocode",
            Phase::Architecture => "architecture",
            Phase::Refinement => "refinement",
            Phase::Completion => "completion",
        }
    }

    pub fn title(self) -> &'static str {
        match self {
            Phase::Specification => "Specification",
            Phase::Pseudocode => "Pseudocode",
            Phase::Architecture => "Architecture",
            Phase::Refinement => "Refinement",
            Phase::Completion => "Completion",
        }
    }

    /// File name used when the phase document is shipped in a bundle.
    pub fn filename(self) -> String {
        format!("sparc/{:02}-{}.md", self.number(), self.as_str())
    }
}

impl fmt::Display for Phase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for Phase {
    type Err = SparcError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "specification" => Ok(Phase::Specification),
            "pseudocode" => Ok(Phase::Pseudocode),
            "architecture" => Ok(Phase::Architecture),
            "refinement" => Ok(Phase::Refinement),
            "completion" => Ok(Phase::Completion),
            _ => Err(SparcError::InvalidPhase(s.to_string())),
        }
    }
}

// ---------------------------------------------------------------------------
// ProjectType
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ProjectType {
    WebApplication,
    ECommerce,
    Microservices,
    Utility,
}

impl ProjectType {
    pub fn as_str(self) -> &'static str {
        match self {
            ProjectType::WebApplication => "web-application",
            ProjectType::ECommerce => "e-commerce",
            ProjectType::Microservices => "microservices",
            ProjectType::Utility => "utility",
        }
    }
}

impl fmt::Display for ProjectType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ---------------------------------------------------------------------------
// Complexity
// ---------------------------------------------------------------------------

/// Shared scale for both complexity notions: the category complexity from
/// the categorizer (all four values) and the document complexity derived
/// from entity counts (never `Enterprise`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Complexity {
    Low,
    Medium,
    High,
    Enterprise,
}

impl Complexity {
    pub fn as_str(self) -> &'static str {
        match self {
            Complexity::Low => "low",
            Complexity::Medium => "medium",
            Complexity::High => "high",
            Complexity::Enterprise => "enterprise",
        }
    }

    pub fn total_weeks(self) -> u32 {
        match self {
            Complexity::Low => 2,
            Complexity::Medium => 8,
            Complexity::High => 16,
            Complexity::Enterprise => 24,
        }
    }

    pub fn is_heavy(self) -> bool {
        matches!(self, Complexity::High | Complexity::Enterprise)
    }
}

impl fmt::Display for Complexity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for Complexity {
    type Err = SparcError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "low" => Ok(Complexity::Low),
            "medium" => Ok(Complexity::Medium),
            "high" => Ok(Complexity::High),
            "enterprise" => Ok(Complexity::Enterprise),
            _ => Err(SparcError::InvalidComplexity(s.to_string())),
        }
    }
}

// ---------------------------------------------------------------------------
// Framework
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Framework {
    #[default]
    React,
    Vue,
    Angular,
    Svelte,
    Vanilla,
}

impl Framework {
    pub fn all() -> &'static [Framework] {
        &[
            Framework::React,
            Framework::Vue,
            Framework::Angular,
            Framework::Svelte,
            Framework::Vanilla,
        ]
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Framework::React => "react",
            Framework::Vue => "vue",
            Framework::Angular => "angular",
            Framework::Svelte => "svelte",
            Framework::Vanilla => "vanilla",
        }
    }
}

impl fmt::Display for Framework {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for Framework {
    type Err = SparcError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "react" => Ok(Framework::React),
            "vue" => Ok(Framework::Vue),
            "angular" => Ok(Framework::Angular),
            "svelte" => Ok(Framework::Svelte),
            "vanilla" => Ok(Framework::Vanilla),
            _ => Err(SparcError::InvalidFramework(s.to_string())),
        }
    }
}

// ---------------------------------------------------------------------------
// AiProvider
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AiProvider {
    OpenAi,
    Anthropic,
    #[default]
    Mock,
}

impl AiProvider {
    pub fn all() -> &'static [AiProvider] {
        &[AiProvider::OpenAi, AiProvider::Anthropic, AiProvider::Mock]
    }

    pub fn as_str(self) -> &'static str {
        match self {
            AiProvider::OpenAi => "openai",
            AiProvider::Anthropic => "anthropic",
            AiProvider::Mock => "mock",
        }
    }

    pub fn display_name(self) -> &'static str {
        match self {
            AiProvider::OpenAi => "OpenAI",
            AiProvider::Anthropic => "Anthropic",
            AiProvider::Mock => "Mock (canned text)",
        }
    }

    pub fn requires_credentials(self) -> bool {
        !matches!(self, AiProvider::Mock)
    }
}

impl fmt::Display for AiProvider {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for AiProvider {
    type Err = SparcError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "openai" => Ok(AiProvider::OpenAi),
            "anthropic" => Ok(AiProvider::Anthropic),
            "mock" => Ok(AiProvider::Mock),
            _ => Err(SparcError::InvalidProvider(s.to_string())),
        }
    }
}

// ---------------------------------------------------------------------------
// FileType
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FileType {
    Documentation,
    Configuration,
    Component,
    Test,
}

impl fmt::Display for FileType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            FileType::Documentation => "documentation",
            FileType::Configuration => "configuration",
            FileType::Component => "component",
            FileType::Test => "test",
        };
        f.write_str(s)
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    #[test]
    fn phase_order_and_numbering() {
        let numbers: Vec<usize> = Phase::all().iter().map(|p| p.number()).collect();
        assert_eq!(numbers, vec![1, 2, 3, 4, 5]);
        assert!(Phase::Specification < Phase::Completion);
    }

    #[test]
    fn phase_parse_known_names() {
        for phase in Phase::all() {
            assert_eq!(Phase::from_str(phase.as_str()).unwrap(), *phase);
        }
    }

    #[test]
    fn phase_parse_rejects_unknown() {
        let err = Phase::from_str("deployment").unwrap_err();
        assert!(matches!(err, SparcError::InvalidPhase(ref s) if s == "deployment"));
        assert!(err.to_string().contains("Invalid phase name"));
    }

    #[test]
    fn phase_filename_is_numbered() {
        assert_eq!(Phase::Architecture.filename(), "sparc/03-architecture.md");
    }

    #[test]
    fn project_type_serializes_kebab_case() {
        let json = serde_json::to_string(&ProjectType::ECommerce).unwrap();
        assert_eq!(json, "\"e-commerce\"");
        let json = serde_json::to_string(&ProjectType::WebApplication).unwrap();
        assert_eq!(json, "\"web-application\"");
    }

    #[test]
    fn complexity_weeks() {
        assert_eq!(Complexity::Low.total_weeks(), 2);
        assert_eq!(Complexity::Medium.total_weeks(), 8);
        assert_eq!(Complexity::High.total_weeks(), 16);
        assert_eq!(Complexity::Enterprise.total_weeks(), 24);
    }

    #[test]
    fn framework_parse() {
        assert_eq!(Framework::from_str("vue").unwrap(), Framework::Vue);
        assert!(Framework::from_str("ember").is_err());
    }

    #[test]
    fn provider_serde_matches_as_str() {
        for p in AiProvider::all() {
            let json = serde_json::to_string(p).unwrap();
            assert_eq!(json, format!("\"{}\"", p.as_str()));
        }
        assert!(!AiProvider::Mock.requires_credentials());
        assert!(AiProvider::OpenAi.requires_credentials());
    }
}
