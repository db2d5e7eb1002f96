use serde::{Deserialize, Serialize};

// ---------------------------------------------------------------------------
// Keyword tables
// ---------------------------------------------------------------------------

/// Feature phrases. Output is the phrase itself, in table order.
pub const FEATURE_KEYWORDS: &[&str] = &[
    "user authentication",
    "blog application",
    "user registration",
    "user profiles",
    "user management",
    "admin dashboard",
    "shopping cart",
    "product catalog",
    "payment processing",
    "order management",
    "inventory management",
    "search functionality",
    "real-time chat",
    "notifications",
    "file upload",
    "comments",
    "social login",
    "analytics",
    "reporting",
    "data visualization",
    "task management",
    "todo list",
    "calendar",
    "messaging",
    "trading engine",
    "portfolio management",
    "risk management",
    "market data",
    "api integration",
];

/// (lowercase keyword, canonical name).
pub const TECHNOLOGY_KEYWORDS: &[(&str, &str)] = &[
    ("react", "React"),
    ("vue", "Vue"),
    ("angular", "Angular"),
    ("svelte", "Svelte"),
    ("next.js", "Next.js"),
    ("typescript", "TypeScript"),
    ("node.js", "Node.js"),
    ("express", "Express"),
    ("python", "Python"),
    ("django", "Django"),
    ("flask", "Flask"),
    ("graphql", "GraphQL"),
    ("postgresql", "PostgreSQL"),
    ("mysql", "MySQL"),
    ("mongodb", "MongoDB"),
    ("redis", "Redis"),
    ("kafka", "Kafka"),
    ("docker", "Docker"),
    ("kubernetes", "Kubernetes"),
    ("aws", "AWS"),
];

pub const REQUIREMENT_KEYWORDS: &[&str] = &[
    "scalable",
    "high performance",
    "secure",
    "real-time",
    "responsive",
    "mobile-friendly",
    "high availability",
    "low latency",
    "accessibility",
    "seo",
    "offline support",
    "multi-language",
];

pub const CONSTRAINT_KEYWORDS: &[&str] = &[
    "budget",
    "deadline",
    "legacy",
    "compliance",
    "gdpr",
    "hipaa",
    "pci",
    "on-premise",
    "open source",
    "limited resources",
];

// ---------------------------------------------------------------------------
// ExtractedEntities
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExtractedEntities {
    pub features: Vec<String>,
    pub technologies: Vec<String>,
    pub requirements: Vec<String>,
    pub constraints: Vec<String>,
}

fn matching(haystack: &str, table: &[&str]) -> Vec<String> {
    table
        .iter()
        .filter(|kw| haystack.contains(*kw))
        .map(|kw| kw.to_string())
        .collect()
}

/// Case-insensitive substring scan of `text` against the fixed tables.
pub fn extract_entities(text: &str) -> ExtractedEntities {
    let lower = text.to_lowercase();

    let technologies = TECHNOLOGY_KEYWORDS
        .iter()
        .filter(|(kw, _)| lower.contains(kw))
        .map(|(_, canonical)| canonical.to_string())
        .collect();

    ExtractedEntities {
        features: matching(&lower, FEATURE_KEYWORDS),
        technologies,
        requirements: matching(&lower, REQUIREMENT_KEYWORDS),
        constraints: matching(&lower, CONSTRAINT_KEYWORDS),
    }
}
