use super::heading;
use crate::error::Result;
use crate::spec::StructuredSpec;
use crate::types::{Complexity, Phase};
use std::fmt::Write;

const FRONTENDS: &[&str] = &["React", "Vue", "Angular", "Svelte", "Next.js"];
const BACKENDS: &[&str] = &["Node.js", "Express", "Django", "Flask", "Python"];
const DATABASES: &[&str] = &["PostgreSQL", "MySQL", "MongoDB"];

const SECURITY: &str = "\
- Authentication via short-lived JWT access tokens with refresh rotation
- Role-based authorization enforced at the API gateway and service layer
- TLS for all traffic; secrets held in a managed secret store
- Input validation and output encoding on every external boundary
- Rate limiting and audit logging for sensitive operations
";

const SCALABILITY: &str = "\
- Stateless application servers behind a load balancer
- Horizontal scaling driven by CPU and request-latency metrics
- Read replicas and connection pooling for the primary database
- CDN for static assets
- Background jobs moved off the request path onto a queue
";

fn first_suggested<'a>(spec: &'a StructuredSpec, candidates: &[&str]) -> Option<&'a str> {
    spec.technologies
        .suggested
        .iter()
        .find(|t| candidates.contains(&t.as_str()))
        .map(String::as_str)
}

fn role(technology: &str) -> &'static str {
    match technology {
        "React" | "Vue" | "Angular" | "Svelte" | "Next.js" => {
            "User interface and client-side state"
        }
        "TypeScript" => "Static typing across the codebase",
        "Node.js" | "Express" | "Django" | "Flask" | "Python" => "API and business logic",
        "GraphQL" => "Typed query layer for clients",
        "PostgreSQL" | "MySQL" => "Relational persistence",
        "MongoDB" => "Document persistence",
        "Redis" => "Caching and session storage",
        "Kafka" => "Event streaming between services",
        "Docker" => "Container packaging",
        "Kubernetes" => "Container orchestration",
        "AWS" => "Cloud hosting",
        _ => "Supporting technology",
    }
}

/// Split into services when the documents are complex or the requirement
/// list is long.
pub(crate) fn uses_microservices(spec: &StructuredSpec) -> bool {
    spec.document_complexity() == Complexity::High || spec.requirements.len() > 3
}

fn service_name(feature: &str) -> String {
    let words: Vec<String> = feature
        .split(|c: char| c.is_whitespace() || c == '-')
        .filter(|w| !w.is_empty())
        .map(|w| {
            let mut chars = w.chars();
            match chars.next() {
                Some(first) => first.to_uppercase().chain(chars).collect(),
                None => String::new(),
            }
        })
        .collect();
    format!("{} Service", words.join(" "))
}

fn diagram(spec: &StructuredSpec) -> Result<String> {
    let mut d = String::new();
    let arrow = "        |\n        v\n";

    let frontend = first_suggested(spec, FRONTENDS).unwrap_or("React");
    writeln!(d, "[Frontend: {frontend}]")?;
    d.push_str(arrow);
    writeln!(d, "[API Gateway]")?;
    d.push_str(arrow);

    if uses_microservices(spec) {
        writeln!(d, "[Microservices]")?;
        if spec.features.is_empty() {
            writeln!(d, "  ├── Core Service")?;
        }
        for feature in &spec.features {
            writeln!(d, "  ├── {}", service_name(feature))?;
        }
        writeln!(d, "  └── Notification Service")?;
    } else {
        let backend = first_suggested(spec, BACKENDS).unwrap_or("Node.js");
        writeln!(d, "[Backend Service: {backend}]")?;
    }

    if spec.suggests("Redis") {
        d.push_str(arrow);
        writeln!(d, "[Cache Layer: Redis]")?;
    }
    if let Some(db) = first_suggested(spec, DATABASES) {
        d.push_str(arrow);
        writeln!(d, "[Database: {db}]")?;
    }

    Ok(d)
}

pub(super) fn render(spec: &StructuredSpec) -> Result<String> {
    let mut doc = String::new();
    let style = if uses_microservices(spec) {
        "Microservices"
    } else {
        "Layered monolith"
    };

    writeln!(doc, "{}\n", heading(Phase::Architecture, spec))?;

    writeln!(doc, "## System Overview\n")?;
    writeln!(doc, "- **Architecture Style:** {style}")?;
    writeln!(doc, "- **Complexity:** {}\n", spec.document_complexity())?;

    writeln!(doc, "## Architecture Diagram\n")?;
    writeln!(doc, "```")?;
    doc.push_str(&diagram(spec)?);
    writeln!(doc, "```\n")?;

    writeln!(doc, "## Components\n")?;
    for tech in &spec.technologies.suggested {
        writeln!(doc, "- **{tech}**: {}", role(tech))?;
    }
    doc.push('\n');

    writeln!(doc, "## Security Architecture\n")?;
    doc.push_str(SECURITY);
    doc.push('\n');

    writeln!(doc, "## Scalability\n")?;
    doc.push_str(SCALABILITY);

    Ok(doc)
}
