use super::heading;
use crate::error::Result;
use crate::spec::StructuredSpec;
use crate::types::Phase;
use std::fmt::Write;

const DEFAULT_NFRS: &[&str] = &[
    "Performance: primary pages load in under 2 seconds",
    "Security: all user data is transmitted over TLS",
    "Maintainability: code follows a consistent style and is covered by tests",
];

const SUCCESS_METRICS: &str = "\
- All acceptance criteria pass in automated tests
- Test coverage of at least 80%
- No critical or high severity defects open at release
- Page load and API response times within the agreed budget
- Positive feedback from the first round of user testing
";

pub(super) fn render(spec: &StructuredSpec) -> Result<String> {
    let mut doc = String::new();

    writeln!(doc, "{}\n", heading(Phase::Specification, spec))?;

    writeln!(doc, "## Overview\n")?;
    writeln!(doc, "{}\n", spec.description)?;
    writeln!(doc, "- **Project Type:** {}", spec.category.project_type)?;
    writeln!(
        doc,
        "- **Estimated Timeline:** {} weeks ({})\n",
        spec.estimated_timeline.total_weeks,
        spec.estimated_timeline.phases.join(" → ")
    )?;

    writeln!(doc, "## Technology Stack\n")?;
    for tech in &spec.technologies.suggested {
        writeln!(doc, "- {tech}")?;
    }
    if !spec.technologies.alternatives.is_empty() {
        writeln!(
            doc,
            "\nAlternatives considered: {}",
            spec.technologies.alternatives.join(", ")
        )?;
    }
    doc.push('\n');

    writeln!(doc, "## Functional Requirements\n")?;
    if spec.features.is_empty() {
        writeln!(
            doc,
            "No specific features were detected. Refine the description to list them.\n"
        )?;
    }
    for (i, feature) in spec.features.iter().enumerate() {
        let priority = if i < 3 { "High" } else { "Medium" };
        writeln!(doc, "### FR-{}: {feature}\n", i + 1)?;
        writeln!(doc, "- **Description:** The system shall provide {feature}.")?;
        writeln!(doc, "- **Priority:** {priority}")?;
        writeln!(
            doc,
            "- **Acceptance:** User should be able to use {feature} successfully\n"
        )?;
    }

    writeln!(doc, "## Non-Functional Requirements\n")?;
    if spec.requirements.is_empty() {
        for (i, nfr) in DEFAULT_NFRS.iter().enumerate() {
            writeln!(doc, "- NFR-{}: {nfr}", i + 1)?;
        }
    } else {
        for (i, req) in spec.requirements.iter().enumerate() {
            writeln!(doc, "- NFR-{}: The system must be {req}", i + 1)?;
        }
    }
    doc.push('\n');

    writeln!(doc, "## Constraints\n")?;
    if spec.constraints.is_empty() {
        writeln!(doc, "- None identified")?;
    }
    for constraint in &spec.constraints {
        writeln!(doc, "- {constraint}")?;
    }
    doc.push('\n');

    writeln!(doc, "## Acceptance Criteria\n")?;
    if spec.acceptance_criteria.is_empty() {
        writeln!(doc, "1. The application builds, deploys, and serves its main page")?;
    }
    for (i, criterion) in spec.acceptance_criteria.iter().enumerate() {
        writeln!(doc, "{}. {criterion}", i + 1)?;
    }
    doc.push('\n');

    writeln!(doc, "## Success Metrics\n")?;
    doc.push_str(SUCCESS_METRICS);

    Ok(doc)
}
