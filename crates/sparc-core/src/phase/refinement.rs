use super::heading;
use crate::error::Result;
use crate::spec::StructuredSpec;
use crate::types::Phase;
use std::fmt::Write;

const TDD_PLAN: &str = "\
1. Write a failing test that captures the next behaviour
2. Implement the smallest change that makes it pass
3. Refactor with the full suite green
4. Repeat per acceptance criterion, feature by feature
";

const PERFORMANCE: &str = "\
- Profile hot paths before optimising; keep a baseline in CI
- Cache expensive reads and invalidate on write
- Paginate list endpoints and index filtered columns
- Lazy-load non-critical frontend bundles
";

const CODE_QUALITY: &str = "\
- Linting and formatting enforced in CI
- Mandatory code review for every change
- Minimum 80% line coverage on new code
- No new compiler or linter warnings
";

const MONITORING: &str = "\
- Structured logs with request identifiers
- Metrics for latency, throughput, and error rate per endpoint
- Alerts on error-rate and latency regressions
- Uptime checks against the health endpoint
";

pub(super) fn render(spec: &StructuredSpec) -> Result<String> {
    let mut doc = String::new();

    writeln!(doc, "{}\n", heading(Phase::Refinement, spec))?;

    writeln!(doc, "## Test-Driven Development Plan\n")?;
    doc.push_str(TDD_PLAN);
    doc.push('\n');

    writeln!(doc, "## Test Coverage by Feature\n")?;
    if spec.features.is_empty() {
        writeln!(doc, "No features detected; cover the application shell and routing.\n")?;
    }
    for feature in &spec.features {
        writeln!(doc, "### {feature}\n")?;
        writeln!(doc, "**Unit Tests:**")?;
        writeln!(doc, "- Validates {feature} input")?;
        writeln!(doc, "- Handles {feature} edge cases and errors")?;
        writeln!(doc, "\n**Integration Tests:**")?;
        writeln!(doc, "- {feature} API endpoints return expected responses")?;
        writeln!(doc, "- {feature} data is persisted and retrieved correctly")?;
        writeln!(doc, "\n**End-to-End Tests:**")?;
        writeln!(doc, "- User completes the {feature} flow from the UI\n")?;
    }

    writeln!(doc, "## Performance Optimization\n")?;
    doc.push_str(PERFORMANCE);
    doc.push('\n');

    writeln!(doc, "## Code Quality\n")?;
    doc.push_str(CODE_QUALITY);
    doc.push('\n');

    writeln!(doc, "## Monitoring\n")?;
    doc.push_str(MONITORING);

    Ok(doc)
}
