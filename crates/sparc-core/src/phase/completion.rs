use super::heading;
use crate::error::Result;
use crate::spec::StructuredSpec;
use crate::types::Phase;
use std::fmt::Write;

const DEPLOYMENT: &str = "\
- Blue-green deployment with automated rollback on failed health checks
- Database migrations applied before traffic switch
- Feature flags for incomplete functionality
";

const CI_CD: &str = "\
1. Lint and type-check on every push
2. Run unit and integration tests
3. Build and tag container images
4. Deploy to staging and run end-to-end tests
5. Promote to production after approval
";

const INFRASTRUCTURE: &str = "\
- Infrastructure defined as code and reviewed like application code
- Separate staging and production environments
- Automated daily backups with tested restore
- Centralised logging and metrics
";

const HANDOVER: &str = "\
- Architecture and operations runbooks published
- On-call rotation and escalation path agreed
- Credentials transferred to the owning team's secret store
- Post-launch review scheduled two weeks after release
";

pub(super) fn render(spec: &StructuredSpec) -> Result<String> {
    let mut doc = String::new();

    writeln!(doc, "{}\n", heading(Phase::Completion, spec))?;

    writeln!(doc, "## Deployment Strategy\n")?;
    doc.push_str(DEPLOYMENT);
    doc.push('\n');

    writeln!(doc, "## CI/CD Pipeline\n")?;
    doc.push_str(CI_CD);
    doc.push('\n');

    writeln!(doc, "## Infrastructure\n")?;
    doc.push_str(INFRASTRUCTURE);
    doc.push('\n');

    writeln!(doc, "## Acceptance Criteria Verification\n")?;
    if spec.acceptance_criteria.is_empty() {
        writeln!(doc, "1. [x] Application deployed and reachable")?;
    }
    for (i, criterion) in spec.acceptance_criteria.iter().enumerate() {
        writeln!(doc, "{}. [x] {criterion}", i + 1)?;
    }
    doc.push('\n');

    writeln!(
        doc,
        "**Delivered in:** {} weeks (estimated)\n",
        spec.estimated_timeline.total_weeks
    )?;

    writeln!(doc, "## Handover\n")?;
    doc.push_str(HANDOVER);

    Ok(doc)
}
