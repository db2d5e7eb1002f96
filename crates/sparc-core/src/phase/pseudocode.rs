use super::heading;
use crate::error::Result;
use crate::spec::StructuredSpec;
use crate::types::Phase;
use std::fmt::Write;

const DATA_STRUCTURES: &str = "\
```
STRUCTURE User
    id: UUID
    email: STRING
    passwordHash: STRING
    createdAt: TIMESTAMP
END STRUCTURE

STRUCTURE Request
    userId: UUID
    payload: MAP
    receivedAt: TIMESTAMP
END STRUCTURE

STRUCTURE Response
    status: INTEGER
    data: MAP
    errors: LIST OF STRING
END STRUCTURE
```
";

const ERROR_HANDLING: &str = "\
```
FUNCTION handleError(error, context)
    LOG error WITH context
    IF error IS ValidationError THEN
        RETURN Response(400, errors: error.messages)
    ELSE IF error IS AuthenticationError THEN
        RETURN Response(401, errors: [\"Unauthorized\"])
    ELSE IF error IS NotFoundError THEN
        RETURN Response(404, errors: [\"Not found\"])
    ELSE
        NOTIFY monitoring WITH error
        RETURN Response(500, errors: [\"Internal error\"])
    END IF
END FUNCTION
```
";

/// `handle` followed by the feature phrase with all whitespace removed.
pub(crate) fn handler_name(feature: &str) -> String {
    let mut name = String::from("handle");
    name.extend(feature.chars().filter(|c| !c.is_whitespace()));
    name
}

pub(super) fn render(spec: &StructuredSpec) -> Result<String> {
    let mut doc = String::new();

    writeln!(doc, "{}\n", heading(Phase::Pseudocode, spec))?;

    writeln!(doc, "## Overview\n")?;
    writeln!(
        doc,
        "High-level logic for {} feature(s) of the {}.\n",
        spec.features.len(),
        spec.project_name
    )?;

    writeln!(doc, "## Core Functions\n")?;
    if spec.features.is_empty() {
        writeln!(doc, "No feature-specific functions were derived.\n")?;
    }
    for feature in &spec.features {
        let name = handler_name(feature);
        writeln!(doc, "### {feature}\n")?;
        writeln!(doc, "```")?;
        writeln!(doc, "FUNCTION {name}(request)")?;
        writeln!(doc, "    VALIDATE request.payload")?;
        writeln!(doc, "    IF validation fails THEN")?;
        writeln!(doc, "        RETURN error(\"Invalid input for {feature}\")")?;
        writeln!(doc, "    END IF")?;
        writeln!(doc, "    result = PROCESS {feature} WITH request.payload")?;
        writeln!(doc, "    SAVE result")?;
        writeln!(doc, "    RETURN success(result)")?;
        writeln!(doc, "END FUNCTION")?;
        writeln!(doc, "```\n")?;
    }

    writeln!(doc, "## Data Structures\n")?;
    doc.push_str(DATA_STRUCTURES);
    doc.push('\n');

    writeln!(doc, "## Error Handling\n")?;
    doc.push_str(ERROR_HANDLING);

    Ok(doc)
}
