use crate::output::print_json;
use sparc_core::phase::generate_phase;
use sparc_core::spec::generate_structured_spec;
use sparc_core::validate::validate_input;

/// Print one phase document built from `description`.
pub fn run(name: &str, description: &str, json: bool) -> anyhow::Result<()> {
    let description = validate_input(description).into_sanitized()?;
    let spec = generate_structured_spec(&description)?;
    let file = generate_phase(name, &spec)?;
    if json {
        print_json(&file)
    } else {
        print!("{}", file.content);
        Ok(())
    }
}
