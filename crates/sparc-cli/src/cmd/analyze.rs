use crate::output::{print_json, print_list};
use sparc_core::classifier::categorize_project;
use sparc_core::extract::extract_entities;
use sparc_core::spec::generate_structured_spec;
use sparc_core::validate::validate_input;

// ---------------------------------------------------------------------------
// validate
// ---------------------------------------------------------------------------

pub fn validate(text: &str, json: bool) -> anyhow::Result<()> {
    let result = validate_input(text);

    if json {
        print_json(&result)?;
    } else if result.is_valid {
        println!("Input is valid.");
    } else {
        for e in &result.errors {
            println!("[error] {e}");
        }
    }

    if !result.is_valid {
        anyhow::bail!("input failed validation");
    }
    Ok(())
}

// ---------------------------------------------------------------------------
// extract
// ---------------------------------------------------------------------------

pub fn extract(text: &str, json: bool) -> anyhow::Result<()> {
    let entities = extract_entities(text);
    if json {
        return print_json(&entities);
    }
    print_list("Features", &entities.features);
    print_list("Technologies", &entities.technologies);
    print_list("Requirements", &entities.requirements);
    print_list("Constraints", &entities.constraints);
    Ok(())
}

// ---------------------------------------------------------------------------
// categorize
// ---------------------------------------------------------------------------

pub fn categorize(text: &str, json: bool) -> anyhow::Result<()> {
    let category = categorize_project(text);
    if json {
        return print_json(&category);
    }
    println!("Type:       {}", category.project_type);
    println!("Complexity: {}", category.complexity);
    Ok(())
}

// ---------------------------------------------------------------------------
// spec
// ---------------------------------------------------------------------------

pub fn spec(text: &str, json: bool) -> anyhow::Result<()> {
    let text = validate_input(text).into_sanitized()?;
    let spec = generate_structured_spec(&text)?;
    if json {
        return print_json(&spec);
    }
    println!("{}", spec.project_name);
    println!("{}\n", spec.description);
    println!(
        "Category: {} ({})",
        spec.category.project_type, spec.category.complexity
    );
    print_list("Features", &spec.features);
    print_list("Stack", &spec.technologies.suggested);
    print_list("Alternatives", &spec.technologies.alternatives);
    print_list("Requirements", &spec.requirements);
    print_list("Constraints", &spec.constraints);
    println!(
        "Timeline: {} weeks ({})",
        spec.estimated_timeline.total_weeks,
        spec.estimated_timeline.phases.join(" → ")
    );
    Ok(())
}
