use futures::future::join_all;
use sparc_core::phase::SparcFile;
use sparc_core::pipeline::Generation;
use sparc_core::spec::StructuredSpec;
use sparc_core::types::AiProvider;

use crate::provider::ContentGenerator;
use crate::retry::{generate_content_with, RetryPolicy};

pub const NOTES_HEADING: &str = "## Additional Notes";

/// Prompt asking for free-text notes on one phase document.
pub fn prompt_for(file: &SparcFile, spec: &StructuredSpec) -> String {
    let mut prompt = format!(
        "{} notes for {}\n\nProject: {}\n",
        file.phase.title(),
        spec.project_name,
        spec.description
    );
    if !spec.features.is_empty() {
        prompt.push_str(&format!("Features: {}\n", spec.features.join(", ")));
    }
    prompt.push_str(&format!(
        "Suggested stack: {}\n",
        spec.technologies.suggested.join(", ")
    ));
    prompt
}

/// Append generated notes to every phase document of `generation`.
///
/// Phases are elaborated concurrently. A phase whose call fails keeps its
/// template text; the failure is logged and otherwise ignored. Returns the
/// number of phases that received notes.
pub async fn elaborate(
    generation: &mut Generation,
    generator: &dyn ContentGenerator,
    provider: AiProvider,
    policy: &RetryPolicy,
) -> usize {
    let prompts: Vec<String> = generation
        .phases
        .iter()
        .map(|file| prompt_for(file, &generation.spec))
        .collect();

    let results = join_all(
        prompts
            .iter()
            .map(|prompt| generate_content_with(generator, prompt, provider, policy)),
    )
    .await;

    let mut elaborated = 0;
    for (file, result) in generation.phases.iter_mut().zip(results) {
        if !result.success {
            tracing::warn!(
                phase = %file.phase,
                %provider,
                error = result.error.as_deref().unwrap_or("unknown error"),
                "elaboration failed, keeping template text"
            );
            continue;
        }
        let notes = result.content.trim();
        if notes.is_empty() {
            continue;
        }
        if !file.content.ends_with('\n') {
            file.content.push('\n');
        }
        file.content.push_str(&format!("\n{NOTES_HEADING}\n\n{notes}\n"));
        tracing::debug!(phase = %file.phase, "phase elaborated");
        elaborated += 1;
    }
    elaborated
}
