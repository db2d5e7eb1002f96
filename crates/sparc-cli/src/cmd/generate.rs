use crate::output::{print_json, print_table};
use anyhow::Context;
use clap::Args;
use sparc_agent::{elaborate, CannedGenerator, ProviderConfig, RetryPolicy};
use sparc_core::config::Config;
use sparc_core::pipeline::{self, FeatureRequest};
use sparc_core::spec::GenerationOptions;
use sparc_core::types::{AiProvider, Complexity, Framework};
use std::path::PathBuf;

#[derive(Args, Debug)]
pub struct GenerateArgs {
    /// Natural-language feature description
    pub description: String,

    /// Scaffold framework: react, vue, angular, svelte, vanilla
    #[arg(long)]
    pub framework: Option<Framework>,

    /// Requested complexity: low, medium, high, enterprise
    #[arg(long)]
    pub complexity: Option<Complexity>,

    /// Skip test scaffold files
    #[arg(long)]
    pub no_tests: bool,

    /// Skip README and CONTRIBUTING
    #[arg(long)]
    pub no_docs: bool,

    /// Content provider: openai, anthropic, mock
    #[arg(long)]
    pub provider: Option<AiProvider>,

    /// Append generated notes to each phase document
    #[arg(long)]
    pub elaborate: bool,

    /// Write the bundle under this directory
    #[arg(long, short = 'o')]
    pub out: Option<PathBuf>,
}

fn options(config: &Config, args: &GenerateArgs) -> GenerationOptions {
    let defaults = &config.generation;
    GenerationOptions {
        complexity: args.complexity,
        framework: args.framework.unwrap_or(defaults.framework),
        include_tests: defaults.include_tests && !args.no_tests,
        include_docs: defaults.include_docs && !args.no_docs,
        ai_provider: args.provider.unwrap_or(defaults.ai_provider),
    }
}

pub fn run(
    config: &Config,
    providers: ProviderConfig,
    args: GenerateArgs,
    json: bool,
) -> anyhow::Result<()> {
    let request = FeatureRequest {
        options: options(config, &args),
        description: args.description,
    };
    let provider = request.options.ai_provider;

    let mut generation = pipeline::plan(&request)?;
    tracing::info!(project = %generation.spec.project_name, "planned");

    if args.elaborate || config.generation.elaborate {
        let generator = CannedGenerator::new(provider, providers)?;
        let policy = RetryPolicy::from(&config.providers.retry);
        let rt = tokio::runtime::Runtime::new()?;
        rt.block_on(elaborate(&mut generation, &generator, provider, &policy));
    }

    let output = generation.finish()?;

    if let Some(dir) = &args.out {
        pipeline::write_output(&output, dir)
            .with_context(|| format!("failed to write bundle to {}", dir.display()))?;
    }

    if json {
        return print_json(&output);
    }

    let rows = output
        .files
        .iter()
        .map(|f| {
            vec![
                f.name.clone(),
                f.file_type.to_string(),
                f.content.len().to_string(),
            ]
        })
        .collect();
    print_table(&["FILE", "TYPE", "BYTES"], rows);
    println!();
    match &args.out {
        Some(dir) => println!(
            "Wrote {} files to {} in {}ms",
            output.files.len(),
            dir.display(),
            output.generation_time
        ),
        None => println!(
            "Generated {} files in {}ms (use --out DIR to write them)",
            output.files.len(),
            output.generation_time
        ),
    }
    Ok(())
}
