mod cmd;
mod output;
mod root;

use clap::{Parser, Subcommand};
use cmd::{config::ConfigSubcommand, generate::GenerateArgs};
use root::KeyOverrides;
use std::path::PathBuf;

#[derive(Parser)]
#[command(
    name = "sparc",
    about = "Turn a feature description into SPARC documents and a starter scaffold",
    version,
    propagate_version = true
)]
struct Cli {
    /// Config file (default: nearest sparc.yaml, else defaults)
    #[arg(long, global = true, env = "SPARC_CONFIG")]
    config: Option<PathBuf>,

    /// Output as JSON
    #[arg(long, global = true, short = 'j')]
    json: bool,

    /// OpenAI API key
    #[arg(long, global = true, env = "OPENAI_API_KEY", hide_env_values = true)]
    openai_api_key: Option<String>,

    /// Anthropic API key
    #[arg(long, global = true, env = "ANTHROPIC_API_KEY", hide_env_values = true)]
    anthropic_api_key: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Run the full pipeline and emit the document bundle
    Generate(GenerateArgs),

    /// Check a description against the input rules
    Validate { text: String },

    /// Show features, technologies, requirements and constraints found in text
    Extract { text: String },

    /// Show the project type and complexity for a description
    Categorize { text: String },

    /// Build the structured spec for a description
    Spec { text: String },

    /// Print a single phase document
    Phase {
        /// specification, pseudocode, architecture, refinement or completion
        name: String,
        description: String,
    },

    /// List content providers and whether they are configured
    Providers,

    /// Run the HTTP API
    Serve {
        /// Port to listen on (default: server.port from config)
        #[arg(long)]
        port: Option<u16>,
    },

    /// Inspect the configuration
    Config {
        #[command(subcommand)]
        subcommand: ConfigSubcommand,
    },
}

fn main() {
    let cli = Cli::parse();

    let default_level = match &cli.command {
        Commands::Serve { .. } => tracing::Level::INFO,
        _ => tracing::Level::WARN,
    };

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env().add_directive(default_level.into()),
        )
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    if let Err(e) = run(cli) {
        // Print the full error chain (anyhow's alternate Display)
        eprintln!("error: {e:#}");
        std::process::exit(1);
    }
}

fn run(cli: Cli) -> anyhow::Result<()> {
    let cwd = std::env::current_dir()?;
    let config_path = root::resolve_config_path(cli.config.as_deref(), &cwd);
    let config = root::load_config(
        &config_path,
        KeyOverrides {
            openai: cli.openai_api_key,
            anthropic: cli.anthropic_api_key,
        },
    )?;
    let providers = root::provider_config(&config);
    let json = cli.json;

    match cli.command {
        Commands::Generate(args) => cmd::generate::run(&config, providers, args, json),
        Commands::Validate { text } => cmd::analyze::validate(&text, json),
        Commands::Extract { text } => cmd::analyze::extract(&text, json),
        Commands::Categorize { text } => cmd::analyze::categorize(&text, json),
        Commands::Spec { text } => cmd::analyze::spec(&text, json),
        Commands::Phase { name, description } => cmd::phase::run(&name, &description, json),
        Commands::Providers => {
            cmd::providers::run(&providers, config.generation.ai_provider, json)
        }
        Commands::Serve { port } => cmd::serve::run(config, providers, port),
        Commands::Config { subcommand } => {
            cmd::config::run(&config_path, &config, subcommand, json)
        }
    }
}
