//! har2case CLI entrypoint
//! Parses command-line arguments and dispatches to the core generator.

// Internal imports (std, crate)
use std::path::PathBuf;

// External imports (alphabetized)
use anyhow::Context;
use clap::Parser;
use har2case_core::{Config, EntryMode, TemplateKind};

#[derive(Parser)]
#[command(name = "har2case")]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(clap::Subcommand, Debug)]
pub enum Commands {
    /// Generate a test case from a HAR capture
    Generate {
        /// Path to the HAR file
        ///
        /// Optional when --config names one
        har_path: Option<PathBuf>,
        /// YAML or TOML config file supplying defaults for the other options
        #[arg(long)]
        config: Option<PathBuf>,
        /// Output file (default: the HAR path with its extension replaced)
        #[arg(long)]
        output: Option<PathBuf>,
        /// Template to use for code generation (seldom, custom)
        #[arg(long)]
        template_kind: Option<String>,
        /// Tera template file (only used with --template-kind=custom)
        #[arg(long)]
        template: Option<PathBuf>,
        /// Which entries to render: last (default) or all
        #[arg(long)]
        entry_mode: Option<String>,
    },
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize logging
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();
    let cli = Cli::parse();
    match &cli.command {
        Commands::Generate {
            har_path,
            config,
            output,
            template_kind,
            template,
            entry_mode,
        } => {
            // Start from the config file, if any
            let file_config = match config {
                Some(path) => Some(Config::from_file(path).await.with_context(|| {
                    format!("Failed to load config from {}", path.display())
                })?),
                None => None,
            };

            // Explicit arguments override the config file
            let mut run_config = match (har_path, file_config) {
                (Some(path), Some(mut cfg)) => {
                    cfg.har_path = path.to_string_lossy().into_owned();
                    cfg
                }
                (Some(path), None) => Config::new(path.to_string_lossy()),
                (None, Some(cfg)) => cfg,
                (None, None) => {
                    anyhow::bail!("A HAR file is required (positional or via --config)")
                }
            };

            if let Some(output) = output {
                run_config.output_path = Some(output.to_string_lossy().into_owned());
            }
            if let Some(kind) = template_kind {
                run_config.template_kind = kind
                    .parse::<TemplateKind>()
                    .map_err(|e| anyhow::anyhow!("Invalid template '{kind}': {e}"))?;
            }
            if let Some(template) = template {
                run_config.template_path = Some(template.to_string_lossy().into_owned());
            }
            if let Some(mode) = entry_mode {
                run_config.entry_mode = mode
                    .parse::<EntryMode>()
                    .map_err(|e| anyhow::anyhow!("Invalid entry mode '{mode}': {e}"))?;
            }

            tracing::debug!(
                "Generating with template: {}, entry mode: {}, har: {}",
                run_config.template_kind,
                run_config.entry_mode,
                run_config.har_path
            );

            let written = har2case_core::generate(&run_config)
                .await
                .with_context(|| format!("Failed to generate test case from {}", run_config.har_path))?;

            println!("Generated test case: {}", written.display());
        }
    }
    Ok(())
}
