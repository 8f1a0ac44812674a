//! CLI command implementations

use anyhow::Result;
use clap::Subcommand;
use tracing_subscriber::EnvFilter;

pub mod evaluate;
pub mod extract_trees;
pub mod generate_config;
pub mod validate;

/// Install the tracing subscriber that renders library diagnostics.
///
/// `RUST_LOG` overrides the verbosity flags when set. Writes to stderr so
/// report output on stdout stays clean.
pub(crate) fn init_logging(quiet: bool, verbose: u8) {
    if quiet {
        return;
    }
    let level = match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init();
}

/// Available CLI commands
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Score parser annotation files against a gold standard
    Evaluate(evaluate::EvaluateArgs),

    /// Write normalized constituency trees for external bracket scoring
    ExtractTrees(extract_trees::ExtractTreesArgs),

    /// Check that an annotation file parses cleanly
    Validate(validate::ValidateArgs),

    /// Generate a default configuration file
    GenerateConfig(generate_config::GenerateConfigArgs),
}

impl Commands {
    /// Dispatch to the selected command
    pub fn execute(&self) -> Result<()> {
        match self {
            Commands::Evaluate(args) => args.execute(),
            Commands::ExtractTrees(args) => args.execute(),
            Commands::Validate(args) => args.execute(),
            Commands::GenerateConfig(args) => args.execute(),
        }
    }
}
