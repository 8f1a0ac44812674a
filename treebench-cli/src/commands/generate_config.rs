//! Generate-config command implementation

use anyhow::{Context, Result};
use clap::Args;
use std::fs;
use std::path::PathBuf;

use crate::config::CliConfig;

/// Arguments for the generate-config command
#[derive(Debug, Args)]
pub struct GenerateConfigArgs {
    /// Output file path
    #[arg(short, long, value_name = "FILE", required = true)]
    pub output: PathBuf,
}

impl GenerateConfigArgs {
    /// Execute the generate-config command
    pub fn execute(&self) -> Result<()> {
        let config = CliConfig::default();
        let content = config.to_toml()?;

        fs::write(&self.output, content)
            .with_context(|| format!("Failed to write to {}", self.output.display()))?;

        println!("✓ Default configuration written to {}", self.output.display());
        println!();
        println!("Use it with:");
        println!(
            "   treebench evaluate -g gold.txt -p parser=output.txt -c {}",
            self.output.display()
        );
        Ok(())
    }
}
