//! Validate command implementation

use anyhow::Result;
use clap::Args;
use std::path::PathBuf;
use treebench_core::ParsedRecord;

use crate::input::FileReader;

/// Arguments for the validate command
#[derive(Debug, Args)]
pub struct ValidateArgs {
    /// Annotation file to check
    #[arg(short, long, value_name = "FILE", required = true)]
    pub input: PathBuf,
}

impl ValidateArgs {
    /// Execute the validate command
    pub fn execute(&self) -> Result<()> {
        super::init_logging(false, 0);

        println!("Validating annotation file: {}", self.input.display());

        let records = FileReader::read_annotations(&self.input)?;
        let malformed: Vec<_> = records
            .iter()
            .filter_map(|record| match record {
                ParsedRecord::Parsed(_) => None,
                ParsedRecord::Malformed { number, reason } => Some((*number, reason.as_str())),
            })
            .collect();

        println!(
            "  {} records, {} well-formed, {} malformed",
            records.len(),
            records.len() - malformed.len(),
            malformed.len()
        );

        if malformed.is_empty() {
            println!("✓ File parses cleanly!");
            Ok(())
        } else {
            println!("✗ Malformed blocks:");
            for (number, reason) in &malformed {
                println!("  sentence {number}: {reason}");
            }
            Err(anyhow::anyhow!(
                "{} malformed blocks in {}",
                malformed.len(),
                self.input.display()
            ))
        }
    }
}
