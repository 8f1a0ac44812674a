//! Extract-trees command implementation
//!
//! The external bracket-scoring tool consumes one normalized constituency
//! tree per line; this command produces that file from an annotation file.

use anyhow::{Context, Result};
use clap::Args;
use std::fs;
use std::path::PathBuf;
use treebench_core::extract_constituency;

use crate::input::FileReader;

/// Arguments for the extract-trees command
#[derive(Debug, Args)]
pub struct ExtractTreesArgs {
    /// Annotation file to read
    #[arg(short, long, value_name = "FILE", required = true)]
    pub input: PathBuf,

    /// Output file for the tree lines
    #[arg(short, long, value_name = "FILE", required = true)]
    pub output: PathBuf,
}

impl ExtractTreesArgs {
    /// Execute the extract-trees command
    pub fn execute(&self) -> Result<()> {
        super::init_logging(false, 0);

        let records = FileReader::read_annotations(&self.input)?;
        let trees = extract_constituency(&records);
        let skipped = records.len() - trees.len();

        let mut content = trees.join("\n");
        if !content.is_empty() {
            content.push('\n');
        }
        fs::write(&self.output, content)
            .with_context(|| format!("Failed to write to {}", self.output.display()))?;

        println!(
            "Saved {} constituency parses to {}",
            trees.len(),
            self.output.display()
        );
        if skipped > 0 {
            println!("Skipped {skipped} malformed records");
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    const SAMPLE: &str = "\
1. The dog ran.
The\\the\\DT\\DET\tdog\\dog\\NN\\NOUN\tran\\run\\VBD\\VERB
(ROOT (S (NP (DT The) (NN dog)) (VP (VBD ran))))
1\tThe\tdet\t2
2\tdog\tnsubj\t3
3\tran\tROOT\t0
2. Broken block
";

    #[test]
    fn test_extract_trees_writes_one_line_per_parsed_record() {
        let temp_dir = TempDir::new().unwrap();
        let input = temp_dir.path().join("annotations.txt");
        let output = temp_dir.path().join("trees.txt");
        fs::write(&input, SAMPLE).unwrap();

        let args = ExtractTreesArgs {
            input,
            output: output.clone(),
        };
        args.execute().unwrap();

        let content = fs::read_to_string(&output).unwrap();
        assert_eq!(
            content,
            "(S (NP (DT The) (NN dog)) (VP (VBD ran)))\n"
        );
    }

    #[test]
    fn test_extract_trees_without_parsed_records_writes_empty_file() {
        let temp_dir = TempDir::new().unwrap();
        let input = temp_dir.path().join("annotations.txt");
        let output = temp_dir.path().join("trees.txt");
        fs::write(&input, "1. A block missing everything else\n").unwrap();

        let args = ExtractTreesArgs {
            input,
            output: output.clone(),
        };
        args.execute().unwrap();

        // No trees, no stray blank line
        assert_eq!(fs::read_to_string(&output).unwrap(), "");
    }

    #[test]
    fn test_extract_trees_missing_input() {
        let temp_dir = TempDir::new().unwrap();
        let args = ExtractTreesArgs {
            input: PathBuf::from("/nonexistent/annotations.txt"),
            output: temp_dir.path().join("trees.txt"),
        };
        assert!(args.execute().is_err());
    }
}
