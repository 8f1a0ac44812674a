//! File reading utilities

use anyhow::{Context, Result};
use std::fs;
use std::path::Path;
use treebench_core::{parse_annotations, ParsedRecord};

/// File reader for annotation files
pub struct FileReader;

impl FileReader {
    /// Read a file as UTF-8 text
    pub fn read_text(path: &Path) -> Result<String> {
        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read file: {}", path.display()))?;

        Ok(content)
    }

    /// Read and parse an annotation file into records
    pub fn read_annotations(path: &Path) -> Result<Vec<ParsedRecord>> {
        let content = Self::read_text(path)?;
        let records = parse_annotations(&content);
        tracing::info!(
            "parsed {} records from {} ({} malformed)",
            records.len(),
            path.display(),
            records.iter().filter(|r| !r.is_parsed()).count()
        );
        Ok(records)
    }
}
