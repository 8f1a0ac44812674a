//! Report formatting module

use anyhow::Result;
use serde::Serialize;
use treebench_core::eval::{DependencyReport, MismatchSummary, ParserTagging, TaggingSummary};

/// Dependency results for one parser
#[derive(Debug, Serialize)]
pub struct ParserDependencies {
    /// Parser name
    pub parser: String,
    /// Per-sentence rows and summary from the core engine
    #[serde(flatten)]
    pub report: DependencyReport,
}

/// Tagging results across all parsers
#[derive(Debug, Serialize)]
pub struct TaggingSection {
    /// Per-parser sentence scores
    pub parsers: Vec<ParserTagging>,
    /// One summary row per parser
    pub summaries: Vec<TaggingSummary>,
    /// Flat mismatch listing across parsers
    pub mismatches: Vec<MismatchSummary>,
}

/// Everything the evaluate command produced, ready to render
#[derive(Debug, Serialize)]
pub struct EvaluationReport {
    /// Gold file the predictions were scored against
    pub gold: String,
    /// Dependency attachment results, one entry per parser
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub dependencies: Vec<ParserDependencies>,
    /// POS/UPOS tagging results
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tagging: Option<TaggingSection>,
}

/// Trait for report formatters
pub trait ReportFormatter {
    /// Render a full evaluation report
    fn write_report(&mut self, report: &EvaluationReport) -> Result<()>;
}

pub mod json;
pub mod text;

pub use json::JsonFormatter;
pub use text::TextFormatter;
