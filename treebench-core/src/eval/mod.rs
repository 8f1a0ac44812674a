//! Evaluation engine
//!
//! Scores index-aligned prediction sequences against a gold sequence:
//! dependency attachment metrics (UAS, LAS, root accuracy, complete match)
//! and POS/UPOS tagging metrics (accuracy, weighted precision/recall/F1,
//! mismatch listings). Both families share the alignment policy in
//! [`align`] and the unweighted per-sentence averaging rule: every sentence
//! counts equally regardless of token count.

pub mod align;
pub mod dependency;
pub mod metrics;
pub mod tagging;

pub use align::AlignmentPolicy;
pub use dependency::{evaluate_dependencies, DependencyReport, DependencyScore, DependencySummary};
pub use metrics::{accuracy, weighted_prf, Prf};
pub use tagging::{
    compare_parsers, summarize_tagging, MismatchSummary, ParserTagging, TagMismatch,
    TaggingComparison, TaggingScore, TaggingSummary,
};
