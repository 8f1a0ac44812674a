//! Parsing and evaluation of multi-parser linguistic annotations
//!
//! This crate reads the annotation-block text format emitted by several
//! constituency/dependency parsers (one numbered block per sentence holding
//! the raw text, token/lemma/POS/UPOS tags, a bracketed constituency tree,
//! and labeled dependency rows) and scores parser output against a
//! gold-standard annotation set: UAS/LAS/root-accuracy/complete-match for
//! dependencies, accuracy/precision/recall/F1 plus mismatch listings for
//! POS and UPOS tags.

#![warn(missing_docs)]

pub mod error;
pub mod eval;
pub mod format;
pub mod record;

// Re-export key types
pub use error::{CoreError, Result};
pub use eval::align::AlignmentPolicy;
pub use eval::dependency::{evaluate_dependencies, DependencyReport};
pub use eval::tagging::{compare_parsers, summarize_tagging, TaggingComparison};
pub use format::{extract_constituency, normalize_constituency, parse_annotations};
pub use record::{DependencyRow, ParsedRecord, SentenceRecord, TokenTag};
