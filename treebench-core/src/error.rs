//! Core error types

use crate::record::DependencyRow;
use thiserror::Error;

/// Errors raised while consuming parsed records or scoring them
#[derive(Error, Debug)]
pub enum CoreError {
    /// A record needed by the evaluation failed to parse
    #[error("sentence {number} is malformed: {reason}")]
    MalformedRecord {
        /// Ordinal of the record as numbered in the source file
        number: u32,
        /// What part of the block shape was violated
        reason: String,
    },

    /// A token/tag entry does not carry the four backslash-delimited fields
    #[error("malformed token {token:?} in sentence: {sentence}")]
    MalformedToken {
        /// The sentence text the token belongs to
        sentence: String,
        /// The raw token entry as it appeared in the tag line
        token: String,
    },

    /// A dependency token or head index is not an integer literal
    #[error("non-integer dependency index {value:?} in sentence: {sentence}")]
    IndexCoercion {
        /// The sentence text the dependency belongs to
        sentence: String,
        /// The offending index field
        value: String,
        /// The full raw dependency list, kept for diagnosis
        dependencies: Vec<DependencyRow>,
    },

    /// Gold and prediction sequences differ in length under strict alignment
    #[error("gold has {gold_len} sentences but prediction has {pred_len}")]
    AlignmentMismatch {
        /// Number of gold sentences
        gold_len: usize,
        /// Number of predicted sentences
        pred_len: usize,
    },

    /// An aggregate was requested over zero sentences
    #[error("cannot aggregate {context} over zero sentences")]
    EmptyEvaluation {
        /// Which aggregate was being computed
        context: String,
    },
}

/// Result type for core operations
pub type Result<T> = std::result::Result<T, CoreError>;
