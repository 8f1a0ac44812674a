//! Gold/prediction sequence alignment
//!
//! Evaluation assumes `predictions[i]` annotates the same sentence as
//! `gold[i]`. When the two sequences differ in length the policy decides
//! whether that is an error or a truncation.

use crate::error::{CoreError, Result};
use crate::record::{ParsedRecord, SentenceRecord};
use serde::{Deserialize, Serialize};

/// How to treat gold/prediction sequences of different length
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AlignmentPolicy {
    /// Fail with [`CoreError::AlignmentMismatch`]
    #[default]
    Strict,
    /// Evaluate over the shorter sequence and report how many sentences
    /// were dropped
    Lenient,
}

/// Sentence pairs ready for scoring
#[derive(Debug)]
pub(crate) struct AlignedPairs<'a> {
    /// `(gold, prediction)` pairs in sequence order
    pub pairs: Vec<(&'a SentenceRecord, &'a SentenceRecord)>,
    /// Sentences dropped from the longer sequence under the lenient policy
    pub truncated: usize,
}

/// Pair up two record sequences under the given policy
///
/// A malformed record on either side is fatal here: scoring needs the full
/// record, and skipping one would silently shift the alignment.
pub(crate) fn align<'a>(
    gold: &'a [ParsedRecord],
    predictions: &'a [ParsedRecord],
    policy: AlignmentPolicy,
) -> Result<AlignedPairs<'a>> {
    if gold.len() != predictions.len() && policy == AlignmentPolicy::Strict {
        return Err(CoreError::AlignmentMismatch {
            gold_len: gold.len(),
            pred_len: predictions.len(),
        });
    }

    let paired = gold.len().min(predictions.len());
    let truncated = gold.len().max(predictions.len()) - paired;

    let mut pairs = Vec::with_capacity(paired);
    for (gold_record, pred_record) in gold[..paired].iter().zip(&predictions[..paired]) {
        pairs.push((expect_sentence(gold_record)?, expect_sentence(pred_record)?));
    }
    Ok(AlignedPairs { pairs, truncated })
}

/// Require a well-formed record, surfacing the parse failure otherwise
pub(crate) fn expect_sentence(record: &ParsedRecord) -> Result<&SentenceRecord> {
    match record {
        ParsedRecord::Parsed(sentence) => Ok(sentence),
        ParsedRecord::Malformed { number, reason } => Err(CoreError::MalformedRecord {
            number: *number,
            reason: reason.clone(),
        }),
    }
}
