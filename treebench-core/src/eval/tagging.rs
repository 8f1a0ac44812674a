//! POS/UPOS tagging evaluation
//!
//! For each aligned sentence pair the fine-grained POS sequence (tag field
//! 2) and the universal POS sequence (tag field 3) are scored independently:
//! accuracy, weighted precision/recall/F1, and a listing of every position
//! where gold and prediction disagree. Token/tag parsing is lenient, so a
//! token missing one of its four fields only fails here, at the point of
//! use, with the sentence attached.

use crate::error::{CoreError, Result};
use crate::eval::align::{align, AlignmentPolicy};
use crate::eval::metrics::{accuracy, weighted_prf};
use crate::record::{ParsedRecord, SentenceRecord, TokenTag};
use serde::{Deserialize, Serialize};

/// One disagreeing position
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TagMismatch {
    /// 0-based token position
    pub position: usize,
    /// Gold label at the position
    pub gold: String,
    /// Predicted label at the position
    pub predicted: String,
}

/// Tagging metrics and mismatches for one sentence
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TaggingScore {
    /// The gold sentence text
    pub sentence: String,
    /// UPOS accuracy over paired positions
    pub upos_accuracy: f64,
    /// Weighted UPOS precision
    pub upos_precision: f64,
    /// Weighted UPOS recall
    pub upos_recall: f64,
    /// Weighted UPOS F1
    pub upos_f1: f64,
    /// POS accuracy over paired positions
    pub pos_accuracy: f64,
    /// Weighted POS precision
    pub pos_precision: f64,
    /// Weighted POS recall
    pub pos_recall: f64,
    /// Weighted POS F1
    pub pos_f1: f64,
    /// UPOS disagreements, in position order
    pub upos_mismatches: Vec<TagMismatch>,
    /// POS disagreements, in position order
    pub pos_mismatches: Vec<TagMismatch>,
}

/// All per-sentence scores for one parser
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ParserTagging {
    /// Parser name
    pub parser: String,
    /// One score per aligned sentence, in sequence order
    pub sentences: Vec<TaggingScore>,
    /// Sentences dropped by lenient alignment
    pub truncated: usize,
}

/// One row of the flat cross-parser mismatch listing
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MismatchSummary {
    /// Parser name
    pub parser: String,
    /// The gold sentence text
    pub sentence: String,
    /// UPOS disagreements for this parser and sentence
    pub upos_mismatches: Vec<TagMismatch>,
    /// POS disagreements for this parser and sentence
    pub pos_mismatches: Vec<TagMismatch>,
}

/// Per-parser averages over all sentences
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TaggingSummary {
    /// Parser name
    pub parser: String,
    /// Mean UPOS accuracy
    pub upos_accuracy: f64,
    /// Mean weighted UPOS precision
    pub upos_precision: f64,
    /// Mean weighted UPOS recall
    pub upos_recall: f64,
    /// Mean weighted UPOS F1
    pub upos_f1: f64,
    /// Mean POS accuracy
    pub pos_accuracy: f64,
    /// Mean weighted POS precision
    pub pos_precision: f64,
    /// Mean weighted POS recall
    pub pos_recall: f64,
    /// Mean weighted POS F1
    pub pos_f1: f64,
    /// Number of sentences averaged
    pub sentences: usize,
}

/// Output of [`compare_parsers`]
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TaggingComparison {
    /// Per-parser sentence scores
    pub parsers: Vec<ParserTagging>,
    /// Flat mismatch listing across all parsers
    pub mismatches: Vec<MismatchSummary>,
}

/// Score every parser's tag sequences against the gold sequence
pub fn compare_parsers(
    gold: &[ParsedRecord],
    parsers: &[(&str, &[ParsedRecord])],
    policy: AlignmentPolicy,
) -> Result<TaggingComparison> {
    let mut results = Vec::with_capacity(parsers.len());
    let mut mismatches = Vec::new();

    for (name, records) in parsers {
        let aligned = align(gold, records, policy)?;
        tracing::debug!(
            parser = name,
            pairs = aligned.pairs.len(),
            truncated = aligned.truncated,
            "scoring tag sequences"
        );

        let mut sentences = Vec::with_capacity(aligned.pairs.len());
        for (gold_sentence, pred_sentence) in &aligned.pairs {
            let score = score_pair(gold_sentence, pred_sentence)?;
            mismatches.push(MismatchSummary {
                parser: name.to_string(),
                sentence: score.sentence.clone(),
                upos_mismatches: score.upos_mismatches.clone(),
                pos_mismatches: score.pos_mismatches.clone(),
            });
            sentences.push(score);
        }

        results.push(ParserTagging {
            parser: name.to_string(),
            sentences,
            truncated: aligned.truncated,
        });
    }

    Ok(TaggingComparison {
        parsers: results,
        mismatches,
    })
}

/// Average each parser's metrics into one summary row
pub fn summarize_tagging(comparison: &TaggingComparison) -> Result<Vec<TaggingSummary>> {
    comparison
        .parsers
        .iter()
        .map(|parser| {
            if parser.sentences.is_empty() {
                return Err(CoreError::EmptyEvaluation {
                    context: format!("tagging metrics for parser {:?}", parser.parser),
                });
            }
            let count = parser.sentences.len() as f64;
            let mean = |field: fn(&TaggingScore) -> f64| {
                parser.sentences.iter().map(field).sum::<f64>() / count
            };
            Ok(TaggingSummary {
                parser: parser.parser.clone(),
                upos_accuracy: mean(|s| s.upos_accuracy),
                upos_precision: mean(|s| s.upos_precision),
                upos_recall: mean(|s| s.upos_recall),
                upos_f1: mean(|s| s.upos_f1),
                pos_accuracy: mean(|s| s.pos_accuracy),
                pos_precision: mean(|s| s.pos_precision),
                pos_recall: mean(|s| s.pos_recall),
                pos_f1: mean(|s| s.pos_f1),
                sentences: parser.sentences.len(),
            })
        })
        .collect()
}

fn score_pair(gold: &SentenceRecord, prediction: &SentenceRecord) -> Result<TaggingScore> {
    let gold_upos = labels(gold, TokenTag::upos)?;
    let pred_upos = labels(prediction, TokenTag::upos)?;
    let gold_pos = labels(gold, TokenTag::pos)?;
    let pred_pos = labels(prediction, TokenTag::pos)?;

    let upos_prf = weighted_prf(&gold_upos, &pred_upos);
    let pos_prf = weighted_prf(&gold_pos, &pred_pos);

    Ok(TaggingScore {
        sentence: gold.text.clone(),
        upos_accuracy: accuracy(&gold_upos, &pred_upos),
        upos_precision: upos_prf.precision,
        upos_recall: upos_prf.recall,
        upos_f1: upos_prf.f1,
        pos_accuracy: accuracy(&gold_pos, &pred_pos),
        pos_precision: pos_prf.precision,
        pos_recall: pos_prf.recall,
        pos_f1: pos_prf.f1,
        upos_mismatches: collect_mismatches(&gold_upos, &pred_upos),
        pos_mismatches: collect_mismatches(&gold_pos, &pred_pos),
    })
}

/// Extract one tag field from every token, failing on a short token
fn labels<'s>(
    sentence: &'s SentenceRecord,
    field: for<'t> fn(&'t TokenTag) -> Option<&'t str>,
) -> Result<Vec<&'s str>> {
    sentence
        .tokens_tags
        .iter()
        .map(|tag| {
            field(tag).ok_or_else(|| CoreError::MalformedToken {
                sentence: sentence.text.clone(),
                token: tag.raw(),
            })
        })
        .collect()
}

/// Position-wise disagreements over paired positions
fn collect_mismatches(gold: &[&str], predicted: &[&str]) -> Vec<TagMismatch> {
    gold.iter()
        .zip(predicted)
        .enumerate()
        .filter(|(_, (gold_label, pred_label))| gold_label != pred_label)
        .map(|(position, (gold_label, pred_label))| TagMismatch {
            position,
            gold: gold_label.to_string(),
            predicted: pred_label.to_string(),
        })
        .collect()
}
