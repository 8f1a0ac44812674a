//! Dependency attachment scoring
//!
//! Per sentence, gold and predicted dependency rows are reduced to a map
//! from `(token_index, head_index)` to the relation label, with both index
//! fields coerced to integers (`"03"` and `"3"` compare equal; a duplicate
//! key silently overwrites). UAS and LAS are computed over the gold map's
//! size, root accuracy over the first `ROOT`-labeled edge on each side, and
//! complete match as map equality.

use std::collections::BTreeMap;

use crate::error::{CoreError, Result};
use crate::eval::align::{align, AlignmentPolicy};
use crate::record::{ParsedRecord, SentenceRecord};
use serde::{Deserialize, Serialize};

/// Attachment metrics for one sentence
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DependencyScore {
    /// The gold sentence text
    pub sentence: String,
    /// Unlabeled attachment score, 0 when the gold sentence has no edges
    pub uas: f64,
    /// Labeled attachment score, 0 when the gold sentence has no edges
    pub las: f64,
    /// 1.0 when gold and prediction agree on the `ROOT`-labeled token
    pub root_accuracy: f64,
    /// 1.0 when the dependency maps are identical
    pub complete_match: f64,
}

/// Unweighted means over all scored sentences
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DependencySummary {
    /// Mean UAS
    pub average_uas: f64,
    /// Mean LAS
    pub average_las: f64,
    /// Mean root accuracy
    pub root_accuracy: f64,
    /// Fraction of sentences matched completely
    pub complete_match_rate: f64,
    /// Number of sentences scored
    pub sentences: usize,
    /// Sentences dropped by lenient alignment
    pub truncated: usize,
}

/// Per-sentence rows plus the aggregate summary
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DependencyReport {
    /// One row per aligned sentence, in sequence order
    pub sentences: Vec<DependencyScore>,
    /// Unweighted means across all rows
    pub summary: DependencySummary,
}

/// Score a prediction sequence against the gold sequence
pub fn evaluate_dependencies(
    gold: &[ParsedRecord],
    predictions: &[ParsedRecord],
    policy: AlignmentPolicy,
) -> Result<DependencyReport> {
    let aligned = align(gold, predictions, policy)?;
    tracing::debug!(
        pairs = aligned.pairs.len(),
        truncated = aligned.truncated,
        "scoring dependency attachments"
    );

    let mut sentences = Vec::with_capacity(aligned.pairs.len());
    for (gold_sentence, pred_sentence) in &aligned.pairs {
        sentences.push(score_pair(gold_sentence, pred_sentence)?);
    }

    let summary = summarize(&sentences, aligned.truncated)?;
    Ok(DependencyReport { sentences, summary })
}

fn score_pair(gold: &SentenceRecord, prediction: &SentenceRecord) -> Result<DependencyScore> {
    let gold_deps = dependency_map(gold)?;
    let pred_deps = dependency_map(prediction)?;

    let total = gold_deps.len();
    let uas_hits = gold_deps
        .keys()
        .filter(|key| pred_deps.contains_key(*key))
        .count();
    let las_hits = gold_deps
        .iter()
        .filter(|(key, label)| pred_deps.get(*key) == Some(*label))
        .count();

    let root_match = root_token(gold)? == root_token(prediction)?;

    Ok(DependencyScore {
        sentence: gold.text.clone(),
        uas: ratio(uas_hits, total),
        las: ratio(las_hits, total),
        root_accuracy: if root_match { 1.0 } else { 0.0 },
        complete_match: if gold_deps == pred_deps { 1.0 } else { 0.0 },
    })
}

/// `(token_index, head_index) -> relation`, integer keys, later rows win
fn dependency_map(sentence: &SentenceRecord) -> Result<BTreeMap<(i64, i64), &str>> {
    let mut map = BTreeMap::new();
    for row in &sentence.dependency_parse {
        let index = coerce_index(&row.index, sentence)?;
        let head = coerce_index(&row.head, sentence)?;
        map.insert((index, head), row.relation.as_str());
    }
    Ok(map)
}

/// Token index of the first edge labeled exactly `ROOT`, if any
fn root_token(sentence: &SentenceRecord) -> Result<Option<i64>> {
    sentence
        .dependency_parse
        .iter()
        .find(|row| row.relation == "ROOT")
        .map(|row| coerce_index(&row.index, sentence))
        .transpose()
}

fn coerce_index(value: &str, sentence: &SentenceRecord) -> Result<i64> {
    value
        .trim()
        .parse()
        .map_err(|_| CoreError::IndexCoercion {
            sentence: sentence.text.clone(),
            value: value.to_string(),
            dependencies: sentence.dependency_parse.clone(),
        })
}

fn ratio(hits: usize, total: usize) -> f64 {
    if total == 0 {
        0.0
    } else {
        hits as f64 / total as f64
    }
}

fn summarize(sentences: &[DependencyScore], truncated: usize) -> Result<DependencySummary> {
    if sentences.is_empty() {
        return Err(CoreError::EmptyEvaluation {
            context: "dependency metrics".to_string(),
        });
    }
    let count = sentences.len() as f64;
    Ok(DependencySummary {
        average_uas: sentences.iter().map(|s| s.uas).sum::<f64>() / count,
        average_las: sentences.iter().map(|s| s.las).sum::<f64>() / count,
        root_accuracy: sentences.iter().map(|s| s.root_accuracy).sum::<f64>() / count,
        complete_match_rate: sentences.iter().map(|s| s.complete_match).sum::<f64>() / count,
        sentences: sentences.len(),
        truncated,
    })
}
