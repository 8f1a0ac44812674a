//! Multi-class tagging metrics
//!
//! Weighted-average precision/recall/F1 is implemented here explicitly
//! because its tie-break and zero-division behavior is part of the
//! evaluation contract: per-label scores are weighted by that label's
//! support in the gold sequence, and a label with no predicted (or no gold)
//! instances contributes 0 rather than raising.
//!
//! All functions pair positions up to the shorter sequence's length;
//! positions beyond it are dropped, not counted as errors.

use std::collections::BTreeMap;

/// Weighted-average precision, recall, and F1
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Prf {
    /// Support-weighted average of per-label precision
    pub precision: f64,
    /// Support-weighted average of per-label recall
    pub recall: f64,
    /// Support-weighted average of per-label F1
    pub f1: f64,
}

#[derive(Default)]
struct LabelCounts {
    true_positive: usize,
    false_positive: usize,
    support: usize,
}

/// Fraction of paired positions with equal labels, 0 for zero pairs
pub fn accuracy(gold: &[&str], predicted: &[&str]) -> f64 {
    let paired = gold.len().min(predicted.len());
    if paired == 0 {
        return 0.0;
    }
    let matched = gold
        .iter()
        .zip(predicted)
        .filter(|(gold_label, pred_label)| gold_label == pred_label)
        .count();
    matched as f64 / paired as f64
}

/// Weighted multi-class precision/recall/F1 over paired positions
pub fn weighted_prf(gold: &[&str], predicted: &[&str]) -> Prf {
    let paired = gold.len().min(predicted.len());
    if paired == 0 {
        return Prf {
            precision: 0.0,
            recall: 0.0,
            f1: 0.0,
        };
    }

    // BTreeMap keeps label iteration deterministic
    let mut counts: BTreeMap<&str, LabelCounts> = BTreeMap::new();
    for (&gold_label, &pred_label) in gold[..paired].iter().zip(&predicted[..paired]) {
        counts.entry(gold_label).or_default().support += 1;
        if gold_label == pred_label {
            counts.entry(gold_label).or_default().true_positive += 1;
        } else {
            counts.entry(pred_label).or_default().false_positive += 1;
        }
    }

    let mut precision = 0.0;
    let mut recall = 0.0;
    let mut f1 = 0.0;
    for label_counts in counts.values() {
        // Labels never seen in gold have zero support and zero weight
        if label_counts.support == 0 {
            continue;
        }
        let weight = label_counts.support as f64 / paired as f64;

        let predicted_count = label_counts.true_positive + label_counts.false_positive;
        let label_precision = if predicted_count == 0 {
            0.0
        } else {
            label_counts.true_positive as f64 / predicted_count as f64
        };
        let label_recall = label_counts.true_positive as f64 / label_counts.support as f64;
        let label_f1 = if label_precision + label_recall == 0.0 {
            0.0
        } else {
            2.0 * label_precision * label_recall / (label_precision + label_recall)
        };

        precision += weight * label_precision;
        recall += weight * label_recall;
        f1 += weight * label_f1;
    }

    Prf {
        precision,
        recall,
        f1,
    }
}
