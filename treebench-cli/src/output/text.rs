//! Plain text report formatter

use super::{EvaluationReport, ReportFormatter};
use anyhow::Result;
use std::io::Write;
use treebench_core::eval::TagMismatch;

/// Plain text formatter - renders human-readable metric tables
pub struct TextFormatter<W: Write> {
    writer: W,
}

impl<W: Write> TextFormatter<W> {
    /// Create a new text formatter
    pub fn new(writer: W) -> Self {
        Self { writer }
    }
}

impl<W: Write> ReportFormatter for TextFormatter<W> {
    fn write_report(&mut self, report: &EvaluationReport) -> Result<()> {
        writeln!(self.writer, "Evaluation against {}", report.gold)?;

        for entry in &report.dependencies {
            writeln!(self.writer)?;
            writeln!(self.writer, "== Dependency scores: {} ==", entry.parser)?;
            for score in &entry.report.sentences {
                writeln!(
                    self.writer,
                    "  UAS {:.4}  LAS {:.4}  Root {:.0}  Exact {:.0}  | {}",
                    score.uas, score.las, score.root_accuracy, score.complete_match, score.sentence
                )?;
            }
            let summary = &entry.report.summary;
            writeln!(
                self.writer,
                "  Summary over {} sentences: UAS {:.4}  LAS {:.4}  Root acc {:.4}  Exact match {:.4}",
                summary.sentences,
                summary.average_uas,
                summary.average_las,
                summary.root_accuracy,
                summary.complete_match_rate
            )?;
            if summary.truncated > 0 {
                writeln!(
                    self.writer,
                    "  ({} sentences dropped by lenient alignment)",
                    summary.truncated
                )?;
            }
        }

        if let Some(tagging) = &report.tagging {
            writeln!(self.writer)?;
            writeln!(self.writer, "== POS/UPOS summary ==")?;
            for summary in &tagging.summaries {
                writeln!(
                    self.writer,
                    "  {}: UPOS acc {:.4} P {:.4} R {:.4} F1 {:.4} | POS acc {:.4} P {:.4} R {:.4} F1 {:.4}",
                    summary.parser,
                    summary.upos_accuracy,
                    summary.upos_precision,
                    summary.upos_recall,
                    summary.upos_f1,
                    summary.pos_accuracy,
                    summary.pos_precision,
                    summary.pos_recall,
                    summary.pos_f1
                )?;
            }

            let with_errors: Vec<_> = tagging
                .mismatches
                .iter()
                .filter(|m| !m.upos_mismatches.is_empty() || !m.pos_mismatches.is_empty())
                .collect();
            if !with_errors.is_empty() {
                writeln!(self.writer)?;
                writeln!(self.writer, "== Tag mismatches ==")?;
                for entry in with_errors {
                    writeln!(self.writer, "  [{}] {}", entry.parser, entry.sentence)?;
                    write_mismatches(&mut self.writer, "UPOS", &entry.upos_mismatches)?;
                    write_mismatches(&mut self.writer, "POS", &entry.pos_mismatches)?;
                }
            }
        }

        self.writer.flush()?;
        Ok(())
    }
}

fn write_mismatches<W: Write>(writer: &mut W, family: &str, mismatches: &[TagMismatch]) -> Result<()> {
    for mismatch in mismatches {
        writeln!(
            writer,
            "    {} @{}: {} -> {}",
            family, mismatch.position, mismatch.gold, mismatch.predicted
        )?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::output::{ParserDependencies, TaggingSection};
    use treebench_core::eval::{DependencyReport, DependencyScore, DependencySummary};

    #[test]
    fn test_text_output_contains_summary() {
        let report = EvaluationReport {
            gold: "gold.txt".to_string(),
            dependencies: vec![ParserDependencies {
                parser: "berkeley".to_string(),
                report: DependencyReport {
                    sentences: vec![DependencyScore {
                        sentence: "The dog ran.".to_string(),
                        uas: 1.0,
                        las: 0.5,
                        root_accuracy: 1.0,
                        complete_match: 0.0,
                    }],
                    summary: DependencySummary {
                        average_uas: 1.0,
                        average_las: 0.5,
                        root_accuracy: 1.0,
                        complete_match_rate: 0.0,
                        sentences: 1,
                        truncated: 0,
                    },
                },
            }],
            tagging: None,
        };

        let mut buffer = Vec::new();
        TextFormatter::new(&mut buffer).write_report(&report).unwrap();

        let text = String::from_utf8(buffer).unwrap();
        assert!(text.contains("Dependency scores: berkeley"));
        assert!(text.contains("UAS 1.0000"));
        assert!(text.contains("LAS 0.5000"));
        assert!(text.contains("The dog ran."));
        assert!(text.contains("Summary over 1 sentences"));
    }

    #[test]
    fn test_text_output_mismatch_listing() {
        let report = EvaluationReport {
            gold: "gold.txt".to_string(),
            dependencies: vec![],
            tagging: Some(TaggingSection {
                parsers: vec![],
                summaries: vec![],
                mismatches: vec![treebench_core::eval::MismatchSummary {
                    parser: "corenlp".to_string(),
                    sentence: "the dog".to_string(),
                    upos_mismatches: vec![TagMismatch {
                        position: 1,
                        gold: "NOUN".to_string(),
                        predicted: "VERB".to_string(),
                    }],
                    pos_mismatches: vec![],
                }],
            }),
        };

        let mut buffer = Vec::new();
        TextFormatter::new(&mut buffer).write_report(&report).unwrap();

        let text = String::from_utf8(buffer).unwrap();
        assert!(text.contains("[corenlp] the dog"));
        assert!(text.contains("UPOS @1: NOUN -> VERB"));
    }
}
