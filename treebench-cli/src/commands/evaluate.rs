//! Evaluate command implementation

use anyhow::{Context, Result};
use clap::Args;
use std::fs::File;
use std::io::{self, Write};
use std::path::{Path, PathBuf};
use treebench_core::{
    compare_parsers, evaluate_dependencies, summarize_tagging, AlignmentPolicy, ParsedRecord,
};

use crate::config::CliConfig;
use crate::error::CliError;
use crate::input::FileReader;
use crate::output::{
    EvaluationReport, JsonFormatter, ParserDependencies, ReportFormatter, TaggingSection,
    TextFormatter,
};

/// Arguments for the evaluate command
#[derive(Debug, Args)]
pub struct EvaluateArgs {
    /// Gold standard annotation file
    #[arg(short, long, value_name = "FILE", required = true)]
    pub gold: PathBuf,

    /// Prediction files, each NAME=FILE (bare FILE uses the file stem as name)
    #[arg(short, long, value_name = "NAME=FILE", required = true)]
    pub predictions: Vec<String>,

    /// Which metric families to compute
    #[arg(short, long, value_enum, default_value = "all")]
    pub metrics: MetricSet,

    /// Output format
    #[arg(short, long, value_enum)]
    pub format: Option<OutputFormat>,

    /// Output file (default: stdout)
    #[arg(short, long, value_name = "FILE")]
    pub output: Option<PathBuf>,

    /// How to treat gold/prediction length mismatches (overrides config)
    #[arg(short, long, value_enum)]
    pub alignment: Option<AlignmentArg>,

    /// Configuration file
    #[arg(short, long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Suppress log output
    #[arg(short, long)]
    pub quiet: bool,

    /// Increase verbosity
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,
}

/// Which metric families to compute
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum MetricSet {
    /// Dependency attachment metrics only
    Dependencies,
    /// POS/UPOS tagging metrics only
    Tags,
    /// Both families
    All,
}

/// Supported output formats
#[derive(Debug, Clone, Copy, clap::ValueEnum)]
pub enum OutputFormat {
    /// Human-readable metric tables
    Text,
    /// Full report structure as JSON
    Json,
}

/// Alignment policy flag
#[derive(Debug, Clone, Copy, clap::ValueEnum)]
pub enum AlignmentArg {
    /// Fail when gold and prediction sequence lengths differ
    Strict,
    /// Truncate to the shorter sequence and report the drop
    Lenient,
}

impl From<AlignmentArg> for AlignmentPolicy {
    fn from(arg: AlignmentArg) -> Self {
        match arg {
            AlignmentArg::Strict => AlignmentPolicy::Strict,
            AlignmentArg::Lenient => AlignmentPolicy::Lenient,
        }
    }
}

impl EvaluateArgs {
    /// Execute the evaluate command
    pub fn execute(&self) -> Result<()> {
        super::init_logging(self.quiet, self.verbose);

        let config = match &self.config {
            Some(path) => CliConfig::load(path)?,
            None => CliConfig::default(),
        };
        let policy = self
            .alignment
            .map(AlignmentPolicy::from)
            .unwrap_or(config.evaluation.alignment);

        tracing::info!("evaluating against gold standard {}", self.gold.display());
        let gold = FileReader::read_annotations(&self.gold)?;

        let mut predictions = Vec::with_capacity(self.predictions.len());
        for spec in &self.predictions {
            let (name, path) = parse_prediction_spec(spec)?;
            let records = FileReader::read_annotations(&path)?;
            predictions.push((name, records));
        }

        let report = build_report(&self.gold, &gold, &predictions, self.metrics, policy)?;

        let format = self.resolve_format(&config)?;
        let mut writer: Box<dyn Write> = match &self.output {
            Some(path) => Box::new(File::create(path).with_context(|| {
                format!("Failed to create output file: {}", path.display())
            })?),
            None => Box::new(io::stdout()),
        };
        match format {
            OutputFormat::Text => TextFormatter::new(&mut writer).write_report(&report)?,
            OutputFormat::Json => {
                JsonFormatter::new(&mut writer, config.output.pretty_json).write_report(&report)?
            }
        }
        Ok(())
    }

    fn resolve_format(&self, config: &CliConfig) -> Result<OutputFormat> {
        if let Some(format) = self.format {
            return Ok(format);
        }
        match config.output.default_format.as_str() {
            "text" => Ok(OutputFormat::Text),
            "json" => Ok(OutputFormat::Json),
            other => Err(CliError::ConfigError(format!(
                "unknown default_format {other:?} (expected \"text\" or \"json\")"
            ))
            .into()),
        }
    }
}

/// Split a `NAME=FILE` specifier; a bare path names the parser after its stem
fn parse_prediction_spec(spec: &str) -> Result<(String, PathBuf)> {
    if let Some((name, path)) = spec.split_once('=') {
        if name.is_empty() || path.is_empty() {
            return Err(CliError::InvalidPredictionSpec(spec.to_string()).into());
        }
        return Ok((name.to_string(), PathBuf::from(path)));
    }

    let path = PathBuf::from(spec);
    let name = path
        .file_stem()
        .map(|stem| stem.to_string_lossy().into_owned())
        .ok_or_else(|| CliError::InvalidPredictionSpec(spec.to_string()))?;
    Ok((name, path))
}

fn build_report(
    gold_path: &Path,
    gold: &[ParsedRecord],
    predictions: &[(String, Vec<ParsedRecord>)],
    metrics: MetricSet,
    policy: AlignmentPolicy,
) -> Result<EvaluationReport> {
    let mut dependencies = Vec::new();
    if matches!(metrics, MetricSet::Dependencies | MetricSet::All) {
        for (name, records) in predictions {
            let report = evaluate_dependencies(gold, records, policy)
                .with_context(|| format!("dependency evaluation failed for parser {name:?}"))?;
            dependencies.push(ParserDependencies {
                parser: name.clone(),
                report,
            });
        }
    }

    let tagging = if matches!(metrics, MetricSet::Tags | MetricSet::All) {
        let named: Vec<(&str, &[ParsedRecord])> = predictions
            .iter()
            .map(|(name, records)| (name.as_str(), records.as_slice()))
            .collect();
        let comparison = compare_parsers(gold, &named, policy)
            .context("POS/UPOS evaluation failed")?;
        let summaries = summarize_tagging(&comparison)?;
        Some(TaggingSection {
            parsers: comparison.parsers,
            summaries,
            mismatches: comparison.mismatches,
        })
    } else {
        None
    };

    Ok(EvaluationReport {
        gold: gold_path.display().to_string(),
        dependencies,
        tagging,
    })
}
