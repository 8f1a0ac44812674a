//! Configuration module

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::Path;
use treebench_core::AlignmentPolicy;

/// CLI configuration structure
#[derive(Debug, Deserialize, Serialize, Default)]
pub struct CliConfig {
    /// Evaluation configuration
    #[serde(default)]
    pub evaluation: EvaluationConfig,

    /// Output configuration
    #[serde(default)]
    pub output: OutputConfig,
}

/// Evaluation-related configuration
#[derive(Debug, Deserialize, Serialize)]
pub struct EvaluationConfig {
    /// How to treat gold/prediction sequences of different length
    pub alignment: AlignmentPolicy,
}

impl Default for EvaluationConfig {
    fn default() -> Self {
        Self {
            alignment: AlignmentPolicy::Strict,
        }
    }
}

/// Output-related configuration
#[derive(Debug, Deserialize, Serialize)]
pub struct OutputConfig {
    /// Default output format
    pub default_format: String,

    /// Pretty print JSON output
    pub pretty_json: bool,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            default_format: "text".to_string(),
            pretty_json: true,
        }
    }
}

impl CliConfig {
    /// Load configuration from a TOML file
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;
        toml::from_str(&content)
            .with_context(|| format!("Failed to parse config file: {}", path.display()))
    }

    /// Serialize the configuration as TOML
    pub fn to_toml(&self) -> Result<String> {
        toml::to_string_pretty(self).context("Failed to serialize configuration")
    }
}
