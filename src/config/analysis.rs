//! Analysis configuration module.
//!
//! This module defines configuration for the analyze command: how many of the
//! longest concatenated words to report and how the report is rendered.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use super::ConfigResult;
use super::Validate;

/// Output format for analysis reports.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum ReportFormat {
    /// Human-readable text report
    Text,
    /// Machine-readable JSON report
    Json,
}

impl Default for ReportFormat {
    fn default() -> Self {
        Self::Text
    }
}

impl fmt::Display for ReportFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Text => write!(f, "text"),
            Self::Json => write!(f, "json"),
        }
    }
}

impl FromStr for ReportFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "text" => Ok(Self::Text),
            "json" => Ok(Self::Json),
            other => Err(format!(
                "unknown report format: {other} (expected \"text\" or \"json\")"
            )),
        }
    }
}

/// Analysis configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AnalysisConfig {
    /// How many of the longest concatenated words to report
    pub top_words: usize,

    /// Report rendering format
    pub format: ReportFormat,
}

impl Default for AnalysisConfig {
    fn default() -> Self {
        Self {
            top_words: 2,
            format: ReportFormat::default(),
        }
    }
}

impl Validate for AnalysisConfig {
    fn validate(&self) -> ConfigResult<()> {
        // Every top_words value is meaningful: zero asks for an empty ranking
        // and large values simply exhaust the list.
        Ok(())
    }
}
