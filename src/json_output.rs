//! JSON output format for record summaries
//!
//! `--format json` implementation

use crate::stats::StreakSummary;
use serde::{Deserialize, Serialize};

/// Complete JSON document
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct JsonOutput {
    /// Streakbits version that produced the document
    pub version: String,
    /// Output format identifier
    pub format: String,
    pub summary: StreakSummary,
}

impl JsonOutput {
    pub fn new(summary: StreakSummary) -> Self {
        Self {
            version: env!("CARGO_PKG_VERSION").to_string(),
            format: "streakbits-json-v1".to_string(),
            summary,
        }
    }

    pub fn to_json(&self) -> anyhow::Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}
