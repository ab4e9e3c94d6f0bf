//! Report configuration loaded from `streakbits.toml`
//!
//! # Example streakbits.toml
//!
//! ```toml
//! # Short window for totals, rate and rendering
//! window_days = 7
//!
//! # Long window for totals
//! long_window_days = 30
//! ```

use crate::record::PERIODS;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use std::str::FromStr;
use thiserror::Error;

/// Errors that can occur while loading a report configuration
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Failed to read config {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse config: {0}")]
    Parse(#[from] toml::de::Error),
}

/// Result type for configuration operations
pub type Result<T> = std::result::Result<T, ConfigError>;

/// Windows used when summarizing a record
///
/// Any window length is accepted. Lengths outside `1..=64` summarize the
/// whole record, exactly as the record operations do.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ReportConfig {
    /// Short window (periods) for totals, rate, rendering and bitmap
    ///
    /// Default: 7
    pub window_days: i64,

    /// Long window (periods) for totals
    ///
    /// Default: 30
    pub long_window_days: i64,
}

impl Default for ReportConfig {
    fn default() -> Self {
        Self {
            window_days: 7,
            long_window_days: 30,
        }
    }
}

impl FromStr for ReportConfig {
    type Err = ConfigError;

    /// Parse a configuration from TOML text
    fn from_str(content: &str) -> Result<Self> {
        let config: Self = toml::from_str(content)?;
        config.log_full_record_windows();
        Ok(config)
    }
}

impl ReportConfig {
    /// Load a configuration file
    ///
    /// ```no_run
    /// use streakbits::config::ReportConfig;
    ///
    /// # fn main() -> anyhow::Result<()> {
    /// let config = ReportConfig::from_file("streakbits.toml")?;
    /// println!("window: {} periods", config.window_days);
    /// # Ok(())
    /// # }
    /// ```
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let content = fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.display().to_string(),
            source,
        })?;
        tracing::debug!(path = %path.display(), "loading report config");
        content.parse()
    }

    /// Replace the short window
    pub fn with_window_days(mut self, days: i64) -> Self {
        self.window_days = days;
        self.log_full_record_windows();
        self
    }

    fn log_full_record_windows(&self) {
        let max = i64::from(PERIODS);
        for (name, value) in [
            ("window_days", self.window_days),
            ("long_window_days", self.long_window_days),
        ] {
            if !(1..=max).contains(&value) {
                tracing::debug!(name, value, "window outside the record, using all periods");
            }
        }
    }
}
