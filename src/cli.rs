//! CLI argument parsing for Streakbits

use crate::update::UpdatePlan;
use clap::{Parser, ValueEnum};
use std::path::PathBuf;

/// Output format for record summaries
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Human-readable text format (default)
    Text,
    /// JSON format for machine parsing
    Json,
    /// CSV format for spreadsheet analysis
    Csv,
}

#[derive(Parser, Debug)]
#[command(name = "streakbits")]
#[command(version)]
#[command(about = "Inspect and update 64-period attendance records", long_about = None)]
pub struct Cli {
    /// Stored value: signed decimal, or a 0b/0x bit pattern
    #[arg(
        value_name = "RAW",
        default_value = "0",
        value_parser = parse_raw_value,
        allow_negative_numbers = true
    )]
    pub raw: i64,

    /// Reset the record before applying other updates
    #[arg(long = "clear")]
    pub clear: bool,

    /// Advance the record by N periods
    #[arg(long = "advance", value_name = "N", default_value = "0")]
    pub advance: u32,

    /// Mark DAY periods ago (repeatable, 0 = today)
    #[arg(long = "mark-day", value_name = "DAY", allow_negative_numbers = true)]
    pub mark_days: Vec<i64>,

    /// Mark the current period
    #[arg(short = 't', long = "mark-today")]
    pub mark_today: bool,

    /// Window for totals, rate and rendering (overrides config)
    #[arg(short = 'd', long = "days", value_name = "N", allow_negative_numbers = true)]
    pub days: Option<i64>,

    /// Output format
    #[arg(long = "format", value_enum, default_value = "text")]
    pub format: OutputFormat,

    /// Report configuration file (TOML)
    #[arg(long = "config", value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Print only the resulting raw value
    #[arg(long = "raw-only")]
    pub raw_only: bool,

    /// Enable debug tracing on stderr
    #[arg(long = "debug")]
    pub debug: bool,
}

impl Cli {
    /// Updates requested on the command line
    pub fn update_plan(&self) -> UpdatePlan {
        UpdatePlan {
            clear: self.clear,
            advance: self.advance,
            mark_days: self.mark_days.clone(),
            mark_today: self.mark_today,
        }
    }
}

/// Parse a stored value. Binary and hex literals are taken as bit patterns,
/// so `0x8000000000000000` is accepted and equals `i64::MIN`.
pub fn parse_raw_value(s: &str) -> Result<i64, String> {
    let (digits, radix) = if let Some(rest) = s.strip_prefix("0b") {
        (rest, 2)
    } else if let Some(rest) = s.strip_prefix("0x") {
        (rest, 16)
    } else {
        return s
            .parse::<i64>()
            .map_err(|e| format!("invalid raw value '{}': {}", s, e));
    };

    let digits = digits.replace('_', "");
    u64::from_str_radix(&digits, radix)
        .map(|bits| bits as i64)
        .map_err(|e| format!("invalid raw value '{}': {}", s, e))
}
