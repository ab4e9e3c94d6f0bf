//! Streak statistics summary for a single record
//!
//! Collects every derived statistic the report formats need in one value so
//! text, JSON and CSV output agree.

use crate::config::ReportConfig;
use crate::record::AttendanceRecord;
use serde::{Deserialize, Serialize};

/// Derived statistics for one record
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StreakSummary {
    /// Signed storage value
    pub raw: i64,
    /// `0b`-prefixed bit pattern
    pub binary: String,
    pub marked_today: bool,
    /// Consecutive marked periods ending today
    pub current_streak: u32,
    /// Longest run anywhere in the record
    pub max_streak: u32,
    pub window_days: i64,
    pub total_in_window: u32,
    /// Marked fraction of the short window (0.0 to 1.0)
    pub rate: f64,
    pub long_window_days: i64,
    pub total_in_long_window: u32,
    /// Rendered short window, oldest first
    pub recent: String,
    /// Short window flags, today first
    pub bitmap: Vec<bool>,
}

impl StreakSummary {
    pub fn from_record(record: AttendanceRecord, config: &ReportConfig) -> Self {
        Self {
            raw: record.to_raw(),
            binary: record.binary_representation(),
            marked_today: record.is_marked_today(),
            current_streak: record.current_streak(),
            max_streak: record.max_streak(),
            window_days: config.window_days,
            total_in_window: record.total_in_window(config.window_days),
            rate: record.rate(config.window_days),
            long_window_days: config.long_window_days,
            total_in_long_window: record.total_in_window(config.long_window_days),
            recent: record.render(config.window_days),
            bitmap: record.days_bitmap(config.window_days),
        }
    }

    /// Render the summary as a text table
    pub fn format_summary(&self) -> String {
        let rows = [
            ("raw", self.raw.to_string()),
            ("binary", self.binary.clone()),
            (
                "marked today",
                if self.marked_today { "yes" } else { "no" }.to_string(),
            ),
            ("current streak", self.current_streak.to_string()),
            ("max streak", self.max_streak.to_string()),
            (
                "total (window)",
                format!("{}/{}", self.total_in_window, self.window_days),
            ),
            ("rate (window)", format!("{:.1}%", self.rate * 100.0)),
            (
                "total (long)",
                format!("{}/{}", self.total_in_long_window, self.long_window_days),
            ),
            ("recent", self.recent.clone()),
        ];

        let mut out = String::new();
        out.push_str("statistic          value\n");
        out.push_str("------------------ ------------------\n");
        for (name, value) in rows {
            out.push_str(&format!("{:<18} {}\n", name, value));
        }
        out
    }

    /// Print the summary table to stdout
    pub fn print_summary(&self) {
        print!("{}", self.format_summary());
    }
}
