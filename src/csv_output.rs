//! CSV output format for record windows
//!
//! One row per period, newest first, for spreadsheet analysis.

use crate::record::AttendanceRecord;

/// CSV record for a single period
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CsvPeriod {
    /// Periods before the current one
    pub day: usize,
    pub marked: bool,
}

/// CSV output formatter
#[derive(Debug, Default)]
pub struct CsvOutput {
    periods: Vec<CsvPeriod>,
}

impl CsvOutput {
    /// Create an empty CSV output formatter
    pub fn new() -> Self {
        Self::default()
    }

    /// Rows for the most recent `days` of `record`
    pub fn from_record(record: AttendanceRecord, days: i64) -> Self {
        let mut output = Self::new();
        for (day, marked) in record.days_bitmap(days).into_iter().enumerate() {
            output.add_period(CsvPeriod { day, marked });
        }
        output
    }

    /// Add a period to the output
    pub fn add_period(&mut self, period: CsvPeriod) {
        self.periods.push(period);
    }

    fn header(&self) -> &'static str {
        "day,marked"
    }

    /// Format a single period as a CSV row
    fn format_period(&self, period: &CsvPeriod) -> String {
        format!("{},{}", period.day, period.marked)
    }

    /// Generate complete CSV output
    pub fn to_csv(&self) -> String {
        let mut output = String::new();
        output.push_str(self.header());
        output.push('\n');

        for period in &self.periods {
            output.push_str(&self.format_period(period));
            output.push('\n');
        }

        output
    }
}
