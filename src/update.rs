//! Ordered updates applied to a stored record
//!
//! A caller reads the stored value, applies one plan, and writes the result
//! back. Serializing that read-modify-write is the storage layer's job.

use crate::record::{AttendanceRecord, PERIODS};

/// Updates to apply, in order: clear, advance, mark days, mark today
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct UpdatePlan {
    pub clear: bool,
    /// Period boundaries that passed since the value was stored
    pub advance: u32,
    /// Days (periods ago) to mark
    pub mark_days: Vec<i64>,
    pub mark_today: bool,
}

impl UpdatePlan {
    /// True when applying the plan leaves any record unchanged
    pub fn is_empty(&self) -> bool {
        !self.clear && self.advance == 0 && self.mark_days.is_empty() && !self.mark_today
    }

    /// Apply every update to `record` and return the result
    pub fn apply(&self, record: AttendanceRecord) -> AttendanceRecord {
        let mut record = record;

        if self.clear {
            record = record.clear();
        }

        if self.advance > 0 {
            if self.advance >= PERIODS {
                tracing::debug!(periods = self.advance, "advance discards the whole record");
            }
            record = record.advance_by(self.advance);
        }

        for &day in &self.mark_days {
            if !(0..i64::from(PERIODS)).contains(&day) {
                tracing::debug!(day, "ignoring mark outside the record");
            }
            record = record.mark_day(day);
        }

        if self.mark_today {
            record = record.mark_today();
        }

        tracing::debug!(raw = record.to_raw(), "applied update plan");
        record
    }
}
