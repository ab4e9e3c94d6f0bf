//! Packed attendance record: 64 periods in one integer
//!
//! Bit 0 is the current period, bit `k` is `k` periods ago. The record is a
//! plain `Copy` value; every update returns a new record.
//!
//! ```text
//! raw = 0b1011
//!          ││││
//!          │││└─ today      (marked)
//!          ││└── 1 ago      (marked)
//!          │└─── 2 ago      (unmarked, ends the current streak)
//!          └──── 3 ago      (marked)
//! ```
//!
//! Invalid inputs never fail: day indices outside `0..64` are no-ops (or
//! read as unmarked) and window lengths outside `1..=64` mean the full record.
//!
//! # Example
//!
//! ```
//! use streakbits::record::AttendanceRecord;
//!
//! let record = AttendanceRecord::from_raw(0b111).advance().mark_today();
//! assert_eq!(record.to_raw(), 0b1111);
//! assert_eq!(record.current_streak(), 4);
//! assert_eq!(record.render(5), "✗✓✓✓✓");
//! ```

use serde::{Deserialize, Serialize};
use std::fmt;

/// Number of periods a record can hold
pub const PERIODS: u32 = 64;

/// Window used by `Display`
pub const DEFAULT_RENDER_DAYS: i64 = 7;

/// Glyph for a marked period
pub const MARKED_GLYPH: char = '✓';

/// Glyph for an unmarked period
pub const UNMARKED_GLYPH: char = '✗';

/// Attendance over the most recent 64 periods
///
/// Stored as an unsigned bit vector so shifts and bit tests never see a
/// sign bit. Serializes as the signed `i64` used by storage columns.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(from = "i64", into = "i64")]
pub struct AttendanceRecord(u64);

/// Window length actually used for a requested `days`
fn clamp_window(days: i64) -> u32 {
    if days <= 0 || days > i64::from(PERIODS) {
        PERIODS
    } else {
        days as u32
    }
}

/// Mask covering bits `0..len`
fn window_mask(len: u32) -> u64 {
    if len >= PERIODS {
        u64::MAX
    } else {
        (1u64 << len) - 1
    }
}

/// `Some(bit)` for a day inside the record
fn day_bit(day: i64) -> Option<u64> {
    if (0..i64::from(PERIODS)).contains(&day) {
        Some(1u64 << day)
    } else {
        None
    }
}

impl AttendanceRecord {
    /// Empty record, nothing marked
    pub const fn new() -> Self {
        Self(0)
    }

    /// Wrap a value read from storage. Any bit pattern is valid.
    pub const fn from_raw(raw: i64) -> Self {
        Self(raw as u64)
    }

    /// Wrap an unsigned bit pattern
    pub const fn from_bits(bits: u64) -> Self {
        Self(bits)
    }

    /// Signed value for storage
    pub const fn to_raw(self) -> i64 {
        self.0 as i64
    }

    /// Underlying bit pattern
    pub const fn bits(self) -> u64 {
        self.0
    }

    /// Mark the current period
    #[must_use]
    pub const fn mark_today(self) -> Self {
        Self(self.0 | 1)
    }

    /// Mark the period `day` periods ago; no-op outside `0..64`
    #[must_use]
    pub fn mark_day(self, day: i64) -> Self {
        match day_bit(day) {
            Some(bit) => Self(self.0 | bit),
            None => self,
        }
    }

    /// Move to the next period. The oldest period is dropped.
    ///
    /// Must run exactly once per period boundary.
    #[must_use]
    pub const fn advance(self) -> Self {
        Self(self.0 << 1)
    }

    /// Advance `periods` times; 64 or more leaves nothing
    #[must_use]
    pub fn advance_by(self, periods: u32) -> Self {
        Self(self.0.checked_shl(periods).unwrap_or(0))
    }

    /// Forget everything
    #[must_use]
    pub const fn clear(self) -> Self {
        Self(0)
    }

    /// Whether the current period is marked
    pub const fn is_marked_today(self) -> bool {
        self.0 & 1 == 1
    }

    /// Whether `day` periods ago is marked; `false` outside `0..64`
    pub fn is_marked_day(self, day: i64) -> bool {
        day_bit(day).is_some_and(|bit| self.0 & bit != 0)
    }

    /// Consecutive marked periods ending today
    pub const fn current_streak(self) -> u32 {
        self.0.trailing_ones()
    }

    /// Marked periods among the most recent `days`
    ///
    /// `days <= 0` or `days > 64` counts the whole record.
    pub fn total_in_window(self, days: i64) -> u32 {
        (self.0 & window_mask(clamp_window(days))).count_ones()
    }

    /// Longest run of marked periods anywhere in the record
    pub const fn max_streak(self) -> u32 {
        // Each pass shortens every run by one.
        let mut bits = self.0;
        let mut longest = 0;
        while bits != 0 {
            bits &= bits << 1;
            longest += 1;
        }
        longest
    }

    /// `total_in_window(days) / days`, or `0.0` for `days <= 0`
    ///
    /// The divisor is the requested `days`, not the clamped window, so
    /// `days > 64` reports less than `1.0` even for a full record.
    pub fn rate(self, days: i64) -> f64 {
        if days <= 0 {
            return 0.0;
        }
        f64::from(self.total_in_window(days)) / days as f64
    }

    /// Glyphs for the most recent `days`, oldest on the left
    pub fn render(self, days: i64) -> String {
        (0..clamp_window(days))
            .rev()
            .map(|day| {
                if (self.0 >> day) & 1 == 1 {
                    MARKED_GLYPH
                } else {
                    UNMARKED_GLYPH
                }
            })
            .collect()
    }

    /// `0b`-prefixed bit pattern without leading zeros
    pub fn binary_representation(self) -> String {
        format!("{:#b}", self.0)
    }

    /// Marked flags for the most recent `days`, index 0 = today
    pub fn days_bitmap(self, days: i64) -> Vec<bool> {
        (0..clamp_window(days))
            .map(|day| (self.0 >> day) & 1 == 1)
            .collect()
    }
}

impl From<i64> for AttendanceRecord {
    fn from(raw: i64) -> Self {
        Self::from_raw(raw)
    }
}

impl From<AttendanceRecord> for i64 {
    fn from(record: AttendanceRecord) -> Self {
        record.to_raw()
    }
}

impl fmt::Display for AttendanceRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.render(DEFAULT_RENDER_DAYS))
    }
}

impl fmt::Binary for AttendanceRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Binary::fmt(&self.0, f)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rec(bits: u64) -> AttendanceRecord {
        AttendanceRecord::from_bits(bits)
    }

    #[test]
    fn test_new_record_is_zero() {
        assert_eq!(AttendanceRecord::new().to_raw(), 0);
        assert_eq!(AttendanceRecord::default(), AttendanceRecord::new());
    }

    #[test]
    fn test_mark_today_starts_streak() {
        let record = AttendanceRecord::new().mark_today();
        assert!(record.is_marked_today());
        assert_eq!(record.current_streak(), 1);
    }

    #[test]
    fn test_mark_today_idempotent() {
        let once = rec(0b100).mark_today();
        assert_eq!(once.mark_today(), once);
    }

    #[test]
    fn test_mark_day_sets_bit() {
        let record = AttendanceRecord::new().mark_day(3);
        assert_eq!(record.bits(), 0b1000);
        assert!(record.is_marked_day(3));
        assert!(!record.is_marked_today());
    }

    #[test]
    fn test_mark_day_out_of_range_is_noop() {
        let record = rec(0b101);
        assert_eq!(record.mark_day(-1), record);
        assert_eq!(record.mark_day(64), record);
        assert_eq!(record.mark_day(i64::MAX), record);
        assert_eq!(record.mark_day(i64::MIN), record);
    }

    #[test]
    fn test_mark_and_query_oldest_day() {
        let record = AttendanceRecord::new().mark_day(63);
        assert_eq!(record.to_raw(), i64::MIN);
        assert!(record.is_marked_day(63));
        assert!(!record.is_marked_day(62));
        assert_eq!(record.current_streak(), 0);
        assert_eq!(record.max_streak(), 1);
    }

    #[test]
    fn test_is_marked_day_out_of_range_is_false() {
        let record = AttendanceRecord::from_raw(-1);
        assert!(!record.is_marked_day(-1));
        assert!(!record.is_marked_day(64));
    }

    #[test]
    fn test_current_streak() {
        let cases = [
            (0, 0),
            (0b1, 1),
            (0b111, 3),
            (0b1111111, 7),
            (0b1011, 2),
            (0b1001, 1),
            (u64::MAX, 64),
        ];
        for (bits, expected) in cases {
            assert_eq!(rec(bits).current_streak(), expected, "bits {:#b}", bits);
        }
    }

    #[test]
    fn test_total_in_window() {
        let record = rec(0b1010101);
        assert_eq!(record.total_in_window(7), 4);
        assert_eq!(record.total_in_window(3), 2);
    }

    #[test]
    fn test_total_in_window_clamps_to_full_record() {
        let record = AttendanceRecord::from_raw(-1);
        assert_eq!(record.total_in_window(0), 64);
        assert_eq!(record.total_in_window(-5), 64);
        assert_eq!(record.total_in_window(65), 64);
        assert_eq!(record.total_in_window(64), 64);
    }

    #[test]
    fn test_advance_shifts_left() {
        let record = rec(0b1).advance();
        assert_eq!(record.bits(), 0b10);
        assert!(record.is_marked_day(1));
        assert!(!record.is_marked_today());
    }

    #[test]
    fn test_advance_drops_oldest_period() {
        let record = AttendanceRecord::from_raw(i64::MIN | 1).advance();
        assert_eq!(record.bits(), 0b10);
    }

    #[test]
    fn test_advance_negative_raw_does_not_sign_extend() {
        let record = AttendanceRecord::from_raw(-2).advance();
        assert_eq!(record.bits(), u64::MAX << 2);
        assert!(!record.is_marked_today());
        assert!(!record.is_marked_day(1));
    }

    #[test]
    fn test_advance_by() {
        let record = rec(0b11);
        assert_eq!(record.advance_by(0), record);
        assert_eq!(record.advance_by(3), record.advance().advance().advance());
        assert_eq!(record.advance_by(64).bits(), 0);
        assert_eq!(record.advance_by(200).bits(), 0);
    }

    #[test]
    fn test_clear() {
        assert_eq!(AttendanceRecord::from_raw(-1).clear().to_raw(), 0);
    }

    #[test]
    fn test_max_streak() {
        let cases = [
            (0, 0),
            (0b1111111, 7),
            (0b1110011, 3),
            (0b11110110, 4),
            (u64::MAX, 64),
            (1 << 63, 1),
        ];
        for (bits, expected) in cases {
            assert_eq!(rec(bits).max_streak(), expected, "bits {:#b}", bits);
        }
    }

    #[test]
    fn test_rate() {
        assert_eq!(rec(0b1011101).rate(7), 5.0 / 7.0);
        assert_eq!(rec(0b1111111).rate(7), 1.0);
        assert_eq!(rec(0).rate(7), 0.0);
    }

    #[test]
    fn test_rate_non_positive_days() {
        let record = AttendanceRecord::from_raw(-1);
        assert_eq!(record.rate(0), 0.0);
        assert_eq!(record.rate(-3), 0.0);
    }

    #[test]
    fn test_rate_divisor_is_not_clamped() {
        let record = AttendanceRecord::from_raw(-1);
        assert_eq!(record.rate(128), 0.5);
    }

    #[test]
    fn test_render() {
        assert_eq!(rec(0b111).render(3), "✓✓✓");
        assert_eq!(rec(0b101).render(3), "✓✗✓");
        assert_eq!(rec(0b1).render(7), "✗✗✗✗✗✗✓");
    }

    #[test]
    fn test_render_clamps_window() {
        assert_eq!(rec(0).render(0).chars().count(), 64);
        assert_eq!(rec(0).render(100).chars().count(), 64);
        assert_eq!(rec(1).render(1), "✓");
    }

    #[test]
    fn test_display_renders_seven_periods() {
        assert_eq!(rec(0b1111101).to_string(), "✗✓✓✓✓✓✓");
        assert_eq!(rec(0b1010101).to_string(), "✓✗✓✗✓✗✓");
    }

    #[test]
    fn test_binary_representation() {
        assert_eq!(rec(0).binary_representation(), "0b0");
        assert_eq!(rec(0b1011).binary_representation(), "0b1011");
        assert_eq!(
            AttendanceRecord::from_raw(-1).binary_representation(),
            format!("0b{}", "1".repeat(64))
        );
        assert_eq!(format!("{:b}", rec(0b110)), "110");
    }

    #[test]
    fn test_days_bitmap_is_newest_first() {
        let bitmap = rec(0b1011101).days_bitmap(7);
        assert_eq!(bitmap, vec![true, false, true, true, true, false, true]);
        assert_eq!(rec(0).days_bitmap(-1).len(), 64);
    }

    #[test]
    fn test_raw_round_trip() {
        for raw in [0, 1, -1, i64::MIN, i64::MAX, 0x5555_5555] {
            assert_eq!(AttendanceRecord::from_raw(raw).to_raw(), raw);
            assert_eq!(i64::from(AttendanceRecord::from(raw)), raw);
        }
    }

    #[test]
    fn test_serde_uses_signed_raw() {
        let record = AttendanceRecord::from_raw(-1);
        let json = serde_json::to_string(&record).unwrap();
        assert_eq!(json, "-1");
        let back: AttendanceRecord = serde_json::from_str(&json).unwrap();
        assert_eq!(back, record);
    }
}
