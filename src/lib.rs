//! Streakbits - 64-period attendance and streak records in one integer
//!
//! This library packs a subject's daily attendance into a single 64-bit
//! value (bit 0 = today) and derives streaks, windowed totals, rates and
//! renderings from it. Storage and the daily rollover trigger live outside
//! the crate; they only exchange the raw `i64`.

pub mod cli;
pub mod config;
pub mod csv_output;
pub mod json_output;
pub mod record;
pub mod stats;
pub mod update;

pub use record::AttendanceRecord;
