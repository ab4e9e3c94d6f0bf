#![no_main]

use libfuzzer_sys::fuzz_target;
use streakbits::record::AttendanceRecord;

fuzz_target!(|data: &[u8]| {
    if data.len() < 16 {
        return;
    }
    let (raw_bytes, rest) = data.split_at(8);
    let (day_bytes, _) = rest.split_at(8);
    let raw = i64::from_le_bytes(raw_bytes.try_into().unwrap());
    let day = i64::from_le_bytes(day_bytes.try_into().unwrap());

    // No operation may panic for any value or day index
    let record = AttendanceRecord::from_raw(raw);
    assert_eq!(record.to_raw(), raw);
    let marked = record.mark_day(day).mark_today().advance();
    let _ = marked.is_marked_day(day);
    assert!(record.current_streak() <= record.max_streak());
    assert!(record.total_in_window(day) <= 64);
    let rate = record.rate(day);
    assert!((0.0..=1.0).contains(&rate));
    assert_eq!(record.render(day).chars().count(), record.days_bitmap(day).len());
    let _ = record.binary_representation();
});
