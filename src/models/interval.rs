//! Weekly interval model.
//!
//! Flattens a meeting's weekdays and day-local range onto a single repeating
//! week timeline so that overlap checks become integer range comparisons.
//!
//! # Time Model
//! Minute 0 is Monday 00:00. Day `d` occupies
//! `[1440 * d, 1440 * (d + 1))`. The timeline spans a full seven-day week
//! even though only Mon..Fri are ever populated.

use serde::{Deserialize, Serialize};

use super::{Meeting, TimeRange};

/// Minutes in one day.
pub const MINUTES_PER_DAY: i64 = 24 * 60;

/// Minutes in one week (`7 * 24 * 60`).
pub const MINUTES_PER_WEEK: i64 = 7 * MINUTES_PER_DAY;

/// A half-open interval `[start, end)` on the week timeline.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct WeekInterval {
    /// Minute of week (inclusive).
    pub start: i64,
    /// Minute of week (exclusive).
    pub end: i64,
}

impl WeekInterval {
    /// Creates a new interval.
    pub fn new(start: i64, end: i64) -> Self {
        Self { start, end }
    }

    /// Length in minutes.
    #[inline]
    pub fn duration(&self) -> i64 {
        self.end - self.start
    }

    /// Day index (Mon = 0) the interval starts on.
    #[inline]
    pub fn day_index(&self) -> usize {
        (self.start / MINUTES_PER_DAY) as usize
    }

    /// Whether a minute of week falls inside this interval.
    #[inline]
    pub fn contains(&self, minute: i64) -> bool {
        minute >= self.start && minute < self.end
    }

    /// Whether two intervals share at least one minute.
    pub fn overlaps(&self, other: &Self) -> bool {
        self.start < other.end && other.start < self.end
    }

    /// Number of minutes shared with `other`.
    pub fn overlap_minutes(&self, other: &Self) -> i64 {
        let start = self.start.max(other.start);
        let end = self.end.min(other.end);
        (end - start).max(0)
    }
}

/// Converts a meeting into one week interval per weekday it repeats on.
///
/// Meetings without a usable time range or without days yield nothing.
pub fn to_intervals(meeting: &Meeting) -> Vec<WeekInterval> {
    let Some(time) = meeting.time.filter(TimeRange::is_valid) else {
        return Vec::new();
    };
    let start = i64::from(time.start_minute);
    let end = i64::from(time.end_minute);
    meeting
        .days
        .iter()
        .map(|day| {
            let offset = MINUTES_PER_DAY * day.index() as i64;
            WeekInterval::new(start + offset, end + offset)
        })
        .collect()
}

impl Meeting {
    /// Week intervals occupied by this meeting. See [`to_intervals`].
    pub fn intervals(&self) -> Vec<WeekInterval> {
        to_intervals(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Weekday;
    use proptest::prelude::*;

    #[test]
    fn test_single_day() {
        let m = Meeting::new("A", [Weekday::Mon], 600, 660);
        assert_eq!(to_intervals(&m), vec![WeekInterval::new(600, 660)]);
    }

    #[test]
    fn test_multiple_days_offset_by_day() {
        let m = Meeting::new("A", [Weekday::Tue, Weekday::Thu], 600, 690);
        let iv = m.intervals();
        assert_eq!(
            iv,
            vec![
                WeekInterval::new(1440 + 600, 1440 + 690),
                WeekInterval::new(3 * 1440 + 600, 3 * 1440 + 690),
            ]
        );
        assert_eq!(iv[0].day_index(), 1);
        assert_eq!(iv[1].day_index(), 3);
    }

    #[test]
    fn test_friday_fits_in_week() {
        let m = Meeting::new("A", [Weekday::Fri], 1380, 1440);
        let iv = to_intervals(&m);
        assert_eq!(iv[0].end, 5 * MINUTES_PER_DAY);
        assert!(iv[0].end <= MINUTES_PER_WEEK);
    }

    #[test]
    fn test_malformed_meetings_yield_nothing() {
        let no_time = Meeting::new("A", [Weekday::Mon], 700, 600);
        assert!(to_intervals(&no_time).is_empty());

        let no_days = Meeting::new("A", Vec::new(), 600, 700);
        assert!(to_intervals(&no_days).is_empty());
    }

    #[test]
    fn test_interval_overlap() {
        let a = WeekInterval::new(0, 100);
        let b = WeekInterval::new(50, 150);
        let c = WeekInterval::new(100, 200); // touching only
        assert!(a.overlaps(&b));
        assert!(!a.overlaps(&c));
        assert_eq!(a.overlap_minutes(&b), 50);
        assert_eq!(a.overlap_minutes(&c), 0);
        assert!(a.contains(99));
        assert!(!a.contains(100));
    }

    fn weekday_strategy() -> impl Strategy<Value = Vec<Weekday>> {
        proptest::sample::subsequence(Weekday::ALL.to_vec(), 0..=5)
    }

    proptest! {
        #[test]
        fn prop_one_interval_per_day(
            days in weekday_strategy(),
            start in 0u16..1439,
            len in 1u16..=240,
        ) {
            let end = (start + len).min(1440);
            let m = Meeting::new("P", days.clone(), start, end);
            let iv = to_intervals(&m);

            prop_assert_eq!(iv.len(), days.len());
            for (interval, day) in iv.iter().zip(days.iter()) {
                prop_assert_eq!(interval.duration(), i64::from(end - start));
                prop_assert_eq!(interval.start - i64::from(start), 1440 * day.index() as i64);
            }
        }
    }
}
