//! Minute-level conflict counting.
//!
//! # Algorithm
//!
//! 1. Allocate one occupancy counter per minute of the week (10080).
//! 2. For every interval of every meeting, increment each minute in
//!    `[start, end)`.
//! 3. Each increment that lands on an already-occupied minute adds one
//!    conflict unit. The first occupant of a minute adds nothing.
//!
//! The score is the same for any ordering of the input: a minute occupied
//! `k` times always contributes `k - 1`.
//!
//! # Complexity
//! O(total minutes spanned), bounded by 10080 x meeting count. Timetables
//! hold tens of meetings, so the flat array beats an interval tree here.

use crate::models::{to_intervals, Meeting, WeekInterval, MINUTES_PER_WEEK};

/// Counts overlapping minute-units across a collection of meetings.
///
/// Meetings without usable day/time data contribute nothing.
pub fn count_conflicts<'m, I>(meetings: I) -> u64
where
    I: IntoIterator<Item = &'m Meeting>,
{
    count_interval_conflicts(meetings.into_iter().flat_map(to_intervals))
}

/// Counts overlapping minute-units across raw week intervals.
///
/// Parts of an interval outside the week timeline are ignored.
pub fn count_interval_conflicts<I>(intervals: I) -> u64
where
    I: IntoIterator<Item = WeekInterval>,
{
    let mut occupancy = vec![0u32; MINUTES_PER_WEEK as usize];
    let mut conflicts: u64 = 0;

    for interval in intervals {
        let start = interval.start.clamp(0, MINUTES_PER_WEEK) as usize;
        let end = interval.end.clamp(0, MINUTES_PER_WEEK) as usize;
        if start >= end {
            continue;
        }
        for slot in &mut occupancy[start..end] {
            *slot += 1;
            if *slot > 1 {
                conflicts += 1;
            }
        }
    }

    conflicts
}
