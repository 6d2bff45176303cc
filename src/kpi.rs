//! Timetable quality metrics (KPIs).
//!
//! Reporting only: none of these feed the search fitness, which is defined
//! by conflict minutes alone.
//!
//! # Metrics
//!
//! | Metric | Definition |
//! |--------|-----------|
//! | Conflicts | Overlapping minute-units across all meetings |
//! | Days Off | Weekdays (Mon..Fri) with no meeting |
//! | Gap Minutes | Idle minutes between consecutive classes on the same day |
//! | Class Minutes | Total scheduled minutes in the week |
//! | Meeting Count | Chosen lecture and tutorial meetings |
//! | Unwanted Hour Hits | Meeting days whose hour span touches an unwanted hour |

use crate::conflict::count_interval_conflicts;
use crate::models::{to_intervals, Timetable, WeekInterval, Weekday, MINUTES_PER_DAY};

/// Timetable performance indicators. Times are in minutes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TimetableKpi {
    /// Overlapping minute-units.
    pub conflicts: u64,
    /// Weekdays without any class.
    pub days_off: usize,
    /// Idle time between classes on the same day. Overlaps count as 0.
    pub gap_minutes: i64,
    /// Total minutes of class across the week (overlaps counted per meeting).
    pub class_minutes: i64,
    /// Number of chosen meetings.
    pub meeting_count: usize,
    /// (meeting day, unwanted hour) pairs where the class start hour is at
    /// or before the unwanted hour and the class end hour at or after it.
    pub unwanted_hour_hits: usize,
}

impl TimetableKpi {
    /// Computes KPIs from a timetable with no hour preferences.
    pub fn calculate(timetable: &Timetable) -> Self {
        Self::calculate_with_preferences(timetable, &[])
    }

    /// Computes KPIs, also scoring meetings against `unwanted_hours`
    /// (hours of the day, 0..=23). Repeated hours count once.
    pub fn calculate_with_preferences(timetable: &Timetable, unwanted_hours: &[u8]) -> Self {
        let intervals: Vec<WeekInterval> = timetable.meetings().flat_map(to_intervals).collect();

        let mut per_day: Vec<Vec<WeekInterval>> = vec![Vec::new(); Weekday::ALL.len()];
        for iv in &intervals {
            if let Some(day) = per_day.get_mut(iv.day_index()) {
                day.push(*iv);
            }
        }

        let days_off = per_day.iter().filter(|d| d.is_empty()).count();
        let gap_minutes = per_day.iter_mut().map(|d| day_gap_minutes(d)).sum();
        let class_minutes = intervals.iter().map(WeekInterval::duration).sum();

        Self {
            conflicts: count_interval_conflicts(intervals.iter().copied()),
            days_off,
            gap_minutes,
            class_minutes,
            meeting_count: timetable.meeting_count(),
            unwanted_hour_hits: unwanted_hour_hits(&intervals, unwanted_hours),
        }
    }

    /// Whether the timetable meets the given comfort thresholds.
    pub fn meets_thresholds(&self, max_gap_minutes: i64, min_days_off: usize) -> bool {
        self.conflicts == 0 && self.gap_minutes <= max_gap_minutes && self.days_off >= min_days_off
    }
}

fn unwanted_hour_hits(intervals: &[WeekInterval], unwanted_hours: &[u8]) -> usize {
    let mut hours = unwanted_hours.to_vec();
    hours.sort_unstable();
    hours.dedup();

    intervals
        .iter()
        .map(|iv| {
            let day_start = MINUTES_PER_DAY * iv.day_index() as i64;
            let start_hour = (iv.start - day_start) / 60;
            let end_hour = (iv.end - day_start) / 60;
            hours
                .iter()
                .filter(|&&h| (start_hour..=end_hour).contains(&i64::from(h)))
                .count()
        })
        .sum()
}

fn day_gap_minutes(day: &mut [WeekInterval]) -> i64 {
    day.sort();
    let mut gaps = 0;
    let mut covered_until: Option<i64> = None;
    for iv in day.iter() {
        if let Some(until) = covered_until {
            gaps += (iv.start - until).max(0);
        }
        covered_until = Some(covered_until.map_or(iv.end, |u| u.max(iv.end)));
    }
    gaps
}
