//! Meeting model.
//!
//! A meeting is one weekly repeating time block: a set of weekdays plus a
//! day-local `[start, end)` range in minutes since midnight.
//!
//! # Data Quality
//! Scraped meeting data is not guaranteed clean. Meetings are allowed to
//! carry no time range (unparsable or empty) and an empty day set; such
//! meetings simply contribute no intervals to conflict counting.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Deserializer, Serialize};
use tracing::debug;

use crate::error::MeetingParseError;

use super::interval::MINUTES_PER_DAY;

/// Teaching weekday.
///
/// Only Monday through Friday exist in the source data vocabulary.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Weekday {
    Mon,
    Tue,
    Wed,
    Thu,
    Fri,
}

impl Weekday {
    /// All weekdays in week order.
    pub const ALL: [Weekday; 5] = [
        Weekday::Mon,
        Weekday::Tue,
        Weekday::Wed,
        Weekday::Thu,
        Weekday::Fri,
    ];

    /// Day index within the week (Mon = 0).
    #[inline]
    pub fn index(self) -> usize {
        self as usize
    }

    /// Short label as used by the course listing ("Mon", "Tue", ...).
    pub fn label(self) -> &'static str {
        match self {
            Weekday::Mon => "Mon",
            Weekday::Tue => "Tue",
            Weekday::Wed => "Wed",
            Weekday::Thu => "Thu",
            Weekday::Fri => "Fri",
        }
    }
}

impl fmt::Display for Weekday {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for Weekday {
    type Err = MeetingParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "Mon" => Ok(Weekday::Mon),
            "Tue" => Ok(Weekday::Tue),
            "Wed" => Ok(Weekday::Wed),
            "Thu" => Ok(Weekday::Thu),
            "Fri" => Ok(Weekday::Fri),
            other => Err(MeetingParseError::UnknownWeekday(other.to_string())),
        }
    }
}

/// Day-local half-open range `[start_minute, end_minute)`.
///
/// Always non-empty and within a single day. Deserialization goes through
/// [`TimeRange::new`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "RangeRecord")]
pub struct TimeRange {
    /// Minutes since midnight (inclusive).
    pub start_minute: u16,
    /// Minutes since midnight (exclusive).
    pub end_minute: u16,
}

impl TimeRange {
    /// Creates a range, rejecting empty, inverted, or out-of-day ranges.
    pub fn new(start_minute: u16, end_minute: u16) -> Result<Self, MeetingParseError> {
        if start_minute >= end_minute || i64::from(end_minute) > MINUTES_PER_DAY {
            return Err(MeetingParseError::EmptyRange {
                start: start_minute,
                end: end_minute,
            });
        }
        Ok(Self {
            start_minute,
            end_minute,
        })
    }

    /// Parses the listing format `"HH:MM-HH:MM"` (24-hour clock).
    pub fn parse(s: &str) -> Result<Self, MeetingParseError> {
        let (start, end) = s
            .split_once('-')
            .ok_or_else(|| MeetingParseError::MissingSeparator(s.to_string()))?;
        Self::new(parse_clock(start)?, parse_clock(end)?)
    }

    /// Length in minutes.
    #[inline]
    pub fn duration_minutes(&self) -> u16 {
        self.end_minute.saturating_sub(self.start_minute)
    }

    /// Whether the range is non-empty and ends within the day.
    ///
    /// Fields are public, so a hand-built value may not hold this.
    #[inline]
    pub fn is_valid(&self) -> bool {
        self.start_minute < self.end_minute && i64::from(self.end_minute) <= MINUTES_PER_DAY
    }
}

/// Unchecked wire form of [`TimeRange`].
#[derive(Deserialize)]
struct RangeRecord {
    start_minute: u16,
    end_minute: u16,
}

impl TryFrom<RangeRecord> for TimeRange {
    type Error = MeetingParseError;

    fn try_from(record: RangeRecord) -> Result<Self, Self::Error> {
        Self::new(record.start_minute, record.end_minute)
    }
}

impl fmt::Display for TimeRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{:02}:{:02}-{:02}:{:02}",
            self.start_minute / 60,
            self.start_minute % 60,
            self.end_minute / 60,
            self.end_minute % 60
        )
    }
}

fn parse_clock(s: &str) -> Result<u16, MeetingParseError> {
    let s = s.trim();
    let (hour, minute) = s
        .split_once(':')
        .ok_or_else(|| MeetingParseError::InvalidClock(s.to_string()))?;
    let hour: u16 = hour
        .trim()
        .parse()
        .map_err(|_| MeetingParseError::InvalidClock(s.to_string()))?;
    let minute: u16 = minute
        .trim()
        .parse()
        .map_err(|_| MeetingParseError::InvalidClock(s.to_string()))?;
    if minute >= 60 || hour > 24 {
        return Err(MeetingParseError::OutOfRange(s.to_string()));
    }
    let total = hour * 60 + minute;
    if i64::from(total) > MINUTES_PER_DAY {
        return Err(MeetingParseError::OutOfRange(s.to_string()));
    }
    Ok(total)
}

/// Meeting record as scraped from the course listing.
///
/// ```json
/// { "days": ["Mon", "Wed"], "time": "10:05-11:25" }
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RawMeeting {
    /// Day labels ("Mon".."Fri").
    #[serde(default, alias = "Days")]
    pub days: Vec<String>,
    /// Time range text ("HH:MM-HH:MM").
    #[serde(default, alias = "Time")]
    pub time: String,
}

impl RawMeeting {
    /// Creates a raw meeting record.
    pub fn new<S: Into<String>>(days: impl IntoIterator<Item = S>, time: impl Into<String>) -> Self {
        Self {
            days: days.into_iter().map(Into::into).collect(),
            time: time.into(),
        }
    }
}

/// A weekly repeating meeting belonging to a section component.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Meeting {
    /// Identifier of the owning section component (e.g. its CRN).
    pub parent_id: String,
    /// Days the meeting repeats on, sorted and deduplicated.
    pub days: Vec<Weekday>,
    /// Day-local range. `None` when the source range was unusable.
    #[serde(default, deserialize_with = "lenient_time")]
    pub time: Option<TimeRange>,
}

/// Reads a meeting's range, turning an empty or out-of-day range into `None`
/// instead of failing the whole catalog.
fn lenient_time<'de, D>(deserializer: D) -> Result<Option<TimeRange>, D::Error>
where
    D: Deserializer<'de>,
{
    let Some(record) = Option::<RangeRecord>::deserialize(deserializer)? else {
        return Ok(None);
    };
    match TimeRange::try_from(record) {
        Ok(time) => Ok(Some(time)),
        Err(e) => {
            debug!(error = %e, "meeting has no usable time range");
            Ok(None)
        }
    }
}

impl Meeting {
    /// Creates a meeting from minutes since midnight.
    ///
    /// An empty or inverted range is kept as "no time" rather than rejected.
    pub fn new(
        parent_id: impl Into<String>,
        days: impl IntoIterator<Item = Weekday>,
        start_minute: u16,
        end_minute: u16,
    ) -> Self {
        Self::with_time(
            parent_id,
            days,
            TimeRange::new(start_minute, end_minute).ok(),
        )
    }

    /// Creates a meeting with an explicit (possibly absent) range.
    pub fn with_time(
        parent_id: impl Into<String>,
        days: impl IntoIterator<Item = Weekday>,
        time: Option<TimeRange>,
    ) -> Self {
        let mut days: Vec<Weekday> = days.into_iter().collect();
        days.sort();
        days.dedup();
        Self {
            parent_id: parent_id.into(),
            days,
            time,
        }
    }

    /// Strict conversion: any bad day label or time range is an error.
    pub fn try_from_raw(
        parent_id: impl Into<String>,
        raw: &RawMeeting,
    ) -> Result<Self, MeetingParseError> {
        let days = raw
            .days
            .iter()
            .map(|d| d.parse::<Weekday>())
            .collect::<Result<Vec<_>, _>>()?;
        let time = TimeRange::parse(&raw.time)?;
        Ok(Self::with_time(parent_id, days, Some(time)))
    }

    /// Lenient conversion used on scraped data.
    ///
    /// Unknown day labels (including weekends) are dropped and an unusable
    /// time range becomes `None`.
    pub fn from_raw(parent_id: impl Into<String>, raw: &RawMeeting) -> Self {
        let parent_id = parent_id.into();
        let days: Vec<Weekday> = raw
            .days
            .iter()
            .filter_map(|d| match d.parse() {
                Ok(day) => Some(day),
                Err(e) => {
                    debug!(parent = %parent_id, error = %e, "dropping day label");
                    None
                }
            })
            .collect();
        let time = match TimeRange::parse(&raw.time) {
            Ok(t) => Some(t),
            Err(e) => {
                debug!(parent = %parent_id, error = %e, "meeting has no usable time range");
                None
            }
        };
        Self::with_time(parent_id, days, time)
    }

    /// Whether this meeting occupies any time in the week.
    pub fn is_schedulable(&self) -> bool {
        self.time.is_some() && !self.days.is_empty()
    }

    /// Whether the meeting repeats on `day`.
    pub fn meets_on(&self, day: Weekday) -> bool {
        self.days.contains(&day)
    }
}

impl fmt::Display for Meeting {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let days: Vec<&str> = self.days.iter().map(|d| d.label()).collect();
        match self.time {
            Some(t) => write!(f, "{} {} {}", self.parent_id, days.join(" "), t),
            None => write!(f, "{} {} TBA", self.parent_id, days.join(" ")),
        }
    }
}
