//! Timetabling domain models.
//!
//! Provides the data types the conflict engine works on. Catalog records
//! (offerings, sections, meetings) are built by the caller from its own
//! storage and handed in read-only; timetables are handed back.
//!
//! # Domain Mappings
//!
//! | Type | Course listing |
//! |------|----------------|
//! | Offering | Course in a registration term ("COMP 1405") |
//! | Section | Parallel section ("A", "B", "$") |
//! | Meeting | One weekly block of a lecture or tutorial component |
//! | WeekInterval | A meeting day flattened onto the week timeline |
//! | Timetable | One chosen section + lecture + tutorial per offering |

mod interval;
mod meeting;
mod offering;
mod timetable;

pub use interval::{to_intervals, WeekInterval, MINUTES_PER_DAY, MINUTES_PER_WEEK};
pub use meeting::{Meeting, RawMeeting, TimeRange, Weekday};
pub use offering::{ComponentKind, Offering, OfferingId, Section};
pub use timetable::{Timetable, TimetableEntry};
