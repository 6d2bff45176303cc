//! Course timetable conflict resolution.
//!
//! Given the offerings a student wants to take, each with parallel sections
//! made of lecture and tutorial meetings, finds timetables that minimize
//! overlapping class minutes.
//!
//! # Modules
//!
//! - **`models`**: Domain types: `Offering`, `Section`, `Meeting`,
//!   `Weekday`, `TimeRange`, `WeekInterval`, `Timetable`
//! - **`conflict`**: Minute-level overlap counting over a week timeline
//! - **`ga`**: Evolutionary search over section choices (`SectionScheduler`)
//! - **`kpi`**: Secondary timetable metrics (days off, gaps)
//! - **`validation`**: Advisory integrity checks over a request
//! - **`error`**: Parse and configuration errors
//!
//! # Architecture
//!
//! The engine is pure and CPU-bound. Catalog data (offerings, sections,
//! meetings) is borrowed read-only for the duration of a run; candidate
//! schedules are owned by the run and discarded afterwards. Independent
//! requests can run on separate threads without locking.
//!
//! # Example
//!
//! ```
//! use timetable_ga::ga::run_scheduler;
//! use timetable_ga::models::{Meeting, Offering, RawMeeting, Section};
//!
//! let lecture = Meeting::from_raw("31001", &RawMeeting::new(["Mon", "Wed"], "10:05-11:25"));
//! let offerings = vec![
//!     Offering::new("202410", "COMP 1405")
//!         .with_section(Section::new("A").with_component("Lecture", lecture)),
//! ];
//!
//! let schedules = run_scheduler(&offerings);
//! assert_eq!(schedules[0].fitness(), 0);
//! ```

pub mod conflict;
pub mod error;
pub mod ga;
pub mod kpi;
pub mod models;
pub mod validation;
