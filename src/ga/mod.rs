//! GA-based section selection.
//!
//! Searches the space of (section, lecture, tutorial) choices per offering
//! for timetables with the fewest overlapping minutes.
//!
//! # Encoding
//!
//! - **Gene** ([`ScheduleUnit`]): one offering's chosen section plus the
//!   lecture and tutorial picked inside it.
//! - **Chromosome** ([`Schedule`]): one gene per requested offering, in
//!   request order. Fitness is `-100000 * conflict minutes`.
//!
//! # Operators
//!
//! Mutation only: each gene re-rolls section, lecture and tutorial together
//! with probability `mutation_rate`. Selection is elitist truncation to the
//! better half; there is no crossover.

mod config;
mod schedule;
mod scheduler;
mod unit;

pub use config::{GaConfig, MAX_POPULATION_SIZE};
pub use schedule::{Schedule, CONFLICT_PENALTY};
pub use scheduler::{run_scheduler, ScheduleResult, SectionScheduler};
pub use unit::ScheduleUnit;
