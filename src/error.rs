//! Error types.
//!
//! The search itself is infallible. Errors only surface from strict parsing
//! of scraped meeting data and from building a GA configuration.

use thiserror::Error;

/// Failure to parse a scraped meeting record.
///
/// Lenient entry points (`Meeting::from_raw`, the scheduler) swallow these
/// and treat the meeting as contributing no intervals.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MeetingParseError {
    /// Time range lacks the `-` between start and end.
    #[error("time range '{0}' has no '-' separator")]
    MissingSeparator(String),
    /// A clock value is not `HH:MM`.
    #[error("invalid clock value '{0}'")]
    InvalidClock(String),
    /// A clock value lies outside a single day.
    #[error("clock value '{0}' is outside 00:00-24:00")]
    OutOfRange(String),
    /// Start is not strictly before end.
    #[error("empty time range {start}-{end} (minutes since midnight)")]
    EmptyRange {
        /// Start minute.
        start: u16,
        /// End minute.
        end: u16,
    },
    /// Day label outside Mon..Fri.
    #[error("unknown weekday label '{0}'")]
    UnknownWeekday(String),
}

/// Invalid GA configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Population must hold at least two schedules so that half survives.
    #[error("population size must be at least 2, got {0}")]
    PopulationTooSmall(usize),
    /// Population beyond what a single request may allocate.
    #[error("population size must be at most {max}, got {size}")]
    PopulationTooLarge { size: usize, max: usize },
    /// Mutation rate must be a probability.
    #[error("mutation rate must be within [0, 1], got {0}")]
    InvalidMutationRate(f64),
    /// At least one schedule must be returned.
    #[error("max_results must be at least 1")]
    ZeroResults,
    /// Configuration text could not be decoded.
    #[error("malformed configuration: {0}")]
    Parse(#[from] serde_json::Error),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_messages() {
        let e = MeetingParseError::EmptyRange { start: 600, end: 540 };
        assert_eq!(
            e.to_string(),
            "empty time range 600-540 (minutes since midnight)"
        );
        assert_eq!(
            ConfigError::PopulationTooSmall(1).to_string(),
            "population size must be at least 2, got 1"
        );
    }

    #[test]
    fn test_config_error_from_json() {
        let err = serde_json::from_str::<u32>("nope").unwrap_err();
        let e: ConfigError = err.into();
        assert!(matches!(e, ConfigError::Parse(_)));
    }
}
