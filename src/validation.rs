//! Input validation for scheduling requests.
//!
//! Checks structural integrity of the offerings handed to the scheduler.
//! Detects:
//! - Duplicate offerings (same term and code requested twice)
//! - Offerings without sections
//! - Duplicate section keys within an offering
//! - Meetings without usable day/time data
//!
//! All findings are advisory. The scheduler logs them and runs anyway:
//! an offering without sections or a malformed meeting simply contributes
//! no conflicts.

use std::collections::HashSet;

use crate::models::{Meeting, Offering};

/// Validation result.
pub type ValidationResult = Result<(), Vec<ValidationError>>;

/// A validation finding.
#[derive(Debug, Clone, PartialEq)]
pub struct ValidationError {
    /// Finding category.
    pub kind: ValidationErrorKind,
    /// Human-readable description.
    pub message: String,
}

/// Categories of validation findings.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationErrorKind {
    /// The same offering (term and code) appears more than once.
    DuplicateOffering,
    /// An offering has no sections to choose from.
    NoSections,
    /// Two sections of one offering share a key.
    DuplicateSectionKey,
    /// A meeting has no days or no usable time range.
    MalformedMeeting,
}

impl ValidationError {
    fn new(kind: ValidationErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }
}

/// Validates the offerings of a scheduling request.
///
/// # Returns
/// `Ok(())` if all checks pass, `Err(findings)` with every detected issue.
pub fn validate_offerings(offerings: &[Offering]) -> ValidationResult {
    let mut errors = Vec::new();
    let mut offering_ids = HashSet::new();

    for offering in offerings {
        if !offering_ids.insert(&offering.id) {
            errors.push(ValidationError::new(
                ValidationErrorKind::DuplicateOffering,
                format!("Offering {} requested more than once", offering.id),
            ));
        }

        if offering.sections.is_empty() {
            errors.push(ValidationError::new(
                ValidationErrorKind::NoSections,
                format!("Offering {} has no sections", offering.id),
            ));
        }

        let mut keys = HashSet::new();
        for section in &offering.sections {
            if !keys.insert(section.key.as_str()) {
                errors.push(ValidationError::new(
                    ValidationErrorKind::DuplicateSectionKey,
                    format!(
                        "Offering {} has duplicate section key '{}'",
                        offering.id, section.key
                    ),
                ));
            }

            for meeting in section.meetings() {
                if let Some(reason) = malformed_reason(meeting) {
                    errors.push(ValidationError::new(
                        ValidationErrorKind::MalformedMeeting,
                        format!(
                            "Meeting '{}' in {} section '{}' {reason}",
                            meeting.parent_id, offering.id, section.key
                        ),
                    ));
                }
            }
        }
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

fn malformed_reason(meeting: &Meeting) -> Option<&'static str> {
    if meeting.time.is_some_and(|t| !t.is_valid()) {
        return Some("has an empty or out-of-day time range");
    }
    match (meeting.days.is_empty(), meeting.time.is_none()) {
        (true, true) => Some("has no days and no time range"),
        (true, false) => Some("has no days"),
        (false, true) => Some("has no time range"),
        (false, false) => None,
    }
}
