//! Offering and section models.
//!
//! An offering is what a student registers for (a course in a term). It owns
//! one or more parallel sections, each holding independent lists of lecture
//! and tutorial meetings. A timetable picks one section per offering and at
//! most one lecture plus at most one tutorial from it.

use std::fmt;

use serde::{Deserialize, Serialize};

use super::Meeting;

/// Schedule types that count as the lecture component of a section.
const LECTURE_ALIASES: [&str; 12] = [
    "Lecture",
    "Seminar",
    "Studio",
    "Comprehensive",
    "Practicum",
    "Other",
    "Workshop",
    "PhD Thesis",
    "Masters Thesis",
    "Directed Studies",
    "Honours Essay",
    "Problem Analysis",
];

/// Which slot of a section a component fills.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ComponentKind {
    /// Lecture-like component (lecture, seminar, studio, ...).
    Lecture,
    /// Everything else (tutorial, laboratory, discussion group, ...).
    Tutorial,
}

impl ComponentKind {
    /// Classifies a listing schedule type.
    pub fn from_schedule_type(schedule_type: &str) -> Self {
        if LECTURE_ALIASES.contains(&schedule_type.trim()) {
            ComponentKind::Lecture
        } else {
            ComponentKind::Tutorial
        }
    }
}

/// Offering identity: registration term plus related-offering code.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct OfferingId {
    /// Registration term (e.g. "202410").
    pub registration_term: String,
    /// Related-offering code (e.g. "COMP 1405").
    pub code: String,
}

impl OfferingId {
    /// Creates an offering id.
    pub fn new(registration_term: impl Into<String>, code: impl Into<String>) -> Self {
        Self {
            registration_term: registration_term.into(),
            code: code.into(),
        }
    }
}

impl fmt::Display for OfferingId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", self.code, self.registration_term)
    }
}

/// A group of interchangeable lecture/tutorial choices.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Section {
    /// Section key ("A", "B", ... or [`Section::NO_KEY`]).
    pub key: String,
    /// Candidate lecture meetings.
    #[serde(default)]
    pub lectures: Vec<Meeting>,
    /// Candidate tutorial meetings.
    #[serde(default)]
    pub tutorials: Vec<Meeting>,
}

impl Section {
    /// Key used when the listing provides no section key.
    pub const NO_KEY: &'static str = "$";

    /// Creates an empty section.
    pub fn new(key: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            lectures: Vec::new(),
            tutorials: Vec::new(),
        }
    }

    /// Adds a lecture meeting.
    pub fn with_lecture(mut self, meeting: Meeting) -> Self {
        self.lectures.push(meeting);
        self
    }

    /// Adds a tutorial meeting.
    pub fn with_tutorial(mut self, meeting: Meeting) -> Self {
        self.tutorials.push(meeting);
        self
    }

    /// Adds a meeting, routed by its component's schedule type.
    pub fn with_component(self, schedule_type: &str, meeting: Meeting) -> Self {
        match ComponentKind::from_schedule_type(schedule_type) {
            ComponentKind::Lecture => self.with_lecture(meeting),
            ComponentKind::Tutorial => self.with_tutorial(meeting),
        }
    }

    /// Whether the section has neither lectures nor tutorials.
    pub fn is_empty(&self) -> bool {
        self.lectures.is_empty() && self.tutorials.is_empty()
    }

    /// All meetings of the section, lectures first.
    pub fn meetings(&self) -> impl Iterator<Item = &Meeting> {
        self.lectures.iter().chain(self.tutorials.iter())
    }
}

/// A registrable course offering.
///
/// Read-only for the duration of a scheduling run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Offering {
    /// Offering identity.
    pub id: OfferingId,
    /// Human-readable title.
    #[serde(default)]
    pub title: String,
    /// Parallel sections.
    #[serde(default)]
    pub sections: Vec<Section>,
}

impl Offering {
    /// Creates an offering with no sections.
    pub fn new(registration_term: impl Into<String>, code: impl Into<String>) -> Self {
        Self {
            id: OfferingId::new(registration_term, code),
            title: String::new(),
            sections: Vec::new(),
        }
    }

    /// Sets the title.
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    /// Adds a section.
    pub fn with_section(mut self, section: Section) -> Self {
        self.sections.push(section);
        self
    }

    /// Finds a section by key.
    pub fn section(&self, key: &str) -> Option<&Section> {
        self.sections.iter().find(|s| s.key == key)
    }

    /// Number of distinct (section, lecture, tutorial) choices.
    ///
    /// An empty slot counts as a single "none" choice.
    pub fn choice_count(&self) -> usize {
        self.sections
            .iter()
            .map(|s| s.lectures.len().max(1) * s.tutorials.len().max(1))
            .sum()
    }
}
