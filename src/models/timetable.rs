//! Timetable (solution) model.
//!
//! An owned, serializable snapshot of one candidate schedule: per offering,
//! the chosen section and its chosen lecture and tutorial meetings, plus the
//! conflict score it was ranked by. This is what leaves the engine.

use serde::{Deserialize, Serialize};

use super::{Meeting, OfferingId};

/// A complete timetable returned to the caller.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Timetable {
    /// Ranking value (0 = conflict-free, more negative = worse).
    pub fitness: i64,
    /// Overlapping minute-units across all chosen meetings.
    pub conflicts: u64,
    /// One entry per requested offering, in request order.
    pub entries: Vec<TimetableEntry>,
}

/// The choice made for one offering.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TimetableEntry {
    /// Offering the choice belongs to.
    pub offering: OfferingId,
    /// Chosen section key. `None` if the offering had no sections.
    pub section_key: Option<String>,
    /// Chosen lecture meeting, if the section has lectures.
    pub lecture: Option<Meeting>,
    /// Chosen tutorial meeting, if the section has tutorials.
    pub tutorial: Option<Meeting>,
}

impl TimetableEntry {
    /// Creates an entry.
    pub fn new(
        offering: OfferingId,
        section_key: Option<String>,
        lecture: Option<Meeting>,
        tutorial: Option<Meeting>,
    ) -> Self {
        Self {
            offering,
            section_key,
            lecture,
            tutorial,
        }
    }

    /// Chosen meetings of this entry (lecture first).
    pub fn meetings(&self) -> impl Iterator<Item = &Meeting> {
        self.lecture.iter().chain(self.tutorial.iter())
    }
}

impl Timetable {
    /// Creates an empty, conflict-free timetable.
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds an entry.
    pub fn add_entry(&mut self, entry: TimetableEntry) {
        self.entries.push(entry);
    }

    /// Whether no two chosen meetings share a minute.
    pub fn is_conflict_free(&self) -> bool {
        self.conflicts == 0
    }

    /// Finds the entry for an offering code.
    pub fn entry_for(&self, code: &str) -> Option<&TimetableEntry> {
        self.entries.iter().find(|e| e.offering.code == code)
    }

    /// All chosen meetings across entries.
    pub fn meetings(&self) -> impl Iterator<Item = &Meeting> {
        self.entries.iter().flat_map(TimetableEntry::meetings)
    }

    /// Number of chosen meetings.
    pub fn meeting_count(&self) -> usize {
        self.meetings().count()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Weekday;

    fn sample_timetable() -> Timetable {
        let mut t = Timetable::new();
        t.add_entry(TimetableEntry::new(
            OfferingId::new("202410", "COMP 1405"),
            Some("A".into()),
            Some(Meeting::new("1", [Weekday::Mon], 600, 660)),
            Some(Meeting::new("2", [Weekday::Fri], 600, 660)),
        ));
        t.add_entry(TimetableEntry::new(
            OfferingId::new("202410", "MATH 1007"),
            Some("$".into()),
            Some(Meeting::new("3", [Weekday::Tue], 600, 660)),
            None,
        ));
        t
    }

    #[test]
    fn test_empty_timetable() {
        let t = Timetable::new();
        assert!(t.is_conflict_free());
        assert_eq!(t.fitness, 0);
        assert_eq!(t.meeting_count(), 0);
    }

    #[test]
    fn test_entry_lookup_and_meetings() {
        let t = sample_timetable();
        assert_eq!(t.meeting_count(), 3);
        let math = t.entry_for("MATH 1007").unwrap();
        assert_eq!(math.meetings().count(), 1);
        assert!(t.entry_for("PHIL 1001").is_none());
    }

    #[test]
    fn test_json_shape() {
        let t = sample_timetable();
        let value = serde_json::to_value(&t).unwrap();
        assert_eq!(value["conflicts"], 0);
        assert_eq!(value["entries"][0]["section_key"], "A");
        assert_eq!(value["entries"][1]["tutorial"], serde_json::Value::Null);
        assert_eq!(value["entries"][0]["lecture"]["days"][0], "Mon");

        let back: Timetable = serde_json::from_value(value).unwrap();
        assert_eq!(back, t);
    }
}
