//! Per-offering gene of a candidate schedule.
//!
//! # Encoding
//!
//! A unit stores indices into its offering: the chosen section and, inside
//! that section, the chosen lecture and tutorial. Slots are `None` when the
//! offering has no sections or the section has no meeting of that kind.
//!
//! Re-rolling re-samples the section and both slots as one event.

use std::ptr;

use rand::Rng;

use crate::models::{Meeting, Offering, Section};

/// One offering's current choice.
///
/// Borrows the offering read-only; copying a unit copies its choice.
#[derive(Debug, Clone, Copy)]
pub struct ScheduleUnit<'a> {
    /// Offering this unit chooses for.
    pub offering: &'a Offering,
    /// Index of the chosen section.
    pub section_index: Option<usize>,
    /// Index of the chosen lecture within the section.
    pub lecture_index: Option<usize>,
    /// Index of the chosen tutorial within the section.
    pub tutorial_index: Option<usize>,
}

impl<'a> ScheduleUnit<'a> {
    /// Creates a unit with a uniformly random section, lecture and tutorial.
    pub fn new<R: Rng>(offering: &'a Offering, rng: &mut R) -> Self {
        let mut unit = Self {
            offering,
            section_index: None,
            lecture_index: None,
            tutorial_index: None,
        };
        unit.reroll(rng);
        unit
    }

    /// Creates a unit with an explicit choice.
    ///
    /// Out-of-range indices are treated as absent.
    pub fn with_choice(
        offering: &'a Offering,
        section_index: usize,
        lecture_index: Option<usize>,
        tutorial_index: Option<usize>,
    ) -> Self {
        let section = offering.sections.get(section_index);
        Self {
            offering,
            section_index: section.map(|_| section_index),
            lecture_index: lecture_index
                .filter(|&i| section.is_some_and(|s| i < s.lectures.len())),
            tutorial_index: tutorial_index
                .filter(|&i| section.is_some_and(|s| i < s.tutorials.len())),
        }
    }

    /// Re-samples section, lecture and tutorial together.
    pub fn reroll<R: Rng>(&mut self, rng: &mut R) {
        let sections = &self.offering.sections;
        if sections.is_empty() {
            self.section_index = None;
            self.lecture_index = None;
            self.tutorial_index = None;
            return;
        }
        let idx = rng.random_range(0..sections.len());
        let section = &sections[idx];
        self.section_index = Some(idx);
        self.lecture_index = pick(section.lectures.len(), rng);
        self.tutorial_index = pick(section.tutorials.len(), rng);
    }

    /// Re-rolls with probability `mutation_rate`.
    ///
    /// Returns whether a re-roll happened.
    pub fn mutate<R: Rng>(&mut self, mutation_rate: f64, rng: &mut R) -> bool {
        if rng.random::<f64>() < mutation_rate {
            self.reroll(rng);
            true
        } else {
            false
        }
    }

    /// Chosen section.
    pub fn section(&self) -> Option<&'a Section> {
        self.section_index.and_then(|i| self.offering.sections.get(i))
    }

    /// Chosen lecture meeting.
    pub fn lecture(&self) -> Option<&'a Meeting> {
        let section = self.section()?;
        self.lecture_index.and_then(|i| section.lectures.get(i))
    }

    /// Chosen tutorial meeting.
    pub fn tutorial(&self) -> Option<&'a Meeting> {
        let section = self.section()?;
        self.tutorial_index.and_then(|i| section.tutorials.get(i))
    }

    /// Chosen meetings (lecture first), skipping absent slots.
    pub fn meetings(&self) -> impl Iterator<Item = &'a Meeting> {
        self.lecture().into_iter().chain(self.tutorial())
    }
}

impl PartialEq for ScheduleUnit<'_> {
    fn eq(&self, other: &Self) -> bool {
        ptr::eq(self.offering, other.offering)
            && self.section_index == other.section_index
            && self.lecture_index == other.lecture_index
            && self.tutorial_index == other.tutorial_index
    }
}

impl Eq for ScheduleUnit<'_> {}

fn pick<R: Rng>(len: usize, rng: &mut R) -> Option<usize> {
    if len == 0 {
        None
    } else {
        Some(rng.random_range(0..len))
    }
}
