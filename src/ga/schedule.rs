//! Candidate schedule: one [`ScheduleUnit`] per requested offering.
//!
//! Fitness is `-100000 * conflicts`, so ranking by descending fitness puts
//! conflict-free schedules (fitness 0) first.

use rand::Rng;

use super::ScheduleUnit;
use crate::conflict::count_conflicts;
use crate::models::{Meeting, Offering, Timetable, TimetableEntry};

/// Fitness contributed by each conflicting minute-unit.
pub const CONFLICT_PENALTY: i64 = -100_000;

/// A candidate timetable.
///
/// Each schedule owns its units; cloning yields an independent copy.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Schedule<'a> {
    /// Units in offering request order.
    pub units: Vec<ScheduleUnit<'a>>,
}

impl<'a> Schedule<'a> {
    /// Wraps a list of units.
    pub fn new(units: Vec<ScheduleUnit<'a>>) -> Self {
        Self { units }
    }

    /// Creates a schedule with an independent random choice per offering.
    pub fn random<R: Rng>(offerings: &'a [Offering], rng: &mut R) -> Self {
        Self::new(
            offerings
                .iter()
                .map(|offering| ScheduleUnit::new(offering, rng))
                .collect(),
        )
    }

    /// Every chosen lecture and tutorial across all units.
    pub fn meetings(&self) -> impl Iterator<Item = &'a Meeting> + '_ {
        self.units.iter().flat_map(ScheduleUnit::meetings)
    }

    /// Overlapping minute-units across all chosen meetings.
    pub fn conflicts(&self) -> u64 {
        count_conflicts(self.meetings())
    }

    /// Ranking value: 0 when conflict-free, strictly lower with more conflicts.
    pub fn fitness(&self) -> i64 {
        CONFLICT_PENALTY * self.conflicts() as i64
    }

    /// Mutates every unit in place with the given per-unit rate.
    ///
    /// Returns how many units re-rolled.
    pub fn mutate<R: Rng>(&mut self, mutation_rate: f64, rng: &mut R) -> usize {
        self.units
            .iter_mut()
            .map(|unit| unit.mutate(mutation_rate, rng))
            .filter(|&rerolled| rerolled)
            .count()
    }

    /// Independent copy; mutating it never affects `self`.
    pub fn copy(&self) -> Self {
        self.clone()
    }

    /// Number of units.
    pub fn len(&self) -> usize {
        self.units.len()
    }

    /// Whether the schedule covers no offerings.
    pub fn is_empty(&self) -> bool {
        self.units.is_empty()
    }

    /// Owned, serializable snapshot of this schedule.
    pub fn to_timetable(&self) -> Timetable {
        let conflicts = self.conflicts();
        let mut timetable = Timetable {
            fitness: CONFLICT_PENALTY * conflicts as i64,
            conflicts,
            entries: Vec::with_capacity(self.units.len()),
        };
        for unit in &self.units {
            timetable.add_entry(TimetableEntry::new(
                unit.offering.id.clone(),
                unit.section().map(|s| s.key.clone()),
                unit.lecture().cloned(),
                unit.tutorial().cloned(),
            ));
        }
        timetable
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Section, Weekday};
    use rand::SeedableRng;
    use rand::rngs::SmallRng;

    fn single(code: &str, day: Weekday, start: u16, end: u16) -> Offering {
        Offering::new("202410", code).with_section(
            Section::new("A").with_lecture(Meeting::new(code, [day], start, end)),
        )
    }

    fn varied_offerings() -> Vec<Offering> {
        vec![
            Offering::new("202410", "COMP 1405")
                .with_section(
                    Section::new("A")
                        .with_lecture(Meeting::new("A", [Weekday::Mon, Weekday::Wed], 600, 690))
                        .with_tutorial(Meeting::new("A1", [Weekday::Fri], 600, 690))
                        .with_tutorial(Meeting::new("A2", [Weekday::Fri], 720, 810)),
                )
                .with_section(
                    Section::new("B")
                        .with_lecture(Meeting::new("B", [Weekday::Tue, Weekday::Thu], 600, 690)),
                ),
            Offering::new("202410", "MATH 1007")
                .with_section(
                    Section::new("A")
                        .with_lecture(Meeting::new("M-A", [Weekday::Mon, Weekday::Wed], 630, 720)),
                )
                .with_section(
                    Section::new("B")
                        .with_lecture(Meeting::new("M-B", [Weekday::Fri], 600, 690)),
                ),
        ]
    }

    #[test]
    fn test_conflict_free_fitness_is_zero() {
        let offerings = vec![
            single("COMP 1405", Weekday::Mon, 600, 660),
            single("MATH 1007", Weekday::Tue, 600, 660),
        ];
        let mut rng = SmallRng::seed_from_u64(42);
        let s = Schedule::random(&offerings, &mut rng);
        assert_eq!(s.len(), 2);
        assert_eq!(s.conflicts(), 0);
        assert_eq!(s.fitness(), 0);
    }

    #[test]
    fn test_conflicting_fitness() {
        let offerings = vec![
            single("COMP 1405", Weekday::Mon, 600, 660),
            single("MATH 1007", Weekday::Mon, 630, 690),
        ];
        let mut rng = SmallRng::seed_from_u64(42);
        let s = Schedule::random(&offerings, &mut rng);
        assert_eq!(s.conflicts(), 30);
        assert_eq!(s.fitness(), -3_000_000);
    }

    #[test]
    fn test_empty_schedule() {
        let s = Schedule::default();
        assert!(s.is_empty());
        assert_eq!(s.fitness(), 0);
        assert!(s.to_timetable().entries.is_empty());
    }

    #[test]
    fn test_fitness_matches_conflicts() {
        let offerings = varied_offerings();
        let mut rng = SmallRng::seed_from_u64(11);
        for _ in 0..100 {
            let s = Schedule::random(&offerings, &mut rng);
            let fitness = s.fitness();
            assert!(fitness <= 0);
            assert_eq!(fitness == 0, s.conflicts() == 0);
        }
    }

    #[test]
    fn test_copy_then_mutate_leaves_original() {
        let offerings = varied_offerings();
        let mut rng = SmallRng::seed_from_u64(5);
        let original = Schedule::random(&offerings, &mut rng);
        let fitness_before = original.fitness();
        let snapshot = original.clone();

        for _ in 0..25 {
            let mut copy = original.copy();
            copy.mutate(1.0, &mut rng);
        }

        assert_eq!(original, snapshot);
        assert_eq!(original.fitness(), fitness_before);
    }

    #[test]
    fn test_full_rate_mutation_eventually_changes_binding() {
        let offerings = varied_offerings();
        let mut rng = SmallRng::seed_from_u64(9);
        let original = Schedule::random(&offerings, &mut rng);

        let mut changed = 0;
        for _ in 0..100 {
            let mut copy = original.copy();
            assert_eq!(copy.mutate(1.0, &mut rng), 2);
            if copy != original {
                changed += 1;
            }
        }
        assert!(changed > 50, "only {changed} of 100 mutations changed a binding");
    }

    #[test]
    fn test_to_timetable() {
        let offerings = varied_offerings();
        let s = Schedule::new(vec![
            ScheduleUnit::with_choice(&offerings[0], 0, Some(0), Some(1)),
            ScheduleUnit::with_choice(&offerings[1], 0, Some(0), None),
        ]);
        let t = s.to_timetable();
        // Mon and Wed 10:30-11:30 overlap on both days.
        assert_eq!(t.conflicts, 120);
        assert_eq!(t.fitness, s.fitness());
        assert_eq!(t.entries.len(), 2);
        assert_eq!(t.entries[0].section_key.as_deref(), Some("A"));
        assert_eq!(t.entries[0].tutorial.as_ref().map(|m| m.parent_id.as_str()), Some("A2"));
        assert!(t.entries[1].tutorial.is_none());
        assert_eq!(t.entry_for("MATH 1007").unwrap().offering.code, "MATH 1007");
    }
}
