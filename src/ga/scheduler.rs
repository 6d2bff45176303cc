//! Evolutionary section search.
//!
//! # Algorithm
//!
//! 1. **Initialize**: `P` schedules, each choosing every offering's section,
//!    lecture and tutorial independently at random.
//! 2. **Evolve** for `G` generations:
//!    - rank by descending fitness,
//!    - keep the top `P / 2` (elitist truncation),
//!    - refill to `P` with mutated copies of uniformly random survivors.
//! 3. **Terminate**: rank once more and return the top
//!    `min(max_results, P - 1)`.
//!
//! There is no convergence detection: all `G` generations run unless a time
//! budget is configured, in which case the budget is checked after each
//! completed generation. The population is valid and rankable at every
//! generation boundary, so stopping early loses nothing but search time.
//!
//! The search is a best-effort heuristic. It may miss a conflict-free
//! timetable that exists and may return duplicates when the choice space is
//! small.

use std::time::{Duration, Instant};

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use tracing::{debug, info, trace, warn};

use super::{GaConfig, Schedule};
use crate::error::ConfigError;
use crate::models::{Offering, Timetable};
use crate::validation::validate_offerings;

/// Outcome of a scheduling run.
#[derive(Debug, Clone)]
pub struct ScheduleResult<'a> {
    /// Best schedules, best first.
    pub schedules: Vec<Schedule<'a>>,
    /// Generations completed.
    pub generations_run: usize,
    /// Whether the time budget cut the run short.
    pub stopped_early: bool,
    /// Wall time spent.
    pub elapsed: Duration,
}

impl<'a> ScheduleResult<'a> {
    /// Best schedule found.
    pub fn best(&self) -> Option<&Schedule<'a>> {
        self.schedules.first()
    }

    /// Fitness of the best schedule.
    pub fn best_fitness(&self) -> Option<i64> {
        self.best().map(Schedule::fitness)
    }

    /// Owned, serializable timetables, best first.
    pub fn to_timetables(&self) -> Vec<Timetable> {
        self.schedules.iter().map(Schedule::to_timetable).collect()
    }
}

/// Genetic search over section choices.
///
/// Holds no state between runs; one scheduler can serve concurrent requests.
///
/// # Example
///
/// ```
/// use timetable_ga::ga::{GaConfig, SectionScheduler};
/// use timetable_ga::models::{Meeting, Offering, Section, Weekday};
///
/// let offerings = vec![
///     Offering::new("202410", "COMP 1405").with_section(
///         Section::new("A").with_lecture(Meeting::new("31001", [Weekday::Mon], 600, 660)),
///     ),
///     Offering::new("202410", "MATH 1007").with_section(
///         Section::new("A").with_lecture(Meeting::new("31002", [Weekday::Tue], 600, 660)),
///     ),
/// ];
///
/// let scheduler = SectionScheduler::new(GaConfig::default().with_seed(42)).unwrap();
/// let result = scheduler.run(&offerings);
/// assert_eq!(result.best_fitness(), Some(0));
/// assert_eq!(result.schedules.len(), 5);
/// ```
#[derive(Debug, Clone)]
pub struct SectionScheduler {
    config: GaConfig,
}

impl Default for SectionScheduler {
    fn default() -> Self {
        let config = GaConfig::default();
        debug_assert!(config.validate().is_ok());
        Self { config }
    }
}

impl SectionScheduler {
    /// Creates a scheduler after validating the configuration.
    pub fn new(config: GaConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self { config })
    }

    /// Active configuration.
    pub fn config(&self) -> &GaConfig {
        &self.config
    }

    /// Runs the search with the configured seed (or OS entropy).
    pub fn run<'a>(&self, offerings: &'a [Offering]) -> ScheduleResult<'a> {
        let mut rng = match self.config.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_os_rng(),
        };
        self.run_with_rng(offerings, &mut rng)
    }

    /// Runs the search drawing randomness from `rng`.
    pub fn run_with_rng<'a, R: Rng>(
        &self,
        offerings: &'a [Offering],
        rng: &mut R,
    ) -> ScheduleResult<'a> {
        let started = Instant::now();

        if offerings.is_empty() {
            debug!("no offerings requested, returning the empty schedule");
            return ScheduleResult {
                schedules: vec![Schedule::default()],
                generations_run: 0,
                stopped_early: false,
                elapsed: started.elapsed(),
            };
        }

        if let Err(issues) = validate_offerings(offerings) {
            for issue in &issues {
                warn!(kind = ?issue.kind, "{}", issue.message);
            }
        }

        let population_size = self.config.population_size;
        let survivors = population_size / 2;
        let budget = self.config.time_budget();

        debug!(
            offerings = offerings.len(),
            population_size,
            generations = self.config.generations,
            "starting section search"
        );

        let mut population: Vec<Schedule<'a>> = (0..population_size)
            .map(|_| Schedule::random(offerings, rng))
            .collect();

        let mut generations_run = 0;
        let mut stopped_early = false;

        for generation in 0..self.config.generations {
            let best = rank(&mut population);
            population.truncate(survivors);

            while population.len() < population_size {
                let parent = rng.random_range(0..survivors);
                let mut child = population[parent].copy();
                child.mutate(self.config.mutation_rate, rng);
                population.push(child);
            }

            generations_run += 1;
            trace!(generation, best, "generation complete");

            let out_of_time = budget.is_some_and(|b| started.elapsed() >= b);
            if out_of_time && generations_run < self.config.generations {
                info!(
                    generations_run,
                    elapsed_ms = started.elapsed().as_millis() as u64,
                    "time budget exhausted, stopping early"
                );
                stopped_early = true;
                break;
            }
        }

        let best = rank(&mut population);
        population.truncate(self.config.result_count());

        debug!(best, generations_run, "section search finished");

        ScheduleResult {
            schedules: population,
            generations_run,
            stopped_early,
            elapsed: started.elapsed(),
        }
    }
}

/// Runs a search with default parameters and returns the best schedules.
pub fn run_scheduler(offerings: &[Offering]) -> Vec<Schedule<'_>> {
    SectionScheduler::default().run(offerings).schedules
}

/// Sorts by descending fitness, evaluating each schedule once.
///
/// Returns the best fitness (0 for an empty population).
fn rank(population: &mut Vec<Schedule<'_>>) -> i64 {
    let mut scored: Vec<(i64, Schedule<'_>)> =
        population.drain(..).map(|s| (s.fitness(), s)).collect();
    scored.sort_by(|a, b| b.0.cmp(&a.0));
    let best = scored.first().map_or(0, |(fitness, _)| *fitness);
    population.extend(scored.into_iter().map(|(_, s)| s));
    best
}
