//! GA run configuration.
//!
//! Loaded from JSON at the API boundary or built in code:
//!
//! ```
//! use timetable_ga::ga::GaConfig;
//!
//! let config = GaConfig::from_json(r#"{ "generations": 250, "seed": 7 }"#).unwrap();
//! assert_eq!(config.generations, 250);
//! assert_eq!(config.population_size, 100);
//! ```

use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;

/// Largest population a single run accepts.
pub const MAX_POPULATION_SIZE: usize = 100_000;

/// Parameters of the evolutionary search.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GaConfig {
    /// Schedules kept per generation (default: 100).
    pub population_size: usize,
    /// Generations to run (default: 100).
    pub generations: usize,
    /// Per-unit re-roll probability applied to each new child (default: 0.1).
    pub mutation_rate: f64,
    /// Upper bound on schedules returned (default: 5).
    pub max_results: usize,
    /// RNG seed. `None` draws from OS entropy.
    pub seed: Option<u64>,
    /// Wall-clock budget checked between generations. `None` = unlimited.
    pub time_budget_ms: Option<u64>,
}

impl Default for GaConfig {
    fn default() -> Self {
        Self {
            population_size: 100,
            generations: 100,
            mutation_rate: 0.1,
            max_results: 5,
            seed: None,
            time_budget_ms: None,
        }
    }
}

impl GaConfig {
    /// Sets the population size.
    pub fn with_population_size(mut self, population_size: usize) -> Self {
        self.population_size = population_size;
        self
    }

    /// Sets the generation count.
    pub fn with_generations(mut self, generations: usize) -> Self {
        self.generations = generations;
        self
    }

    /// Sets the mutation rate.
    pub fn with_mutation_rate(mut self, mutation_rate: f64) -> Self {
        self.mutation_rate = mutation_rate;
        self
    }

    /// Sets the maximum number of returned schedules.
    pub fn with_max_results(mut self, max_results: usize) -> Self {
        self.max_results = max_results;
        self
    }

    /// Fixes the RNG seed for reproducible runs.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Sets a wall-clock budget for the run.
    pub fn with_time_budget(mut self, budget: Duration) -> Self {
        self.time_budget_ms = Some(budget.as_millis().try_into().unwrap_or(u64::MAX));
        self
    }

    /// Wall-clock budget, if any.
    pub fn time_budget(&self) -> Option<Duration> {
        self.time_budget_ms.map(Duration::from_millis)
    }

    /// Number of schedules a run returns: `min(max_results, population_size - 1)`.
    pub fn result_count(&self) -> usize {
        self.max_results
            .min(self.population_size.saturating_sub(1))
    }

    /// Checks parameter ranges.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.population_size < 2 {
            return Err(ConfigError::PopulationTooSmall(self.population_size));
        }
        if self.population_size > MAX_POPULATION_SIZE {
            return Err(ConfigError::PopulationTooLarge {
                size: self.population_size,
                max: MAX_POPULATION_SIZE,
            });
        }
        if !(0.0..=1.0).contains(&self.mutation_rate) {
            return Err(ConfigError::InvalidMutationRate(self.mutation_rate));
        }
        if self.max_results == 0 {
            return Err(ConfigError::ZeroResults);
        }
        Ok(())
    }

    /// Parses a JSON configuration (missing fields take defaults) and validates it.
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let c = GaConfig::default();
        assert_eq!(c.population_size, 100);
        assert_eq!(c.generations, 100);
        assert!((c.mutation_rate - 0.1).abs() < 1e-12);
        assert_eq!(c.result_count(), 5);
        assert!(c.seed.is_none());
        assert!(c.time_budget().is_none());
        assert!(c.validate().is_ok());
    }

    #[test]
    fn test_builder() {
        let c = GaConfig::default()
            .with_population_size(20)
            .with_generations(10)
            .with_mutation_rate(0.5)
            .with_max_results(3)
            .with_seed(42)
            .with_time_budget(Duration::from_millis(250));
        assert_eq!(c.population_size, 20);
        assert_eq!(c.generations, 10);
        assert_eq!(c.seed, Some(42));
        assert_eq!(c.time_budget(), Some(Duration::from_millis(250)));
        assert_eq!(c.result_count(), 3);
    }

    #[test]
    fn test_result_count_capped_by_population() {
        let c = GaConfig::default().with_population_size(4);
        assert_eq!(c.result_count(), 3);
        let c = GaConfig::default().with_population_size(2);
        assert_eq!(c.result_count(), 1);
    }

    #[test]
    fn test_population_upper_bound() {
        assert!(GaConfig::default()
            .with_population_size(MAX_POPULATION_SIZE)
            .validate()
            .is_ok());
        assert!(matches!(
            GaConfig::default()
                .with_population_size(MAX_POPULATION_SIZE + 1)
                .validate(),
            Err(ConfigError::PopulationTooLarge { .. })
        ));
        assert!(matches!(
            GaConfig::from_json(r#"{"population_size": 18446744073709551615}"#),
            Err(ConfigError::PopulationTooLarge {
                size: usize::MAX,
                max: MAX_POPULATION_SIZE,
            })
        ));
    }

    #[test]
    fn test_validation_errors() {
        assert!(matches!(
            GaConfig::default().with_population_size(1).validate(),
            Err(ConfigError::PopulationTooSmall(1))
        ));
        assert!(matches!(
            GaConfig::default().with_mutation_rate(1.5).validate(),
            Err(ConfigError::InvalidMutationRate(_))
        ));
        assert!(matches!(
            GaConfig::default().with_mutation_rate(f64::NAN).validate(),
            Err(ConfigError::InvalidMutationRate(_))
        ));
        assert!(matches!(
            GaConfig::default().with_max_results(0).validate(),
            Err(ConfigError::ZeroResults)
        ));
    }

    #[test]
    fn test_from_json() {
        let c = GaConfig::from_json(r#"{"population_size": 50, "time_budget_ms": 1000}"#).unwrap();
        assert_eq!(c.population_size, 50);
        assert_eq!(c.generations, 100);
        assert_eq!(c.time_budget(), Some(Duration::from_secs(1)));

        assert!(matches!(
            GaConfig::from_json(r#"{"mutation_rate": -0.1}"#),
            Err(ConfigError::InvalidMutationRate(_))
        ));
        assert!(matches!(
            GaConfig::from_json("{not json"),
            Err(ConfigError::Parse(_))
        ));
    }

    #[test]
    fn test_json_round_trip() {
        let c = GaConfig::default().with_seed(9);
        let json = serde_json::to_string(&c).unwrap();
        assert_eq!(GaConfig::from_json(&json).unwrap(), c);
    }
}
