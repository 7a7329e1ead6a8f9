//! GA configuration.
//!
//! [`GaConfig`] holds all parameters that control the evolutionary loop.

use super::types::{check_city_count, Tour};
use crate::error::GaError;

/// How the initial population is built.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Seeding {
    /// Every slot starts as `[0, 1, ..., n - 1]`.
    #[default]
    Identity,
    /// Every slot gets an independent uniformly random permutation.
    Shuffle,
    /// Every slot gets a copy of the given tour.
    Template(Tour),
}

/// Configuration for the Genetic Algorithm.
///
/// # Defaults
///
/// ```
/// use tsp_ga::ga::GaConfig;
///
/// let config = GaConfig::default();
/// assert_eq!(config.population_size, 30);
/// assert_eq!(config.generations, 1500);
/// assert_eq!(config.segment_length, 3);
/// ```
///
/// # Builder Pattern
///
/// ```
/// use tsp_ga::ga::{GaConfig, Seeding};
///
/// let config = GaConfig::default()
///     .with_population_size(20)
///     .with_generations(200)
///     .with_seeding(Seeding::Shuffle)
///     .with_seed(42);
/// ```
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GaConfig {
    /// Number of tours in every generation.
    pub population_size: usize,

    /// Number of generations to run before terminating.
    ///
    /// Zero is allowed: the seeded population is scored and returned.
    pub generations: usize,

    /// Number of consecutive positions copied from the first parent during
    /// crossover. Must be positive and less than the city count.
    pub segment_length: usize,

    /// Probability of mutating an offspring (0.0–1.0).
    ///
    /// The default of 1.0 mutates every child.
    pub mutation_rate: f64,

    /// Initial population construction.
    pub seeding: Seeding,

    /// Random seed for reproducibility.
    ///
    /// `None` uses a random seed.
    pub seed: Option<u64>,

    /// Emit an `info` progress event every this many generations.
    ///
    /// Set to 0 to disable.
    pub report_interval: usize,
}

impl Default for GaConfig {
    fn default() -> Self {
        Self {
            population_size: 30,
            generations: 1500,
            segment_length: 3,
            mutation_rate: 1.0,
            seeding: Seeding::Identity,
            seed: None,
            report_interval: 100,
        }
    }
}

impl GaConfig {
    /// Sets the population size.
    pub fn with_population_size(mut self, n: usize) -> Self {
        self.population_size = n;
        self
    }

    /// Sets the number of generations.
    pub fn with_generations(mut self, n: usize) -> Self {
        self.generations = n;
        self
    }

    /// Sets the crossover segment length.
    pub fn with_segment_length(mut self, len: usize) -> Self {
        self.segment_length = len;
        self
    }

    /// Sets the mutation rate.
    pub fn with_mutation_rate(mut self, rate: f64) -> Self {
        self.mutation_rate = rate.clamp(0.0, 1.0);
        self
    }

    /// Sets the initial population construction.
    pub fn with_seeding(mut self, seeding: Seeding) -> Self {
        self.seeding = seeding;
        self
    }

    /// Sets the random seed for reproducibility.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Sets the progress report interval (0 to disable).
    pub fn with_report_interval(mut self, interval: usize) -> Self {
        self.report_interval = interval;
        self
    }

    /// Validates the configuration against a problem with `city_count` cities.
    ///
    /// # Errors
    /// - [`GaError::InvalidState`] if `city_count < 2`
    /// - [`GaError::InvalidArgument`] for any other out-of-range parameter
    pub fn validate(&self, city_count: usize) -> Result<(), GaError> {
        check_city_count(city_count)?;
        if self.population_size == 0 {
            return Err(GaError::invalid_argument("population_size must be positive"));
        }
        if self.segment_length == 0 {
            return Err(GaError::invalid_argument("segment_length must be positive"));
        }
        if self.segment_length >= city_count {
            return Err(GaError::invalid_argument(format!(
                "segment_length ({}) must be less than the city count ({city_count})",
                self.segment_length
            )));
        }
        if !(0.0..=1.0).contains(&self.mutation_rate) {
            return Err(GaError::invalid_argument(format!(
                "mutation_rate must be within [0, 1], got {}",
                self.mutation_rate
            )));
        }
        if let Seeding::Template(tour) = &self.seeding {
            if tour.len() != city_count || !tour.is_permutation() {
                return Err(GaError::invalid_argument(format!(
                    "template must be a permutation of 0..{city_count}"
                )));
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = GaConfig::default();
        assert_eq!(config.population_size, 30);
        assert_eq!(config.generations, 1500);
        assert_eq!(config.segment_length, 3);
        assert!((config.mutation_rate - 1.0).abs() < 1e-10);
        assert_eq!(config.seeding, Seeding::Identity);
        assert!(config.seed.is_none());
        assert_eq!(config.report_interval, 100);
    }

    #[test]
    fn test_builder_pattern() {
        let config = GaConfig::default()
            .with_population_size(20)
            .with_generations(200)
            .with_segment_length(2)
            .with_mutation_rate(0.5)
            .with_seeding(Seeding::Shuffle)
            .with_seed(42)
            .with_report_interval(0);

        assert_eq!(config.population_size, 20);
        assert_eq!(config.generations, 200);
        assert_eq!(config.segment_length, 2);
        assert!((config.mutation_rate - 0.5).abs() < 1e-10);
        assert_eq!(config.seeding, Seeding::Shuffle);
        assert_eq!(config.seed, Some(42));
        assert_eq!(config.report_interval, 0);
    }

    #[test]
    fn test_clamp_mutation_rate() {
        assert!((GaConfig::default().with_mutation_rate(2.0).mutation_rate - 1.0).abs() < 1e-10);
        assert!(GaConfig::default().with_mutation_rate(-1.0).mutation_rate.abs() < 1e-10);
    }

    #[test]
    fn test_validate_ok() {
        assert!(GaConfig::default().validate(15).is_ok());
        assert!(GaConfig::default().with_generations(0).validate(15).is_ok());
    }

    #[test]
    fn test_validate_degenerate_problem() {
        let config = GaConfig::default().with_segment_length(1);
        assert!(matches!(config.validate(1), Err(GaError::InvalidState(_))));
        assert!(matches!(config.validate(0), Err(GaError::InvalidState(_))));
    }

    #[test]
    fn test_validate_zero_population() {
        let config = GaConfig::default().with_population_size(0);
        assert!(matches!(config.validate(10), Err(GaError::InvalidArgument(_))));
    }

    #[test]
    fn test_validate_segment_length() {
        let config = GaConfig::default().with_segment_length(4);
        assert!(matches!(config.validate(4), Err(GaError::InvalidArgument(_))));
        assert!(config.validate(5).is_ok());

        let config = GaConfig::default().with_segment_length(0);
        assert!(matches!(config.validate(5), Err(GaError::InvalidArgument(_))));
    }

    #[test]
    fn test_validate_unclamped_mutation_rate() {
        let config = GaConfig {
            mutation_rate: 1.5,
            ..GaConfig::default()
        };
        assert!(matches!(config.validate(10), Err(GaError::InvalidArgument(_))));
    }

    #[test]
    fn test_validate_template() {
        let good = Tour::from_vec(vec![3, 1, 0, 2]).unwrap();
        let config = GaConfig::default()
            .with_segment_length(2)
            .with_seeding(Seeding::Template(good));
        assert!(config.validate(4).is_ok());
        assert!(matches!(config.validate(5), Err(GaError::InvalidArgument(_))));
    }
}
