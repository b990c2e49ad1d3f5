//! GA configuration.
//!
//! [`GaConfig`] holds all parameters that control the evolutionary loop.

/// When the run may stop before the generation budget is spent.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Termination {
    /// Stop at the first generation whose running best is feasible.
    #[default]
    FirstFeasible,

    /// Keep improving until the running best reaches the makespan lower
    /// bound `max(ceil(total / 2), longest task)`.
    LowerBound,
}

/// Reasons [`GaConfig::validate`] rejects a configuration.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ConfigError {
    #[error("population_size must be at least 1")]
    EmptyPopulation,
    #[error("max_generations must be at least 1")]
    ZeroGenerations,
    #[error("elite_count ({elite_count}) exceeds population_size ({population_size})")]
    TooManyElites {
        elite_count: usize,
        population_size: usize,
    },
    #[error("{name} must lie in [0, 1], got {value}")]
    RateOutOfRange { name: &'static str, value: f64 },
}

/// Configuration for the Genetic Algorithm.
///
/// # Defaults
///
/// ```
/// use u_makespan::ga::GaConfig;
///
/// let config = GaConfig::default();
/// assert_eq!(config.population_size, 50);
/// assert_eq!(config.max_generations, 1000);
/// assert_eq!(config.elite_count, 2);
/// ```
///
/// # Builder Pattern
///
/// ```
/// use u_makespan::ga::{GaConfig, Termination};
///
/// let config = GaConfig::default()
///     .with_population_size(80)
///     .with_mutation_rate(0.02)
///     .with_termination(Termination::LowerBound)
///     .with_seed(7);
/// assert!(config.validate().is_ok());
/// ```
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GaConfig {
    /// Number of chromosomes in the population.
    pub population_size: usize,

    /// Generation budget: the maximum number of generations evaluated.
    pub max_generations: usize,

    /// Number of best individuals copied unchanged into the next generation.
    pub elite_count: usize,

    /// Probability of recombining a pair of parents (0.0–1.0).
    ///
    /// Typical range: 0.4–0.7.
    pub crossover_rate: f64,

    /// Per-gene flip probability (0.0–1.0).
    pub mutation_rate: f64,

    /// Early-stop policy.
    pub termination: Termination,

    /// Random seed for reproducibility.
    ///
    /// `None` seeds from OS entropy.
    pub seed: Option<u64>,
}

impl Default for GaConfig {
    fn default() -> Self {
        Self {
            population_size: 50,
            max_generations: 1000,
            elite_count: 2,
            crossover_rate: 0.5,
            mutation_rate: 0.05,
            termination: Termination::default(),
            seed: None,
        }
    }
}

impl GaConfig {
    /// Sets the population size.
    pub fn with_population_size(mut self, n: usize) -> Self {
        self.population_size = n;
        self
    }

    /// Sets the generation budget.
    pub fn with_max_generations(mut self, n: usize) -> Self {
        self.max_generations = n;
        self
    }

    /// Sets the number of elites.
    pub fn with_elite_count(mut self, n: usize) -> Self {
        self.elite_count = n;
        self
    }

    /// Sets the crossover rate.
    pub fn with_crossover_rate(mut self, rate: f64) -> Self {
        self.crossover_rate = rate.clamp(0.0, 1.0);
        self
    }

    /// Sets the mutation rate.
    pub fn with_mutation_rate(mut self, rate: f64) -> Self {
        self.mutation_rate = rate.clamp(0.0, 1.0);
        self
    }

    /// Sets the early-stop policy.
    pub fn with_termination(mut self, termination: Termination) -> Self {
        self.termination = termination;
        self
    }

    /// Sets the random seed for reproducibility.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Validates the configuration.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.population_size == 0 {
            return Err(ConfigError::EmptyPopulation);
        }
        if self.max_generations == 0 {
            return Err(ConfigError::ZeroGenerations);
        }
        if self.elite_count > self.population_size {
            return Err(ConfigError::TooManyElites {
                elite_count: self.elite_count,
                population_size: self.population_size,
            });
        }
        for (name, value) in [
            ("crossover_rate", self.crossover_rate),
            ("mutation_rate", self.mutation_rate),
        ] {
            if !(0.0..=1.0).contains(&value) {
                return Err(ConfigError::RateOutOfRange { name, value });
            }
        }
        Ok(())
    }
}
