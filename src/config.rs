//! Run configuration.
//!
//! [`GaConfig`] holds every parameter that controls a run. All parameters
//! are constant for the lifetime of a run; the engine owns a copy and never
//! mutates it. Defaults match the reference knapsack setup.

use crate::error::ConfigError;
use serde::{Deserialize, Serialize};

/// Configuration for the knapsack genetic algorithm.
///
/// # Defaults
///
/// ```
/// use knapsack_ga::GaConfig;
///
/// let config = GaConfig::default();
/// assert_eq!(config.population_size, 20);
/// assert_eq!(config.generation_count, 100);
/// assert_eq!(config.knapsack_capacity, 50);
/// ```
///
/// # Builder Pattern
///
/// ```
/// use knapsack_ga::GaConfig;
///
/// let config = GaConfig::default()
///     .with_population_size(40)
///     .with_generation_count(200)
///     .with_seed(42);
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GaConfig {
    /// Number of individuals in the population.
    ///
    /// The population is replaced wholesale each generation and always
    /// holds exactly this many chromosomes.
    pub population_size: usize,

    /// Number of generations to run. A fixed iteration count is the sole
    /// termination condition; there is no convergence check.
    pub generation_count: usize,

    /// Probability that an offspring is mutated at all (0.0–1.0).
    ///
    /// One coin per offspring; on success a gene-flip mask is drawn and
    /// applied, on failure the offspring passes through unchanged.
    pub chromosome_mutation_probability: f64,

    /// Per-gene flip probability inside a mutation mask (0.0–1.0).
    pub gene_mutation_probability: f64,

    /// Knapsack capacity: the feasibility bound on aggregate volume.
    pub knapsack_capacity: u64,

    /// Random seed. Every draw in a run comes from one generator seeded
    /// with this value, so a fixed seed reproduces a fixed run exactly.
    pub seed: u64,
}

impl Default for GaConfig {
    fn default() -> Self {
        Self {
            population_size: 20,
            generation_count: 100,
            chromosome_mutation_probability: 0.3,
            gene_mutation_probability: 0.1,
            knapsack_capacity: 50,
            seed: 1975,
        }
    }
}

impl GaConfig {
    /// Sets the population size.
    pub fn with_population_size(mut self, n: usize) -> Self {
        self.population_size = n;
        self
    }

    /// Sets the generation count.
    pub fn with_generation_count(mut self, n: usize) -> Self {
        self.generation_count = n;
        self
    }

    /// Sets the per-offspring mutation probability.
    pub fn with_chromosome_mutation_probability(mut self, p: f64) -> Self {
        self.chromosome_mutation_probability = p;
        self
    }

    /// Sets the per-gene flip probability.
    pub fn with_gene_mutation_probability(mut self, p: f64) -> Self {
        self.gene_mutation_probability = p;
        self
    }

    /// Sets the knapsack capacity.
    pub fn with_knapsack_capacity(mut self, capacity: u64) -> Self {
        self.knapsack_capacity = capacity;
        self
    }

    /// Sets the random seed.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }

    /// Validates the configuration.
    ///
    /// Called by [`crate::GaEngine::new`]; invalid parameters are fatal at
    /// initialization and nothing inside the loop can fail afterwards. A
    /// validated configuration also guarantees the population is never
    /// empty (`population_size >= 2`, and replacement always refills to
    /// exactly that size), which the engine's result accessors rely on.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.population_size < 2 {
            return Err(ConfigError::PopulationTooSmall(self.population_size));
        }
        for (name, value) in [
            (
                "chromosome_mutation_probability",
                self.chromosome_mutation_probability,
            ),
            ("gene_mutation_probability", self.gene_mutation_probability),
        ] {
            if !(0.0..=1.0).contains(&value) {
                return Err(ConfigError::ProbabilityOutOfRange { name, value });
            }
        }
        if self.knapsack_capacity == 0 {
            return Err(ConfigError::ZeroCapacity);
        }
        Ok(())
    }
}
