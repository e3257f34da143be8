//! Error types for catalog loading and configuration validation.
//!
//! Both errors are fatal at initialization time. Once a [`crate::GaEngine`]
//! is constructed, the generational loop contains no fallible operations:
//! selection, crossover, mutation, and replacement are total functions over
//! well-formed inputs.

use thiserror::Error;

/// Failure to load or validate the item catalog.
///
/// Surfaced before the engine initializes; there is no partial or degraded
/// initialization.
#[derive(Error, Debug)]
pub enum CatalogError {
    #[error("I/O error reading item catalog: {0}")]
    Io(#[from] std::io::Error),

    #[error("malformed catalog record: {0}")]
    Csv(#[from] csv::Error),

    /// Item names must be unique: the name-sorted index is the only link
    /// between an item and its gene position.
    #[error("duplicate item name in catalog: {0:?}")]
    DuplicateName(String),

    #[error("item catalog is empty")]
    Empty,
}

/// Invalid run configuration, rejected by [`crate::GaConfig::validate`].
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("population_size must be at least 2, got {0}")]
    PopulationTooSmall(usize),

    #[error("{name} must be within [0, 1], got {value}")]
    ProbabilityOutOfRange { name: &'static str, value: f64 },

    #[error("knapsack_capacity must be positive")]
    ZeroCapacity,
}
