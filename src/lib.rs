//! Generational genetic algorithm for the 0/1 knapsack problem.
//!
//! Given a catalog of items, each with a volume and a value, the engine
//! searches for a near-optimal subset whose total volume fits a knapsack
//! capacity and whose total value is as large as possible. The search is a
//! classic generational GA:
//!
//! - **Chromosome**: one boolean gene per catalog item ([`Chromosome`])
//! - **Selection**: panmixia — uniform random pairing, no fitness bias
//! - **Crossover**: single interior cut point, head/tail splice
//! - **Mutation**: per-offspring coin gating a per-gene flip mask
//! - **Replacement**: elitist truncation of the combined pool
//!
//! A run is fully determined by the catalog, the configuration, and the
//! seed: the engine owns one random source and every draw comes from it in
//! a fixed order. The engine is an explicit state machine ([`GaEngine`],
//! [`EngineState`]) stepped one generation at a time, terminating after a
//! fixed generation count.
//!
//! # Example
//!
//! ```
//! use knapsack_ga::{Catalog, GaConfig, GaEngine};
//!
//! let catalog = Catalog::from_csv_reader(
//!     "rope,10,60\naxe,20,100\ntent,30,120\n".as_bytes(),
//! ).unwrap();
//! let config = GaConfig::default().with_seed(1975);
//!
//! let mut engine = GaEngine::new(catalog, config).unwrap();
//! let result = engine.run();
//! println!("{} -> fitness {}", result.best, result.best_fitness);
//! ```
//!
//! # Feature Flags
//!
//! - `parallel`: evaluate candidate fitness with rayon during replacement.
//!   Fitness is a pure function of chromosome, catalog, and capacity, so
//!   this does not disturb reproducibility; nothing that consumes the
//!   random source is ever parallelized.

pub mod catalog;
pub mod chromosome;
pub mod config;
pub mod engine;
pub mod error;
pub mod operators;
pub mod population;
pub mod selection;

pub use catalog::{Catalog, Item};
pub use chromosome::Chromosome;
pub use config::GaConfig;
pub use engine::{EngineState, GaEngine, GaResult};
pub use error::{CatalogError, ConfigError};
