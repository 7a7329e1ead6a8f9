//! Genetic algorithm for the Euclidean Traveling Salesman Problem.
//!
//! Searches for a short closed tour over a fixed set of planar points with
//! a population-based optimizer:
//!
//! - **Order-1 crossover**: keeps a contiguous block of one parent and fills
//!   the rest in the other parent's relative order.
//! - **Swap mutation**: exchanges two distinct positions.
//! - **Roulette-wheel selection**: fitness-proportionate parent sampling
//!   with costs inverted so shorter tours are favored.
//!
//! # Architecture
//!
//! - [`tsp`]: the problem (cities, city list parsing, tour length)
//! - [`ga`]: the engine (tours, strategies, configuration, the loop)
//! - [`random`]: seedable generators for reproducible runs
//!
//! The engine is single-threaded and synchronous. It logs through
//! `tracing` and installs no subscriber.
//!
//! # Example
//!
//! ```
//! use tsp_ga::ga::{GaConfig, GaEngine, Seeding};
//! use tsp_ga::tsp::parse_cities;
//!
//! let cities = parse_cities("1 0 0\n2 10 0\n3 10 10\n4 0 10\n5 5 15\n")?;
//! let mut engine = GaEngine::tsp(cities);
//! engine.seed(
//!     GaConfig::default()
//!         .with_population_size(20)
//!         .with_generations(100)
//!         .with_seeding(Seeding::Shuffle)
//!         .with_seed(7),
//! )?;
//! let result = engine.run()?;
//! assert!(result.best.is_permutation());
//! # Ok::<(), tsp_ga::GaError>(())
//! ```

pub mod error;
pub mod ga;
pub mod random;
pub mod tsp;

pub use error::GaError;
