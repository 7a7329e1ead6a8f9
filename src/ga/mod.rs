//! Genetic Algorithm engine for permutation-encoded tours.
//!
//! The engine is assembled from four strategies injected at construction:
//!
//! - [`Objective`]: scores a [`Tour`] (lower is better)
//! - [`Selector`]: picks parents from a scored population
//! - [`Crossover`]: combines two parents into one child
//! - [`Mutation`]: perturbs a child in place
//!
//! # Key Types
//!
//! - [`GaConfig`]: Algorithm parameters (population size, generations, segment length)
//! - [`GaEngine`]: Population manager and optimization loop
//! - [`GaResult`]: Final optimization result with cost history
//!
//! # Submodules
//!
//! - [`operators`]: Order-1 segment crossover and swap mutation
//!
//! # References
//!
//! - Holland (1975), *Adaptation in Natural and Artificial Systems*
//! - Goldberg (1989), *Genetic Algorithms in Search, Optimization, and Machine Learning*

mod config;
pub mod operators;
mod runner;
mod selection;
mod types;

pub use config::{GaConfig, Seeding};
pub use operators::{Order1Crossover, SwapMutation};
pub use runner::{EngineState, GaEngine, GaResult, GenerationStats};
pub use selection::RouletteWheel;
pub use types::{BestSolution, Crossover, Mutation, Objective, ScoredTour, Selector, Tour};
