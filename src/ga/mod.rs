//! Genetic Algorithm for two-machine makespan balancing.
//!
//! A chromosome is a binary string with one gene per task; the gene says
//! which machine runs the task. Fitness is the makespan, or infeasible
//! when a machine exceeds the time ceiling.
//!
//! # Key Types
//!
//! - [`BalanceProblem`]: task durations and the ceiling
//! - [`GaConfig`]: population size, rates, elites, budget, stop policy
//! - [`GaRunner`]: executes the evolutionary loop
//! - [`GaResult`]: best chromosome, statistics, partition
//!
//! # Operators
//!
//! Each stage of a generation is a free function so it can be used and
//! tested alone: [`initialize`], [`fitness`], [`select`], [`crossover`],
//! [`mutate`], [`replace`].
//!
//! # References
//!
//! - Holland (1975), *Adaptation in Natural and Artificial Systems*
//! - Goldberg (1989), *Genetic Algorithms in Search, Optimization, and Machine Learning*
//! - De Jong (2006), *Evolutionary Computation: A Unified Approach*

mod config;
mod elitism;
pub mod operators;
mod problem;
mod runner;
mod selection;
mod types;

pub use config::{ConfigError, GaConfig, Termination};
pub use elitism::{elite_indices, replace};
pub use operators::{crossover, mutate, mutate_population, single_point_crossover};
pub use problem::{fitness, BalanceProblem, Loads, Partition};
pub use runner::{GaResult, GaRunner, GenerationStats, TerminationReason};
pub use selection::select;
pub use types::{initialize, Chromosome, Fitness, Gene, Population};
