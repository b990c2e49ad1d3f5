//! Two-machine makespan balancing with a genetic algorithm.
//!
//! Given task durations and a per-machine time ceiling, find a split of the
//! tasks between two machines that keeps both under the ceiling while
//! minimizing the makespan (the load of the busier machine). The search is
//! a best-effort stochastic heuristic bounded by a generation budget.
//!
//! - [`ga`]: chromosome model, fitness, selection, crossover, mutation,
//!   elitism and the evolutionary loop
//! - [`instance`]: reader for the line-oriented test-case format
//! - [`report`]: per-test-case output
//!
//! # Example
//!
//! ```
//! use u_makespan::ga::{BalanceProblem, GaConfig, GaRunner};
//!
//! let problem = BalanceProblem::new(vec![4, 7, 3, 6], 12);
//! let result = GaRunner::run(&problem, &GaConfig::default().with_seed(1));
//! if let Some(split) = result.partition(&problem) {
//!     assert!(split.load_zero <= 12 && split.load_one <= 12);
//! }
//! ```

pub mod ga;
pub mod instance;
pub mod report;
