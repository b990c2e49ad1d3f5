//! GA evolutionary loop execution.
//!
//! [`GaRunner`] orchestrates one run:
//! initialization → evaluation → (stop | selection → crossover → mutation →
//! elitism → evaluation ...).
//!
//! # Random draw order
//!
//! All randomness comes from one generator, consumed in a fixed order:
//!
//! 1. one draw per gene while building the initial population
//! 2. per generation, one draw per selection slot (none when every
//!    candidate is infeasible)
//! 3. one or two draws per crossover pair (cut point, then rate check)
//! 4. one draw per gene during mutation, chromosome by chromosome
//!
//! so a fixed seed reproduces the whole run.

use super::config::{GaConfig, Termination};
use super::elitism::replace;
use super::operators::{crossover, mutate_population};
use super::problem::{BalanceProblem, Partition};
use super::selection::select;
use super::types::{initialize, Chromosome, Fitness};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use tracing::{debug, info, trace};

/// Why a run stopped.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum TerminationReason {
    /// [`Termination::FirstFeasible`]: a feasible chromosome was found.
    FeasibleFound,
    /// [`Termination::LowerBound`]: the best makespan hit the lower bound.
    LowerBoundReached,
    /// The generation budget ran out first.
    BudgetExhausted,
}

/// Summary of one evaluated generation.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GenerationStats {
    /// Zero-based generation index.
    pub generation: usize,
    /// Best fitness within this generation only.
    pub best: Fitness,
    /// Number of feasible chromosomes.
    pub feasible: usize,
    /// Mean makespan over feasible chromosomes.
    pub mean_makespan: Option<f64>,
}

impl GenerationStats {
    fn from_fitness(generation: usize, fitness: &[Fitness]) -> Self {
        let makespans: Vec<u64> = fitness.iter().filter_map(|f| f.makespan()).collect();
        let mean_makespan = (!makespans.is_empty())
            .then(|| makespans.iter().sum::<u64>() as f64 / makespans.len() as f64);
        Self {
            generation,
            best: fitness.iter().copied().min().unwrap_or(Fitness::worst()),
            feasible: makespans.len(),
            mean_makespan,
        }
    }
}

/// Result of a GA run.
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GaResult {
    /// The best chromosome found during the entire run.
    ///
    /// When nothing feasible was found this is the first chromosome of the
    /// initial population.
    pub best: Chromosome,

    /// Fitness of `best`.
    pub best_fitness: Fitness,

    /// Number of generations evaluated (generation 0 included).
    pub generations: usize,

    /// Why the run stopped.
    pub reason: TerminationReason,

    /// Running best fitness after each evaluated generation.
    pub fitness_history: Vec<Fitness>,

    /// Per-generation statistics.
    pub stats: Vec<GenerationStats>,
}

impl GaResult {
    /// Returns `true` if a feasible chromosome was found.
    pub fn is_feasible(&self) -> bool {
        self.best_fitness.is_feasible()
    }

    /// The task split of the best chromosome, if it is feasible.
    pub fn partition(&self, problem: &BalanceProblem) -> Option<Partition> {
        self.is_feasible().then(|| problem.partition(&self.best))
    }
}

/// Executes the GA evolutionary loop.
///
/// # Usage
///
/// ```
/// use u_makespan::ga::{BalanceProblem, GaConfig, GaRunner};
///
/// let problem = BalanceProblem::new(vec![5, 5, 5, 5], 10);
/// let config = GaConfig::default().with_seed(42);
/// let result = GaRunner::run(&problem, &config);
/// assert_eq!(result.best_fitness.makespan(), Some(10));
/// ```
pub struct GaRunner;

impl GaRunner {
    /// Runs the GA with a generator seeded from [`GaConfig::seed`].
    ///
    /// # Panics
    /// Panics if the configuration is invalid (call [`GaConfig::validate`]
    /// first to get a descriptive error).
    pub fn run(problem: &BalanceProblem, config: &GaConfig) -> GaResult {
        let mut rng = match config.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::seed_from_u64(rand::random()),
        };
        Self::run_with_rng(problem, config, &mut rng)
    }

    /// Runs the GA drawing every random number from `rng`.
    ///
    /// [`GaConfig::seed`] is ignored.
    ///
    /// # Panics
    /// Panics if the configuration is invalid.
    pub fn run_with_rng<R: Rng>(
        problem: &BalanceProblem,
        config: &GaConfig,
        rng: &mut R,
    ) -> GaResult {
        if let Err(e) = config.validate() {
            panic!("invalid GaConfig: {e}");
        }

        let lower_bound = problem.lower_bound();

        // 1. Initialize population
        let mut population = initialize(config.population_size, problem.task_count(), rng);

        let mut best = population[0].clone();
        let mut best_fitness = Fitness::worst();
        let mut fitness_history = Vec::new();
        let mut stats = Vec::new();
        let mut generation = 0;

        loop {
            // 2. Evaluate
            let fitness: Vec<Fitness> = population.iter().map(|c| problem.evaluate(c)).collect();

            let gen_best = best_index(&fitness);
            if fitness[gen_best] < best_fitness {
                best_fitness = fitness[gen_best];
                best = population[gen_best].clone();
                debug!(generation, best = %best_fitness, "new best chromosome");
            }

            fitness_history.push(best_fitness);
            let gen_stats = GenerationStats::from_fitness(generation, &fitness);
            trace!(
                generation,
                feasible = gen_stats.feasible,
                generation_best = %gen_stats.best,
                "generation evaluated"
            );
            stats.push(gen_stats);

            // 3. Termination check
            let reason = match config.termination {
                Termination::FirstFeasible if best_fitness.is_feasible() => {
                    Some(TerminationReason::FeasibleFound)
                }
                Termination::LowerBound
                    if best_fitness.makespan().is_some_and(|m| m <= lower_bound) =>
                {
                    Some(TerminationReason::LowerBoundReached)
                }
                _ if generation + 1 >= config.max_generations => {
                    Some(TerminationReason::BudgetExhausted)
                }
                _ => None,
            };

            if let Some(reason) = reason {
                info!(
                    generations = generation + 1,
                    best = %best_fitness,
                    ?reason,
                    "run finished"
                );
                return GaResult {
                    best,
                    best_fitness,
                    generations: generation + 1,
                    reason,
                    fitness_history,
                    stats,
                };
            }

            // 4. Select → crossover → mutate → elitism
            let selected = select(&population, &fitness, rng);
            let mut offspring = crossover(&selected, config.crossover_rate, rng);
            mutate_population(&mut offspring, config.mutation_rate, rng);
            population = replace(&population, &fitness, offspring, config.elite_count);

            generation += 1;
        }
    }
}

/// Index of the best (lowest) fitness; the first one on ties.
fn best_index(fitness: &[Fitness]) -> usize {
    fitness
        .iter()
        .enumerate()
        .min_by_key(|&(_, f)| *f)
        .map(|(i, _)| i)
        .expect("population must not be empty")
}

// ============================================================================
// Tests
// ============================================================================
