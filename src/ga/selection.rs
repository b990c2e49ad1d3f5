//! Roulette-wheel selection with inverse-fitness weights.
//!
//! Fitness is minimized, so a feasible candidate with makespan `m` weighs
//! `1/m` and an infeasible one weighs nothing. Sampling is with
//! replacement: a strong candidate may fill many slots.
//!
//! # References
//!
//! - Goldberg (1989), *Genetic Algorithms in Search, Optimization, and
//!   Machine Learning*, ch. 1
//! - Blickle & Thiele (1996), "A Comparison of Selection Schemes used in
//!   Evolutionary Algorithms"

use super::types::{Fitness, Population};
use rand::Rng;

/// Samples a new population of the same size as `population`.
///
/// One uniform draw `r` in `[0, 1)` per output slot picks the first
/// candidate with non-zero weight whose cumulative probability is `>= r`.
/// Every slot is an independent copy.
///
/// If no candidate is feasible there is no selection pressure: the input
/// is returned as a copy and no random numbers are drawn.
///
/// # Panics
/// Panics if `population` and `fitness` differ in length.
pub fn select<R: Rng>(population: &Population, fitness: &[Fitness], rng: &mut R) -> Population {
    assert_eq!(
        population.len(),
        fitness.len(),
        "population and fitness must have equal length"
    );

    let weights: Vec<f64> = fitness.iter().map(|f| f.selection_weight()).collect();
    let total: f64 = weights.iter().sum();
    if total <= 0.0 {
        return population.clone();
    }

    let cumulative = cumulative_probabilities(&weights, total);
    // Rounding can leave the last cumulative value a hair below 1.0
    let fallback = weights
        .iter()
        .rposition(|&w| w > 0.0)
        .expect("total weight is positive");

    (0..population.len())
        .map(|_| {
            let r: f64 = rng.random();
            let idx = cumulative
                .iter()
                .zip(&weights)
                .position(|(&c, &w)| w > 0.0 && r <= c)
                .unwrap_or(fallback);
            population[idx].clone()
        })
        .collect()
}

/// Running sum of `weights[i] / total`.
fn cumulative_probabilities(weights: &[f64], total: f64) -> Vec<f64> {
    let mut acc = 0.0;
    weights
        .iter()
        .map(|&w| {
            acc += w / total;
            acc
        })
        .collect()
}
