//! Elitism replacement.
//!
//! The best individuals of the evaluated (pre-selection) generation are
//! written over the first slots of the offspring, bypassing selection,
//! crossover and mutation.

use super::types::{Fitness, Population};

/// Indices of the `count` fittest individuals, best first.
///
/// Ties are broken by lower index; each index appears at most once.
pub fn elite_indices(fitness: &[Fitness], count: usize) -> Vec<usize> {
    let mut order: Vec<usize> = (0..fitness.len()).collect();
    // Stable sort keeps the earliest index first among equal fitness
    order.sort_by_key(|&i| fitness[i]);
    order.truncate(count);
    order
}

/// Copies the `elite_count` best members of `current` into slots
/// `[0, elite_count)` of `new_population`.
///
/// `current_fitness` must be the fitness of `current`, index for index.
/// Slots at `elite_count` and beyond keep what crossover and mutation
/// produced.
///
/// # Panics
/// Panics if `elite_count` exceeds either population size, or if
/// `current` and `current_fitness` differ in length.
pub fn replace(
    current: &Population,
    current_fitness: &[Fitness],
    mut new_population: Population,
    elite_count: usize,
) -> Population {
    assert_eq!(
        current.len(),
        current_fitness.len(),
        "population and fitness must have equal length"
    );
    assert!(
        elite_count <= current.len() && elite_count <= new_population.len(),
        "elite_count exceeds population size"
    );

    for (slot, idx) in elite_indices(current_fitness, elite_count)
        .into_iter()
        .enumerate()
    {
        new_population[slot] = current[idx].clone();
    }
    new_population
}
