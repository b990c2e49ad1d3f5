//! Binary-string crossover and mutation operators.
//!
//! # Crossover
//!
//! - [`crossover`]: single-point crossover over consecutive pairs, with a
//!   fresh random cut point per pair
//! - [`single_point_crossover`]: the recombination step for a known cut
//!
//! # Mutation
//!
//! - [`mutate`]: independent per-gene bit flip
//! - [`mutate_population`]: [`mutate`] applied to every chromosome in order
//!
//! # References
//!
//! - Holland (1975), *Adaptation in Natural and Artificial Systems*
//! - De Jong (1975), "An Analysis of the Behavior of a Class of Genetic
//!   Adaptive Systems"

use super::types::{Chromosome, Population};
use rand::Rng;

// ============================================================================
// Crossover operators
// ============================================================================

/// Recombines a selected population pair by pair.
///
/// Pairs are `(0, 1), (2, 3), ...`; with an odd size the last individual
/// is paired with the first. For each pair:
///
/// 1. draw a cut point `k` uniformly from `[1, L - 1]`
/// 2. draw `r2` uniformly from `[0, 1)`
/// 3. if `r2 <= crossover_rate`, emit `p1[..k] ++ p2[k..]` and
///    `p2[..k] ++ p1[k..]`; otherwise emit copies of both parents
///
/// Chromosomes shorter than two genes have no cut point: step 1 is skipped
/// and the parents are copied whatever `r2` is.
///
/// The output always has the input's size. With an odd input the
/// wrap-around pair yields one child too many; that surplus second child
/// is dropped.
pub fn crossover<R: Rng>(selected: &Population, crossover_rate: f64, rng: &mut R) -> Population {
    let n = selected.len();
    let mut offspring = Vec::with_capacity(n + 1);

    for i in (0..n).step_by(2) {
        let parent1 = &selected[i];
        let parent2 = &selected[(i + 1) % n];
        let len = parent1.len();

        let point = (len >= 2).then(|| rng.random_range(1..len));
        let r2: f64 = rng.random();

        match point {
            Some(k) if r2 <= crossover_rate => {
                let (c1, c2) = single_point_crossover(parent1, parent2, k);
                offspring.push(c1);
                offspring.push(c2);
            }
            _ => {
                offspring.push(parent1.clone());
                offspring.push(parent2.clone());
            }
        }
    }

    offspring.truncate(n);
    offspring
}

/// Single-point crossover at cut `point`.
///
/// Returns `(p1[..point] ++ p2[point..], p2[..point] ++ p1[point..])`.
///
/// # Panics
/// Panics if the parents differ in length or `point > len`.
pub fn single_point_crossover(
    parent1: &Chromosome,
    parent2: &Chromosome,
    point: usize,
) -> (Chromosome, Chromosome) {
    let len = parent1.len();
    assert_eq!(len, parent2.len(), "parents must have equal length");
    assert!(point <= len, "crossover point out of range");

    let (a, b) = (parent1.genes(), parent2.genes());
    let child1 = a[..point].iter().chain(&b[point..]).copied().collect();
    let child2 = b[..point].iter().chain(&a[point..]).copied().collect();
    (Chromosome::new(child1), Chromosome::new(child2))
}

// ============================================================================
// Mutation operators
// ============================================================================

/// Bit-flip mutation.
///
/// Draws one uniform `r` in `[0, 1)` per gene and flips the gene when
/// `r <= mutation_rate`.
///
/// # Complexity
/// O(L)
pub fn mutate<R: Rng>(chromosome: &mut Chromosome, mutation_rate: f64, rng: &mut R) {
    for gene in chromosome.genes_mut() {
        let r: f64 = rng.random();
        if r <= mutation_rate {
            *gene = gene.flip();
        }
    }
}

/// Applies [`mutate`] to every chromosome, front to back.
pub fn mutate_population<R: Rng>(population: &mut Population, mutation_rate: f64, rng: &mut R) {
    for chromosome in population.iter_mut() {
        mutate(chromosome, mutation_rate, rng);
    }
}

// ============================================================================
// Tests
// ============================================================================
