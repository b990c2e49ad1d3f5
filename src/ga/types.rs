//! Core data model for the GA.
//!
//! A [`Chromosome`] assigns every task to one of two machines via a
//! [`Gene`]. Fitness is kept outside the chromosome, in a [`Fitness`]
//! vector parallel to the [`Population`], because chromosome contents
//! change every generation.

use rand::Rng;
use std::cmp::Ordering;
use std::fmt;
use std::ops::Index;

/// One binary assignment decision: which machine runs the task.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Gene {
    /// Task runs on machine 0.
    Zero,
    /// Task runs on machine 1.
    One,
}

impl Gene {
    /// Draws a gene uniformly from {0, 1}.
    pub fn random<R: Rng>(rng: &mut R) -> Self {
        if rng.random_bool(0.5) {
            Gene::One
        } else {
            Gene::Zero
        }
    }

    /// Returns the other machine.
    pub fn flip(self) -> Self {
        match self {
            Gene::Zero => Gene::One,
            Gene::One => Gene::Zero,
        }
    }

    /// Machine index, `0` or `1`.
    pub fn machine(self) -> usize {
        match self {
            Gene::Zero => 0,
            Gene::One => 1,
        }
    }
}

impl From<bool> for Gene {
    fn from(one: bool) -> Self {
        if one {
            Gene::One
        } else {
            Gene::Zero
        }
    }
}

impl fmt::Display for Gene {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.machine())
    }
}

/// A candidate solution: one [`Gene`] per task.
///
/// `Clone` performs a deep copy, so two population slots never share
/// storage and mutating one cannot leak into another.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Chromosome {
    genes: Vec<Gene>,
}

impl Chromosome {
    /// Wraps an explicit gene vector.
    pub fn new(genes: Vec<Gene>) -> Self {
        Self { genes }
    }

    /// Builds a chromosome from `0`/`1` digits; any non-zero value is `1`.
    ///
    /// ```
    /// use u_makespan::ga::{Chromosome, Gene};
    ///
    /// let c = Chromosome::from_bits(&[0, 1, 1]);
    /// assert_eq!(c.genes(), &[Gene::Zero, Gene::One, Gene::One]);
    /// ```
    pub fn from_bits(bits: &[u8]) -> Self {
        Self {
            genes: bits.iter().map(|&b| Gene::from(b != 0)).collect(),
        }
    }

    /// Creates a chromosome of `len` uniformly random genes.
    ///
    /// Consumes exactly one draw per gene.
    pub fn random<R: Rng>(len: usize, rng: &mut R) -> Self {
        Self {
            genes: (0..len).map(|_| Gene::random(rng)).collect(),
        }
    }

    /// Number of genes (= number of tasks).
    pub fn len(&self) -> usize {
        self.genes.len()
    }

    /// Returns `true` if the chromosome has no genes.
    pub fn is_empty(&self) -> bool {
        self.genes.is_empty()
    }

    /// Read-only view of the genes.
    pub fn genes(&self) -> &[Gene] {
        &self.genes
    }

    /// Mutable view of the genes. Length cannot change through it.
    pub fn genes_mut(&mut self) -> &mut [Gene] {
        &mut self.genes
    }
}

impl Index<usize> for Chromosome {
    type Output = Gene;

    fn index(&self, idx: usize) -> &Gene {
        &self.genes[idx]
    }
}

impl fmt::Display for Chromosome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[")?;
        for (i, g) in self.genes.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{g}")?;
        }
        write!(f, "]")
    }
}

/// An ordered, fixed-size collection of chromosomes.
pub type Population = Vec<Chromosome>;

/// Builds the initial population.
///
/// Every chromosome gets `gene_count` independent uniform genes. Draws are
/// consumed chromosome by chromosome, gene by gene.
pub fn initialize<R: Rng>(population_size: usize, gene_count: usize, rng: &mut R) -> Population {
    (0..population_size)
        .map(|_| Chromosome::random(gene_count, rng))
        .collect()
}

/// Fitness of a chromosome. Lower is better (minimization).
///
/// Every feasible value orders before [`Fitness::Infeasible`], so the
/// derived ordering can be used directly for "best" searches.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Fitness {
    /// Both machine loads are within the ceiling; the value is the makespan.
    Feasible(u64),
    /// At least one machine load exceeds the ceiling.
    Infeasible,
}

impl Fitness {
    /// Returns a value representing the worst possible fitness.
    pub fn worst() -> Self {
        Fitness::Infeasible
    }

    /// Returns `true` for [`Fitness::Feasible`].
    pub fn is_feasible(self) -> bool {
        matches!(self, Fitness::Feasible(_))
    }

    /// The makespan, if feasible.
    pub fn makespan(self) -> Option<u64> {
        match self {
            Fitness::Feasible(m) => Some(m),
            Fitness::Infeasible => None,
        }
    }

    /// Integer encoding with `u64::MAX` standing for infeasible.
    pub fn to_raw(self) -> u64 {
        self.makespan().unwrap_or(u64::MAX)
    }

    /// Roulette weight: `1 / makespan` when feasible, `0` otherwise.
    ///
    /// A makespan of `0` (only possible with no tasks) weighs `1`.
    pub fn selection_weight(self) -> f64 {
        match self {
            Fitness::Feasible(0) => 1.0,
            Fitness::Feasible(m) => 1.0 / m as f64,
            Fitness::Infeasible => 0.0,
        }
    }

    /// Converts the fitness to `f64` for logging and statistics.
    pub fn to_f64(self) -> f64 {
        match self {
            Fitness::Feasible(m) => m as f64,
            Fitness::Infeasible => f64::INFINITY,
        }
    }
}

impl PartialOrd for Fitness {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Fitness {
    fn cmp(&self, other: &Self) -> Ordering {
        match (self, other) {
            (Fitness::Feasible(a), Fitness::Feasible(b)) => a.cmp(b),
            (Fitness::Feasible(_), Fitness::Infeasible) => Ordering::Less,
            (Fitness::Infeasible, Fitness::Feasible(_)) => Ordering::Greater,
            (Fitness::Infeasible, Fitness::Infeasible) => Ordering::Equal,
        }
    }
}

impl fmt::Display for Fitness {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Fitness::Feasible(m) => write!(f, "{m}"),
            Fitness::Infeasible => write!(f, "infeasible"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn test_gene_flip() {
        assert_eq!(Gene::Zero.flip(), Gene::One);
        assert_eq!(Gene::One.flip(), Gene::Zero);
        assert_eq!(Gene::One.flip().flip(), Gene::One);
    }

    #[test]
    fn test_initialize_shape() {
        let mut rng = StdRng::seed_from_u64(42);
        let pop = initialize(7, 13, &mut rng);
        assert_eq!(pop.len(), 7);
        assert!(pop.iter().all(|c| c.len() == 13));
    }

    #[test]
    fn test_initialize_zero_genes() {
        let mut rng = StdRng::seed_from_u64(42);
        let pop = initialize(4, 0, &mut rng);
        assert_eq!(pop.len(), 4);
        assert!(pop.iter().all(Chromosome::is_empty));
    }

    #[test]
    fn test_initialize_uses_both_genes() {
        let mut rng = StdRng::seed_from_u64(7);
        let pop = initialize(20, 50, &mut rng);
        let ones = pop
            .iter()
            .flat_map(|c| c.genes().iter())
            .filter(|&&g| g == Gene::One)
            .count();
        // 1000 fair coin flips
        assert!(ones > 400 && ones < 600, "ones = {ones}");
    }

    #[test]
    fn test_initialize_no_aliasing() {
        let mut rng = StdRng::seed_from_u64(1);
        let mut pop = initialize(2, 4, &mut rng);
        let before = pop[1].clone();
        for g in pop[0].genes_mut() {
            *g = g.flip();
        }
        assert_eq!(pop[1], before);
    }

    #[test]
    fn test_initialize_reproducible() {
        let a = initialize(5, 9, &mut StdRng::seed_from_u64(99));
        let b = initialize(5, 9, &mut StdRng::seed_from_u64(99));
        assert_eq!(a, b);
    }

    #[test]
    fn test_fitness_ordering() {
        assert!(Fitness::Feasible(3) < Fitness::Feasible(4));
        assert!(Fitness::Feasible(u64::MAX) < Fitness::Infeasible);
        assert_eq!(Fitness::Infeasible.cmp(&Fitness::worst()), Ordering::Equal);
    }

    #[test]
    fn test_fitness_weight() {
        assert!((Fitness::Feasible(4).selection_weight() - 0.25).abs() < 1e-12);
        assert_eq!(Fitness::Infeasible.selection_weight(), 0.0);
        assert_eq!(Fitness::Feasible(0).selection_weight(), 1.0);
        assert_eq!(Fitness::Infeasible.to_raw(), u64::MAX);
    }

    #[test]
    fn test_chromosome_display() {
        let c = Chromosome::from_bits(&[1, 0, 1]);
        assert_eq!(c.to_string(), "[1, 0, 1]");
        assert_eq!(Chromosome::default().to_string(), "[]");
    }
}
