//! The two-machine balancing problem and its fitness function.

use super::types::{Chromosome, Fitness, Gene};

/// Task durations plus the per-machine time ceiling.
///
/// The `i`-th gene of every chromosome refers to `durations[i]`.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct BalanceProblem {
    durations: Vec<u64>,
    ceiling: u64,
}

/// Total time assigned to each machine.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Loads {
    /// Sum of durations with gene `0`.
    pub zero: u64,
    /// Sum of durations with gene `1`.
    pub one: u64,
}

impl Loads {
    /// The makespan, ignoring the ceiling.
    pub fn makespan(&self) -> u64 {
        self.zero.max(self.one)
    }
}

/// The task split induced by a chromosome.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Partition {
    /// Durations of the tasks on machine 0, in task order.
    pub machine_zero: Vec<u64>,
    /// Durations of the tasks on machine 1, in task order.
    pub machine_one: Vec<u64>,
    /// Total of `machine_zero`.
    pub load_zero: u64,
    /// Total of `machine_one`.
    pub load_one: u64,
}

impl BalanceProblem {
    /// Creates a problem instance.
    pub fn new(durations: Vec<u64>, ceiling: u64) -> Self {
        Self { durations, ceiling }
    }

    /// Task durations, in task order.
    pub fn durations(&self) -> &[u64] {
        &self.durations
    }

    /// Per-machine time ceiling.
    pub fn ceiling(&self) -> u64 {
        self.ceiling
    }

    /// Number of tasks (= chromosome length).
    pub fn task_count(&self) -> usize {
        self.durations.len()
    }

    /// Sum of all durations, saturating at `u64::MAX`.
    pub fn total(&self) -> u64 {
        self.durations
            .iter()
            .fold(0u64, |acc, &d| acc.saturating_add(d))
    }

    /// No partition can have a makespan below this value:
    /// `max(ceil(total / 2), longest task)`.
    pub fn lower_bound(&self) -> u64 {
        let half = self.total().div_ceil(2);
        let longest = self.durations.iter().copied().max().unwrap_or(0);
        half.max(longest)
    }

    /// Machine loads induced by `chromosome`, each saturating at `u64::MAX`.
    ///
    /// # Panics
    /// Panics if the chromosome length differs from the task count.
    pub fn loads(&self, chromosome: &Chromosome) -> Loads {
        self.assignments(chromosome)
            .fold(Loads::default(), |mut acc, (g, d)| {
                match g {
                    Gene::Zero => acc.zero = acc.zero.saturating_add(d),
                    Gene::One => acc.one = acc.one.saturating_add(d),
                }
                acc
            })
    }

    /// Evaluates `chromosome`. See [`fitness`].
    ///
    /// A load whose exact sum does not fit in `u64` exceeds any ceiling.
    pub fn evaluate(&self, chromosome: &Chromosome) -> Fitness {
        let loads = self
            .assignments(chromosome)
            .try_fold(Loads::default(), |mut acc, (g, d)| {
                match g {
                    Gene::Zero => acc.zero = acc.zero.checked_add(d)?,
                    Gene::One => acc.one = acc.one.checked_add(d)?,
                }
                Some(acc)
            });
        match loads {
            Some(l) if l.zero <= self.ceiling && l.one <= self.ceiling => {
                Fitness::Feasible(l.makespan())
            }
            _ => Fitness::Infeasible,
        }
    }

    fn assignments<'a>(
        &'a self,
        chromosome: &'a Chromosome,
    ) -> impl Iterator<Item = (Gene, u64)> + 'a {
        assert_eq!(
            chromosome.len(),
            self.durations.len(),
            "chromosome length must equal task count"
        );
        chromosome
            .genes()
            .iter()
            .copied()
            .zip(self.durations.iter().copied())
    }

    /// Splits the tasks between the two machines according to `chromosome`.
    pub fn partition(&self, chromosome: &Chromosome) -> Partition {
        let mut machine_zero = Vec::new();
        let mut machine_one = Vec::new();
        for (&g, &d) in chromosome.genes().iter().zip(&self.durations) {
            match g {
                Gene::Zero => machine_zero.push(d),
                Gene::One => machine_one.push(d),
            }
        }
        let loads = self.loads(chromosome);
        Partition {
            load_zero: loads.zero,
            load_one: loads.one,
            machine_zero,
            machine_one,
        }
    }
}

/// Scores a chromosome against the task durations and the ceiling.
///
/// Returns [`Fitness::Infeasible`] when either machine load exceeds
/// `ceiling`, otherwise the makespan `max(load0, load1)`.
///
/// ```
/// use u_makespan::ga::{fitness, Chromosome, Fitness};
///
/// let c = Chromosome::from_bits(&[0, 1, 1, 0]);
/// assert_eq!(fitness(&c, &[5, 5, 5, 5], 10), Fitness::Feasible(10));
/// assert_eq!(fitness(&c, &[5, 5, 5, 5], 9), Fitness::Infeasible);
/// ```
pub fn fitness(chromosome: &Chromosome, durations: &[u64], ceiling: u64) -> Fitness {
    BalanceProblem::new(durations.to_vec(), ceiling).evaluate(chromosome)
}
