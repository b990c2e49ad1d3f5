//! Human-readable per-test-case output.

use crate::ga::{BalanceProblem, Chromosome, Fitness, GaResult, Partition};
use std::fmt;

/// The printable outcome of one test case.
#[derive(Debug, Clone, PartialEq)]
pub struct CaseReport {
    /// 1-based test case number.
    pub case: usize,
    /// The solved assignment, `None` when nothing feasible was found.
    pub solution: Option<Solution>,
}

/// A feasible assignment and its task split.
#[derive(Debug, Clone, PartialEq)]
pub struct Solution {
    /// Load of the busier machine.
    pub makespan: u64,
    /// The best chromosome found.
    pub chromosome: Chromosome,
    /// Tasks and totals per machine under `chromosome`.
    pub partition: Partition,
}

impl CaseReport {
    /// Builds the report for `result`.
    pub fn new(case: usize, problem: &BalanceProblem, result: &GaResult) -> Self {
        let solution = match (result.best_fitness, result.partition(problem)) {
            (Fitness::Feasible(makespan), Some(partition)) => Some(Solution {
                makespan,
                chromosome: result.best.clone(),
                partition,
            }),
            _ => None,
        };
        Self { case, solution }
    }
}

impl fmt::Display for CaseReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Test Case #{}", self.case)?;
        let Some(s) = &self.solution else {
            return writeln!(f, "No feasible solution found");
        };
        writeln!(f, "Best Fitness (Score): {}", s.makespan)?;
        writeln!(f, "Best Chromosome: {}", s.chromosome)?;
        writeln!(
            f,
            "Machine 0 Tasks: {:?} | Total Time: {}",
            s.partition.machine_zero, s.partition.load_zero
        )?;
        writeln!(
            f,
            "Machine 1 Tasks: {:?} | Total Time: {}",
            s.partition.machine_one, s.partition.load_one
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ga::TerminationReason;

    fn result_with(best: Chromosome, best_fitness: Fitness) -> GaResult {
        GaResult {
            best,
            best_fitness,
            generations: 1,
            reason: TerminationReason::FeasibleFound,
            fitness_history: vec![best_fitness],
            stats: Vec::new(),
        }
    }

    #[test]
    fn test_feasible_report() {
        let problem = BalanceProblem::new(vec![5, 5, 5, 5], 10);
        let result = result_with(Chromosome::from_bits(&[0, 1, 1, 0]), Fitness::Feasible(10));
        let report = CaseReport::new(1, &problem, &result);

        assert_eq!(
            report.to_string(),
            "Test Case #1\n\
             Best Fitness (Score): 10\n\
             Best Chromosome: [0, 1, 1, 0]\n\
             Machine 0 Tasks: [5, 5] | Total Time: 10\n\
             Machine 1 Tasks: [5, 5] | Total Time: 10\n"
        );
    }

    #[test]
    fn test_infeasible_report() {
        let problem = BalanceProblem::new(vec![5, 5], 1);
        let result = result_with(Chromosome::from_bits(&[0, 1]), Fitness::Infeasible);
        let report = CaseReport::new(3, &problem, &result);

        assert!(report.solution.is_none());
        assert_eq!(report.to_string(), "Test Case #3\nNo feasible solution found\n");
    }
}
