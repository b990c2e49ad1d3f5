//! u-makespan CLI
//!
//! Reads a test-case file, balances every test case across two machines
//! with the GA and prints one report per case.
//!
//! Usage:
//!   u-makespan input.txt
//!   u-makespan input.txt --seed 42 --termination lower-bound -vv

use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};
use std::path::PathBuf;
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

use u_makespan::ga::{GaConfig, GaRunner, Termination};
use u_makespan::instance::read_instances;
use u_makespan::report::CaseReport;

/// Two-machine makespan balancing with a genetic algorithm.
#[derive(Parser)]
#[command(name = "u-makespan")]
#[command(version, about, long_about = None)]
struct Cli {
    /// Test-case file: case count, then per case a ceiling, a task count
    /// and one duration per line
    input: PathBuf,

    /// Chromosomes per generation
    #[arg(long, default_value_t = 50)]
    population_size: usize,

    /// Per-gene flip probability
    #[arg(long, default_value_t = 0.05)]
    mutation_rate: f64,

    /// Probability of recombining a parent pair
    #[arg(long, default_value_t = 0.5)]
    crossover_rate: f64,

    /// Best chromosomes carried over unchanged each generation
    #[arg(long, default_value_t = 2)]
    elite_count: usize,

    /// Generation budget per test case
    #[arg(long, default_value_t = 1000)]
    max_generations: usize,

    /// When to stop before the budget runs out
    #[arg(long, value_enum, default_value_t = StopPolicy::FirstFeasible)]
    termination: StopPolicy,

    /// Base seed; test case `i` (1-based) uses `seed + i - 1`
    #[arg(long)]
    seed: Option<u64>,

    /// Increase verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

#[derive(Clone, Copy, Debug, ValueEnum)]
enum StopPolicy {
    /// Stop at the first feasible assignment
    FirstFeasible,
    /// Stop once the makespan lower bound is reached
    LowerBound,
}

impl From<StopPolicy> for Termination {
    fn from(policy: StopPolicy) -> Self {
        match policy {
            StopPolicy::FirstFeasible => Termination::FirstFeasible,
            StopPolicy::LowerBound => Termination::LowerBound,
        }
    }
}

impl Cli {
    fn config(&self) -> GaConfig {
        GaConfig {
            population_size: self.population_size,
            max_generations: self.max_generations,
            elite_count: self.elite_count,
            crossover_rate: self.crossover_rate,
            mutation_rate: self.mutation_rate,
            termination: self.termination.into(),
            seed: self.seed,
        }
    }
}

/// Config for the 0-based test case `index`: `base` with the seed shifted
/// by `index`, wrapping on overflow.
fn case_config(base: &GaConfig, index: usize) -> GaConfig {
    GaConfig {
        seed: base.seed.map(|s| s.wrapping_add(index as u64)),
        ..base.clone()
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let filter = match cli.verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| filter.into()))
        .with_writer(std::io::stderr)
        .init();

    let base = cli.config();
    base.validate().context("invalid GA parameters")?;

    let instances = read_instances(&cli.input)?;
    info!(cases = instances.len(), input = %cli.input.display(), "loaded test cases");

    for (i, instance) in instances.iter().enumerate() {
        let case = i + 1;
        let problem = instance.problem();
        let config = case_config(&base, i);

        info!(case, tasks = problem.task_count(), ceiling = problem.ceiling(), "solving");
        let result = GaRunner::run(&problem, &config);
        if !result.is_feasible() {
            warn!(case, generations = result.generations, "no feasible solution found");
        }

        println!("{}", CaseReport::new(case, &problem, &result));
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(args: &[&str]) -> Cli {
        Cli::try_parse_from(std::iter::once("u-makespan").chain(args.iter().copied()))
            .unwrap()
    }

    #[test]
    fn test_defaults_match_library_config() {
        let cli = parse(&["input.txt"]);
        assert_eq!(cli.input, PathBuf::from("input.txt"));
        assert_eq!(cli.verbose, 0);
        assert_eq!(cli.config(), GaConfig::default());
    }

    #[test]
    fn test_flags_reach_config() {
        let cli = parse(&[
            "cases.txt",
            "--population-size",
            "20",
            "--mutation-rate",
            "0.1",
            "--crossover-rate",
            "0.9",
            "--elite-count",
            "4",
            "--max-generations",
            "300",
            "--termination",
            "lower-bound",
            "--seed",
            "7",
            "-vv",
        ]);
        let config = cli.config();
        assert_eq!(config.population_size, 20);
        assert_eq!(config.mutation_rate, 0.1);
        assert_eq!(config.crossover_rate, 0.9);
        assert_eq!(config.elite_count, 4);
        assert_eq!(config.max_generations, 300);
        assert_eq!(config.termination, Termination::LowerBound);
        assert_eq!(config.seed, Some(7));
        assert_eq!(cli.verbose, 2);
    }

    #[test]
    fn test_stop_policy_mapping() {
        let policy = parse(&["in.txt", "--termination", "first-feasible"]).termination;
        assert_eq!(Termination::from(policy), Termination::FirstFeasible);
        let policy = parse(&["in.txt", "--termination", "lower-bound"]).termination;
        assert_eq!(Termination::from(policy), Termination::LowerBound);

        let err = Cli::try_parse_from(["u-makespan", "in.txt", "--termination", "never"]);
        assert!(err.is_err());
    }

    #[test]
    fn test_missing_input_is_rejected() {
        assert!(Cli::try_parse_from(["u-makespan"]).is_err());
    }

    #[test]
    fn test_case_seeds_follow_index() {
        let base = GaConfig::default()
            .with_population_size(12)
            .with_seed(100);
        let seeds: Vec<_> = (0..3).map(|i| case_config(&base, i).seed).collect();
        assert_eq!(seeds, vec![Some(100), Some(101), Some(102)]);

        let second = case_config(&base, 1);
        assert_eq!(second.population_size, 12);
        assert_eq!(GaConfig { seed: base.seed, ..second }, base);
    }

    #[test]
    fn test_case_seed_wraps_and_stays_unset() {
        let base = GaConfig::default().with_seed(u64::MAX);
        assert_eq!(case_config(&base, 0).seed, Some(u64::MAX));
        assert_eq!(case_config(&base, 2).seed, Some(1));

        let unseeded = GaConfig::default();
        assert_eq!(case_config(&unseeded, 5).seed, None);
    }
}
