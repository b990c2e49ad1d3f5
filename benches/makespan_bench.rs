//! Criterion benchmarks for the makespan GA.
//!
//! Synthetic instances with a known perfect split, run to the lower bound
//! so every iteration does real evolutionary work.

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use u_makespan::ga::{
    crossover, initialize, mutate_population, select, BalanceProblem, Fitness, GaConfig,
    GaRunner, Termination,
};

/// `n` random durations, doubled so a perfect split exists.
fn mirrored_instance(n: usize, seed: u64) -> BalanceProblem {
    let mut rng = StdRng::seed_from_u64(seed);
    let half: Vec<u64> = (0..n / 2).map(|_| rng.random_range(1..100)).collect();
    let durations: Vec<u64> = half.iter().chain(&half).copied().collect();
    let total: u64 = durations.iter().sum();
    BalanceProblem::new(durations, total / 2 + total / 10)
}

fn bench_ga_run(c: &mut Criterion) {
    let mut group = c.benchmark_group("ga_lower_bound");
    group.sample_size(10);

    for (tasks, pop, gen) in [(20usize, 50usize, 200usize), (60, 100, 100), (200, 100, 50)] {
        let problem = mirrored_instance(tasks, 42);
        let config = GaConfig {
            population_size: pop,
            max_generations: gen,
            termination: Termination::LowerBound,
            seed: Some(42),
            ..GaConfig::default()
        };
        group.bench_with_input(
            BenchmarkId::new(format!("t{}_p{}_g{}", tasks, pop, gen), tasks),
            &(problem, config),
            |b, (p, c)| {
                b.iter(|| {
                    let result = GaRunner::run(black_box(p), black_box(c));
                    black_box(result)
                })
            },
        );
    }
    group.finish();
}

fn bench_generation_step(c: &mut Criterion) {
    let mut group = c.benchmark_group("generation_step");
    group.sample_size(20);

    for &tasks in &[20usize, 100, 500] {
        let problem = mirrored_instance(tasks, 7);
        let mut rng = StdRng::seed_from_u64(7);
        let population = initialize(100, problem.task_count(), &mut rng);
        let fitness: Vec<Fitness> = population.iter().map(|c| problem.evaluate(c)).collect();

        group.bench_with_input(BenchmarkId::from_parameter(tasks), &tasks, |b, _| {
            b.iter(|| {
                let selected = select(black_box(&population), &fitness, &mut rng);
                let mut offspring = crossover(&selected, 0.5, &mut rng);
                mutate_population(&mut offspring, 0.05, &mut rng);
                black_box(offspring)
            })
        });
    }
    group.finish();
}

criterion_group!(benches, bench_ga_run, bench_generation_step);
criterion_main!(benches);
