use u_makespan::ga::{BalanceProblem, Fitness, GaConfig, GaRunner, Termination, TerminationReason};
use u_makespan::instance::parse_instances;
use u_makespan::report::CaseReport;

#[test]
fn easy_instance_solved_across_seeds() {
    let problem = BalanceProblem::new(vec![5, 5, 5, 5], 10);
    let runs = 100;

    let solved = (0..runs)
        .filter(|&seed| {
            let config = GaConfig::default().with_seed(seed);
            let result = GaRunner::run(&problem, &config);
            result.best_fitness.makespan().is_some_and(|m| m <= 10)
        })
        .count();

    assert!(
        solved * 100 >= runs as usize * 95,
        "solved only {solved}/{runs} runs"
    );
}

#[test]
fn impossible_instance_reports_no_solution() {
    let problem = BalanceProblem::new(vec![5, 5], 1);
    let config = GaConfig::default().with_seed(7);
    let result = GaRunner::run(&problem, &config);

    assert_eq!(result.best_fitness, Fitness::Infeasible);
    assert_eq!(result.reason, TerminationReason::BudgetExhausted);
    assert_eq!(result.generations, config.max_generations);

    let report = CaseReport::new(1, &problem, &result).to_string();
    assert!(report.contains("No feasible solution found"));
}

#[test]
fn single_task_terminates_immediately() {
    for seed in 0..10 {
        let problem = BalanceProblem::new(vec![6], 9);
        let result = GaRunner::run(&problem, &GaConfig::default().with_seed(seed));
        assert_eq!(result.generations, 1);
        assert_eq!(result.best_fitness, Fitness::Feasible(6));
    }
}

#[test]
fn file_cases_run_independently() {
    let input = "3\n10\n4\n5\n5\n5\n5\n1\n2\n5\n5\n50\n6\n12\n7\n9\n15\n3\n8\n";
    let instances = parse_instances(input).unwrap();
    assert_eq!(instances.len(), 3);

    let results: Vec<_> = instances
        .iter()
        .enumerate()
        .map(|(i, inst)| {
            let config = GaConfig::default()
                .with_seed(100 + i as u64)
                .with_termination(Termination::LowerBound)
                .with_max_generations(300);
            GaRunner::run(&inst.problem(), &config)
        })
        .collect();

    assert!(results[0].is_feasible());
    // the infeasible middle case does not stop the third
    assert!(!results[1].is_feasible());
    assert!(results[2].is_feasible());

    // 12+7+9+15+3+8 = 54, perfect split 27/27 exists (12+15 / 7+9+3+8)
    assert_eq!(results[2].best_fitness, Fitness::Feasible(27));

    let part = results[2]
        .partition(&instances[2].problem())
        .expect("feasible");
    assert_eq!(part.load_zero + part.load_one, 54);
    assert!(part.load_zero <= 50 && part.load_one <= 50);
}
