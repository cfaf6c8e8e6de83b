//! Сквозной прогон бенчмарка на маленькой сетке

use matrix_add_bench::bench::{run, BenchConfig};
use matrix_add_bench::matrix::{generate_matrices, linear_add, parallel_add};
use matrix_add_bench::{CheckMode, Correctness, Matrix};

#[test]
fn full_sweep_produces_correct_results() {
    let config = BenchConfig {
        seed: 7,
        matrix_sizes: vec![1, 4, 9],
        thread_counts: vec![1, 2, 4, 16],
        check: CheckMode::Full,
        sample_rows: 10,
    };

    let mut out = Vec::new();
    let results = run(&config, &mut out).expect("benchmark run failed");

    assert_eq!(
        results.len(),
        config.matrix_sizes.len() * (1 + config.thread_counts.len())
    );
    for result in &results {
        assert_eq!(result.verdict, Correctness::Correct);
        assert!(result.seconds >= 0.0);
    }

    // на каждый размер один последовательный прогон плюс по одному на
    // каждое число потоков
    let linear_runs = results.iter().filter(|r| r.threads.is_none()).count();
    assert_eq!(linear_runs, config.matrix_sizes.len());

    let report = String::from_utf8(out).unwrap();
    assert!(report.contains("Test Results:"));
    assert!(report.contains("Matrix Size\tThreads\tTime (seconds)\tCorrect?"));
    assert!(report.contains("\tLinear\t"));
}

#[test]
fn inputs_are_identical_across_runs_of_one_size() {
    let (a1, b1) = generate_matrices(10, 7);
    let (a2, b2) = generate_matrices(10, 7);
    assert_eq!((a1, b1), (a2, b2));
}

#[test]
fn parallel_equals_sequential_on_shared_inputs() {
    let (a, b) = generate_matrices(33, 7);
    let mut expected = Matrix::zeroed(33);
    linear_add(&a, &b, &mut expected);

    for threads in [1, 2, 7, 33, 64] {
        let mut c = Matrix::zeroed(33);
        parallel_add(&a, &b, &mut c, threads);
        assert_eq!(c, expected, "threads={}", threads);
    }
}
