//! Движок бенчмарка: прогоны по размерам матриц и числу потоков

use crate::matrix::{
    check_full, check_sample, generate_matrices, linear_add, parallel_add, CheckMode, Correctness,
    Matrix,
};
use crate::utils::measure_secs;
use anyhow::Result;
use std::io::Write;

pub const DEFAULT_SEED: u64 = 7;
pub const DEFAULT_SAMPLE_ROWS: usize = 10;

/// Параметры эксперимента, задаются вызывающей стороной
#[derive(Debug, Clone)]
pub struct BenchConfig {
    /// Seed генератора нагрузки, один на каждый размер матрицы
    pub seed: u64,
    pub matrix_sizes: Vec<usize>,
    pub thread_counts: Vec<usize>,
    pub check: CheckMode,
    /// Число строк для выборочной проверки
    pub sample_rows: usize,
}

impl BenchConfig {
    /// Сетка прогонов по умолчанию для обнаруженного числа процессоров:
    /// размеры {100, 1000, 5000, 10000}, потоки от cpu/2 до cpu*16,
    /// каждое значение не меньше 1
    pub fn for_cpu_count(cpu_count: usize) -> Self {
        let cpu = cpu_count.max(1);
        Self {
            seed: DEFAULT_SEED,
            matrix_sizes: vec![100, 1000, 5000, 10000],
            thread_counts: vec![(cpu / 2).max(1), cpu, cpu * 2, cpu * 4, cpu * 8, cpu * 16],
            check: CheckMode::Sample,
            sample_rows: DEFAULT_SAMPLE_ROWS,
        }
    }
}

/// Результат одного прогона
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RunResult {
    pub matrix_size: usize,
    /// None для последовательного прогона
    pub threads: Option<usize>,
    pub seconds: f64,
    pub verdict: Correctness,
}

/// Выполняет весь эксперимент и пишет табличный отчет в `out`.
///
/// Для каждого размера матрицы: генерация A и B с фиксированным seed,
/// последовательный прогон, затем по прогону на каждое число потоков
/// над теми же входными матрицами. Результаты возвращаются списком
/// в порядке вывода.
pub fn run<W: Write>(config: &BenchConfig, out: &mut W) -> Result<Vec<RunResult>> {
    let mut results = Vec::new();

    writeln!(out, "\nTest Results:")?;
    writeln!(out, "Matrix Size\tThreads\tTime (seconds)\tCorrect?")?;

    for &size in &config.matrix_sizes {
        let (a, b) = generate_matrices(size, config.seed);

        let mut c = Matrix::zeroed(size);
        let ((), seconds) = measure_secs(|| linear_add(&a, &b, &mut c));
        let verdict = verify(config, &c, &a, &b);
        writeln!(out)?;
        writeln!(out, "{}\tLinear\t{:.6}\t{}", size, seconds, verdict)?;
        results.push(RunResult {
            matrix_size: size,
            threads: None,
            seconds,
            verdict,
        });

        for &threads in &config.thread_counts {
            let mut c = Matrix::zeroed(size);
            let ((), seconds) = measure_secs(|| parallel_add(&a, &b, &mut c, threads));
            let verdict = verify(config, &c, &a, &b);
            writeln!(out, "{}\t{}\t{:.6}\t{}", size, threads, seconds, verdict)?;
            results.push(RunResult {
                matrix_size: size,
                threads: Some(threads),
                seconds,
                verdict,
            });
        }
    }

    Ok(results)
}

fn verify(config: &BenchConfig, c: &Matrix, a: &Matrix, b: &Matrix) -> Correctness {
    let correct = match config.check {
        CheckMode::Off => return Correctness::Unknown,
        CheckMode::Sample => check_sample(c, a, b, config.sample_rows, &mut rand::thread_rng()),
        CheckMode::Full => check_full(c, a, b),
    };
    if correct {
        Correctness::Correct
    } else {
        Correctness::Incorrect
    }
}
