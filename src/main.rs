//! Бенчмарк параллельного и последовательного сложения матриц

use anyhow::Result;
use matrix_add_bench::bench::{run, BenchConfig};
use std::io;

fn main() -> Result<()> {
    let cpu_count = num_cpus::get();
    println!("System Information:");
    println!("Number of logical processors: {}", cpu_count);

    let config = BenchConfig::for_cpu_count(cpu_count);
    let mut stdout = io::stdout().lock();
    run(&config, &mut stdout)?;
    Ok(())
}
