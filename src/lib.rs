//! CPU benchmark: parallel vs sequential matrix addition

pub mod bench;
pub mod matrix;
pub mod utils;

// Реэкспорт основных типов для удобства
pub use bench::{run, BenchConfig, RunResult};
pub use matrix::{CheckMode, Correctness, Matrix};
