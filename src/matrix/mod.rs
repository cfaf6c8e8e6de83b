//! Модуль для работы с матрицами
//!
//! Предоставляет:
//! - Типы матриц и вердиктов
//! - Генерацию нагрузки и сложение
//! - Разбиение строк между потоками

mod types;
pub mod operations;
pub mod partition;

pub use operations::{check_full, check_sample, generate_matrices, linear_add, parallel_add};
pub use partition::partition_rows;
pub use types::{CheckMode, Correctness, Matrix};
