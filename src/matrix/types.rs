//! Типы матриц и вердикты проверки

use std::fmt;

/// Квадратная матрица целых чисел в плоском row-major представлении
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Matrix {
    pub size: usize,
    pub data: Vec<i32>,
}

impl Matrix {
    /// Нулевая матрица заданного размера
    pub fn zeroed(size: usize) -> Self {
        Self {
            size,
            data: vec![0; size * size],
        }
    }

    /// Матрица из готового буфера в row-major порядке
    pub fn from_vec(size: usize, data: Vec<i32>) -> Self {
        assert_eq!(data.len(), size * size, "buffer length must be size^2");
        Self { size, data }
    }

    pub fn get(&self, row: usize, col: usize) -> i32 {
        self.data[row * self.size + col]
    }

    pub fn set(&mut self, row: usize, col: usize, value: i32) {
        self.data[row * self.size + col] = value;
    }
}

/// Режим проверки корректности результата
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CheckMode {
    /// Без проверки, вердикт "Unknown"
    Off,
    /// Выборочная проверка случайных строк (режим по умолчанию)
    Sample,
    /// Полная поэлементная проверка
    Full,
}

/// Вердикт проверки для одного прогона
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Correctness {
    Correct,
    Incorrect,
    Unknown,
}

impl fmt::Display for Correctness {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Correctness::Correct => "Yes",
            Correctness::Incorrect => "No",
            Correctness::Unknown => "Unknown",
        };
        f.write_str(label)
    }
}
