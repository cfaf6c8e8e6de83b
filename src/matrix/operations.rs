//! Операции над матрицами: генерация нагрузки, сложение, проверка

use super::partition::partition_rows;
use super::types::Matrix;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::mem;
use std::thread;

/// Верхняя граница значений элементов
const MAX_VALUE: i32 = 10_000;

/// Генерирует пару матриц со случайными элементами из [0, 10000].
///
/// Генератор переинициализируется заданным seed при каждом вызове,
/// поэтому два вызова с одинаковыми аргументами дают одинаковые пары.
/// Элементы A и B берутся поочередно из одного потока.
pub fn generate_matrices(size: usize, seed: u64) -> (Matrix, Matrix) {
    let mut rng = StdRng::seed_from_u64(seed);
    let mut a = Matrix::zeroed(size);
    let mut b = Matrix::zeroed(size);
    for idx in 0..size * size {
        a.data[idx] = rng.gen_range(0..=MAX_VALUE);
        b.data[idx] = rng.gen_range(0..=MAX_VALUE);
    }
    (a, b)
}

/// Последовательное сложение C = A + B в одном потоке
pub fn linear_add(a: &Matrix, b: &Matrix, c: &mut Matrix) {
    let size = c.size;
    for i in 0..size {
        for j in 0..size {
            c.data[i * size + j] = a.data[i * size + j] + b.data[i * size + j];
        }
    }
}

/// Параллельное сложение C = A + B на `threads` потоках.
///
/// Строки делятся на непрерывные блоки через `partition_rows`, буфер C
/// режется на непересекающиеся `&mut` срезы, по одному свежему потоку
/// на блок. Пустые блоки (threads > size) порождают поток без работы.
/// Scope дожидается завершения всех потоков до возврата.
pub fn parallel_add(a: &Matrix, b: &Matrix, c: &mut Matrix, threads: usize) {
    let size = c.size;
    if size == 0 {
        return;
    }
    let chunks = partition_rows(size, threads);

    thread::scope(|scope| {
        let mut rest = c.data.as_mut_slice();
        for chunk in &chunks {
            let rows = chunk.end - chunk.start;
            let (slice, tail) = mem::take(&mut rest).split_at_mut(rows * size);
            rest = tail;
            let start_row = chunk.start;
            scope.spawn(move || {
                for (offset, row) in slice.chunks_mut(size).enumerate() {
                    let base = (start_row + offset) * size;
                    for j in 0..size {
                        row[j] = a.data[base + j] + b.data[base + j];
                    }
                }
            });
        }
    });
}

/// Проверяет одну строку C по исходной формуле, печатает все расхождения
fn check_row(c: &Matrix, a: &Matrix, b: &Matrix, row: usize) -> bool {
    let size = c.size;
    let mut correct = true;
    for j in 0..size {
        let expected = a.data[row * size + j] + b.data[row * size + j];
        let actual = c.data[row * size + j];
        if actual != expected {
            println!(
                "Error in row {}, col {}: expected {}, got {}",
                row, j, expected, actual
            );
            correct = false;
        }
    }
    correct
}

/// Выборочная проверка: `sample_rows` случайных строк, повторы возможны.
///
/// Ложное "да" возможно, если все вытянутые строки корректны при
/// испорченных остальных. Ложного "нет" не бывает.
pub fn check_sample<R: Rng>(
    c: &Matrix,
    a: &Matrix,
    b: &Matrix,
    sample_rows: usize,
    rng: &mut R,
) -> bool {
    if c.size == 0 {
        return true;
    }
    let mut correct = true;
    for _ in 0..sample_rows {
        let row = rng.gen_range(0..c.size);
        if !check_row(c, a, b, row) {
            correct = false;
        }
    }
    correct
}

/// Полная поэлементная проверка всех строк
pub fn check_full(c: &Matrix, a: &Matrix, b: &Matrix) -> bool {
    let mut correct = true;
    for row in 0..c.size {
        if !check_row(c, a, b, row) {
            correct = false;
        }
    }
    correct
}
