//! Разбиение диапазона строк между рабочими потоками

use std::ops::Range;

/// Делит диапазон строк [0, rows) на `threads` непрерывных блоков.
///
/// Целочисленное деление с раздачей остатка: первые `rows % threads`
/// блоков получают по одной лишней строке, поэтому размеры блоков
/// отличаются не более чем на 1, блоки не пересекаются и вместе
/// покрывают [0, rows) ровно один раз. При threads > rows лишние
/// блоки пустые. При threads == 0 возвращает пустой список.
pub fn partition_rows(rows: usize, threads: usize) -> Vec<Range<usize>> {
    if threads == 0 {
        return Vec::new();
    }

    let rows_per_thread = rows / threads;
    let extra_rows = rows % threads;

    let mut chunks = Vec::with_capacity(threads);
    for t in 0..threads {
        let start = t * rows_per_thread + t.min(extra_rows);
        let end = start + rows_per_thread + usize::from(t < extra_rows);
        chunks.push(start..end);
    }
    chunks
}
