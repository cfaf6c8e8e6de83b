//! Вспомогательные функции и утилиты

use std::time::Instant;

/// Измеряет время выполнения функции в долях секунды
/// (наносекундное разрешение таймера `Instant`)
pub fn measure_secs<F, T>(f: F) -> (T, f64)
where
    F: FnOnce() -> T,
{
    let start = Instant::now();
    let result = f();
    (result, start.elapsed().as_secs_f64())
}
