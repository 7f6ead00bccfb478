//! Stopwatch wrapper for the benchmark runs.

use std::time::{Duration, Instant};

/// Runs `f`, reports its elapsed time on stdout and returns it alongside the
/// result.
pub fn time_operation<T>(message: &str, f: impl FnOnce() -> T) -> (T, Duration) {
    let start = Instant::now();
    let result = f();
    let elapsed = start.elapsed();

    println!("Testing {} - Elapsed = {:?}", message, elapsed);
    (result, elapsed)
}
