//! Factors command - distinct prime factors of `n`.

use std::time::Instant;

use super::resolve_operand;
use crate::factors::{Primality, prime_factors};
use crate::io::{ExitCode, OutputFormat, OutputManager};

/// Find and print the prime factors of `n` (or the integer on stdin).
pub fn run(n: Option<i64>, primality: Primality, format: OutputFormat) -> ExitCode {
    let started = Instant::now();
    let result = resolve_operand(n).map(|n| prime_factors(n, primality));
    OutputManager::stdio(format).emit("factors", result, started.elapsed())
}
