//! Sums command - perimeter and area over `1..=n`.

use std::time::Instant;

use super::resolve_operand;
use crate::io::{ExitCode, OutputFormat, OutputManager};
use crate::sums;

/// Compute and print both sums for `n` (or the integer on stdin).
pub fn run(n: Option<i64>, format: OutputFormat) -> ExitCode {
    let started = Instant::now();
    let result = resolve_operand(n).and_then(sums::compute);
    OutputManager::stdio(format).emit("sums", result, started.elapsed())
}
