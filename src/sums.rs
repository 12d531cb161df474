//! Perimeter and area sums over `1..=n`.
//!
//! Both values are accumulated step by step rather than taken from a closed
//! form, so the printed numbers are exactly what the recurrences produce.
//! Any intermediate that leaves the `i64` range is reported as
//! [`CalcError::Overflow`].

use std::fmt;

use serde::Serialize;

use crate::error::{CalcError, CalcResult};
use crate::io::Report;

/// Both accumulated values for a single input.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Sums {
    pub n: i64,
    pub perimeter: i64,
    pub area: i64,
}

/// Compute the perimeter value `A` and the area value `B` for `n`.
///
/// The area overflows `i64` near n = 3.1e6, far below the perimeter, so it
/// is evaluated first.
pub fn compute(n: i64) -> CalcResult<Sums> {
    let area = area(n)?;
    let sums = Sums {
        n,
        perimeter: perimeter(n)?,
        area,
    };
    tracing::debug!(
        "[sums] n={n} perimeter={} area={}",
        sums.perimeter,
        sums.area
    );
    Ok(sums)
}

/// Apply `A = A - (i-1) + 3*i + 1` for `i` in `1..=n`, starting at 0.
///
/// Empty for `n <= 0`.
pub fn perimeter(n: i64) -> CalcResult<i64> {
    accumulate_perimeter(0, 1, n)
}

/// Continue the perimeter recurrence from `acc` over `from..=n`.
fn accumulate_perimeter(mut acc: i64, from: i64, n: i64) -> CalcResult<i64> {
    let overflow = || CalcError::Overflow {
        operation: "perimeter",
        n,
    };

    for i in from..=n {
        let step = i.checked_mul(3).ok_or_else(overflow)?;
        acc = acc
            .checked_sub(i - 1)
            .and_then(|v| v.checked_add(step))
            .and_then(|v| v.checked_add(1))
            .ok_or_else(overflow)?;
    }
    Ok(acc)
}

/// Sum of `i*i` for `i` in `1..=n`. Empty for `n <= 0`.
pub fn area(n: i64) -> CalcResult<i64> {
    let overflow = || CalcError::Overflow {
        operation: "area",
        n,
    };

    let mut acc: i64 = 0;
    for i in 1..=n {
        acc = i
            .checked_mul(i)
            .and_then(|sq| acc.checked_add(sq))
            .ok_or_else(overflow)?;
    }
    Ok(acc)
}

impl fmt::Display for Sums {
    /// Two lines: `A` then `B`.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{}", self.perimeter)?;
        writeln!(f, "{}", self.area)
    }
}

impl Report for Sums {
    fn message(&self) -> String {
        format!("Computed sums for n = {}", self.n)
    }
}
