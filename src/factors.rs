//! Distinct prime factors by brute-force trial division.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::io::Report;

/// How candidates are tested for primality.
///
/// Both strategies give the same verdict for every input; they differ only
/// in how many divisors they try.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "kebab-case")]
pub enum Primality {
    /// Try every divisor in `2..i`. Two is accepted without a check.
    #[default]
    Naive,
    /// Try divisors up to the square root of the candidate.
    TrialSqrt,
}

impl Primality {
    pub fn as_str(&self) -> &'static str {
        match self {
            Primality::Naive => "naive",
            Primality::TrialSqrt => "trial-sqrt",
        }
    }
}

impl fmt::Display for Primality {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The distinct prime factors of `n`, increasing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PrimeFactors {
    pub n: i64,
    pub factors: Vec<i64>,
}

/// Whether `i` is prime under the given strategy. Values below 2 are not.
pub fn is_prime(i: i64, strategy: Primality) -> bool {
    if i < 2 {
        return false;
    }
    if i == 2 {
        return true;
    }
    match strategy {
        Primality::Naive => (2..i).all(|j| i % j != 0),
        Primality::TrialSqrt => {
            let mut j = 2;
            // j <= i / j avoids overflowing j * j near i64::MAX
            while j <= i / j {
                if i % j == 0 {
                    return false;
                }
                j += 1;
            }
            true
        }
    }
}

/// Every candidate in `2..=n` that is prime and divides `n`.
///
/// Nothing is reported for `n <= 1`.
pub fn prime_factors(n: i64, strategy: Primality) -> PrimeFactors {
    let factors: Vec<i64> = (2..=n)
        .filter(|&i| n % i == 0 && is_prime(i, strategy))
        .collect();

    tracing::debug!("[factors] n={n} strategy={strategy} found={factors:?}");

    PrimeFactors { n, factors }
}

impl fmt::Display for PrimeFactors {
    /// Each factor followed by a space, then a line break.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for factor in &self.factors {
            write!(f, "{factor} ")?;
        }
        writeln!(f)
    }
}

impl Report for PrimeFactors {
    fn message(&self) -> String {
        let noun = if self.factors.len() == 1 { "factor" } else { "factors" };
        format!("Found {} prime {noun} of {}", self.factors.len(), self.n)
    }

    fn count(&self) -> Option<usize> {
        Some(self.factors.len())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const STRATEGIES: [Primality; 2] = [Primality::Naive, Primality::TrialSqrt];

    #[test]
    fn test_twelve() {
        for strategy in STRATEGIES {
            let result = prime_factors(12, strategy);
            assert_eq!(result.factors, vec![2, 3]);
            assert_eq!(result.to_string(), "2 3 \n");
        }
    }

    #[test]
    fn test_one_prints_blank_line() {
        let result = prime_factors(1, Primality::Naive);
        assert!(result.factors.is_empty());
        assert_eq!(result.to_string(), "\n");
    }

    #[test]
    fn test_two_is_prime_immediately() {
        assert_eq!(prime_factors(2, Primality::Naive).to_string(), "2 \n");
        assert!(is_prime(2, Primality::Naive));
    }

    #[test]
    fn test_non_positive_inputs_report_nothing() {
        for n in [0, -1, -12, i64::MIN] {
            assert_eq!(prime_factors(n, Primality::TrialSqrt).to_string(), "\n");
        }
    }

    #[test]
    fn test_factors_reported_once() {
        // 360 = 2^3 * 3^2 * 5
        assert_eq!(prime_factors(360, Primality::Naive).factors, vec![2, 3, 5]);
        assert_eq!(prime_factors(97, Primality::Naive).factors, vec![97]);
        assert_eq!(
            prime_factors(2 * 3 * 5 * 7 * 11 * 13, Primality::TrialSqrt).factors,
            vec![2, 3, 5, 7, 11, 13]
        );
    }

    #[test]
    fn test_strategies_agree() {
        for i in -5..2000 {
            assert_eq!(
                is_prime(i, Primality::Naive),
                is_prime(i, Primality::TrialSqrt),
                "i = {i}"
            );
        }
    }

    #[test]
    fn test_small_composites_rejected() {
        for i in [4, 6, 8, 9, 10, 12, 25, 49, 91] {
            assert!(!is_prime(i, Primality::Naive), "{i}");
            assert!(!is_prime(i, Primality::TrialSqrt), "{i}");
        }
    }

    #[test]
    fn test_report_message() {
        let twelve = prime_factors(12, Primality::Naive);
        assert_eq!(twelve.message(), "Found 2 prime factors of 12");
        assert_eq!(twelve.count(), Some(2));
        assert_eq!(prime_factors(7, Primality::Naive).message(), "Found 1 prime factor of 7");
    }

    #[test]
    fn test_primality_serde_names() {
        let json = serde_json::to_string(&Primality::TrialSqrt).unwrap();
        assert_eq!(json, "\"trial-sqrt\"");
        let parsed: Primality = serde_json::from_str("\"naive\"").unwrap();
        assert_eq!(parsed, Primality::Naive);
    }
}
