pub mod cli;
pub mod config;
pub mod error;
pub mod factors;
pub mod io;
pub mod logging;
pub mod sums;

pub use config::Settings;
pub use error::{CalcError, CalcResult};
pub use factors::{Primality, PrimeFactors, is_prime, prime_factors};
pub use io::{ExitCode, OutputFormat};
pub use sums::Sums;
