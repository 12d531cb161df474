//! Command implementations for the CLI.
//!
//! Each command returns the [`ExitCode`](crate::io::ExitCode) the process
//! should exit with.

pub mod factors;
pub mod init;
pub mod sums;

use crate::error::CalcResult;
use crate::io::read_integer;

/// Use the operand given on the command line, or read one from stdin.
pub fn resolve_operand(n: Option<i64>) -> CalcResult<i64> {
    match n {
        Some(n) => Ok(n),
        None => {
            let stdin = std::io::stdin();
            let n = read_integer(&mut stdin.lock())?;
            tracing::debug!("[cli] read n={n} from stdin");
            Ok(n)
        }
    }
}
