//! Reading the single integer operand.

use std::io::BufRead;

use crate::error::{CalcError, CalcResult};

/// Read the first whitespace-delimited token from `reader` as an `i64`.
///
/// Blank lines before the token are skipped. Reading stops at the line that
/// holds the token, so an interactive terminal does not have to send EOF.
/// Whatever follows the token is ignored.
pub fn read_integer<R: BufRead>(reader: &mut R) -> CalcResult<i64> {
    let mut line = String::new();
    loop {
        line.clear();
        if reader.read_line(&mut line)? == 0 {
            return Err(CalcError::EmptyInput);
        }
        if let Some(token) = line.split_whitespace().next() {
            return parse_integer(token);
        }
    }
}

/// Parse a signed decimal integer token.
pub fn parse_integer(token: &str) -> CalcResult<i64> {
    token
        .parse::<i64>()
        .map_err(|e| CalcError::InvalidInteger {
            token: token.to_string(),
            reason: e.to_string(),
        })
}
