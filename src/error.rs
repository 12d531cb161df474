//! Error types shared by the calculators and their command-line front ends.

use thiserror::Error;

use crate::io::{ExitCode, ResultCode};

/// Errors from reading input or evaluating a calculation.
#[derive(Error, Debug)]
pub enum CalcError {
    #[error("Failed to read input: {0}")]
    Io(#[from] std::io::Error),

    #[error("No integer found in input")]
    EmptyInput,

    #[error("Invalid integer '{token}': {reason}")]
    InvalidInteger { token: String, reason: String },

    #[error("Arithmetic overflow in {operation} for n = {n}")]
    Overflow { operation: &'static str, n: i64 },
}

impl CalcError {
    /// Machine-readable code used in the JSON envelope.
    pub fn code(&self) -> ResultCode {
        match self {
            Self::Io(_) => ResultCode::IoError,
            Self::EmptyInput | Self::InvalidInteger { .. } => ResultCode::ParseError,
            Self::Overflow { .. } => ResultCode::Overflow,
        }
    }

    /// Process exit code for this error.
    pub fn exit_code(&self) -> ExitCode {
        match self {
            Self::Io(_) => ExitCode::GeneralError,
            Self::EmptyInput | Self::InvalidInteger { .. } => ExitCode::InvalidInput,
            Self::Overflow { .. } => ExitCode::Overflow,
        }
    }
}

pub type CalcResult<T> = Result<T, CalcError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_errors_map_to_invalid_input() {
        let err = CalcError::InvalidInteger {
            token: "abc".to_string(),
            reason: "invalid digit found in string".to_string(),
        };
        assert_eq!(err.exit_code(), ExitCode::InvalidInput);
        assert_eq!(err.code(), ResultCode::ParseError);
        assert_eq!(CalcError::EmptyInput.exit_code(), ExitCode::InvalidInput);
    }

    #[test]
    fn test_overflow_message() {
        let err = CalcError::Overflow {
            operation: "area",
            n: 5_000_000,
        };
        assert_eq!(
            err.to_string(),
            "Arithmetic overflow in area for n = 5000000"
        );
        assert_eq!(err.exit_code(), ExitCode::Overflow);
    }
}
