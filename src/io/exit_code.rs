//! Process exit codes.
//!
//! Scripts can tell malformed input apart from arithmetic overflow without
//! parsing stderr.

/// Exit codes returned by every binary in the crate.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u8)]
pub enum ExitCode {
    /// Output written
    Success = 0,
    /// I/O failure or bad configuration
    GeneralError = 1,
    /// Input was empty or not an integer
    InvalidInput = 2,
    /// Result does not fit in a 64-bit signed integer
    Overflow = 3,
}

impl From<ExitCode> for std::process::ExitCode {
    fn from(code: ExitCode) -> Self {
        std::process::ExitCode::from(code as u8)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_numeric_values() {
        assert_eq!(ExitCode::Success as u8, 0);
        assert_eq!(ExitCode::GeneralError as u8, 1);
        assert_eq!(ExitCode::InvalidInput as u8, 2);
        assert_eq!(ExitCode::Overflow as u8, 3);
        let code: std::process::ExitCode = ExitCode::InvalidInput.into();
        assert_eq!(code, std::process::ExitCode::from(2));
    }
}
