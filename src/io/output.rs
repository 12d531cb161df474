//! Writes calculation results to stdout/stderr in the selected format.

use std::fmt::Display;
use std::io::Write;
use std::time::Duration;

use serde::Serialize;

use super::{Envelope, ExitCode, OutputFormat};
use crate::error::CalcResult;

/// A calculation result that can be written in either output format.
pub trait Report: Display + Serialize {
    /// One-line summary used as the envelope message.
    fn message(&self) -> String;

    /// Number of items in list-shaped payloads.
    fn count(&self) -> Option<usize> {
        None
    }
}

/// Routes results to an output stream and errors to an error stream.
pub struct OutputManager<O: Write, E: Write> {
    format: OutputFormat,
    out: O,
    err: E,
}

impl OutputManager<std::io::Stdout, std::io::Stderr> {
    pub fn stdio(format: OutputFormat) -> Self {
        Self::new(format, std::io::stdout(), std::io::stderr())
    }
}

impl<O: Write, E: Write> OutputManager<O, E> {
    pub fn new(format: OutputFormat, out: O, err: E) -> Self {
        Self { format, out, err }
    }

    /// Write `result` and return the exit code the process should use.
    ///
    /// Text mode prints the value's `Display` form on success and
    /// `Error: <message>` on the error stream otherwise. JSON mode always
    /// writes a single envelope line on the output stream.
    pub fn emit<T>(
        &mut self,
        command: &str,
        result: CalcResult<T>,
        elapsed: Duration,
    ) -> ExitCode
    where
        T: Report,
    {
        let code = match &result {
            Ok(_) => ExitCode::Success,
            Err(e) => e.exit_code(),
        };

        let written = match (self.format, result) {
            (OutputFormat::Text, Ok(value)) => write!(self.out, "{value}"),
            (OutputFormat::Text, Err(e)) => writeln!(self.err, "Error: {e}"),
            (OutputFormat::Json, Ok(value)) => {
                let message = value.message();
                let count = value.count();
                let mut envelope = Envelope::success(command, value)
                    .with_message(message)
                    .with_duration_ms(elapsed.as_millis() as u64);
                if let Some(count) = count {
                    envelope = envelope.with_count(count);
                }
                self.write_json(&envelope)
            }
            (OutputFormat::Json, Err(e)) => {
                let envelope: Envelope<()> = Envelope::from_error(command, &e)
                    .with_duration_ms(elapsed.as_millis() as u64);
                self.write_json(&envelope)
            }
        };

        match written.and_then(|_| self.out.flush()) {
            Ok(()) => code,
            Err(e) => {
                tracing::warn!("[output] write failed: {e}");
                ExitCode::GeneralError
            }
        }
    }

    fn write_json<T: Serialize>(&mut self, envelope: &Envelope<T>) -> std::io::Result<()> {
        let json = envelope.to_json_compact().map_err(std::io::Error::other)?;
        writeln!(self.out, "{json}")
    }

    /// Consume the manager, returning both streams.
    pub fn into_inner(self) -> (O, E) {
        (self.out, self.err)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::CalcError;
    use crate::factors::{Primality, prime_factors};
    use crate::sums;

    fn text_manager() -> OutputManager<Vec<u8>, Vec<u8>> {
        OutputManager::new(OutputFormat::Text, Vec::new(), Vec::new())
    }

    #[test]
    fn test_text_success_is_exact() {
        let mut manager = text_manager();
        let code = manager.emit("sums", sums::compute(3), Duration::ZERO);
        assert_eq!(code, ExitCode::Success);

        let (out, err) = manager.into_inner();
        assert_eq!(String::from_utf8(out).unwrap(), "18\n14\n");
        assert!(err.is_empty());
    }

    #[test]
    fn test_text_error_goes_to_error_stream() {
        let mut manager = text_manager();
        let result: CalcResult<sums::Sums> = Err(CalcError::EmptyInput);
        let code = manager.emit("sums", result, Duration::ZERO);
        assert_eq!(code, ExitCode::InvalidInput);

        let (out, err) = manager.into_inner();
        assert!(out.is_empty());
        assert_eq!(
            String::from_utf8(err).unwrap(),
            "Error: No integer found in input\n"
        );
    }

    #[test]
    fn test_json_success() {
        let mut manager = OutputManager::new(OutputFormat::Json, Vec::new(), Vec::new());
        let result = Ok(prime_factors(12, Primality::Naive));
        let code = manager.emit("factors", result, Duration::from_millis(4));
        assert_eq!(code, ExitCode::Success);

        let (out, _) = manager.into_inner();
        let value: serde_json::Value = serde_json::from_slice(&out).unwrap();
        assert_eq!(value["status"], "success");
        assert_eq!(value["data"]["factors"], serde_json::json!([2, 3]));
        assert_eq!(value["meta"]["command"], "factors");
        assert_eq!(value["meta"]["duration_ms"], 4);
        assert_eq!(value["meta"]["count"], 2);
        assert_eq!(value["message"], "Found 2 prime factors of 12");
    }

    #[test]
    fn test_json_sums_has_message_without_count() {
        let mut manager = OutputManager::new(OutputFormat::Json, Vec::new(), Vec::new());
        let code = manager.emit("sums", sums::compute(3), Duration::ZERO);
        assert_eq!(code, ExitCode::Success);

        let (out, _) = manager.into_inner();
        let value: serde_json::Value = serde_json::from_slice(&out).unwrap();
        assert_eq!(value["message"], "Computed sums for n = 3");
        assert!(value["meta"].get("count").is_none());
    }

    #[test]
    fn test_json_error_stays_on_output_stream() {
        let mut manager = OutputManager::new(OutputFormat::Json, Vec::new(), Vec::new());
        let result: CalcResult<sums::Sums> = Err(CalcError::Overflow {
            operation: "area",
            n: 4_000_000,
        });
        let code = manager.emit("sums", result, Duration::ZERO);
        assert_eq!(code, ExitCode::Overflow);

        let (out, err) = manager.into_inner();
        assert!(err.is_empty());
        let value: serde_json::Value = serde_json::from_slice(&out).unwrap();
        assert_eq!(value["status"], "error");
        assert_eq!(value["code"], "OVERFLOW");
        assert_eq!(value["exit_code"], 3);
    }
}
