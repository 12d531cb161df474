//! Input/Output handling shared by every binary.
//!
//! This module provides:
//! - Integer parsing from standard input
//! - Text and JSON output formatting
//! - Consistent exit codes

pub mod envelope;
pub mod exit_code;
pub mod format;
pub mod input;
pub mod output;

pub use envelope::{Envelope, Meta, MessageType, ResultCode, SCHEMA_VERSION, Status};
pub use exit_code::ExitCode;
pub use format::OutputFormat;
pub use input::{parse_integer, read_integer};
pub use output::{OutputManager, Report};
