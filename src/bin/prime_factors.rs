//! Reads one integer `n` from stdin and prints its distinct prime factors,
//! each followed by a space, on a single line.

use numtools::cli::commands;
use numtools::{OutputFormat, Primality, logging};

fn main() -> std::process::ExitCode {
    logging::init();
    commands::factors::run(None, Primality::Naive, OutputFormat::Text).into()
}
