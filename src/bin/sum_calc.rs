//! Reads one integer `n` from stdin and prints the perimeter sum and the
//! sum of squares over `1..=n`, one per line.

use numtools::cli::commands;
use numtools::{OutputFormat, logging};

fn main() -> std::process::ExitCode {
    logging::init();
    commands::sums::run(None, OutputFormat::Text).into()
}
