//! CLI argument parsing using clap.

use clap::{
    Parser, Subcommand,
    builder::styling::{AnsiColor, Effects, Styles},
};
use std::path::PathBuf;

use crate::factors::Primality;

fn clap_cargo_style() -> Styles {
    Styles::styled()
        .header(AnsiColor::Cyan.on_default() | Effects::BOLD)
        .usage(AnsiColor::Cyan.on_default() | Effects::BOLD)
        .literal(AnsiColor::Green.on_default())
        .placeholder(AnsiColor::Green.on_default())
}

/// Range sums and prime factors
#[derive(Parser)]
#[command(
    name = "numtools",
    version = env!("CARGO_PKG_VERSION"),
    about = "Range sums and prime factors",
    long_about = "Compute the perimeter and area sums over 1..=N, or list the distinct prime factors of N.\nN is read from standard input when it is not given on the command line.",
    next_line_help = true,
    styles = clap_cargo_style()
)]
pub struct Cli {
    /// Path to custom settings.toml file
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

/// Available CLI commands
#[derive(Subcommand)]
pub enum Commands {
    /// Print the perimeter sum and the sum of squares for N
    #[command(about = "Print the perimeter sum and the sum of squares over 1..=N")]
    Sums {
        /// The operand (read from stdin when omitted)
        #[arg(allow_negative_numbers = true)]
        n: Option<i64>,

        /// Output a JSON envelope
        #[arg(long)]
        json: bool,
    },

    /// Print the distinct prime factors of N
    #[command(about = "Print the distinct prime factors of N in increasing order")]
    Factors {
        /// The operand (read from stdin when omitted)
        #[arg(allow_negative_numbers = true)]
        n: Option<i64>,

        /// Output a JSON envelope
        #[arg(long)]
        json: bool,

        /// Primality test (overrides config)
        #[arg(long, value_enum)]
        primality: Option<Primality>,
    },

    /// Write a default configuration file
    #[command(about = "Set up .numtools directory with default configuration")]
    Init {
        /// Force overwrite existing configuration
        #[arg(short, long)]
        force: bool,
    },

    /// Show the effective configuration
    #[command(about = "Display active settings")]
    Config,
}
