use clap::Parser;
use numtools::cli::commands;
use numtools::cli::{Cli, Commands};
use numtools::{OutputFormat, Settings, logging};

fn main() -> std::process::ExitCode {
    let cli = Cli::parse();

    let mut config = match &cli.config {
        Some(path) => Settings::load_from(path),
        None => Settings::load(),
    }
    .unwrap_or_else(|e| {
        eprintln!("Configuration error: {e}");
        eprintln!("Using default configuration for now.");
        Settings::default()
    });

    logging::init_with_config(&config.logging);
    tracing::debug!("[cli] loaded settings version {}", config.version);

    let code = match cli.command {
        Commands::Sums { n, json } => {
            let format = OutputFormat::from_json_flag(json, config.output.format);
            commands::sums::run(n, format)
        }

        Commands::Factors { n, json, primality } => {
            // Override config with CLI args
            if let Some(primality) = primality {
                config.factors.primality = primality;
            }
            let format = OutputFormat::from_json_flag(json, config.output.format);
            commands::factors::run(n, config.factors.primality, format)
        }

        Commands::Init { force } => commands::init::run_init(force),

        Commands::Config => commands::init::run_config(&config),
    };

    code.into()
}
