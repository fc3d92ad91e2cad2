//! envpull - pull environment secrets from a vault into local .env files.

use std::process::ExitCode;

use clap::Parser;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use envpull::cli::output;
use envpull::cli::{execute, Cli};
use envpull::core::constants;
use envpull::error::{ConfigError, Error};

fn main() -> ExitCode {
    let cli = Cli::parse();

    // Initialize tracing subscriber with env-filter support
    let filter = EnvFilter::try_from_env(constants::LOG_ENV).unwrap_or_else(|_| {
        if cli.verbose {
            EnvFilter::new("envpull=debug")
        } else {
            EnvFilter::new("envpull=warn")
        }
    });

    tracing_subscriber::registry()
        .with(filter)
        .with(
            fmt::layer()
                .with_writer(std::io::stderr)
                .with_target(false)
                .without_time(),
        )
        .init();

    match execute(cli.command) {
        Ok(code) => code,
        Err(e) => {
            // Format error with suggestion if available
            let suggestion = match &e {
                Error::NonInteractive(_) => Some("run envpull pull from an interactive terminal"),
                Error::Config(ConfigError::Parse(_)) => Some("fix or remove .envpull.toml"),
                Error::Config(ConfigError::InvalidValue { .. }) => {
                    Some("check --api-url, ENVPULL_API_URL or .envpull.toml")
                }
                _ => None,
            };

            output::error(&e.to_string());
            if let Some(hint) = suggestion {
                output::hint(hint);
            }
            ExitCode::FAILURE
        }
    }
}
