//! Command-line interface.

pub mod completions;
pub mod output;
pub mod prompt;
pub mod pull;
pub mod status;

use std::path::PathBuf;
use std::process::ExitCode;

use clap::{Parser, Subcommand};

use crate::core::constants;

/// envpull - pull environment secrets from a vault into local .env files.
#[derive(Parser)]
#[command(
    name = "envpull",
    about = "Pull environment secrets from a vault into local .env files",
    version
)]
pub struct Cli {
    /// Enable verbose output (debug logging)
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Command,
}

/// Top-level commands.
#[derive(Subcommand)]
pub enum Command {
    /// Pull an environment, authenticating this machine first if needed
    Pull {
        /// Environment to pull
        #[arg(default_value = constants::DEFAULT_ENVIRONMENT)]
        environment: String,
        /// Write to this file instead of .env / .env.<environment>
        filename: Option<PathBuf>,
        /// Member UID to use instead of .env.me
        #[arg(short = 'm', long = "dotenv-me", value_name = "UID")]
        dotenv_me: Option<String>,
        /// Vault service base URL
        #[arg(long, env = constants::API_URL_ENV, value_name = "URL")]
        api_url: Option<String>,
    },

    /// Show local identity state and what pull would do
    Status {
        /// Environment to check
        #[arg(default_value = constants::DEFAULT_ENVIRONMENT)]
        environment: String,
        /// Destination override, as for pull
        filename: Option<PathBuf>,
        /// Member UID to use instead of .env.me
        #[arg(short = 'm', long = "dotenv-me", value_name = "UID")]
        dotenv_me: Option<String>,
        /// Vault service base URL
        #[arg(long, env = constants::API_URL_ENV, value_name = "URL")]
        api_url: Option<String>,
    },

    /// Generate shell completions
    Completions {
        /// Shell to generate completions for
        #[arg(value_enum)]
        shell: Shell,
    },
}

/// Supported shells for completions.
#[derive(clap::ValueEnum, Clone, Debug)]
pub enum Shell {
    Bash,
    Zsh,
    Fish,
    PowerShell,
}

/// Execute a command.
///
/// Local aborts exit successfully; a failed remote call exits with 1.
pub fn execute(command: Command) -> crate::error::Result<ExitCode> {
    use Command::*;

    match command {
        Pull {
            environment,
            filename,
            dotenv_me,
            api_url,
        } => pull::execute(pull::Args {
            environment,
            filename,
            dotenv_me,
            api_url,
        }),
        Status {
            environment,
            filename,
            dotenv_me,
            api_url,
        } => status::execute(pull::Args {
            environment,
            filename,
            dotenv_me,
            api_url,
        })
        .map(|()| ExitCode::SUCCESS),
        Completions { shell } => completions::execute(shell).map(|()| ExitCode::SUCCESS),
    }
}
