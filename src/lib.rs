//! envpull - pull environment secrets from a vault into local .env files.
//!
//! # Architecture
//!
//! ```text
//! src/
//! ├── cli/                # Command-line interface
//! │   ├── pull            # Run the identity/pull flow
//! │   ├── status          # Read-only view of local state
//! │   ├── prompt          # Email and short-code prompts
//! │   ├── output          # local:/remote: terminal lines
//! │   └── completions     # Shell completions
//! └── core/               # Core library components
//!     ├── config          # .envpull.toml settings, .gitignore upkeep
//!     ├── constants       # File names, field names, defaults
//!     ├── domain/         # Env files, identity store, targets
//!     ├── remote/         # Vault protocol and HTTP transport
//!     └── flow            # Decision state machine and handshake
//! ```
//!
//! # Flow
//!
//! A directory holding `.env.project` but no `.env.me` is a new machine: the
//! user is asked for an email (`/auth`), `.env.me` is written, a short code
//! is confirmed (`/verify`), and the environment is pulled. A directory with
//! both files pulls directly.

pub mod cli;
pub mod core;
pub mod error;
