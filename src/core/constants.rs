//! Constants used throughout envpull.
//!
//! Centralizes file names, field names and wire defaults.

/// Project identity file, created by the vault's project setup.
pub const PROJECT_FILE: &str = ".env.project";

/// Member identity file, written after a successful `/auth`.
pub const ME_FILE: &str = ".env.me";

/// Field holding the project UID inside [`PROJECT_FILE`].
pub const PROJECT_KEY: &str = "DOTENV_PROJECT";

/// Field holding the member UID inside [`ME_FILE`].
pub const ME_KEY: &str = "DOTENV_ME";

/// Trailing comment written into [`ME_FILE`].
pub const ME_FILE_WARNING: &str = "# You should NOT commit this file to source control";

/// Prefix of every generated member UID.
pub const ME_PREFIX: &str = "me_";

/// Random bytes in a generated member UID, before hex encoding.
pub const ME_RANDOM_BYTES: usize = 32;

/// Environment pulled when none is named.
pub const DEFAULT_ENVIRONMENT: &str = "development";

/// Destination for the default environment.
pub const DEFAULT_ENV_FILE: &str = ".env";

/// Optional per-directory settings file.
pub const CONFIG_FILE: &str = ".envpull.toml";

/// Vault service used when nothing else is configured.
pub const DEFAULT_API_URL: &str = "https://vault.dotenv.org";

/// Environment variable overriding the API URL.
pub const API_URL_ENV: &str = "ENVPULL_API_URL";

/// Environment variable holding the log filter.
pub const LOG_ENV: &str = "ENVPULL_LOG";

/// Gitignore entries keeping pulled secrets and the member file out of git.
pub const GITIGNORE_ENTRIES: &[&str] = &[".env*", ".flaskenv*", "!.env.project"];
