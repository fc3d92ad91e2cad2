//! Settings and working-directory housekeeping.
//!
//! Settings come from built-in defaults, an optional `.envpull.toml`, and
//! finally an explicit API URL (flag or `ENVPULL_API_URL`).

use std::path::{Path, PathBuf};
use std::time::Duration;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::core::constants;
use crate::error::{ConfigError, Result};

/// Resolved settings for one invocation.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Settings {
    #[serde(default)]
    pub remote: RemoteSettings,
}

/// How to reach the vault service.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RemoteSettings {
    /// Base URL; endpoints are appended as `/auth`, `/verify`, `/pull`.
    #[serde(default = "default_url")]
    pub url: String,
    /// Overall per-request timeout. Unset means the HTTP agent default.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub timeout_secs: Option<u64>,
}

fn default_url() -> String {
    constants::DEFAULT_API_URL.to_string()
}

impl Default for RemoteSettings {
    fn default() -> Self {
        Self {
            url: default_url(),
            timeout_secs: None,
        }
    }
}

impl Settings {
    /// Path to the settings file under `root`
    pub fn config_path(root: &Path) -> PathBuf {
        root.join(constants::CONFIG_FILE)
    }

    /// Load settings from `root`, applying `api_url` last.
    ///
    /// A missing settings file is not an error.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::Parse` for malformed TOML and
    /// `ConfigError::InvalidValue` for an unusable URL.
    pub fn load(root: &Path, api_url: Option<&str>) -> Result<Self> {
        let path = Self::config_path(root);

        let mut settings = if path.exists() {
            debug!(path = %path.display(), "loading settings");
            let contents = std::fs::read_to_string(&path).map_err(ConfigError::ReadFile)?;
            toml::from_str(&contents).map_err(ConfigError::Parse)?
        } else {
            Self::default()
        };

        if let Some(url) = api_url {
            settings.remote.url = url.to_string();
        }

        settings.remote.url = normalize_url(&settings.remote.url)?;
        debug!(url = %settings.remote.url, "settings resolved");

        Ok(settings)
    }

    /// Base URL without a trailing slash
    pub fn api_url(&self) -> &str {
        &self.remote.url
    }

    /// Per-request timeout, if configured
    pub fn timeout(&self) -> Option<Duration> {
        self.remote.timeout_secs.map(Duration::from_secs)
    }
}

fn normalize_url(raw: &str) -> Result<String> {
    let url = raw.trim().trim_end_matches('/');

    if url.is_empty() {
        return Err(ConfigError::InvalidValue {
            field: "api url",
            reason: "must not be empty".to_string(),
        }
        .into());
    }

    if !(url.starts_with("http://") || url.starts_with("https://")) {
        return Err(ConfigError::InvalidValue {
            field: "api url",
            reason: format!("expected http:// or https://, got {}", url),
        }
        .into());
    }

    Ok(url.to_string())
}

/// Ensure `.gitignore` under `root` ignores env files but keeps `.env.project`
///
/// Appends each missing entry of [`constants::GITIGNORE_ENTRIES`]; existing
/// content is left as is. `!.env.project` is appended again when an ignore
/// pattern would otherwise come after it.
///
/// # Errors
///
/// Returns error if file operations fail.
pub fn ensure_gitignore(root: &Path) -> Result<()> {
    let gitignore = root.join(".gitignore");

    let existing = if gitignore.exists() {
        std::fs::read_to_string(&gitignore)?
    } else {
        String::new()
    };

    let mut updated = existing.clone();
    for entry in constants::GITIGNORE_ENTRIES {
        if last_line(&updated, entry).is_none() {
            append_line(&mut updated, entry);
        }
    }

    // A negation only applies to patterns listed before it.
    for keep in constants::GITIGNORE_ENTRIES.iter().filter(|e| e.starts_with('!')) {
        let shadowed = constants::GITIGNORE_ENTRIES
            .iter()
            .filter(|e| !e.starts_with('!'))
            .filter_map(|e| last_line(&updated, e))
            .max();
        if shadowed > last_line(&updated, keep) {
            append_line(&mut updated, keep);
        }
    }

    if updated != existing {
        debug!(path = %gitignore.display(), "updating gitignore");
        std::fs::write(&gitignore, updated)?;
    }

    Ok(())
}

fn last_line(contents: &str, entry: &str) -> Option<usize> {
    contents.lines().collect::<Vec<_>>().iter().rposition(|l| l.trim() == entry)
}

fn append_line(contents: &mut String, entry: &str) {
    if !contents.is_empty() && !contents.ends_with('\n') {
        contents.push('\n');
    }
    contents.push_str(entry);
    contents.push('\n');
}
