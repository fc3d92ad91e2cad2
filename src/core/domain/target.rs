//! Environment target.
//!
//! Maps an environment name to the file its secrets are written to.

use std::path::{Path, PathBuf};

use crate::core::constants;

/// An environment to pull and where it lands on disk.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EnvironmentTarget {
    environment: String,
    filename: PathBuf,
}

impl EnvironmentTarget {
    /// Resolve the destination for `environment`.
    ///
    /// An explicit `filename` always wins. Otherwise `development` writes
    /// `.env` and any other environment `name` writes `.env.name`.
    pub fn resolve(environment: impl Into<String>, filename: Option<&Path>) -> Self {
        let environment = environment.into();
        let filename = match filename {
            Some(path) => path.to_path_buf(),
            None if environment == constants::DEFAULT_ENVIRONMENT => {
                PathBuf::from(constants::DEFAULT_ENV_FILE)
            }
            None => PathBuf::from(format!("{}.{}", constants::DEFAULT_ENV_FILE, environment)),
        };

        Self {
            environment,
            filename,
        }
    }

    /// Environment name sent to the vault.
    pub fn environment(&self) -> &str {
        &self.environment
    }

    /// Destination file, relative to the working directory unless absolute.
    pub fn filename(&self) -> &Path {
        &self.filename
    }

    /// Destination resolved against `root`.
    pub fn path_in(&self, root: &Path) -> PathBuf {
        root.join(&self.filename)
    }
}

impl Default for EnvironmentTarget {
    fn default() -> Self {
        Self::resolve(constants::DEFAULT_ENVIRONMENT, None)
    }
}
