//! Identity files.
//!
//! `.env.project` names the vault project; `.env.me` names this machine to
//! the vault. Reads never fail: a missing or unreadable file is treated as
//! having no fields.

use std::fmt;
use std::path::{Path, PathBuf};

use rand::rngs::OsRng;
use rand::RngCore;
use tracing::debug;
use zeroize::Zeroizing;

use super::env::{self, Env};
use crate::core::constants;
use crate::error::{Result, StoreError};

/// A member UID.
///
/// Either freshly generated for one authentication run, or read back from
/// `.env.me`. `Debug` and `Display` only show a short prefix.
#[derive(Clone, PartialEq, Eq)]
pub struct MemberUid(String);

impl MemberUid {
    /// Mint a new UID: `me_` plus 32 random bytes, hex encoded.
    ///
    /// # Errors
    ///
    /// Returns `StoreError::GenerationFailed` if the OS random source fails.
    pub fn generate() -> Result<Self> {
        let mut bytes = Zeroizing::new([0u8; constants::ME_RANDOM_BYTES]);
        OsRng
            .try_fill_bytes(&mut bytes[..])
            .map_err(|e| StoreError::GenerationFailed(e.to_string()))?;

        Ok(Self(format!(
            "{}{}",
            constants::ME_PREFIX,
            hex::encode(&bytes[..])
        )))
    }

    /// Wrap an existing UID.
    pub fn new(uid: impl Into<String>) -> Self {
        Self(uid.into())
    }

    /// The full UID, as sent on the wire.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Short form safe for logs.
    pub fn redacted(&self) -> String {
        let head: String = self.0.chars().take(constants::ME_PREFIX.len() + 6).collect();
        format!("{}…", head)
    }
}

impl fmt::Debug for MemberUid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("MemberUid").field(&self.redacted()).finish()
    }
}

impl fmt::Display for MemberUid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.redacted())
    }
}

/// Read/write access to the identity files in one directory.
#[derive(Debug, Clone)]
pub struct IdentityStore {
    root: PathBuf,
}

impl IdentityStore {
    /// Identity files under `root`.
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    /// Identity files in the current working directory.
    pub fn current_dir() -> Self {
        Self::new(".")
    }

    /// Directory holding the identity files.
    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Path of `.env.project`.
    pub fn project_path(&self) -> PathBuf {
        self.root.join(constants::PROJECT_FILE)
    }

    /// Path of `.env.me`.
    pub fn member_path(&self) -> PathBuf {
        self.root.join(constants::ME_FILE)
    }

    /// Whether `.env.project` exists.
    pub fn has_project_identity(&self) -> bool {
        self.project_path().exists()
    }

    /// The project UID, or empty if absent or unparseable.
    pub fn project_uid(&self) -> String {
        field(&self.project_path(), constants::PROJECT_KEY)
    }

    /// Whether the project UID is too short to be real.
    pub fn is_project_empty(&self) -> bool {
        is_blank(&self.project_uid())
    }

    /// Whether a member identity is available, from an override or `.env.me`.
    pub fn has_member_identity(&self, override_provided: bool) -> bool {
        override_provided || self.member_path().exists()
    }

    /// The member UID from `.env.me`, or empty.
    pub fn member_uid(&self) -> String {
        field(&self.member_path(), constants::ME_KEY)
    }

    /// Whether the persisted member UID is too short to be real.
    pub fn is_member_empty(&self) -> bool {
        is_blank(&self.member_uid())
    }

    /// Write `.env.me` for `uid`, replacing any existing file.
    ///
    /// # Errors
    ///
    /// Returns `StoreError::WriteFailed` if the file cannot be written.
    pub fn persist_member(&self, uid: &MemberUid) -> Result<()> {
        let path = self.member_path();
        let contents = format!(
            "{}={}\n{}\n",
            constants::ME_KEY,
            uid.as_str(),
            constants::ME_FILE_WARNING
        );

        env::write_private(&path, contents.as_bytes()).map_err(|source| {
            StoreError::WriteFailed {
                path: path.display().to_string(),
                source,
            }
        })?;

        debug!(path = %path.display(), uid = %uid, "member identity saved");
        Ok(())
    }
}

/// A UID of length one or less (after trimming) is never valid.
pub fn is_blank(uid: &str) -> bool {
    uid.trim().chars().count() <= 1
}

fn field(path: &Path, key: &str) -> String {
    let env = Env::load_or_empty(path);
    let value = env.get(key).map(str::trim).unwrap_or_default().to_string();
    debug!(path = %path.display(), key, present = !value.is_empty(), "read identity field");
    value
}
