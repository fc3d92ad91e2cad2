//! Test support utilities for envpull integration tests.
//!
//! Provides reusable test environment setup and helper commands.

#![allow(dead_code)]

pub mod assertions;
pub mod commands;
pub mod vault;

#[allow(unused_imports)]
pub use assertions::*;
#[allow(unused_imports)]
pub use vault::FakeVault;

use std::fs;
use std::path::PathBuf;

use tempfile::TempDir;

/// A project UID that passes the emptiness check.
pub const PROJECT_UID: &str = "prj_7a3f0c";

/// A member UID in the generated shape.
pub const MEMBER_UID: &str =
    "me_5f1e2d3c4b5a69788796a5b4c3d2e1f00112233445566778899aabbccddeeff0";

/// Loopback address nothing listens on.
pub const CLOSED_URL: &str = "http://127.0.0.1:1";

/// Test environment with an isolated working directory.
///
/// No process-global state is mutated; child processes use `.current_dir()`
/// so tests can safely run in parallel.
pub struct Test {
    /// Temporary working directory
    pub dir: TempDir,
}

impl Test {
    /// Create an empty directory.
    pub fn new() -> Self {
        let dir = TempDir::new().expect("failed to create temp dir");
        Self { dir }
    }

    /// Directory with a valid `.env.project`.
    pub fn with_project() -> Self {
        let t = Self::new();
        t.write(".env.project", &format!("DOTENV_PROJECT={}\n", PROJECT_UID));
        t
    }

    /// Directory with valid `.env.project` and `.env.me`.
    pub fn with_member() -> Self {
        let t = Self::with_project();
        t.write(
            ".env.me",
            &format!(
                "DOTENV_ME={}\n# You should NOT commit this file to source control\n",
                MEMBER_UID
            ),
        );
        t
    }

    /// Absolute path of a file in the test directory.
    pub fn path(&self, name: &str) -> PathBuf {
        self.dir.path().join(name)
    }

    /// Write a file in the test directory.
    pub fn write(&self, name: &str, contents: &str) {
        fs::write(self.path(name), contents).expect("failed to write fixture");
    }

    /// Read a file in the test directory.
    pub fn read(&self, name: &str) -> String {
        fs::read_to_string(self.path(name)).expect("failed to read file")
    }

    /// Whether a file exists in the test directory.
    pub fn exists(&self, name: &str) -> bool {
        self.path(name).exists()
    }
}
