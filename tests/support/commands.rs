//! Command helper methods for Test.

use super::Test;
use assert_cmd::Command;
use std::process::Output;

impl Test {
    /// Create an envpull command running in the test directory.
    ///
    /// Colors are disabled and `ENVPULL_API_URL` is cleared so the host
    /// environment cannot leak in.
    pub fn cmd(&self) -> Command {
        #[allow(deprecated)]
        let mut cmd = Command::cargo_bin("envpull").expect("failed to find envpull binary");
        cmd.current_dir(self.dir.path());
        cmd.env("NO_COLOR", "1");
        cmd.env_remove("ENVPULL_API_URL");
        cmd.env_remove("ENVPULL_LOG");
        cmd
    }

    /// Shortcut for `envpull pull [args] --api-url <url>`.
    pub fn pull(&self, url: &str, args: &[&str]) -> Output {
        self.cmd()
            .arg("pull")
            .args(args)
            .args(["--api-url", url])
            .output()
            .expect("failed to run envpull pull")
    }

    /// Shortcut for `envpull status [args]`.
    pub fn status(&self, args: &[&str]) -> Output {
        self.cmd()
            .arg("status")
            .args(args)
            .output()
            .expect("failed to run envpull status")
    }
}
