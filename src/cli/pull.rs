//! Pull command.
//!
//! Wires the terminal, settings and HTTP transport into a [`Flow`].

use std::path::PathBuf;
use std::process::ExitCode;

use tracing::debug;

use crate::cli::output::Terminal;
use crate::cli::prompt::TerminalPrompt;
use crate::core::config::Settings;
use crate::core::domain::{EnvironmentTarget, IdentityStore};
use crate::core::flow::Flow;
use crate::core::remote::HttpRemote;
use crate::error::Result;

/// Arguments shared by `pull` and `status`.
#[derive(Debug, Clone)]
pub struct Args {
    pub environment: String,
    pub filename: Option<PathBuf>,
    pub dotenv_me: Option<String>,
    pub api_url: Option<String>,
}

impl Args {
    /// Resolved destination for these arguments.
    pub fn target(&self) -> EnvironmentTarget {
        EnvironmentTarget::resolve(self.environment.clone(), self.filename.as_deref())
    }
}

/// Pull an environment into the current directory.
pub fn execute(args: Args) -> Result<ExitCode> {
    let store = IdentityStore::current_dir();
    let settings = Settings::load(store.root(), args.api_url.as_deref())?;
    let target = args.target();
    debug!(
        environment = target.environment(),
        filename = %target.filename().display(),
        "pull requested"
    );

    let remote = HttpRemote::new(&settings);
    debug!(url = remote.base_url(), "vault client ready");
    let mut flow = Flow::new(store, remote, TerminalPrompt, Terminal, target)
        .with_member_override(args.dotenv_me);

    if flow.run()?.is_failure() {
        Ok(ExitCode::FAILURE)
    } else {
        Ok(ExitCode::SUCCESS)
    }
}
