//! Status command.
//!
//! Read-only view of the identity files and what `pull` would do.

use crate::cli::output;
use crate::cli::pull::Args;
use crate::core::config::Settings;
use crate::core::constants;
use crate::core::domain::{IdentityStore, MemberUid};
use crate::core::flow::Decision;
use crate::error::Result;

/// Show local identity state.
pub fn execute(args: Args) -> Result<()> {
    let store = IdentityStore::current_dir();
    let settings = Settings::load(store.root(), args.api_url.as_deref())?;
    let target = args.target();
    let decision = Decision::evaluate(&store, args.dotenv_me.as_deref());

    output::header("envpull status");
    output::blank();

    let project = if !store.has_project_identity() {
        format!("missing {}", constants::PROJECT_FILE)
    } else if store.is_project_empty() {
        format!("empty {}", constants::PROJECT_FILE)
    } else {
        store.project_uid()
    };
    output::kv("project", project);

    let member = match args.dotenv_me.as_deref() {
        Some(uid) => format!("{} (from --dotenv-me)", MemberUid::new(uid.trim())),
        None if !store.has_member_identity(false) => "not authenticated".to_string(),
        None if store.is_member_empty() => format!("empty {}", constants::ME_FILE),
        None => MemberUid::new(store.member_uid()).to_string(),
    };
    output::kv("member", member);

    let destination = target.path_in(store.root());
    output::kv("environment", target.environment());
    output::kv(
        "destination",
        format!(
            "{}{}",
            target.filename().display(),
            if destination.exists() { "" } else { " (not yet pulled)" }
        ),
    );
    output::kv("vault", settings.api_url());
    output::kv("next step", decision);

    output::blank();
    match decision.abort_message() {
        Some(message) => output::warn(message),
        None => output::hint(&format!(
            "run {} to fetch {}",
            output::cmd(&pull_command(&args)),
            target.filename().display()
        )),
    }

    Ok(())
}

fn pull_command(args: &Args) -> String {
    let mut command = String::from("envpull pull");
    if args.environment != constants::DEFAULT_ENVIRONMENT || args.filename.is_some() {
        command.push(' ');
        command.push_str(&args.environment);
    }
    if let Some(filename) = &args.filename {
        command.push(' ');
        command.push_str(&filename.display().to_string());
    }
    if let Some(uid) = &args.dotenv_me {
        command.push_str(" -m ");
        command.push_str(uid.trim());
    }
    command
}
