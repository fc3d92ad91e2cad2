//! Identity bootstrap and pull.
//!
//! [`Decision::evaluate`] looks at the local identity files and picks one of
//! five paths; [`Flow::run`] carries it out:
//!
//! ```text
//! start ─► project? ──no──► abort (no project)
//!             │ empty ───► abort (empty project)
//!             ▼
//!          member? ──yes, empty──► abort (empty member)
//!             │ yes ─────────────► pull
//!             │ no
//!             ▼
//!          /auth ─► write .env.me ─► /verify ─► pull
//! ```
//!
//! Remote calls run strictly in sequence and are never retried. Any remote
//! failure ends the run with [`Outcome::Failed`].

use std::fmt;
use std::path::PathBuf;

use tracing::{debug, info};

use crate::core::config;
use crate::core::domain::env;
use crate::core::domain::identity::is_blank;
use crate::core::domain::{EnvironmentTarget, IdentityStore, MemberUid};
use crate::core::remote::{AuthRequest, PullRequest, Remote, VerifyRequest};
use crate::error::{RemoteError, Result, StoreError};

/// Where a user-facing message comes from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Channel {
    /// State of local files.
    Local,
    /// A call to the vault service.
    Remote,
}

impl Channel {
    /// Line prefix for this channel
    pub fn prefix(self) -> &'static str {
        match self {
            Self::Local => "local:",
            Self::Remote => "remote:",
        }
    }
}

/// Receives user-facing progress and failure lines.
pub trait Reporter {
    /// Progress or an instructive abort.
    fn info(&mut self, channel: Channel, message: &str);

    /// A failed step.
    fn failure(&mut self, channel: Channel, message: &str);
}

/// Asks the user for login details.
pub trait Prompt {
    /// Email address registered with the vault. Input should be masked.
    fn email(&mut self) -> Result<String>;

    /// Short code emailed by `/auth`.
    fn short_code(&mut self) -> Result<String>;
}

/// What to do, given the local identity files.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Decision {
    AbortNoProject,
    AbortEmptyProject,
    AbortEmptyMember,
    Authenticate,
    Pull,
}

impl Decision {
    /// Pick a path from the identity files in `store`.
    ///
    /// `me_override` stands in for `.env.me` when given.
    pub fn evaluate(store: &IdentityStore, me_override: Option<&str>) -> Self {
        if !store.has_project_identity() {
            return Self::AbortNoProject;
        }
        if store.is_project_empty() {
            return Self::AbortEmptyProject;
        }
        if !store.has_member_identity(me_override.is_some()) {
            return Self::Authenticate;
        }

        let member = match me_override {
            Some(uid) => uid.trim().to_string(),
            None => store.member_uid(),
        };
        if is_blank(&member) {
            return Self::AbortEmptyMember;
        }

        Self::Pull
    }

    /// Instructive message for an abort, `None` otherwise.
    pub fn abort_message(self) -> Option<&'static str> {
        match self {
            Self::AbortNoProject => Some(
                "missing .env.project (DOTENV_PROJECT). create the project in the vault and place its .env.project here",
            ),
            Self::AbortEmptyProject => Some(
                "empty .env.project (DOTENV_PROJECT). restore its contents from the vault and try again",
            ),
            Self::AbortEmptyMember => Some(
                "empty .env.me (DOTENV_ME). delete .env.me and run envpull pull to authenticate again",
            ),
            Self::Authenticate | Self::Pull => None,
        }
    }
}

impl fmt::Display for Decision {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Self::AbortNoProject => "abort: no project",
            Self::AbortEmptyProject => "abort: empty project",
            Self::AbortEmptyMember => "abort: empty member",
            Self::Authenticate => "authenticate, then pull",
            Self::Pull => "pull",
        };
        f.write_str(label)
    }
}

/// The remote step that failed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Stage {
    Auth,
    Verify,
    Pull,
}

/// How a run ended.
#[derive(Debug)]
pub enum Outcome {
    /// Local state did not allow a run. Nothing was sent.
    Aborted(Decision),
    /// The destination file now holds the pulled environment.
    Pulled {
        environment: String,
        path: PathBuf,
        bytes: usize,
    },
    /// A remote call failed; its error has been reported.
    Failed { stage: Stage, error: RemoteError },
}

impl Outcome {
    /// Whether the run should count as a failure.
    pub fn is_failure(&self) -> bool {
        matches!(self, Self::Failed { .. })
    }
}

/// One pull of one environment.
pub struct Flow<R, P, O> {
    store: IdentityStore,
    remote: R,
    prompt: P,
    reporter: O,
    target: EnvironmentTarget,
    me_override: Option<String>,
}

impl<R: Remote, P: Prompt, O: Reporter> Flow<R, P, O> {
    /// Build a flow over `store` pulling `target`.
    pub fn new(
        store: IdentityStore,
        remote: R,
        prompt: P,
        reporter: O,
        target: EnvironmentTarget,
    ) -> Self {
        Self {
            store,
            remote,
            prompt,
            reporter,
            target,
            me_override: None,
        }
    }

    /// Use `uid` as the member identity instead of `.env.me`.
    pub fn with_member_override(mut self, uid: Option<String>) -> Self {
        self.me_override = uid;
        self
    }

    /// Give back the reporter, e.g. to inspect collected lines.
    pub fn into_reporter(self) -> O {
        self.reporter
    }

    /// Run to completion.
    ///
    /// Remote failures are reported and returned as [`Outcome::Failed`];
    /// `Err` is reserved for local I/O and prompt failures.
    ///
    /// # Errors
    ///
    /// Returns error if `.gitignore`, `.env.me` or the destination cannot be
    /// written, or a prompt fails.
    pub fn run(&mut self) -> Result<Outcome> {
        config::ensure_gitignore(self.store.root())?;

        let decision = Decision::evaluate(&self.store, self.me_override.as_deref());
        info!(
            environment = self.target.environment(),
            decision = %decision,
            "starting pull"
        );

        if let Some(message) = decision.abort_message() {
            self.reporter.info(Channel::Local, message);
            return Ok(Outcome::Aborted(decision));
        }

        let project_uid = self.store.project_uid();

        match decision {
            Decision::Authenticate => self.authenticate(&project_uid),
            _ => {
                let member = match &self.me_override {
                    Some(uid) => MemberUid::new(uid.trim()),
                    None => MemberUid::new(self.store.member_uid()),
                };
                self.pull(&project_uid, &member)
            }
        }
    }

    /// Two-round login: `/auth` then `/verify`, then pull.
    fn authenticate(&mut self, project_uid: &str) -> Result<Outcome> {
        let me = MemberUid::generate()?;
        debug!(uid = %me, "generated member identity");

        self.reporter
            .info(Channel::Local, "this machine is not yet authenticated for this project");

        let email = self.prompt.email()?;
        let request = AuthRequest {
            email: email.trim().to_string(),
            project_uid: project_uid.to_string(),
            me_uid: me.as_str().to_string(),
        };

        if let Err(error) = self.remote.auth(&request) {
            return Ok(self.fail(Stage::Auth, error));
        }

        self.store.persist_member(&me)?;
        self.reporter.info(
            Channel::Local,
            "wrote .env.me (DOTENV_ME). do not commit it to source control",
        );
        self.reporter
            .info(Channel::Remote, "a short code was sent to your email");

        let short_code = self.prompt.short_code()?;
        let request = VerifyRequest {
            short_code: short_code.trim().to_string(),
            project_uid: project_uid.to_string(),
            me_uid: me.as_str().to_string(),
        };

        if let Err(error) = self.remote.verify(&request) {
            return Ok(self.fail(Stage::Verify, error));
        }

        self.reporter.info(Channel::Remote, "machine authenticated");
        self.pull(project_uid, &me)
    }

    /// Fetch the environment and overwrite the destination with it.
    fn pull(&mut self, project_uid: &str, member: &MemberUid) -> Result<Outcome> {
        let environment = self.target.environment().to_string();
        let filename = self.target.filename().display().to_string();

        self.reporter.info(
            Channel::Remote,
            &format!("securely pulling {} ({})", environment, filename),
        );

        let request = PullRequest {
            environment: environment.clone(),
            project_uid: project_uid.to_string(),
            me_uid: member.as_str().to_string(),
        };

        let blob = match self.remote.pull(&request) {
            Ok(blob) => blob,
            Err(error) => return Ok(self.fail(Stage::Pull, error)),
        };

        let path = self.target.path_in(self.store.root());
        env::write_private(&path, blob.as_bytes()).map_err(|source| StoreError::WriteFailed {
            path: path.display().to_string(),
            source,
        })?;
        debug!(path = %path.display(), bytes = blob.len(), "environment written");

        self.reporter.info(
            Channel::Remote,
            &format!("securely pulled {} ({})", environment, filename),
        );
        self.reporter.info(
            Channel::Local,
            &format!(
                "next, load {} in your app or run envpull status to review this directory",
                filename
            ),
        );

        Ok(Outcome::Pulled {
            environment,
            path,
            bytes: blob.len(),
        })
    }

    fn fail(&mut self, stage: Stage, error: RemoteError) -> Outcome {
        info!(stage = ?stage, status = ?error.status(), "remote call failed");
        self.reporter.failure(Channel::Remote, &error.to_string());
        Outcome::Failed { stage, error }
    }
}
