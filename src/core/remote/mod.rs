//! Vault service protocol.
//!
//! Three JSON POST calls: `/auth` starts a member login, `/verify` confirms
//! it with the emailed code, `/pull` fetches an environment. [`Remote`] is
//! the seam; [`HttpRemote`] is the real transport.

mod http;

pub use http::HttpRemote;

use serde::{Deserialize, Serialize};

use crate::error::RemoteError;

/// Body of `POST /auth`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AuthRequest {
    pub email: String,
    pub project_uid: String,
    pub me_uid: String,
}

/// Body of `POST /verify`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct VerifyRequest {
    pub short_code: String,
    pub project_uid: String,
    pub me_uid: String,
}

/// Body of `POST /pull`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PullRequest {
    pub environment: String,
    pub project_uid: String,
    pub me_uid: String,
}

/// The vault service.
///
/// Every call either completes or returns the [`RemoteError`] to show.
pub trait Remote {
    /// Register `me_uid` for the project and email a short code.
    fn auth(&self, request: &AuthRequest) -> Result<(), RemoteError>;

    /// Confirm `me_uid` with the short code.
    fn verify(&self, request: &VerifyRequest) -> Result<(), RemoteError>;

    /// Fetch the raw env file for an environment.
    fn pull(&self, request: &PullRequest) -> Result<String, RemoteError>;
}

impl<R: Remote + ?Sized> Remote for &R {
    fn auth(&self, request: &AuthRequest) -> Result<(), RemoteError> {
        (**self).auth(request)
    }

    fn verify(&self, request: &VerifyRequest) -> Result<(), RemoteError> {
        (**self).verify(request)
    }

    fn pull(&self, request: &PullRequest) -> Result<String, RemoteError> {
        (**self).pull(request)
    }
}

#[derive(Deserialize)]
struct ErrorEnvelope {
    errors: Vec<ErrorItem>,
}

#[derive(Deserialize)]
struct ErrorItem {
    message: String,
}

#[derive(Deserialize)]
struct PullEnvelope {
    data: PullData,
}

#[derive(Deserialize)]
struct PullData {
    dotenv: String,
}

/// Turn a non-success response into the error to show.
///
/// The first entry of a structured `errors` list wins; otherwise the raw
/// body; otherwise a bare status line.
pub fn error_from_response(status: u16, body: &str) -> RemoteError {
    if let Ok(envelope) = serde_json::from_str::<ErrorEnvelope>(body) {
        if let Some(first) = envelope.errors.into_iter().next() {
            return RemoteError::Api {
                status,
                message: first.message,
            };
        }
    }

    if !body.trim().is_empty() {
        return RemoteError::Body {
            status,
            body: body.to_string(),
        };
    }

    RemoteError::Transport(format!("request failed with status code {}", status))
}

/// Extract the env blob from a successful `/pull` response.
///
/// A body without `data.dotenv` is reported as the raw body.
pub fn blob_from_response(status: u16, body: &str) -> Result<String, RemoteError> {
    serde_json::from_str::<PullEnvelope>(body)
        .map(|envelope| envelope.data.dotenv)
        .map_err(|_| error_from_response(status, body))
}
