//! HTTP transport for the vault service.

use serde::Serialize;
use tracing::{debug, warn};
use ureq::Agent;

use super::{
    blob_from_response, error_from_response, AuthRequest, PullRequest, Remote, VerifyRequest,
};
use crate::core::config::Settings;
use crate::error::RemoteError;

/// Blocking JSON client for the vault service.
pub struct HttpRemote {
    agent: Agent,
    base_url: String,
}

impl std::fmt::Debug for HttpRemote {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("HttpRemote")
            .field("base_url", &self.base_url)
            .finish()
    }
}

impl HttpRemote {
    /// Client for the service described by `settings`.
    pub fn new(settings: &Settings) -> Self {
        // Non-2xx responses come back as responses so their bodies can be read.
        let config = Agent::config_builder()
            .http_status_as_error(false)
            .timeout_global(settings.timeout())
            .build();

        Self {
            agent: config.into(),
            base_url: settings.api_url().to_string(),
        }
    }

    /// Base URL requests are sent to
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// POST `body` as JSON to `endpoint`, returning status and response text.
    fn post<T: Serialize>(&self, endpoint: &str, body: &T) -> Result<(u16, String), RemoteError> {
        let url = format!("{}/{}", self.base_url, endpoint);
        let payload =
            serde_json::to_vec(body).map_err(|e| RemoteError::Transport(e.to_string()))?;

        debug!(url = %url, "sending request");

        let mut response = self
            .agent
            .post(url.as_str())
            .header("content-type", "application/json")
            .send(payload.as_slice())
            .map_err(|e| {
                warn!(url = %url, error = %e, "request failed");
                RemoteError::Transport(e.to_string())
            })?;

        let status = response.status().as_u16();
        let text = response
            .body_mut()
            .read_to_string()
            .map_err(|e| RemoteError::Transport(e.to_string()))?;

        debug!(url = %url, status, bytes = text.len(), "response received");
        Ok((status, text))
    }

    /// POST and fail on any non-2xx status.
    fn call<T: Serialize>(&self, endpoint: &str, body: &T) -> Result<(u16, String), RemoteError> {
        let (status, text) = self.post(endpoint, body)?;

        if !(200..300).contains(&status) {
            return Err(error_from_response(status, &text));
        }

        Ok((status, text))
    }
}

impl Remote for HttpRemote {
    fn auth(&self, request: &AuthRequest) -> Result<(), RemoteError> {
        self.call("auth", request).map(|_| ())
    }

    fn verify(&self, request: &VerifyRequest) -> Result<(), RemoteError> {
        self.call("verify", request).map(|_| ())
    }

    fn pull(&self, request: &PullRequest) -> Result<String, RemoteError> {
        let (status, text) = self.call("pull", request)?;
        blob_from_response(status, &text)
    }
}
