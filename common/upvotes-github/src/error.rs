//! Errors returned by GitHub operations

use crate::rate_limit::RateLimit;
use reqwest::StatusCode;

#[derive(Debug, thiserror::Error)]
pub enum GitHubError {
    /// No usable token in the environment; raised before any request is sent
    #[error("Missing GITHUB_TOKEN! Make sure you have configured it.")]
    MissingToken,

    #[error("Invalid GitHub URL format: {0}")]
    InvalidUrl(String),

    /// The request never produced a response, or the body could not be read
    #[error("Request to {url} failed: {source}")]
    Transport {
        url: String,
        #[source]
        source: reqwest::Error,
    },

    /// The API answered with a non-success status
    #[error("GitHub API returned {status} for {url}")]
    Status {
        url: String,
        status: StatusCode,
        /// Populated for 403 and 429 responses
        rate_limit: Option<RateLimit>,
    },

    #[error("Failed to parse GitHub API response from {url}: {source}")]
    Decode {
        url: String,
        #[source]
        source: serde_json::Error,
    },
}

impl GitHubError {
    /// HTTP status of the failed response, if the server answered at all
    pub fn status(&self) -> Option<StatusCode> {
        match self {
            GitHubError::Status { status, .. } => Some(*status),
            _ => None,
        }
    }

    pub fn rate_limit(&self) -> Option<&RateLimit> {
        match self {
            GitHubError::Status { rate_limit, .. } => rate_limit.as_ref(),
            _ => None,
        }
    }

    pub fn is_rate_limited(&self) -> bool {
        self.rate_limit().is_some()
    }

    /// Whether a listing that failed this way can be treated as an empty result.
    ///
    /// Transport and status failures qualify; a body that arrived but could not
    /// be decoded does not.
    pub fn counts_as_empty(&self) -> bool {
        matches!(
            self,
            GitHubError::Transport { .. } | GitHubError::Status { .. }
        )
    }
}
