//! Token handling for GitHub API requests

use crate::error::GitHubError;
use std::fmt;

/// Environment variable holding the personal access token
pub const TOKEN_ENV_VAR: &str = "GITHUB_TOKEN";

/// Bearer token used to authenticate every request
#[derive(Clone)]
pub struct GitHubAuth {
    token: String,
}

impl GitHubAuth {
    pub fn new(token: impl Into<String>) -> Self {
        Self {
            token: token.into(),
        }
    }

    /// Resolve the token from `GITHUB_TOKEN`
    ///
    /// # Errors
    /// Returns [`GitHubError::MissingToken`] when the variable is unset, not
    /// valid unicode, or blank.
    pub fn from_env() -> Result<Self, GitHubError> {
        match std::env::var(TOKEN_ENV_VAR) {
            Ok(token) if !token.trim().is_empty() => Ok(Self::new(token.trim())),
            _ => Err(GitHubError::MissingToken),
        }
    }

    pub fn token(&self) -> &str {
        &self.token
    }

    /// Value for the `Authorization` header
    pub fn auth_header(&self) -> String {
        format!("Bearer {}", self.token)
    }
}

impl fmt::Debug for GitHubAuth {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("GitHubAuth")
            .field("token", &"<redacted>")
            .finish()
    }
}
