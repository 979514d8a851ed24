//! GitHub client implementation

use crate::auth::GitHubAuth;
use crate::error::GitHubError;
use crate::rate_limit::{RateLimit, is_rate_limit_status};
use reqwest::header::{ACCEPT, AUTHORIZATION, USER_AGENT};
use serde::de::DeserializeOwned;

/// GitHub REST API base URL
pub const DEFAULT_API_BASE: &str = "https://api.github.com";

/// Accept header selecting GitHub's JSON media type
pub const GITHUB_JSON_MEDIA_TYPE: &str = "application/vnd.github+json";

const DEFAULT_USER_AGENT: &str = concat!("upvotes-github/", env!("CARGO_PKG_VERSION"));

/// GitHub API client for making authenticated requests
///
/// A token is mandatory: construct with [`GitHubClient::from_env`] at startup so
/// a missing token surfaces before any request is attempted.
pub struct GitHubClient {
    pub(crate) client: reqwest::Client,
    pub(crate) auth: GitHubAuth,
    pub(crate) api_base: String,
    pub(crate) user_agent: String,
    pub(crate) per_page: u8,
}

impl GitHubClient {
    pub fn new(auth: GitHubAuth) -> Self {
        Self {
            client: reqwest::Client::new(),
            auth,
            api_base: DEFAULT_API_BASE.to_string(),
            user_agent: DEFAULT_USER_AGENT.to_string(),
            per_page: crate::issues::MAX_PER_PAGE,
        }
    }

    /// Create a client authenticated with the `GITHUB_TOKEN` environment variable
    pub fn from_env() -> Result<Self, GitHubError> {
        Ok(Self::new(GitHubAuth::from_env()?))
    }

    /// Point the client at another API host (GitHub Enterprise, local test servers)
    pub fn with_api_base(mut self, api_base: impl Into<String>) -> Self {
        self.api_base = api_base.into().trim_end_matches('/').to_string();
        self
    }

    pub fn with_user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.user_agent = user_agent.into();
        self
    }

    /// Page size for issue listings, clamped to what the API accepts
    pub fn with_per_page(mut self, per_page: u8) -> Self {
        self.per_page = per_page.clamp(1, crate::issues::MAX_PER_PAGE);
        self
    }

    pub fn api_base(&self) -> &str {
        &self.api_base
    }

    pub fn per_page(&self) -> u8 {
        self.per_page
    }

    pub fn user_agent(&self) -> &str {
        &self.user_agent
    }

    pub(crate) fn endpoint(&self, path: &str) -> String {
        format!("{}{}", self.api_base, path)
    }

    /// Build an authenticated GET request carrying the bearer token,
    /// user agent and GitHub JSON accept headers
    pub fn get(&self, url: &str) -> reqwest::RequestBuilder {
        self.client
            .get(url)
            .header(AUTHORIZATION, self.auth.auth_header())
            .header(USER_AGENT, &self.user_agent)
            .header(ACCEPT, GITHUB_JSON_MEDIA_TYPE)
    }

    /// Send a GET request and decode the JSON body
    ///
    /// The status is checked before the body is read, so a failed response is
    /// never decoded.
    pub(crate) async fn get_json<T: DeserializeOwned>(&self, url: &str) -> Result<T, GitHubError> {
        tracing::debug!(url, "sending GitHub API request");

        let response = self
            .get(url)
            .send()
            .await
            .map_err(|source| GitHubError::Transport {
                url: url.to_string(),
                source,
            })?;

        let status = response.status();
        if !status.is_success() {
            let rate_limit = is_rate_limit_status(status)
                .then(|| RateLimit::from_headers(response.headers()));
            if let Some(limit) = &rate_limit {
                tracing::warn!(
                    status = status.as_u16(),
                    reset_at = ?limit.reset_at,
                    remaining = ?limit.remaining,
                    "GitHub rate limit hit"
                );
            }
            return Err(GitHubError::Status {
                url: url.to_string(),
                status,
                rate_limit,
            });
        }

        let body = response
            .text()
            .await
            .map_err(|source| GitHubError::Transport {
                url: url.to_string(),
                source,
            })?;

        serde_json::from_str(&body).map_err(|source| GitHubError::Decode {
            url: url.to_string(),
            source,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn test_client() -> GitHubClient {
        GitHubClient::new(GitHubAuth::new("ghp_test"))
    }

    #[test]
    fn test_get_sets_required_headers() {
        let client = test_client().with_user_agent("upvotes-test");
        let request = client
            .get("https://api.github.com/repos/o/r/issues")
            .build()
            .unwrap();

        assert_eq!(request.method(), reqwest::Method::GET);
        let headers = request.headers();
        assert_eq!(headers[AUTHORIZATION], "Bearer ghp_test");
        assert_eq!(headers[USER_AGENT], "upvotes-test");
        assert_eq!(headers[ACCEPT], GITHUB_JSON_MEDIA_TYPE);
    }

    #[test]
    fn test_api_base_trailing_slash_is_trimmed() {
        let client = test_client().with_api_base("http://localhost:8080/");
        assert_eq!(client.api_base(), "http://localhost:8080");
        assert_eq!(
            client.endpoint("/repos/o/r"),
            "http://localhost:8080/repos/o/r"
        );
    }

    #[test]
    fn test_defaults() {
        let client = test_client();
        assert_eq!(client.api_base(), DEFAULT_API_BASE);
        assert_eq!(client.per_page(), 100);
        assert!(client.user_agent().starts_with("upvotes-github/"));
    }

    #[test]
    fn test_per_page_is_clamped() {
        assert_eq!(test_client().with_per_page(0).per_page(), 1);
        assert_eq!(test_client().with_per_page(250).per_page(), 100);
        assert_eq!(test_client().with_per_page(30).per_page(), 30);
    }
}
