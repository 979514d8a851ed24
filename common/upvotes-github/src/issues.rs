//! Open issue listing

use crate::client::GitHubClient;
use crate::error::GitHubError;
use serde::{Deserialize, Serialize};

/// Largest page size the issues endpoint accepts
pub const MAX_PER_PAGE: u8 = 100;

/// Marker GitHub attaches to issue-list entries that are really pull requests
///
/// Only its presence matters, so its fields are not decoded.
#[derive(Deserialize, Serialize, Debug, Clone, Default, PartialEq, Eq)]
pub struct PullRequestRef {}

#[derive(Deserialize, Serialize, Debug, Clone, PartialEq, Eq)]
pub struct Issue {
    pub number: u64,
    #[serde(default)]
    pub title: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pull_request: Option<PullRequestRef>,
}

impl Issue {
    pub fn new(number: u64, title: impl Into<String>) -> Self {
        Self {
            number,
            title: title.into(),
            pull_request: None,
        }
    }

    pub fn is_pull_request(&self) -> bool {
        self.pull_request.is_some()
    }
}

/// Drop pull requests from an issue listing, keeping API order
pub fn without_pull_requests(issues: Vec<Issue>) -> Vec<Issue> {
    issues
        .into_iter()
        .filter(|issue| !issue.is_pull_request())
        .collect()
}

impl GitHubClient {
    /// List the open issues of a repository, excluding pull requests
    ///
    /// Only the first page is fetched; its size is the client's `per_page`.
    ///
    /// # Errors
    /// Returns an error if:
    /// - The request cannot be sent
    /// - The API answers with a non-success status (rate limits included)
    /// - The response cannot be parsed
    pub async fn list_open_issues(&self, owner: &str, repo: &str) -> Result<Vec<Issue>, GitHubError> {
        let url = self.endpoint(&format!(
            "/repos/{}/{}/issues?state=open&per_page={}",
            owner, repo, self.per_page
        ));

        let issues: Vec<Issue> = self.get_json(&url).await?;
        let total = issues.len();
        let issues = without_pull_requests(issues);
        tracing::debug!(
            owner,
            repo,
            total,
            kept = issues.len(),
            "filtered pull requests from issue listing"
        );
        Ok(issues)
    }
}
