//! Where issues and reactions come from
//!
//! The rank command only talks to an [`IssueSource`]. [`GitHubClient`] is the
//! production implementation; tests substitute in-memory sources.

use async_trait::async_trait;
use upvotes_github::{GitHubClient, GitHubError, Issue, Reaction};

#[async_trait]
pub trait IssueSource {
    /// Open issues of `owner/repo`, pull requests already removed
    async fn open_issues(&self, owner: &str, repo: &str) -> Result<Vec<Issue>, GitHubError>;

    /// Reactions attached to one issue
    async fn reactions(
        &self,
        owner: &str,
        repo: &str,
        issue_number: u64,
    ) -> Result<Vec<Reaction>, GitHubError>;
}

#[async_trait]
impl IssueSource for GitHubClient {
    async fn open_issues(&self, owner: &str, repo: &str) -> Result<Vec<Issue>, GitHubError> {
        self.list_open_issues(owner, repo).await
    }

    async fn reactions(
        &self,
        owner: &str,
        repo: &str,
        issue_number: u64,
    ) -> Result<Vec<Reaction>, GitHubError> {
        self.list_issue_reactions(owner, repo, issue_number).await
    }
}
