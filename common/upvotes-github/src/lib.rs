//! GitHub API client library
//!
//! This library provides the GitHub REST operations needed to rank the open
//! issues of a repository by their reactions.
//!
//! ## Modules
//!
//! - [`client`]: Core GitHub client and request construction
//! - [`auth`]: Token resolution and authorization headers
//! - [`issues`]: Open issue listing
//! - [`reactions`]: Per-issue reaction listing
//! - [`rate_limit`]: Rate-limit header parsing and retry hints
//! - [`error`]: Error type shared by all operations
//! - [`util`]: Utility functions for GitHub operations

mod auth;
mod client;
mod error;
mod issues;
mod rate_limit;
mod reactions;
mod util;

// Re-export public API
pub use auth::{GitHubAuth, TOKEN_ENV_VAR};
pub use client::{DEFAULT_API_BASE, GITHUB_JSON_MEDIA_TYPE, GitHubClient};
pub use error::GitHubError;
pub use issues::{Issue, MAX_PER_PAGE, PullRequestRef, without_pull_requests};
pub use rate_limit::{RESET_HEADER, RateLimit, is_rate_limit_status};
pub use reactions::{Reaction, ReactionKind};
pub use reqwest::StatusCode;
pub use util::parse_github_url;
