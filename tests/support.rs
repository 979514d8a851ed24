//! Common test support utilities and fixtures
//!
//! [`FakeSource`] stands in for GitHub so the rank flow can be driven without
//! a network.

#![allow(dead_code)]

use async_trait::async_trait;
use chrono::{TimeDelta, Utc};
use std::collections::HashMap;
use std::sync::Mutex;
use upvotes::IssueSource;
use upvotes::config::{Settings, SettingsBuilder};
use upvotes_github::{GitHubError, Issue, RateLimit, Reaction, StatusCode};

/// A failure the fake can reproduce on demand
#[derive(Debug, Clone, Copy)]
pub enum Failure {
    Status(u16),
    RateLimited { reset_in_secs: Option<i64> },
    Transport,
    Decode,
}

impl Failure {
    pub fn to_error(self, url: &str) -> GitHubError {
        let url = url.to_string();
        match self {
            Failure::Status(code) => GitHubError::Status {
                url,
                status: StatusCode::from_u16(code).expect("valid status code"),
                rate_limit: None,
            },
            Failure::RateLimited { reset_in_secs } => GitHubError::Status {
                url,
                status: StatusCode::FORBIDDEN,
                rate_limit: Some(RateLimit {
                    reset_at: reset_in_secs.map(|secs| Utc::now() + TimeDelta::seconds(secs)),
                    remaining: Some(0),
                }),
            },
            Failure::Transport => GitHubError::Transport {
                url,
                source: reqwest::Client::new()
                    .get("not a url")
                    .build()
                    .expect_err("invalid url must fail to build"),
            },
            Failure::Decode => GitHubError::Decode {
                url,
                source: serde_json::from_str::<Vec<Reaction>>("{").expect_err("truncated json"),
            },
        }
    }
}

/// In-memory issue source recording every call it receives
pub struct FakeSource {
    issues: Result<Vec<Issue>, Failure>,
    reactions: HashMap<u64, Result<Vec<Reaction>, Failure>>,
    calls: Mutex<Vec<String>>,
}

impl FakeSource {
    pub fn with_issues(issues: Vec<Issue>) -> Self {
        Self {
            issues: Ok(issues),
            reactions: HashMap::new(),
            calls: Mutex::new(Vec::new()),
        }
    }

    pub fn failing_issues(failure: Failure) -> Self {
        Self {
            issues: Err(failure),
            reactions: HashMap::new(),
            calls: Mutex::new(Vec::new()),
        }
    }

    pub fn reactions(mut self, issue_number: u64, contents: &[&str]) -> Self {
        let reactions = contents.iter().map(|content| Reaction::new(*content)).collect();
        self.reactions.insert(issue_number, Ok(reactions));
        self
    }

    pub fn failing_reactions(mut self, issue_number: u64, failure: Failure) -> Self {
        self.reactions.insert(issue_number, Err(failure));
        self
    }

    /// Calls received so far, e.g. `issues o/r` or `reactions o/r#10`
    pub fn calls(&self) -> Vec<String> {
        self.calls.lock().unwrap().clone()
    }
}

#[async_trait]
impl IssueSource for FakeSource {
    async fn open_issues(&self, owner: &str, repo: &str) -> Result<Vec<Issue>, GitHubError> {
        self.calls
            .lock()
            .unwrap()
            .push(format!("issues {}/{}", owner, repo));
        match &self.issues {
            Ok(issues) => Ok(issues.clone()),
            Err(failure) => Err(failure.to_error("fake://issues")),
        }
    }

    async fn reactions(
        &self,
        owner: &str,
        repo: &str,
        issue_number: u64,
    ) -> Result<Vec<Reaction>, GitHubError> {
        self.calls
            .lock()
            .unwrap()
            .push(format!("reactions {}/{}#{}", owner, repo, issue_number));
        match self.reactions.get(&issue_number) {
            Some(Ok(reactions)) => Ok(reactions.clone()),
            Some(Err(failure)) => Err(failure.to_error("fake://reactions")),
            None => Ok(Vec::new()),
        }
    }
}

pub fn issue(number: u64) -> Issue {
    Issue::new(number, format!("Issue {}", number))
}

pub fn test_settings() -> Settings {
    SettingsBuilder::new()
        .with_owner(Some("octo".to_string()))
        .with_repo(Some("widgets".to_string()))
        .build()
        .expect("valid test settings")
}
