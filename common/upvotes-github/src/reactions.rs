//! Issue reaction listing

use crate::client::GitHubClient;
use crate::error::GitHubError;
use serde::{Deserialize, Serialize};

#[derive(Deserialize, Serialize, Debug, Clone, PartialEq, Eq)]
pub struct Reaction {
    pub content: String,
}

/// The reaction vocabulary GitHub exposes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ReactionKind {
    ThumbsUp,
    ThumbsDown,
    Laugh,
    Confused,
    Heart,
    Hooray,
    Rocket,
    Eyes,
    Other,
}

impl ReactionKind {
    pub fn parse(content: &str) -> Self {
        match content {
            "+1" => ReactionKind::ThumbsUp,
            "-1" => ReactionKind::ThumbsDown,
            "laugh" => ReactionKind::Laugh,
            "confused" => ReactionKind::Confused,
            "heart" => ReactionKind::Heart,
            "hooray" => ReactionKind::Hooray,
            "rocket" => ReactionKind::Rocket,
            "eyes" => ReactionKind::Eyes,
            _ => ReactionKind::Other,
        }
    }

    /// Contribution to an issue's net score
    pub fn score_delta(self) -> i64 {
        match self {
            ReactionKind::ThumbsUp => 1,
            ReactionKind::ThumbsDown => -1,
            _ => 0,
        }
    }
}

impl Reaction {
    pub fn new(content: impl Into<String>) -> Self {
        Self {
            content: content.into(),
        }
    }

    pub fn kind(&self) -> ReactionKind {
        ReactionKind::parse(&self.content)
    }
}

impl GitHubClient {
    /// List the reactions attached to an issue
    ///
    /// Failures are returned as-is; callers decide whether a failed listing
    /// counts as "no reactions" (see [`GitHubError::counts_as_empty`]).
    pub async fn list_issue_reactions(
        &self,
        owner: &str,
        repo: &str,
        issue_number: u64,
    ) -> Result<Vec<Reaction>, GitHubError> {
        let url = self.endpoint(&format!(
            "/repos/{}/{}/issues/{}/reactions",
            owner, repo, issue_number
        ));
        self.get_json(&url).await
    }
}
