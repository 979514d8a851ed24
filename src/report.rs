//! Ranked report rendering

use crate::scoring::{ScoreBoard, ScoreEntry};
use anyhow::Result;
use serde::Serialize;

/// Row shape for `--json` output
#[derive(Serialize, Debug, PartialEq)]
struct RankedIssue<'a> {
    rank: usize,
    number: u64,
    #[serde(skip_serializing_if = "Option::is_none")]
    title: Option<&'a str>,
    score: i64,
}

/// Ranked issues, highest score first
#[derive(Debug, Clone, Default)]
pub struct Report {
    entries: Vec<ScoreEntry>,
}

impl Report {
    /// Entries must already be in rank order
    pub fn new(entries: Vec<ScoreEntry>) -> Self {
        Self { entries }
    }

    pub fn from_board(board: &ScoreBoard) -> Self {
        Self::new(board.ranked())
    }

    /// Keep only the top `limit` entries
    pub fn limit(mut self, limit: Option<usize>) -> Self {
        if let Some(limit) = limit {
            self.entries.truncate(limit);
        }
        self
    }

    pub fn entries(&self) -> &[ScoreEntry] {
        &self.entries
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// One line per entry: `#<rank> – Issue #<number> with <score> upvotes!`
    pub fn lines(&self) -> Vec<String> {
        self.entries
            .iter()
            .enumerate()
            .map(|(index, entry)| {
                format!(
                    "#{} – Issue #{} with {} upvotes!",
                    index + 1,
                    entry.issue_number,
                    entry.score
                )
            })
            .collect()
    }

    pub fn to_json(&self) -> Result<String> {
        let rows: Vec<RankedIssue> = self
            .entries
            .iter()
            .enumerate()
            .map(|(index, entry)| RankedIssue {
                rank: index + 1,
                number: entry.issue_number,
                title: entry.title.as_deref(),
                score: entry.score,
            })
            .collect();
        Ok(serde_json::to_string_pretty(&rows)?)
    }
}
