//! Rank command implementation
//!
//! Fetches the open issues, gathers each issue's reactions one at a time,
//! and prints the issues ordered by net upvotes.

use super::{Command, CommandContext};
use crate::report::Report;
use crate::scoring::ScoreBoard;
use crate::source::IssueSource;
use anyhow::{Context, Result};
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use colored::*;
use std::fmt::Display;
use upvotes_github::GitHubError;

/// Where progress and diagnostic lines go
///
/// JSON output owns stdout, so progress moves to stderr in that mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Progress {
    Stdout,
    Stderr,
}

impl Progress {
    fn line(self, text: impl Display) {
        match self {
            Progress::Stdout => println!("{}", text),
            Progress::Stderr => eprintln!("{}", text),
        }
    }
}

/// Rank command for printing open issues by net upvotes
pub struct RankCommand<S> {
    pub source: S,
    /// Output in JSON format
    pub json: bool,
    /// Keep only the top N issues
    pub limit: Option<usize>,
}

impl<S> RankCommand<S> {
    pub fn new(source: S) -> Self {
        Self {
            source,
            json: false,
            limit: None,
        }
    }

    fn progress(&self) -> Progress {
        if self.json {
            Progress::Stderr
        } else {
            Progress::Stdout
        }
    }
}

#[async_trait]
impl<S> Command for RankCommand<S>
where
    S: IssueSource + Send + Sync,
{
    async fn execute(&self, context: &CommandContext) -> Result<()> {
        let settings = &context.settings;
        tracing::info!(repository = %settings.full_name(), "ranking open issues");

        let board = collect_scores(&self.source, &settings.owner, &settings.repo, self.progress())
            .await?;
        let report = Report::from_board(&board).limit(self.limit);

        if self.json {
            println!("{}", report.to_json()?);
            return Ok(());
        }

        println!();
        for line in report.lines() {
            println!("{}", line);
        }

        Ok(())
    }
}

/// Fetch issues and reactions from `source` and aggregate their scores
///
/// Issues are processed sequentially. A listing that fails in transport or
/// with an error status counts as empty; a failed issue listing also prints
/// its diagnostics. A listing that cannot be decoded aborts the run.
pub async fn collect_scores<S>(
    source: &S,
    owner: &str,
    repo: &str,
    progress: Progress,
) -> Result<ScoreBoard>
where
    S: IssueSource + Sync + ?Sized,
{
    let issues = match source.open_issues(owner, repo).await {
        Ok(issues) => issues,
        Err(error) if error.counts_as_empty() => {
            for line in issue_failure_diagnostics(&error, Utc::now()) {
                progress.line(line.yellow());
            }
            tracing::warn!(owner, repo, %error, "issue listing failed, ranking nothing");
            Vec::new()
        }
        Err(error) => {
            return Err(error)
                .with_context(|| format!("Failed to fetch open issues for {}/{}", owner, repo));
        }
    };

    progress.line(format!("Fetched {} issues!", issues.len()).green());

    let mut board = ScoreBoard::new();
    for issue in &issues {
        progress.line(format!("Gathering reactions for issue: {}", issue.number));

        let reactions = match source.reactions(owner, repo, issue.number).await {
            Ok(reactions) => reactions,
            Err(error) if error.counts_as_empty() => {
                tracing::debug!(issue = issue.number, %error, "counting issue as having no reactions");
                Vec::new()
            }
            Err(error) => {
                return Err(error).with_context(|| {
                    format!("Failed to read reactions for issue #{}", issue.number)
                });
            }
        };

        board.record(issue, &reactions);
    }

    Ok(board)
}

/// Console lines explaining why the issue listing failed
///
/// Status failures report the HTTP code; rate-limit statuses add when to
/// retry. Transport failures name the underlying error.
pub fn issue_failure_diagnostics(error: &GitHubError, now: DateTime<Utc>) -> Vec<String> {
    match error {
        GitHubError::Status {
            status, rate_limit, ..
        } => {
            let mut lines = vec![format!("Exited with HTTP status code: {}", status.as_u16())];
            if let Some(limit) = rate_limit {
                lines.push(format!("Please try again later {}!", limit.retry_hint(now)));
            }
            lines
        }
        GitHubError::Transport { source, .. } => {
            vec![format!("Failed to reach GitHub: {}", source)]
        }
        _ => Vec::new(),
    }
}
