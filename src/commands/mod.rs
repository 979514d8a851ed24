//! Command implementations

pub mod base;
pub mod rank;

pub use base::{Command, CommandContext};
pub use rank::{Progress, RankCommand, collect_scores, issue_failure_diagnostics};
