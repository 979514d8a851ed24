//! Upvotes - rank a repository's open GitHub issues by net thumbs-up reactions

pub mod commands;
pub mod config;
pub mod constants;
pub mod logging;
pub mod report;
pub mod scoring;
pub mod source;

pub type Result<T> = anyhow::Result<T>;

// Re-export commonly used types
pub use commands::{Command, CommandContext, RankCommand};
pub use config::{Config, Settings, SettingsBuilder};
pub use report::Report;
pub use scoring::{ScoreBoard, ScoreEntry};
pub use source::IssueSource;
