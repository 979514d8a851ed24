//! Central constants for the upvotes application

/// Default values for GitHub operations
pub mod github {
    /// Repository owner ranked when nothing else is configured
    pub const DEFAULT_OWNER: &str = "facebook";

    /// Repository ranked when nothing else is configured
    pub const DEFAULT_REPO: &str = "react";

    /// GitHub API base URL
    pub const API_BASE: &str = upvotes_github::DEFAULT_API_BASE;

    /// Default User-Agent header for API requests
    pub const DEFAULT_USER_AGENT: &str = concat!("upvotes/", env!("CARGO_PKG_VERSION"));

    /// Issues fetched in the single page we request
    pub const DEFAULT_PER_PAGE: u8 = upvotes_github::MAX_PER_PAGE;
}

/// Default values for configuration
pub mod config {
    /// Default configuration file name
    pub const DEFAULT_CONFIG_FILE: &str = "upvotes.yaml";
}

/// Logging defaults
pub mod logging {
    /// Filter used when `RUST_LOG` is unset
    pub const DEFAULT_FILTER: &str = "warn";

    /// Filter used with `--verbose`
    pub const VERBOSE_FILTER: &str = "upvotes=debug,upvotes_github=debug";
}
