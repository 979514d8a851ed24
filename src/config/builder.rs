//! Settings resolution
//!
//! Settings are layered: built-in defaults, then the config file, then CLI
//! flags. Each `with_*` call only overrides when given a value, so the order
//! of calls is the order of precedence.

use super::Config;
use super::validation;
use crate::constants::github;
use anyhow::Result;

/// Fully resolved settings for a ranking run
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    pub owner: String,
    pub repo: String,
    pub per_page: u8,
    pub api_base: String,
    pub user_agent: String,
}

impl Settings {
    /// `owner/repo` for display
    pub fn full_name(&self) -> String {
        format!("{}/{}", self.owner, self.repo)
    }
}

/// Builder layering defaults, config file values and CLI overrides
pub struct SettingsBuilder {
    settings: Settings,
}

impl SettingsBuilder {
    /// Start from the built-in defaults
    pub fn new() -> Self {
        Self {
            settings: Settings {
                owner: github::DEFAULT_OWNER.to_string(),
                repo: github::DEFAULT_REPO.to_string(),
                per_page: github::DEFAULT_PER_PAGE,
                api_base: github::API_BASE.to_string(),
                user_agent: github::DEFAULT_USER_AGENT.to_string(),
            },
        }
    }

    /// Apply every value present in the config file
    pub fn with_config(self, config: &Config) -> Self {
        self.with_owner(config.owner.clone())
            .with_repo(config.repo.clone())
            .with_per_page(config.per_page)
            .with_api_base(config.api_base.clone())
            .with_user_agent(config.user_agent.clone())
    }

    pub fn with_owner(mut self, owner: Option<String>) -> Self {
        if let Some(owner) = owner {
            self.settings.owner = owner;
        }
        self
    }

    pub fn with_repo(mut self, repo: Option<String>) -> Self {
        if let Some(repo) = repo {
            self.settings.repo = repo;
        }
        self
    }

    /// Set owner and repository from a GitHub URL
    pub fn with_repo_url(self, url: Option<&str>) -> Result<Self> {
        match url {
            Some(url) => {
                let (owner, repo) = upvotes_github::parse_github_url(url)?;
                Ok(self.with_owner(Some(owner)).with_repo(Some(repo)))
            }
            None => Ok(self),
        }
    }

    pub fn with_per_page(mut self, per_page: Option<u8>) -> Self {
        if let Some(per_page) = per_page {
            self.settings.per_page = per_page;
        }
        self
    }

    pub fn with_api_base(mut self, api_base: Option<String>) -> Self {
        if let Some(api_base) = api_base {
            self.settings.api_base = api_base;
        }
        self
    }

    pub fn with_user_agent(mut self, user_agent: Option<String>) -> Self {
        if let Some(user_agent) = user_agent {
            self.settings.user_agent = user_agent;
        }
        self
    }

    /// Return the layered settings without validating them
    pub fn resolve(self) -> Settings {
        self.settings
    }

    /// Return the layered settings, failing if any value is invalid
    pub fn build(self) -> Result<Settings> {
        let settings = self.resolve();
        validation::validate_settings(&settings).map_err(validation::validation_errors_to_anyhow)?;
        Ok(settings)
    }
}

impl Default for SettingsBuilder {
    fn default() -> Self {
        Self::new()
    }
}
