//! Validation of resolved settings

use super::Settings;
use std::fmt;

/// Problems found in resolved settings
#[derive(Debug, PartialEq)]
pub enum ConfigValidationError {
    /// Owner or repository name is empty
    EmptyName { field: &'static str },
    /// Owner or repository name contains characters GitHub does not allow
    InvalidName { field: &'static str, value: String },
    /// Page size outside the range the API accepts
    PerPageOutOfRange { value: u8 },
    /// API base is not an http(s) URL
    InvalidApiBase { value: String },
}

impl fmt::Display for ConfigValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigValidationError::EmptyName { field } => write!(f, "{} cannot be empty", field),
            ConfigValidationError::InvalidName { field, value } => {
                write!(f, "Invalid {} '{}': only letters, digits, '-', '_' and '.' are allowed", field, value)
            }
            ConfigValidationError::PerPageOutOfRange { value } => {
                write!(f, "per_page must be between 1 and {}, got {}", upvotes_github::MAX_PER_PAGE, value)
            }
            ConfigValidationError::InvalidApiBase { value } => {
                write!(f, "api_base must start with http:// or https://, got '{}'", value)
            }
        }
    }
}

impl std::error::Error for ConfigValidationError {}

fn validate_name(field: &'static str, value: &str) -> Result<(), ConfigValidationError> {
    if value.trim().is_empty() {
        return Err(ConfigValidationError::EmptyName { field });
    }
    let allowed = |c: char| c.is_ascii_alphanumeric() || matches!(c, '-' | '_' | '.');
    if !value.chars().all(allowed) {
        return Err(ConfigValidationError::InvalidName {
            field,
            value: value.to_string(),
        });
    }
    Ok(())
}

/// Validate resolved settings, collecting every problem found
pub fn validate_settings(settings: &Settings) -> Result<(), Vec<ConfigValidationError>> {
    let mut errors = Vec::new();

    if let Err(error) = validate_name("owner", &settings.owner) {
        errors.push(error);
    }
    if let Err(error) = validate_name("repo", &settings.repo) {
        errors.push(error);
    }
    if settings.per_page == 0 || settings.per_page > upvotes_github::MAX_PER_PAGE {
        errors.push(ConfigValidationError::PerPageOutOfRange {
            value: settings.per_page,
        });
    }
    if !(settings.api_base.starts_with("https://") || settings.api_base.starts_with("http://")) {
        errors.push(ConfigValidationError::InvalidApiBase {
            value: settings.api_base.clone(),
        });
    }

    if errors.is_empty() { Ok(()) } else { Err(errors) }
}

/// Convert collected validation errors to a single anyhow error
pub fn validation_errors_to_anyhow(errors: Vec<ConfigValidationError>) -> anyhow::Error {
    let messages: Vec<String> = errors.iter().map(|error| error.to_string()).collect();
    anyhow::anyhow!("Invalid configuration:\n  {}", messages.join("\n  "))
}
