//! Utility functions for GitHub operations

use crate::error::GitHubError;

/// Parse GitHub URL to extract owner and repository name
///
/// Supports various GitHub URL formats:
/// - SSH: `git@github.com:owner/repo.git`
/// - HTTPS: `https://github.com/owner/repo.git`
/// - Legacy: `github.com/owner/repo`
///
/// # Errors
/// Returns [`GitHubError::InvalidUrl`] if the URL format is not recognized
pub fn parse_github_url(url: &str) -> Result<(String, String), GitHubError> {
    let trimmed = url.trim().trim_end_matches('/').trim_end_matches(".git");

    // git@host:owner/repo
    if let Some(rest) = trimmed.strip_prefix("git@")
        && let Some((_, path)) = rest.split_once(':')
        && let Some(pair) = owner_and_repo(path.split('/').collect())
    {
        return Ok(pair);
    }

    // https://host/owner/repo[/...]
    if let Some(rest) = trimmed
        .strip_prefix("https://")
        .or_else(|| trimmed.strip_prefix("http://"))
    {
        let parts: Vec<&str> = rest.split('/').collect();
        if parts.len() >= 3
            && let Some(pair) = owner_and_repo(parts[1..3].to_vec())
        {
            return Ok(pair);
        }
    }

    // github.com/owner/repo
    if !trimmed.contains("://") && trimmed.contains("github.com") {
        let parts: Vec<&str> = trimmed.split('/').collect();
        if parts.len() >= 3
            && let Some(pair) = owner_and_repo(parts[parts.len() - 2..].to_vec())
        {
            return Ok(pair);
        }
    }

    Err(GitHubError::InvalidUrl(url.to_string()))
}

fn owner_and_repo(parts: Vec<&str>) -> Option<(String, String)> {
    match parts.as_slice() {
        [owner, repo] if !owner.is_empty() && !repo.is_empty() => {
            Some((owner.to_string(), repo.to_string()))
        }
        _ => None,
    }
}
