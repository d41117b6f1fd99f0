// src/github/repo.rs
// =============================================================================
// Identifies which repository (and which branch of it) we are auditing.
//
// Users can name a repository in a few ways:
//   - owner/repo
//   - github.com/owner/repo
//   - https://github.com/owner/repo (optionally ending in .git)
// All of them end up as the same RepoCoordinate.
// =============================================================================

use anyhow::{anyhow, Result};
use url::Url;

pub const DEFAULT_BRANCH: &str = "master";

/// A repository on GitHub plus the branch whose docs we check.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RepoCoordinate {
    pub owner: String,
    pub name: String,
    pub branch: String,
}

impl RepoCoordinate {
    pub fn new(owner: impl Into<String>, name: impl Into<String>, branch: Option<&str>) -> Self {
        Self {
            owner: owner.into(),
            name: name.into(),
            branch: branch.unwrap_or(DEFAULT_BRANCH).to_string(),
        }
    }

    // Parses "owner/repo" or a GitHub URL into a coordinate
    //
    // Example:
    //   "https://github.com/rust-lang/rust" -> owner "rust-lang", name "rust"
    pub fn parse(input: &str, branch: Option<&str>) -> Result<Self> {
        let trimmed = input
            .trim()
            .trim_start_matches("https://")
            .trim_start_matches("http://")
            .trim_start_matches("www.");

        // A bare "owner/repo" has no host; anything else must be github.com
        let path = match trimmed.split_once('/') {
            Some((host, rest)) if host.contains('.') => {
                if host != "github.com" {
                    return Err(anyhow!("Not a GitHub repository: {}", input));
                }
                rest
            }
            _ => trimmed,
        };

        let mut parts = path.split('/').filter(|p| !p.is_empty());
        let (owner, name) = match (parts.next(), parts.next()) {
            (Some(owner), Some(name)) => (owner, name.trim_end_matches(".git")),
            _ => return Err(anyhow!("Expected owner/repo, got: {}", input)),
        };

        if name.is_empty() {
            return Err(anyhow!("Expected owner/repo, got: {}", input));
        }

        Ok(Self::new(owner, name, branch))
    }

    // The human-facing URL under which GitHub shows files of this branch:
    //   {web}/{owner}/{name}/blob/{branch}
    pub fn browsing_url(&self, web_url: &Url) -> String {
        format!(
            "{}/{}/{}/blob/{}",
            web_url.as_str().trim_end_matches('/'),
            self.owner,
            self.name,
            self.branch
        )
    }
}

impl std::fmt::Display for RepoCoordinate {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}/{}@{}", self.owner, self.name, self.branch)
    }
}
