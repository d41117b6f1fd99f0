// src/config.rs
// =============================================================================
// Run configuration, built once in main() from the command line and then
// passed down explicitly. Nothing in the crate reads global state.
// =============================================================================

use anyhow::{anyhow, Context, Result};
use std::time::Duration;
use url::Url;

pub const DEFAULT_API_URL: &str = "https://api.github.com";
pub const DEFAULT_WEB_URL: &str = "https://github.com";

/// Sent on every request, API calls and link checks alike.
/// GitHub refuses requests without one, and so do many CDNs.
pub const USER_AGENT: &str = concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION"));

/// Where GitHub lives and how to authenticate against it.
#[derive(Debug, Clone)]
pub struct GithubConfig {
    /// REST API root, e.g. https://api.github.com
    pub api_url: Url,
    /// Web UI root used to build browsing URLs, e.g. https://github.com
    pub web_url: Url,
    /// Access token sent as a bearer token on every API call
    pub token: String,
}

impl GithubConfig {
    pub fn new(api_url: &str, web_url: &str, token: impl Into<String>) -> Result<Self> {
        let token = token.into();
        if token.trim().is_empty() {
            return Err(anyhow!("GitHub token is empty"));
        }

        Ok(Self {
            api_url: parse_base(api_url).context("invalid --api-url")?,
            web_url: parse_base(web_url).context("invalid --web-url")?,
            token,
        })
    }
}

/// Settings for the link checking stage.
#[derive(Debug, Clone, Default)]
pub struct CheckConfig {
    /// Per-link timeout; None keeps reqwest's default (no timeout)
    pub timeout: Option<Duration>,
}

// Parses a base URL and makes sure it can have path segments appended
fn parse_base(raw: &str) -> Result<Url> {
    let url = Url::parse(raw).with_context(|| format!("'{}' is not a valid URL", raw))?;
    if url.cannot_be_a_base() {
        return Err(anyhow!("'{}' cannot be used as a base URL", raw));
    }
    Ok(url)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_parse() {
        let config = GithubConfig::new(DEFAULT_API_URL, DEFAULT_WEB_URL, "abc").unwrap();
        assert_eq!(config.api_url.as_str(), "https://api.github.com/");
        assert_eq!(config.web_url.host_str(), Some("github.com"));
    }

    #[test]
    fn test_rejects_empty_token() {
        assert!(GithubConfig::new(DEFAULT_API_URL, DEFAULT_WEB_URL, "  ").is_err());
    }

    #[test]
    fn test_rejects_non_base_url() {
        assert!(GithubConfig::new("mailto:someone@example.com", DEFAULT_WEB_URL, "t").is_err());
        assert!(GithubConfig::new(DEFAULT_API_URL, "not a url", "t").is_err());
    }
}
