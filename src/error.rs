// src/error.rs
// =============================================================================
// Error types for talking to the GitHub API.
//
// Link checks never fail (a dead link is a result, not an error), so the only
// errors in this crate come from the two GitHub API calls: listing the tree
// and fetching rendered file contents. Both abort the whole run.
//
// We use `thiserror` to derive Display/Error for a small enum, and the rest
// of the application wraps these in `anyhow::Error` with extra context.
// =============================================================================

use thiserror::Error;

/// Everything that can go wrong during a GitHub API call.
#[derive(Debug, Error)]
pub enum ApiError {
    /// The request never got a response (DNS, connection refused, TLS...)
    #[error("request to {url} failed: {source}")]
    Transport {
        url: String,
        #[source]
        source: reqwest::Error,
    },

    /// GitHub answered with a non-2xx status.
    /// `message` is the `message` field of GitHub's JSON error body, if any.
    #[error("{url} returned HTTP {status}{}", detail(.message))]
    Status {
        url: String,
        status: u16,
        message: Option<String>,
    },

    /// The response body could not be read or decoded
    #[error("could not decode response from {url}: {source}")]
    Decode {
        url: String,
        #[source]
        source: reqwest::Error,
    },

    /// A path or ref could not be turned into a request URL
    #[error("invalid API URL: {0}")]
    InvalidUrl(String),

    #[error("GitHub token contains characters that are not allowed in an HTTP header")]
    InvalidToken,
}

impl ApiError {
    /// The HTTP status GitHub returned, when there was one
    pub fn status(&self) -> Option<u16> {
        match self {
            ApiError::Status { status, .. } => Some(*status),
            _ => None,
        }
    }
}

fn detail(message: &Option<String>) -> String {
    match message {
        Some(m) => format!(": {}", m),
        None => String::new(),
    }
}
