// src/checker/http.rs
// =============================================================================
// This module checks if URLs are alive by making HTTP requests.
//
// Key functionality:
// - One GET per link, no retries
// - Any HTTP response is recorded as its numeric status code
// - No response at all (DNS failure, refused connection, timeout...) is
//   recorded as a symbolic error code such as "ENOTFOUND"
// - A check never fails: the worst outcome is a result with an error code
//
// Rust concepts:
// - async/await: For concurrent network I/O
// - Untagged enums: To serialize a status as either a number or a string
// - join_all: Run many futures and wait for all of them
// =============================================================================

use futures::future::join_all;
use reqwest::Client;
use serde::Serialize;
use std::error::Error as _;
use std::fmt;

use super::html::FileLinks;
use crate::config::{CheckConfig, USER_AGENT};

// The only status code that counts as a working link
const OK_STATUS: u16 = 200;

/// Outcome of checking one link
///
/// #[serde(untagged)] writes `Code(404)` as `404` and
/// `Transport("ENOTFOUND")` as `"ENOTFOUND"` in JSON.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum LinkStatus {
    /// The server answered with this HTTP status code
    Code(u16),
    /// No response was received; holds a symbolic error code
    Transport(String),
}

impl LinkStatus {
    pub fn is_ok(&self) -> bool {
        matches!(self, LinkStatus::Code(OK_STATUS))
    }
}

impl fmt::Display for LinkStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            // pad() so width/alignment flags work in tables
            LinkStatus::Code(code) => f.pad(&code.to_string()),
            LinkStatus::Transport(code) => f.pad(code),
        }
    }
}

/// A checked link
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LinkResult {
    pub url: String,
    pub status: LinkStatus,
}

/// Failing links of one file
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FileLinkReport {
    pub file: String,
    pub links: Vec<LinkResult>,
}

/// Checks links with a plain HTTP client.
///
/// The client sends a User-Agent like a browser would, but no GitHub
/// credentials: links can point anywhere and must not receive the API token.
#[derive(Debug, Clone)]
pub struct LinkChecker {
    client: Client,
}

impl LinkChecker {
    pub fn new(config: &CheckConfig) -> reqwest::Result<Self> {
        let mut builder = Client::builder().user_agent(USER_AGENT);
        if let Some(timeout) = config.timeout {
            builder = builder.timeout(timeout);
        }
        Ok(Self {
            client: builder.build()?,
        })
    }

    // Checks a single link
    //
    // Returns: LinkResult with the status code or a transport error code
    pub async fn check_link(&self, url: String) -> LinkResult {
        match self.client.get(&url).send().await {
            Ok(response) => {
                let status = LinkStatus::Code(response.status().as_u16());
                tracing::debug!(%url, %status, "link checked");
                LinkResult { url, status }
            }
            Err(error) => {
                let status = LinkStatus::Transport(error_code(&error).to_string());
                tracing::debug!(%url, %status, error = %error, "link unreachable");
                LinkResult { url, status }
            }
        }
    }

    // Checks every link of one file at once and keeps only the failures
    //
    // join_all waits for all checks and never short-circuits; check_link
    // cannot fail, so every link gets a result. Order follows `links`.
    pub async fn check_file(&self, file: FileLinks) -> FileLinkReport {
        let results = join_all(file.links.into_iter().map(|url| self.check_link(url))).await;

        FileLinkReport {
            file: file.file,
            links: results.into_iter().filter(|r| !r.status.is_ok()).collect(),
        }
    }

    // Checks all files concurrently; report order follows `files`
    pub async fn check_files(&self, files: Vec<FileLinks>) -> Vec<FileLinkReport> {
        join_all(files.into_iter().map(|file| self.check_file(file))).await
    }
}

// Turns a reqwest error into a symbolic code
//
// reqwest doesn't expose OS error names, so we look at what kind of error
// it is and at the io::Error buried in its source chain.
fn error_code(error: &reqwest::Error) -> &'static str {
    if error.is_builder() {
        // e.g. "../docs/x.md": not an absolute URL, nothing to connect to
        return "ERR_INVALID_URL";
    }
    if error.is_timeout() {
        return "ETIMEDOUT";
    }
    if error.is_redirect() {
        return "ERR_TOO_MANY_REDIRECTS";
    }

    if let Some(kind) = io_error_kind(error) {
        match kind {
            std::io::ErrorKind::ConnectionRefused => return "ECONNREFUSED",
            std::io::ErrorKind::ConnectionReset => return "ECONNRESET",
            std::io::ErrorKind::ConnectionAborted => return "ECONNABORTED",
            std::io::ErrorKind::TimedOut => return "ETIMEDOUT",
            _ => {}
        }
    }

    // DNS and TLS failures only show up in the message text
    let message = error_chain_text(error);
    if message.contains("dns error") || message.contains("failed to lookup address") {
        "ENOTFOUND"
    } else if message.contains("certificate") || message.contains("tls") {
        "ERR_TLS"
    } else if error.is_connect() {
        "ECONNREFUSED"
    } else {
        "EUNKNOWN"
    }
}

fn io_error_kind(error: &reqwest::Error) -> Option<std::io::ErrorKind> {
    let mut source = error.source();
    while let Some(err) = source {
        if let Some(io) = err.downcast_ref::<std::io::Error>() {
            return Some(io.kind());
        }
        source = err.source();
    }
    None
}

fn error_chain_text(error: &reqwest::Error) -> String {
    let mut text = error.to_string();
    let mut source = error.source();
    while let Some(err) = source {
        text.push_str(": ");
        text.push_str(&err.to_string());
        source = err.source();
    }
    text.to_lowercase()
}

// -----------------------------------------------------------------------------
// BEGINNER NOTES:
//
// 1. Why does check_link return LinkResult and not Result<LinkResult>?
//    - A dead link is exactly what we are looking for, not a failure
//    - Transport errors become a string status, so one unreachable host
//      can't stop the other checks
//
// 2. join_all vs try_join_all
//    - join_all waits for every future and gives back every output
//    - try_join_all (used for GitHub downloads) stops at the first Err
//
// 3. What is #[serde(untagged)]?
//    - serde normally writes the variant name ({"Code": 404})
//    - untagged writes just the inner value (404), which is what the
//      report format needs
// -----------------------------------------------------------------------------
