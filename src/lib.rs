// src/lib.rs
// =============================================================================
// repo-link-guardian finds broken links in a GitHub repository's Markdown.
//
// The binary (src/main.rs) parses arguments and prints; everything else
// lives here so it can be tested without spawning the program.
// =============================================================================

pub mod checker;
pub mod config;
pub mod error;
pub mod github;
pub mod pipeline;
pub mod report;

pub use checker::{FileLinkReport, LinkChecker, LinkResult, LinkStatus};
pub use config::{CheckConfig, GithubConfig};
pub use error::ApiError;
pub use github::RepoCoordinate;
pub use report::OutputFormat;
