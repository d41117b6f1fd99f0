// src/github/mod.rs
// =============================================================================
// This module handles everything that talks to the GitHub API.
//
// - repo: parsing "owner/repo" and building browsing URLs
// - client: authenticated HTTP client with per-call error logging
// - tree: listing Markdown files via the recursive git trees API
// - fetch: downloading each file rendered as HTML
// =============================================================================

mod client;
mod fetch;
mod repo;
mod tree;

pub use client::GithubClient;
pub use fetch::{fetch_rendered_content, MarkdownFile};
pub use repo::{RepoCoordinate, DEFAULT_BRANCH};
pub use tree::list_markdown_paths;
