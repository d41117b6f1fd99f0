// src/checker/mod.rs
// =============================================================================
// This module contains all link checking logic.
//
// Submodules:
// - html: Extracts links from rendered HTML and rewrites "./" links
// - http: Makes HTTP requests to check if links are alive
// =============================================================================

mod html;
mod http;

pub use html::{extract_html_links, extract_links, FileLinks};
pub use http::{FileLinkReport, LinkChecker, LinkResult, LinkStatus};
