// src/checker/html.rs
// =============================================================================
// This module extracts links from the HTML GitHub rendered for each file.
//
// We use the `scraper` crate which:
// - Parses HTML into a DOM (Document Object Model)
// - Supports CSS selectors for finding elements
// - Is built on html5ever, which never rejects input: broken markup is
//   repaired the way a browser would, so a badly formed file just yields
//   whatever anchors survive parsing
//
// Which links we keep:
// - every <a> with a non-empty href, in document order
// - except same-page anchors ("#section") and email links ("mailto:...")
//
// How relative links are rewritten:
// - "./x" found in "docs/guide.md" becomes "{base}/docs/x"
// - everything else is kept exactly as written
// =============================================================================

use scraper::{Html, Selector};
use serde::Serialize;

use crate::github::MarkdownFile;

/// All outbound links found in one file
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FileLinks {
    pub file: String,
    pub links: Vec<String>,
}

// Extracts the links of every file
//
// Parameters:
//   base_url: browsing URL of the branch, e.g. https://github.com/o/r/blob/master
//   files: rendered Markdown files
//
// Returns: one FileLinks per file, same order as `files`
pub fn extract_links(base_url: &str, files: &[MarkdownFile]) -> Vec<FileLinks> {
    files
        .iter()
        .map(|file| FileLinks {
            file: file.path.clone(),
            links: extract_html_links(&file.contents, base_url, &file.path),
        })
        .collect()
}

// Extracts all links from one HTML document
//
// Example:
//   html = "<a href='./x.md'>X</a><a href='#top'>Top</a>"
//   base_url = "https://github.com/o/r/blob/master"
//   source_path = "docs/guide.md"
//   result = ["https://github.com/o/r/blob/master/docs/x.md"]
pub fn extract_html_links(html: &str, base_url: &str, source_path: &str) -> Vec<String> {
    let document = Html::parse_document(html);

    // The selector is a constant, so parsing it cannot fail
    let selector = Selector::parse("a").unwrap();

    document
        .select(&selector)
        .filter_map(|element| element.value().attr("href"))
        .filter(|href| is_checkable_link(href))
        .map(|href| normalize_link(base_url, source_path, href))
        .collect()
}

// Skips empty targets, same-page anchors and email links
fn is_checkable_link(href: &str) -> bool {
    !href.is_empty() && !href.starts_with('#') && !href.starts_with("mailto:")
}

// Rewrites "./x" relative to the directory of the source file.
//
// The directory is the source path minus its last segment, so a file at the
// repository root has an empty directory and "./x" becomes "{base}//x".
fn normalize_link(base_url: &str, source_path: &str, href: &str) -> String {
    match href.strip_prefix("./") {
        Some(rest) => format!("{}/{}/{}", base_url, parent_dir(source_path), rest),
        None => href.to_string(),
    }
}

fn parent_dir(path: &str) -> &str {
    match path.rfind('/') {
        Some(idx) => &path[..idx],
        None => "",
    }
}
