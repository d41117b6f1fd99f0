// src/github/fetch.rs
// =============================================================================
// Downloads Markdown files from GitHub, already rendered to HTML.
//
// The contents API returns a file rendered the same way github.com shows it
// when we send `Accept: application/vnd.github.v3.html`. That saves us from
// parsing Markdown ourselves: links come out as ordinary <a href> tags.
//
// Every file is requested at once. If any single request fails the whole
// fetch fails; there are no partial results.
// =============================================================================

use futures::future::try_join_all;

use super::client::{GithubClient, HTML_MEDIA_TYPE};
use crate::error::ApiError;

/// One Markdown file and its rendered HTML body
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MarkdownFile {
    /// Repository-relative path, e.g. "docs/guide.md"
    pub path: String,
    /// The HTML GitHub rendered for it
    pub contents: String,
}

// Fetches the rendered HTML of every path, keeping the order of `paths`
//
// Parameters:
//   github: the API client
//   owner, name: the repository
//   git_ref: branch the paths were listed from
//   paths: repository-relative Markdown paths
pub async fn fetch_rendered_content(
    github: &GithubClient,
    owner: &str,
    name: &str,
    git_ref: &str,
    paths: Vec<String>,
) -> Result<Vec<MarkdownFile>, ApiError> {
    // try_join_all polls all futures together and stops at the first error.
    // Results come back in the same order as the input futures.
    try_join_all(
        paths
            .into_iter()
            .map(|path| fetch_file(github, owner, name, git_ref, path)),
    )
    .await
}

async fn fetch_file(
    github: &GithubClient,
    owner: &str,
    name: &str,
    git_ref: &str,
    path: String,
) -> Result<MarkdownFile, ApiError> {
    let segments = ["repos", owner, name, "contents"]
        .into_iter()
        .chain(path.split('/'));
    let mut url = github.endpoint(segments)?;
    url.query_pairs_mut().append_pair("ref", git_ref);

    let response = github.get(url.clone(), HTML_MEDIA_TYPE).await?;
    let contents = response.text().await.map_err(|source| {
        tracing::error!(%url, error = %source, "could not read rendered file");
        ApiError::Decode {
            url: url.to_string(),
            source,
        }
    })?;

    tracing::debug!(path = %path, bytes = contents.len(), "fetched rendered file");
    Ok(MarkdownFile { path, contents })
}

// -----------------------------------------------------------------------------
// BEGINNER NOTES:
//
// 1. Why split the path on '/'?
//    - Url::path_segments_mut() percent-encodes each segment
//    - Passing "docs/a b.md" whole would encode the slash as %2F
//    - Splitting keeps the slashes and still encodes the space
//
// 2. Why is `path` a String and not &str?
//    - It moves into the MarkdownFile we return, so we need to own it
// -----------------------------------------------------------------------------
