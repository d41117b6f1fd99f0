// src/github/tree.rs
// =============================================================================
// Lists the Markdown files of a repository.
//
// One call to the git trees API with ?recursive=1 returns every path in the
// repository at a given ref. We keep the files ("blob" entries) whose path
// ends in ".md", in the order GitHub sent them.
// =============================================================================

use serde::Deserialize;
use url::Url;

use super::client::{GithubClient, JSON_MEDIA_TYPE};
use crate::error::ApiError;

// One entry of the "tree" array.
// type is "blob" for files, "tree" for directories, "commit" for submodules
#[derive(Debug, Deserialize)]
struct TreeEntry {
    path: String,
    #[serde(rename = "type")]
    kind: String,
}

#[derive(Debug, Deserialize)]
struct TreeResponse {
    tree: Vec<TreeEntry>,
    // GitHub caps recursive listings; when it does, this is true
    #[serde(default)]
    truncated: bool,
}

// Returns the paths of all Markdown files in owner/name at git_ref
//
// Example:
//   tree = [README.md (blob), docs (tree), docs/guide.md (blob), src/lib.rs (blob)]
//   result = ["README.md", "docs/guide.md"]
pub async fn list_markdown_paths(
    github: &GithubClient,
    owner: &str,
    name: &str,
    git_ref: &str,
) -> Result<Vec<String>, ApiError> {
    let url = tree_url(github, owner, name, git_ref)?;
    let response = github.get(url.clone(), JSON_MEDIA_TYPE).await?;
    let listing: TreeResponse = response.json().await.map_err(|source| {
        tracing::error!(%url, error = %source, "could not decode tree listing");
        ApiError::Decode {
            url: url.to_string(),
            source,
        }
    })?;

    if listing.truncated {
        tracing::warn!(owner, name, git_ref, "tree listing was truncated by GitHub; some files are not checked");
    }

    Ok(markdown_paths(listing.tree))
}

// {api}/repos/{owner}/{name}/git/trees/{ref}?recursive=1
//
// A ref like "feature/x" is split on '/' so the slash stays a slash in the
// request path, the same way it appears in browsing URLs.
fn tree_url(github: &GithubClient, owner: &str, name: &str, git_ref: &str) -> Result<Url, ApiError> {
    let segments = ["repos", owner, name, "git", "trees"]
        .into_iter()
        .chain(git_ref.split('/'));
    let mut url = github.endpoint(segments)?;
    url.query_pairs_mut().append_pair("recursive", "1");
    Ok(url)
}

fn markdown_paths(entries: Vec<TreeEntry>) -> Vec<String> {
    entries
        .into_iter()
        .filter(|entry| entry.kind == "blob" && entry.path.ends_with(".md"))
        .map(|entry| entry.path)
        .collect()
}
