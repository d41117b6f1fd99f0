// src/pipeline.rs
// =============================================================================
// The whole audit, start to finish:
//
// 1. List Markdown paths in the repository (GitHub trees API)
// 2. Fetch each file rendered as HTML (GitHub contents API)
// 3. Extract links from the HTML and rewrite "./" links
// 4. Check every link; files and links are checked concurrently
// 5. Keep only failing links, and only files that have some
//
// Each step starts once the previous one has fully finished. Steps 1 and 2
// are fatal on error; step 4 cannot fail.
// =============================================================================

use anyhow::{Context, Result};

use crate::checker::{extract_links, FileLinkReport, LinkChecker};
use crate::config::{CheckConfig, GithubConfig};
use crate::github::{fetch_rendered_content, list_markdown_paths, GithubClient, RepoCoordinate};
use crate::report::failing_files;

// Runs the audit and returns the files that contain broken links
pub async fn run(
    github_config: &GithubConfig,
    check_config: &CheckConfig,
    repo: &RepoCoordinate,
) -> Result<Vec<FileLinkReport>> {
    let github = GithubClient::new(github_config).context("could not create GitHub client")?;
    let checker = LinkChecker::new(check_config).context("could not create link checker")?;

    tracing::info!(%repo, "listing Markdown files");
    let paths = list_markdown_paths(&github, &repo.owner, &repo.name, &repo.branch)
        .await
        .with_context(|| format!("could not list files of {}", repo))?;
    tracing::info!(count = paths.len(), "found Markdown files");

    let files = fetch_rendered_content(&github, &repo.owner, &repo.name, &repo.branch, paths)
        .await
        .with_context(|| format!("could not fetch rendered Markdown of {}", repo))?;

    let base_url = repo.browsing_url(&github_config.web_url);
    let file_links = extract_links(&base_url, &files);
    for file in &file_links {
        tracing::info!(file = %file.file, links = file.links.len(), "extracted links");
    }

    let reports = checker.check_files(file_links).await;
    let failing = failing_files(reports);
    tracing::info!(files = failing.len(), "files with broken links");

    Ok(failing)
}
