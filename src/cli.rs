// src/cli.rs
// =============================================================================
// This file defines our command-line interface using the `clap` crate.
//
// We use the "derive" API which lets us define the CLI structure using
// Rust structs and attributes (the #[...] things).
// =============================================================================

use clap::{ArgAction, Parser};
use repo_link_guardian::config::{DEFAULT_API_URL, DEFAULT_WEB_URL};
use repo_link_guardian::github::DEFAULT_BRANCH;
use repo_link_guardian::OutputFormat;

#[derive(Parser, Debug)]
#[command(
    name = "repo-link-guardian",
    version,
    about = "Find broken links in a GitHub repository's Markdown documentation",
    long_about = "repo-link-guardian lists every Markdown file in a GitHub repository, \
                  asks GitHub to render each one, and checks every link it finds. \
                  Links that do not answer HTTP 200 are reported as JSON on stdout."
)]
pub struct Cli {
    /// Repository to audit: owner/repo or https://github.com/owner/repo
    ///
    /// Example: repo-link-guardian linkedin/css-blocks
    pub repo: String,

    /// Branch (or any git ref) whose docs are checked
    #[arg(short, long, default_value = DEFAULT_BRANCH)]
    pub branch: String,

    /// GitHub access token
    #[arg(long, env = "GITHUB_TOKEN", hide_env_values = true)]
    pub token: String,

    /// GitHub REST API root (change for GitHub Enterprise)
    #[arg(long, default_value = DEFAULT_API_URL)]
    pub api_url: String,

    /// GitHub web root used to build links for "./" paths
    #[arg(long, default_value = DEFAULT_WEB_URL)]
    pub web_url: String,

    /// Give up on a single link after this many seconds (default: wait forever)
    #[arg(long, value_name = "SECS")]
    pub timeout: Option<u64>,

    /// Output format for the report
    #[arg(long, value_enum, default_value_t = OutputFormat::Json)]
    pub format: OutputFormat,

    /// Log progress to stderr (-v for info, -vv for debug)
    #[arg(short, long, action = ArgAction::Count)]
    pub verbose: u8,
}
