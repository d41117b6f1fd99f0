// src/main.rs
// =============================================================================
// This is the entry point of our CLI application.
//
// What happens here:
// 1. Parse command-line arguments using clap
// 2. Set up logging (stderr only, stdout is for the report)
// 3. Run the audit pipeline
// 4. Print the report
// 5. Exit with proper code (0 = no broken links, 1 = broken links, 2 = error)
// =============================================================================

mod cli;

use anyhow::Result;
use clap::Parser;
use std::time::Duration;
use tracing_subscriber::EnvFilter;

use cli::Cli;
use repo_link_guardian::{pipeline, report, CheckConfig, GithubConfig, RepoCoordinate};

#[tokio::main]
async fn main() {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let exit_code = match run(cli).await {
        Ok(code) => code,
        Err(e) => {
            // {:?} on anyhow::Error prints the full cause chain
            eprintln!("Error: {:?}", e);
            2
        }
    };

    std::process::exit(exit_code);
}

// RUST_LOG wins over -v when it is set
fn init_logging(verbose: u8) {
    let default_level = match verbose {
        0 => "warn",
        1 => "info",
        _ => "debug",
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

// Returns:
//   Ok(0) = no broken links
//   Ok(1) = broken links found
//   Err = the audit could not run
async fn run(cli: Cli) -> Result<i32> {
    let repo = RepoCoordinate::parse(&cli.repo, Some(&cli.branch))?;
    let github_config = GithubConfig::new(&cli.api_url, &cli.web_url, cli.token)?;
    let check_config = CheckConfig {
        timeout: cli.timeout.map(Duration::from_secs),
    };

    let reports = pipeline::run(&github_config, &check_config, &repo).await?;

    println!("{}", report::render(&reports, cli.format)?);

    if reports.is_empty() {
        Ok(0)
    } else {
        Ok(1)
    }
}
