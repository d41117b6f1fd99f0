// src/report.rs
// =============================================================================
// Turns per-file check results into the final report and prints it.
//
// The report only lists files that still have at least one failing link.
// It can be rendered as pretty JSON (two-space indent, the default) or as
// a table for people reading a terminal.
// =============================================================================

use anyhow::Result;
use clap::ValueEnum;

use crate::checker::FileLinkReport;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum OutputFormat {
    /// JSON array of {file, links} objects
    #[default]
    Json,
    /// Human-readable table with a summary
    Table,
}

// Drops files whose reports ended up empty
pub fn failing_files(reports: Vec<FileLinkReport>) -> Vec<FileLinkReport> {
    reports
        .into_iter()
        .filter(|report| !report.links.is_empty())
        .collect()
}

pub fn render(reports: &[FileLinkReport], format: OutputFormat) -> Result<String> {
    match format {
        OutputFormat::Json => render_json(reports),
        OutputFormat::Table => Ok(render_table(reports)),
    }
}

// serde_json's pretty printer indents with two spaces
pub fn render_json(reports: &[FileLinkReport]) -> Result<String> {
    Ok(serde_json::to_string_pretty(reports)?)
}

pub fn render_table(reports: &[FileLinkReport]) -> String {
    let mut out = String::new();

    if reports.is_empty() {
        out.push_str("✅ No broken links found\n");
        return out;
    }

    for report in reports {
        out.push_str(&format!("📄 {}\n", report.file));
        out.push_str(&format!("   {:<70} {:<15}\n", "URL", "STATUS"));
        out.push_str(&format!("   {}\n", "=".repeat(86)));

        for link in &report.links {
            // Truncate long URLs so the status column stays aligned
            let url_display = if link.url.chars().count() > 67 {
                let head: String = link.url.chars().take(67).collect();
                format!("{}...", head)
            } else {
                link.url.clone()
            };
            out.push_str(&format!("   {:<70} {:<15}\n", url_display, link.status));
        }
        out.push('\n');
    }

    let broken: usize = reports.iter().map(|r| r.links.len()).sum();
    out.push_str("📊 Summary:\n");
    out.push_str(&format!("   ❌ Broken: {}\n", broken));
    out.push_str(&format!("   📋 Files affected: {}\n", reports.len()));
    out
}
