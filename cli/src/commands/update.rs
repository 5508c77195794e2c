use std::fs;
use std::path::Path;
use std::time::{Duration, Instant};

use anyhow::Context;
use chrono::Utc;
use colored::*;

use crate::commands::fetch;
use crate::terminal::{colors, print};
use tally_common::config::Credentials;
use tally_common::document::{Document, SectionMarkers};
use tally_common::format::group_thousands;
use tally_common::success;
use tally_core::report;
use tally_core::stats::ContributionStats;
use tally_github::GithubClient;

pub async fn update(
    login: Option<String>,
    readme: &Path,
    section: &str,
    quiet: bool,
) -> anyhow::Result<()> {
    let creds = Credentials::resolve(login)?;
    let client = GithubClient::new(creds.token.clone());

    let start_time = Instant::now();
    let stats = fetch::with_spinner(&client, &creds.login, Utc::now()).await?;

    let markers = SectionMarkers::for_section(section);
    let body = report::render(&stats);

    // Whole-document rewrite: read, transform, write. A missing marker
    // pair fails before anything touches the file.
    let text = fs::read_to_string(readme)
        .with_context(|| format!("failed to read {}", readme.display()))?;
    let updated = Document::new(text).replace_section(&markers, &body)?;
    fs::write(readme, updated.as_str())
        .with_context(|| format!("failed to write {}", readme.display()))?;

    success!("{} updated with contribution counts", readme.display());
    update_ends(&stats, start_time.elapsed(), quiet);
    Ok(())
}

fn update_ends(stats: &ContributionStats, total_time: Duration, quiet: bool) {
    if quiet {
        return;
    }

    let all_time: ColoredString = group_thousands(stats.all_time).bold().green();
    let total_time: ColoredString = format!("{:.2}s", total_time.as_secs_f64()).bold().yellow();
    let output = format!("Tally complete: {all_time} contributions recorded in {total_time}")
        .color(colors::TEXT_DEFAULT);

    print::fat_separator();
    print::centerln(&output.to_string());
}
