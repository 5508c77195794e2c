use std::time::{Duration, Instant};

use chrono::Utc;
use colored::*;

use crate::commands::fetch;
use crate::terminal::{colors, print};
use tally_common::config::Credentials;
use tally_common::format::{group_thousands, timestamp};
use tally_common::success;
use tally_github::GithubClient;

pub async fn show(login: Option<String>, quiet: bool) -> anyhow::Result<()> {
    let creds = Credentials::resolve(login)?;
    let client = GithubClient::new(creds.token.clone());

    let start_time = Instant::now();
    let stats = fetch::with_spinner(&client, &creds.login, Utc::now()).await?;

    print::aligned_line("Account", creds.login.clone());
    print::aligned_line(
        "All time",
        format!("{} contributions", group_thousands(stats.all_time))
            .green()
            .bold(),
    );
    print::aligned_line(
        "Last 12 months",
        format!("{} contributions", group_thousands(stats.last_year)).green(),
    );
    print::aligned_line("Collected", timestamp(stats.collected_at));

    show_ends(start_time.elapsed(), quiet);
    Ok(())
}

fn show_ends(total_time: Duration, quiet: bool) {
    let total_time: ColoredString = format!("{:.2}s", total_time.as_secs_f64()).bold().yellow();
    let output = format!("Fetch complete in {total_time}").color(colors::TEXT_DEFAULT);

    if quiet {
        success!("{}", output);
        return;
    }

    print::fat_separator();
    print::centerln(&output.to_string());
}
