//! Sequential aggregation of contribution totals.

use chrono::{DateTime, Datelike, Months, TimeZone, Utc};
use tracing::{debug, info};

use tally_common::error::TallyResult;

use crate::source::ContributionSource;

/// Called after each aggregated year with the year and the running
/// all-time total. Drives the CLI spinner.
pub type YearProgress<'a> = &'a (dyn Fn(i32, u64) + Send + Sync);

/// The totals one run collects.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ContributionStats {
    pub all_time: u64,
    pub last_year: u64,
    pub collected_at: DateTime<Utc>,
}

/// Collects the last-12-months and all-time totals for `login`, as of
/// the injected `now`.
///
/// The all-time figure is summed year by year from the account
/// creation year: each window runs `[Jan 1, Jan 1)` in UTC, with the
/// final year capped at `now`. Every call is awaited to completion
/// before the next begins.
pub async fn collect(
    source: &dyn ContributionSource,
    login: &str,
    now: DateTime<Utc>,
    on_year: Option<YearProgress<'_>>,
) -> TallyResult<ContributionStats> {
    // Calendar arithmetic, clamped: a Feb 29 `now` maps to Feb 28.
    let one_year_ago = now.checked_sub_months(Months::new(12)).unwrap_or(now);
    let last_year = source.contributions(login, one_year_ago, now).await?;
    debug!(last_year, "last-12-months total fetched");

    let created_at = source.account_created_at(login).await?;
    info!(login, %created_at, "aggregating from account creation");

    let mut all_time = 0u64;
    for year in created_at.year()..=now.year() {
        let from = year_start(year);
        let to = if year == now.year() {
            now
        } else {
            year_start(year + 1)
        };

        all_time += source.contributions(login, from, to).await?;
        if let Some(report) = on_year {
            report(year, all_time);
        }
    }

    Ok(ContributionStats {
        all_time,
        last_year,
        collected_at: now,
    })
}

/// Midnight UTC on Jan 1, always a valid and unambiguous instant.
fn year_start(year: i32) -> DateTime<Utc> {
    Utc.with_ymd_and_hms(year, 1, 1, 0, 0, 0).unwrap()
}
