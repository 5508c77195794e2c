use chrono::{DateTime, Utc};
use tracing::{Instrument, info_span};
use tracing_indicatif::span_ext::IndicatifSpanExt;

use crate::terminal::spinner;
use tally_common::error::TallyResult;
use tally_common::format::group_thousands;
use tally_core::source::ContributionSource;
use tally_core::stats::{self, ContributionStats};

/// Runs the sequential fetch under a spinner span; each aggregated
/// year updates the spinner message.
pub async fn with_spinner(
    source: &dyn ContributionSource,
    login: &str,
    now: DateTime<Utc>,
) -> TallyResult<ContributionStats> {
    let span = info_span!("fetch", indicatif.pb_show = true);
    span.pb_set_style(&spinner::fetch_style());
    span.pb_set_message("querying the contribution calendar");

    let progress = span.clone();
    let on_year = move |year: i32, total: u64| {
        progress.pb_set_message(&format!(
            "aggregated through {year}: {} contributions",
            group_thousands(total)
        ));
    };

    stats::collect(source, login, now, Some(&on_year))
        .instrument(span)
        .await
}
