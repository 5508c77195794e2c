use tally_common::format::{group_thousands, timestamp};

use crate::stats::ContributionStats;

/// Renders the Markdown body that goes between the section markers:
/// both totals, a blank line, and the last-updated stamp.
pub fn render(stats: &ContributionStats) -> String {
    [
        format!(
            "**All time:** {} contributions",
            group_thousands(stats.all_time)
        ),
        format!(
            "**Last 12 months:** {} contributions",
            group_thousands(stats.last_year)
        ),
        format!("\n_Last updated: {}_", timestamp(stats.collected_at)),
    ]
    .join("\n")
}
