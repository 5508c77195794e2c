use chrono::{TimeZone, Utc};
use regex::Regex;

use crate::stub::{StubSource, UnreachableSource};
use tally_common::document::{Document, SectionMarkers};
use tally_common::error::TallyError;
use tally_core::{report, stats};

/*************************************************************
              Full update flow, stubbed network
**************************************************************/

const README: &str = "\
# saim

Some prose above the tally.

<!--START_SECTION:contribs-->
stale body
<!--END_SECTION:contribs-->

## Footer
";

#[tokio::test]
async fn update_flow_writes_totals_and_timestamp() {
    let source = StubSource {
        created_at: Utc.with_ymd_and_hms(2023, 6, 15, 10, 0, 0).unwrap(),
        last_year_total: 321,
        yearly_total: 400,
    };
    let now = Utc.with_ymd_and_hms(2025, 8, 6, 12, 30, 45).unwrap();

    let stats = stats::collect(&source, "octocat", now, None).await.unwrap();
    let body = report::render(&stats);
    let markers = SectionMarkers::for_section("contribs");
    let updated = Document::new(README)
        .replace_section(&markers, &body)
        .unwrap();

    let text = updated.as_str();
    // 2023, 2024 and the capped 2025 window.
    assert!(text.contains("**All time:** 1,200 contributions"));
    assert!(text.contains("**Last 12 months:** 321 contributions"));

    let stamp = Regex::new(r"_Last updated: \d{4}-\d{2}-\d{2} \d{2}:\d{2}:\d{2} UTC_").unwrap();
    assert!(stamp.is_match(text), "no timestamp line in:\n{text}");

    assert!(text.contains("<!--START_SECTION:contribs-->"));
    assert!(text.contains("<!--END_SECTION:contribs-->"));
    assert!(text.starts_with("# saim\n"));
    assert!(text.ends_with("## Footer\n"));
    assert!(!text.contains("stale body"));
}

#[tokio::test]
async fn rerunning_the_flow_leaves_the_document_stable() {
    let source = StubSource {
        created_at: Utc.with_ymd_and_hms(2020, 2, 2, 0, 0, 0).unwrap(),
        last_year_total: 1_234_567,
        yearly_total: 1000,
    };
    let now = Utc.with_ymd_and_hms(2025, 1, 2, 3, 4, 5).unwrap();
    let markers = SectionMarkers::for_section("contribs");

    let stats = stats::collect(&source, "octocat", now, None).await.unwrap();
    let body = report::render(&stats);

    let once = Document::new(README).replace_section(&markers, &body).unwrap();
    let twice = once.replace_section(&markers, &body).unwrap();
    assert_eq!(once, twice);

    // Thousands grouping survives end to end.
    assert!(once.as_str().contains("**Last 12 months:** 1,234,567 contributions"));
}

#[tokio::test]
async fn missing_markers_abort_before_any_output() {
    let source = StubSource {
        created_at: Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap(),
        last_year_total: 1,
        yearly_total: 1,
    };
    let now = Utc.with_ymd_and_hms(2025, 6, 1, 0, 0, 0).unwrap();

    let stats = stats::collect(&source, "octocat", now, None).await.unwrap();
    let body = report::render(&stats);

    let doc = Document::new("# plain readme, no sentinels\n");
    let err = doc
        .replace_section(&SectionMarkers::for_section("contribs"), &body)
        .unwrap_err();
    assert!(matches!(err, TallyError::MarkersNotFound { .. }));
    assert_eq!(doc.as_str(), "# plain readme, no sentinels\n");
}

#[tokio::test]
async fn network_failures_propagate_out_of_the_aggregation() {
    let now = Utc.with_ymd_and_hms(2025, 6, 1, 0, 0, 0).unwrap();
    let err = stats::collect(&UnreachableSource, "octocat", now, None)
        .await
        .unwrap_err();
    assert!(matches!(err, TallyError::Network { .. }));
}
