use std::fs;
use std::path::Path;

use anyhow::Context;

use crate::terminal::print;
use tally_common::document::{Document, SectionMarkers};
use tally_common::error::TallyError;
use tally_common::success;

/// Offline sanity check: does the document carry the marker pair an
/// `update` run would rewrite?
pub fn check(readme: &Path, section: &str) -> anyhow::Result<()> {
    let markers = SectionMarkers::for_section(section);
    let text = fs::read_to_string(readme)
        .with_context(|| format!("failed to read {}", readme.display()))?;
    let doc = Document::new(text);

    match doc.section_span(&markers) {
        Some(span) => {
            print::print_status(format!(
                "section body spans bytes {}..{} of {}",
                span.inner_start,
                span.inner_end,
                readme.display()
            ));
            success!("markers for section '{section}' are in place");
            Ok(())
        }
        None => Err(TallyError::MarkersNotFound {
            start: markers.start,
            end: markers.end,
        }
        .into()),
    }
}
