//! # Marker-delimited document sections
//!
//! A [`Document`] is an immutable text blob. [`Document::replace_section`]
//! swaps the text strictly between a start and an end marker for a new
//! body, leaving both markers in place. The transformation is pure;
//! reading and writing the underlying file stays with the caller.

use crate::error::{TallyError, TallyResult};

/// The literal sentinel pair delimiting the mutable section.
///
/// Both markers are matched as fixed text with a plain substring
/// search, so marker strings may contain characters that would be
/// meaningful to a pattern language.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SectionMarkers {
    pub start: String,
    pub end: String,
}

impl SectionMarkers {
    pub fn new(start: impl Into<String>, end: impl Into<String>) -> Self {
        Self {
            start: start.into(),
            end: end.into(),
        }
    }

    /// Comment-style sentinels for a named section: `contribs` becomes
    /// `<!--START_SECTION:contribs-->` / `<!--END_SECTION:contribs-->`.
    pub fn for_section(name: &str) -> Self {
        Self {
            start: format!("<!--START_SECTION:{name}-->"),
            end: format!("<!--END_SECTION:{name}-->"),
        }
    }
}

/// Byte offsets of the text strictly between the markers.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SectionSpan {
    pub inner_start: usize,
    pub inner_end: usize,
}

/// An immutable text document, replaced wholesale on update.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Document {
    text: String,
}

impl Document {
    pub fn new(text: impl Into<String>) -> Self {
        Self { text: text.into() }
    }

    pub fn as_str(&self) -> &str {
        &self.text
    }

    pub fn into_string(self) -> String {
        self.text
    }

    /// Locates the first start marker, then the nearest end marker
    /// after it.
    ///
    /// An end marker ahead of the first start marker is skipped, and
    /// later duplicate pairs are never considered.
    pub fn section_span(&self, markers: &SectionMarkers) -> Option<SectionSpan> {
        let start_at = self.text.find(&markers.start)?;
        let inner_start = start_at + markers.start.len();
        let inner_end = inner_start + self.text[inner_start..].find(&markers.end)?;
        Some(SectionSpan {
            inner_start,
            inner_end,
        })
    }

    /// Returns a new document with the section body replaced by
    /// `"\n" + body + "\n"`, markers intact and in place.
    ///
    /// Re-running with the same body yields the same output: the match
    /// targets the marker text, never the previous body.
    pub fn replace_section(&self, markers: &SectionMarkers, body: &str) -> TallyResult<Document> {
        let span = self
            .section_span(markers)
            .ok_or_else(|| TallyError::MarkersNotFound {
                start: markers.start.clone(),
                end: markers.end.clone(),
            })?;
        tracing::debug!(span.inner_start, span.inner_end, "section located");

        let mut text = String::with_capacity(self.text.len() + body.len() + 2);
        text.push_str(&self.text[..span.inner_start]);
        text.push('\n');
        text.push_str(body);
        text.push('\n');
        text.push_str(&self.text[span.inner_end..]);
        Ok(Document { text })
    }
}

// ╔════════════════════════════════════════════╗
// ║ ████████╗███████╗███████╗████████╗███████╗ ║
// ║ ╚══██╔══╝██╔════╝██╔════╝╚══██╔══╝██╔════╝ ║
// ║    ██║   █████╗  ███████╗   ██║   ███████╗ ║
// ║    ██║   ██╔══╝  ╚════██║   ██║   ╚════██║ ║
// ║    ██║   ███████╗███████║   ██║   ███████║ ║
// ║    ╚═╝   ╚══════╝╚══════╝   ╚═╝   ╚══════╝ ║
// ╚════════════════════════════════════════════╝
