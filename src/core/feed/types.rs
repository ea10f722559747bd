use serde::Serialize;

use crate::core::display;

/// One feed item exactly as parsed, raw field text preserved verbatim.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawEntry {
    pub title: String,
    pub link: String,
    pub published: Option<String>,
    pub summary: Option<String>,
}

/// A display-ready news entry. Derived fields are computed once from their
/// raw counterparts and never mutated afterwards.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct NewsEntry {
    pub title: String,
    pub link: String,
    pub published_raw: Option<String>,
    pub published_display: String,
    pub summary_raw: String,
    pub summary_display: String,
}

impl NewsEntry {
    pub fn from_raw(raw: RawEntry) -> Self {
        let published_display = display::published_display(raw.published.as_deref());
        let summary_raw = raw.summary.unwrap_or_default();
        let summary_display = display::summary_display(&summary_raw);
        Self {
            title: raw.title,
            link: raw.link,
            published_raw: raw.published,
            published_display,
            summary_raw,
            summary_display,
        }
    }
}
