//! Normalization of raw feed text into display-ready fields.
//!
//! Both transformations are pure functions of their raw input: the publish
//! date is reformatted when it matches the feed's RFC-822-like pattern and
//! passed through verbatim otherwise, and the summary is truncated to a fixed
//! codepoint prefix with an ellipsis suffix.

use chrono::NaiveDateTime;

/// Shown when a feed item carries no publish date at all.
pub const UNKNOWN_DATE: &str = "日付不明";

/// Appended to every summary, whether or not truncation occurred.
pub const SUMMARY_SUFFIX: &str = "...";

const SUMMARY_PREFIX_CHARS: usize = 100;

/// The feed's date text looks like `Fri, 13 Feb 2026 10:00:00 GMT`; only the
/// first 25 codepoints (through the seconds field) take part in parsing.
const FEED_DATE_PREFIX_CHARS: usize = 25;
const FEED_DATE_FORMAT: &str = "%d %b %Y %H:%M:%S";
const DISPLAY_DATE_FORMAT: &str = "%Y/%m/%d %H:%M";

const WEEKDAY_ABBREVS: [&str; 7] = ["Mon", "Tue", "Wed", "Thu", "Fri", "Sat", "Sun"];

/// Outcome of parsing a raw publish-date string. The fallback is an explicit
/// variant rather than a swallowed error, so callers always see which branch
/// they are on.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PublishedDate {
    Parsed(NaiveDateTime),
    Unparsed(String),
}

impl PublishedDate {
    pub fn display(&self) -> String {
        match self {
            PublishedDate::Parsed(parsed) => parsed.format(DISPLAY_DATE_FORMAT).to_string(),
            PublishedDate::Unparsed(raw) => raw.clone(),
        }
    }
}

/// Parse the raw publish-date text from a feed item.
///
/// The weekday name is matched against the known abbreviations but is not
/// cross-checked against the date; when the two disagree, the date wins.
pub fn parse_published(raw: &str) -> PublishedDate {
    let prefix: String = raw.chars().take(FEED_DATE_PREFIX_CHARS).collect();
    match parse_feed_date(&prefix) {
        Some(parsed) => PublishedDate::Parsed(parsed),
        None => PublishedDate::Unparsed(raw.to_string()),
    }
}

fn parse_feed_date(prefix: &str) -> Option<NaiveDateTime> {
    let (weekday, rest) = prefix.split_once(", ")?;
    if !WEEKDAY_ABBREVS.contains(&weekday) {
        return None;
    }
    NaiveDateTime::parse_from_str(rest, FEED_DATE_FORMAT).ok()
}

/// Display form of an optional raw publish date.
pub fn published_display(raw: Option<&str>) -> String {
    match raw {
        Some(text) => parse_published(text).display(),
        None => UNKNOWN_DATE.to_string(),
    }
}

/// First 100 codepoints of the raw summary plus the ellipsis suffix.
///
/// Truncation is codepoint-based so multi-byte text is never corrupted, but
/// it makes no attempt to respect word or markup-tag boundaries.
pub fn summary_display(raw: &str) -> String {
    let mut prefix: String = raw.chars().take(SUMMARY_PREFIX_CHARS).collect();
    prefix.push_str(SUMMARY_SUFFIX);
    prefix
}

#[derive(Debug, Clone, Default)]
pub struct DisplayService;

impl DisplayService {
    pub fn name(&self) -> &'static str {
        "display"
    }

    pub fn status(&self) -> &'static str {
        "ready"
    }
}
