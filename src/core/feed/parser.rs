use super::types::RawEntry;

/// Title used when a feed item has none. Entries are never excluded for
/// missing fields, only defaulted.
pub const UNTITLED_ENTRY: &str = "Untitled Entry";

#[derive(Debug, thiserror::Error)]
pub enum FeedParseError {
    #[error("feed payload is empty")]
    EmptyPayload,
    #[error("rss feed parse error: {0}")]
    Rss(#[from] rss::Error),
}

/// Parse a search-feed response body into raw entries, preserving feed order.
///
/// The search feed is RSS 2.0. Date and summary text are kept verbatim; the
/// display normalization is defined over the raw strings, so nothing is
/// pre-parsed here.
pub fn parse_search_feed(raw: &[u8]) -> Result<Vec<RawEntry>, FeedParseError> {
    let trimmed = trim_leading_ascii_whitespace(raw);
    if trimmed.is_empty() {
        return Err(FeedParseError::EmptyPayload);
    }
    let channel = rss::Channel::read_from(trimmed)?;
    Ok(channel.items().iter().map(entry_from_item).collect())
}

fn entry_from_item(item: &rss::Item) -> RawEntry {
    RawEntry {
        title: item
            .title()
            .map(str::to_string)
            .unwrap_or_else(|| UNTITLED_ENTRY.to_string()),
        link: item.link().unwrap_or_default().to_string(),
        published: item.pub_date().map(str::to_string),
        summary: item.description().map(str::to_string),
    }
}

fn trim_leading_ascii_whitespace(raw: &[u8]) -> &[u8] {
    let mut index = 0;
    while index < raw.len() && raw[index].is_ascii_whitespace() {
        index += 1;
    }
    &raw[index..]
}
