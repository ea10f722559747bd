//! Search-feed URL construction.

/// Google News search feed endpoint.
pub const SEARCH_FEED_BASE: &str = "https://news.google.com/rss/search";

/// Locale triple the dashboard is scoped to. Every search returns
/// Japanese-language, Japan-region results regardless of query content.
const LANGUAGE: &str = "ja";
const REGION: &str = "JP";
const EDITION: &str = "JP:ja";

/// Build the search-feed URL for a free-text keyword.
///
/// The keyword is percent-encoded as a URL component; the locale parameters
/// are fixed. Encoding cannot fail for well-formed Unicode input, so this
/// returns a plain `String`.
pub fn build_search_url(base_url: &str, keyword: &str) -> String {
    format!(
        "{base_url}?q={}&hl={LANGUAGE}&gl={REGION}&ceid={EDITION}",
        urlencoding::encode(keyword)
    )
}

/// Blank keywords never reach the fetcher; callers surface a prompt instead.
pub fn is_blank(keyword: &str) -> bool {
    keyword.trim().is_empty()
}

#[derive(Debug, Clone, Default)]
pub struct QueryService;

impl QueryService {
    pub fn name(&self) -> &'static str {
        "query"
    }

    pub fn status(&self) -> &'static str {
        "ready"
    }
}
