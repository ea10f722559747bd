pub mod fetcher;
pub mod parser;
pub mod types;

use std::time::Duration;

use tracing::{debug, info};

use crate::core::query;
use fetcher::{build_client, fetch_search_feed, FetchError};
use parser::{parse_search_feed, FeedParseError};
use types::NewsEntry;

#[derive(Debug, thiserror::Error)]
pub enum SearchError {
    #[error(transparent)]
    Fetch(#[from] FetchError),
    #[error(transparent)]
    Parse(#[from] FeedParseError),
}

/// Fetches and normalizes search-feed entries for a keyword.
///
/// Each call to [`NewsService::search`] is an independent fetch: no caching
/// between calls, no deduplication across queries, no shared state beyond the
/// connection pool inside the HTTP client.
#[derive(Debug, Clone)]
pub struct NewsService {
    client: reqwest::Client,
    base_url: String,
}

impl NewsService {
    pub fn new(timeout: Duration) -> Result<Self, reqwest::Error> {
        Ok(Self {
            client: build_client(timeout)?,
            base_url: query::SEARCH_FEED_BASE.to_string(),
        })
    }

    /// Point the service at a different feed endpoint. Used by tests to
    /// substitute a local fixture server.
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    /// Fetch the search feed for `keyword` and normalize every entry,
    /// preserving feed order.
    pub async fn search(&self, keyword: &str) -> Result<Vec<NewsEntry>, SearchError> {
        let url = query::build_search_url(&self.base_url, keyword);
        debug!(%url, "fetching search feed");

        let body = fetch_search_feed(&self.client, &url).await?;
        let entries: Vec<NewsEntry> = parse_search_feed(&body)?
            .into_iter()
            .map(NewsEntry::from_raw)
            .collect();

        info!(keyword, count = entries.len(), "search feed fetched");
        Ok(entries)
    }
}

#[derive(Debug, Clone, Default)]
pub struct FeedService;

impl FeedService {
    pub fn name(&self) -> &'static str {
        "feed"
    }

    pub fn status(&self) -> &'static str {
        "ready"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::extract::Query as AxumQuery;
    use axum::http::StatusCode;
    use axum::response::Response;
    use axum::routing::get;
    use axum::Router;
    use serde::Deserialize;

    #[derive(Debug, Deserialize)]
    struct FeedParams {
        q: String,
        hl: String,
        gl: String,
        ceid: String,
    }

    async fn feed_handler(AxumQuery(params): AxumQuery<FeedParams>) -> Response {
        assert_eq!(params.hl, "ja");
        assert_eq!(params.gl, "JP");
        assert_eq!(params.ceid, "JP:ja");

        if params.q == "誰も書かない話題" {
            let empty = r#"<?xml version="1.0" encoding="UTF-8"?>
<rss version="2.0"><channel><title>Google ニュース</title></channel></rss>"#;
            return Response::new(axum::body::Body::from(empty.to_string()));
        }

        Response::new(axum::body::Body::from(
            include_str!("../../../fixtures/search-sample.rss.xml").to_string(),
        ))
    }

    async fn broken_handler() -> Response {
        let mut response = Response::new(axum::body::Body::from("oops".to_string()));
        *response.status_mut() = StatusCode::INTERNAL_SERVER_ERROR;
        response
    }

    async fn spawn_test_server(app: Router) -> (String, tokio::task::JoinHandle<()>) {
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
            .await
            .expect("listener should bind");
        let address = listener.local_addr().expect("local addr should exist");
        let join_handle = tokio::spawn(async move {
            axum::serve(listener, app).await.expect("server should run");
        });
        (format!("http://{address}"), join_handle)
    }

    fn service_for(base: &str) -> NewsService {
        NewsService::new(Duration::from_secs(5))
            .expect("client should build")
            .with_base_url(base)
    }

    #[tokio::test]
    async fn search_normalizes_entries_in_feed_order() {
        let app = Router::new().route("/", get(feed_handler));
        let (base, server_task) = spawn_test_server(app).await;

        let entries = service_for(&base)
            .search("人工知能")
            .await
            .expect("search should succeed");

        assert_eq!(entries.len(), 4);
        assert_eq!(entries[0].title, "生成AIが変える報道の現場");
        assert_eq!(entries[0].published_display, "2026/02/13 10:00");
        assert!(entries[0].summary_display.ends_with("..."));
        // Non-pattern date passes through, missing date gets the placeholder.
        assert_eq!(entries[2].published_display, "2026-02-11T09:00:00Z");
        assert_eq!(entries[3].published_display, "日付不明");
        assert_eq!(entries[3].summary_display, "...");

        server_task.abort();
    }

    #[tokio::test]
    async fn zero_matches_is_an_empty_ok() {
        let app = Router::new().route("/", get(feed_handler));
        let (base, server_task) = spawn_test_server(app).await;

        let entries = service_for(&base)
            .search("誰も書かない話題")
            .await
            .expect("empty channel should still be ok");
        assert!(entries.is_empty());

        server_task.abort();
    }

    #[tokio::test]
    async fn upstream_failure_is_a_search_error() {
        let app = Router::new().route("/", get(broken_handler));
        let (base, server_task) = spawn_test_server(app).await;

        let error = service_for(&base)
            .search("人工知能")
            .await
            .expect_err("500 must surface as an error");
        assert!(matches!(error, SearchError::Fetch(FetchError::HttpStatus(500))));

        server_task.abort();
    }
}
