use std::time::Duration;

/// Sent on every feed request; the search feed answers plain clients with
/// a consent interstitial in some regions.
const FEED_USER_AGENT: &str = "Mozilla/5.0 (compatible; newsdash/0.1)";

#[derive(Debug, thiserror::Error)]
pub enum FetchError {
    #[error("request failed: {0}")]
    Request(#[from] reqwest::Error),
    #[error("unexpected status code: {0}")]
    HttpStatus(u16),
}

/// Build the shared HTTP client with an explicit request timeout, so a stalled
/// upstream can never hang a search indefinitely.
pub fn build_client(timeout: Duration) -> Result<reqwest::Client, reqwest::Error> {
    reqwest::Client::builder()
        .timeout(timeout)
        .user_agent(FEED_USER_AGENT)
        .build()
}

/// Fetch a search-feed URL and return the raw response body.
///
/// One attempt only: a failed fetch is not retried, and no conditional
/// headers are sent. Every search is an independent fetch.
pub async fn fetch_search_feed(
    client: &reqwest::Client,
    url: &str,
) -> Result<Vec<u8>, FetchError> {
    let response = client.get(url).send().await?;
    let status = response.status();
    if !status.is_success() {
        return Err(FetchError::HttpStatus(status.as_u16()));
    }
    Ok(response.bytes().await?.to_vec())
}
