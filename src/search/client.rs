//! HTTP search client and pagination driver.
//!
//! One client is constructed per process and reused for every page request,
//! taking advantage of connection pooling. All fetching is sequential; the
//! inter-page delay is the only throttling mechanism.

use std::time::Duration;

use reqwest::Client;
use tracing::{debug, info, instrument, warn};

use crate::parser::parse_response;
use crate::record::Record;

use super::constants::{REQUEST_TIMEOUT_SECS, USER_AGENT};
use super::error::SearchError;

/// Client for querying the multimedia search endpoint.
///
/// Configuration (base URL, timeout, User-Agent) is fixed at construction.
#[derive(Debug, Clone)]
pub struct SearchClient {
    client: Client,
    base_url: String,
}

impl SearchClient {
    /// Creates a client for the given endpoint with the fixed 30-second
    /// timeout and browser-style User-Agent.
    ///
    /// # Panics
    ///
    /// Panics if the HTTP client builder fails to build with the static
    /// configuration. This should never happen in practice.
    #[must_use]
    #[allow(clippy::expect_used)]
    pub fn new(base_url: impl Into<String>) -> Self {
        let client = Client::builder()
            .timeout(Duration::from_secs(REQUEST_TIMEOUT_SECS))
            .user_agent(USER_AGENT)
            .gzip(true)
            .build()
            .expect("failed to build HTTP client with static configuration");
        Self {
            client,
            base_url: base_url.into(),
        }
    }

    /// Fetches and parses a single result page.
    ///
    /// Any transport failure (network error, timeout, non-2xx status)
    /// degrades to `([], false)`: it is logged, never propagated, and the
    /// caller sees it as an exhausted result set.
    #[instrument(skip(self))]
    pub async fn search(&self, query: &str, page: u64) -> (Vec<Record>, bool) {
        match self.fetch_page(query, page).await {
            Ok(body) => {
                let (records, has_more) = parse_response(&body, page);
                debug!(count = records.len(), has_more, "page parsed");
                (records, has_more)
            }
            Err(error) => {
                warn!(%error, "page fetch failed");
                (Vec::new(), false)
            }
        }
    }

    async fn fetch_page(&self, query: &str, page: u64) -> Result<String, SearchError> {
        let page_index = page.to_string();
        let response = self
            .client
            .get(&self.base_url)
            .query(&[("keys", query), ("page", page_index.as_str())])
            .send()
            .await
            .map_err(|e| {
                if e.is_timeout() {
                    SearchError::timeout(&self.base_url)
                } else {
                    SearchError::network(&self.base_url, e)
                }
            })?;

        let status = response.status();
        if !status.is_success() {
            return Err(SearchError::http_status(&self.base_url, status.as_u16()));
        }

        response
            .text()
            .await
            .map_err(|e| SearchError::body(&self.base_url, e))
    }

    /// Fetches every available page for `query` and returns the accumulated
    /// records in fetch order.
    ///
    /// Terminates when any of: the cap is reached (checked before each fetch,
    /// so the final page is never truncated mid-page), a page yields zero
    /// records, or the parser reports no further pages. Between continuing
    /// pages the driver sleeps for `delay`; there is no backoff and no retry.
    pub async fn search_all(
        &self,
        query: &str,
        max_results: Option<usize>,
        delay: Duration,
    ) -> Vec<Record> {
        info!(query, max_results, "starting paginated search");

        let mut all_records = Vec::new();
        let mut page: u64 = 0;
        let mut has_next = true;

        while has_next {
            if let Some(max) = max_results
                && all_records.len() >= max
            {
                info!(max, total = all_records.len(), "reached max results limit");
                break;
            }

            let (records, more) = self.search(query, page).await;
            has_next = more;

            if records.is_empty() {
                info!(total = all_records.len(), "no more documents found");
                break;
            }
            all_records.extend(records);

            if has_next {
                page += 1;
                debug!(
                    delay_secs = delay.as_secs_f64(),
                    next_page = page,
                    "waiting before next page"
                );
                tokio::time::sleep(delay).await;
            } else {
                info!(total = all_records.len(), "fetched all documents");
            }
        }

        all_records
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use wiremock::matchers::{header, method, query_param};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    #[tokio::test]
    async fn test_search_sends_fixed_user_agent_and_query_params() {
        let mock_server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(header("User-Agent", USER_AGENT))
            .and(query_param("keys", "flight"))
            .and(query_param("page", "2"))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
                "hits": {"hits": [], "total": {"value": 0}}
            })))
            .expect(1)
            .mount(&mock_server)
            .await;

        let client = SearchClient::new(mock_server.uri());
        let (records, has_more) = client.search("flight", 2).await;
        assert!(records.is_empty());
        assert!(!has_more);
    }

    #[tokio::test]
    async fn test_search_connection_refused_degrades_to_empty() {
        // Port 1 is never listening.
        let client = SearchClient::new("http://127.0.0.1:1/");
        let (records, has_more) = client.search("anything", 0).await;
        assert!(records.is_empty());
        assert!(!has_more);
    }

    #[tokio::test]
    async fn test_search_http_error_status_degrades_to_empty() {
        let mock_server = MockServer::start().await;
        Mock::given(method("GET"))
            .respond_with(ResponseTemplate::new(500))
            .mount(&mock_server)
            .await;

        let client = SearchClient::new(mock_server.uri());
        let (records, has_more) = client.search("", 0).await;
        assert!(records.is_empty());
        assert!(!has_more);
    }
}
