//! Constants for the search module (endpoint, timeout, identification).

/// Production search endpoint.
pub const DEFAULT_BASE_URL: &str = "https://www.justice.gov/multimedia-search";

/// Fixed per-request timeout ceiling (30 seconds).
pub const REQUEST_TIMEOUT_SECS: u64 = 30;

/// Fixed User-Agent sent with every search request. The endpoint rejects
/// obvious non-browser agents, so this identifies as a browser.
pub const USER_AGENT: &str = "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36";
