//! Error types for the search module.
//!
//! These cover a single page fetch and never escape the client: a failed
//! fetch is logged and degrades to an empty page so pagination stops cleanly.

use thiserror::Error;

/// Errors that can occur while fetching one result page.
#[derive(Debug, Error)]
pub enum SearchError {
    /// Network-level error (DNS resolution, connection refused, TLS errors, etc.)
    #[error("network error querying {url}: {source}")]
    Network {
        /// The endpoint that failed.
        url: String,
        /// The underlying network error.
        #[source]
        source: reqwest::Error,
    },

    /// Request timed out before completion.
    #[error("timeout querying {url}")]
    Timeout {
        /// The endpoint that timed out.
        url: String,
    },

    /// HTTP error response (4xx client errors, 5xx server errors).
    #[error("HTTP {status} querying {url}")]
    HttpStatus {
        /// The endpoint that returned an error status.
        url: String,
        /// The HTTP status code.
        status: u16,
    },

    /// The response body could not be read.
    #[error("failed reading response body from {url}: {source}")]
    Body {
        /// The endpoint whose body read failed.
        url: String,
        /// The underlying read error.
        #[source]
        source: reqwest::Error,
    },
}

impl SearchError {
    /// Creates a network error from a reqwest error.
    pub fn network(url: impl Into<String>, source: reqwest::Error) -> Self {
        Self::Network {
            url: url.into(),
            source,
        }
    }

    /// Creates a timeout error.
    pub fn timeout(url: impl Into<String>) -> Self {
        Self::Timeout { url: url.into() }
    }

    /// Creates an HTTP status error.
    pub fn http_status(url: impl Into<String>, status: u16) -> Self {
        Self::HttpStatus {
            url: url.into(),
            status,
        }
    }

    /// Creates a body-read error.
    pub fn body(url: impl Into<String>, source: reqwest::Error) -> Self {
        Self::Body {
            url: url.into(),
            source,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_timeout_display() {
        let error = SearchError::timeout("https://example.com/search");
        assert!(error.to_string().contains("timeout"));
        assert!(error.to_string().contains("https://example.com/search"));
    }

    #[test]
    fn test_http_status_display() {
        let error = SearchError::http_status("https://example.com/search", 503);
        let msg = error.to_string();
        assert!(msg.contains("503"), "Expected '503' in: {msg}");
        assert!(
            msg.contains("https://example.com/search"),
            "Expected URL in: {msg}"
        );
    }
}
