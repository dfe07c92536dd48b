//! Search client and pagination driver for the multimedia search endpoint.

mod client;
mod constants;
mod error;

pub use client::SearchClient;
pub use constants::{DEFAULT_BASE_URL, REQUEST_TIMEOUT_SECS, USER_AGENT};
pub use error::SearchError;
