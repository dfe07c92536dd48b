//! DOJ Multimedia Search Client Library
//!
//! This library queries the public multimedia-search endpoint, paginates
//! through results, normalizes each hit into a flat [`Record`], and exports
//! the aggregate as JSON, CSV, and a plain URL list.
//!
//! # Architecture
//!
//! The library is organized into the following modules:
//! - [`record`] - the flat document record model
//! - [`parser`] - dual-format response parsing (structured JSON with a markup fallback)
//! - [`search`] - HTTP client and pagination driver
//! - [`export`] - three-format result writer

// Clippy lints - strict for library code
#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

pub mod export;
pub mod parser;
pub mod record;
pub mod search;

// Re-export commonly used types
pub use export::{ExportError, ExportPaths, save_results};
pub use parser::{PAGE_SIZE, parse_response};
pub use record::Record;
pub use search::{DEFAULT_BASE_URL, SearchClient, SearchError};
