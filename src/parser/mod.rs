//! Dual-format response parsing.
//!
//! The search endpoint usually answers with a structured search-hit envelope,
//! but some deployments (and error pages) serve markup instead. Parsing is
//! two pure functions behind one dispatch: the structured decode is attempted
//! first and any JSON decode failure selects the markup fallback.

mod markup;
mod structured;

use tracing::debug;

use crate::record::Record;

/// Assumed fixed page length. Used only to infer pagination continuation:
/// a page with exactly this many records is taken to mean more pages exist,
/// regardless of the reported total count.
pub const PAGE_SIZE: usize = 10;

/// Parses a raw response body into records plus a more-pages flag.
///
/// Neither path can itself fail: a body that matches nothing simply yields
/// no records and no continuation.
#[must_use]
pub fn parse_response(body: &str, page: u64) -> (Vec<Record>, bool) {
    match structured::parse(body, page) {
        Ok(parsed) => parsed,
        Err(error) => {
            debug!(%error, "structured decode failed, scanning markup");
            markup::parse(body, page)
        }
    }
}
