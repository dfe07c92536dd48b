//! Structured search-hit envelope decoding.
//!
//! The envelope nests hits under `hits.hits`, each carrying a `_source` field
//! bag with the document metadata. Unknown fields are ignored; missing fields
//! take the documented defaults so a sparse source still yields a record.

use serde::Deserialize;
use tracing::debug;

use crate::record::Record;

use super::PAGE_SIZE;

#[derive(Debug, Deserialize)]
struct Envelope {
    hits: Hits,
}

#[derive(Debug, Deserialize)]
struct Hits {
    #[serde(default)]
    hits: Vec<Hit>,
    #[serde(default)]
    total: Total,
}

#[derive(Debug, Default, Deserialize)]
struct Total {
    #[serde(default)]
    value: u64,
}

#[derive(Debug, Deserialize)]
struct Hit {
    #[serde(rename = "_source", default)]
    source: Source,
}

#[derive(Debug, Default, Deserialize)]
struct Source {
    #[serde(rename = "ORIGIN_FILE_NAME")]
    origin_file_name: Option<String>,
    #[serde(rename = "ORIGIN_FILE_URI")]
    origin_file_uri: Option<String>,
    #[serde(rename = "documentId")]
    document_id: Option<String>,
    #[serde(rename = "fileSize")]
    file_size: Option<u64>,
    #[serde(rename = "totalWords")]
    total_words: Option<u64>,
    #[serde(rename = "startPage")]
    start_page: Option<u64>,
    #[serde(rename = "endPage")]
    end_page: Option<u64>,
    #[serde(rename = "isChunked")]
    is_chunked: Option<bool>,
    #[serde(rename = "indexedAt")]
    indexed_at: Option<String>,
}

/// Decodes a structured response body into records plus a more-pages flag.
///
/// `has_more` is true iff the page holds exactly [`PAGE_SIZE`] records. The
/// authoritative `total.value` is deliberately NOT consulted here; the
/// count-based heuristic is the continuation contract and is only logged.
///
/// # Errors
///
/// Returns the decode error when the body is not a search-hit envelope,
/// which selects the markup fallback in the dispatch.
pub(super) fn parse(body: &str, page: u64) -> Result<(Vec<Record>, bool), serde_json::Error> {
    let envelope: Envelope = serde_json::from_str(body)?;
    let total = envelope.hits.total.value;

    let records: Vec<Record> = envelope
        .hits
        .hits
        .into_iter()
        .map(|hit| record_from_source(hit.source, page))
        .collect();

    let has_more = !records.is_empty() && records.len() == PAGE_SIZE;
    debug!(
        count = records.len(),
        total, has_more, "structured response decoded"
    );
    Ok((records, has_more))
}

fn record_from_source(source: Source, page: u64) -> Record {
    Record {
        title: source
            .origin_file_name
            .clone()
            .unwrap_or_else(|| "Untitled".to_string()),
        file_name: source.origin_file_name.unwrap_or_default(),
        // Only literal spaces are encoded; everything else passes through.
        url: source
            .origin_file_uri
            .unwrap_or_default()
            .replace(' ', "%20"),
        document_id: Some(source.document_id.unwrap_or_default()),
        file_size: Some(source.file_size.unwrap_or(0)),
        total_words: Some(source.total_words.unwrap_or(0)),
        start_page: Some(source.start_page.unwrap_or(0)),
        end_page: Some(source.end_page.unwrap_or(0)),
        is_chunked: Some(source.is_chunked.unwrap_or(false)),
        indexed_at: Some(source.indexed_at.unwrap_or_default()),
        page,
    }
}
