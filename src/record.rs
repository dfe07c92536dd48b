//! Flat document record produced by the response parser.

use serde::{Deserialize, Serialize};

/// One normalized document hit.
///
/// Field declaration order is load-bearing: JSON output serializes fields in
/// this order and the CSV header is derived from the same projection. The
/// optional metadata fields are omitted from JSON when absent; records
/// recovered from markup carry only title, file name, URL, and page.
///
/// Records are immutable once produced: the pagination driver only appends
/// them and the exporter only reads them.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Record {
    /// Document title, `"Untitled"` when the source offers none.
    pub title: String,
    /// Original file name as reported by the index.
    pub file_name: String,
    /// Document URL. Never contains a literal space (spaces become `%20`).
    pub url: String,
    /// Index-assigned document identifier.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub document_id: Option<String>,
    /// File size in bytes.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub file_size: Option<u64>,
    /// Word count across the document.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub total_words: Option<u64>,
    /// First page covered by this hit.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub start_page: Option<u64>,
    /// Last page covered by this hit.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub end_page: Option<u64>,
    /// Whether the document was split into chunks by the indexer.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_chunked: Option<bool>,
    /// Indexing timestamp as reported, not reinterpreted.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub indexed_at: Option<String>,
    /// Zero-based result page this record was fetched from.
    pub page: u64,
}

impl Record {
    /// Names of the fields present on this record, in serialization order.
    ///
    /// The CSV writer uses the first record's header as the contract for
    /// every following row.
    pub(crate) fn csv_header(&self) -> Vec<&'static str> {
        let mut fields = vec!["title", "file_name", "url"];
        if self.document_id.is_some() {
            fields.push("document_id");
        }
        if self.file_size.is_some() {
            fields.push("file_size");
        }
        if self.total_words.is_some() {
            fields.push("total_words");
        }
        if self.start_page.is_some() {
            fields.push("start_page");
        }
        if self.end_page.is_some() {
            fields.push("end_page");
        }
        if self.is_chunked.is_some() {
            fields.push("is_chunked");
        }
        if self.indexed_at.is_some() {
            fields.push("indexed_at");
        }
        fields.push("page");
        fields
    }

    /// Cell values aligned with [`csv_header`](Self::csv_header).
    pub(crate) fn csv_row(&self) -> Vec<String> {
        let mut values = vec![
            self.title.clone(),
            self.file_name.clone(),
            self.url.clone(),
        ];
        if let Some(document_id) = &self.document_id {
            values.push(document_id.clone());
        }
        if let Some(file_size) = self.file_size {
            values.push(file_size.to_string());
        }
        if let Some(total_words) = self.total_words {
            values.push(total_words.to_string());
        }
        if let Some(start_page) = self.start_page {
            values.push(start_page.to_string());
        }
        if let Some(end_page) = self.end_page {
            values.push(end_page.to_string());
        }
        if let Some(is_chunked) = self.is_chunked {
            values.push(is_chunked.to_string());
        }
        if let Some(indexed_at) = &self.indexed_at {
            values.push(indexed_at.clone());
        }
        values.push(self.page.to_string());
        values
    }
}
