//! Three-format result export: JSON, CSV, and a newline-delimited URL list.

mod error;

pub use error::ExportError;

use std::fs::{self, File};
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

use chrono::Local;
use tracing::info;

use crate::record::Record;

/// Paths of the three files written by [`save_results`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExportPaths {
    /// Full record list as a JSON array.
    pub json: PathBuf,
    /// Tabular export with a header from the first record's field set.
    pub csv: PathBuf,
    /// One URL per line, in accumulation order.
    pub urls: PathBuf,
}

/// Writes `records` as JSON, CSV, and a URL list under `output_dir`.
///
/// The directory is created if missing. Filenames are
/// `{prefix}_{timestamp}.json`, `{prefix}_{timestamp}.csv`, and
/// `{prefix}_{timestamp}_urls.txt` with second-resolution timestamps; two
/// exports within the same second overwrite each other (accepted limitation).
/// An empty record list still produces three valid files.
///
/// # Errors
///
/// Returns `ExportError` on any filesystem or serialization failure, and
/// when a record's field set differs from the first record's (the CSV
/// header contract). Failures here terminate the run.
pub fn save_results(
    records: &[Record],
    prefix: &str,
    output_dir: &Path,
) -> Result<ExportPaths, ExportError> {
    fs::create_dir_all(output_dir).map_err(|e| ExportError::io(output_dir, e))?;

    let timestamp = Local::now().format("%Y%m%d_%H%M%S").to_string();

    let json = output_dir.join(format!("{prefix}_{timestamp}.json"));
    write_json(records, &json)?;
    info!(path = %json.display(), "saved JSON");

    let csv = output_dir.join(format!("{prefix}_{timestamp}.csv"));
    write_csv(records, &csv)?;
    info!(path = %csv.display(), "saved CSV");

    let urls = output_dir.join(format!("{prefix}_{timestamp}_urls.txt"));
    write_url_list(records, &urls)?;
    info!(path = %urls.display(), "saved URL list");

    Ok(ExportPaths { json, csv, urls })
}

/// Pretty-printed JSON array; non-ASCII characters pass through literally.
fn write_json(records: &[Record], path: &Path) -> Result<(), ExportError> {
    let file = File::create(path).map_err(|e| ExportError::io(path, e))?;
    let mut writer = BufWriter::new(file);
    serde_json::to_writer_pretty(&mut writer, records).map_err(|e| ExportError::json(path, e))?;
    writer.flush().map_err(|e| ExportError::io(path, e))
}

/// Header row from the first record's present-field set; every record must
/// present the identical set. An empty list yields an empty, headerless file.
fn write_csv(records: &[Record], path: &Path) -> Result<(), ExportError> {
    let mut writer = csv::Writer::from_path(path).map_err(|e| ExportError::csv(path, e))?;

    if let Some(first) = records.first() {
        let header = first.csv_header();
        writer
            .write_record(&header)
            .map_err(|e| ExportError::csv(path, e))?;

        for (index, record) in records.iter().enumerate() {
            if record.csv_header() != header {
                return Err(ExportError::FieldMismatch { index });
            }
            writer
                .write_record(record.csv_row())
                .map_err(|e| ExportError::csv(path, e))?;
        }
    }

    writer
        .flush()
        .map_err(|e| ExportError::io(path, e))
}

fn write_url_list(records: &[Record], path: &Path) -> Result<(), ExportError> {
    let file = File::create(path).map_err(|e| ExportError::io(path, e))?;
    let mut writer = BufWriter::new(file);
    for record in records {
        writeln!(writer, "{}", record.url).map_err(|e| ExportError::io(path, e))?;
    }
    writer.flush().map_err(|e| ExportError::io(path, e))
}
