//! Import pipeline: file text to decoded rows to domain entities

use std::path::Path;

use crate::exchange::decode::{decode_report, DecodeMode, SkippedRow};
use crate::exchange::error::ExchangeError;
use crate::exchange::mapper::{from_records, FromRecord, ImportBatch};

/// Read the whole import file as text
///
/// A leading byte-order mark is left in place; the decoder strips it.
pub fn read_import_file(path: &Path) -> Result<String, ExchangeError> {
    std::fs::read_to_string(path).map_err(|source| ExchangeError::Read {
        path: path.to_path_buf(),
        source,
    })
}

/// Entities rebuilt from one import, plus the rows that were dropped
#[derive(Debug, Clone)]
pub struct ImportOutcome<T> {
    pub entities: Vec<T>,
    pub skipped: Vec<SkippedRow>,
    pub batch: ImportBatch,
}

impl<T> ImportOutcome<T> {
    /// Data rows seen in the file, kept or not
    pub fn rows_processed(&self) -> usize {
        self.entities.len() + self.skipped.len()
    }
}

/// Decode `text` and rebuild every accepted row as a `T`
pub fn import_text<T: FromRecord>(
    text: &str,
    mode: DecodeMode,
    batch: ImportBatch,
) -> ImportOutcome<T> {
    let report = decode_report(text, mode);
    let entities = from_records(&report.records, &batch);
    tracing::debug!(
        rows = report.rows_seen(),
        kept = entities.len(),
        "import decoded"
    );
    ImportOutcome {
        entities,
        skipped: report.skipped,
        batch,
    }
}

/// Read `path` and import its rows as `T`
pub fn import_file<T: FromRecord>(
    path: &Path,
    mode: DecodeMode,
    batch: ImportBatch,
) -> Result<ImportOutcome<T>, ExchangeError> {
    let text = read_import_file(path)?;
    Ok(import_text(&text, mode, batch))
}
