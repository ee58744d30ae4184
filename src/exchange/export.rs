//! Export pipeline: records to CSV text to a sink
//!
//! The exporter never touches the filesystem itself. Whatever receives the
//! finished text implements [`Sink`], so the same pipeline can write a file,
//! print to stdout, or collect output in memory.

use std::fs;
use std::io::Write;
use std::path::PathBuf;
use tracing::info;

use crate::exchange::decode::BOM;
use crate::exchange::encode::encode;
use crate::exchange::error::ExchangeError;
use crate::exchange::mapper::{to_records, MapContext, ToRecord};
use crate::exchange::record::Record;

/// Destination for a finished export
pub trait Sink {
    /// Deliver `content` under the suggested `filename`
    fn save(&mut self, content: &str, filename: &str) -> Result<(), ExchangeError>;
}

impl<S: Sink + ?Sized> Sink for &mut S {
    fn save(&mut self, content: &str, filename: &str) -> Result<(), ExchangeError> {
        (**self).save(content, filename)
    }
}

/// Writes exports as files inside a directory
#[derive(Debug, Clone)]
pub struct FileSink {
    dir: PathBuf,
}

impl FileSink {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    /// Where a file with this name would be written
    pub fn path_for(&self, filename: &str) -> PathBuf {
        self.dir.join(filename)
    }
}

impl Sink for FileSink {
    fn save(&mut self, content: &str, filename: &str) -> Result<(), ExchangeError> {
        let path = self.path_for(filename);
        if !self.dir.as_os_str().is_empty() && !self.dir.exists() {
            fs::create_dir_all(&self.dir).map_err(|source| ExchangeError::Write {
                path: path.clone(),
                source,
            })?;
        }
        fs::write(&path, content.as_bytes())
            .map_err(|source| ExchangeError::Write { path, source })
    }
}

/// Prints exports to standard output, ignoring the file name
#[derive(Debug, Clone, Copy, Default)]
pub struct StdoutSink;

impl Sink for StdoutSink {
    fn save(&mut self, content: &str, _filename: &str) -> Result<(), ExchangeError> {
        let mut out = std::io::stdout().lock();
        out.write_all(content.as_bytes())
            .and_then(|_| out.write_all(b"\n"))
            .and_then(|_| out.flush())
            .map_err(ExchangeError::Stdout)
    }
}

/// A file handed to a [`MemorySink`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SavedFile {
    pub filename: String,
    pub content: String,
}

/// Keeps exports in memory
#[derive(Debug, Clone, Default)]
pub struct MemorySink {
    pub saved: Vec<SavedFile>,
}

impl MemorySink {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn last(&self) -> Option<&SavedFile> {
        self.saved.last()
    }
}

impl Sink for MemorySink {
    fn save(&mut self, content: &str, filename: &str) -> Result<(), ExchangeError> {
        self.saved.push(SavedFile {
            filename: filename.to_string(),
            content: content.to_string(),
        });
        Ok(())
    }
}

/// What an export produced
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExportSummary {
    pub filename: String,
    pub sheet: Option<String>,
    pub rows: usize,
    pub bytes: usize,
}

/// Encodes records and hands the result to a sink
#[derive(Debug)]
pub struct Exporter<S: Sink> {
    sink: S,
    bom: bool,
}

impl<S: Sink> Exporter<S> {
    /// Exporter that writes a byte-order mark, which spreadsheet tools need
    /// to pick UTF-8 for non-ASCII text such as Arabic labels
    pub fn new(sink: S) -> Self {
        Self { sink, bom: true }
    }

    pub fn with_bom(mut self, bom: bool) -> Self {
        self.bom = bom;
        self
    }

    pub fn sink(&self) -> &S {
        &self.sink
    }

    pub fn into_sink(self) -> S {
        self.sink
    }

    /// Export `records` as `<filename>.csv`
    ///
    /// `sheet` labels the export in the summary and logs; CSV has no sheets.
    pub fn export(
        &mut self,
        records: &[Record],
        filename: &str,
        sheet: Option<&str>,
    ) -> Result<ExportSummary, ExchangeError> {
        let mut content = String::new();
        if self.bom {
            content.push(BOM);
        }
        content.push_str(&encode(records));

        let filename = csv_filename(filename);
        self.sink.save(&content, &filename)?;

        info!(
            file = %filename,
            sheet = sheet.unwrap_or(""),
            rows = records.len(),
            "exported records"
        );
        Ok(ExportSummary {
            filename,
            sheet: sheet.map(str::to_string),
            rows: records.len(),
            bytes: content.len(),
        })
    }

    /// Map domain entities to rows, then [`Exporter::export`] them
    pub fn export_entities<T: ToRecord>(
        &mut self,
        items: &[T],
        ctx: &MapContext,
        filename: &str,
        sheet: Option<&str>,
    ) -> Result<ExportSummary, ExchangeError> {
        let records = to_records(items, ctx);
        self.export(&records, filename, sheet)
    }
}

/// Append `.csv` unless the name already ends with it
pub fn csv_filename(name: &str) -> String {
    if name.to_lowercase().ends_with(".csv") {
        name.to_string()
    } else {
        format!("{}.csv", name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    fn rows() -> Vec<Record> {
        vec![
            Record::new().with("Name", "Pen").with("Price", 2.5),
            Record::new().with("Name", "Ink, blue").with("Price", 4.0),
        ]
    }

    #[test]
    fn test_export_prefixes_bom_and_names_file() {
        let mut exporter = Exporter::new(MemorySink::new());
        let summary = exporter.export(&rows(), "products", Some("Products")).unwrap();

        let saved = exporter.sink().last().unwrap();
        assert_eq!(saved.filename, "products.csv");
        assert!(saved.content.starts_with('\u{feff}'));
        assert_eq!(
            saved.content.trim_start_matches('\u{feff}'),
            "Name,Price\nPen,2.5\n\"Ink, blue\",4"
        );
        assert_eq!(summary.rows, 2);
        assert_eq!(summary.sheet.as_deref(), Some("Products"));
    }

    #[test]
    fn test_export_without_bom() {
        let mut exporter = Exporter::new(MemorySink::new()).with_bom(false);
        exporter.export(&rows(), "p.csv", None).unwrap();
        let saved = exporter.into_sink().saved.pop().unwrap();
        assert_eq!(saved.filename, "p.csv");
        assert!(saved.content.starts_with("Name,Price"));
    }

    #[test]
    fn test_export_empty_records() {
        let mut exporter = Exporter::new(MemorySink::new()).with_bom(false);
        let summary = exporter.export(&[], "empty", None).unwrap();
        assert_eq!(summary.rows, 0);
        assert_eq!(exporter.sink().last().unwrap().content, "");
    }

    #[test]
    fn test_file_sink_creates_directory() {
        let tmp = tempdir().unwrap();
        let dir = tmp.path().join("exports");
        let mut exporter = Exporter::new(FileSink::new(&dir));
        exporter.export(&rows(), "products", None).unwrap();

        let bytes = fs::read(dir.join("products.csv")).unwrap();
        assert_eq!(&bytes[..3], &[0xEF, 0xBB, 0xBF]);
    }

    #[test]
    fn test_export_entities_maps_first() {
        use crate::core::identity::{EntityId, EntityPrefix};
        use crate::core::locale::Locale;
        use crate::entities::Product;

        let mut pen = Product::new(EntityId::new(EntityPrefix::Prd), "Pen", "P1");
        pen.sell_price = 2.5;

        let mut sink = MemorySink::new();
        let mut exporter = Exporter::new(&mut sink).with_bom(false);
        exporter
            .export_entities(&[pen], &MapContext::new(Locale::En), "products", None)
            .unwrap();

        let content = &sink.last().unwrap().content;
        assert!(content.starts_with("Name,SKU,"));
        assert_eq!(content.lines().count(), 2);
    }

    #[test]
    fn test_csv_filename() {
        assert_eq!(csv_filename("sales"), "sales.csv");
        assert_eq!(csv_filename("Sales.CSV"), "Sales.CSV");
    }
}
