//! Tabular data exchange
//!
//! Export: entity -> [`mapper`] -> [`Record`] -> [`encode`] -> [`Exporter`] -> [`Sink`].
//! Import: file -> [`decode`] -> [`Record`] -> [`mapper`] -> entity.

pub mod decode;
pub mod encode;
pub mod error;
pub mod export;
pub mod import;
pub mod mapper;
pub mod record;

pub use decode::{decode, decode_report, decode_with, parse_line, DecodeMode, DecodeReport};
pub use encode::encode;
pub use error::ExchangeError;
pub use export::{ExportSummary, Exporter, FileSink, MemorySink, Sink, StdoutSink};
pub use import::{import_file, import_text, read_import_file, ImportOutcome};
pub use mapper::{FromRecord, ImportBatch, MapContext, ToRecord};
pub use record::{Record, Value};
