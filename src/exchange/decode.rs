//! CSV decoding
//!
//! Two modes share the same rules for the header row (first non-blank line,
//! tokens trimmed and unquoted), for cells (trimmed) and for malformed rows:
//! a row whose field count differs from the header's is dropped, never
//! partially accepted. Whitespace-only lines are skipped; a row of empty
//! fields like `,,` is kept when its width matches.
//!
//! - [`DecodeMode::Lenient`] splits the text on newlines and walks each line
//!   with a quote-aware field splitter. A quoted cell cannot span lines.
//! - [`DecodeMode::Strict`] hands the text to the `csv` crate, so quoted
//!   cells may contain newlines.

use tracing::debug;

use crate::exchange::record::Record;

/// Byte-order mark some spreadsheet tools write at the start of UTF-8 files
pub const BOM: char = '\u{feff}';

/// How to split text into rows
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DecodeMode {
    /// One row per line
    #[default]
    Lenient,
    /// RFC 4180, quoted cells may span lines
    Strict,
}

/// A data row that was dropped because its width did not match the header
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SkippedRow {
    /// 1-based line number in the input
    pub line: usize,
    pub expected: usize,
    pub found: usize,
}

/// Decoded rows plus what was dropped along the way
#[derive(Debug, Clone, Default, PartialEq)]
pub struct DecodeReport {
    pub headers: Vec<String>,
    pub records: Vec<Record>,
    pub skipped: Vec<SkippedRow>,
}

impl DecodeReport {
    /// Number of data rows seen, kept or not
    pub fn rows_seen(&self) -> usize {
        self.records.len() + self.skipped.len()
    }

    fn push_row(&mut self, line: usize, fields: Vec<String>) {
        if fields.len() != self.headers.len() {
            debug!(
                line,
                expected = self.headers.len(),
                found = fields.len(),
                "dropping row with wrong field count"
            );
            self.skipped.push(SkippedRow {
                line,
                expected: self.headers.len(),
                found: fields.len(),
            });
            return;
        }
        let record = self.headers.iter().cloned().zip(fields).collect();
        self.records.push(record);
    }
}

/// Decode CSV text into records keyed by header, one row per line
pub fn decode(text: &str) -> Vec<Record> {
    decode_report(text, DecodeMode::Lenient).records
}

/// Decode CSV text with the given mode
pub fn decode_with(text: &str, mode: DecodeMode) -> Vec<Record> {
    decode_report(text, mode).records
}

/// Decode CSV text and report dropped rows
pub fn decode_report(text: &str, mode: DecodeMode) -> DecodeReport {
    let text = text.strip_prefix(BOM).unwrap_or(text);
    match mode {
        DecodeMode::Lenient => decode_lines(text),
        DecodeMode::Strict => decode_rfc4180(text),
    }
}

fn decode_lines(text: &str) -> DecodeReport {
    let mut report = DecodeReport::default();
    let mut lines = text
        .split('\n')
        .enumerate()
        .filter(|(_, line)| !line.trim().is_empty());

    let Some((_, header_line)) = lines.next() else {
        return report;
    };
    report.headers = header_line.split(',').map(clean_header).collect();

    for (idx, line) in lines {
        report.push_row(idx + 1, parse_line(line));
    }
    report
}

fn decode_rfc4180(text: &str) -> DecodeReport {
    let mut report = DecodeReport::default();
    let mut rdr = csv::ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .trim(csv::Trim::All)
        .from_reader(text.as_bytes());

    let mut have_header = false;
    for result in rdr.records() {
        let record = match result {
            Ok(r) => r,
            Err(e) => {
                let line = e.position().map(|p| p.line() as usize).unwrap_or(0);
                debug!(line, error = %e, "dropping unreadable row");
                report.skipped.push(SkippedRow {
                    line,
                    expected: report.headers.len(),
                    found: 0,
                });
                continue;
            }
        };
        if is_blank_line(&record) {
            continue;
        }
        let line = record.position().map(|p| p.line() as usize).unwrap_or(0);
        if !have_header {
            report.headers = record.iter().map(clean_header).collect();
            have_header = true;
            continue;
        }
        report.push_row(line, record.iter().map(str::to_string).collect());
    }
    report
}

/// A line holding nothing but whitespace reads as one empty field. Rows of
/// empty fields such as `,,` are data and go through the width check.
fn is_blank_line(record: &csv::StringRecord) -> bool {
    record.len() == 1 && record[0].trim().is_empty()
}

/// Header token: trimmed, with one surrounding pair of quotes removed
fn clean_header(token: &str) -> String {
    let token = token.trim();
    let token = token.strip_prefix('"').unwrap_or(token);
    let token = token.strip_suffix('"').unwrap_or(token);
    token.to_string()
}

/// Split one line into trimmed fields, honouring quotes
///
/// A `"` toggles quoting, except that `""` inside a quoted section is a
/// literal quote. Commas inside quotes are content.
pub fn parse_line(line: &str) -> Vec<String> {
    let mut fields = Vec::new();
    let mut current = String::new();
    let mut in_quotes = false;
    let mut chars = line.chars().peekable();

    while let Some(c) = chars.next() {
        match c {
            '"' if in_quotes && chars.peek() == Some(&'"') => {
                current.push('"');
                chars.next();
            }
            '"' => in_quotes = !in_quotes,
            ',' if !in_quotes => {
                fields.push(current.trim().to_string());
                current.clear();
            }
            _ => current.push(c),
        }
    }
    fields.push(current.trim().to_string());
    fields
}
