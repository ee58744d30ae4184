//! CSV encoding
//!
//! The header is the first record's columns; every row is written in that
//! column order. Only text cells containing a comma, a double quote or a
//! line break (`\n` or `\r`) are quoted, with inner quotes doubled. Rows are
//! joined with `\n` and no trailing newline is written.

use crate::exchange::record::{Record, Value};

/// Field delimiter
pub const DELIMITER: char = ',';

/// Encode records as CSV text. An empty slice encodes to an empty string.
pub fn encode(records: &[Record]) -> String {
    let Some(first) = records.first() else {
        return String::new();
    };

    let headers: Vec<&str> = first.keys().collect();
    let mut lines = Vec::with_capacity(records.len() + 1);
    lines.push(headers.join(","));

    for record in records {
        let row: Vec<String> = headers
            .iter()
            .map(|header| encode_field(record.get(header).unwrap_or(&Value::Empty)))
            .collect();
        lines.push(row.join(","));
    }

    lines.join("\n")
}

/// Encode a single cell
pub fn encode_field(value: &Value) -> String {
    match value {
        Value::Text(s) => escape_field(s),
        other => other.as_text(),
    }
}

/// Quote a text cell if it contains a delimiter, quote or line break
///
/// Handles commas, quotes, `\n` and `\r` according to RFC 4180.
pub fn escape_field(s: &str) -> String {
    if needs_quotes(s) {
        format!("\"{}\"", s.replace('"', "\"\""))
    } else {
        s.to_string()
    }
}

fn needs_quotes(s: &str) -> bool {
    s.contains(DELIMITER) || s.contains('"') || s.contains('\n') || s.contains('\r')
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_input_is_empty_text() {
        assert_eq!(encode(&[]), "");
    }

    #[test]
    fn test_header_and_rows() {
        let records = vec![
            Record::new().with("name", "Pen").with("price", 2.5),
            Record::new().with("name", "Ink").with("price", 10.0),
        ];
        assert_eq!(encode(&records), "name,price\nPen,2.5\nInk,10");
    }

    #[test]
    fn test_quoting() {
        assert_eq!(escape_field("a,b\"c"), "\"a,b\"\"c\"");
        assert_eq!(escape_field("line\nbreak"), "\"line\nbreak\"");
        assert_eq!(escape_field("plain text"), "plain text");
        assert_eq!(escape_field("x\ry"), "\"x\ry\"");
    }

    #[test]
    fn test_carriage_return_cell_stays_one_field() {
        let records = vec![Record::new().with("a", "x\ry").with("b", "z")];
        let text = encode(&records);
        assert_eq!(text, "a,b\n\"x\ry\",z");

        let mut rdr = csv::ReaderBuilder::new()
            .has_headers(true)
            .from_reader(text.as_bytes());
        let rows: Vec<csv::StringRecord> = rdr.records().map(|r| r.unwrap()).collect();
        assert_eq!(rows.len(), 1);
        assert_eq!(&rows[0][0], "x\ry");
        assert_eq!(&rows[0][1], "z");
    }

    #[test]
    fn test_rows_follow_header_order() {
        let records = vec![
            Record::new().with("a", "1").with("b", "2"),
            Record::new().with("b", "4").with("a", "3"),
        ];
        assert_eq!(encode(&records), "a,b\n1,2\n3,4");
    }

    #[test]
    fn test_missing_and_empty_cells() {
        let records = vec![
            Record::new().with("a", "1").with("b", Value::Empty),
            Record::new().with("a", "2"),
        ];
        assert_eq!(encode(&records), "a,b\n1,\n2,");
    }

    #[test]
    fn test_output_is_readable_by_csv_crate() {
        let records = vec![
            Record::new().with("name", "a,b\"c").with("note", "two\nlines"),
            Record::new().with("name", "plain").with("note", 3.0),
        ];
        let text = encode(&records);

        let mut rdr = csv::ReaderBuilder::new()
            .has_headers(true)
            .from_reader(text.as_bytes());
        let rows: Vec<csv::StringRecord> = rdr.records().map(|r| r.unwrap()).collect();

        assert_eq!(rows.len(), 2);
        assert_eq!(&rows[0][0], "a,b\"c");
        assert_eq!(&rows[0][1], "two\nlines");
        assert_eq!(&rows[1][1], "3");
    }
}
