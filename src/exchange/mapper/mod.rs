//! Record mappers: domain entities to spreadsheet rows and back
//!
//! Each entity has a column enum listing its spreadsheet columns in export
//! order, with a label per display language and a machine key. Exports
//! always use the context's language; imports accept a column under any
//! language's label or its machine key.

pub mod expense;
pub mod product;
pub mod purchase;
pub mod sale;

use chrono::format::{Item, StrftimeItems};
use chrono::{DateTime, Utc};

use crate::core::config::{Config, DEFAULT_DATE_FORMAT};
use crate::core::locale::Locale;
use crate::exchange::record::Record;

pub use expense::ExpenseColumn;
pub use product::ProductColumn;
pub use purchase::PurchaseColumn;
pub use sale::SaleColumn;

/// Settings shared by every export mapper
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MapContext {
    pub locale: Locale,
    date_format: String,
}

impl MapContext {
    pub fn new(locale: Locale) -> Self {
        Self {
            locale,
            date_format: DEFAULT_DATE_FORMAT.to_string(),
        }
    }

    pub fn from_config(config: &Config) -> Self {
        Self::new(config.locale()).with_date_format(config.date_format())
    }

    /// Use a chrono format string for date columns. An invalid pattern is
    /// ignored and the default kept.
    pub fn with_date_format(mut self, format: &str) -> Self {
        if StrftimeItems::new(format).any(|item| matches!(item, Item::Error)) {
            tracing::warn!("invalid date format '{}', using {}", format, DEFAULT_DATE_FORMAT);
        } else {
            self.date_format = format.to_string();
        }
        self
    }

    pub fn date_format(&self) -> &str {
        &self.date_format
    }

    pub fn format_date(&self, date: &DateTime<Utc>) -> String {
        date.format(&self.date_format).to_string()
    }
}

impl Default for MapContext {
    fn default() -> Self {
        Self::new(Locale::default())
    }
}

/// A spreadsheet column of some entity
pub trait Column: Copy + 'static {
    /// Every column, in export order
    fn all() -> &'static [Self];

    /// Machine-friendly key accepted on import (e.g. `buy_price`)
    fn key(&self) -> &'static str;

    /// Header text in the given language
    fn label(&self, locale: Locale) -> &'static str;

    /// Further names accepted on import
    fn aliases(&self) -> &'static [&'static str] {
        &[]
    }

    /// Sample cell for import templates
    fn example(&self) -> &'static str {
        ""
    }
}

/// Header row for a column set
pub fn headers<C: Column>(locale: Locale) -> Vec<&'static str> {
    C::all().iter().map(|c| c.label(locale)).collect()
}

/// Project a domain entity into a row
pub trait ToRecord {
    fn to_record(&self, ctx: &MapContext) -> Record;
}

/// Map a slice of entities, preserving order
pub fn to_records<T: ToRecord>(items: &[T], ctx: &MapContext) -> Vec<Record> {
    items.iter().map(|item| item.to_record(ctx)).collect()
}

/// Shared state of one import run
///
/// Generated ids and SKUs combine the batch timestamp with the row's
/// position, so they are unique within the batch.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ImportBatch {
    started: DateTime<Utc>,
}

impl ImportBatch {
    pub fn new() -> Self {
        Self::at(Utc::now())
    }

    pub fn at(started: DateTime<Utc>) -> Self {
        Self { started }
    }

    pub fn started(&self) -> DateTime<Utc> {
        self.started
    }

    pub fn timestamp_ms(&self) -> u64 {
        self.started.timestamp_millis().max(0) as u64
    }
}

impl Default for ImportBatch {
    fn default() -> Self {
        Self::new()
    }
}

/// Rebuild a domain entity from a decoded row
pub trait FromRecord: Sized {
    /// `position` is the row's 0-based index among the decoded rows
    fn from_record(record: &Record, position: usize, batch: &ImportBatch) -> Self;
}

/// Rebuild every decoded row, preserving order
pub fn from_records<T: FromRecord>(records: &[Record], batch: &ImportBatch) -> Vec<T> {
    records
        .iter()
        .enumerate()
        .map(|(position, record)| T::from_record(record, position, batch))
        .collect()
}

/// Find a column's text in a row: any language's label, then the machine
/// key, then aliases. Header matching ignores ASCII case; empty cells count
/// as missing.
pub fn lookup<C: Column>(record: &Record, column: C) -> Option<String> {
    let labels = Locale::all().iter().map(|l| column.label(*l));
    let names = labels
        .chain(std::iter::once(column.key()))
        .chain(column.aliases().iter().copied());

    for name in names {
        let hit = record
            .iter()
            .find(|(key, value)| key.eq_ignore_ascii_case(name) && !value.is_empty());
        if let Some((_, value)) = hit {
            return Some(value.as_text());
        }
    }
    None
}

/// Lenient decimal: missing, unparseable or non-finite input is 0
pub fn parse_number(text: Option<String>) -> f64 {
    text.and_then(|s| s.trim().parse::<f64>().ok())
        .filter(|n| n.is_finite())
        .unwrap_or(0.0)
}

/// Lenient whole number: decimals are truncated, anything unusable is 0
pub fn parse_count(text: Option<String>) -> i64 {
    let Some(s) = text else {
        return 0;
    };
    let s = s.trim();
    s.parse::<i64>()
        .ok()
        .or_else(|| {
            s.parse::<f64>()
                .ok()
                .filter(|n| n.is_finite())
                .map(|n| n.trunc() as i64)
        })
        .unwrap_or(0)
}

/// Round a derived money amount to cents
pub(crate) fn round_money(amount: f64) -> f64 {
    (amount * 100.0).round() / 100.0
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn test_parse_number() {
        assert_eq!(parse_number(Some("1.5".into())), 1.5);
        assert_eq!(parse_number(Some(" 7 ".into())), 7.0);
        assert_eq!(parse_number(Some("abc".into())), 0.0);
        assert_eq!(parse_number(Some("NaN".into())), 0.0);
        assert_eq!(parse_number(None), 0.0);
    }

    #[test]
    fn test_parse_count() {
        assert_eq!(parse_count(Some("12".into())), 12);
        assert_eq!(parse_count(Some("12.9".into())), 12);
        assert_eq!(parse_count(Some("-3".into())), -3);
        assert_eq!(parse_count(Some("many".into())), 0);
        assert_eq!(parse_count(None), 0);
    }

    #[test]
    fn test_format_date() {
        let date = Utc.with_ymd_and_hms(2024, 3, 9, 14, 5, 0).unwrap();
        let ctx = MapContext::new(Locale::En);
        assert_eq!(ctx.format_date(&date), "2024-03-09");

        let ctx = ctx.with_date_format("%d/%m/%Y %H:%M");
        assert_eq!(ctx.format_date(&date), "09/03/2024 14:05");
    }

    #[test]
    fn test_invalid_date_format_ignored() {
        let ctx = MapContext::new(Locale::En).with_date_format("%Q");
        assert_eq!(ctx.date_format(), DEFAULT_DATE_FORMAT);
    }

    #[test]
    fn test_lookup_prefers_labels_and_ignores_case() {
        let record = Record::new()
            .with("name", "machine")
            .with("Name", "")
            .with("SELL PRICE", "3");
        assert_eq!(
            lookup(&record, ProductColumn::Name).as_deref(),
            Some("machine")
        );
        assert_eq!(
            lookup(&record, ProductColumn::SellPrice).as_deref(),
            Some("3")
        );
        assert_eq!(lookup(&record, ProductColumn::Unit), None);
    }

    #[test]
    fn test_round_money() {
        assert_eq!(round_money(0.1 + 0.2), 0.3);
        assert_eq!(round_money(10.456), 10.46);
    }
}
