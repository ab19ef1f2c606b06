use chrono::{Datelike, NaiveDate};
use serde::Deserialize;
use std::collections::BTreeMap;

/// One row exactly as it appears in the source file.
///
/// Columns are matched by position, not by header name:
/// ticker, date, close, volume, open, high, low.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct RawRecord {
    pub company: String,
    pub date: String,
    pub close: String,
    pub volume: String,
    pub open: String,
    pub high: String,
    pub low: String,
    /// Source line, for error reporting only.
    #[serde(skip)]
    pub line: u64,
}

pub const RAW_COLUMN_COUNT: usize = 7;

/// Canonical cleaned daily quote.
#[derive(Debug, Clone, PartialEq)]
pub struct Quote {
    pub company: String,
    pub date: NaiveDate,
    pub close: f64,
    pub open: f64,
    pub high: f64,
    pub low: f64,
    pub volume: u64,
    pub daily_range: f64,
}

impl Quote {
    pub fn new(
        company: impl Into<String>,
        date: NaiveDate,
        close: f64,
        open: f64,
        high: f64,
        low: f64,
        volume: u64,
    ) -> Self {
        Self {
            company: company.into(),
            date,
            close,
            open,
            high,
            low,
            volume,
            daily_range: high - low,
        }
    }

    /// Calendar month key used by the monthly series.
    pub fn year_month(&self) -> (i32, u32) {
        (self.date.year(), self.date.month())
    }

    /// Renders the quote back into the raw input schema.
    #[cfg(test)]
    pub fn to_raw(&self) -> RawRecord {
        RawRecord {
            company: self.company.clone(),
            date: self.date.format("%m/%d/%Y").to_string(),
            close: format!("${}", self.close),
            volume: self.volume.to_string(),
            open: format!("${}", self.open),
            high: format!("${}", self.high),
            low: format!("${}", self.low),
            line: 0,
        }
    }
}

/// The cleaned, read-only quote table, ordered by (company, date).
#[derive(Debug, Clone, Default)]
pub struct QuoteTable {
    quotes: Vec<Quote>,
    dropped_rows: usize,
}

impl QuoteTable {
    pub fn new(mut quotes: Vec<Quote>, dropped_rows: usize) -> Self {
        quotes.sort_by(|a, b| a.company.cmp(&b.company).then(a.date.cmp(&b.date)));
        Self {
            quotes,
            dropped_rows,
        }
    }

    pub fn quotes(&self) -> &[Quote] {
        &self.quotes
    }

    pub fn len(&self) -> usize {
        self.quotes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.quotes.is_empty()
    }

    /// Rows removed during cleaning because their date did not parse.
    pub fn dropped_rows(&self) -> usize {
        self.dropped_rows
    }

    /// Sorted distinct tickers.
    pub fn companies(&self) -> Vec<String> {
        self.by_company().into_keys().map(str::to_string).collect()
    }

    pub fn date_range(&self) -> Option<(NaiveDate, NaiveDate)> {
        let first = self.quotes.first()?.date;
        Some(self.quotes.iter().fold((first, first), |(lo, hi), q| {
            (lo.min(q.date), hi.max(q.date))
        }))
    }

    /// Groups quotes per ticker, keeping table order inside each group.
    pub fn by_company(&self) -> BTreeMap<&str, Vec<&Quote>> {
        let mut groups: BTreeMap<&str, Vec<&Quote>> = BTreeMap::new();
        for quote in &self.quotes {
            groups.entry(quote.company.as_str()).or_default().push(quote);
        }
        groups
    }

    pub fn closes(&self) -> Vec<f64> {
        self.quotes.iter().map(|q| q.close).collect()
    }

    pub fn volumes(&self) -> Vec<f64> {
        self.quotes.iter().map(|q| q.volume as f64).collect()
    }

    pub fn daily_ranges(&self) -> Vec<f64> {
        self.quotes.iter().map(|q| q.daily_range).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_daily_range_is_high_minus_low() {
        let q = Quote::new("AAPL", date(2020, 1, 2), 10.0, 9.5, 11.25, 9.0, 100);
        assert_eq!(q.daily_range, 11.25 - 9.0);
        assert!(q.daily_range >= 0.0);
    }

    #[test]
    fn test_table_orders_by_company_then_date() {
        let table = QuoteTable::new(
            vec![
                Quote::new("TSLA", date(2020, 1, 3), 1.0, 1.0, 1.0, 1.0, 1),
                Quote::new("AAPL", date(2020, 1, 5), 1.0, 1.0, 1.0, 1.0, 1),
                Quote::new("AAPL", date(2020, 1, 1), 1.0, 1.0, 1.0, 1.0, 1),
            ],
            0,
        );

        let keys: Vec<_> = table
            .quotes()
            .iter()
            .map(|q| (q.company.as_str(), q.date))
            .collect();
        assert_eq!(
            keys,
            vec![
                ("AAPL", date(2020, 1, 1)),
                ("AAPL", date(2020, 1, 5)),
                ("TSLA", date(2020, 1, 3)),
            ]
        );
        assert_eq!(table.companies(), vec!["AAPL", "TSLA"]);
        assert_eq!(
            table.date_range(),
            Some((date(2020, 1, 1), date(2020, 1, 5)))
        );
    }

    #[test]
    fn test_empty_table_has_no_date_range() {
        let table = QuoteTable::default();
        assert!(table.is_empty());
        assert_eq!(table.date_range(), None);
    }
}
