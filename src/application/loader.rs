use crate::domain::errors::PipelineError;
use crate::domain::quote::{Quote, QuoteTable, RAW_COLUMN_COUNT, RawRecord};
use chrono::{DateTime, NaiveDate, NaiveDateTime};
use std::fs::File;
use std::path::Path;
use tracing::{debug, info};

/// Month-first and ISO layouts, tried in order.
const DATE_FORMATS: [&str; 12] = [
    // Two-digit years first, otherwise %Y reads "20" as year 20.
    "%m/%d/%y",
    "%m-%d-%y",
    "%m/%d/%Y",
    "%Y-%m-%d",
    "%Y/%m/%d",
    "%m-%d-%Y",
    "%b %d, %Y",
    "%B %d, %Y",
    "%d %b %Y",
    "%d-%b-%Y",
    // Day-first only ever matches when month-first is impossible.
    "%d/%m/%y",
    "%d/%m/%Y",
];

const DATETIME_FORMATS: [&str; 3] = ["%Y-%m-%d %H:%M:%S", "%Y-%m-%dT%H:%M:%S", "%m/%d/%Y %H:%M"];

/// Result of cleaning raw rows.
#[derive(Debug, Clone, Default)]
pub struct CleanOutcome {
    pub quotes: Vec<Quote>,
    /// Rows removed because their date did not parse.
    pub dropped: usize,
}

/// Reads and cleans the quote file at `path`.
///
/// Fails when the file is missing, its header does not have the seven
/// expected columns, a numeric cell is corrupt, or no row survives cleaning.
pub fn load_quotes(path: impl AsRef<Path>) -> Result<QuoteTable, PipelineError> {
    let path = path.as_ref();
    let raw = read_raw_records(path)?;
    let total = raw.len();

    let outcome = clean_records(raw)?;
    if outcome.quotes.is_empty() {
        return Err(PipelineError::EmptyTable {
            path: path.to_path_buf(),
        });
    }

    if outcome.dropped > 0 {
        info!(
            "Dropped {} of {} rows with unparseable dates",
            outcome.dropped, total
        );
    }

    Ok(QuoteTable::new(outcome.quotes, outcome.dropped))
}

/// Reads rows positionally; header names are not trusted.
pub fn read_raw_records(path: &Path) -> Result<Vec<RawRecord>, PipelineError> {
    let file = File::open(path).map_err(|source| PipelineError::Io {
        path: path.to_path_buf(),
        source,
    })?;

    let mut reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .trim(csv::Trim::All)
        .from_reader(file);

    let found = reader.headers()?.len();
    if found != RAW_COLUMN_COUNT {
        return Err(PipelineError::HeaderMismatch {
            expected: RAW_COLUMN_COUNT,
            found,
        });
    }

    let mut records = Vec::new();
    for result in reader.records() {
        let record = result?;
        let mut row: RawRecord = record.deserialize(None)?;
        row.line = record.position().map_or(0, |p| p.line());
        records.push(row);
    }

    Ok(records)
}

/// Converts raw rows into quotes, dropping rows whose date does not parse.
///
/// Running this on rows rendered back from its own output is a no-op.
pub fn clean_records(raw: Vec<RawRecord>) -> Result<CleanOutcome, PipelineError> {
    let mut outcome = CleanOutcome::default();

    for row in raw {
        let close = parse_price(&row.close, "close", row.line)?;
        let open = parse_price(&row.open, "open", row.line)?;
        let high = parse_price(&row.high, "high", row.line)?;
        let low = parse_price(&row.low, "low", row.line)?;
        let volume = parse_volume(&row.volume, row.line)?;

        let Some(date) = parse_trade_date(&row.date) else {
            debug!("Skipping line {}: unparseable date {:?}", row.line, row.date);
            outcome.dropped += 1;
            continue;
        };

        outcome
            .quotes
            .push(Quote::new(row.company.trim(), date, close, open, high, low, volume));
    }

    Ok(outcome)
}

/// Strips currency symbols and thousands separators. A blank cell is a
/// missing value (NaN); anything else that fails to parse is fatal.
pub fn parse_price(raw: &str, field: &'static str, line: u64) -> Result<f64, PipelineError> {
    let cleaned: String = raw.chars().filter(|c| !matches!(c, '$' | ',')).collect();
    let cleaned = cleaned.trim();

    if cleaned.is_empty() {
        return Ok(f64::NAN);
    }

    cleaned
        .parse::<f64>()
        .map_err(|_| PipelineError::InvalidNumber {
            line,
            field,
            value: raw.to_string(),
        })
}

fn parse_volume(raw: &str, line: u64) -> Result<u64, PipelineError> {
    let cleaned: String = raw.trim().chars().filter(|c| *c != ',').collect();
    cleaned
        .parse::<u64>()
        .or_else(|_| {
            // Exported volumes occasionally carry a trailing ".0".
            cleaned
                .parse::<f64>()
                .ok()
                .filter(|v| v.is_finite() && *v >= 0.0 && v.fract() == 0.0)
                .map(|v| v as u64)
                .ok_or(())
        })
        .map_err(|_| PipelineError::InvalidNumber {
            line,
            field: "volume",
            value: raw.to_string(),
        })
}

/// Parses a trade date written in any of the supported layouts, month
/// before day when ambiguous. The time of day is discarded.
pub fn parse_trade_date(raw: &str) -> Option<NaiveDate> {
    let raw = raw.trim();
    if raw.is_empty() {
        return None;
    }

    DATE_FORMATS
        .iter()
        .filter(|fmt| full_year_written(raw, fmt))
        .find_map(|fmt| NaiveDate::parse_from_str(raw, fmt).ok())
        .or_else(|| {
            DATETIME_FORMATS
                .iter()
                .filter(|fmt| full_year_written(raw, fmt))
                .find_map(|fmt| NaiveDateTime::parse_from_str(raw, fmt).ok())
                .map(|dt| dt.date())
        })
        .or_else(|| {
            DateTime::parse_from_rfc3339(raw)
                .ok()
                .map(|dt| dt.naive_local().date())
        })
}

/// A `%Y` field only accepts a four-digit year. Every other numeric field
/// is at most two digits, so the year is the only run that long.
fn full_year_written(raw: &str, fmt: &str) -> bool {
    !fmt.contains("%Y")
        || raw
            .split(|c: char| !c.is_ascii_digit())
            .any(|run| run.len() >= 4)
}
