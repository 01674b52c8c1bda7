use std::fs::File;
use std::io::Read;
use std::path::PathBuf;

use async_trait::async_trait;
use chrono::NaiveDate;

use crate::data::error::LoadError;
use crate::data::SeriesSource;
use crate::domain::{Observation, RawSeries};

const SOURCE_NAME: &str = "local CSV file";

/// Date formats accepted in uploaded files, tried in order
const DATE_FORMATS: &[&str] = &["%Y-%m-%d", "%Y/%m/%d", "%m/%d/%Y", "%d/%m/%Y"];

/// Which series a CSV file is supposed to carry. Drives the value-column
/// keyword match during schema detection.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SchemaHint {
    /// Market-cap style columns
    Target,
    /// Monetary-aggregate style columns
    Driver,
}

impl SchemaHint {
    fn value_keywords(&self) -> &'static [&'static str] {
        match self {
            SchemaHint::Target => &["market", "cap", "value", "price"],
            SchemaHint::Driver => &["m2", "value", "supply"],
        }
    }
}

/// File loader for user-supplied CSVs with unknown column naming.
///
/// Columns are detected by name: the date column must contain "date" or
/// "time", the value column must contain one of the hint's keywords. A file
/// where either match fails is a typed parse failure — there is deliberately
/// no silent fall-back to the first column.
pub struct CsvFileSource {
    path: PathBuf,
    hint: SchemaHint,
}

impl CsvFileSource {
    pub fn new(path: PathBuf, hint: SchemaHint) -> Self {
        Self { path, hint }
    }
}

#[async_trait]
impl SeriesSource for CsvFileSource {
    fn name(&self) -> &'static str {
        SOURCE_NAME
    }

    async fn load(&self) -> Result<RawSeries, LoadError> {
        let file = File::open(&self.path).map_err(|e| LoadError::FetchFailed {
            source_name: SOURCE_NAME,
            reason: format!("{}: {e}", self.path.display()),
        })?;
        parse_series(file, self.hint)
    }
}

/// Detect (date column, value column) indices from the header row
fn detect_columns(headers: &csv::StringRecord, hint: SchemaHint) -> Result<(usize, usize), LoadError> {
    let names: Vec<String> = headers
        .iter()
        .map(|h| h.trim().to_lowercase())
        .collect();

    let date_col = names
        .iter()
        .position(|name| name.contains("date") || name.contains("time"))
        .ok_or_else(|| parse_failed("no column name containing 'date' or 'time'".to_string()))?;

    let value_col = names
        .iter()
        .enumerate()
        .position(|(idx, name)| {
            idx != date_col && hint.value_keywords().iter().any(|kw| name.contains(kw))
        })
        .ok_or_else(|| {
            parse_failed(format!(
                "no column name matching any of {:?}",
                hint.value_keywords()
            ))
        })?;

    Ok((date_col, value_col))
}

/// Parse a CSV stream into a series. Rows with unparseable dates or values
/// are dropped (the upstream tools that produce these files routinely emit
/// blank cells); a file with no usable rows at all is a parse failure.
fn parse_series(reader: impl Read, hint: SchemaHint) -> Result<RawSeries, LoadError> {
    let mut csv_reader = csv::Reader::from_reader(reader);

    let headers = csv_reader
        .headers()
        .map_err(|e| parse_failed(e.to_string()))?
        .clone();
    let (date_col, value_col) = detect_columns(&headers, hint)?;

    let mut observations = Vec::new();
    for record in csv_reader.records() {
        let record = record.map_err(|e| parse_failed(e.to_string()))?;
        let (Some(date_cell), Some(value_cell)) = (record.get(date_col), record.get(value_col))
        else {
            continue;
        };

        let Some(date) = parse_date(date_cell.trim()) else {
            continue;
        };
        let Ok(value) = value_cell.trim().parse::<f64>() else {
            continue;
        };

        observations.push(Observation::new(date, value));
    }

    let series = RawSeries::from_observations(observations);
    if series.is_empty() {
        return Err(parse_failed(
            "no rows with a parseable date and value".to_string(),
        ));
    }
    Ok(series)
}

fn parse_date(cell: &str) -> Option<NaiveDate> {
    DATE_FORMATS
        .iter()
        .find_map(|fmt| NaiveDate::parse_from_str(cell, fmt).ok())
}

fn parse_failed(reason: String) -> LoadError {
    LoadError::ParseFailed {
        source_name: SOURCE_NAME,
        reason,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn detects_columns_by_keyword_not_position() {
        let body = b"Symbol,Market Cap (B),Date\nBTC,850.5,2021-01-01\nBTC,900.1,2021-01-02\n";
        let series = parse_series(&body[..], SchemaHint::Target).unwrap();

        assert_eq!(series.len(), 2);
        assert_eq!(series.observations()[0].value, 850.5);
    }

    #[test]
    fn driver_hint_matches_m2_style_headers() {
        let body = b"observation_date,M2SL\n2020-01-01,15330.2\n2020-02-01,15412.8\n";
        let series = parse_series(&body[..], SchemaHint::Driver).unwrap();

        assert_eq!(series.len(), 2);
    }

    #[test]
    fn missing_value_column_is_a_typed_failure_not_a_fallback() {
        // Second column exists but matches none of the target keywords
        let body = b"date,whatever\n2020-01-01,1.0\n";
        let err = parse_series(&body[..], SchemaHint::Target).unwrap_err();

        assert!(matches!(err, LoadError::ParseFailed { .. }));
    }

    #[test]
    fn missing_date_column_is_a_typed_failure() {
        let body = b"day,market_cap\n2020-01-01,1.0\n";
        let err = parse_series(&body[..], SchemaHint::Target).unwrap_err();

        assert!(matches!(err, LoadError::ParseFailed { .. }));
    }

    #[test]
    fn bad_rows_are_dropped_not_fatal() {
        let body =
            b"date,price\n2020-01-01,1.5\nnot-a-date,2.0\n2020-01-03,n/a\n2020-01-04,4.5\n";
        let series = parse_series(&body[..], SchemaHint::Target).unwrap();

        assert_eq!(series.len(), 2);
    }

    #[test]
    fn slash_dates_parse_too() {
        let body = b"Date,Value\n2020/01/01,1.0\n2020/01/02,2.0\n";
        let series = parse_series(&body[..], SchemaHint::Driver).unwrap();

        assert_eq!(series.len(), 2);
    }
}
