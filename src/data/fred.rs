use std::time::Duration;

use async_trait::async_trait;
use chrono::NaiveDate;

use crate::config::SOURCES;
use crate::data::error::LoadError;
use crate::data::SeriesSource;
use crate::domain::{Observation, RawSeries};

const SOURCE_NAME: &str = "FRED M2";

/// Driver-series loader: the M2 monetary aggregate from the FRED CSV
/// endpoint. Monthly observations, in billions, resampled later by the core.
pub struct FredSource;

#[async_trait]
impl SeriesSource for FredSource {
    fn name(&self) -> &'static str {
        SOURCE_NAME
    }

    async fn load(&self) -> Result<RawSeries, LoadError> {
        let cfg = &SOURCES.fred;
        let url = format!("{}?id={}&cosd={}", cfg.csv_url, cfg.series_id, cfg.start_date);

        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(SOURCES.client.timeout_secs))
            .build()
            .map_err(|e| fetch_failed(e.to_string()))?;

        let response = client
            .get(&url)
            .send()
            .await
            .map_err(|e| fetch_failed(e.to_string()))?;

        if !response.status().is_success() {
            return Err(fetch_failed(format!("HTTP status {}", response.status())));
        }

        let body = response
            .text()
            .await
            .map_err(|e| fetch_failed(e.to_string()))?;

        parse_fred_csv(body.as_bytes())
    }
}

/// Parse the two-column fredgraph CSV. FRED marks missing observations with
/// a bare "."; those rows are skipped rather than treated as errors.
fn parse_fred_csv(bytes: &[u8]) -> Result<RawSeries, LoadError> {
    let mut reader = csv::Reader::from_reader(bytes);
    let mut observations = Vec::new();

    for record in reader.records() {
        let record = record.map_err(|e| parse_failed(e.to_string()))?;
        let (Some(date_cell), Some(value_cell)) = (record.get(0), record.get(1)) else {
            continue;
        };

        let Ok(date) = NaiveDate::parse_from_str(date_cell.trim(), "%Y-%m-%d") else {
            continue;
        };
        let Ok(value) = value_cell.trim().parse::<f64>() else {
            continue; // "." or otherwise unparseable
        };

        observations.push(Observation::new(date, value));
    }

    let series = RawSeries::from_observations(observations);
    if series.is_empty() {
        return Err(parse_failed("CSV contained no usable rows".to_string()));
    }
    Ok(series)
}

fn fetch_failed(reason: String) -> LoadError {
    LoadError::FetchFailed {
        source_name: SOURCE_NAME,
        reason,
    }
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
    fn parses_fredgraph_output_and_skips_missing_markers() {
        let body = b"DATE,M2SL\n2013-01-01,10460.3\n2013-02-01,.\n2013-03-01,10564.7\n";
        let series = parse_fred_csv(body).unwrap();

        assert_eq!(series.len(), 2, "the '.' row is skipped");
        assert_eq!(series.observations()[0].value, 10460.3);
        assert_eq!(
            series.first_date().unwrap(),
            "2013-01-01".parse::<NaiveDate>().unwrap()
        );
    }

    #[test]
    fn empty_payload_is_a_parse_failure() {
        let err = parse_fred_csv(b"DATE,M2SL\n").unwrap_err();
        assert!(matches!(err, LoadError::ParseFailed { .. }));
    }
}
