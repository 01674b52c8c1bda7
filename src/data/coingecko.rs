use std::time::Duration;

use async_trait::async_trait;
use chrono::DateTime;
use serde::Deserialize;

use crate::config::SOURCES;
use crate::data::error::LoadError;
use crate::data::SeriesSource;
use crate::domain::{Observation, RawSeries};

const SOURCE_NAME: &str = "CoinGecko market cap";

/// Target-series loader: bitcoin market caps from the CoinGecko market-chart
/// endpoint, scaled to billions and multiplied up to approximate the total
/// crypto market
pub struct CoinGeckoSource;

/// The slice of the market_chart payload we care about.
/// Each entry is a `[timestamp_ms, market_cap]` pair.
#[derive(Debug, Deserialize)]
struct MarketChart {
    market_caps: Vec<(i64, f64)>,
}

#[async_trait]
impl SeriesSource for CoinGeckoSource {
    fn name(&self) -> &'static str {
        SOURCE_NAME
    }

    async fn load(&self) -> Result<RawSeries, LoadError> {
        let cfg = &SOURCES.coingecko;
        let url = format!(
            "{}?vs_currency={}&days={}&interval=daily",
            cfg.market_chart_url, cfg.vs_currency, cfg.days
        );

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

        let chart: MarketChart = response.json().await.map_err(|e| LoadError::ParseFailed {
            source_name: SOURCE_NAME,
            reason: e.to_string(),
        })?;

        let observations = chart
            .market_caps
            .into_iter()
            .filter_map(|(timestamp_ms, market_cap)| {
                let date = DateTime::from_timestamp_millis(timestamp_ms)?.date_naive();
                let billions = market_cap / 1e9 * cfg.market_cap_multiplier;
                Some(Observation::new(date, billions))
            })
            .collect();

        let series = RawSeries::from_observations(observations);
        if series.is_empty() {
            return Err(LoadError::ParseFailed {
                source_name: SOURCE_NAME,
                reason: "payload contained no market cap entries".to_string(),
            });
        }
        Ok(series)
    }
}

fn fetch_failed(reason: String) -> LoadError {
    LoadError::FetchFailed {
        source_name: SOURCE_NAME,
        reason,
    }
}
