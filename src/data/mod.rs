// Series loaders: remote APIs and local CSV files.
// Everything network/file shaped lives here; the analysis core only ever
// sees validated RawSeries values.

pub mod coingecko;
pub mod csv_file;
pub mod error;
pub mod fred;

// Re-export commonly used types
pub use coingecko::CoinGeckoSource;
pub use csv_file::{CsvFileSource, SchemaHint};
pub use error::LoadError;
pub use fred::FredSource;

use async_trait::async_trait;

use crate::Cli;
use crate::domain::RawSeries;

/// A place a series can be loaded from
#[async_trait]
pub trait SeriesSource: Send + Sync {
    /// Human-readable name for logging and error messages
    fn name(&self) -> &'static str;

    async fn load(&self) -> Result<RawSeries, LoadError>;
}

/// Pick the target and driver sources from the CLI: local CSV files when both
/// paths were given, the remote APIs otherwise
pub fn select_sources(args: &Cli) -> (Box<dyn SeriesSource>, Box<dyn SeriesSource>) {
    match (&args.target_csv, &args.driver_csv) {
        (Some(target_path), Some(driver_path)) => (
            Box::new(CsvFileSource::new(target_path.clone(), SchemaHint::Target)),
            Box::new(CsvFileSource::new(driver_path.clone(), SchemaHint::Driver)),
        ),
        _ => (Box::new(CoinGeckoSource), Box::new(FredSource)),
    }
}

/// Load both series, failing the run on the first loader error
pub async fn load_pair(
    target_source: &dyn SeriesSource,
    driver_source: &dyn SeriesSource,
) -> Result<(RawSeries, RawSeries), LoadError> {
    log::info!("Loading target series from {}...", target_source.name());
    let target = target_source.load().await?;
    log::info!("Loaded {} target observations", target.len());

    log::info!("Loading driver series from {}...", driver_source.name());
    let driver = driver_source.load().await?;
    log::info!("Loaded {} driver observations", driver.len());

    Ok((target, driver))
}
