// Core modules
pub mod analysis;
pub mod config;
pub mod data;
pub mod domain;
pub mod models;
pub mod utils;

// Re-export commonly used types
pub use analysis::{AnalysisError, AnalysisParams, run_analysis};
pub use data::{LoadError, SeriesSource};
pub use domain::{Observation, RawSeries};
pub use models::{
    AlignedRecord, AlignedTable, AnalysisReport, DailySeries, LagCandidate, LagSweepResult, Zone,
    ZoneKind,
};

// CLI argument parsing
use std::path::PathBuf;

use anyhow::bail;
use clap::Parser;

use crate::config::ANALYSIS;

#[derive(Parser, Debug, Clone)]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Load the target (market cap) series from this CSV instead of CoinGecko.
    /// Must be given together with --driver-csv.
    #[arg(long)]
    pub target_csv: Option<PathBuf>,

    /// Load the driver (M2) series from this CSV instead of FRED
    #[arg(long)]
    pub driver_csv: Option<PathBuf>,

    /// Maximum lag to sweep, in weeks
    #[arg(long, default_value_t = ANALYSIS.lag_sweep.default_max_lag_weeks)]
    pub max_lag_weeks: u32,

    /// Trailing percent-change window for the z-score oscillator, in days
    #[arg(long, default_value_t = ANALYSIS.oscillator.change_window_days)]
    pub zscore_window: usize,

    /// Write the aligned (date, target, oscillator) table as CSV to this path
    #[arg(long)]
    pub export: Option<PathBuf>,

    /// Write the full report (candidate curve, zones, table) as JSON to this path
    #[arg(long)]
    pub export_report: Option<PathBuf>,
}

impl Cli {
    pub fn validate(&self) -> anyhow::Result<()> {
        if self.target_csv.is_some() != self.driver_csv.is_some() {
            bail!("--target-csv and --driver-csv must be given together");
        }

        let lag_range = ANALYSIS.lag_sweep.min_lag_weeks..=ANALYSIS.lag_sweep.max_lag_weeks_ceiling;
        if !lag_range.contains(&self.max_lag_weeks) {
            bail!(
                "--max-lag-weeks {} is outside the sane range {}..={} weeks",
                self.max_lag_weeks,
                lag_range.start(),
                lag_range.end()
            );
        }

        if self.zscore_window < ANALYSIS.min_change_window_days {
            bail!(
                "--zscore-window {} is below the minimum of {} days",
                self.zscore_window,
                ANALYSIS.min_change_window_days
            );
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn cli(max_lag_weeks: u32, zscore_window: usize) -> Cli {
        Cli {
            target_csv: None,
            driver_csv: None,
            max_lag_weeks,
            zscore_window,
            export: None,
            export_report: None,
        }
    }

    #[test]
    fn default_style_arguments_validate() {
        assert!(cli(20, 90).validate().is_ok());
        assert!(cli(1, 7).validate().is_ok());
        assert!(cli(52, 365).validate().is_ok());
    }

    #[test]
    fn out_of_range_arguments_are_rejected() {
        assert!(cli(0, 90).validate().is_err());
        assert!(cli(53, 90).validate().is_err());
        assert!(cli(20, 6).validate().is_err());
    }

    #[test]
    fn csv_paths_must_come_in_pairs() {
        let mut args = cli(20, 90);
        args.target_csv = Some("target.csv".into());

        assert!(args.validate().is_err());

        args.driver_csv = Some("driver.csv".into());
        assert!(args.validate().is_ok());
    }
}
