use crate::analysis::align::align;
use crate::analysis::error::AnalysisError;
use crate::analysis::lag_sweep::{LagSweepParams, sweep_lags};
use crate::analysis::normalize::resample_daily;
use crate::analysis::oscillator::{OscillatorParams, zscore_oscillator};
use crate::analysis::segmentation::{SegmentationParams, segment_zones};
use crate::domain::RawSeries;
use crate::models::AnalysisReport;

/// All knobs for one analysis run, grouped per stage
#[derive(Debug, Clone, Default)]
pub struct AnalysisParams {
    pub oscillator: OscillatorParams,
    pub sweep: LagSweepParams,
    pub segmentation: SegmentationParams,
}

/// Run the full alignment and lag-correlation pipeline.
///
/// Both raw series are resampled onto daily grids, the driver becomes a
/// rolling z-score oscillator, the two are date-joined, every week-lag up to
/// the configured maximum is tested, and the lag-shifted smoothed oscillator
/// is segmented into expansion/contraction zones.
///
/// Pure function over its inputs: every intermediate value is created here
/// and dropped when the report is returned, so concurrent runs never share
/// state.
pub fn run_analysis(
    target: &RawSeries,
    driver: &RawSeries,
    params: &AnalysisParams,
) -> Result<AnalysisReport, AnalysisError> {
    let target_daily = resample_daily(target)?;
    let driver_daily = resample_daily(driver)?;
    log::info!(
        "Resampled target to {} days, driver to {} days",
        target_daily.len(),
        driver_daily.len()
    );

    let driver_oscillator = zscore_oscillator(&driver_daily, &params.oscillator);

    let aligned = align(&target_daily, &driver_oscillator)?;
    log::info!(
        "Aligned {} rows covering {} → {}",
        aligned.len(),
        aligned.first_date().expect("aligned table is non-empty"),
        aligned.last_date().expect("aligned table is non-empty"),
    );

    let sweep = sweep_lags(&aligned, &params.sweep)?;
    log::info!(
        "Best lag: {} weeks (correlation {:.3}) out of {} candidates",
        sweep.best_lag_weeks,
        sweep.best_correlation,
        sweep.candidates.len()
    );

    let shifted = aligned.shift_driver(sweep.best_lag_weeks as usize * 7);
    let zones = segment_zones(&shifted, &params.segmentation);
    log::info!("Segmented {} expansion/contraction zones", zones.len());

    Ok(AnalysisReport {
        sweep,
        zones,
        aligned,
    })
}
