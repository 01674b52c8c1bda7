use rayon::prelude::*;

use crate::analysis::error::AnalysisError;
use crate::config::ANALYSIS;
use crate::models::{AlignedTable, LagCandidate, LagSweepResult};
use crate::utils::pearson_correlation;

/// Parameters for the exhaustive lag sweep
#[derive(Debug, Clone)]
pub struct LagSweepParams {
    /// Largest lag tested, in weeks (the sweep covers 0..=max inclusive)
    pub max_lag_weeks: u32,
    /// A lag qualifies only when strictly more rows than this survive the shift
    pub min_rows: usize,
}

impl Default for LagSweepParams {
    fn default() -> Self {
        Self {
            max_lag_weeks: ANALYSIS.lag_sweep.default_max_lag_weeks,
            min_rows: ANALYSIS.lag_sweep.min_rows_for_correlation,
        }
    }
}

/// Sweep every integer week-lag and pick the one that best explains the
/// target series.
///
/// For each lag `w` the driver column is shifted by `w*7` calendar days
/// (driver leads target by `w` weeks) and the Pearson correlation is computed
/// over the rows that still have history. "Best" means maximum *absolute*
/// correlation — a strong negative relationship is just as much an answer as
/// a positive one, and the sign is preserved in the result. Ties go to the
/// smallest lag.
///
/// Each lag is independent of the others, so the sweep fans out with rayon.
/// Candidate order in the result is by lag ascending regardless.
pub fn sweep_lags(
    table: &AlignedTable,
    params: &LagSweepParams,
) -> Result<LagSweepResult, AnalysisError> {
    let candidates: Vec<LagCandidate> = (0..=params.max_lag_weeks)
        .into_par_iter()
        .filter_map(|lag_weeks| {
            correlation_at_lag(table, lag_weeks, params.min_rows).map(|correlation| {
                LagCandidate {
                    lag_weeks,
                    correlation,
                }
            })
        })
        .collect();

    if candidates.is_empty() {
        return Err(AnalysisError::InsufficientOverlap {
            max_lag_weeks: params.max_lag_weeks,
            min_rows: params.min_rows,
        });
    }

    // First strictly-greater wins, so the smallest lag takes ties
    let mut best = candidates[0];
    for candidate in &candidates[1..] {
        if candidate.correlation.abs() > best.correlation.abs() {
            best = *candidate;
        }
    }

    Ok(LagSweepResult {
        best_lag_weeks: best.lag_weeks,
        best_correlation: best.correlation,
        candidates,
    })
}

/// Correlation between target values and the driver shifted by `lag_weeks`,
/// or None when too few rows survive (or the coefficient is undefined)
fn correlation_at_lag(table: &AlignedTable, lag_weeks: u32, min_rows: usize) -> Option<f64> {
    let lag_days = lag_weeks as usize * 7;
    let records = table.records();
    if records.len() <= lag_days {
        return None;
    }

    let remaining = records.len() - lag_days;
    if remaining <= min_rows {
        return None;
    }

    let targets: Vec<f64> = records[lag_days..].iter().map(|r| r.target_value).collect();
    let shifted_drivers: Vec<f64> = records[..remaining]
        .iter()
        .map(|r| r.driver_oscillator)
        .collect();

    pearson_correlation(&targets, &shifted_drivers)
}
