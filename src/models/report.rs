use serde::{Deserialize, Serialize};

use crate::models::aligned::AlignedTable;
use crate::models::zones::Zone;

/// Correlation measured at one tested lag
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LagCandidate {
    pub lag_weeks: u32,
    pub correlation: f64,
}

/// Outcome of a full lag sweep.
///
/// `candidates` holds every lag that had enough aligned rows, ordered by
/// `lag_weeks` ascending. Callers plot the whole curve, not just the optimum,
/// so the full sequence is always carried along.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LagSweepResult {
    pub best_lag_weeks: u32,
    pub best_correlation: f64,
    pub candidates: Vec<LagCandidate>,
}

/// Everything one analysis run produces for the presentation layer
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AnalysisReport {
    pub sweep: LagSweepResult,
    /// Expansion/contraction segmentation of the lag-shifted, smoothed driver
    pub zones: Vec<Zone>,
    /// The unshifted date-aligned join, for tabular export
    pub aligned: AlignedTable,
}

impl AnalysisReport {
    pub fn best_lag_weeks(&self) -> u32 {
        self.sweep.best_lag_weeks
    }

    pub fn best_correlation(&self) -> f64 {
        self.sweep.best_correlation
    }
}
