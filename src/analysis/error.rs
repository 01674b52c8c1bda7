use thiserror::Error;

/// Failures the core analysis reports instead of degrading silently.
///
/// A wrong "best lag" is worse than a visible failure, so none of these are
/// recovered from inside the pipeline; the caller decides how to present them.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AnalysisError {
    /// Fewer than two dated observations, nothing to place on a daily grid
    #[error("insufficient data: got {observations} observation(s), need at least 2 to resample")]
    InsufficientData { observations: usize },

    /// The joined series share no dates at all, typically because the two
    /// inputs cover disjoint historical ranges
    #[error("no overlap: target and driver series share no dates")]
    NoOverlap,

    /// Every tested lag kept too few aligned rows to correlate. Distinct from
    /// NoOverlap: some rows joined, just never more than the floor.
    #[error(
        "insufficient overlap: no lag in 0..={max_lag_weeks} weeks kept more than {min_rows} aligned rows"
    )]
    InsufficientOverlap { max_lag_weeks: u32, min_rows: usize },
}
