use thiserror::Error;

/// Loader-level failures. A failed load is fatal for the analysis run; the
/// pipeline never proceeds on partial data and no retries happen here.
#[derive(Debug, Error)]
pub enum LoadError {
    /// The remote endpoint could not be reached or answered badly
    #[error("fetch failed for {source_name}: {reason}")]
    FetchFailed {
        source_name: &'static str,
        reason: String,
    },

    /// The payload arrived but could not be turned into a usable series
    #[error("parse failed for {source_name}: {reason}")]
    ParseFailed {
        source_name: &'static str,
        reason: String,
    },
}
