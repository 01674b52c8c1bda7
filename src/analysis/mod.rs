// Analysis algorithms: resampling, oscillator transform, alignment,
// lag sweep and zone segmentation

pub mod align;
pub mod error;
pub mod lag_sweep;
pub mod normalize;
pub mod oscillator;
pub mod pipeline;
pub mod segmentation;

// Re-export commonly used items
pub use align::align;
pub use error::AnalysisError;
pub use lag_sweep::{LagSweepParams, sweep_lags};
pub use normalize::resample_daily;
pub use oscillator::{OscillatorParams, zscore_oscillator};
pub use pipeline::{AnalysisParams, run_analysis};
pub use segmentation::{SegmentationParams, segment_zones};
