// Result models for the lag analysis pipeline
// These modules contain pure data structures independent of any presentation layer

pub mod aligned;
pub mod report;
pub mod timeseries;
pub mod zones;

// Re-export key types for convenience
pub use aligned::{AlignedRecord, AlignedTable};
pub use report::{AnalysisReport, LagCandidate, LagSweepResult};
pub use timeseries::DailySeries;
pub use zones::{Zone, ZoneKind, day_totals};
