//! Configuration module for the liquidity-lag application.

pub mod analysis;
pub mod sources;

// Re-export commonly used items
pub use analysis::ANALYSIS;
pub use sources::SOURCES;
