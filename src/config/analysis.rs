//! Analysis and computation configuration

/// Settings for the rolling z-score oscillator
pub struct OscillatorSettings {
    // Trailing window for the percent-change step (days)
    pub change_window_days: usize,
    // Window for the rolling mean/std used in standardization (days)
    pub rolling_window_days: usize,
    // Minimum-periods floor: standardization needs at least
    // min(rolling_window_days, min_rolling_periods) observations
    pub min_rolling_periods: usize,
}

/// Settings for the lag sweep
pub struct LagSweepSettings {
    pub default_max_lag_weeks: u32,
    // Sane CLI range for max lag
    pub min_lag_weeks: u32,
    pub max_lag_weeks_ceiling: u32,
    // A lag only produces a candidate when strictly more rows than this survive the shift
    pub min_rows_for_correlation: usize,
}

/// Settings for zone segmentation of the shifted oscillator
pub struct ZoneSettings {
    // Trailing moving-average window applied before sign classification (days).
    // Min-periods is 1 so the very first date already gets a zone.
    pub smoothing_window_days: usize,
}

/// The Master Analysis Configuration
pub struct AnalysisConfig {
    pub oscillator: OscillatorSettings,
    pub lag_sweep: LagSweepSettings,
    pub zones: ZoneSettings,
    // Smallest percent-change window the CLI accepts (days)
    pub min_change_window_days: usize,
}

pub const ANALYSIS: AnalysisConfig = AnalysisConfig {
    oscillator: OscillatorSettings {
        change_window_days: 90,
        rolling_window_days: 252, // one trading year
        min_rolling_periods: 90,
    },

    lag_sweep: LagSweepSettings {
        default_max_lag_weeks: 20,
        min_lag_weeks: 1,
        max_lag_weeks_ceiling: 52,
        min_rows_for_correlation: 30,
    },

    zones: ZoneSettings {
        smoothing_window_days: 90,
    },

    min_change_window_days: 7,
};
