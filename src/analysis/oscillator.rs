use crate::config::ANALYSIS;
use crate::models::DailySeries;
use crate::utils::trailing_mean_std;

/// Parameters for the rolling z-score transform
#[derive(Debug, Clone)]
pub struct OscillatorParams {
    /// Trailing window for the percent-change step (days)
    pub change_window_days: usize,
    /// Window for the rolling mean/std used in standardization (days)
    pub rolling_window_days: usize,
    /// Floor on observations before the rolling stats are defined
    pub min_rolling_periods: usize,
}

impl Default for OscillatorParams {
    fn default() -> Self {
        Self {
            change_window_days: ANALYSIS.oscillator.change_window_days,
            rolling_window_days: ANALYSIS.oscillator.rolling_window_days,
            min_rolling_periods: ANALYSIS.oscillator.min_rolling_periods,
        }
    }
}

impl OscillatorParams {
    fn effective_min_periods(&self) -> usize {
        self.rolling_window_days.min(self.min_rolling_periods)
    }
}

/// Convert a level series into a rolling-normalized oscillator.
///
/// Three steps per date: trailing percent change over `change_window_days`,
/// trailing rolling mean/sample-std of that percent change over
/// `rolling_window_days`, then the z-score of the day's percent change.
///
/// Dates where any step is undefined (missing lookback, not enough rolling
/// history, zero std) get an oscillator value of exactly 0. Early-window
/// observations are therefore biased toward "neutral" instead of dropped;
/// downstream consumers count on every date having a usable value, and the
/// zero fill is kept for comparability with historical output.
///
/// A zero base level also makes the percent change undefined and takes the
/// neutral fill. Tools that divide through regardless emit an infinity there
/// and poison the rolling windows that follow; real market-cap and M2 levels
/// never hit zero, so this divergence only shows up on synthetic input.
pub fn zscore_oscillator(series: &DailySeries, params: &OscillatorParams) -> DailySeries {
    let values = series.values();
    let n = values.len();

    // Step 1: trailing percent change, NaN while the lookback date is out of range
    let mut pct_change = vec![f64::NAN; n];
    for t in params.change_window_days.min(n)..n {
        let base = values[t - params.change_window_days];
        if base != 0.0 {
            pct_change[t] = (values[t] - base) / base * 100.0;
        }
    }

    // Step 2: rolling stats over the percent-change series
    let stats = trailing_mean_std(
        &pct_change,
        params.rolling_window_days,
        params.effective_min_periods(),
    );

    // Step 3: z-score, with the explicit zero fill for undefined dates
    let oscillator = (0..n)
        .map(|t| match stats[t] {
            Some((mean, std)) if pct_change[t].is_finite() && std > 0.0 => {
                (pct_change[t] - mean) / std
            }
            _ => 0.0,
        })
        .collect();

    series.with_values(oscillator)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn first_day() -> NaiveDate {
        "2020-01-01".parse().unwrap()
    }

    fn small_params() -> OscillatorParams {
        OscillatorParams {
            change_window_days: 1,
            rolling_window_days: 3,
            min_rolling_periods: 2,
        }
    }

    #[test]
    fn early_dates_are_neutral_zero() {
        let series = DailySeries::new(first_day(), vec![1.0, 2.0, 3.0, 5.0, 8.0]);
        let osc = zscore_oscillator(&series, &small_params());

        // t=0 has no lookback, t=1 has only one percent-change observation:
        // both below the min-periods floor, both exactly zero
        assert_eq!(osc.values()[0], 0.0);
        assert_eq!(osc.values()[1], 0.0);
        assert_ne!(osc.values()[2], 0.0, "enough history from t=2 on");
    }

    #[test]
    fn neutrality_floor_matches_min_periods_with_default_style_params() {
        let params = OscillatorParams {
            change_window_days: 2,
            rolling_window_days: 10,
            min_rolling_periods: 4,
        };
        let values: Vec<f64> = (1..=20).map(|i| (i * i) as f64).collect();
        let osc = zscore_oscillator(&DailySeries::new(first_day(), values), &params);

        // First percent change exists at t=2; the fourth at t=5. Everything
        // before that must be exactly zero, the date after must not be.
        for t in 0..5 {
            assert_eq!(osc.values()[t], 0.0, "t={t} is inside the neutral floor");
        }
        assert_ne!(osc.values()[5], 0.0);
    }

    #[test]
    fn known_small_case() {
        // values -> pct_change(1d): [NaN, 100, 50, 66.667]
        let series = DailySeries::new(first_day(), vec![1.0, 2.0, 3.0, 5.0]);
        let osc = zscore_oscillator(&series, &small_params());

        // t=2: window [100, 50], mean 75, sample std 35.3553
        let expected_t2 = (50.0 - 75.0) / 35.355_339_059_327_38;
        assert!((osc.values()[2] - expected_t2).abs() < 1e-9);

        // t=3: window [100, 50, 66.667], mean 72.222, sample std 25.459
        assert!((osc.values()[3] - (-0.218_23)).abs() < 1e-3);
    }

    #[test]
    fn zero_std_yields_zero_not_nan() {
        // Constant growth: every percent change identical, rolling std is 0
        let values: Vec<f64> = (0..8).map(|i| 2.0_f64.powi(i)).collect();
        let osc = zscore_oscillator(&DailySeries::new(first_day(), values), &small_params());

        assert!(osc.values().iter().all(|&v| v == 0.0));
    }

    #[test]
    fn zero_base_value_stays_neutral() {
        let series = DailySeries::new(first_day(), vec![0.0, 1.0, 2.0, 4.0, 8.0]);
        let osc = zscore_oscillator(&series, &small_params());

        // Percent change off a zero base is undefined; the date remains neutral
        // and never poisons later windows
        assert!(osc.values().iter().all(|v| v.is_finite()));
        assert_eq!(osc.values()[1], 0.0);
    }
}
