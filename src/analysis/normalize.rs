use crate::analysis::error::AnalysisError;
use crate::domain::RawSeries;
use crate::models::DailySeries;

/// Resample an irregular series onto a contiguous daily grid.
///
/// The grid spans exactly `[first observed date, last observed date]`; gaps
/// between known observations are filled by linear interpolation. Nothing is
/// extrapolated past either end of the observed range.
pub fn resample_daily(series: &RawSeries) -> Result<DailySeries, AnalysisError> {
    let observations = series.observations();
    if observations.len() < 2 {
        return Err(AnalysisError::InsufficientData {
            observations: observations.len(),
        });
    }

    let first_day = observations[0].date;
    let last_day = observations[observations.len() - 1].date;
    let grid_len = (last_day - first_day).num_days() as usize + 1;

    let mut values = vec![f64::NAN; grid_len];
    for obs in observations {
        values[(obs.date - first_day).num_days() as usize] = obs.value;
    }

    interpolate_gaps(&mut values);

    Ok(DailySeries::new(first_day, values))
}

/// Fill NaN runs between known values by linear interpolation.
/// The first and last entries are known by construction.
fn interpolate_gaps(values: &mut [f64]) {
    let mut prev_known = 0;

    for idx in 1..values.len() {
        if values[idx].is_nan() {
            continue;
        }

        let gap = idx - prev_known;
        if gap > 1 {
            let lo = values[prev_known];
            let step = (values[idx] - lo) / gap as f64;
            for offset in 1..gap {
                values[prev_known + offset] = lo + step * offset as f64;
            }
        }
        prev_known = idx;
    }
}
