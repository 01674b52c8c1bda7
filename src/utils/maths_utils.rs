use statrs::statistics::Statistics;

/// Pearson correlation coefficient between two equal-length samples.
///
/// Returns None when fewer than two pairs are supplied or either sample has
/// zero variance (the coefficient is undefined, not zero, in those cases).
pub fn pearson_correlation(xs: &[f64], ys: &[f64]) -> Option<f64> {
    debug_assert_eq!(xs.len(), ys.len(), "samples must be paired");

    let n = xs.len();
    if n < 2 {
        return None;
    }

    let mean_x = xs.iter().mean();
    let mean_y = ys.iter().mean();

    let mut cov = 0.0;
    let mut var_x = 0.0;
    let mut var_y = 0.0;
    for (&x, &y) in xs.iter().zip(ys.iter()) {
        let dx = x - mean_x;
        let dy = y - mean_y;
        cov += dx * dy;
        var_x += dx * dx;
        var_y += dy * dy;
    }

    if var_x <= 0.0 || var_y <= 0.0 {
        return None;
    }

    let r = cov / (var_x * var_y).sqrt();
    // Guard against floating-point drift just past the ends of the interval
    r.is_finite().then(|| r.clamp(-1.0, 1.0))
}

/// Trailing moving average with a min-periods of 1: the first dates average
/// over however much history exists so every index gets a value
pub fn trailing_mean(values: &[f64], window: usize) -> Vec<f64> {
    assert!(window > 0, "window must be positive");

    (0..values.len())
        .map(|t| {
            let start = (t + 1).saturating_sub(window);
            values[start..=t].iter().mean()
        })
        .collect()
}

/// Trailing rolling mean and sample standard deviation.
///
/// Non-finite entries inside a window are ignored, and a window yields stats
/// only once it holds at least `min_periods` finite observations. Output is
/// index-aligned with the input.
pub fn trailing_mean_std(
    values: &[f64],
    window: usize,
    min_periods: usize,
) -> Vec<Option<(f64, f64)>> {
    assert!(window > 0, "window must be positive");

    (0..values.len())
        .map(|t| {
            let start = (t + 1).saturating_sub(window);
            let finite: Vec<f64> = values[start..=t]
                .iter()
                .copied()
                .filter(|v| v.is_finite())
                .collect();

            if finite.len() < min_periods.max(2) {
                return None;
            }

            let mean = finite.iter().mean();
            let std_dev = finite.iter().std_dev();
            std_dev.is_finite().then_some((mean, std_dev))
        })
        .collect()
}
