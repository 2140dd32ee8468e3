//! Helpers for magnetization time series.

/// Trailing moving average of `series`.
///
/// Element 0 is copied unchanged; element `i > 0` is the mean of the
/// window `series[max(0, i - window) .. i]`, which excludes the current
/// point. Early elements therefore average over shorter, growing
/// windows until the full width is available.
///
/// A zero `window` is treated as 1. An empty series stays empty.
pub fn moving_average(series: &[f64], window: usize) -> Vec<f64> {
    if series.is_empty() {
        return Vec::new();
    }
    let window = window.max(1);
    let mut out = Vec::with_capacity(series.len());
    out.push(series[0]);
    for i in 1..series.len() {
        let start = i.saturating_sub(window);
        let slice = &series[start..i];
        out.push(slice.iter().sum::<f64>() / slice.len() as f64);
    }
    out
}

/// Mean of the last `min(n, len)` entries of `series`.
///
/// `None` when the series is empty or `n` is zero. This is the
/// equilibrium estimate of a run: the burn-in prefix is ignored and
/// only the settled tail contributes.
pub fn tail_mean(series: &[f64], n: usize) -> Option<f64> {
    if series.is_empty() || n == 0 {
        return None;
    }
    let tail = &series[series.len().saturating_sub(n)..];
    Some(tail.iter().sum::<f64>() / tail.len() as f64)
}

/// `count` evenly spaced values from `start` to `stop`, both inclusive.
///
/// `count == 1` yields `[start]`; `count == 0` yields nothing.
pub fn linspace(start: f64, stop: f64, count: usize) -> Vec<f64> {
    match count {
        0 => Vec::new(),
        1 => vec![start],
        _ => (0..count)
            .map(|i| start + (stop - start) * (i as f64 / (count - 1) as f64))
            .collect(),
    }
}
