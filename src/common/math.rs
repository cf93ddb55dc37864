//! Shared numeric helpers for the indicator layer.

/// Trailing simple moving average over a fixed window.
///
/// `out[i]` is the arithmetic mean of `values[i - window + 1..=i]` and is
/// `Some` only when every sample in that window is `Some`; the first
/// `window - 1` positions never have a full window. Output length always
/// equals input length, an empty input yields an empty output.
pub fn rolling_mean(values: &[Option<f64>], window: usize) -> Vec<Option<f64>> {
    assert!(window >= 1, "window must be at least 1");

    let mut out = vec![None; values.len()];
    for i in 0..values.len() {
        if i + 1 < window {
            continue;
        }
        let samples = &values[i + 1 - window..=i];
        if samples.iter().all(Option::is_some) {
            let sum: f64 = samples.iter().flatten().sum();
            out[i] = Some(sum / window as f64);
        }
    }
    out
}
