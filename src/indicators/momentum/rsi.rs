//! RSI (Relative Strength Index) indicator

use crate::common::math::rolling_mean;

/// Calculate the RSI series for a sequence of closing prices
///
/// RSI = 100 - (100 / (1 + RS))
/// RS = Average Gain / Average Loss
///
/// Output is aligned with `closes`: entry `i` is `Some` only once `period`
/// price changes are available, so the first `period` entries are `None`.
/// Defined values always lie in [0, 100].
pub fn rsi_series(closes: &[f64], period: usize) -> Vec<Option<f64>> {
    let mut gains: Vec<Option<f64>> = Vec::with_capacity(closes.len());
    let mut losses: Vec<Option<f64>> = Vec::with_capacity(closes.len());

    for i in 0..closes.len() {
        if i == 0 {
            // no prior close, the first change is undefined
            gains.push(None);
            losses.push(None);
            continue;
        }
        let change = closes[i] - closes[i - 1];
        gains.push(Some(change.max(0.0)));
        losses.push(Some((-change).max(0.0)));
    }

    let avg_gains = rolling_mean(&gains, period);
    let avg_losses = rolling_mean(&losses, period);

    avg_gains
        .into_iter()
        .zip(avg_losses)
        .map(|(gain, loss)| match (gain, loss) {
            (Some(avg_gain), Some(avg_loss)) => rsi_value(avg_gain, avg_loss),
            _ => None,
        })
        .collect()
}

/// Most recent RSI value, if the series is long enough to produce one.
pub fn latest_rsi(closes: &[f64], period: usize) -> Option<f64> {
    rsi_series(closes, period).last().copied().flatten()
}

fn rsi_value(avg_gain: f64, avg_loss: f64) -> Option<f64> {
    if avg_loss == 0.0 {
        // a window with no movement at all has no defined strength ratio
        if avg_gain == 0.0 {
            return None;
        }
        return Some(100.0);
    }

    let rs = avg_gain / avg_loss;
    Some(100.0 - (100.0 / (1.0 + rs)))
}

/// Conventional RSI threshold labels.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RsiZone {
    Overbought,
    Oversold,
    Neutral,
}

impl RsiZone {
    /// Classify an RSI value against overbought/oversold thresholds.
    /// Values sitting exactly on a threshold are neutral.
    pub fn classify(rsi: f64, overbought: f64, oversold: f64) -> Self {
        if rsi > overbought {
            RsiZone::Overbought
        } else if rsi < oversold {
            RsiZone::Oversold
        } else {
            RsiZone::Neutral
        }
    }
}
