//! Oscillator Indicators
//!
//! This module provides the Relative Strength Index in two smoothings:
//! - `rsi`: simple rolling mean of gains and losses (the dashboard's RSI)
//! - `rsi_wilder`: Wilder's recursive smoothing

use crate::common::{diff, gains_losses, rolling, sum, unavailable_vec, Point};

/// Conventional RSI lookback
pub const RSI_PERIOD: usize = 14;

/// RSI from average gain and average loss.
///
/// A window with no losses reads exactly 100, whatever the gains.
#[inline]
fn rsi_from_averages(avg_gain: f64, avg_loss: f64) -> f64 {
    if avg_loss == 0.0 {
        return 100.0;
    }
    let rs = avg_gain / avg_loss;
    100.0 - 100.0 / (1.0 + rs)
}

/// Relative Strength Index (simple-average RSI)
///
/// Measures momentum by comparing magnitude of recent gains vs losses.
///
/// # Formula
/// gain[i] = max(close[i] - close[i-1], 0), loss[i] = max(close[i-1] - close[i], 0)
/// RS = SMA(gain, period) / SMA(loss, period)
/// RSI = 100 - (100 / (1 + RS))
///
/// Unlike [`rsi_wilder`], every value is a plain mean over the trailing
/// `period` steps.
///
/// # Arguments
/// * `closes` - Closing prices
/// * `period` - Lookback period (typically [`RSI_PERIOD`])
///
/// # Returns
/// Values in `[0, 100]` aligned with `closes`. Positions `0..period` are
/// `None`; position 0 never has a value since it has no prior close.
pub fn rsi(closes: &[f64], period: usize) -> Vec<Point> {
    let n = closes.len();
    let mut result = unavailable_vec(n);

    let changes = diff(closes);
    let (gains, losses) = gains_losses(&changes);

    let avg_gains = rolling(&gains, period, |w| sum(w) / period as f64);
    let avg_losses = rolling(&losses, period, |w| sum(w) / period as f64);

    // change j is the move into close j + 1
    for (j, (ag, al)) in avg_gains.iter().zip(avg_losses.iter()).enumerate() {
        if let (Some(ag), Some(al)) = (ag, al) {
            result[j + 1] = Some(rsi_from_averages(*ag, *al));
        }
    }

    result
}

/// Relative Strength Index (Wilder's smoothing)
///
/// Same alignment and zero-loss rule as [`rsi`]. The first average is a
/// simple mean of the first `period` changes; later averages follow
/// avg = (prev × (period - 1) + current) / period.
pub fn rsi_wilder(closes: &[f64], period: usize) -> Vec<Point> {
    let n = closes.len();
    let mut result = unavailable_vec(n);
    if period == 0 || n < period + 1 {
        return result;
    }

    let changes = diff(closes);
    let (gains, losses) = gains_losses(&changes);

    let mut avg_gain = sum(&gains[..period]) / period as f64;
    let mut avg_loss = sum(&losses[..period]) / period as f64;
    result[period] = Some(rsi_from_averages(avg_gain, avg_loss));

    for i in period..changes.len() {
        avg_gain = (avg_gain * (period - 1) as f64 + gains[i]) / period as f64;
        avg_loss = (avg_loss * (period - 1) as f64 + losses[i]) / period as f64;
        result[i + 1] = Some(rsi_from_averages(avg_gain, avg_loss));
    }

    result
}
