//! Moving Average Indicators
//!
//! - SMA: Simple Moving Average
//! - EMA: Exponential Moving Average, seeded with the SMA of its first window

use crate::common::{rolling, sum, unavailable_vec, Point};

/// Simple Moving Average (SMA)
///
/// The arithmetic mean of the last `period` values.
///
/// # Formula
/// SMA = (P1 + P2 + ... + Pn) / n
///
/// # Arguments
/// * `closes` - Closing prices
/// * `period` - Number of periods to average
///
/// # Returns
/// Vector of same length as input, `None` for the first `period - 1`
/// positions. A period of zero or longer than the input yields all `None`.
///
/// # Example
/// ```
/// use dashboard_indicators::sma;
/// let closes = vec![10.0, 11.0, 12.0, 13.0, 14.0];
/// let result = sma(&closes, 3);
/// assert_eq!(result, vec![None, None, Some(11.0), Some(12.0), Some(13.0)]);
/// ```
pub fn sma(closes: &[f64], period: usize) -> Vec<Point> {
    // Each window is summed from scratch so values match the naive definition
    rolling(closes, period, |window| sum(window) / period as f64)
}

/// Exponential Moving Average (EMA)
///
/// Gives more weight to recent values using exponential decay.
///
/// # Formula
/// k = 2 / (period + 1)
/// EMA = Value × k + Previous EMA × (1 - k)
///
/// The first EMA is the simple average of the first `period` available
/// values and sits at the position of the last of them. An unavailable
/// input after the seed yields an unavailable output and leaves the running
/// EMA untouched, so the next available value continues from the last one.
///
/// # Arguments
/// * `values` - Values, possibly with gaps (e.g. another indicator's output)
/// * `period` - Number of periods (determines smoothing factor)
pub fn ema(values: &[Point], period: usize) -> Vec<Point> {
    let n = values.len();
    let mut result = unavailable_vec(n);
    if period == 0 {
        return result;
    }

    // Locate the seed: position of the `period`-th available value
    let mut seed_sum = 0.0;
    let mut seen = 0;
    let mut seed_idx = None;
    for (i, v) in values.iter().enumerate() {
        if let Some(v) = v {
            seed_sum += v;
            seen += 1;
            if seen == period {
                seed_idx = Some(i);
                break;
            }
        }
    }

    let Some(start_idx) = seed_idx else {
        return result;
    };

    let k = 2.0 / (period as f64 + 1.0);
    let mut prev = seed_sum / period as f64;
    result[start_idx] = Some(prev);

    for i in (start_idx + 1)..n {
        if let Some(v) = values[i] {
            prev = v * k + prev * (1.0 - k);
            result[i] = Some(prev);
        }
    }

    result
}
