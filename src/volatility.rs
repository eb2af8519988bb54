//! Volatility indicators
//!
//! Indicators that measure the degree of price variation over time.

use serde::Serialize;

use crate::common::{rolling, sum, zip_with, Point};
use crate::moving_averages::sma;

/// Conventional Bollinger lookback
pub const BOLLINGER_PERIOD: usize = 20;

/// Conventional Bollinger band width in standard deviations
pub const BOLLINGER_STD_DEV: f64 = 2.0;

/// Standard Deviation
///
/// Population standard deviation (divides by `period`) over a rolling window.
pub fn std_dev(values: &[f64], period: usize) -> Vec<Point> {
    rolling(values, period, |window| {
        let m = sum(window) / window.len() as f64;
        let variance: f64 = window.iter().map(|x| (x - m).powi(2)).sum::<f64>() / window.len() as f64;
        variance.sqrt()
    })
}

/// Upper, middle and lower bands, each aligned with the input closes.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BollingerBands {
    pub upper: Vec<Point>,
    pub middle: Vec<Point>,
    pub lower: Vec<Point>,
}

impl BollingerBands {
    pub fn len(&self) -> usize {
        self.middle.len()
    }

    pub fn is_empty(&self) -> bool {
        self.middle.is_empty()
    }
}

/// Bollinger Bands
///
/// # Formula
/// Middle = SMA(close, period)
/// Upper = Middle + std_mult × σ
/// Lower = Middle - std_mult × σ
///
/// σ is the population standard deviation over the same trailing window as
/// the SMA. Wherever the middle band is unavailable so are both outer bands.
///
/// # Arguments
/// * `closes` - Closing prices
/// * `period` - Lookback (typically [`BOLLINGER_PERIOD`])
/// * `std_mult` - Band width in standard deviations (typically [`BOLLINGER_STD_DEV`])
pub fn bollinger(closes: &[f64], period: usize, std_mult: f64) -> BollingerBands {
    let middle = sma(closes, period);
    let std = std_dev(closes, period);

    let upper = zip_with(&middle, &std, |m, s| m + std_mult * s);
    let lower = zip_with(&middle, &std, |m, s| m - std_mult * s);

    BollingerBands { upper, middle, lower }
}

/// Bollinger Bandwidth
///
/// Measures the width of Bollinger Bands as percentage of middle band
///
/// Formula: ((Upper Band - Lower Band) / Middle Band) * 100
pub fn bollinger_bandwidth(closes: &[f64], period: usize, std_mult: f64) -> Vec<Point> {
    let bands = bollinger(closes, period, std_mult);

    (0..bands.len())
        .map(|i| match (bands.upper[i], bands.middle[i], bands.lower[i]) {
            (Some(u), Some(m), Some(l)) if m != 0.0 => Some((u - l) / m * 100.0),
            _ => None,
        })
        .collect()
}
