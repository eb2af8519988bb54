//! # Dashboard Indicators
//!
//! Chart overlays and period statistics for the stock dashboard.
//!
//! ## Features
//! - SMA, EMA, RSI (simple-average and Wilder) and Bollinger Bands
//! - Period summary: change, closing high/low, volume totals
//! - Warm-up positions are `None`, never a sentinel number
//! - Compiles to native and WASM
//!
//! ## Example
//! ```
//! use dashboard_indicators::{sma, rsi, bollinger};
//!
//! let closes = vec![44.0, 44.5, 45.0, 44.5, 45.5, 46.0, 45.5, 46.5];
//!
//! let sma_values = sma(&closes, 3);
//! let rsi_values = rsi(&closes, 14);
//! let bands = bollinger(&closes, 5, 2.0);
//! assert_eq!(sma_values[2], Some(44.5));
//! assert!(rsi_values.iter().all(|v| v.is_none()));
//! assert!(bands.upper[4].is_some());
//! ```

pub mod bar;
pub mod common;
pub mod config;
pub mod error;
pub mod moving_averages;
pub mod oscillators;
pub mod overlay;
pub mod portfolio;
pub mod quote;
pub mod range;
pub mod stats;
pub mod telemetry;
pub mod volatility;

// Re-export commonly used items at crate root
pub use bar::{Bar, Series};
pub use common::Point;
pub use error::IndicatorError;
pub use moving_averages::{ema, sma};
pub use oscillators::{rsi, rsi_wilder, RSI_PERIOD};
pub use overlay::{OverlayConfig, Overlays};
pub use range::Range;
pub use stats::{period_stats, PeriodStats};
pub use volatility::{bollinger, bollinger_bandwidth, std_dev, BollingerBands, BOLLINGER_PERIOD, BOLLINGER_STD_DEV};

#[cfg(feature = "wasm")]
use wasm_bindgen::prelude::*;

/// WASM bindings for the browser dashboard.
///
/// Typed arrays cannot carry `Option`, so unavailable positions cross the
/// boundary as NaN.
#[cfg(feature = "wasm")]
#[wasm_bindgen]
pub struct Indicators;

#[cfg(feature = "wasm")]
#[wasm_bindgen]
impl Indicators {
    #[wasm_bindgen]
    pub fn sma(closes: &[f64], period: usize) -> Vec<f64> {
        common::to_nan_vec(&moving_averages::sma(closes, period))
    }

    /// NaN inputs are treated as gaps.
    #[wasm_bindgen]
    pub fn ema(values: &[f64], period: usize) -> Vec<f64> {
        let points: Vec<Point> = values.iter().map(|v| if v.is_nan() { None } else { Some(*v) }).collect();
        common::to_nan_vec(&moving_averages::ema(&points, period))
    }

    #[wasm_bindgen]
    pub fn rsi(closes: &[f64], period: usize) -> Vec<f64> {
        common::to_nan_vec(&oscillators::rsi(closes, period))
    }

    #[wasm_bindgen]
    pub fn bollinger_upper(closes: &[f64], period: usize, std_mult: f64) -> Vec<f64> {
        common::to_nan_vec(&volatility::bollinger(closes, period, std_mult).upper)
    }

    #[wasm_bindgen]
    pub fn bollinger_lower(closes: &[f64], period: usize, std_mult: f64) -> Vec<f64> {
        common::to_nan_vec(&volatility::bollinger(closes, period, std_mult).lower)
    }

    /// Period stats as a JSON string, or an error message.
    #[wasm_bindgen]
    pub fn period_stats_json(bars_json: &str) -> Result<String, JsValue> {
        let series: Series = serde_json::from_str(bars_json).map_err(|e| JsValue::from_str(&e.to_string()))?;
        let stats = stats::period_stats(series.bars()).map_err(|e| JsValue::from_str(&e.to_string()))?;
        serde_json::to_string(&stats).map_err(|e| JsValue::from_str(&e.to_string()))
    }
}
