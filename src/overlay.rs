//! All chart overlays for one series in a single call.
//!
//! The dashboard toggles which overlays it draws; this computes the full set
//! so a range change costs one pass.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::bar::Series;
use crate::common::{to_points, Point};
use crate::moving_averages::{ema, sma};
use crate::oscillators::{rsi, RSI_PERIOD};
use crate::stats::{period_stats, PeriodStats};
use crate::volatility::{bollinger, BollingerBands, BOLLINGER_PERIOD, BOLLINGER_STD_DEV};

/// Indicator periods. Every field has a default so partial JSON works.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct OverlayConfig {
    #[serde(default = "default_sma_short")]
    pub sma_short: usize,
    #[serde(default = "default_sma_long")]
    pub sma_long: usize,
    #[serde(default = "default_ema")]
    pub ema_period: usize,
    #[serde(default = "default_rsi")]
    pub rsi_period: usize,
    #[serde(default = "default_bollinger_period")]
    pub bollinger_period: usize,
    #[serde(default = "default_bollinger_std")]
    pub bollinger_std_dev: f64,
}

fn default_sma_short() -> usize {
    20
}

fn default_sma_long() -> usize {
    50
}

fn default_ema() -> usize {
    20
}

fn default_rsi() -> usize {
    RSI_PERIOD
}

fn default_bollinger_period() -> usize {
    BOLLINGER_PERIOD
}

fn default_bollinger_std() -> f64 {
    BOLLINGER_STD_DEV
}

impl Default for OverlayConfig {
    fn default() -> Self {
        Self {
            sma_short: default_sma_short(),
            sma_long: default_sma_long(),
            ema_period: default_ema(),
            rsi_period: default_rsi(),
            bollinger_period: default_bollinger_period(),
            bollinger_std_dev: default_bollinger_std(),
        }
    }
}

/// Derived series aligned index-for-index with `dates`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Overlays {
    pub dates: Vec<NaiveDate>,
    pub close: Vec<f64>,
    pub sma_short: Vec<Point>,
    pub sma_long: Vec<Point>,
    pub ema: Vec<Point>,
    pub rsi: Vec<Point>,
    pub bollinger: BollingerBands,
    /// `None` when the series is empty or its first open is zero
    pub stats: Option<PeriodStats>,
}

impl Overlays {
    pub fn compute(series: &Series, config: &OverlayConfig) -> Self {
        let closes = series.closes();
        debug!(
            bars = closes.len(),
            sma_short = config.sma_short,
            sma_long = config.sma_long,
            ema = config.ema_period,
            rsi = config.rsi_period,
            bollinger = config.bollinger_period,
            "computing overlays"
        );

        let stats = match period_stats(series.bars()) {
            Ok(stats) => Some(stats),
            Err(e) => {
                debug!(error = %e, "period stats unavailable");
                None
            }
        };

        Self {
            dates: series.dates(),
            sma_short: sma(&closes, config.sma_short),
            sma_long: sma(&closes, config.sma_long),
            ema: ema(&to_points(&closes), config.ema_period),
            rsi: rsi(&closes, config.rsi_period),
            bollinger: bollinger(&closes, config.bollinger_period, config.bollinger_std_dev),
            close: closes,
            stats,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::bar::fixtures::bars;

    fn series(n: usize) -> Series {
        let rows: Vec<(f64, f64, u64)> = (0..n)
            .map(|i| {
                let c = 100.0 + (i as f64 * 0.7).sin() * 5.0;
                (c - 0.5, c, 1_000 + i as u64)
            })
            .collect();
        Series::new(bars(&rows)).unwrap()
    }

    #[test]
    fn test_default_config() {
        let config = OverlayConfig::default();
        assert_eq!(config.sma_short, 20);
        assert_eq!(config.sma_long, 50);
        assert_eq!(config.rsi_period, 14);
        assert_eq!(config.bollinger_period, 20);
        assert_eq!(config.bollinger_std_dev, 2.0);
    }

    #[test]
    fn test_partial_config_json() {
        let config: OverlayConfig = serde_json::from_str(r#"{"rsi_period": 7}"#).unwrap();
        assert_eq!(config.rsi_period, 7);
        assert_eq!(config.sma_long, 50);
    }

    #[test]
    fn test_overlays_aligned() {
        let s = series(60);
        let o = Overlays::compute(&s, &OverlayConfig::default());

        assert_eq!(o.dates.len(), 60);
        assert_eq!(o.sma_short.len(), 60);
        assert_eq!(o.sma_long.len(), 60);
        assert_eq!(o.ema.len(), 60);
        assert_eq!(o.rsi.len(), 60);
        assert_eq!(o.bollinger.len(), 60);

        assert!(o.sma_short[18].is_none());
        assert!(o.sma_short[19].is_some());
        assert!(o.sma_long[48].is_none());
        assert!(o.sma_long[49].is_some());
        assert!(o.rsi[13].is_none());
        assert!(o.rsi[14].is_some());
        assert!(o.stats.is_some());
    }

    #[test]
    fn test_overlays_short_series() {
        let o = Overlays::compute(&series(5), &OverlayConfig::default());
        assert!(o.sma_short.iter().all(|p| p.is_none()));
        assert!(o.bollinger.upper.iter().all(|p| p.is_none()));
        assert!(o.stats.is_some());
    }

    #[test]
    fn test_overlays_empty_series() {
        let o = Overlays::compute(&Series::default(), &OverlayConfig::default());
        assert!(o.close.is_empty());
        assert!(o.stats.is_none());
    }

    #[test]
    fn test_overlays_serialize_unavailable_as_null() {
        let o = Overlays::compute(&series(3), &OverlayConfig::default());
        let json = serde_json::to_value(&o).unwrap();
        assert!(json["sma_short"][0].is_null());
        assert_eq!(json["dates"][0], "2024-01-01");
    }
}
