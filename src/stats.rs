//! Whole-period summary of a bar series.

use serde::Serialize;

use crate::bar::Bar;
use crate::common::{max, min};
use crate::error::{IndicatorError, Result};

/// Scalar summary over every bar of a series.
///
/// High and low track the closing price, not the bars' own high/low fields.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PeriodStats {
    /// Open of the first bar
    pub first_price: f64,
    /// Close of the last bar
    pub last_price: f64,
    pub period_high: f64,
    pub period_low: f64,
    pub total_volume: u64,
    /// Mean volume rounded to the nearest whole share, halves away from zero
    pub avg_volume: u64,
    pub price_change: f64,
    pub percent_change: f64,
}

/// Summarise a series.
///
/// # Errors
/// * [`IndicatorError::EmptySeries`] when `bars` is empty
/// * [`IndicatorError::DivisionByZero`] when the first open is zero
pub fn period_stats(bars: &[Bar]) -> Result<PeriodStats> {
    let (first, last) = match (bars.first(), bars.last()) {
        (Some(first), Some(last)) => (first, last),
        _ => return Err(IndicatorError::EmptySeries),
    };

    let first_price = first.open;
    let last_price = last.close;
    if first_price == 0.0 {
        return Err(IndicatorError::DivisionByZero { field: "percent_change" });
    }

    let closes: Vec<f64> = bars.iter().map(|b| b.close).collect();
    let period_high = max(&closes);
    let period_low = min(&closes);

    let total_volume: u64 = bars.iter().map(|b| b.volume).sum();
    let avg_volume = (total_volume as f64 / bars.len() as f64).round() as u64;

    let price_change = last_price - first_price;
    let percent_change = price_change / first_price * 100.0;

    Ok(PeriodStats {
        first_price,
        last_price,
        period_high,
        period_low,
        total_volume,
        avg_volume,
        price_change,
        percent_change,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::bar::fixtures::bars;

    const EPSILON: f64 = 1e-9;

    #[test]
    fn test_period_stats_basic() {
        let series = bars(&[(100.0, 102.0, 1_000), (102.0, 98.0, 2_000), (98.0, 105.0, 4_000)]);
        let stats = period_stats(&series).unwrap();

        assert_eq!(stats.first_price, 100.0);
        assert_eq!(stats.last_price, 105.0);
        assert_eq!(stats.period_high, 105.0);
        assert_eq!(stats.period_low, 98.0);
        assert_eq!(stats.total_volume, 7_000);
        assert_eq!(stats.avg_volume, 2_333);
        assert_eq!(stats.price_change, 5.0);
        assert!((stats.percent_change - 5.0).abs() < EPSILON);
    }

    #[test]
    fn test_period_stats_uses_close_not_bar_range() {
        let mut series = bars(&[(10.0, 11.0, 1), (11.0, 12.0, 1)]);
        series[0].high = 50.0;
        series[1].low = 1.0;
        let stats = period_stats(&series).unwrap();
        assert_eq!(stats.period_high, 12.0);
        assert_eq!(stats.period_low, 11.0);
    }

    #[test]
    fn test_period_stats_single_bar() {
        let series = bars(&[(40.0, 42.0, 300)]);
        let stats = period_stats(&series).unwrap();
        assert_eq!(stats.first_price, 40.0);
        assert_eq!(stats.last_price, 42.0);
        assert_eq!(stats.period_high, 42.0);
        assert_eq!(stats.period_low, 42.0);
        assert_eq!(stats.avg_volume, 300);
        assert!((stats.percent_change - 5.0).abs() < EPSILON);
    }

    #[test]
    fn test_avg_volume_rounds_half_up() {
        let series = bars(&[(1.0, 1.0, 1), (1.0, 1.0, 2)]);
        assert_eq!(period_stats(&series).unwrap().avg_volume, 2);
    }

    #[test]
    fn test_period_stats_empty() {
        assert_eq!(period_stats(&[]), Err(IndicatorError::EmptySeries));
    }

    #[test]
    fn test_period_stats_zero_first_open() {
        let series = bars(&[(0.0, 1.0, 10)]);
        assert_eq!(
            period_stats(&series),
            Err(IndicatorError::DivisionByZero { field: "percent_change" })
        );
    }

    #[test]
    fn test_period_stats_serializes_camel_case() {
        let stats = period_stats(&bars(&[(1.0, 2.0, 3)])).unwrap();
        let json = serde_json::to_value(&stats).unwrap();
        assert_eq!(json["percentChange"], 100.0);
        assert_eq!(json["avgVolume"], 3);
    }
}
