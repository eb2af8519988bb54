//! Daily OHLCV bars and the ordered series the indicators consume.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::error::{IndicatorError, Result};

/// One trading-period OHLCV observation.
///
/// `low <= open, close <= high` is expected of upstream data but never
/// checked or corrected here.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct Bar {
    pub date: NaiveDate,
    pub open: f64,
    pub high: f64,
    pub low: f64,
    pub close: f64,
    pub volume: u64,
}

/// Bars in strictly increasing date order, index 0 = earliest.
///
/// Immutable once built. May be empty; indicators return empty output and
/// [`period_stats`](crate::stats::period_stats) reports
/// [`IndicatorError::EmptySeries`].
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "Vec<Bar>", into = "Vec<Bar>")]
pub struct Series {
    bars: Vec<Bar>,
}

impl Series {
    /// Build a series, rejecting dates that are not strictly increasing.
    /// Bars are never re-sorted.
    pub fn new(bars: Vec<Bar>) -> Result<Self> {
        if let Some(pos) = bars.windows(2).position(|w| w[1].date <= w[0].date) {
            return Err(IndicatorError::UnorderedDates { index: pos + 1 });
        }
        Ok(Self { bars })
    }

    pub fn bars(&self) -> &[Bar] {
        &self.bars
    }

    pub fn len(&self) -> usize {
        self.bars.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bars.is_empty()
    }

    pub fn closes(&self) -> Vec<f64> {
        self.bars.iter().map(|b| b.close).collect()
    }

    pub fn opens(&self) -> Vec<f64> {
        self.bars.iter().map(|b| b.open).collect()
    }

    pub fn volumes(&self) -> Vec<u64> {
        self.bars.iter().map(|b| b.volume).collect()
    }

    pub fn dates(&self) -> Vec<NaiveDate> {
        self.bars.iter().map(|b| b.date).collect()
    }
}

impl TryFrom<Vec<Bar>> for Series {
    type Error = IndicatorError;

    fn try_from(bars: Vec<Bar>) -> Result<Self> {
        Series::new(bars)
    }
}

impl From<Series> for Vec<Bar> {
    fn from(series: Series) -> Self {
        series.bars
    }
}

impl AsRef<[Bar]> for Series {
    fn as_ref(&self) -> &[Bar] {
        &self.bars
    }
}
