//! Payload returned by the dashboard's stock proxy.
//!
//! ```json
//! {
//!   "symbol": "AAPL",
//!   "date": "2024-06-14",
//!   "1. open": 213.85, "2. high": 215.17, "3. low": 211.3,
//!   "4. close": 212.49, "5. volume": 70122748,
//!   "trend": [{"date": "2024-06-07", "open": 194.65, ...}]
//! }
//! ```

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::bar::{Bar, Series};
use crate::error::Result;

/// Latest-quote fields, keyed the way the upstream quote API names them.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct QuoteSnapshot {
    #[serde(rename = "1. open")]
    pub open: f64,
    #[serde(rename = "2. high")]
    pub high: f64,
    #[serde(rename = "3. low")]
    pub low: f64,
    #[serde(rename = "4. close")]
    pub close: f64,
    #[serde(rename = "5. volume")]
    pub volume: u64,
}

#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct QuotePayload {
    pub symbol: String,
    pub date: NaiveDate,
    #[serde(flatten)]
    pub snapshot: QuoteSnapshot,
    pub trend: Vec<Bar>,
}

impl QuotePayload {
    /// The snapshot as a bar dated `self.date`.
    pub fn latest_bar(&self) -> Bar {
        Bar {
            date: self.date,
            open: self.snapshot.open,
            high: self.snapshot.high,
            low: self.snapshot.low,
            close: self.snapshot.close,
            volume: self.snapshot.volume,
        }
    }

    /// The trend bars as an ordered series.
    pub fn series(&self) -> Result<Series> {
        Series::new(self.trend.clone())
    }

    pub fn into_series(self) -> Result<Series> {
        Series::new(self.trend)
    }
}
