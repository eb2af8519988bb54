//! Chart range tokens used by the dashboard (`1d`, `7d`, `1m`, `4m`, `1y`).

use std::fmt;
use std::str::FromStr;

use chrono::{Days, Months, NaiveDate};
use serde::{Deserialize, Serialize};

use crate::error::IndicatorError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Deserialize, Serialize)]
pub enum Range {
    #[serde(rename = "1d")]
    Day,
    #[default]
    #[serde(rename = "7d")]
    Week,
    #[serde(rename = "1m")]
    Month,
    #[serde(rename = "4m")]
    FourMonths,
    #[serde(rename = "1y")]
    Year,
}

impl Range {
    pub const ALL: [Range; 5] = [Range::Day, Range::Week, Range::Month, Range::FourMonths, Range::Year];

    pub fn token(self) -> &'static str {
        match self {
            Range::Day => "1d",
            Range::Week => "7d",
            Range::Month => "1m",
            Range::FourMonths => "4m",
            Range::Year => "1y",
        }
    }

    /// Human label shown above the chart.
    pub fn label(self) -> &'static str {
        match self {
            Range::Day => "Today",
            Range::Week => "7 Day Trend",
            Range::Month => "1 Month",
            Range::FourMonths => "4 Month",
            Range::Year => "1 Year",
        }
    }

    /// Lenient parse: unknown tokens fall back to the 7 day range.
    pub fn parse_or_default(token: &str) -> Range {
        token.parse().unwrap_or_default()
    }

    /// First calendar day covered by the range ending on `today`.
    ///
    /// Month arithmetic clamps to the end of shorter months
    /// (31 March minus one month is 29 February in a leap year).
    pub fn start_date(self, today: NaiveDate) -> NaiveDate {
        let start = match self {
            Range::Day => Some(today),
            Range::Week => today.checked_sub_days(Days::new(7)),
            Range::Month => today.checked_sub_months(Months::new(1)),
            Range::FourMonths => today.checked_sub_months(Months::new(4)),
            Range::Year => today.checked_sub_months(Months::new(12)),
        };
        start.unwrap_or(NaiveDate::MIN)
    }

    /// Whether the range is a single intraday snapshot rather than a daily history.
    pub fn is_snapshot(self) -> bool {
        matches!(self, Range::Day)
    }
}

impl FromStr for Range {
    type Err = IndicatorError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Range::ALL
            .into_iter()
            .find(|r| r.token() == s)
            .ok_or_else(|| IndicatorError::UnknownRange(s.to_string()))
    }
}

impl fmt::Display for Range {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.token())
    }
}
