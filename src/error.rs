//! Error taxonomy for the indicator engine.
//!
//! Too-short series are not errors: indicators degrade to unavailable
//! markers instead. Only whole-series summaries and constructors fail.

use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum IndicatorError {
    /// Period statistics requested on a zero-length series.
    #[error("series contains no bars")]
    EmptySeries,

    /// A ratio whose baseline is zero.
    #[error("division by zero computing {field}: baseline price is 0")]
    DivisionByZero { field: &'static str },

    /// Dates in a series must be strictly increasing.
    #[error("bar {index} is not dated after the bar before it")]
    UnorderedDates { index: usize },

    #[error("unknown range token: {0:?} (expected one of 1d, 7d, 1m, 4m, 1y)")]
    UnknownRange(String),

    #[error("invalid holding: {0}")]
    InvalidHolding(String),
}

pub type Result<T> = std::result::Result<T, IndicatorError>;
