//! Portfolio holdings and profit/loss totals.

use serde::{Deserialize, Serialize};

use crate::error::{IndicatorError, Result};

#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Holding {
    pub symbol: String,
    pub shares: f64,
    /// Share-weighted average purchase price
    pub avg_price: f64,
    pub current_price: f64,
}

impl Holding {
    /// A new position priced at its purchase price until a quote arrives.
    pub fn new(symbol: &str, shares: f64, avg_price: f64) -> Result<Self> {
        let symbol = symbol.trim().to_uppercase();
        if symbol.is_empty() {
            return Err(IndicatorError::InvalidHolding("symbol is blank".into()));
        }
        if shares.is_nan() || shares <= 0.0 {
            return Err(IndicatorError::InvalidHolding(format!("{symbol}: shares must be positive")));
        }
        if avg_price.is_nan() || avg_price <= 0.0 {
            return Err(IndicatorError::InvalidHolding(format!("{symbol}: price must be positive")));
        }
        Ok(Self { symbol, shares, avg_price, current_price: avg_price })
    }

    pub fn value(&self) -> f64 {
        self.shares * self.current_price
    }

    pub fn cost(&self) -> f64 {
        self.shares * self.avg_price
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PortfolioTotals {
    pub total_value: f64,
    pub total_cost: f64,
    #[serde(rename = "totalPL")]
    pub total_pl: f64,
    /// 0 for an empty portfolio
    #[serde(rename = "totalPLPercent")]
    pub total_pl_percent: f64,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
#[serde(transparent)]
pub struct Portfolio {
    holdings: Vec<Holding>,
}

impl Portfolio {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn holdings(&self) -> &[Holding] {
        &self.holdings
    }

    /// Add a position. Buying more of a held symbol merges into it and
    /// re-weights the average price by share count.
    pub fn add(&mut self, holding: Holding) {
        match self.holdings.iter_mut().find(|h| h.symbol == holding.symbol) {
            Some(existing) => {
                let total_shares = existing.shares + holding.shares;
                existing.avg_price = (existing.cost() + holding.cost()) / total_shares;
                existing.shares = total_shares;
            }
            None => self.holdings.push(holding),
        }
    }

    /// Remove a symbol; returns whether it was held.
    pub fn remove(&mut self, symbol: &str) -> bool {
        let before = self.holdings.len();
        self.holdings.retain(|h| !h.symbol.eq_ignore_ascii_case(symbol));
        self.holdings.len() != before
    }

    /// Mark a symbol to the latest price; returns whether it was held.
    pub fn update_price(&mut self, symbol: &str, price: f64) -> bool {
        match self.holdings.iter_mut().find(|h| h.symbol.eq_ignore_ascii_case(symbol)) {
            Some(h) => {
                h.current_price = price;
                true
            }
            None => false,
        }
    }

    pub fn totals(&self) -> PortfolioTotals {
        let total_value: f64 = self.holdings.iter().map(Holding::value).sum();
        let total_cost: f64 = self.holdings.iter().map(Holding::cost).sum();
        let total_pl = total_value - total_cost;
        let total_pl_percent = if total_cost > 0.0 { total_pl / total_cost * 100.0 } else { 0.0 };
        PortfolioTotals { total_value, total_cost, total_pl, total_pl_percent }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPSILON: f64 = 1e-9;

    #[test]
    fn test_new_holding_normalises_symbol() {
        let h = Holding::new(" msft ", 2.0, 300.0).unwrap();
        assert_eq!(h.symbol, "MSFT");
        assert_eq!(h.current_price, 300.0);
    }

    #[test]
    fn test_new_holding_rejects_bad_input() {
        assert!(Holding::new("", 1.0, 1.0).is_err());
        assert!(Holding::new("AAPL", 0.0, 1.0).is_err());
        assert!(Holding::new("AAPL", 1.0, -5.0).is_err());
        assert!(Holding::new("AAPL", f64::NAN, 1.0).is_err());
    }

    #[test]
    fn test_add_merges_weighted_average() {
        let mut p = Portfolio::new();
        p.add(Holding::new("AAPL", 10.0, 100.0).unwrap());
        p.add(Holding::new("aapl", 30.0, 200.0).unwrap());

        assert_eq!(p.holdings().len(), 1);
        let h = &p.holdings()[0];
        assert_eq!(h.shares, 40.0);
        assert!((h.avg_price - 175.0).abs() < EPSILON);
    }

    #[test]
    fn test_totals() {
        let mut p = Portfolio::new();
        p.add(Holding::new("AAPL", 10.0, 100.0).unwrap());
        p.add(Holding::new("MSFT", 5.0, 200.0).unwrap());
        assert!(p.update_price("aapl", 120.0));

        let t = p.totals();
        assert_eq!(t.total_value, 2_200.0);
        assert_eq!(t.total_cost, 2_000.0);
        assert_eq!(t.total_pl, 200.0);
        assert!((t.total_pl_percent - 10.0).abs() < EPSILON);
    }

    #[test]
    fn test_empty_totals() {
        let t = Portfolio::new().totals();
        assert_eq!(t.total_value, 0.0);
        assert_eq!(t.total_pl_percent, 0.0);
    }

    #[test]
    fn test_remove() {
        let mut p = Portfolio::new();
        p.add(Holding::new("AAPL", 1.0, 1.0).unwrap());
        assert!(!p.remove("TSLA"));
        assert!(p.remove("aapl"));
        assert!(p.holdings().is_empty());
    }

    #[test]
    fn test_serde_field_names() {
        let mut p = Portfolio::new();
        p.add(Holding::new("AAPL", 1.0, 2.0).unwrap());
        let json = serde_json::to_value(&p).unwrap();
        assert_eq!(json[0]["avgPrice"], 2.0);
        assert_eq!(json[0]["currentPrice"], 2.0);
        let totals = serde_json::to_value(p.totals()).unwrap();
        assert_eq!(totals["totalPL"], 0.0);
    }
}
