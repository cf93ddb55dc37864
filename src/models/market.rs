use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// One daily closing price for a symbol.
///
/// A `Vec<PricePoint>` ordered ascending by date, with no duplicate dates,
/// forms the price series the indicators operate on.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PricePoint {
    pub date: NaiveDate,
    pub close: f64,
}

impl PricePoint {
    pub fn new(date: NaiveDate, close: f64) -> Self {
        Self { date, close }
    }
}

/// Per-symbol screening outcome for a single run.
///
/// Derived fields are `None` when the fetched history was too short or
/// arithmetically degenerate to compute them. Values keep full precision;
/// rounding happens only in the report renderer.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct StockResult {
    pub symbol: String,
    pub current_price: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub daily_change_pct: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rsi: Option<f64>,
}
