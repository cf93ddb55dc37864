//! Price history provider interface for market data sources.

use crate::error::Result;
use crate::models::market::PricePoint;

#[async_trait::async_trait]
pub trait PriceHistoryProvider: Send + Sync {
    /// Daily closing prices for a symbol over the configured lookback,
    /// ordered oldest first.
    async fn daily_closes(&self, symbol: &str) -> Result<Vec<PricePoint>>;
}
