//! Sequential screening pass over the index constituents.
//!
//! One symbol is fully processed before the next begins, with a pacing
//! pause in between to stay under the data provider's rate limits. Every
//! per-symbol failure is contained here: a bad symbol is logged and
//! skipped, never aborting the run.

use std::cmp::Ordering;
use std::sync::Arc;
use std::time::Duration;

use tokio::time::sleep;
use tracing::{info, warn};

use crate::config::Config;
use crate::indicators::momentum::rsi::latest_rsi;
use crate::models::market::{PricePoint, StockResult};
use crate::services::market_data::PriceHistoryProvider;
use crate::services::symbols::{SymbolSource, FALLBACK_SYMBOLS};

pub struct Screener {
    symbols: Arc<dyn SymbolSource>,
    provider: Arc<dyn PriceHistoryProvider>,
    rsi_period: usize,
    pause: Duration,
}

impl Screener {
    pub fn new(
        symbols: Arc<dyn SymbolSource>,
        provider: Arc<dyn PriceHistoryProvider>,
        config: &Config,
    ) -> Self {
        Self {
            symbols,
            provider,
            rsi_period: config.rsi_period,
            pause: config.pause,
        }
    }

    /// Screen every constituent symbol, one at a time.
    pub async fn run(&self) -> Vec<StockResult> {
        let symbols = self.resolve_symbols().await;
        info!(count = symbols.len(), "screening index constituents");

        let mut results = Vec::new();
        for symbol in &symbols {
            match self.provider.daily_closes(symbol).await {
                Ok(series) => match self.build_record(symbol, &series) {
                    Some(record) => results.push(record),
                    None => warn!(symbol = %symbol, "no price history, skipping"),
                },
                Err(e) => {
                    warn!(symbol = %symbol, error = %e, "failed to fetch price history, skipping");
                }
            }

            if !self.pause.is_zero() {
                sleep(self.pause).await;
            }
        }

        results
    }

    async fn resolve_symbols(&self) -> Vec<String> {
        match self.symbols.fetch_symbols().await {
            Ok(symbols) if !symbols.is_empty() => symbols,
            Ok(_) => {
                warn!("symbol source returned no symbols, using fallback list");
                fallback_symbols()
            }
            Err(e) => {
                warn!(error = %e, "failed to fetch index constituents, using fallback list");
                fallback_symbols()
            }
        }
    }

    fn build_record(&self, symbol: &str, series: &[PricePoint]) -> Option<StockResult> {
        if series.is_empty() {
            return None;
        }

        let closes: Vec<f64> = series.iter().map(|point| point.close).collect();
        let current_price = *closes.last()?;

        Some(StockResult {
            symbol: symbol.to_string(),
            current_price,
            daily_change_pct: daily_change_pct(&closes),
            rsi: latest_rsi(&closes, self.rsi_period),
        })
    }
}

fn fallback_symbols() -> Vec<String> {
    FALLBACK_SYMBOLS.iter().map(|s| s.to_string()).collect()
}

/// Percentage change between the two most recent closes.
///
/// Undefined with fewer than two points or a zero previous close, rather
/// than an error that would abort the run.
pub fn daily_change_pct(closes: &[f64]) -> Option<f64> {
    if closes.len() < 2 {
        return None;
    }

    let latest = closes[closes.len() - 1];
    let previous = closes[closes.len() - 2];
    if previous == 0.0 {
        return None;
    }

    Some((latest - previous) / previous * 100.0)
}

/// Sort for presentation: RSI ascending, records without an RSI last,
/// ties broken by symbol so runs with identical input order identically.
pub fn sort_by_rsi(results: &mut [StockResult]) {
    results.sort_by(|a, b| match (a.rsi, b.rsi) {
        (Some(x), Some(y)) => x
            .partial_cmp(&y)
            .unwrap_or(Ordering::Equal)
            .then_with(|| a.symbol.cmp(&b.symbol)),
        (Some(_), None) => Ordering::Less,
        (None, Some(_)) => Ordering::Greater,
        (None, None) => a.symbol.cmp(&b.symbol),
    });
}
