//! Index constituent symbol source.

use crate::error::{AppError, Result};
use tracing::debug;

#[async_trait::async_trait]
pub trait SymbolSource: Send + Sync {
    /// Ordered ticker symbols of the index constituents.
    async fn fetch_symbols(&self) -> Result<Vec<String>>;
}

/// Nifty 50 constituents used when the index CSV cannot be fetched.
pub const FALLBACK_SYMBOLS: [&str; 50] = [
    "RELIANCE", "TCS", "HDFCBANK", "ICICIBANK", "HINDUNILVR",
    "INFY", "HDFC", "ITC", "KOTAKBANK", "LT", "AXISBANK",
    "SBIN", "BAJFINANCE", "BHARTIARTL", "ASIANPAINT", "MARUTI",
    "HCLTECH", "TITAN", "TATAMOTORS", "SUNPHARMA", "ULTRACEMCO",
    "BAJAJFINSV", "WIPRO", "NESTLEIND", "NTPC", "POWERGRID",
    "ONGC", "TECHM", "ADANIPORTS", "GRASIM", "JSWSTEEL",
    "HINDALCO", "TATASTEEL", "M&M", "INDUSINDBK", "DRREDDY",
    "BPCL", "CIPLA", "EICHERMOT", "COALINDIA", "BRITANNIA",
    "ADANIENT", "HDFCLIFE", "SBILIFE", "UPL", "HEROMOTOCO",
    "DIVISLAB", "APOLLOHOSP", "BAJAJ-AUTO", "TATACONSUM",
];

/// Downloads the NSE index constituent CSV and extracts the `Symbol` column.
pub struct NseIndexSource {
    url: String,
    client: reqwest::Client,
}

impl NseIndexSource {
    pub fn new(url: impl Into<String>) -> Self {
        Self::with_client(url, reqwest::Client::new())
    }

    /// Constructor taking an explicit client so tests can point the source
    /// at a mock server.
    pub fn with_client(url: impl Into<String>, client: reqwest::Client) -> Self {
        Self {
            url: url.into(),
            client,
        }
    }
}

#[async_trait::async_trait]
impl SymbolSource for NseIndexSource {
    async fn fetch_symbols(&self) -> Result<Vec<String>> {
        let response = self.client.get(&self.url).send().await?;
        if !response.status().is_success() {
            return Err(AppError::Network(format!(
                "index CSV request returned {}",
                response.status()
            )));
        }

        let body = response.text().await?;
        parse_symbol_column(&body)
    }
}

fn parse_symbol_column(data: &str) -> Result<Vec<String>> {
    let mut reader = csv::Reader::from_reader(data.as_bytes());
    let headers = reader.headers()?.clone();
    let symbol_idx = headers
        .iter()
        .position(|header| header.eq_ignore_ascii_case("symbol"))
        .ok_or_else(|| AppError::Parse("index CSV has no Symbol column".to_string()))?;

    let mut symbols = Vec::new();
    for record in reader.records() {
        let record = record?;
        if let Some(symbol) = record.get(symbol_idx) {
            let symbol = symbol.trim();
            if !symbol.is_empty() {
                symbols.push(symbol.to_string());
            }
        }
    }

    debug!(count = symbols.len(), "parsed index constituent symbols");
    Ok(symbols)
}
