//! Runtime configuration sourced from environment variables.
//!
//! Every knob has a default, so the binary runs with no environment at
//! all. `.env` files are loaded by the entry point before this module is
//! consulted.

use std::env;
use std::str::FromStr;
use std::time::Duration;

use crate::error::{AppError, Result};

pub const DEFAULT_RSI_PERIOD: usize = 14;
pub const DEFAULT_PAUSE_MS: u64 = 200;
pub const DEFAULT_OVERBOUGHT_THRESHOLD: f64 = 70.0;
pub const DEFAULT_OVERSOLD_THRESHOLD: f64 = 30.0;
pub const DEFAULT_LOOKBACK_RANGE: &str = "1mo";
pub const DEFAULT_INDEX_CSV_URL: &str =
    "https://www1.nseindia.com/content/indices/ind_nifty50list.csv";
pub const DEFAULT_CHART_API_URL: &str = "https://query1.finance.yahoo.com";
pub const DEFAULT_SYMBOL_SUFFIX: &str = ".NS";

#[derive(Debug, Clone)]
pub struct Config {
    /// Rolling window for the RSI computation.
    pub rsi_period: usize,
    /// Chart API range parameter, e.g. "1mo".
    pub lookback_range: String,
    /// Pause between per-symbol fetches. Zero disables pacing.
    pub pause: Duration,
    pub overbought_threshold: f64,
    pub oversold_threshold: f64,
    pub index_csv_url: String,
    pub chart_api_url: String,
    /// Exchange suffix appended to every ticker for the chart API.
    pub symbol_suffix: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            rsi_period: DEFAULT_RSI_PERIOD,
            lookback_range: DEFAULT_LOOKBACK_RANGE.to_string(),
            pause: Duration::from_millis(DEFAULT_PAUSE_MS),
            overbought_threshold: DEFAULT_OVERBOUGHT_THRESHOLD,
            oversold_threshold: DEFAULT_OVERSOLD_THRESHOLD,
            index_csv_url: DEFAULT_INDEX_CSV_URL.to_string(),
            chart_api_url: DEFAULT_CHART_API_URL.to_string(),
            symbol_suffix: DEFAULT_SYMBOL_SUFFIX.to_string(),
        }
    }
}

impl Config {
    pub fn from_env() -> Result<Self> {
        let rsi_period: usize = parse_var("RSI_PERIOD", DEFAULT_RSI_PERIOD)?;
        if rsi_period == 0 {
            return Err(AppError::Config("RSI_PERIOD must be at least 1".to_string()));
        }

        let pause_ms: u64 = parse_var("PAUSE_MS", DEFAULT_PAUSE_MS)?;

        Ok(Self {
            rsi_period,
            lookback_range: string_var("LOOKBACK_RANGE", DEFAULT_LOOKBACK_RANGE),
            pause: Duration::from_millis(pause_ms),
            overbought_threshold: parse_var("OVERBOUGHT_THRESHOLD", DEFAULT_OVERBOUGHT_THRESHOLD)?,
            oversold_threshold: parse_var("OVERSOLD_THRESHOLD", DEFAULT_OVERSOLD_THRESHOLD)?,
            index_csv_url: string_var("INDEX_CSV_URL", DEFAULT_INDEX_CSV_URL),
            chart_api_url: string_var("CHART_API_URL", DEFAULT_CHART_API_URL),
            symbol_suffix: string_var("SYMBOL_SUFFIX", DEFAULT_SYMBOL_SUFFIX),
        })
    }
}

fn string_var(key: &str, default: &str) -> String {
    env::var(key).unwrap_or_else(|_| default.to_string())
}

fn parse_var<T>(key: &str, default: T) -> Result<T>
where
    T: FromStr,
{
    match env::var(key) {
        Ok(raw) => raw
            .parse()
            .map_err(|_| AppError::Config(format!("invalid value for {}: {}", key, raw))),
        Err(_) => Ok(default),
    }
}

/// Deployment environment name, used to pick the log formatter.
pub fn get_environment() -> String {
    env::var("APP_ENV").unwrap_or_else(|_| "sandbox".to_string())
}
