//! Yahoo Finance chart API provider for daily price history.

use std::time::Duration;

use backon::{ExponentialBuilder, Retryable};
use chrono::DateTime;
use serde::Deserialize;
use tracing::{debug, warn};
use url::Url;

use crate::config::{DEFAULT_LOOKBACK_RANGE, DEFAULT_SYMBOL_SUFFIX};
use crate::error::{AppError, Result};
use crate::models::market::PricePoint;
use crate::services::market_data::PriceHistoryProvider;

#[derive(Debug, Deserialize)]
struct ChartResponse {
    chart: Chart,
}

#[derive(Debug, Deserialize)]
struct Chart {
    result: Option<Vec<ChartResult>>,
    error: Option<ChartError>,
}

#[derive(Debug, Deserialize)]
struct ChartError {
    code: String,
    description: String,
}

#[derive(Debug, Deserialize)]
struct ChartResult {
    #[serde(default)]
    timestamp: Vec<i64>,
    indicators: Indicators,
}

#[derive(Debug, Deserialize)]
struct Indicators {
    quote: Vec<Quote>,
}

#[derive(Debug, Deserialize)]
struct Quote {
    // trading holidays come back as nulls inside the array
    #[serde(default)]
    close: Vec<Option<f64>>,
}

/// Provider backed by the public `/v8/finance/chart` endpoint.
///
/// Transient failures (network errors, 5xx, 429) are retried with
/// exponential backoff before the symbol is given up on.
pub struct YahooChartProvider {
    base_url: String,
    client: reqwest::Client,
    range: String,
    symbol_suffix: String,
}

impl YahooChartProvider {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self::with_client(base_url, reqwest::Client::new())
    }

    /// Constructor taking an explicit client so tests can point the provider
    /// at a mock server.
    pub fn with_client(base_url: impl Into<String>, client: reqwest::Client) -> Self {
        Self {
            base_url: base_url.into(),
            client,
            range: DEFAULT_LOOKBACK_RANGE.to_string(),
            symbol_suffix: DEFAULT_SYMBOL_SUFFIX.to_string(),
        }
    }

    pub fn with_range(mut self, range: impl Into<String>) -> Self {
        self.range = range.into();
        self
    }

    pub fn with_symbol_suffix(mut self, suffix: impl Into<String>) -> Self {
        self.symbol_suffix = suffix.into();
        self
    }

    fn chart_url(&self, symbol: &str) -> Result<Url> {
        let mut url = Url::parse(&self.base_url)
            .map_err(|e| AppError::Config(format!("invalid chart API URL: {}", e)))?;
        url.set_path(&format!(
            "/v8/finance/chart/{}{}",
            symbol, self.symbol_suffix
        ));
        url.query_pairs_mut()
            .append_pair("range", &self.range)
            .append_pair("interval", "1d");
        Ok(url)
    }

    async fn fetch_chart(&self, symbol: &str) -> Result<ChartResponse> {
        let url = self.chart_url(symbol)?;
        let response = self.client.get(url).send().await?;

        let status = response.status();
        if status == reqwest::StatusCode::TOO_MANY_REQUESTS {
            return Err(AppError::RateLimit);
        }
        if status.is_client_error() {
            // unknown or delisted symbols come back as 4xx, retrying won't help
            return Err(AppError::NoData(format!("{}: {}", symbol, status)));
        }
        if !status.is_success() {
            return Err(AppError::Network(format!(
                "chart request for {} returned {}",
                symbol, status
            )));
        }

        Ok(response.json::<ChartResponse>().await?)
    }
}

#[async_trait::async_trait]
impl PriceHistoryProvider for YahooChartProvider {
    async fn daily_closes(&self, symbol: &str) -> Result<Vec<PricePoint>> {
        let fetch = || self.fetch_chart(symbol);
        let response = fetch
            .retry(
                ExponentialBuilder::default()
                    .with_min_delay(Duration::from_millis(250))
                    .with_max_times(2),
            )
            .when(|err| matches!(err, AppError::Network(_) | AppError::RateLimit))
            .notify(|err: &AppError, delay: Duration| {
                warn!(
                    symbol = %symbol,
                    error = %err,
                    delay_ms = delay.as_millis() as u64,
                    "retrying chart request"
                );
            })
            .await?;

        let result = match response.chart.result.and_then(|mut r| {
            if r.is_empty() {
                None
            } else {
                Some(r.remove(0))
            }
        }) {
            Some(result) => result,
            None => {
                if let Some(err) = response.chart.error {
                    return Err(AppError::NoData(format!(
                        "{}: {} ({})",
                        symbol, err.description, err.code
                    )));
                }
                return Err(AppError::NoData(symbol.to_string()));
            }
        };

        let closes = result
            .indicators
            .quote
            .into_iter()
            .next()
            .map(|quote| quote.close)
            .unwrap_or_default();

        let mut points = Vec::new();
        for (timestamp, close) in result.timestamp.iter().zip(closes) {
            let close = match close {
                Some(close) => close,
                None => continue,
            };
            if let Some(datetime) = DateTime::from_timestamp(*timestamp, 0) {
                points.push(PricePoint::new(datetime.date_naive(), close));
            }
        }

        debug!(symbol = %symbol, count = points.len(), "fetched daily closes");
        Ok(points)
    }
}
