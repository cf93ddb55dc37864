//! Nifty 50 RSI screener
//!
//! Fetches the index constituents, pulls a month of daily closes per
//! symbol, computes RSI and daily change, and prints the sorted report.

use std::sync::Arc;

use dotenvy::dotenv;
use tracing::{error, info};

use rsiscan::config::Config;
use rsiscan::logging;
use rsiscan::report::ReportRenderer;
use rsiscan::screener::{sort_by_rsi, Screener};
use rsiscan::services::symbols::NseIndexSource;
use rsiscan::services::yahoo::YahooChartProvider;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Load environment variables from .env if present
    dotenv().ok();

    logging::init_logging();

    let config = Config::from_env()?;

    println!("Fetching Nifty 50 stocks data...");

    let client = reqwest::Client::new();
    let symbols = Arc::new(NseIndexSource::with_client(
        config.index_csv_url.clone(),
        client.clone(),
    ));
    let provider = Arc::new(
        YahooChartProvider::with_client(config.chart_api_url.clone(), client)
            .with_range(config.lookback_range.clone())
            .with_symbol_suffix(config.symbol_suffix.clone()),
    );

    let screener = Screener::new(symbols, provider, &config);
    let mut results = screener.run().await;

    if results.is_empty() {
        error!("no stock data could be fetched");
        println!("Failed to fetch stock data.");
        return Ok(());
    }

    info!(count = results.len(), "screening finished");
    sort_by_rsi(&mut results);

    let renderer = ReportRenderer::new(config.overbought_threshold, config.oversold_threshold);
    print!("{}", renderer.render(&results));

    Ok(())
}
