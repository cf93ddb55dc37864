//! Console report rendering.
//!
//! Produces a pretty-bordered table of the screening results, followed by
//! the overbought and oversold sections. Numeric fields are rounded to two
//! decimals here and nowhere else; undefined fields render as `-`.

use crate::indicators::momentum::rsi::RsiZone;
use crate::models::market::StockResult;

const HEADERS: [&str; 4] = ["Symbol", "CMP", "Daily Change (%)", "RSI"];

pub struct ReportRenderer {
    overbought_threshold: f64,
    oversold_threshold: f64,
}

impl ReportRenderer {
    pub fn new(overbought_threshold: f64, oversold_threshold: f64) -> Self {
        Self {
            overbought_threshold,
            oversold_threshold,
        }
    }

    /// Full report for an already-sorted result set.
    pub fn render(&self, results: &[StockResult]) -> String {
        let mut out = String::new();

        out.push_str("\nNifty 50 Stocks Data:\n");
        out.push_str(&render_table(results));

        out.push_str(&format!(
            "\nOverbought Stocks (RSI > {:.0}):\n",
            self.overbought_threshold
        ));
        let overbought = self.filter_by_zone(results, RsiZone::Overbought);
        if overbought.is_empty() {
            out.push_str("No stocks are currently overbought.\n");
        } else {
            out.push_str(&render_table(&overbought));
        }

        out.push_str(&format!(
            "\nOversold Stocks (RSI < {:.0}):\n",
            self.oversold_threshold
        ));
        let oversold = self.filter_by_zone(results, RsiZone::Oversold);
        if oversold.is_empty() {
            out.push_str("No stocks are currently oversold.\n");
        } else {
            out.push_str(&render_table(&oversold));
        }

        out
    }

    fn filter_by_zone(&self, results: &[StockResult], zone: RsiZone) -> Vec<StockResult> {
        results
            .iter()
            .filter(|record| {
                record.rsi.map(|value| {
                    RsiZone::classify(value, self.overbought_threshold, self.oversold_threshold)
                }) == Some(zone)
            })
            .cloned()
            .collect()
    }
}

fn render_table(results: &[StockResult]) -> String {
    let rows: Vec<[String; 4]> = results
        .iter()
        .map(|record| {
            [
                record.symbol.clone(),
                format!("{:.2}", record.current_price),
                format_optional(record.daily_change_pct),
                format_optional(record.rsi),
            ]
        })
        .collect();

    let mut widths = HEADERS.map(str::len);
    for row in &rows {
        for (width, cell) in widths.iter_mut().zip(row.iter()) {
            *width = (*width).max(cell.len());
        }
    }

    let border = render_border(&widths);
    let mut out = String::new();
    out.push_str(&border);
    out.push_str(&render_row(&HEADERS.map(String::from), &widths));
    out.push_str(&border);
    for row in &rows {
        out.push_str(&render_row(row, &widths));
    }
    out.push_str(&border);
    out
}

fn render_border(widths: &[usize; 4]) -> String {
    let mut line = String::from("+");
    for width in widths {
        line.push_str(&"-".repeat(width + 2));
        line.push('+');
    }
    line.push('\n');
    line
}

fn render_row(cells: &[String; 4], widths: &[usize; 4]) -> String {
    let mut line = String::from("|");
    for (cell, width) in cells.iter().zip(widths) {
        line.push_str(&format!(" {:^width$} |", cell, width = *width));
    }
    line.push('\n');
    line
}

fn format_optional(value: Option<f64>) -> String {
    match value {
        Some(value) => format!("{:.2}", value),
        None => "-".to_string(),
    }
}
