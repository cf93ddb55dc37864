//! Shared helpers for integration tests

use serde_json::json;
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

/// Chart API payload with the given timestamps and (possibly null) closes.
pub fn chart_body(symbol: &str, timestamps: &[i64], closes: &[Option<f64>]) -> serde_json::Value {
    json!({
        "chart": {
            "result": [{
                "meta": { "symbol": symbol },
                "timestamp": timestamps,
                "indicators": { "quote": [{ "close": closes }] }
            }],
            "error": null
        }
    })
}

/// Mount a chart endpoint for `symbol` serving one close per trading day.
pub async fn mock_chart(server: &MockServer, symbol: &str, closes: &[f64]) {
    let timestamps: Vec<i64> = (0..closes.len() as i64)
        .map(|i| 1_704_067_200 + i * 86_400)
        .collect();
    let closes: Vec<Option<f64>> = closes.iter().copied().map(Some).collect();

    Mock::given(method("GET"))
        .and(path(format!("/v8/finance/chart/{}.NS", symbol)))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(chart_body(symbol, &timestamps, &closes)),
        )
        .mount(server)
        .await;
}
