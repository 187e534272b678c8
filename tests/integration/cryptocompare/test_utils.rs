//! Test utilities for the CryptoCompare client integration tests

use serde_json::{json, Value};
use signalix::services::cryptocompare::CryptoCompareProvider;
use std::time::Duration;
use wiremock::MockServer;

pub const API_KEY: &str = "test-key";

/// Provider pointed at `server` with near-instant retries
pub fn provider_for(server: &MockServer) -> CryptoCompareProvider {
    CryptoCompareProvider::with_client(
        &format!("{}/data/v2", server.uri()),
        Some(API_KEY.to_string()),
        reqwest::Client::new(),
    )
    .expect("valid mock base URL")
    .with_retry(2, Duration::from_millis(1))
}

/// Successful history payload with `count` hourly rows
pub fn history_body(count: usize) -> Value {
    let rows: Vec<Value> = (0..count)
        .map(|i| {
            let close = 100.0 + i as f64;
            json!({
                "time": 1_700_000_000 + i as i64 * 3_600,
                "open": close - 0.5,
                "high": close + 1.0,
                "low": close - 1.0,
                "close": close,
                "volumefrom": 12.5,
                "volumeto": 1_250.0 + i as f64,
                "conversionType": "direct"
            })
        })
        .collect();

    json!({
        "Response": "Success",
        "Message": "",
        "HasWarning": false,
        "Data": {
            "Aggregated": false,
            "TimeFrom": 1_700_000_000,
            "TimeTo": 1_700_000_000 + count as i64 * 3_600,
            "Data": rows
        }
    })
}
