//! Integration tests for the API Server
//!
//! Tests HTTP endpoints, health checks, metrics, and the analysis routes.


use serde_json::{json, Value};

use test_utils::{uptrend_candles, TestApiServer};

#[tokio::test]
async fn health_endpoint_reports_healthy_status() {
    let app = TestApiServer::with_candles(uptrend_candles(30)).await;
    let response = app.server.get("/health").await;
    assert_eq!(response.status_code(), 200);

    let body: Value = response.json();
    assert_eq!(body["status"], "healthy");
    assert_eq!(body["market_data"], true);
    assert!(body["uptime_seconds"].as_u64().is_some());
    assert_eq!(body["service"], "signalix-signal-engine");
}

#[tokio::test]
async fn health_endpoint_degraded_without_market_data() {
    let app = TestApiServer::new().await;
    let response = app.server.get("/health").await;
    assert_eq!(response.status_code(), 200);

    let body: Value = response.json();
    assert_eq!(body["status"], "degraded");
    assert_eq!(body["market_data"], false);
}

#[tokio::test]
async fn metrics_endpoint_exposes_prometheus_metrics() {
    let app = TestApiServer::new().await;
    app.server.get("/health").await;

    let response = app.server.get("/metrics").await;
    assert_eq!(response.status_code(), 200);

    let body = response.text();
    assert!(
        body.contains("http_requests_total"),
        "Expected http_requests_total metric"
    );
    assert!(
        body.contains("http_request_duration_seconds"),
        "Expected http_request_duration_seconds metric"
    );
    assert!(
        body.contains("http_requests_in_flight"),
        "Expected http_requests_in_flight metric"
    );
}

#[tokio::test]
async fn pairs_endpoint_lists_catalogue() {
    let app = TestApiServer::new().await;
    let response = app.server.get("/api/pairs").await;
    assert_eq!(response.status_code(), 200);

    let body: Value = response.json();
    let pairs = body.as_array().expect("array of pairs");
    assert!(pairs
        .iter()
        .any(|p| p["symbol"] == "BTC/USDT" && p["type"] == "CRYPTO"));
    assert!(pairs.iter().any(|p| p["type"] == "FOREX"));
}

#[tokio::test]
async fn timeframes_endpoint_lists_catalogue() {
    let app = TestApiServer::new().await;
    let body: Value = app.server.get("/api/timeframes").await.json();
    let timeframes = body.as_array().expect("array of timeframes");
    let four_hours = timeframes
        .iter()
        .find(|tf| tf["value"] == "4h")
        .expect("4h listed");
    assert_eq!(four_hours["apiValue"], "histohour");
    assert_eq!(four_hours["aggregate"], 4);
}

#[tokio::test]
async fn indicators_endpoint_returns_bundle() {
    let app = TestApiServer::new().await;
    let response = app
        .server
        .post("/api/indicators")
        .json(&json!({ "candles": uptrend_candles(60) }))
        .await;
    assert_eq!(response.status_code(), 200);

    let body: Value = response.json();
    assert_eq!(body["rsi"]["signal"], "UP");
    assert_eq!(body["trendSignal"]["signal"], "UP");
    assert_eq!(body["adx"]["signal"], "NEUTRAL");
    assert!(body["bollinger"]["width"].as_f64().is_some());
}

#[tokio::test]
async fn indicators_endpoint_accepts_upstream_volume_field() {
    let app = TestApiServer::new().await;
    let candles: Vec<Value> = (0..5)
        .map(|i| {
            json!({
                "time": 1_700_000_000 + i * 60,
                "open": 10.0,
                "high": 11.0,
                "low": 9.0,
                "close": 10.0 + i as f64,
                "volumeto": 500.0
            })
        })
        .collect();
    let response = app
        .server
        .post("/api/indicators")
        .json(&json!({ "candles": candles }))
        .await;
    assert_eq!(response.status_code(), 200);

    let body: Value = response.json();
    assert_eq!(body["rsi"]["description"], "Insufficient data");
    assert_eq!(body["volumeTrend"]["value"], "0.0%");
}

#[tokio::test]
async fn analyze_endpoint_aggregates_votes() {
    let app = TestApiServer::new().await;
    let response = app
        .server
        .post("/api/analyze")
        .json(&json!({ "candles": uptrend_candles(60) }))
        .await;
    assert_eq!(response.status_code(), 200);

    let body: Value = response.json();
    let aggregation = &body["aggregation"];
    let total = aggregation["upCount"].as_u64().unwrap_or_default()
        + aggregation["downCount"].as_u64().unwrap_or_default()
        + aggregation["neutralCount"].as_u64().unwrap_or_default();
    assert_eq!(total, 7);
    assert!(aggregation["upCount"].as_u64().unwrap_or_default() >= 4);
    assert_eq!(aggregation["marketRegime"], "TRENDING");
    assert!(body["indicators"]["macd"].is_object());

    let votes = body["votes"].as_array().expect("votes array");
    assert_eq!(votes.len(), 9);
    let volume = votes
        .iter()
        .find(|v| v["name"] == "Volume")
        .expect("volume vote");
    assert_eq!(volume["category"], "VOLUME");
    assert_eq!(volume["tallied"], true);
}

#[tokio::test]
async fn analyze_endpoint_rejects_empty_series() {
    let app = TestApiServer::new().await;
    let response = app
        .server
        .post("/api/analyze")
        .json(&json!({ "candles": [] }))
        .await;
    assert_eq!(response.status_code(), 400);
}

#[tokio::test]
async fn analysis_route_requires_pipeline() {
    let app = TestApiServer::new().await;
    let response = app.server.get("/api/analysis/BTC/USDT").await;
    assert_eq!(response.status_code(), 503);
}

#[tokio::test]
async fn analysis_route_runs_pipeline() {
    let app = TestApiServer::with_candles(uptrend_candles(60)).await;
    let response = app.server.get("/api/analysis/btc/usdt?timeframe=4h").await;
    assert_eq!(response.status_code(), 200);

    let body: Value = response.json();
    assert_eq!(body["pair"], "BTC/USDT");
    assert_eq!(body["timeframe"], "4h");
    assert_eq!(body["candleCount"], 60);
    assert_eq!(body["aggregation"]["marketRegime"], "TRENDING");
    assert_eq!(body["narrative"]["recentCandles"].as_array().map(Vec::len), Some(15));
    assert!(body.get("verdict").is_none());

    let metrics = app.metrics.export().expect("export metrics");
    assert!(metrics.contains("analyses_total{regime=\"TRENDING\"} 1"));
}

#[tokio::test]
async fn analysis_route_defaults_to_hourly() {
    let app = TestApiServer::with_candles(uptrend_candles(30)).await;
    let body: Value = app.server.get("/api/analysis/ETH/USDT").await.json();
    assert_eq!(body["timeframe"], "1h");
}

#[tokio::test]
async fn analysis_route_rejects_unknown_pair_and_timeframe() {
    let app = TestApiServer::with_candles(uptrend_candles(30)).await;

    let response = app.server.get("/api/analysis/FOO/BAR").await;
    assert_eq!(response.status_code(), 400);

    let response = app.server.get("/api/analysis/BTC/USDT?timeframe=2w").await;
    assert_eq!(response.status_code(), 400);
}

#[tokio::test]
async fn analysis_route_reports_empty_upstream_as_bad_gateway() {
    let app = TestApiServer::with_candles(vec![]).await;
    let response = app.server.get("/api/analysis/BTC/USDT").await;
    assert_eq!(response.status_code(), 502);
    assert_eq!(app.metrics.market_data_errors_total.get(), 1);
}
