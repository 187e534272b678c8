//! HTTP endpoint server using Axum

use axum::{
    extract::{Path, Query, Request, State},
    http::StatusCode,
    middleware::Next,
    response::{Json, Response},
    routing::{get, post},
    Router,
};
use serde::{Deserialize, Serialize};
use serde_json::{json, Value};
use std::sync::Arc;
use std::time::Instant;
use tower::ServiceBuilder;
use tower_http::{
    cors::CorsLayer,
    trace::{DefaultMakeSpan, DefaultOnRequest, DefaultOnResponse, TraceLayer},
};
use tracing::{error, info, warn, Level};

use crate::config::markets::{
    find_pair_by_assets, find_timeframe, MarketPair, Timeframe, SUPPORTED_PAIRS, TIMEFRAMES,
};
use crate::config::Config;
use crate::core::analysis::{analyze_candles, AnalysisError, AnalysisPipeline, AnalysisReport};
use crate::indicators::engine::compute_indicators;
use crate::indicators::registry::IndicatorVote;
use crate::metrics::Metrics;
use crate::models::indicators::{Candle, IndicatorBundle};
use crate::models::signal::AggregationResult;
use crate::services::cryptocompare::CryptoCompareProvider;
use crate::services::market_data::MarketDataError;

const DEFAULT_TIMEFRAME: &str = "1h";

#[derive(Clone)]
pub struct AppState {
    pub metrics: Arc<Metrics>,
    pub start_time: Arc<Instant>,
    pub pipeline: Option<Arc<AnalysisPipeline>>,
}

impl AppState {
    pub fn new(metrics: Arc<Metrics>, pipeline: Option<Arc<AnalysisPipeline>>) -> Self {
        Self {
            metrics,
            start_time: Arc::new(Instant::now()),
            pipeline,
        }
    }

    /// Degraded while no market data pipeline is configured: the stateless
    /// indicator routes still work but `/api/analysis` answers 503.
    pub fn health(&self) -> HealthStatus {
        if self.pipeline.is_some() {
            HealthStatus::Healthy
        } else {
            HealthStatus::Degraded
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum HealthStatus {
    Healthy,
    Degraded,
}

pub async fn health_check(State(state): State<AppState>) -> Json<Value> {
    let uptime_seconds = state.start_time.elapsed().as_secs();
    Json(json!({
        "status": state.health(),
        "market_data": state.pipeline.is_some(),
        "uptime_seconds": uptime_seconds,
        "service": "signalix-signal-engine"
    }))
}

pub async fn metrics_handler(State(state): State<AppState>) -> Result<String, StatusCode> {
    state
        .metrics
        .export()
        .map_err(|_| StatusCode::INTERNAL_SERVER_ERROR)
}

/// Middleware to track HTTP request metrics
async fn metrics_middleware(
    State(state): State<AppState>,
    request: Request,
    next: Next,
) -> Response {
    let start = Instant::now();
    let method = request.method().clone();
    let path = request.uri().path().to_string();

    state.metrics.http_requests_in_flight.inc();
    let response = next.run(request).await;
    let status = response.status();
    let duration = start.elapsed();
    state.metrics.http_requests_in_flight.dec();

    state.metrics.http_requests_total.inc();
    state
        .metrics
        .http_request_duration_seconds
        .observe(duration.as_secs_f64());

    if status.is_server_error() {
        tracing::error!(
            method = %method,
            path = %path,
            status = %status,
            duration_ms = duration.as_millis(),
            "HTTP request error"
        );
    }

    response
}

#[derive(Debug, Serialize, Deserialize)]
pub struct CandlesRequest {
    pub candles: Vec<Candle>,
}

#[derive(Debug, Serialize)]
struct AnalyzeResponse {
    indicators: IndicatorBundle,
    votes: Vec<IndicatorVote>,
    aggregation: AggregationResult,
}

#[derive(Debug, Deserialize)]
struct AnalysisQuery {
    timeframe: Option<String>,
}

async fn list_pairs() -> Json<&'static [MarketPair]> {
    Json(SUPPORTED_PAIRS)
}

async fn list_timeframes() -> Json<&'static [Timeframe]> {
    Json(TIMEFRAMES)
}

/// Compute the indicator bundle for a client-supplied candle series
async fn compute_indicators_handler(
    Json(request): Json<CandlesRequest>,
) -> Result<Json<IndicatorBundle>, StatusCode> {
    if request.candles.is_empty() {
        return Err(StatusCode::BAD_REQUEST);
    }
    Ok(Json(compute_indicators(&request.candles)))
}

/// Compute indicators and aggregate them for a client-supplied candle series
async fn analyze_handler(
    Json(request): Json<CandlesRequest>,
) -> Result<Json<AnalyzeResponse>, StatusCode> {
    if request.candles.is_empty() {
        return Err(StatusCode::BAD_REQUEST);
    }
    let (indicators, aggregation) = analyze_candles(&request.candles);
    Ok(Json(AnalyzeResponse {
        votes: indicators.votes(),
        indicators,
        aggregation,
    }))
}

fn status_for(error: &AnalysisError) -> StatusCode {
    match error {
        AnalysisError::MarketData(inner) if inner.is_client_error() => StatusCode::BAD_REQUEST,
        _ => StatusCode::BAD_GATEWAY,
    }
}

/// Fetch candles for a catalogue pair and run the full pipeline
async fn run_analysis(
    State(state): State<AppState>,
    Path((base, quote)): Path<(String, String)>,
    Query(params): Query<AnalysisQuery>,
) -> Result<Json<AnalysisReport>, StatusCode> {
    let pipeline = state
        .pipeline
        .as_ref()
        .ok_or(StatusCode::SERVICE_UNAVAILABLE)?;

    let timeframe_value = params.timeframe.as_deref().unwrap_or(DEFAULT_TIMEFRAME);
    let lookup = find_pair_by_assets(&base, &quote)
        .ok_or_else(|| MarketDataError::UnsupportedPair(format!("{}/{}", base, quote)))
        .and_then(|pair| {
            find_timeframe(timeframe_value)
                .map(|timeframe| (pair, timeframe))
                .ok_or_else(|| MarketDataError::UnknownTimeframe(timeframe_value.to_string()))
        });

    let result = match lookup {
        Ok((pair, timeframe)) => pipeline.run(pair, timeframe).await,
        Err(e) => Err(e.into()),
    };

    result.map(Json).map_err(|e| {
        let status = status_for(&e);
        if status.is_client_error() {
            warn!(error = %e, "Rejected analysis request");
        } else {
            error!(error = %e, base = %base, quote = %quote, "Analysis failed");
        }
        status
    })
}

pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health_check))
        .route("/metrics", get(metrics_handler))
        .route("/api/pairs", get(list_pairs))
        .route("/api/timeframes", get(list_timeframes))
        .route("/api/indicators", post(compute_indicators_handler))
        .route("/api/analyze", post(analyze_handler))
        .route("/api/analysis/{base}/{quote}", get(run_analysis))
        .layer(
            ServiceBuilder::new()
                .layer(
                    TraceLayer::new_for_http()
                        .make_span_with(DefaultMakeSpan::new().level(Level::DEBUG))
                        .on_request(DefaultOnRequest::new().level(Level::DEBUG))
                        .on_response(DefaultOnResponse::new().level(Level::DEBUG)),
                )
                .layer(axum::middleware::from_fn_with_state(
                    state.clone(),
                    metrics_middleware,
                ))
                .layer(CorsLayer::permissive()),
        )
        .with_state(state)
}

pub async fn start_server(config: &Config) -> Result<(), Box<dyn std::error::Error>> {
    let metrics = Arc::new(Metrics::new()?);

    let provider = Arc::new(CryptoCompareProvider::new(config)?);
    let pipeline = AnalysisPipeline::new(provider).with_metrics(metrics.clone());

    let state = AppState::new(metrics, Some(Arc::new(pipeline)));
    let app = create_router(state);
    let address = config.bind_address();
    let listener = tokio::net::TcpListener::bind(&address).await?;

    info!(address = %address, "HTTP server listening on {}", address);
    info!("Metrics endpoint available at http://{}/metrics", address);
    axum::serve(listener, app).await?;

    Ok(())
}
