//! Indicator server for the stock dashboard
//!
//! Run: cargo run --release --bin server
//! Test: curl -X POST http://localhost:3001/rsi -H "Content-Type: application/json" -d '{"values":[44,44.5,45,44.5,45.5,46,45.5,46.5,47,46,45,44,43,44,45,46],"period":14}'

use std::sync::Arc;

use anyhow::Context;
use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::routing::{get, post};
use axum::{Json, Router};
use chrono::Local;
use serde::{Deserialize, Serialize};
use serde_json::json;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;
use tracing::{info, warn};

use dashboard_indicators::common::to_points;
use dashboard_indicators::config::ServerConfig;
use dashboard_indicators::{
    telemetry, Bar, BollingerBands, IndicatorError, OverlayConfig, Overlays, PeriodStats, Point, Range, Series,
    BOLLINGER_PERIOD, BOLLINGER_STD_DEV, RSI_PERIOD,
};

// ============================================================================
// State & Errors
// ============================================================================

struct AppState {
    config: ServerConfig,
}

struct ApiError(IndicatorError);

impl From<IndicatorError> for ApiError {
    fn from(e: IndicatorError) -> Self {
        ApiError(e)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        warn!(error = %self.0, "request rejected");
        (StatusCode::UNPROCESSABLE_ENTITY, Json(json!({ "error": self.0.to_string() }))).into_response()
    }
}

// ============================================================================
// Request/Response Types
// ============================================================================

#[derive(Deserialize)]
struct SingleSeriesRequest {
    values: Vec<f64>,
    period: usize,
}

#[derive(Deserialize)]
struct RsiRequest {
    values: Vec<f64>,
    #[serde(default = "default_rsi_period")]
    period: usize,
}

fn default_rsi_period() -> usize {
    RSI_PERIOD
}

#[derive(Deserialize)]
struct EmaRequest {
    values: Vec<Point>,
    period: usize,
}

#[derive(Deserialize)]
struct BollingerRequest {
    values: Vec<f64>,
    period: Option<usize>,
    std_mult: Option<f64>,
}

#[derive(Deserialize)]
struct StatsRequest {
    bars: Vec<Bar>,
}

#[derive(Deserialize)]
struct BatchRequest {
    bars: Vec<Bar>,
    #[serde(default)]
    config: OverlayConfig,
}

#[derive(Serialize)]
struct SeriesResponse {
    result: Vec<Point>,
}

#[derive(Serialize)]
struct RangeInfo {
    token: &'static str,
    label: &'static str,
    start_date: chrono::NaiveDate,
    default: bool,
}

// ============================================================================
// Handlers
// ============================================================================

async fn sma(Json(req): Json<SingleSeriesRequest>) -> Json<SeriesResponse> {
    Json(SeriesResponse { result: dashboard_indicators::sma(&req.values, req.period) })
}

/// Accepts nulls in `values` as gaps.
async fn ema(Json(req): Json<EmaRequest>) -> Json<SeriesResponse> {
    Json(SeriesResponse { result: dashboard_indicators::ema(&req.values, req.period) })
}

async fn ema_closes(Json(req): Json<SingleSeriesRequest>) -> Json<SeriesResponse> {
    Json(SeriesResponse { result: dashboard_indicators::ema(&to_points(&req.values), req.period) })
}

async fn rsi(Json(req): Json<RsiRequest>) -> Json<SeriesResponse> {
    Json(SeriesResponse { result: dashboard_indicators::rsi(&req.values, req.period) })
}

async fn rsi_wilder(Json(req): Json<RsiRequest>) -> Json<SeriesResponse> {
    Json(SeriesResponse { result: dashboard_indicators::rsi_wilder(&req.values, req.period) })
}

async fn bollinger(Json(req): Json<BollingerRequest>) -> Json<BollingerBands> {
    Json(dashboard_indicators::bollinger(
        &req.values,
        req.period.unwrap_or(BOLLINGER_PERIOD),
        req.std_mult.unwrap_or(BOLLINGER_STD_DEV),
    ))
}

async fn stats(Json(req): Json<StatsRequest>) -> Result<Json<PeriodStats>, ApiError> {
    let series = Series::new(req.bars)?;
    Ok(Json(dashboard_indicators::period_stats(series.bars())?))
}

// Batch endpoint - every overlay for a series in one call
async fn batch(Json(req): Json<BatchRequest>) -> Result<Json<Overlays>, ApiError> {
    let series = Series::new(req.bars)?;
    Ok(Json(Overlays::compute(&series, &req.config)))
}

async fn ranges(State(state): State<Arc<AppState>>) -> Json<Vec<RangeInfo>> {
    let today = Local::now().date_naive();
    Json(
        Range::ALL
            .into_iter()
            .map(|r| RangeInfo {
                token: r.token(),
                label: r.label(),
                start_date: r.start_date(today),
                default: r == state.config.default_range,
            })
            .collect(),
    )
}

async fn range(Path(token): Path<String>) -> Result<Json<RangeInfo>, ApiError> {
    let r: Range = token.parse()?;
    Ok(Json(RangeInfo {
        token: r.token(),
        label: r.label(),
        start_date: r.start_date(Local::now().date_naive()),
        default: false,
    }))
}

async fn health() -> &'static str {
    "ok"
}

fn router(state: Arc<AppState>) -> Router {
    let cors = if state.config.cors_any_origin { CorsLayer::permissive() } else { CorsLayer::new() };

    Router::new()
        // Moving averages
        .route("/sma", post(sma))
        .route("/ema", post(ema))
        .route("/ema/closes", post(ema_closes))
        // Oscillators
        .route("/rsi", post(rsi))
        .route("/rsi/wilder", post(rsi_wilder))
        // Volatility
        .route("/bollinger", post(bollinger))
        // Summary
        .route("/stats", post(stats))
        // Batch - all overlays in one call
        .route("/batch", post(batch))
        .route("/ranges", get(ranges))
        .route("/ranges/{token}", get(range))
        .route("/health", get(health))
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .with_state(state)
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let _ = dotenv::dotenv();
    telemetry::init();

    let config = ServerConfig::from_env()?;
    let addr = config.addr();
    let app = router(Arc::new(AppState { config }));

    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .with_context(|| format!("failed to bind {addr}"))?;
    info!(%addr, "indicator server listening");

    axum::serve(listener, app).await.context("server error")?;
    Ok(())
}
