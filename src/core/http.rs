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
use tokio::sync::RwLock;
use tower::ServiceBuilder;
use tower_http::{
    cors::CorsLayer,
    trace::{DefaultMakeSpan, DefaultOnRequest, DefaultOnResponse, TraceLayer},
};
use tracing::{error, info, warn, Level};

use crate::config::{load_strategy_configs, AppConfig};
use crate::error::{AnalysisError, MarketDataError, ScreeningError};
use crate::metrics::Metrics;
use crate::models::analysis::AnalysisResult;
use crate::models::filters::FilterSet;
use crate::models::history::{MarketHistory, PriceHistory, VolatilityHistory};
use crate::models::screening::{ScreeningResults, ScreeningSession};
use crate::models::stock::StockSnapshot;
use crate::scoring::ScoringWeights;
use crate::screener::ScreeningEngine;
use crate::services::{
    InMemoryMarketData, InMemoryResultStore, MarketDataProvider, ResultStore, DEFAULT_HISTORY_LIMIT,
};
use crate::strategies::StrategyRegistry;

pub const SERVICE_NAME: &str = "strikewise-screener";
const DEFAULT_STRATEGY: &str = "PCS";

pub type SharedProvider = Arc<dyn MarketDataProvider + Send + Sync>;

#[derive(Clone)]
pub struct AppState {
    pub health: Arc<RwLock<HealthStatus>>,
    pub metrics: Arc<Metrics>,
    pub start_time: Arc<Instant>,
    pub engine: Arc<ScreeningEngine>,
    pub provider: Option<SharedProvider>,
    pub store: Arc<dyn ResultStore>,
}

impl AppState {
    /// State with built-in strategies, no provider and an in-memory store
    pub fn new(metrics: Arc<Metrics>) -> Self {
        let engine = ScreeningEngine::new(StrategyRegistry::with_builtin()).with_metrics(metrics.clone());
        Self {
            health: Arc::new(RwLock::new(HealthStatus::default())),
            metrics,
            start_time: Arc::new(Instant::now()),
            engine: Arc::new(engine),
            provider: None,
            store: Arc::new(InMemoryResultStore::new()),
        }
    }

    pub fn with_engine(mut self, engine: ScreeningEngine) -> Self {
        self.engine = Arc::new(engine.with_metrics(self.metrics.clone()));
        self
    }

    pub fn with_provider(mut self, provider: SharedProvider) -> Self {
        self.provider = Some(provider);
        self
    }

    pub fn with_store(mut self, store: Arc<dyn ResultStore>) -> Self {
        self.store = store;
        self
    }
}

#[derive(Clone, Debug)]
pub struct HealthStatus {
    pub status: String,
}

impl Default for HealthStatus {
    fn default() -> Self {
        Self {
            status: "healthy".to_string(),
        }
    }
}

fn screening_status(e: &ScreeningError) -> StatusCode {
    match e {
        ScreeningError::UnknownStrategy(_) => StatusCode::NOT_FOUND,
        ScreeningError::MarketData(MarketDataError::UnknownTicker(_)) => StatusCode::NOT_FOUND,
        ScreeningError::MarketData(MarketDataError::Unavailable(_)) => StatusCode::BAD_GATEWAY,
        ScreeningError::NoDataSource => StatusCode::SERVICE_UNAVAILABLE,
        ScreeningError::Analysis(AnalysisError::Scoring(_)) => StatusCode::UNPROCESSABLE_ENTITY,
        ScreeningError::Analysis(AnalysisError::Pricing(_)) => StatusCode::INTERNAL_SERVER_ERROR,
    }
}

fn log_failure(e: &ScreeningError, context: &str) -> StatusCode {
    let status = screening_status(e);
    if status.is_server_error() {
        error!(error = %e, "{}", context);
    } else {
        warn!(error = %e, "{}", context);
    }
    status
}

pub async fn health_check(State(state): State<AppState>) -> Result<Json<Value>, StatusCode> {
    let health = state.health.read().await;
    let uptime_seconds = state.start_time.elapsed().as_secs();
    Ok(Json(json!({
        "status": health.status,
        "uptime_seconds": uptime_seconds,
        "service": SERVICE_NAME
    })))
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
        error!(
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
pub struct StrategyInfo {
    pub key: String,
    pub name: String,
    pub default_filters: FilterSet,
    pub scoring_weights: ScoringWeights,
}

async fn list_strategies(State(state): State<AppState>) -> Json<Vec<StrategyInfo>> {
    let strategies = state
        .engine
        .registry()
        .iter()
        .map(|s| StrategyInfo {
            key: s.key().to_string(),
            name: s.name().to_string(),
            default_filters: s.default_filters(),
            scoring_weights: s.scoring_weights().clone(),
        })
        .collect();
    Json(strategies)
}

fn default_strategy() -> String {
    DEFAULT_STRATEGY.to_string()
}

#[derive(Debug, Deserialize)]
pub struct ScreenRequest {
    #[serde(default = "default_strategy")]
    pub strategy: String,
    #[serde(default)]
    pub filters: Option<FilterSet>,
    /// Universe to screen; the server's provider is used when absent.
    #[serde(default)]
    pub stocks: Option<Vec<StockSnapshot>>,
}

/// Screen a universe and store the ranked results
async fn screen(
    State(state): State<AppState>,
    Json(request): Json<ScreenRequest>,
) -> Result<Json<ScreeningResults>, StatusCode> {
    let results = match (request.stocks, state.provider.as_ref()) {
        (Some(stocks), _) => state.engine.screen(&request.strategy, request.filters, &stocks),
        (None, Some(provider)) => {
            state
                .engine
                .screen_from_provider(&request.strategy, request.filters, provider.as_ref())
        }
        (None, None) => Err(ScreeningError::NoDataSource),
    }
    .map_err(|e| log_failure(&e, "Screening failed"))?;

    match state.store.save_results(&results) {
        Ok(id) => info!(result_id = %id, results = results.len(), "Stored screening results"),
        Err(e) => warn!(error = %e, "Failed to store screening results"),
    }

    Ok(Json(results))
}

#[derive(Debug, Deserialize)]
struct HistoryQuery {
    limit: Option<usize>,
}

async fn screening_history(
    State(state): State<AppState>,
    Query(params): Query<HistoryQuery>,
) -> Result<Json<Vec<ScreeningSession>>, StatusCode> {
    let limit = params.limit.unwrap_or(DEFAULT_HISTORY_LIMIT);
    state.store.history(limit).map(Json).map_err(|e| {
        error!(error = %e, "Failed to load screening history");
        StatusCode::INTERNAL_SERVER_ERROR
    })
}

#[derive(Debug, Deserialize)]
pub struct AnalyzeRequest {
    #[serde(default = "default_strategy")]
    pub strategy: String,
    pub stock: StockSnapshot,
    #[serde(default)]
    pub price_history: PriceHistory,
    #[serde(default)]
    pub iv_history: VolatilityHistory,
}

/// Analyze a snapshot supplied in the request body
async fn analyze(
    State(state): State<AppState>,
    Json(request): Json<AnalyzeRequest>,
) -> Result<Json<AnalysisResult>, StatusCode> {
    let history = MarketHistory::new(request.price_history, request.iv_history);
    let analysis = state
        .engine
        .load_strategy(&request.strategy)
        .and_then(|strategy| {
            state
                .engine
                .analyze_stock(strategy.as_ref(), &request.stock, &history)
        })
        .map_err(|e| log_failure(&e, "Analysis failed"))?;

    store_analysis(&state, &analysis);
    Ok(Json(analysis))
}

/// Analyze a ticker known to the server's provider
async fn analyze_ticker(
    State(state): State<AppState>,
    Path((strategy, ticker)): Path<(String, String)>,
) -> Result<Json<AnalysisResult>, StatusCode> {
    let provider = state
        .provider
        .as_ref()
        .ok_or(StatusCode::SERVICE_UNAVAILABLE)?;

    let analysis = state
        .engine
        .analyze(&strategy, &ticker, provider.as_ref())
        .map_err(|e| log_failure(&e, "Analysis failed"))?;

    store_analysis(&state, &analysis);
    Ok(Json(analysis))
}

fn store_analysis(state: &AppState, analysis: &AnalysisResult) {
    if let Err(e) = state.store.save_analysis(analysis) {
        warn!(ticker = %analysis.ticker, error = %e, "Failed to store analysis");
    }
}

pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health_check))
        .route("/metrics", get(metrics_handler))
        .route("/api/strategies", get(list_strategies))
        .route("/api/screen", post(screen))
        .route("/api/history", get(screening_history))
        .route("/api/analyze", post(analyze))
        .route("/api/analyze/{strategy}/{ticker}", get(analyze_ticker))
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

pub async fn start_server(config: AppConfig) -> Result<(), Box<dyn std::error::Error>> {
    let metrics = Arc::new(Metrics::new()?);

    let registry = match config.strategy_config_dir {
        Some(ref dir) => {
            let configs = load_strategy_configs(dir)?;
            info!(count = configs.len(), dir = %dir.display(), "Loaded strategy configs");
            StrategyRegistry::from_configs(&configs)
        }
        None => StrategyRegistry::with_builtin(),
    };

    let mut state = AppState::new(metrics).with_engine(ScreeningEngine::new(registry));

    match config.universe_file {
        Some(ref path) => {
            let provider = InMemoryMarketData::from_json_file(path)?;
            info!(stocks = provider.len(), path = %path.display(), "Loaded universe");
            state = state.with_provider(Arc::new(provider));
        }
        None => {
            warn!("No UNIVERSE_FILE configured - /api/screen requires stocks in the request body");
        }
    }

    let app = create_router(state);
    let listener = tokio::net::TcpListener::bind(format!("0.0.0.0:{}", config.port)).await?;

    info!(port = config.port, "HTTP server listening on port {}", config.port);
    axum::serve(listener, app).await?;

    Ok(())
}
