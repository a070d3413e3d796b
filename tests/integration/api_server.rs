//! Integration tests for the API Server
//!
//! Health, metrics, screening, history and single-stock analysis endpoints.


use serde_json::{json, Value};
use strikewise::services::ResultStore;

use crate::fixtures::{strong_candidate, synthetic_market_history, weak_candidate};
use test_utils::TestApiServer;

#[tokio::test]
async fn health_endpoint_reports_healthy_status() {
    let app = TestApiServer::new().await;
    let response = app.server.get("/health").await;
    assert_eq!(response.status_code(), 200);

    let body: Value = response.json();
    assert_eq!(body["status"], "healthy");
    assert!(body["uptime_seconds"].as_u64().is_some());
    assert_eq!(body["service"], "strikewise-screener");
}

#[tokio::test]
async fn metrics_endpoint_exposes_prometheus_metrics() {
    let app = TestApiServer::new().await;
    let _ = app.server.get("/health").await;

    let response = app.server.get("/metrics").await;
    assert_eq!(response.status_code(), 200);

    let body = response.text();
    for name in [
        "http_requests_total",
        "http_request_duration_seconds",
        "http_requests_in_flight",
        "screenings_total",
        "scoring_failures_total",
    ] {
        assert!(body.contains(name), "Expected {} metric", name);
    }
}

#[tokio::test]
async fn strategies_endpoint_lists_put_credit_spread() {
    let app = TestApiServer::new().await;
    let response = app.server.get("/api/strategies").await;
    assert_eq!(response.status_code(), 200);

    let body: Value = response.json();
    assert_eq!(body[0]["key"], "PCS");
    assert_eq!(body[0]["name"], "Put Credit Spread");
    assert_eq!(body[0]["default_filters"]["earnings_buffer_days"], 14.0);
    assert_eq!(body[0]["scoring_weights"]["iv_rank"], 30.0);
}

#[tokio::test]
async fn screen_ranks_supplied_stocks() {
    let app = TestApiServer::new().await;
    let mut better = strong_candidate("BETTER");
    better.iv_rank = 90.0;

    let response = app
        .server
        .post("/api/screen")
        .json(&json!({
            "strategy": "PCS",
            "stocks": [strong_candidate("GOOD"), weak_candidate("WEAK"), better]
        }))
        .await;
    assert_eq!(response.status_code(), 200);

    let body: Value = response.json();
    let stocks = body["stocks"].as_array().expect("stocks array");
    assert_eq!(stocks.len(), 2);
    assert_eq!(stocks[0]["ticker"], "BETTER");
    assert_eq!(stocks[1]["ticker"], "GOOD");
    assert!((stocks[1]["strategy_score"].as_f64().expect("score") - 76.0).abs() < 1e-9);
    assert_eq!(body["metadata"]["num_results"], 2);
    assert_eq!(body["metadata"]["strategy_module"], "Put Credit Spread");

    assert_eq!(app.store.history(10).expect("history").len(), 1);
    assert_eq!(app.metrics.screenings_total.get(), 1);
}

#[tokio::test]
async fn screen_with_custom_filters() {
    let app = TestApiServer::new().await;
    let response = app
        .server
        .post("/api/screen")
        .json(&json!({
            "filters": {"price_max": 100},
            "stocks": [strong_candidate("GOOD"), weak_candidate("WEAK")]
        }))
        .await;
    assert_eq!(response.status_code(), 200);

    let body: Value = response.json();
    assert_eq!(body["stocks"][0]["ticker"], "WEAK");
    assert_eq!(body["filters"], json!({"price_max": 100.0}));
}

#[tokio::test]
async fn screen_uses_provider_when_no_stocks_supplied() {
    let app = TestApiServer::with_universe().await;
    let response = app.server.post("/api/screen").json(&json!({})).await;
    assert_eq!(response.status_code(), 200);

    let body: Value = response.json();
    let tickers: Vec<&str> = body["stocks"]
        .as_array()
        .expect("stocks array")
        .iter()
        .filter_map(|s| s["ticker"].as_str())
        .collect();
    assert_eq!(tickers, vec!["MSFT", "AAPL"]);
}

#[tokio::test]
async fn screen_without_data_source_is_unavailable() {
    let app = TestApiServer::new().await;
    let response = app.server.post("/api/screen").json(&json!({})).await;
    assert_eq!(response.status_code(), 503);
}

#[tokio::test]
async fn screen_with_unknown_strategy_is_not_found() {
    let app = TestApiServer::new().await;
    let response = app
        .server
        .post("/api/screen")
        .json(&json!({"strategy": "Iron Condor", "stocks": []}))
        .await;
    assert_eq!(response.status_code(), 404);
}

#[tokio::test]
async fn history_lists_recent_sessions() {
    let app = TestApiServer::with_universe().await;
    for _ in 0..2 {
        let response = app.server.post("/api/screen").json(&json!({})).await;
        assert_eq!(response.status_code(), 200);
    }

    let response = app.server.get("/api/history").await;
    assert_eq!(response.status_code(), 200);
    let body: Value = response.json();
    let sessions = body.as_array().expect("sessions array");
    assert!(!sessions.is_empty());
    assert_eq!(sessions[0]["strategy"], "PCS");
    assert_eq!(sessions[0]["num_results"], 2);
    assert!(sessions[0]["filters_summary"]
        .as_str()
        .expect("summary")
        .contains("earnings_buffer_days=14"));

    let response = app.server.get("/api/history").add_query_param("limit", 1).await;
    let body: Value = response.json();
    assert_eq!(body.as_array().map(Vec::len), Some(1));
}

#[tokio::test]
async fn analyze_supplied_snapshot() {
    let app = TestApiServer::new().await;
    let stock = strong_candidate("AAPL");
    let history = synthetic_market_history("AAPL", 120, stock.price, stock.implied_volatility);

    let response = app
        .server
        .post("/api/analyze")
        .json(&json!({
            "strategy": "PCS",
            "stock": stock,
            "price_history": history.prices,
            "iv_history": history.volatility
        }))
        .await;
    assert_eq!(response.status_code(), 200);

    let body: Value = response.json();
    assert_eq!(body["ticker"], "AAPL");
    assert_eq!(body["price_chart"]["prices"].as_array().map(Vec::len), Some(120));
    assert_eq!(body["volatility_chart"]["iv_values"].as_array().map(Vec::len), Some(120));
    let pop = body["probability_of_profit"].as_f64().expect("pop");
    assert!((0.0..=100.0).contains(&pop));
    assert!(app.store.load_analysis("AAPL").is_ok());
}

#[tokio::test]
async fn analyze_malformed_snapshot_is_unprocessable() {
    let app = TestApiServer::new().await;
    let mut stock = strong_candidate("BAD");
    stock.price = 0.0;

    let response = app
        .server
        .post("/api/analyze")
        .json(&json!({"stock": stock}))
        .await;
    assert_eq!(response.status_code(), 422);
}

#[tokio::test]
async fn analyze_ticker_from_provider() {
    let app = TestApiServer::with_universe().await;
    let response = app.server.get("/api/analyze/PCS/aapl").await;
    assert_eq!(response.status_code(), 200);

    let body: Value = response.json();
    assert_eq!(body["ticker"], "AAPL");
    assert_eq!(body["strategy_score"], 76.0);
    assert!(body["trade_recommendation"].is_string());
    assert!(!body["notes"].as_array().expect("notes").is_empty());
    assert_eq!(app.metrics.analyses_total.get(), 1);
}

#[tokio::test]
async fn analyze_unknown_ticker_is_not_found() {
    let app = TestApiServer::with_universe().await;
    let response = app.server.get("/api/analyze/PCS/TSLA").await;
    assert_eq!(response.status_code(), 404);

    let response = app.server.get("/api/analyze/condor/AAPL").await;
    assert_eq!(response.status_code(), 404);
}

#[tokio::test]
async fn analyze_ticker_without_provider_is_unavailable() {
    let app = TestApiServer::new().await;
    let response = app.server.get("/api/analyze/PCS/AAPL").await;
    assert_eq!(response.status_code(), 503);
}
