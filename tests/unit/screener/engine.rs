use std::sync::Arc;

use crate::fixtures::{strong_candidate, synthetic_market_history, weak_candidate};
use strikewise::error::{MarketDataError, ScreeningError};
use strikewise::metrics::Metrics;
use strikewise::models::filters::FilterSet;
use strikewise::models::screening::RankedStock;
use strikewise::screener::{rank_results, ScreeningEngine};
use strikewise::services::InMemoryMarketData;

fn ranked(ticker: &str, score: f64) -> RankedStock {
    RankedStock {
        stock: strong_candidate(ticker),
        score,
    }
}

#[test]
fn test_rank_is_descending_and_stable() {
    let ranked = rank_results(vec![
        ranked("A", 50.0),
        ranked("B", 80.0),
        ranked("C", 50.0),
        ranked("D", 90.0),
        ranked("E", 50.0),
    ]);
    let order: Vec<&str> = ranked.iter().map(|r| r.stock.ticker.as_str()).collect();
    assert_eq!(order, vec!["D", "B", "A", "C", "E"]);
}

#[test]
fn test_unknown_strategy_is_an_error() {
    let engine = ScreeningEngine::default();
    let err = engine.screen("Iron Condor", None, &[]).unwrap_err();
    assert!(matches!(err, ScreeningError::UnknownStrategy(ref name) if name == "Iron Condor"));
}

#[test]
fn test_screen_applies_default_filters_and_ranks() {
    let engine = ScreeningEngine::default();
    let mut better = strong_candidate("BETTER");
    better.iv_rank = 90.0;
    let universe = vec![strong_candidate("GOOD"), weak_candidate("WEAK"), better];

    let results = engine.screen("PCS", None, &universe).expect("screening succeeds");

    assert_eq!(results.strategy, "PCS");
    assert_eq!(results.metadata.strategy_module, "Put Credit Spread");
    assert_eq!(results.metadata.num_results, 2);
    assert_eq!(results.top().map(|r| r.stock.ticker.as_str()), Some("BETTER"));
    assert!(results.stocks.iter().all(|r| r.stock.ticker != "WEAK"));
    assert_eq!(results.filters.number("earnings_buffer_days"), Some(14.0));
}

#[test]
fn test_explicit_filters_replace_defaults() {
    let engine = ScreeningEngine::default();
    let universe = vec![strong_candidate("GOOD"), weak_candidate("WEAK")];

    let results = engine
        .screen("pcs", Some(FilterSet::new()), &universe)
        .expect("screening succeeds");
    assert_eq!(results.len(), 2);
    assert!(results.filters.is_empty());
}

#[test]
fn test_malformed_stock_scores_zero_and_run_continues() {
    let metrics = Arc::new(Metrics::new().expect("metrics"));
    let engine = ScreeningEngine::default().with_metrics(metrics.clone());

    let mut broken = strong_candidate("BROKEN");
    broken.iv_rank = f64::NAN;
    let universe = vec![broken, strong_candidate("GOOD")];

    let results = engine
        .screen("PCS", Some(FilterSet::new()), &universe)
        .expect("screening succeeds");

    assert_eq!(results.len(), 2);
    assert_eq!(results.stocks[0].stock.ticker, "GOOD");
    assert_eq!(results.stocks[1].stock.ticker, "BROKEN");
    assert_eq!(results.stocks[1].score, 0.0);
    assert_eq!(metrics.scoring_failures_total.get(), 1);
    assert_eq!(metrics.stocks_scored_total.get(), 2);
    assert_eq!(metrics.screenings_total.get(), 1);
}

#[test]
fn test_empty_universe_gives_empty_results() {
    let results = ScreeningEngine::default()
        .screen("PCS", None, &[])
        .expect("screening succeeds");
    assert!(results.is_empty());
    assert!(results.top().is_none());
}

#[test]
fn test_screen_from_provider() {
    let provider = InMemoryMarketData::new(vec![strong_candidate("AAA"), weak_candidate("BBB")]);
    let results = ScreeningEngine::default()
        .screen_from_provider("PCS", None, &provider)
        .expect("screening succeeds");
    assert_eq!(results.len(), 1);
    assert_eq!(results.stocks[0].stock.ticker, "AAA");
}

#[test]
fn test_analyze_through_provider() {
    let stock = strong_candidate("AAPL");
    let provider = InMemoryMarketData::new(vec![stock.clone()]).with_history(
        "AAPL",
        synthetic_market_history("AAPL", 120, stock.price, stock.implied_volatility),
    );
    let engine = ScreeningEngine::default();

    let analysis = engine.analyze("PCS", "aapl", &provider).expect("analysis succeeds");
    assert_eq!(analysis.ticker, "AAPL");
    assert_eq!(analysis.price_chart.prices.len(), 120);

    let err = engine.analyze("PCS", "MSFT", &provider).unwrap_err();
    assert!(matches!(err, ScreeningError::MarketData(MarketDataError::UnknownTicker(_))));
}
