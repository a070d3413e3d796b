use chrono::{Duration, TimeZone, Utc};

use crate::fixtures::strong_candidate;
use strikewise::error::StorageError;
use strikewise::models::filters::FilterSet;
use strikewise::models::history::MarketHistory;
use strikewise::models::screening::{RankedStock, ScreeningMetadata, ScreeningResults};
use strikewise::services::{InMemoryResultStore, ResultStore};
use strikewise::strategies::{PutCreditSpread, Strategy};

fn results_at(offset_secs: i64) -> ScreeningResults {
    ScreeningResults {
        timestamp: Utc.with_ymd_and_hms(2024, 3, 1, 9, 30, 0).unwrap() + Duration::seconds(offset_secs),
        strategy: "PCS".to_string(),
        filters: FilterSet::new().with("price_min", 20.0).with("above_sma20", true),
        stocks: Vec::new(),
        metadata: ScreeningMetadata {
            num_results: 0,
            strategy_module: "Put Credit Spread".to_string(),
        },
    }
}

#[test]
fn test_save_and_load_results() {
    let store = InMemoryResultStore::new();
    let results = results_at(0);

    let id = store.save_results(&results).expect("save");
    assert_eq!(id, "2024-03-01_093000_PCS");
    assert_eq!(store.load_results(&id).expect("load"), results);
}

#[test]
fn test_missing_result_is_not_found() {
    let store = InMemoryResultStore::new();
    assert!(matches!(
        store.load_results("2024-01-01_000000_PCS"),
        Err(StorageError::NotFound(_))
    ));
}

#[test]
fn test_history_is_most_recent_first_and_limited() {
    let store = InMemoryResultStore::new();
    for offset in [0, 120, 60] {
        store.save_results(&results_at(offset)).expect("save");
    }

    let history = store.history(2).expect("history");
    assert_eq!(history.len(), 2);
    assert_eq!(history[0].id, "2024-03-01_093200_PCS");
    assert_eq!(history[1].id, "2024-03-01_093100_PCS");
    assert_eq!(history[0].filters_summary, "above_sma20=true, price_min=20");
    assert_eq!(history[0].num_results, 0);
}

#[test]
fn test_same_second_results_stay_retrievable() {
    let store = InMemoryResultStore::new();
    let first = results_at(0);
    let mut second = results_at(0);
    second.stocks.push(RankedStock {
        stock: strong_candidate("AAPL"),
        score: 76.0,
    });
    second.metadata.num_results = 1;

    let first_id = store.save_results(&first).expect("save");
    let second_id = store.save_results(&second).expect("save");
    let third_id = store.save_results(&first).expect("save");

    assert_eq!(first_id, "2024-03-01_093000_PCS");
    assert_eq!(second_id, "2024-03-01_093000_PCS_2");
    assert_eq!(third_id, "2024-03-01_093000_PCS_3");
    assert!(store.load_results(&first_id).expect("load").is_empty());
    assert_eq!(store.load_results(&second_id).expect("load").len(), 1);

    let ids: Vec<String> = store
        .history(10)
        .expect("history")
        .into_iter()
        .map(|s| s.id)
        .collect();
    assert_eq!(ids, vec![third_id, second_id, first_id]);
}

#[test]
fn test_analysis_lookup_ignores_case() {
    let store = InMemoryResultStore::new();
    let analysis = PutCreditSpread::new()
        .analyze(&strong_candidate("AAPL"), &MarketHistory::default())
        .expect("analysis succeeds");

    store.save_analysis(&analysis).expect("save");
    assert_eq!(store.load_analysis("aapl").expect("load"), analysis);
    assert!(store.load_analysis("MSFT").is_err());
}
