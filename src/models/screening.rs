//! Screening run output and history entries

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::models::filters::FilterSet;
use crate::models::stock::StockSnapshot;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RankedStock {
    #[serde(flatten)]
    pub stock: StockSnapshot,
    #[serde(rename = "strategy_score")]
    pub score: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScreeningMetadata {
    pub num_results: usize,
    pub strategy_module: String,
}

/// Ranked universe plus the filters that produced it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScreeningResults {
    pub timestamp: DateTime<Utc>,
    pub strategy: String,
    pub filters: FilterSet,
    /// Score descending; ties keep input order.
    pub stocks: Vec<RankedStock>,
    pub metadata: ScreeningMetadata,
}

impl ScreeningResults {
    pub fn len(&self) -> usize {
        self.stocks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.stocks.is_empty()
    }

    pub fn top(&self) -> Option<&RankedStock> {
        self.stocks.first()
    }

    /// Identifier of the form `2024-01-31_093000_PCS`.
    pub fn result_id(&self) -> String {
        format!("{}_{}", self.timestamp.format("%Y-%m-%d_%H%M%S"), self.strategy)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScreeningSession {
    pub id: String,
    pub timestamp: DateTime<Utc>,
    pub strategy: String,
    pub num_results: usize,
    pub filters_summary: String,
}

impl From<&ScreeningResults> for ScreeningSession {
    fn from(results: &ScreeningResults) -> Self {
        Self {
            id: results.result_id(),
            timestamp: results.timestamp,
            strategy: results.strategy.clone(),
            num_results: results.len(),
            filters_summary: results.filters.summary(),
        }
    }
}
