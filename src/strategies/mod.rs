//! Screening strategies: filter defaults, scoring and single-stock analysis.

pub mod put_credit_spread;
pub mod registry;

pub use put_credit_spread::PutCreditSpread;
pub use registry::StrategyRegistry;

use crate::error::{AnalysisError, ScoringError};
use crate::models::analysis::AnalysisResult;
use crate::models::filters::FilterSet;
use crate::models::history::MarketHistory;
use crate::models::stock::StockSnapshot;
use crate::scoring::ScoringWeights;

/// A rule set for one options-selling trade type.
pub trait Strategy: Send + Sync {
    /// Short identifier, e.g. `PCS`
    fn key(&self) -> &str;

    /// Display name, e.g. `Put Credit Spread`
    fn name(&self) -> &str;

    fn default_filters(&self) -> FilterSet;

    fn scoring_weights(&self) -> &ScoringWeights;

    /// Translate screening parameters into screener-service filter codes.
    fn finviz_filters(&self, params: &FilterSet) -> FilterSet;

    /// Score in [0, 100]; higher is a better candidate.
    fn score(&self, stock: &StockSnapshot) -> Result<f64, ScoringError>;

    fn analyze(
        &self,
        stock: &StockSnapshot,
        history: &MarketHistory,
    ) -> Result<AnalysisResult, AnalysisError>;
}
