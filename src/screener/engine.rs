//! Screening orchestrator
//!
//! filter universe -> score each stock -> stable descending rank.

use chrono::Utc;
use std::sync::Arc;
use tracing::{debug, info, warn};

use crate::error::ScreeningError;
use crate::metrics::Metrics;
use crate::models::analysis::AnalysisResult;
use crate::models::filters::FilterSet;
use crate::models::history::MarketHistory;
use crate::models::screening::{RankedStock, ScreeningMetadata, ScreeningResults};
use crate::models::stock::StockSnapshot;
use crate::screener::filters::apply_filters;
use crate::services::market_data::MarketDataProvider;
use crate::strategies::{Strategy, StrategyRegistry};

#[derive(Clone)]
pub struct ScreeningEngine {
    registry: StrategyRegistry,
    metrics: Option<Arc<Metrics>>,
}

impl Default for ScreeningEngine {
    fn default() -> Self {
        Self::new(StrategyRegistry::with_builtin())
    }
}

impl ScreeningEngine {
    pub fn new(registry: StrategyRegistry) -> Self {
        Self {
            registry,
            metrics: None,
        }
    }

    pub fn with_metrics(mut self, metrics: Arc<Metrics>) -> Self {
        self.metrics = Some(metrics);
        self
    }

    pub fn registry(&self) -> &StrategyRegistry {
        &self.registry
    }

    pub fn available_strategies(&self) -> Vec<String> {
        self.registry.names()
    }

    pub fn load_strategy(&self, name: &str) -> Result<Arc<dyn Strategy>, ScreeningError> {
        self.registry
            .get(name)
            .ok_or_else(|| ScreeningError::UnknownStrategy(name.to_string()))
    }

    /// Screen a supplied universe. `None` filters means the strategy defaults.
    pub fn screen(
        &self,
        strategy_name: &str,
        filters: Option<FilterSet>,
        universe: &[StockSnapshot],
    ) -> Result<ScreeningResults, ScreeningError> {
        let strategy = self.load_strategy(strategy_name)?;
        let filters = filters.unwrap_or_else(|| strategy.default_filters());
        Ok(self.run(strategy_name, strategy.as_ref(), filters, universe))
    }

    /// Pull the universe from a provider using the strategy's translated filters.
    pub fn screen_from_provider<P>(
        &self,
        strategy_name: &str,
        filters: Option<FilterSet>,
        provider: &P,
    ) -> Result<ScreeningResults, ScreeningError>
    where
        P: MarketDataProvider + ?Sized,
    {
        let strategy = self.load_strategy(strategy_name)?;
        let filters = filters.unwrap_or_else(|| strategy.default_filters());
        let universe = provider.screen(&strategy.finviz_filters(&filters))?;
        Ok(self.run(strategy_name, strategy.as_ref(), filters, &universe))
    }

    fn run(
        &self,
        strategy_name: &str,
        strategy: &dyn Strategy,
        filters: FilterSet,
        universe: &[StockSnapshot],
    ) -> ScreeningResults {
        let filtered = apply_filters(universe, &filters);
        let scored = self.score_stocks(strategy, &filtered);
        let stocks = rank_results(scored);

        info!(
            strategy = %strategy.name(),
            universe = universe.len(),
            filtered = filtered.len(),
            results = stocks.len(),
            "Screening complete"
        );

        if let Some(ref metrics) = self.metrics {
            metrics.screenings_total.inc();
        }

        ScreeningResults {
            timestamp: Utc::now(),
            strategy: strategy_name.to_string(),
            filters,
            metadata: ScreeningMetadata {
                num_results: stocks.len(),
                strategy_module: strategy.name().to_string(),
            },
            stocks,
        }
    }

    /// Score each stock; a stock that fails to score gets 0.0.
    pub fn score_stocks(&self, strategy: &dyn Strategy, stocks: &[&StockSnapshot]) -> Vec<RankedStock> {
        stocks
            .iter()
            .map(|stock| {
                let score = match strategy.score(stock) {
                    Ok(score) => score,
                    Err(e) => {
                        warn!(ticker = %stock.ticker, error = %e, "Failed to score stock, assigning 0");
                        if let Some(ref metrics) = self.metrics {
                            metrics.scoring_failures_total.inc();
                        }
                        0.0
                    }
                };
                if let Some(ref metrics) = self.metrics {
                    metrics.stocks_scored_total.inc();
                }
                RankedStock {
                    stock: (*stock).clone(),
                    score,
                }
            })
            .collect()
    }

    /// Analyze one ticker with history fetched from the provider.
    pub fn analyze<P>(
        &self,
        strategy_name: &str,
        ticker: &str,
        provider: &P,
    ) -> Result<AnalysisResult, ScreeningError>
    where
        P: MarketDataProvider + ?Sized,
    {
        let strategy = self.load_strategy(strategy_name)?;
        let stock = provider.snapshot(ticker)?;
        let history = provider.market_history(ticker)?;
        self.analyze_stock(strategy.as_ref(), &stock, &history)
    }

    pub fn analyze_stock(
        &self,
        strategy: &dyn Strategy,
        stock: &StockSnapshot,
        history: &MarketHistory,
    ) -> Result<AnalysisResult, ScreeningError> {
        debug!(
            ticker = %stock.ticker,
            strategy = %strategy.name(),
            bars = history.prices.len(),
            "Analyzing stock"
        );
        let analysis = strategy.analyze(stock, history)?;
        if let Some(ref metrics) = self.metrics {
            metrics.analyses_total.inc();
        }
        Ok(analysis)
    }
}

/// Sort by score descending. Stable: equal scores keep their input order.
pub fn rank_results(mut stocks: Vec<RankedStock>) -> Vec<RankedStock> {
    stocks.sort_by(|a, b| b.score.total_cmp(&a.score));
    stocks
}
