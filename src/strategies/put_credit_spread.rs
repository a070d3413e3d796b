//! Put credit spread strategy
//!
//! Sells a put below support and buys a lower put for protection. Screens
//! for liquid, trending, moderately volatile large caps with no earnings
//! event inside the trade window.

use tracing::debug;

use crate::analysis::{
    assess_risk, estimate_pcs_premium_with_rate, estimate_pop_for_pcs_with_rate, generate_notes,
    price_chart_data, select_strikes, trade_recommendation, volatility_chart_data,
};
use crate::config::{AnalysisSettings, StrategyConfig};
use crate::error::{AnalysisError, ScoringError};
use crate::indicators::structure::identify_support_levels;
use crate::models::analysis::AnalysisResult;
use crate::models::filters::{FilterSet, FilterValue};
use crate::models::history::MarketHistory;
use crate::models::stock::StockSnapshot;
use crate::scoring::{score_put_credit_spread, ScoringWeights};
use crate::strategies::Strategy;

pub const PCS_KEY: &str = "PCS";
pub const PCS_NAME: &str = "Put Credit Spread";

/// Screening parameter -> screener-service filter code.
const FINVIZ_FILTER_MAP: [(&str, &str); 10] = [
    ("min_market_cap", "cap_midover"),
    ("min_volume", "sh_avgvol_o1000"),
    ("price_min", "sh_price_o20"),
    ("price_max", "sh_price_u200"),
    ("rsi_min", "ta_rsi_os40"),
    ("rsi_max", "ta_rsi_ob70"),
    ("above_sma20", "ta_sma20_pa"),
    ("above_sma50", "ta_sma50_pa"),
    ("optionable", "sh_opt_option"),
    ("shortable", "sh_short_yes"),
];

pub fn pcs_default_filters() -> FilterSet {
    FilterSet::new()
        .with("min_market_cap", 2_000_000_000.0)
        .with("min_volume", 1_000_000.0)
        .with("price_min", 20.0)
        .with("price_max", 200.0)
        .with("rsi_min", 40.0)
        .with("rsi_max", 70.0)
        .with("above_sma20", true)
        .with("above_sma50", true)
        .with("weekly_perf_min", -5.0)
        .with("weekly_perf_max", 10.0)
        .with("beta_min", 0.5)
        .with("beta_max", 1.5)
        .with("optionable", true)
        .with("shortable", true)
        .with("earnings_buffer_days", 14.0)
}

#[derive(Debug, Clone)]
pub struct PutCreditSpread {
    default_filters: FilterSet,
    weights: ScoringWeights,
    settings: AnalysisSettings,
}

impl Default for PutCreditSpread {
    fn default() -> Self {
        Self::new()
    }
}

impl PutCreditSpread {
    pub fn new() -> Self {
        Self {
            default_filters: pcs_default_filters(),
            weights: ScoringWeights::default(),
            settings: AnalysisSettings::default(),
        }
    }

    /// Built-in defaults overlaid with a loaded config file.
    pub fn from_config(config: &StrategyConfig) -> Self {
        Self {
            default_filters: pcs_default_filters().merged(&config.default_filters),
            weights: config.scoring_weights.clone().unwrap_or_default(),
            settings: config.analysis_settings.clone(),
        }
    }

    pub fn with_weights(mut self, weights: ScoringWeights) -> Self {
        self.weights = weights;
        self
    }

    pub fn with_settings(mut self, settings: AnalysisSettings) -> Self {
        self.settings = settings;
        self
    }

    pub fn settings(&self) -> &AnalysisSettings {
        &self.settings
    }
}

impl Strategy for PutCreditSpread {
    fn key(&self) -> &str {
        PCS_KEY
    }

    fn name(&self) -> &str {
        PCS_NAME
    }

    fn default_filters(&self) -> FilterSet {
        self.default_filters.clone()
    }

    fn scoring_weights(&self) -> &ScoringWeights {
        &self.weights
    }

    fn finviz_filters(&self, params: &FilterSet) -> FilterSet {
        params
            .iter()
            .filter(|(_, value)| !matches!(value, FilterValue::Flag(false)))
            .map(|(key, value)| {
                let mapped = FINVIZ_FILTER_MAP
                    .iter()
                    .find(|(param, _)| *param == key.as_str())
                    .map(|(_, code)| code.to_string())
                    .unwrap_or_else(|| key.clone());
                (mapped, *value)
            })
            .collect()
    }

    fn score(&self, stock: &StockSnapshot) -> Result<f64, ScoringError> {
        score_put_credit_spread(stock, &self.weights)
    }

    fn analyze(
        &self,
        stock: &StockSnapshot,
        history: &MarketHistory,
    ) -> Result<AnalysisResult, AnalysisError> {
        let strategy_score = self.score(stock)?;
        let dte = self.settings.default_dte;
        let rate = self.settings.risk_free_rate;

        let support_levels = identify_support_levels(&history.prices);
        let strikes = select_strikes(stock.price, &support_levels);

        let pop = estimate_pop_for_pcs_with_rate(
            stock.price,
            strikes.short,
            dte,
            stock.implied_volatility,
            rate,
        );
        let premium = estimate_pcs_premium_with_rate(
            stock.price,
            strikes.short,
            strikes.long,
            dte,
            stock.implied_volatility,
            rate,
        )?;

        debug!(
            ticker = %stock.ticker,
            score = strategy_score,
            short = strikes.short,
            long = strikes.long,
            pop = pop,
            credit = premium.credit,
            "Analyzed put credit spread"
        );

        Ok(AnalysisResult {
            ticker: stock.ticker.clone(),
            strategy_score,
            recommended_strikes: strikes,
            estimated_premium: premium.credit,
            probability_of_profit: pop,
            max_risk: premium.max_risk,
            return_on_risk: premium.return_on_risk,
            trade_recommendation: trade_recommendation(strategy_score, pop),
            risk_assessment: assess_risk(stock, pop, &premium),
            notes: generate_notes(stock, &support_levels, pop, &premium),
            price_chart: price_chart_data(&history.prices, &support_levels),
            volatility_chart: volatility_chart_data(&history.volatility, stock.implied_volatility),
            support_levels,
        })
    }
}
