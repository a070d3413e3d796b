//! Per-stock trade analysis output

use serde::{Deserialize, Serialize};
use std::fmt;

/// Short/long put strikes of a credit spread.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RecommendedStrikes {
    pub short: f64,
    pub long: f64,
}

impl RecommendedStrikes {
    pub fn width(&self) -> f64 {
        self.short - self.long
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PremiumEstimate {
    pub credit: f64,
    pub max_risk: f64,
    /// Percent.
    pub return_on_risk: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TradeRecommendation {
    #[serde(rename = "Strong Buy")]
    StrongBuy,
    Buy,
    Hold,
    Avoid,
}

impl TradeRecommendation {
    pub fn as_str(&self) -> &'static str {
        match self {
            TradeRecommendation::StrongBuy => "Strong Buy",
            TradeRecommendation::Buy => "Buy",
            TradeRecommendation::Hold => "Hold",
            TradeRecommendation::Avoid => "Avoid",
        }
    }
}

impl fmt::Display for TradeRecommendation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Price chart payload. All series have the same length as `dates`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PriceChartData {
    pub dates: Vec<String>,
    pub prices: Vec<f64>,
    pub lows: Vec<f64>,
    pub highs: Vec<f64>,
    pub support_levels: Vec<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sma20: Option<Vec<Option<f64>>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sma50: Option<Vec<Option<f64>>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sma200: Option<Vec<Option<f64>>>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct VolatilityChartData {
    pub dates: Vec<String>,
    pub iv_values: Vec<f64>,
    pub current_iv: f64,
    pub iv_low: f64,
    pub iv_high: f64,
    pub iv_mean: f64,
    pub iv_rank: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnalysisResult {
    pub ticker: String,
    pub strategy_score: f64,
    /// Unique, descending.
    pub support_levels: Vec<f64>,
    pub recommended_strikes: RecommendedStrikes,
    pub estimated_premium: f64,
    pub probability_of_profit: f64,
    pub max_risk: f64,
    pub return_on_risk: f64,
    pub trade_recommendation: TradeRecommendation,
    pub risk_assessment: String,
    pub notes: Vec<String>,
    pub price_chart: PriceChartData,
    pub volatility_chart: VolatilityChartData,
}
