//! Point-in-time stock snapshot consumed by every engine component

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Sentinel used when the next earnings date is unknown.
pub const UNKNOWN_EARNINGS_DAYS: u32 = 999;

fn unknown_earnings() -> u32 {
    UNKNOWN_EARNINGS_DAYS
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StockSnapshot {
    pub ticker: String,
    #[serde(default)]
    pub company_name: String,
    pub price: f64,
    #[serde(default)]
    pub volume: u64,
    #[serde(default)]
    pub avg_volume: u64,
    #[serde(default)]
    pub market_cap: f64,

    pub rsi: f64,
    pub sma20: f64,
    pub sma50: f64,
    #[serde(default)]
    pub sma200: f64,
    pub beta: f64,

    pub implied_volatility: f64,
    pub iv_rank: f64,
    #[serde(default)]
    pub option_volume: u64,

    #[serde(default)]
    pub sector: String,
    #[serde(default)]
    pub industry: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub earnings_date: Option<NaiveDate>,
    #[serde(default = "unknown_earnings")]
    pub earnings_days_away: u32,

    #[serde(default)]
    pub perf_week: f64,
    #[serde(default)]
    pub perf_month: f64,
    #[serde(default)]
    pub perf_quarter: f64,

    /// `None` when the data source does not report the flag.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub optionable: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub shortable: Option<bool>,
}

impl StockSnapshot {
    /// Check field ranges, returning one message per violation.
    pub fn validate(&self) -> Vec<String> {
        let mut errors = Vec::new();

        if self.ticker.trim().is_empty() {
            errors.push("ticker is required and cannot be empty".to_string());
        }
        if self.company_name.trim().is_empty() {
            errors.push("company_name is required and cannot be empty".to_string());
        }

        if !(self.price > 0.0) {
            errors.push(format!("price must be positive, got {}", self.price));
        }
        if !(self.market_cap > 0.0) {
            errors.push(format!("market_cap must be positive, got {}", self.market_cap));
        }

        if !(0.0..=100.0).contains(&self.rsi) {
            errors.push(format!("rsi must be between 0 and 100, got {}", self.rsi));
        }
        for (name, value) in [("sma20", self.sma20), ("sma50", self.sma50), ("sma200", self.sma200)] {
            if value < 0.0 {
                errors.push(format!("{} cannot be negative, got {}", name, value));
            }
        }
        if self.beta < 0.0 {
            errors.push(format!("beta cannot be negative, got {}", self.beta));
        }

        if !(0.0..=10.0).contains(&self.implied_volatility) {
            errors.push(format!(
                "implied_volatility must be between 0 and 10, got {}",
                self.implied_volatility
            ));
        }
        if !(0.0..=100.0).contains(&self.iv_rank) {
            errors.push(format!("iv_rank must be between 0 and 100, got {}", self.iv_rank));
        }

        if self.sector.trim().is_empty() {
            errors.push("sector is required and cannot be empty".to_string());
        }
        if self.industry.trim().is_empty() {
            errors.push("industry is required and cannot be empty".to_string());
        }

        errors
    }

    pub fn is_valid(&self) -> bool {
        self.validate().is_empty()
    }
}
