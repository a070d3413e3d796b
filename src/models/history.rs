//! Historical price and implied-volatility series supplied by the market data provider

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// One daily bar with the moving averages known at that date.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PricePoint {
    pub date: NaiveDate,
    pub close: f64,
    pub low: f64,
    pub high: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sma20: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sma50: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sma200: Option<f64>,
}

impl PricePoint {
    pub fn new(date: NaiveDate, close: f64, low: f64, high: f64) -> Self {
        Self {
            date,
            close,
            low,
            high,
            sma20: None,
            sma50: None,
            sma200: None,
        }
    }

    pub fn with_smas(mut self, sma20: f64, sma50: f64, sma200: f64) -> Self {
        self.sma20 = Some(sma20);
        self.sma50 = Some(sma50);
        self.sma200 = Some(sma200);
        self
    }
}

/// Price bars, oldest first.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PriceHistory {
    pub points: Vec<PricePoint>,
}

impl PriceHistory {
    pub fn new(points: Vec<PricePoint>) -> Self {
        Self { points }
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn latest(&self) -> Option<&PricePoint> {
        self.points.last()
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VolatilityPoint {
    pub date: NaiveDate,
    pub iv: f64,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct VolatilityHistory {
    pub points: Vec<VolatilityPoint>,
}

impl VolatilityHistory {
    pub fn new(points: Vec<VolatilityPoint>) -> Self {
        Self { points }
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    pub fn values(&self) -> Vec<f64> {
        self.points.iter().map(|p| p.iv).collect()
    }
}

/// Both series for a single ticker.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct MarketHistory {
    #[serde(default)]
    pub prices: PriceHistory,
    #[serde(default)]
    pub volatility: VolatilityHistory,
}

impl MarketHistory {
    pub fn new(prices: PriceHistory, volatility: VolatilityHistory) -> Self {
        Self { prices, volatility }
    }
}
