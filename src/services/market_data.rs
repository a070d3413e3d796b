//! Market data provider interface and an in-memory implementation.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fs;
use std::path::Path;

use crate::error::MarketDataError;
use crate::models::filters::FilterSet;
use crate::models::history::{MarketHistory, PriceHistory, VolatilityHistory};
use crate::models::stock::StockSnapshot;

pub trait MarketDataProvider {
    /// Universe matching the screener-service filters.
    fn screen(&self, filters: &FilterSet) -> Result<Vec<StockSnapshot>, MarketDataError>;

    fn snapshot(&self, ticker: &str) -> Result<StockSnapshot, MarketDataError>;

    /// Daily bars, oldest first. Empty when no history is known.
    fn price_history(&self, ticker: &str) -> Result<PriceHistory, MarketDataError>;

    fn volatility_history(&self, ticker: &str) -> Result<VolatilityHistory, MarketDataError>;

    fn market_history(&self, ticker: &str) -> Result<MarketHistory, MarketDataError> {
        Ok(MarketHistory::new(
            self.price_history(ticker)?,
            self.volatility_history(ticker)?,
        ))
    }
}

/// One entry of a JSON universe file.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UniverseEntry {
    #[serde(flatten)]
    pub stock: StockSnapshot,
    #[serde(default)]
    pub price_history: PriceHistory,
    #[serde(default)]
    pub iv_history: VolatilityHistory,
}

/// Fixed universe held in memory, in insertion order.
#[derive(Debug, Clone, Default)]
pub struct InMemoryMarketData {
    stocks: Vec<StockSnapshot>,
    histories: HashMap<String, MarketHistory>,
}

impl InMemoryMarketData {
    pub fn new(stocks: Vec<StockSnapshot>) -> Self {
        Self {
            stocks,
            histories: HashMap::new(),
        }
    }

    pub fn with_history(mut self, ticker: &str, history: MarketHistory) -> Self {
        self.histories.insert(ticker.to_uppercase(), history);
        self
    }

    pub fn from_entries(entries: Vec<UniverseEntry>) -> Self {
        let mut provider = Self::default();
        for entry in entries {
            provider.histories.insert(
                entry.stock.ticker.to_uppercase(),
                MarketHistory::new(entry.price_history, entry.iv_history),
            );
            provider.stocks.push(entry.stock);
        }
        provider
    }

    /// Load a JSON array of [`UniverseEntry`] values.
    pub fn from_json_file(path: &Path) -> Result<Self, MarketDataError> {
        let raw = fs::read_to_string(path).map_err(|e| {
            MarketDataError::Unavailable(format!("{}: {}", path.display(), e))
        })?;
        let entries: Vec<UniverseEntry> = serde_json::from_str(&raw).map_err(|e| {
            MarketDataError::Unavailable(format!("{}: {}", path.display(), e))
        })?;
        Ok(Self::from_entries(entries))
    }

    pub fn stocks(&self) -> &[StockSnapshot] {
        &self.stocks
    }

    pub fn len(&self) -> usize {
        self.stocks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.stocks.is_empty()
    }

    fn history(&self, ticker: &str) -> Result<Option<&MarketHistory>, MarketDataError> {
        self.snapshot_ref(ticker)?;
        Ok(self.histories.get(&ticker.to_uppercase()))
    }

    fn snapshot_ref(&self, ticker: &str) -> Result<&StockSnapshot, MarketDataError> {
        self.stocks
            .iter()
            .find(|s| s.ticker.eq_ignore_ascii_case(ticker))
            .ok_or_else(|| MarketDataError::UnknownTicker(ticker.to_string()))
    }
}

impl MarketDataProvider for InMemoryMarketData {
    /// Filter codes are applied remotely by a real screener service; the
    /// in-memory universe is returned whole.
    fn screen(&self, _filters: &FilterSet) -> Result<Vec<StockSnapshot>, MarketDataError> {
        Ok(self.stocks.clone())
    }

    fn snapshot(&self, ticker: &str) -> Result<StockSnapshot, MarketDataError> {
        self.snapshot_ref(ticker).cloned()
    }

    fn price_history(&self, ticker: &str) -> Result<PriceHistory, MarketDataError> {
        Ok(self
            .history(ticker)?
            .map(|h| h.prices.clone())
            .unwrap_or_default())
    }

    fn volatility_history(&self, ticker: &str) -> Result<VolatilityHistory, MarketDataError> {
        Ok(self
            .history(ticker)?
            .map(|h| h.volatility.clone())
            .unwrap_or_default())
    }
}
