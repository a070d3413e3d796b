//! Error types shared across the engine layers.

use thiserror::Error;

/// Pricing failures. Only caller mistakes end up here; degenerate market
/// inputs are handled by closed-form fallbacks instead.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum PricingError {
    #[error("long strike {long} must be below short strike {short}")]
    InvalidStrikeOrder { short: f64, long: f64 },
}

/// Raised by a scorer when a snapshot field it relies on is unusable.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum ScoringError {
    #[error("{ticker}: field `{field}` is malformed")]
    MalformedField { ticker: String, field: &'static str },
}

#[derive(Debug, Error, Clone, PartialEq)]
pub enum AnalysisError {
    #[error(transparent)]
    Pricing(#[from] PricingError),
    #[error(transparent)]
    Scoring(#[from] ScoringError),
}

#[derive(Debug, Error)]
pub enum MarketDataError {
    #[error("unknown ticker: {0}")]
    UnknownTicker(String),
    #[error("market data unavailable: {0}")]
    Unavailable(String),
}

#[derive(Debug, Error)]
pub enum ScreeningError {
    #[error("strategy not found: {0}")]
    UnknownStrategy(String),
    #[error("no stock data provided and no market data provider configured")]
    NoDataSource,
    #[error(transparent)]
    MarketData(#[from] MarketDataError),
    #[error(transparent)]
    Analysis(#[from] AnalysisError),
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to parse {path}: {source}")]
    Parse {
        path: String,
        #[source]
        source: serde_json::Error,
    },
    #[error("invalid scoring weights: {0}")]
    InvalidWeights(String),
}

#[derive(Debug, Error)]
pub enum StorageError {
    #[error("result not found: {0}")]
    NotFound(String),
}
