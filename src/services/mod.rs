//! Collaborators around the engine: market data in, results out.

pub mod market_data;
pub mod storage;

pub use market_data::{InMemoryMarketData, MarketDataProvider, UniverseEntry};
pub use storage::{InMemoryResultStore, ResultStore, DEFAULT_HISTORY_LIMIT};
