//! Shared data models spanning the engine layers.

pub mod analysis;
pub mod filters;
pub mod history;
pub mod screening;
pub mod stock;

pub use analysis::{
    AnalysisResult, PremiumEstimate, PriceChartData, RecommendedStrikes, TradeRecommendation,
    VolatilityChartData,
};
pub use filters::{FilterSet, FilterValue};
pub use history::{MarketHistory, PriceHistory, PricePoint, VolatilityHistory, VolatilityPoint};
pub use screening::{RankedStock, ScreeningMetadata, ScreeningResults, ScreeningSession};
pub use stock::{StockSnapshot, UNKNOWN_EARNINGS_DAYS};
