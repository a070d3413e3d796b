//! Indicators derived from historical series.

pub mod structure;
pub mod volatility;

pub use structure::*;
pub use volatility::*;
