//! Single-stock trade analysis for put credit spreads.

pub mod assessment;
pub mod charts;
pub mod premium;
pub mod probability;
pub mod strikes;

pub use assessment::{assess_risk, generate_notes, risk_factors, trade_recommendation};
pub use charts::{price_chart_data, volatility_chart_data};
pub use premium::{estimate_pcs_premium, estimate_pcs_premium_with_rate};
pub use probability::{estimate_pop_for_pcs, estimate_pop_for_pcs_with_rate, DEFAULT_RISK_FREE_RATE};
pub use strikes::{select_strikes, spread_width};
