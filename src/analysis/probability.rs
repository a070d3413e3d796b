//! Probability of profit for a put credit spread
//!
//! Uses the short put's delta as a proxy for the risk-neutral probability
//! of finishing in the money: POP ≈ 1 - |Δput|.

use crate::pricing::{put_delta, years_from_days};

pub const DEFAULT_RISK_FREE_RATE: f64 = 0.05;

/// Estimate POP (percent) with the default risk-free rate
pub fn estimate_pop_for_pcs(
    current_price: f64,
    short_strike: f64,
    days_to_expiration: i64,
    implied_volatility: f64,
) -> f64 {
    estimate_pop_for_pcs_with_rate(
        current_price,
        short_strike,
        days_to_expiration,
        implied_volatility,
        DEFAULT_RISK_FREE_RATE,
    )
}

/// Estimate POP (percent) in [0, 100]
///
/// Without time value or volatility the result is binary: 100 when the
/// price sits above the short strike, otherwise 0.
pub fn estimate_pop_for_pcs_with_rate(
    current_price: f64,
    short_strike: f64,
    days_to_expiration: i64,
    implied_volatility: f64,
    risk_free_rate: f64,
) -> f64 {
    if days_to_expiration <= 0 || implied_volatility <= 0.0 || short_strike <= 0.0 {
        return if current_price > short_strike { 100.0 } else { 0.0 };
    }

    let time = years_from_days(days_to_expiration);
    let delta = put_delta(
        current_price,
        short_strike,
        time,
        risk_free_rate,
        implied_volatility,
    );
    let pop = (1.0 - delta.abs()) * 100.0;

    if pop.is_nan() {
        return if current_price > short_strike { 100.0 } else { 0.0 };
    }
    pop.clamp(0.0, 100.0)
}
