//! Credit estimate for a put credit spread

use crate::error::PricingError;
use crate::models::analysis::PremiumEstimate;
use crate::pricing::{put_price, years_from_days};

use super::probability::DEFAULT_RISK_FREE_RATE;

/// Estimate the spread premium with the default risk-free rate
pub fn estimate_pcs_premium(
    current_price: f64,
    short_strike: f64,
    long_strike: f64,
    days_to_expiration: i64,
    implied_volatility: f64,
) -> Result<PremiumEstimate, PricingError> {
    estimate_pcs_premium_with_rate(
        current_price,
        short_strike,
        long_strike,
        days_to_expiration,
        implied_volatility,
        DEFAULT_RISK_FREE_RATE,
    )
}

/// Price both legs with Black-Scholes and derive credit, max risk and
/// return on risk.
///
/// `long_strike` must be strictly below `short_strike`. Credit is floored
/// at zero so every field of the estimate is non-negative.
pub fn estimate_pcs_premium_with_rate(
    current_price: f64,
    short_strike: f64,
    long_strike: f64,
    days_to_expiration: i64,
    implied_volatility: f64,
    risk_free_rate: f64,
) -> Result<PremiumEstimate, PricingError> {
    if !(long_strike < short_strike) {
        return Err(PricingError::InvalidStrikeOrder {
            short: short_strike,
            long: long_strike,
        });
    }

    let width = short_strike - long_strike;

    if days_to_expiration <= 0 || implied_volatility <= 0.0 {
        return Ok(PremiumEstimate {
            credit: 0.0,
            max_risk: width,
            return_on_risk: 0.0,
        });
    }

    let time = years_from_days(days_to_expiration);
    let short_value = put_price(current_price, short_strike, time, risk_free_rate, implied_volatility);
    let long_value = put_price(current_price, long_strike, time, risk_free_rate, implied_volatility);

    let credit = (short_value - long_value).max(0.0);
    let max_risk = (width - credit).max(0.0);
    let return_on_risk = if max_risk > 0.0 {
        credit / max_risk * 100.0
    } else {
        0.0
    };

    Ok(PremiumEstimate {
        credit,
        max_risk,
        return_on_risk,
    })
}
