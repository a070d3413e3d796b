//! Black-Scholes put valuation
//!
//! European puts on a non-dividend-paying underlying. Degenerate inputs
//! (no time left, no volatility) collapse to intrinsic value rather than
//! producing NaN.

use crate::pricing::normal::norm_cdf;

pub const DAYS_PER_YEAR: f64 = 365.0;

pub fn years_from_days(days: i64) -> f64 {
    days as f64 / DAYS_PER_YEAR
}

/// Black-Scholes d1 parameter
pub fn d1(spot: f64, strike: f64, time: f64, rate: f64, vol: f64) -> f64 {
    ((spot / strike).ln() + (rate + 0.5 * vol * vol) * time) / (vol * time.sqrt())
}

/// Black-Scholes d2 parameter
pub fn d2(spot: f64, strike: f64, time: f64, rate: f64, vol: f64) -> f64 {
    d1(spot, strike, time, rate, vol) - vol * time.sqrt()
}

/// Put delta, Φ(d1) - 1. Always in [-1, 0].
pub fn put_delta(spot: f64, strike: f64, time: f64, rate: f64, vol: f64) -> f64 {
    norm_cdf(d1(spot, strike, time, rate, vol)) - 1.0
}

/// Put value, floored at zero.
pub fn put_price(spot: f64, strike: f64, time: f64, rate: f64, vol: f64) -> f64 {
    if strike <= 0.0 {
        return 0.0;
    }
    if time <= 0.0 || vol <= 0.0 {
        return (strike - spot).max(0.0);
    }

    let d1 = d1(spot, strike, time, rate, vol);
    let d2 = d1 - vol * time.sqrt();
    let value = strike * (-rate * time).exp() * norm_cdf(-d2) - spot * norm_cdf(-d1);
    value.max(0.0)
}
