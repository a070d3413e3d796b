//! Standard normal distribution

use statrs::function::erf::erfc;
use std::f64::consts::SQRT_2;

/// Standard normal CDF, Φ(x).
pub fn norm_cdf(x: f64) -> f64 {
    0.5 * erfc(-x / SQRT_2)
}
