//! Option-pricing primitives.

pub mod black_scholes;
pub mod normal;

pub use black_scholes::{d1, d2, put_delta, put_price, years_from_days, DAYS_PER_YEAR};
pub use normal::norm_cdf;
