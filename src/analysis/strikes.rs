//! Strike selection for put credit spreads

use crate::models::analysis::RecommendedStrikes;

/// Spread width by underlying price band.
pub fn spread_width(current_price: f64) -> f64 {
    if current_price < 50.0 {
        2.5
    } else if current_price < 100.0 {
        5.0
    } else {
        10.0
    }
}

/// Choose short/long strikes from the current price and support levels.
///
/// The short strike is the highest support strictly below the price, or
/// 95% of the price when no such level exists, rounded to a whole dollar
/// (ties to even). The long strike sits one spread width lower.
pub fn select_strikes(current_price: f64, support_levels: &[f64]) -> RecommendedStrikes {
    let candidate = support_levels
        .iter()
        .copied()
        .filter(|level| *level < current_price)
        .fold(None, |best: Option<f64>, level| {
            Some(best.map_or(level, |b| b.max(level)))
        })
        .unwrap_or_else(|| (current_price * 0.95).round_ties_even());

    let short = candidate.round_ties_even();
    RecommendedStrikes {
        short,
        long: short - spread_width(current_price),
    }
}
