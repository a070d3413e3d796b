//! IV Rank: where current implied volatility sits within its historical range

use crate::models::history::VolatilityHistory;

/// Returned when the history carries no range information.
pub const NEUTRAL_IV_RANK: f64 = 50.0;

/// Calculate IV rank
///
/// IV Rank = (current - low) / (high - low) * 100, clamped to [0, 100].
/// Empty or constant history yields the neutral 50.
pub fn calculate_iv_rank(current_iv: f64, history: &[f64]) -> f64 {
    let mut values = history.iter().copied().filter(|v| v.is_finite());
    let Some(first) = values.next() else {
        return NEUTRAL_IV_RANK;
    };
    let (low, high) = values.fold((first, first), |(lo, hi), v| (lo.min(v), hi.max(v)));

    if high == low {
        return NEUTRAL_IV_RANK;
    }

    let rank = (current_iv - low) / (high - low) * 100.0;
    if rank.is_nan() {
        return NEUTRAL_IV_RANK;
    }
    rank.clamp(0.0, 100.0)
}

/// Calculate IV rank against a dated volatility series
pub fn calculate_iv_rank_from_history(current_iv: f64, history: &VolatilityHistory) -> f64 {
    calculate_iv_rank(current_iv, &history.values())
}
