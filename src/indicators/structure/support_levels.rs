//! Support level identification
//!
//! Candidate levels come from three sources: the latest moving averages,
//! recent swing lows, and round-number price levels near the current close.

use crate::models::history::PriceHistory;

/// Bars considered for swing-low detection.
pub const SWING_LOOKBACK: usize = 60;
/// Neighbours required on each side of a swing low.
pub const SWING_RADIUS: usize = 5;
/// Round numbers must sit within this relative distance of the close.
pub const PSYCHOLOGICAL_BAND: f64 = 0.10;
/// Upper bound on round-number candidates for a single close.
pub const MAX_PSYCHOLOGICAL_LEVELS: usize = 1_000;

/// Identify support levels with the default lookback and radius
///
/// Returns unique, positive levels sorted highest first. Empty history
/// yields an empty list.
pub fn identify_support_levels(history: &PriceHistory) -> Vec<f64> {
    identify_support_levels_with(history, SWING_LOOKBACK, SWING_RADIUS)
}

pub fn identify_support_levels_with(
    history: &PriceHistory,
    lookback: usize,
    radius: usize,
) -> Vec<f64> {
    let Some(latest) = history.latest() else {
        return Vec::new();
    };

    let mut levels: Vec<f64> = [latest.sma20, latest.sma50, latest.sma200]
        .into_iter()
        .flatten()
        .collect();

    let lows: Vec<f64> = history.points.iter().map(|p| p.low).collect();
    levels.extend(swing_lows(&lows, lookback, radius));
    levels.extend(psychological_levels(latest.close));

    levels.retain(|level| level.is_finite() && *level > 0.0);
    levels.sort_by(|a, b| b.total_cmp(a));
    levels.dedup();
    levels
}

/// Local minima of `lows` over the last `lookback` values.
///
/// A value qualifies when it equals the minimum of the window spanning
/// `radius` bars on either side of it.
pub fn swing_lows(lows: &[f64], lookback: usize, radius: usize) -> Vec<f64> {
    let recent = &lows[lows.len().saturating_sub(lookback)..];
    if recent.len() <= 2 * radius {
        return Vec::new();
    }

    (radius..recent.len() - radius)
        .filter_map(|i| {
            let low = recent[i];
            let window_min = recent[i - radius..=i + radius]
                .iter()
                .copied()
                .filter(|v| !v.is_nan())
                .fold(f64::INFINITY, f64::min);
            (low == window_min).then_some(low)
        })
        .collect()
}

/// Round-number levels within 10% of `current`.
///
/// Steps of 5 below 100, steps of 10 from 100 up. Only the multiples inside
/// the band are visited; a close whose band would hold more than
/// [`MAX_PSYCHOLOGICAL_LEVELS`] multiples yields none.
pub fn psychological_levels(current: f64) -> Vec<f64> {
    if !(current.is_finite() && current > 0.0) {
        return Vec::new();
    }

    let increment = if current < 100.0 { 5.0 } else { 10.0 };
    let first = (current * (1.0 - PSYCHOLOGICAL_BAND) / increment).floor().max(1.0);
    let last = (current * (1.0 + PSYCHOLOGICAL_BAND) / increment).ceil();
    if last - first > MAX_PSYCHOLOGICAL_LEVELS as f64 {
        return Vec::new();
    }

    (first as u64..=last as u64)
        .map(|step| step as f64 * increment)
        .filter(|level| (current - level).abs() / current < PSYCHOLOGICAL_BAND)
        .collect()
}
