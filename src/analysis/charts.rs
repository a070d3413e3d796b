//! Chart payloads for the presentation layer

use crate::indicators::volatility::calculate_iv_rank;
use crate::models::analysis::{PriceChartData, VolatilityChartData};
use crate::models::history::{PriceHistory, VolatilityHistory};

/// Copy the price series verbatim and attach the support levels.
pub fn price_chart_data(history: &PriceHistory, support_levels: &[f64]) -> PriceChartData {
    if history.is_empty() {
        return PriceChartData {
            support_levels: support_levels.to_vec(),
            ..PriceChartData::default()
        };
    }

    let points = &history.points;
    PriceChartData {
        dates: points.iter().map(|p| p.date.to_string()).collect(),
        prices: points.iter().map(|p| p.close).collect(),
        lows: points.iter().map(|p| p.low).collect(),
        highs: points.iter().map(|p| p.high).collect(),
        support_levels: support_levels.to_vec(),
        sma20: Some(points.iter().map(|p| p.sma20).collect()),
        sma50: Some(points.iter().map(|p| p.sma50).collect()),
        sma200: Some(points.iter().map(|p| p.sma200).collect()),
    }
}

/// IV series with low/high/mean and the rank of `current_iv` within it.
///
/// With no history, low, high and mean all equal `current_iv`.
pub fn volatility_chart_data(history: &VolatilityHistory, current_iv: f64) -> VolatilityChartData {
    let values = history.values();
    let iv_rank = calculate_iv_rank(current_iv, &values);

    if values.is_empty() {
        return VolatilityChartData {
            dates: Vec::new(),
            iv_values: Vec::new(),
            current_iv,
            iv_low: current_iv,
            iv_high: current_iv,
            iv_mean: current_iv,
            iv_rank,
        };
    }

    let iv_low = values.iter().copied().fold(f64::INFINITY, f64::min);
    let iv_high = values.iter().copied().fold(f64::NEG_INFINITY, f64::max);
    let iv_mean = values.iter().sum::<f64>() / values.len() as f64;

    VolatilityChartData {
        dates: history.points.iter().map(|p| p.date.to_string()).collect(),
        iv_values: values,
        current_iv,
        iv_low,
        iv_high,
        iv_mean,
        iv_rank,
    }
}
