//! Declarative filter application

use crate::models::filters::FilterSet;
use crate::models::stock::StockSnapshot;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Bound {
    /// Field must be >= threshold.
    Min,
    /// Field must be <= threshold.
    Max,
}

/// Range filters: key, snapshot field, bound.
pub const RANGE_FILTERS: [(&str, fn(&StockSnapshot) -> f64, Bound); 10] = [
    ("min_market_cap", |s| s.market_cap, Bound::Min),
    ("min_volume", |s| s.avg_volume as f64, Bound::Min),
    ("price_min", |s| s.price, Bound::Min),
    ("price_max", |s| s.price, Bound::Max),
    ("rsi_min", |s| s.rsi, Bound::Min),
    ("rsi_max", |s| s.rsi, Bound::Max),
    ("beta_min", |s| s.beta, Bound::Min),
    ("beta_max", |s| s.beta, Bound::Max),
    ("weekly_perf_min", |s| s.perf_week, Bound::Min),
    ("weekly_perf_max", |s| s.perf_week, Bound::Max),
];

pub const EARNINGS_BUFFER_KEY: &str = "earnings_buffer_days";

fn passes_ranges(stock: &StockSnapshot, filters: &FilterSet) -> bool {
    RANGE_FILTERS.iter().all(|(key, field, bound)| {
        let Some(threshold) = filters.number(key) else {
            return true;
        };
        let value = field(stock);
        match bound {
            Bound::Min => value >= threshold,
            Bound::Max => value <= threshold,
        }
    })
}

fn passes_flags(stock: &StockSnapshot, filters: &FilterSet) -> bool {
    if filters.flag("above_sma20") && !(stock.price > stock.sma20) {
        return false;
    }
    if filters.flag("above_sma50") && !(stock.price > stock.sma50) {
        return false;
    }
    // Flags the data source did not report are not enforced.
    if filters.flag("optionable") && stock.optionable == Some(false) {
        return false;
    }
    if filters.flag("shortable") && stock.shortable == Some(false) {
        return false;
    }
    true
}

fn passes_earnings_buffer(stock: &StockSnapshot, filters: &FilterSet) -> bool {
    match filters.number(EARNINGS_BUFFER_KEY) {
        Some(buffer) => f64::from(stock.earnings_days_away) > buffer,
        None => true,
    }
}

pub fn passes_filters(stock: &StockSnapshot, filters: &FilterSet) -> bool {
    passes_ranges(stock, filters)
        && passes_flags(stock, filters)
        && passes_earnings_buffer(stock, filters)
}

/// Stocks passing every filter, in input order.
pub fn apply_filters<'a>(stocks: &'a [StockSnapshot], filters: &FilterSet) -> Vec<&'a StockSnapshot> {
    stocks
        .iter()
        .filter(|stock| passes_filters(stock, filters))
        .collect()
}
