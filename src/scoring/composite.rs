//! Composite put-credit-spread score
//!
//! Four additive bands, each capped internally, rescaled by the strategy's
//! weight table and clamped to [0, 100]:
//! - Volatility: IV rank above 30, full credit at 100
//! - Technical: price above SMA20/SMA50, RSI in the 45-65 sweet spot
//! - Liquidity: average volume relative to 5M shares
//! - Stability: beta near 1, earnings far enough away

use serde::{Deserialize, Serialize};

use crate::error::ScoringError;
use crate::models::stock::StockSnapshot;
use crate::scoring::weights::{
    ScoringWeights, DEFAULT_IV_RANK_WEIGHT, DEFAULT_LIQUIDITY_WEIGHT, DEFAULT_STABILITY_WEIGHT,
    DEFAULT_TECHNICAL_WEIGHT,
};

const LIQUIDITY_VOLUME_SCALE: f64 = 5_000_000.0;

/// Weighted points per band plus the clamped total.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ScoreBreakdown {
    pub volatility: f64,
    pub technical: f64,
    pub liquidity: f64,
    pub stability: f64,
    pub total: f64,
}

pub fn volatility_points(iv_rank: f64) -> f64 {
    if iv_rank > 50.0 {
        (30.0 * (iv_rank - 50.0) / 50.0).min(30.0)
    } else if iv_rank > 30.0 {
        15.0 * (iv_rank - 30.0) / 20.0
    } else {
        0.0
    }
}

pub fn technical_points(price: f64, sma20: f64, sma50: f64, rsi: f64) -> f64 {
    let mut points = 0.0;
    if price > sma20 {
        points += 10.0;
    }
    if price > sma50 {
        points += 10.0;
    }
    if (45.0..=65.0).contains(&rsi) {
        points += 5.0;
    } else if (40.0..=70.0).contains(&rsi) {
        points += 2.5;
    }
    points
}

pub fn liquidity_points(avg_volume: u64) -> f64 {
    (20.0 * (avg_volume as f64 / LIQUIDITY_VOLUME_SCALE)).min(20.0)
}

pub fn stability_points(beta: f64, earnings_days_away: u32) -> f64 {
    let mut points = 0.0;
    if (0.7..=1.3).contains(&beta) {
        points += 15.0;
    } else if (0.5..=1.5).contains(&beta) {
        points += 7.5;
    }

    if earnings_days_away > 14 {
        points += 10.0;
    } else if earnings_days_away > 7 {
        points += 5.0;
    }
    points
}

fn scaled(points: f64, weight: f64, default_weight: f64) -> f64 {
    points * weight / default_weight
}

fn ensure_finite(stock: &StockSnapshot) -> Result<(), ScoringError> {
    let malformed = |field| ScoringError::MalformedField {
        ticker: stock.ticker.clone(),
        field,
    };

    if !(stock.price.is_finite() && stock.price > 0.0) {
        return Err(malformed("price"));
    }
    for (field, value) in [
        ("iv_rank", stock.iv_rank),
        ("sma20", stock.sma20),
        ("sma50", stock.sma50),
        ("rsi", stock.rsi),
        ("beta", stock.beta),
    ] {
        if !value.is_finite() {
            return Err(malformed(field));
        }
    }
    Ok(())
}

/// Score a snapshot band by band
pub fn evaluate_put_credit_spread(
    stock: &StockSnapshot,
    weights: &ScoringWeights,
) -> Result<ScoreBreakdown, ScoringError> {
    ensure_finite(stock)?;

    let volatility = scaled(
        volatility_points(stock.iv_rank),
        weights.iv_rank,
        DEFAULT_IV_RANK_WEIGHT,
    );
    let technical = scaled(
        technical_points(stock.price, stock.sma20, stock.sma50, stock.rsi),
        weights.technical_strength,
        DEFAULT_TECHNICAL_WEIGHT,
    );
    let liquidity = scaled(
        liquidity_points(stock.avg_volume),
        weights.liquidity,
        DEFAULT_LIQUIDITY_WEIGHT,
    );
    let stability = scaled(
        stability_points(stock.beta, stock.earnings_days_away),
        weights.stability,
        DEFAULT_STABILITY_WEIGHT,
    );

    let total = (volatility + technical + liquidity + stability).clamp(0.0, 100.0);

    Ok(ScoreBreakdown {
        volatility,
        technical,
        liquidity,
        stability,
        total,
    })
}

/// Composite score in [0, 100]
pub fn score_put_credit_spread(
    stock: &StockSnapshot,
    weights: &ScoringWeights,
) -> Result<f64, ScoringError> {
    evaluate_put_credit_spread(stock, weights).map(|breakdown| breakdown.total)
}
