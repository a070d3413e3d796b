//! Strategy scoring: weight tables and composite scorers.

pub mod composite;
pub mod weights;

pub use composite::{
    evaluate_put_credit_spread, liquidity_points, score_put_credit_spread, stability_points,
    technical_points, volatility_points, ScoreBreakdown,
};
pub use weights::ScoringWeights;
