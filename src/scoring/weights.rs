use serde::{Deserialize, Serialize};

use crate::error::ConfigError;

pub const DEFAULT_IV_RANK_WEIGHT: f64 = 30.0;
pub const DEFAULT_TECHNICAL_WEIGHT: f64 = 25.0;
pub const DEFAULT_LIQUIDITY_WEIGHT: f64 = 20.0;
pub const DEFAULT_STABILITY_WEIGHT: f64 = 25.0;

/// Maximum points per scoring band.
///
/// Each band computes its raw points against the default maximum and is
/// then rescaled to the configured weight, so the defaults leave raw
/// points untouched.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ScoringWeights {
    pub iv_rank: f64,
    pub technical_strength: f64,
    pub liquidity: f64,
    pub stability: f64,
}

impl Default for ScoringWeights {
    fn default() -> Self {
        Self {
            iv_rank: DEFAULT_IV_RANK_WEIGHT,
            technical_strength: DEFAULT_TECHNICAL_WEIGHT,
            liquidity: DEFAULT_LIQUIDITY_WEIGHT,
            stability: DEFAULT_STABILITY_WEIGHT,
        }
    }
}

impl ScoringWeights {
    pub fn new(
        iv_rank: f64,
        technical_strength: f64,
        liquidity: f64,
        stability: f64,
    ) -> Result<Self, ConfigError> {
        let weights = Self {
            iv_rank,
            technical_strength,
            liquidity,
            stability,
        };
        weights.validate()?;
        Ok(weights)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        for (name, value) in [
            ("iv_rank", self.iv_rank),
            ("technical_strength", self.technical_strength),
            ("liquidity", self.liquidity),
            ("stability", self.stability),
        ] {
            if !value.is_finite() || value < 0.0 {
                return Err(ConfigError::InvalidWeights(format!(
                    "{} must be a non-negative number, got {}",
                    name, value
                )));
            }
        }
        Ok(())
    }

    pub fn total(&self) -> f64 {
        self.iv_rank + self.technical_strength + self.liquidity + self.stability
    }
}
