//! Runtime configuration: environment variables and per-strategy config files.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::env;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{debug, warn};

use crate::analysis::DEFAULT_RISK_FREE_RATE;
use crate::error::ConfigError;
use crate::models::filters::FilterSet;
use crate::scoring::ScoringWeights;

pub const DEFAULT_PORT: u16 = 8080;
pub const DEFAULT_DTE: i64 = 45;

const STRATEGY_CONFIG_SUFFIX: &str = "_config.json";

/// Deployment environment name (`ENVIRONMENT`, defaults to `sandbox`)
pub fn get_environment() -> String {
    env::var("ENVIRONMENT").unwrap_or_else(|_| "sandbox".to_string())
}

#[derive(Debug, Clone, PartialEq)]
pub struct AppConfig {
    pub port: u16,
    pub strategy_config_dir: Option<PathBuf>,
    pub universe_file: Option<PathBuf>,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            port: DEFAULT_PORT,
            strategy_config_dir: None,
            universe_file: None,
        }
    }
}

impl AppConfig {
    pub fn from_env() -> Self {
        let port = env::var("PORT")
            .ok()
            .and_then(|p| p.parse().ok())
            .unwrap_or(DEFAULT_PORT);

        Self {
            port,
            strategy_config_dir: env::var("STRATEGY_CONFIG_DIR").ok().map(PathBuf::from),
            universe_file: env::var("UNIVERSE_FILE").ok().map(PathBuf::from),
        }
    }
}

/// Trade parameters used when analyzing a single stock.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AnalysisSettings {
    pub default_dte: i64,
    pub risk_free_rate: f64,
}

impl Default for AnalysisSettings {
    fn default() -> Self {
        Self {
            default_dte: DEFAULT_DTE,
            risk_free_rate: DEFAULT_RISK_FREE_RATE,
        }
    }
}

/// Contents of a `<key>_config.json` file. Every section is optional.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct StrategyConfig {
    pub default_filters: FilterSet,
    pub scoring_weights: Option<ScoringWeights>,
    pub analysis_settings: AnalysisSettings,
}

pub fn load_strategy_config(path: &Path) -> Result<StrategyConfig, ConfigError> {
    let raw = fs::read_to_string(path).map_err(|source| ConfigError::Io {
        path: path.display().to_string(),
        source,
    })?;
    let config: StrategyConfig = serde_json::from_str(&raw).map_err(|source| ConfigError::Parse {
        path: path.display().to_string(),
        source,
    })?;

    if let Some(ref weights) = config.scoring_weights {
        weights.validate()?;
    }
    Ok(config)
}

/// Load every `*_config.json` in `dir`, keyed by upper-cased strategy key.
///
/// A missing directory yields an empty map; a malformed file is an error.
pub fn load_strategy_configs(dir: &Path) -> Result<BTreeMap<String, StrategyConfig>, ConfigError> {
    let mut configs = BTreeMap::new();

    let entries = match fs::read_dir(dir) {
        Ok(entries) => entries,
        Err(e) => {
            warn!(dir = %dir.display(), error = %e, "Strategy config directory unavailable");
            return Ok(configs);
        }
    };

    for entry in entries.flatten() {
        let path = entry.path();
        let Some(file_name) = path.file_name().and_then(|n| n.to_str()) else {
            continue;
        };
        let Some(stem) = file_name.strip_suffix(STRATEGY_CONFIG_SUFFIX) else {
            continue;
        };

        let key = stem.to_uppercase();
        let config = load_strategy_config(&path)?;
        debug!(strategy = %key, path = %path.display(), "Loaded strategy config");
        configs.insert(key, config);
    }

    Ok(configs)
}
