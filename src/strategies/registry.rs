//! Explicit strategy registry

use std::collections::BTreeMap;
use std::sync::Arc;
use tracing::info;

use crate::config::StrategyConfig;
use crate::strategies::{PutCreditSpread, Strategy};

/// Strategies registered at startup, looked up by name or key.
#[derive(Clone, Default)]
pub struct StrategyRegistry {
    strategies: Vec<Arc<dyn Strategy>>,
}

impl StrategyRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registry with every built-in strategy on its defaults
    pub fn with_builtin() -> Self {
        let mut registry = Self::new();
        registry.register(Arc::new(PutCreditSpread::new()));
        registry
    }

    /// Built-ins with matching config files applied (keyed by strategy key).
    pub fn from_configs(configs: &BTreeMap<String, StrategyConfig>) -> Self {
        let mut registry = Self::new();
        let pcs = match configs.get(super::put_credit_spread::PCS_KEY) {
            Some(config) => {
                info!(strategy = super::put_credit_spread::PCS_KEY, "Applying strategy config");
                PutCreditSpread::from_config(config)
            }
            None => PutCreditSpread::new(),
        };
        registry.register(Arc::new(pcs));
        registry
    }

    /// Add a strategy, replacing any existing one with the same key.
    pub fn register(&mut self, strategy: Arc<dyn Strategy>) {
        match self
            .strategies
            .iter()
            .position(|s| s.key().eq_ignore_ascii_case(strategy.key()))
        {
            Some(index) => self.strategies[index] = strategy,
            None => self.strategies.push(strategy),
        }
    }

    /// Case-insensitive lookup by display name or key.
    pub fn get(&self, name: &str) -> Option<Arc<dyn Strategy>> {
        self.strategies
            .iter()
            .find(|s| s.name().eq_ignore_ascii_case(name) || s.key().eq_ignore_ascii_case(name))
            .cloned()
    }

    /// Display names in registration order.
    pub fn names(&self) -> Vec<String> {
        self.strategies.iter().map(|s| s.name().to_string()).collect()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Arc<dyn Strategy>> {
        self.strategies.iter()
    }

    pub fn len(&self) -> usize {
        self.strategies.len()
    }

    pub fn is_empty(&self) -> bool {
        self.strategies.is_empty()
    }
}
