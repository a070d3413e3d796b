//! Strikewise: equity screening and scoring for options-selling strategies.

pub mod analysis;
pub mod config;
pub mod core;
pub mod error;
pub mod indicators;
pub mod logging;
pub mod metrics;
pub mod models;
pub mod pricing;
pub mod scoring;
pub mod screener;
pub mod services;
pub mod strategies;
