//! Universe screening and ranking.

pub mod engine;
pub mod filters;

pub use engine::{rank_results, ScreeningEngine};
pub use filters::{apply_filters, passes_filters, RANGE_FILTERS};
