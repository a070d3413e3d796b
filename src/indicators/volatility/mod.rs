pub mod iv_rank;

pub use iv_rank::{calculate_iv_rank, calculate_iv_rank_from_history, NEUTRAL_IV_RANK};
