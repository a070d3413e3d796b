pub mod support_levels;

pub use support_levels::{
    identify_support_levels, identify_support_levels_with, psychological_levels, swing_lows,
    MAX_PSYCHOLOGICAL_LEVELS,
};
