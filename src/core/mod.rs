//! Application surfaces built on the engine

pub mod http;

pub use http::*;
