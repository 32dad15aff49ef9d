//! Pairs-trading ("statistical arbitrage") backtest engine.
//!
//! Given two aligned daily price series and three parameters — a rolling
//! window length and entry/exit band widths — the engine estimates the
//! pair's comovement, derives per-bar long/short/flat positions from each
//! asset's Bollinger bands, and compounds the realized spread returns into
//! an equity curve. All arithmetic uses `rust_decimal::Decimal`.

pub mod bands;
pub mod comovement;
pub mod engine;
pub mod error;
mod math;
pub mod returns;
pub mod signals;
pub mod types;

pub use error::StatArbError;
pub use types::*;

/// Standard result type for all statarb operations
pub type StatArbResult<T> = Result<T, StatArbError>;
