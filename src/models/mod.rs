//! Shared data models spanning the pipeline stages.

pub mod candle;
pub mod frame;
pub mod order;
pub mod signal;

pub use candle::{Candle, CandleSeries};
pub use frame::StrategyFrame;
pub use order::{OrderConfirmation, OrderSide};
pub use signal::Signal;

/// A derived column: one entry per candle, `None` where the value is undefined.
pub type Column = Vec<Option<f64>>;
