//! Signal generation from indicator columns.

pub mod engine;

pub use engine::{evaluate_bar, generate_signals, RsiThresholds};
