//! Core application primitives (orchestration)

pub mod runner;

pub use runner::{RunReport, RunRequest, StrategyRunner};
