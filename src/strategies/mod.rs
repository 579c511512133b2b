//! Strategy definitions that turn candles into a signal frame.

pub mod sma_rsi;

pub use sma_rsi::{SmaRsiParams, SmaRsiStrategy};

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Strategy selector accepted by the runner.
///
/// Unrecognised names are kept verbatim: the backtest still runs, but no
/// signal is actionable for them.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum StrategyKind {
    SmaRsi,
    Unrecognized(String),
}

impl StrategyKind {
    pub const SMA_RSI: &'static str = "SMA_RSI";

    /// Whether signals produced under this selector may be traded live
    pub fn is_tradable(&self) -> bool {
        matches!(self, StrategyKind::SmaRsi)
    }

    pub fn name(&self) -> &str {
        match self {
            StrategyKind::SmaRsi => Self::SMA_RSI,
            StrategyKind::Unrecognized(name) => name,
        }
    }
}

impl From<&str> for StrategyKind {
    fn from(name: &str) -> Self {
        if name == Self::SMA_RSI {
            StrategyKind::SmaRsi
        } else {
            StrategyKind::Unrecognized(name.to_string())
        }
    }
}

impl FromStr for StrategyKind {
    type Err = std::convert::Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self::from(s))
    }
}

impl fmt::Display for StrategyKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
