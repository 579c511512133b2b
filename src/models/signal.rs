use serde::{Deserialize, Serialize};
use std::fmt;

use super::order::OrderSide;

/// Discrete trading signal for one bar. Also used as the held position
/// once shifted by one bar.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Signal {
    Short,
    #[default]
    Flat,
    Long,
}

impl Signal {
    pub fn as_i8(self) -> i8 {
        match self {
            Signal::Short => -1,
            Signal::Flat => 0,
            Signal::Long => 1,
        }
    }

    pub fn as_f64(self) -> f64 {
        f64::from(self.as_i8())
    }

    /// Order side that would express this signal; `None` for `Flat`.
    pub fn order_side(self) -> Option<OrderSide> {
        match self {
            Signal::Long => Some(OrderSide::Buy),
            Signal::Short => Some(OrderSide::Sell),
            Signal::Flat => None,
        }
    }
}

impl fmt::Display for Signal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_i8())
    }
}
