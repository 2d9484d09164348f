//! Token metadata for one side of a market.

use serde::{Deserialize, Serialize};

/// Metadata for one token of a trading pair.
///
/// `decimals` defines the integer-to-decimal scaling for raw on-chain
/// amounts; `rounding_decimals` is the precision the venue displays and
/// settles human-readable amounts at (always less than or equal to
/// `decimals`).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Token {
    symbol: String,
    decimals: u32,
    rounding_decimals: u32,
}

impl Token {
    /// Create a new token.
    pub fn new(symbol: impl Into<String>, decimals: u32, rounding_decimals: u32) -> Self {
        Self {
            symbol: symbol.into(),
            decimals,
            rounding_decimals,
        }
    }

    /// Get the token symbol.
    #[must_use]
    pub fn symbol(&self) -> &str {
        &self.symbol
    }

    /// Get the number of decimals of the raw on-chain representation.
    #[must_use]
    pub const fn decimals(&self) -> u32 {
        self.decimals
    }

    /// Get the number of decimals amounts are rounded to for settlement.
    #[must_use]
    pub const fn rounding_decimals(&self) -> u32 {
        self.rounding_decimals
    }
}
