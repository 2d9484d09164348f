//! Monetary types for price and amount representation.

use rust_decimal::Decimal;

/// Price represented as a Decimal for precision.
pub type Price = Decimal;

/// Token amount represented as a Decimal for precision.
pub type Amount = Decimal;
