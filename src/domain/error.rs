//! Domain validation errors for core domain types.
//!
//! This module defines errors that occur when domain invariants are violated.
//! These errors are returned by `try_new` constructors and by the simulation
//! entry points when an input violates the programming contract; malformed
//! input is rejected synchronously, before any book walking begins.

use thiserror::Error;

use super::book::BookSide;

/// Errors that occur when domain invariants are violated.
///
/// These errors are returned by `try_new` constructors and other methods
/// that validate domain rules.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DomainError {
    /// Amounts supplied to a simulation must be non-negative.
    #[error("amount must be non-negative, got {amount}")]
    NegativeAmount {
        /// The invalid amount that was provided.
        amount: rust_decimal::Decimal,
    },

    /// Prices must be strictly positive.
    #[error("price must be positive, got {price}")]
    NonPositivePrice {
        /// The invalid price that was provided.
        price: rust_decimal::Decimal,
    },

    /// Level sizes must be non-negative.
    #[error("level size must be non-negative, got {size}")]
    NegativeSize {
        /// The invalid size that was provided.
        size: rust_decimal::Decimal,
    },

    /// A slippage fraction must lie in `[0, 1)`.
    #[error("slippage must be in [0, 1), got {slippage}")]
    InvalidSlippage {
        /// The invalid slippage that was provided.
        slippage: rust_decimal::Decimal,
    },

    /// Fee rates are fractional and must lie in `[0, 1)`.
    #[error("fee rate must be in [0, 1), got {rate}")]
    InvalidFeeRate {
        /// The invalid fee rate that was provided.
        rate: rust_decimal::Decimal,
    },

    /// Scaling factors are base-10 exponents and must not exceed the
    /// maximum decimal scale the arithmetic supports.
    #[error("scaling factor {factor} exceeds the supported maximum of {max}")]
    UnsupportedScalingFactor {
        /// The invalid scaling factor that was provided.
        factor: u32,
        /// The maximum supported scale.
        max: u32,
    },

    /// A depth ladder must be sorted best-to-worst for its side.
    #[error("{side} ladder is not sorted best to worst")]
    UnsortedLadder {
        /// The side whose ladder is out of order.
        side: BookSide,
    },
}
