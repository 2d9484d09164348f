//! Market-related domain types.
//!
//! - [`Market`] - An on-chain trading pair with scaling factors and fee rates
//!
//! A market pairs a base token X against a quote token Y. Raw on-chain
//! integers are converted to human-readable decimals through the market's
//! scaling factors, which are base-10 exponents (the number of decimal
//! places of the raw representation).

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::math::scale::MAX_SCALE;

use super::error::DomainError;
use super::token::Token;

/// An on-chain trading pair with the parameters needed to simulate
/// execution against it.
///
/// Immutable per snapshot; owned by the caller and read-only to the
/// simulation core. Fee rates are fractional (e.g. `0.001` for 10 basis
/// points). `aggressive_fee` applies to taker executions,
/// `passive_fee` to resting maker orders; when `passive_order_payout`
/// is set the venue pays makers a rebate that can offset the passive fee.
///
/// # Example
///
/// ```
/// use fillcast::domain::{Market, Token};
/// use rust_decimal_macros::dec;
///
/// let market = Market::try_new(
///     Token::new("WETH", 18, 6),
///     Token::new("USDC", 6, 2),
///     18,
///     6,
///     18,
///     dec!(0.001),
///     dec!(0.0005),
///     false,
/// )
/// .unwrap();
///
/// assert_eq!(market.aggressive_fee(), dec!(0.001));
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Market {
    token_x: Token,
    token_y: Token,
    token_x_scaling_factor: u32,
    token_y_scaling_factor: u32,
    price_scaling_factor: u32,
    aggressive_fee: Decimal,
    passive_fee: Decimal,
    passive_order_payout: bool,
}

impl Market {
    /// Create a new market with domain invariant validation.
    ///
    /// # Domain Invariants
    ///
    /// - `aggressive_fee` and `passive_fee` must lie in `[0, 1)`
    /// - every scaling factor must not exceed the maximum supported
    ///   decimal scale
    ///
    /// # Errors
    ///
    /// Returns `DomainError` if any invariant is violated.
    #[allow(clippy::too_many_arguments)]
    pub fn try_new(
        token_x: Token,
        token_y: Token,
        token_x_scaling_factor: u32,
        token_y_scaling_factor: u32,
        price_scaling_factor: u32,
        aggressive_fee: Decimal,
        passive_fee: Decimal,
        passive_order_payout: bool,
    ) -> Result<Self, DomainError> {
        for rate in [aggressive_fee, passive_fee] {
            if rate < Decimal::ZERO || rate >= Decimal::ONE {
                return Err(DomainError::InvalidFeeRate { rate });
            }
        }

        for factor in [
            token_x_scaling_factor,
            token_y_scaling_factor,
            price_scaling_factor,
        ] {
            if factor > MAX_SCALE {
                return Err(DomainError::UnsupportedScalingFactor {
                    factor,
                    max: MAX_SCALE,
                });
            }
        }

        Ok(Self {
            token_x,
            token_y,
            token_x_scaling_factor,
            token_y_scaling_factor,
            price_scaling_factor,
            aggressive_fee,
            passive_fee,
            passive_order_payout,
        })
    }

    /// Get the base token.
    #[must_use]
    pub const fn token_x(&self) -> &Token {
        &self.token_x
    }

    /// Get the quote token.
    #[must_use]
    pub const fn token_y(&self) -> &Token {
        &self.token_y
    }

    /// Get the base-10 exponent scaling raw base amounts.
    #[must_use]
    pub const fn token_x_scaling_factor(&self) -> u32 {
        self.token_x_scaling_factor
    }

    /// Get the base-10 exponent scaling raw quote amounts.
    #[must_use]
    pub const fn token_y_scaling_factor(&self) -> u32 {
        self.token_y_scaling_factor
    }

    /// Get the base-10 exponent scaling raw prices.
    #[must_use]
    pub const fn price_scaling_factor(&self) -> u32 {
        self.price_scaling_factor
    }

    /// Get the taker fee rate.
    #[must_use]
    pub const fn aggressive_fee(&self) -> Decimal {
        self.aggressive_fee
    }

    /// Get the maker fee rate.
    #[must_use]
    pub const fn passive_fee(&self) -> Decimal {
        self.passive_fee
    }

    /// Whether the venue pays resting orders a payout that can offset
    /// the passive fee.
    #[must_use]
    pub const fn passive_order_payout(&self) -> bool {
        self.passive_order_payout
    }
}
