//! Exact scaling between raw integer token units and decimal amounts.
//!
//! Raw on-chain values are integers counting minimal token units; humans
//! and the simulators work in decimals. Conversion is an exact base-10
//! shift in both directions, with [`amount_to_raw`] truncating to the
//! declared number of decimal places first so a produced raw amount
//! never exceeds what the decimal amount represents.
//!
//! # Contract
//!
//! - All conversions return [`Err`] instead of panicking when a value is
//!   not representable.
//! - Directional rounding helpers ([`round_up`], [`round_down`]) round
//!   away from and toward zero respectively, at a fixed number of
//!   decimal places.

use rust_decimal::{Decimal, RoundingStrategy};
use thiserror::Error;

/// Maximum decimal scale the arithmetic supports.
pub const MAX_SCALE: u32 = 28;

/// A decimal amount cannot be represented within the venue's declared
/// decimal places, or a raw value overflows the decimal range.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum PrecisionError {
    /// The requested scale exceeds [`MAX_SCALE`].
    #[error("scale of {decimals} decimal places exceeds the supported maximum of {MAX_SCALE}")]
    UnsupportedScale {
        /// The requested number of decimal places.
        decimals: u32,
    },

    /// The value has more significant figures than can be expressed
    /// losslessly at the requested scale.
    #[error("value {value} cannot be represented at {decimals} decimal places without loss")]
    Unrepresentable {
        /// The offending value, rendered as a string (raw integers and
        /// decimals both funnel through here).
        value: String,
        /// The requested number of decimal places.
        decimals: u32,
    },

    /// Raw token amounts are unsigned; negative decimals have no raw form.
    #[error("amount must be non-negative, got {amount}")]
    NegativeAmount {
        /// The negative amount that was provided.
        amount: Decimal,
    },
}

/// Converts a raw integer amount of minimal units to a decimal amount.
///
/// The shift is exact: raw values are always an integer number of
/// minimal units, so no rounding occurs.
///
/// # Errors
///
/// Returns [`PrecisionError`] if `decimals` exceeds [`MAX_SCALE`] or the
/// raw value overflows the decimal mantissa.
pub fn raw_to_amount(raw: u128, decimals: u32) -> Result<Decimal, PrecisionError> {
    if decimals > MAX_SCALE {
        return Err(PrecisionError::UnsupportedScale { decimals });
    }
    let mantissa = i128::try_from(raw).map_err(|_| PrecisionError::Unrepresentable {
        value: raw.to_string(),
        decimals,
    })?;
    Decimal::try_from_i128_with_scale(mantissa, decimals).map_err(|_| {
        PrecisionError::Unrepresentable {
            value: raw.to_string(),
            decimals,
        }
    })
}

/// Converts a decimal amount to a raw integer amount of minimal units.
///
/// The amount is truncated (rounded toward zero) to `decimals` places
/// before the shift, so the produced raw amount never exceeds what the
/// decimal amount represents.
///
/// # Errors
///
/// Returns [`PrecisionError`] if the amount is negative, `decimals`
/// exceeds [`MAX_SCALE`], or the raw magnitude overflows.
pub fn amount_to_raw(amount: Decimal, decimals: u32) -> Result<u128, PrecisionError> {
    if decimals > MAX_SCALE {
        return Err(PrecisionError::UnsupportedScale { decimals });
    }
    if amount < Decimal::ZERO {
        return Err(PrecisionError::NegativeAmount { amount });
    }

    let truncated = amount.trunc_with_scale(decimals);
    let shift = decimals - truncated.scale();
    let factor = 10u128
        .checked_pow(shift)
        .ok_or_else(|| PrecisionError::Unrepresentable {
            value: amount.to_string(),
            decimals,
        })?;

    // Mantissa is non-negative after the sign check above.
    let mantissa = u128::try_from(truncated.mantissa()).map_err(|_| {
        PrecisionError::Unrepresentable {
            value: amount.to_string(),
            decimals,
        }
    })?;
    mantissa
        .checked_mul(factor)
        .ok_or_else(|| PrecisionError::Unrepresentable {
            value: amount.to_string(),
            decimals,
        })
}

/// Rounds a non-negative value up (away from zero) at `decimals` places.
#[must_use]
pub fn round_up(value: Decimal, decimals: u32) -> Decimal {
    value.round_dp_with_strategy(decimals, RoundingStrategy::AwayFromZero)
}

/// Rounds a non-negative value down (toward zero) at `decimals` places.
#[must_use]
pub fn round_down(value: Decimal, decimals: u32) -> Decimal {
    value.round_dp_with_strategy(decimals, RoundingStrategy::ToZero)
}
