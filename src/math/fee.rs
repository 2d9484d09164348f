//! Fee arithmetic in three directions with load-bearing rounding.
//!
//! The protocol charges fees in two ways: added on top of the notional
//! (aggressive taker fee) or deducted from proceeds (passive maker
//! fee). A third direction solves for the gross value that nets a given
//! target after the fee.
//!
//! # Rounding policy
//!
//! All three public functions round the fee **up** and the principal in
//! the trader-unfavorable direction, so a computed fee never undershoots
//! the protocol's actual on-chain fee and an estimate is never more
//! favorable to the trader than settlement:
//!
//! - [`value_with_fee`] rounds the total the trader pays **up**
//! - [`value_after_fee`] rounds the net the trader receives **down**
//! - [`value_before_fee`] rounds the gross the trader must post **up**
//!
//! Callers must supply a fee rate in `[0, 1)`; [`crate::domain::Market`]
//! enforces this at construction.

use rust_decimal::Decimal;

use super::scale::{round_down, round_up};

/// Computes a fee added on top of a value.
///
/// Returns `(fee, total)` where `fee = value × rate` rounded up to
/// `fee_decimals` and `total = value + fee` rounded up to
/// `value_decimals`. Used when the fee is charged in addition to the
/// notional, e.g. the aggressive taker fee on a buy.
#[must_use]
pub fn value_with_fee(
    value: Decimal,
    rate: Decimal,
    fee_decimals: u32,
    value_decimals: u32,
) -> (Decimal, Decimal) {
    let fee = round_up(value * rate, fee_decimals);
    let total = round_up(value + fee, value_decimals);
    (fee, total)
}

/// Computes a fee deducted from a value.
///
/// Returns `(fee, net)` where `fee = value × rate` rounded up to
/// `fee_decimals` and `net = value − fee` rounded down to
/// `value_decimals`. Used when the fee comes out of proceeds, e.g. the
/// passive maker fee on a fill.
#[must_use]
pub fn value_after_fee(
    value: Decimal,
    rate: Decimal,
    fee_decimals: u32,
    value_decimals: u32,
) -> (Decimal, Decimal) {
    let fee = round_up(value * rate, fee_decimals);
    let net = round_down(value - fee, value_decimals);
    (fee, net)
}

/// Solves for the gross value that nets a target after the fee.
///
/// Returns `(fee, gross)` where `gross = net / (1 − rate)` rounded up
/// to `value_decimals` and `fee = gross × rate` rounded up to
/// `fee_decimals`. Used when a target net value must be
/// reverse-engineered to a gross order size.
#[must_use]
pub fn value_before_fee(
    net: Decimal,
    rate: Decimal,
    fee_decimals: u32,
    value_decimals: u32,
) -> (Decimal, Decimal) {
    debug_assert!(rate < Decimal::ONE, "fee rate must be below 1");
    let gross = round_up(net / (Decimal::ONE - rate), value_decimals);
    let fee = round_up(gross * rate, fee_decimals);
    (fee, gross)
}

/// Floor-rounded fee for the optimistic side of a settlement bracket.
///
/// The on-chain fee can land anywhere within one rounding increment; the
/// ceiling-rounded functions above bound it from above, this bounds it
/// from below.
pub(crate) fn fee_floor(value: Decimal, rate: Decimal, fee_decimals: u32) -> Decimal {
    round_down(value * rate, fee_decimals)
}

/// Floor-rounded counterpart of [`value_before_fee`], bounding from
/// below the gross deposit a resting order could settle at.
pub(crate) fn value_before_fee_floor(
    net: Decimal,
    rate: Decimal,
    fee_decimals: u32,
    value_decimals: u32,
) -> (Decimal, Decimal) {
    debug_assert!(rate < Decimal::ONE, "fee rate must be below 1");
    let gross = round_down(net / (Decimal::ONE - rate), value_decimals);
    let fee = fee_floor(gross, rate, fee_decimals);
    (fee, gross)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn value_with_fee_adds_on_top() {
        let (fee, total) = value_with_fee(dec!(1050), dec!(0.001), 2, 2);

        assert_eq!(fee, dec!(1.05));
        assert_eq!(total, dec!(1051.05));
    }

    #[test]
    fn value_with_fee_rounds_fee_up() {
        // 100.04 × 0.001 = 0.10004 -> 0.11 at 2 decimals
        let (fee, total) = value_with_fee(dec!(100.04), dec!(0.001), 2, 2);

        assert_eq!(fee, dec!(0.11));
        assert_eq!(total, dec!(100.15));
    }

    #[test]
    fn value_after_fee_deducts() {
        let (fee, net) = value_after_fee(dec!(100), dec!(0.002), 4, 4);

        assert_eq!(fee, dec!(0.2000));
        assert_eq!(net, dec!(99.8000));
    }

    #[test]
    fn value_after_fee_rounds_net_down() {
        // fee = ceil(0.050005) = 0.0501, net = floor(99.9599...) at 2 dp
        let (fee, net) = value_after_fee(dec!(100.01), dec!(0.0005), 4, 2);

        assert_eq!(fee, dec!(0.0501));
        assert_eq!(net, dec!(99.95));
    }

    #[test]
    fn value_before_fee_recovers_gross() {
        let (fee, gross) = value_before_fee(dec!(99.8), dec!(0.002), 4, 4);

        assert_eq!(gross, dec!(100.0000));
        assert_eq!(fee, dec!(0.2000));
    }

    #[test]
    fn value_before_fee_rounds_gross_up() {
        let (_, gross) = value_before_fee(dec!(100), dec!(0.003), 4, 4);

        // 100 / 0.997 = 100.3009027... -> ceil at 4 dp
        assert_eq!(gross, dec!(100.3010));
    }

    #[test]
    fn round_trip_never_favors_the_trader() {
        for value in [dec!(100), dec!(57.73), dec!(1050), dec!(0.25)] {
            let rate = dec!(0.002);
            let (_, net) = value_after_fee(value, rate, 4, 4);
            let (_, gross) = value_before_fee(net, rate, 4, 4);

            assert!(gross >= net, "gross {gross} below net {net}");
            assert!(
                gross + dec!(0.0001) >= value,
                "round trip of {value} recovered only {gross}"
            );
        }
    }

    #[test]
    fn zero_rate_charges_no_fee() {
        let (fee, total) = value_with_fee(dec!(100), Decimal::ZERO, 4, 4);
        assert_eq!(fee, Decimal::ZERO);
        assert_eq!(total, dec!(100));

        let (fee, net) = value_after_fee(dec!(100), Decimal::ZERO, 4, 4);
        assert_eq!(fee, Decimal::ZERO);
        assert_eq!(net, dec!(100));
    }

    #[test]
    fn floor_variants_bound_from_below() {
        let value = dec!(100.04);
        let rate = dec!(0.001);

        let floor = fee_floor(value, rate, 2);
        let (ceil, _) = value_with_fee(value, rate, 2, 2);

        assert_eq!(floor, dec!(0.10));
        assert!(floor <= ceil);
    }
}
