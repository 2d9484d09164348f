//! Limit order simulation.
//!
//! A limit order's fill is not known in advance, so
//! [`simulate_limit_order`] never consults the order book: it reports
//! only the deterministic bounds implied by the trader's chosen price
//! and the market's passive (maker) fee rate. The effective on-chain fee
//! can land anywhere within one rounding increment, so every quote
//! amount is reported as a `max`/`min` pair guaranteed to bracket the
//! true settlement in both directions.

use serde::{Deserialize, Serialize};

use crate::domain::{Amount, DomainError, Market, Price};
use crate::math::fee::{fee_floor, value_after_fee, value_before_fee, value_before_fee_floor};
use crate::math::scale::{round_down, round_up};

use super::{Direction, InputToken};

/// Inputs for one limit-order simulation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct LimitOrderSpec {
    /// Whether the trader is buying or selling token X.
    pub direction: Direction,
    /// Which token the `amount` is denominated in.
    pub input_token: InputToken,
    /// The amount the trader supplies (X size or Y value).
    pub amount: Amount,
    /// The trader-chosen limit price.
    pub price: Price,
    /// Whether the order must rest (reject instead of taking).
    pub post_only: bool,
}

/// Outcome of a limit-order simulation.
///
/// For a buy, `max_token_y`/`min_token_y` bound what the trader pays;
/// for a sell, what the trader receives. `max_fee`/`min_fee` bound the
/// passive fee the protocol ultimately charges. The bracket always
/// satisfies `max_token_y >= min_token_y`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LimitOrderDetails {
    /// Direction of the simulated order.
    pub direction: Direction,
    /// Which token the input amount was denominated in.
    pub input_token: InputToken,
    /// The limit price the bounds were computed at.
    pub price: Price,
    /// Token X amount the order executes (posted on a sell, received on
    /// a buy).
    pub token_x: Amount,
    /// Upper bound of the token Y amount (pay for buys, receive for
    /// sells).
    pub max_token_y: Amount,
    /// Lower bound of the token Y amount.
    pub min_token_y: Amount,
    /// Upper bound of the passive fee.
    pub max_fee: Amount,
    /// Lower bound of the passive fee.
    pub min_fee: Amount,
    /// Whether the order was flagged post-only; carried through for the
    /// caller building the on-chain order, the arithmetic is unchanged.
    pub post_only: bool,
}

/// Simulates a limit order at a trader-chosen price.
///
/// The input amount is converted to the counter token at the given
/// price, then the passive fee is applied in both rounding directions
/// to produce a bracket guaranteed to contain the on-chain settlement.
/// When the market pays a passive-order payout, the optimistic bound
/// assumes the payout offsets the fee entirely.
///
/// # Errors
///
/// Returns [`DomainError`] for malformed input: a non-positive price or
/// a negative amount.
pub fn simulate_limit_order(
    market: &Market,
    spec: &LimitOrderSpec,
) -> Result<LimitOrderDetails, DomainError> {
    if spec.price <= Price::ZERO {
        return Err(DomainError::NonPositivePrice { price: spec.price });
    }
    if spec.amount < Amount::ZERO {
        return Err(DomainError::NegativeAmount {
            amount: spec.amount,
        });
    }

    let x_decimals = market.token_x().rounding_decimals();
    let y_decimals = market.token_y().rounding_decimals();
    let rate = market.passive_fee();

    let details = match (spec.direction, spec.input_token) {
        // Buyer posts quote to receive a fixed base size: the deposit
        // that guarantees the fill is the gross of the notional.
        (Direction::Buy, InputToken::X) => {
            let token_x = round_down(spec.amount, x_decimals);
            let notional = token_x * spec.price;
            let (max_fee, max_token_y) = value_before_fee(notional, rate, y_decimals, y_decimals);
            let (min_fee, min_token_y) = if market.passive_order_payout() {
                (Amount::ZERO, round_down(notional, y_decimals))
            } else {
                value_before_fee_floor(notional, rate, y_decimals, y_decimals)
            };
            LimitOrderDetails {
                token_x,
                max_token_y,
                min_token_y,
                max_fee,
                min_fee,
                ..blank(spec)
            }
        }
        // Buyer commits a quote budget: the guaranteed base size is
        // what the budget nets after the worst-case fee.
        (Direction::Buy, InputToken::Y) => {
            let budget = round_down(spec.amount, y_decimals);
            let (max_fee, net) = value_after_fee(budget, rate, y_decimals, y_decimals);
            let token_x = round_down(net / spec.price, x_decimals);
            let notional = token_x * spec.price;
            let min_fee = if market.passive_order_payout() {
                Amount::ZERO
            } else {
                fee_floor(notional, rate, y_decimals)
            };
            LimitOrderDetails {
                token_x,
                max_token_y: budget,
                min_token_y: round_down(notional + min_fee, y_decimals),
                max_fee,
                min_fee,
                ..blank(spec)
            }
        }
        // Seller posts a fixed base size; proceeds are the notional
        // less the fee, bracketed by the two fee roundings.
        (Direction::Sell, InputToken::X) => {
            let token_x = round_down(spec.amount, x_decimals);
            let notional = token_x * spec.price;
            let (max_fee, min_token_y) = value_after_fee(notional, rate, y_decimals, y_decimals);
            let min_fee = if market.passive_order_payout() {
                Amount::ZERO
            } else {
                fee_floor(notional, rate, y_decimals)
            };
            LimitOrderDetails {
                token_x,
                max_token_y: round_up(notional - min_fee, y_decimals),
                min_token_y,
                max_fee,
                min_fee,
                ..blank(spec)
            }
        }
        // Seller targets a net quote amount: the base size posted must
        // cover the gross of the target.
        (Direction::Sell, InputToken::Y) => {
            let target = round_down(spec.amount, y_decimals);
            let (max_fee, gross) = value_before_fee(target, rate, y_decimals, y_decimals);
            let token_x = round_up(gross / spec.price, x_decimals);
            let notional = token_x * spec.price;
            let min_fee = if market.passive_order_payout() {
                Amount::ZERO
            } else {
                fee_floor(notional, rate, y_decimals)
            };
            LimitOrderDetails {
                token_x,
                max_token_y: round_up(notional - min_fee, y_decimals),
                min_token_y: target,
                max_fee,
                min_fee,
                ..blank(spec)
            }
        }
    };

    Ok(details)
}

/// Identity fields shared by every combination above.
fn blank(spec: &LimitOrderSpec) -> LimitOrderDetails {
    LimitOrderDetails {
        direction: spec.direction,
        input_token: spec.input_token,
        price: spec.price,
        token_x: Amount::ZERO,
        max_token_y: Amount::ZERO,
        min_token_y: Amount::ZERO,
        max_fee: Amount::ZERO,
        min_fee: Amount::ZERO,
        post_only: spec.post_only,
    }
}
