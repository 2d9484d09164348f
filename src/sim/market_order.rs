//! Market order simulation.
//!
//! [`simulate_market_order`] estimates what a market order would execute
//! at against an order-book snapshot: best-estimate fields from an
//! unconstrained walk of the relevant side, and worst-case guaranteed
//! fields from a second walk under a slippage bound. One entry point
//! covers all four direction × input-token combinations.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::domain::{Amount, BookSide, DomainError, Market, Orderbook, Price};
use crate::math::fee::{value_after_fee, value_with_fee};
use crate::math::scale::{round_down, round_up};

use super::walker::{walk, WalkOutcome, WalkTarget};
use super::{Direction, InputToken};

/// How the worst-case slippage bound is chosen.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SlippageMode {
    /// Derive the bound from the snapshot's own measured impact: the
    /// worst price the unconstrained walk touches becomes the bound, so
    /// the guarantee is never tighter than what the book already implies.
    Auto,
    /// A caller-supplied maximum fractional deviation from the best
    /// price, in `[0, 1)`.
    Max(Decimal),
}

/// Inputs for one market-order simulation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct MarketOrderSpec {
    /// Whether the trader is buying or selling token X.
    pub direction: Direction,
    /// Which token the `amount` is denominated in.
    pub input_token: InputToken,
    /// The amount the trader supplies (X size or Y value).
    pub amount: Amount,
    /// Slippage bound selection for the guaranteed fields.
    pub slippage: SlippageMode,
}

/// Outcome of a market-order simulation.
///
/// `est_*` fields are the deterministic best estimate from walking the
/// snapshot unconstrained; `worst_price`, `fee`, `token_x` and `token_y`
/// are the worst-case guarantee under the slippage bound. All fields are
/// decimal; token amounts the trader receives are rounded down and
/// amounts the trader pays (and fees) are rounded up, so no field is
/// more favorable than on-chain settlement.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MarketOrderDetails {
    /// Direction of the simulated order.
    pub direction: Direction,
    /// Which token the input amount was denominated in.
    pub input_token: InputToken,
    /// Volume-weighted average execution price of the estimate.
    pub est_price: Price,
    /// Fractional deviation of `est_price` from the best price.
    pub est_slippage: Decimal,
    /// Estimated protocol fee, in token Y.
    pub est_fee: Amount,
    /// Estimated token X amount (received on a buy, paid on a sell).
    pub est_token_x: Amount,
    /// Estimated token Y amount including fee (paid on a buy, received
    /// on a sell).
    pub est_token_y: Amount,
    /// Worst execution price guaranteed under the slippage bound.
    pub worst_price: Price,
    /// Worst-case protocol fee, in token Y.
    pub fee: Amount,
    /// Guaranteed token X amount under the bound.
    pub token_x: Amount,
    /// Guaranteed token Y amount under the bound.
    pub token_y: Amount,
    /// Whether the bounded walk satisfied the full input.
    pub fully_filled: bool,
}

impl MarketOrderDetails {
    /// The degraded sentinel returned when the book cannot satisfy any
    /// of the input: every numeric field zero, nothing filled.
    ///
    /// Callers treat this as "cannot estimate", not as an error.
    #[must_use]
    pub const fn empty(direction: Direction, input_token: InputToken) -> Self {
        Self {
            direction,
            input_token,
            est_price: Decimal::ZERO,
            est_slippage: Decimal::ZERO,
            est_fee: Decimal::ZERO,
            est_token_x: Decimal::ZERO,
            est_token_y: Decimal::ZERO,
            worst_price: Decimal::ZERO,
            fee: Decimal::ZERO,
            token_x: Decimal::ZERO,
            token_y: Decimal::ZERO,
            fully_filled: false,
        }
    }

    /// Whether this is the degraded sentinel.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.est_token_x.is_zero() && self.est_token_y.is_zero()
    }
}

/// Simulates a market order against an order-book snapshot.
///
/// Buys walk the asks, sells walk the bids. An X-denominated input is a
/// size target, a Y-denominated input a value target. The unconstrained
/// walk produces the `est_*` fields; a second walk under the resolved
/// slippage bound produces the guaranteed fields, priced entirely at the
/// worst price it touches.
///
/// An empty side, or liquidity insufficient to execute anything, yields
/// [`MarketOrderDetails::empty`] rather than an error.
///
/// # Errors
///
/// Returns [`DomainError`] for malformed input: a negative amount, or a
/// `SlippageMode::Max` fraction outside `[0, 1)`.
pub fn simulate_market_order(
    market: &Market,
    orderbook: &Orderbook,
    spec: &MarketOrderSpec,
) -> Result<MarketOrderDetails, DomainError> {
    if spec.amount < Amount::ZERO {
        return Err(DomainError::NegativeAmount {
            amount: spec.amount,
        });
    }
    if let SlippageMode::Max(slippage) = spec.slippage {
        if slippage < Decimal::ZERO || slippage >= Decimal::ONE {
            return Err(DomainError::InvalidSlippage { slippage });
        }
    }

    let side = match spec.direction {
        Direction::Buy => BookSide::Asks,
        Direction::Sell => BookSide::Bids,
    };
    let levels = orderbook.side(side);
    let Some(best) = levels
        .iter()
        .find(|level| !level.size().is_zero() && !level.price().is_zero())
        .map(|level| level.price())
    else {
        debug!(side = %side, "book side empty, returning sentinel details");
        return Ok(MarketOrderDetails::empty(spec.direction, spec.input_token));
    };

    let target = match spec.input_token {
        InputToken::X => WalkTarget::Size(spec.amount),
        InputToken::Y => WalkTarget::Value(spec.amount),
    };

    let unbounded = walk(levels, target, None, side);
    if unbounded.executed_size.is_zero() {
        debug!(amount = %spec.amount, "nothing executable, returning sentinel details");
        return Ok(MarketOrderDetails::empty(spec.direction, spec.input_token));
    }
    let vwap = unbounded.vwap.unwrap_or(best);

    let bound = match spec.slippage {
        SlippageMode::Auto => unbounded.worst_price.unwrap_or(best),
        SlippageMode::Max(slippage) => match spec.direction {
            Direction::Buy => best * (Decimal::ONE + slippage),
            Direction::Sell => best * (Decimal::ONE - slippage),
        },
    };
    let bounded = walk(levels, target, Some(bound), side);
    let worst_price = bounded.worst_price.unwrap_or(bound);

    let x_decimals = market.token_x().rounding_decimals();
    let y_decimals = market.token_y().rounding_decimals();
    let rate = market.aggressive_fee();

    let (est_fee, est_token_x, est_token_y) = match spec.direction {
        // Taker fee is added on top of the quote the buyer pays.
        Direction::Buy => {
            let (fee, total) = value_with_fee(unbounded.executed_value, rate, y_decimals, y_decimals);
            (fee, round_down(unbounded.executed_size, x_decimals), total)
        }
        // Taker fee is deducted from the quote the seller receives.
        Direction::Sell => {
            let (fee, net) = value_after_fee(unbounded.executed_value, rate, y_decimals, y_decimals);
            (fee, round_up(unbounded.executed_size, x_decimals), net)
        }
    };
    let est_slippage = (vwap - best).abs() / best;

    let (fee, token_x, token_y) = guaranteed_fields(market, spec, &bounded, worst_price);

    Ok(MarketOrderDetails {
        direction: spec.direction,
        input_token: spec.input_token,
        est_price: vwap,
        est_slippage,
        est_fee,
        est_token_x,
        est_token_y,
        worst_price,
        fee,
        token_x,
        token_y,
        fully_filled: bounded.fully_filled,
    })
}

/// Worst-case amounts assuming the entire bounded execution settles at
/// the worst price.
fn guaranteed_fields(
    market: &Market,
    spec: &MarketOrderSpec,
    bounded: &WalkOutcome,
    worst_price: Price,
) -> (Amount, Amount, Amount) {
    let x_decimals = market.token_x().rounding_decimals();
    let y_decimals = market.token_y().rounding_decimals();
    let rate = market.aggressive_fee();

    if bounded.executed_size.is_zero() || worst_price.is_zero() {
        return (Amount::ZERO, Amount::ZERO, Amount::ZERO);
    }

    match (spec.direction, spec.input_token) {
        // Budget executes at the worst price: the buyer receives at
        // least value / worst_price and pays value plus the taker fee.
        (Direction::Buy, InputToken::Y) => {
            let (fee, total) = value_with_fee(bounded.executed_value, rate, y_decimals, y_decimals);
            let token_x = round_down(bounded.executed_value / worst_price, x_decimals);
            (fee, token_x, total)
        }
        // A size order pays at most size × worst_price plus the fee.
        (Direction::Buy, InputToken::X) => {
            let notional = bounded.executed_size * worst_price;
            let (fee, total) = value_with_fee(notional, rate, y_decimals, y_decimals);
            (fee, round_down(bounded.executed_size, x_decimals), total)
        }
        // A seller's proceeds are at least size × worst_price less the fee.
        (Direction::Sell, _) => {
            let notional = bounded.executed_size * worst_price;
            let (fee, net) = value_after_fee(notional, rate, y_decimals, y_decimals);
            (fee, round_up(bounded.executed_size, x_decimals), net)
        }
    }
}
