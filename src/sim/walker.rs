//! Depth ladder walking.
//!
//! [`walk`] simulates consuming one side of an order book against a
//! target expressed either as a base-token size or a quote-token value,
//! optionally stopping at a price bound. It tracks the executed size and
//! value, the worst price touched, and the volume-weighted average
//! price. Both simulators delegate their numeric walking here.

use tracing::trace;

use crate::domain::{Amount, BookSide, OrderbookLevel, Price};

/// What the walk is trying to satisfy.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WalkTarget {
    /// A base-token (X) size to execute.
    Size(Amount),
    /// A quote-token (Y) value to execute.
    Value(Amount),
}

impl WalkTarget {
    const fn amount(self) -> Amount {
        match self {
            Self::Size(amount) | Self::Value(amount) => amount,
        }
    }
}

/// Result of walking a depth ladder.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WalkOutcome {
    /// Base-token size executed.
    pub executed_size: Amount,
    /// Quote-token value executed.
    pub executed_value: Amount,
    /// Price of the last (worst) level consumed, if any was.
    pub worst_price: Option<Price>,
    /// Volume-weighted average execution price, if anything executed.
    pub vwap: Option<Price>,
    /// Whether the target was fully satisfied.
    pub fully_filled: bool,
}

impl WalkOutcome {
    fn unfilled() -> Self {
        Self {
            executed_size: Amount::ZERO,
            executed_value: Amount::ZERO,
            worst_price: None,
            vwap: None,
            fully_filled: false,
        }
    }
}

/// Walks a depth ladder, consuming levels best-to-worst until the
/// target is satisfied, the ladder is exhausted, or the next level's
/// price crosses `bound`.
///
/// `bound` is a maximum price for asks and a minimum price for bids.
/// When a bound stops the walk early the outcome is marked partially
/// filled. Levels with zero size or zero price are skipped without
/// affecting price tracking. A zero target is trivially satisfied.
#[must_use]
pub fn walk(
    levels: &[OrderbookLevel],
    target: WalkTarget,
    bound: Option<Price>,
    side: BookSide,
) -> WalkOutcome {
    let mut remaining = target.amount();
    if remaining.is_zero() {
        return WalkOutcome {
            fully_filled: true,
            ..WalkOutcome::unfilled()
        };
    }

    let mut executed_size = Amount::ZERO;
    let mut executed_value = Amount::ZERO;
    let mut worst_price = None;

    for level in levels {
        if level.size().is_zero() || level.price().is_zero() {
            continue;
        }
        if let Some(bound) = bound {
            let crossed = match side {
                BookSide::Asks => level.price() > bound,
                BookSide::Bids => level.price() < bound,
            };
            if crossed {
                break;
            }
        }

        match target {
            WalkTarget::Size(_) => {
                let take = level.size().min(remaining);
                executed_size += take;
                executed_value += take * level.price();
                remaining -= take;
            }
            WalkTarget::Value(_) => {
                let level_value = level.size() * level.price();
                if level_value <= remaining {
                    executed_size += level.size();
                    executed_value += level_value;
                    remaining -= level_value;
                } else {
                    executed_size += remaining / level.price();
                    executed_value += remaining;
                    remaining = Amount::ZERO;
                }
            }
        }
        worst_price = Some(level.price());

        if remaining.is_zero() {
            break;
        }
    }

    let vwap = if executed_size.is_zero() {
        None
    } else {
        Some(executed_value / executed_size)
    };
    let outcome = WalkOutcome {
        executed_size,
        executed_value,
        worst_price,
        vwap,
        fully_filled: remaining.is_zero(),
    };
    trace!(
        size = %outcome.executed_size,
        value = %outcome.executed_value,
        fully_filled = outcome.fully_filled,
        "ladder walk complete"
    );
    outcome
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    fn level(price: Price, size: Amount) -> OrderbookLevel {
        OrderbookLevel::new(0, price, 0, size)
    }

    fn ask_ladder() -> Vec<OrderbookLevel> {
        vec![level(dec!(100), dec!(10)), level(dec!(101), dec!(10))]
    }

    #[test]
    fn size_target_consumes_levels_in_order() {
        let outcome = walk(
            &ask_ladder(),
            WalkTarget::Size(dec!(15)),
            None,
            BookSide::Asks,
        );

        assert_eq!(outcome.executed_size, dec!(15));
        assert_eq!(outcome.executed_value, dec!(1000) + dec!(505));
        assert_eq!(outcome.worst_price, Some(dec!(101)));
        assert!(outcome.fully_filled);
    }

    #[test]
    fn value_target_splits_the_marginal_level() {
        let outcome = walk(
            &ask_ladder(),
            WalkTarget::Value(dec!(1050)),
            None,
            BookSide::Asks,
        );

        // 10 units at 100 (value 1000), then 50/101 units at 101
        assert_eq!(outcome.executed_value, dec!(1050));
        assert_eq!(outcome.executed_size, dec!(10) + dec!(50) / dec!(101));
        assert_eq!(outcome.worst_price, Some(dec!(101)));
        assert!(outcome.fully_filled);
    }

    #[test]
    fn vwap_is_value_over_size() {
        let outcome = walk(
            &ask_ladder(),
            WalkTarget::Size(dec!(20)),
            None,
            BookSide::Asks,
        );

        let vwap = outcome.vwap.unwrap();
        assert_eq!(vwap, dec!(2010) / dec!(20));
    }

    #[test]
    fn exhausted_ladder_is_partial() {
        let outcome = walk(
            &ask_ladder(),
            WalkTarget::Size(dec!(25)),
            None,
            BookSide::Asks,
        );

        assert_eq!(outcome.executed_size, dec!(20));
        assert!(!outcome.fully_filled);
    }

    #[test]
    fn bound_stops_the_walk_before_the_crossing_level() {
        let outcome = walk(
            &ask_ladder(),
            WalkTarget::Size(dec!(15)),
            Some(dec!(100.5)),
            BookSide::Asks,
        );

        assert_eq!(outcome.executed_size, dec!(10));
        assert_eq!(outcome.worst_price, Some(dec!(100)));
        assert!(!outcome.fully_filled);
    }

    #[test]
    fn bid_bound_is_a_price_floor() {
        let bids = vec![level(dec!(99), dec!(5)), level(dec!(98), dec!(5))];
        let outcome = walk(&bids, WalkTarget::Size(dec!(8)), Some(dec!(98.5)), BookSide::Bids);

        assert_eq!(outcome.executed_size, dec!(5));
        assert_eq!(outcome.worst_price, Some(dec!(99)));
        assert!(!outcome.fully_filled);
    }

    #[test]
    fn empty_ladder_executes_nothing() {
        let outcome = walk(&[], WalkTarget::Size(dec!(5)), None, BookSide::Asks);

        assert_eq!(outcome.executed_size, Amount::ZERO);
        assert_eq!(outcome.worst_price, None);
        assert!(!outcome.fully_filled);
    }

    #[test]
    fn zero_target_is_trivially_filled() {
        let outcome = walk(&ask_ladder(), WalkTarget::Value(Amount::ZERO), None, BookSide::Asks);

        assert_eq!(outcome.executed_size, Amount::ZERO);
        assert!(outcome.fully_filled);
    }

    #[test]
    fn zero_size_levels_are_skipped_without_price_tracking() {
        let ladder = vec![
            level(dec!(100), Amount::ZERO),
            level(dec!(101), dec!(10)),
        ];
        let outcome = walk(&ladder, WalkTarget::Size(dec!(5)), None, BookSide::Asks);

        assert_eq!(outcome.executed_size, dec!(5));
        assert_eq!(outcome.worst_price, Some(dec!(101)));
    }

    #[test]
    fn conservation_value_equals_sum_of_level_products() {
        let ladder = vec![
            level(dec!(100), dec!(3)),
            level(dec!(100.5), dec!(4)),
            level(dec!(102), dec!(5)),
        ];
        let outcome = walk(&ladder, WalkTarget::Size(dec!(12)), None, BookSide::Asks);

        let expected = dec!(100) * dec!(3) + dec!(100.5) * dec!(4) + dec!(102) * dec!(5);
        assert_eq!(outcome.executed_value, expected);
    }
}
