//! End-to-end simulation scenarios against realistic snapshots.

mod support;

use rust_decimal_macros::dec;

use fillcast::domain::{DomainError, Orderbook};
use fillcast::sim::{
    simulate_limit_order, simulate_market_order, Direction, InputToken, LimitOrderSpec,
    MarketOrderDetails, MarketOrderSpec, SlippageMode,
};

use support::book::{empty_book, make_book};
use support::market::{make_market, make_market_with_fees};

fn two_level_asks() -> Orderbook {
    make_book(vec![], vec![(dec!(100), dec!(10)), (dec!(101), dec!(10))])
}

#[test]
fn market_buy_walks_the_ask_ladder() {
    let market = make_market();
    let book = two_level_asks();
    let spec = MarketOrderSpec {
        direction: Direction::Buy,
        input_token: InputToken::Y,
        amount: dec!(1050),
        slippage: SlippageMode::Max(dec!(0.05)),
    };

    let details = simulate_market_order(&market, &book, &spec).unwrap();

    // All 10 units at 100 (cost 1000) plus 50/101 units at 101.
    assert_eq!(details.est_price.round_dp(3), dec!(100.047));
    assert_eq!(details.est_fee, dec!(1.05));
    assert_eq!(details.est_token_x, dec!(10.495049));
    assert!(details.worst_price <= dec!(101));
    assert!(details.est_slippage < dec!(0.001));
    assert!(details.fully_filled);
}

#[test]
fn market_sell_mirrors_the_bid_ladder() {
    let market = make_market();
    let book = make_book(vec![(dec!(100), dec!(10)), (dec!(99), dec!(10))], vec![]);
    let spec = MarketOrderSpec {
        direction: Direction::Sell,
        input_token: InputToken::X,
        amount: dec!(15),
        slippage: SlippageMode::Max(dec!(0.05)),
    };

    let details = simulate_market_order(&market, &book, &spec).unwrap();

    // 10 @ 100 + 5 @ 99 = 1495 proceeds, 0.1% taker fee deducted.
    assert_eq!(details.est_fee, dec!(1.50));
    assert_eq!(details.est_token_y, dec!(1493.50));
    assert_eq!(details.worst_price, dec!(99));
    assert!(details.fully_filled);
}

#[test]
fn empty_book_returns_the_sentinel_not_an_error() {
    let market = make_market();
    let spec = MarketOrderSpec {
        direction: Direction::Buy,
        input_token: InputToken::Y,
        amount: dec!(1000),
        slippage: SlippageMode::Auto,
    };

    let details = simulate_market_order(&market, &empty_book(), &spec).unwrap();

    assert_eq!(
        details,
        MarketOrderDetails::empty(Direction::Buy, InputToken::Y)
    );
    assert!(details.is_empty());
}

#[test]
fn partial_liquidity_is_reported_not_hidden() {
    let market = make_market();
    let book = make_book(vec![], vec![(dec!(100), dec!(3))]);
    let spec = MarketOrderSpec {
        direction: Direction::Buy,
        input_token: InputToken::X,
        amount: dec!(10),
        slippage: SlippageMode::Auto,
    };

    let details = simulate_market_order(&market, &book, &spec).unwrap();

    assert_eq!(details.est_token_x, dec!(3));
    assert!(!details.fully_filled);
    assert!(!details.is_empty());
}

#[test]
fn auto_slippage_equals_the_snapshot_impact() {
    let market = make_market();
    let book = two_level_asks();
    let spec = MarketOrderSpec {
        direction: Direction::Buy,
        input_token: InputToken::X,
        amount: dec!(12),
        slippage: SlippageMode::Auto,
    };

    let details = simulate_market_order(&market, &book, &spec).unwrap();

    // The walk touches the 101 level, so the derived bound is exactly 101.
    assert_eq!(details.worst_price, dec!(101));
    assert_eq!(details.token_x, dec!(12));
    assert!(details.fully_filled);
}

#[test]
fn limit_sell_bounds_bracket_the_expected_proceeds() {
    let market = make_market_with_fees(dec!(0.001), dec!(0.002));
    let spec = LimitOrderSpec {
        direction: Direction::Sell,
        input_token: InputToken::X,
        amount: dec!(2),
        price: dec!(50),
        post_only: false,
    };

    let details = simulate_limit_order(&market, &spec).unwrap();

    // 2 × 50 × (1 − 0.002) = 99.8
    assert!(details.max_token_y >= dec!(99.8));
    assert!(details.min_token_y <= dec!(99.8));
    assert!(details.max_token_y >= details.min_token_y);
    assert!(details.max_fee >= details.min_fee);
}

#[test]
fn limit_buy_deposit_covers_the_notional_plus_fee() {
    let market = make_market_with_fees(dec!(0.001), dec!(0.002));
    let spec = LimitOrderSpec {
        direction: Direction::Buy,
        input_token: InputToken::X,
        amount: dec!(4),
        price: dec!(25),
        post_only: true,
    };

    let details = simulate_limit_order(&market, &spec).unwrap();

    let notional = dec!(100);
    assert!(details.max_token_y >= notional);
    assert!(details.min_token_y >= notional);
    assert!(details.post_only);
}

#[test]
fn simulations_are_idempotent() {
    let market = make_market();
    let book = two_level_asks();
    let spec = MarketOrderSpec {
        direction: Direction::Buy,
        input_token: InputToken::Y,
        amount: dec!(1050),
        slippage: SlippageMode::Max(dec!(0.05)),
    };

    let first = simulate_market_order(&market, &book, &spec).unwrap();
    let second = simulate_market_order(&market, &book, &spec).unwrap();
    assert_eq!(first, second);

    let limit_spec = LimitOrderSpec {
        direction: Direction::Sell,
        input_token: InputToken::X,
        amount: dec!(2),
        price: dec!(50),
        post_only: false,
    };
    let first = simulate_limit_order(&market, &limit_spec).unwrap();
    let second = simulate_limit_order(&market, &limit_spec).unwrap();
    assert_eq!(first, second);
}

#[test]
fn malformed_input_is_rejected_before_walking() {
    let market = make_market();
    let book = two_level_asks();

    let negative = MarketOrderSpec {
        direction: Direction::Buy,
        input_token: InputToken::Y,
        amount: dec!(-1),
        slippage: SlippageMode::Auto,
    };
    assert!(matches!(
        simulate_market_order(&market, &book, &negative),
        Err(DomainError::NegativeAmount { .. })
    ));

    let bad_price = LimitOrderSpec {
        direction: Direction::Buy,
        input_token: InputToken::X,
        amount: dec!(1),
        price: dec!(-50),
        post_only: false,
    };
    assert!(matches!(
        simulate_limit_order(&market, &bad_price),
        Err(DomainError::NonPositivePrice { .. })
    ));
}

#[test]
fn orderbook_snapshot_round_trips_through_json() {
    let book = two_level_asks();

    let encoded = serde_json::to_string(&book).unwrap();
    let decoded: Orderbook = serde_json::from_str(&encoded).unwrap();

    assert_eq!(decoded, book);
    assert_eq!(decoded.best_ask().unwrap().price(), dec!(100));
}
