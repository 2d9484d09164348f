use chrono::Utc;
use rust_decimal::Decimal;

use fillcast::domain::{Orderbook, OrderbookLevel};

pub fn level(price: Decimal, size: Decimal) -> OrderbookLevel {
    OrderbookLevel::new(0, price, 0, size)
}

pub fn make_book(bids: Vec<(Decimal, Decimal)>, asks: Vec<(Decimal, Decimal)>) -> Orderbook {
    Orderbook::with_levels(
        bids.into_iter().map(|(p, s)| level(p, s)).collect(),
        asks.into_iter().map(|(p, s)| level(p, s)).collect(),
        0,
        Utc::now(),
    )
}

pub fn empty_book() -> Orderbook {
    make_book(vec![], vec![])
}
