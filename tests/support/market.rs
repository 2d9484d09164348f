use rust_decimal::Decimal;
use rust_decimal_macros::dec;

use fillcast::domain::{Market, Token};

pub fn make_market() -> Market {
    make_market_with_fees(dec!(0.001), dec!(0.002))
}

pub fn make_market_with_fees(aggressive: Decimal, passive: Decimal) -> Market {
    Market::try_new(
        Token::new("WETH", 18, 6),
        Token::new("USDC", 6, 2),
        18,
        6,
        18,
        aggressive,
        passive,
        false,
    )
    .expect("valid test market")
}
