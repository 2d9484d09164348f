//! Fillcast - Client-side execution simulation for on-chain order books.
//!
//! Given a snapshot of the order book and a trader's inputs, this crate
//! computes — without any network round-trip — what a market or limit
//! order would execute at, including price impact, slippage bounds, and
//! protocol fees, in exact decimal arithmetic that agrees with on-chain
//! settlement to the last unit.
//!
//! # Architecture
//!
//! Data flows one way: the caller supplies a [`domain::Market`]
//! (scaling factors, fee rates) and a [`domain::Orderbook`] snapshot to
//! one of the two simulators; the simulator delegates numeric walking
//! to [`sim::walker`] and fee math to [`math`], and returns a freshly
//! allocated result. No component holds state between calls, so every
//! entry point is idempotent and safe from any number of concurrent
//! callers.
//!
//! Rounding is load-bearing throughout: fees round up and principals
//! round in the trader-unfavorable direction, so no estimate is ever
//! more favorable to the trader than settlement.
//!
//! # Modules
//!
//! - [`domain`] - Tokens, markets, order-book snapshots
//! - [`math`] - Raw/decimal scaling and fee arithmetic
//! - [`sim`] - The market- and limit-order simulators
//! - [`error`] - Error types for the crate
//!
//! # Example
//!
//! ```
//! use fillcast::domain::{Market, Orderbook, OrderbookLevel, Token};
//! use fillcast::sim::{
//!     simulate_market_order, Direction, InputToken, MarketOrderSpec, SlippageMode,
//! };
//! use chrono::Utc;
//! use rust_decimal_macros::dec;
//!
//! let market = Market::try_new(
//!     Token::new("WETH", 18, 6),
//!     Token::new("USDC", 6, 2),
//!     18,
//!     6,
//!     18,
//!     dec!(0.001),
//!     dec!(0.0005),
//!     false,
//! )?;
//! let book = Orderbook::with_levels(
//!     vec![],
//!     vec![OrderbookLevel::new(0, dec!(100), 0, dec!(10))],
//!     0,
//!     Utc::now(),
//! );
//!
//! let details = simulate_market_order(
//!     &market,
//!     &book,
//!     &MarketOrderSpec {
//!         direction: Direction::Buy,
//!         input_token: InputToken::Y,
//!         amount: dec!(500),
//!         slippage: SlippageMode::Auto,
//!     },
//! )?;
//!
//! assert_eq!(details.est_price, dec!(100));
//! # Ok::<(), fillcast::Error>(())
//! ```

pub mod domain;
pub mod error;
pub mod math;
pub mod sim;

pub use error::{Error, Result};
