//! Order execution simulation.
//!
//! The two entry points are [`simulate_market_order`] and
//! [`simulate_limit_order`]. Each covers all four direction ×
//! input-token combinations through a single dispatch on
//! [`Direction`] and [`InputToken`], sharing the ladder walking in
//! [`walker`] and the fee arithmetic in [`crate::math`].
//!
//! Every call is a pure function of caller-owned immutable inputs: no
//! I/O, no shared state, safe from any number of concurrent callers,
//! and idempotent.

pub mod limit_order;
pub mod market_order;
pub mod walker;

use serde::{Deserialize, Serialize};

pub use limit_order::{simulate_limit_order, LimitOrderDetails, LimitOrderSpec};
pub use market_order::{
    simulate_market_order, MarketOrderDetails, MarketOrderSpec, SlippageMode,
};
pub use walker::{walk, WalkOutcome, WalkTarget};

/// Which way the trader is trading token X.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Direction {
    /// Buy token X with token Y.
    Buy,
    /// Sell token X for token Y.
    Sell,
}

/// Which token a trader-supplied amount is denominated in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum InputToken {
    /// The base token.
    X,
    /// The quote token.
    Y,
}
