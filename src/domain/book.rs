//! Order book types for market depth representation.
//!
//! This module provides types for representing an order book snapshot:
//!
//! - [`OrderbookLevel`] - A single price level carrying both raw and decimal values
//! - [`Orderbook`] - Complete snapshot for one market
//! - [`BookSide`] - Which side of the book a ladder belongs to
//!
//! # Order Book Structure
//!
//! An order book has two sides:
//! - **Bids**: Buy orders, sorted by price descending (best bid first)
//! - **Asks**: Sell orders, sorted by price ascending (best ask first)
//!
//! Raw integer values live only here, as they arrive from the chain; all
//! simulation outputs are decimal.
//!
//! # Examples
//!
//! ```
//! use fillcast::domain::{BookSide, Orderbook, OrderbookLevel};
//! use chrono::Utc;
//! use rust_decimal_macros::dec;
//!
//! let asks = vec![
//!     OrderbookLevel::new(100_000, dec!(100), 10_000, dec!(10)),
//!     OrderbookLevel::new(101_000, dec!(101), 10_000, dec!(10)),
//! ];
//! let book = Orderbook::with_levels(vec![], asks, 0, Utc::now());
//!
//! assert_eq!(book.best_ask().unwrap().price(), dec!(100));
//! assert!(book.best_bid().is_none());
//! ```

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::math::scale::{self, PrecisionError};

use super::error::DomainError;
use super::market::Market;
use super::money::{Amount, Price};

/// Which side of the order book a ladder belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum BookSide {
    /// Buy orders, best price first (descending).
    Bids,
    /// Sell orders, best price first (ascending).
    Asks,
}

impl std::fmt::Display for BookSide {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Bids => write!(f, "bid"),
            Self::Asks => write!(f, "ask"),
        }
    }
}

/// A single price level in an order book.
///
/// Carries the raw on-chain integers alongside their decimal
/// conversions so callers never re-derive one from the other.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OrderbookLevel {
    raw_price: u128,
    price: Price,
    raw_size: u128,
    size: Amount,
}

impl OrderbookLevel {
    /// Creates a new price level from already-converted values.
    #[must_use]
    pub const fn new(raw_price: u128, price: Price, raw_size: u128, size: Amount) -> Self {
        Self {
            raw_price,
            price,
            raw_size,
            size,
        }
    }

    /// Creates a price level from raw on-chain integers, converting
    /// through the market's scaling factors.
    ///
    /// # Errors
    ///
    /// Returns [`PrecisionError`] if a raw value cannot be represented
    /// as a decimal at the market's scale.
    pub fn from_raw(
        raw_price: u128,
        raw_size: u128,
        market: &Market,
    ) -> Result<Self, PrecisionError> {
        let price = scale::raw_to_amount(raw_price, market.price_scaling_factor())?;
        let size = scale::raw_to_amount(raw_size, market.token_x_scaling_factor())?;
        Ok(Self {
            raw_price,
            price,
            raw_size,
            size,
        })
    }

    /// Returns the raw on-chain price.
    #[must_use]
    pub const fn raw_price(&self) -> u128 {
        self.raw_price
    }

    /// Returns the price at this level.
    #[must_use]
    pub const fn price(&self) -> Price {
        self.price
    }

    /// Returns the raw on-chain size.
    #[must_use]
    pub const fn raw_size(&self) -> u128 {
        self.raw_size
    }

    /// Returns the total size available at this level.
    #[must_use]
    pub const fn size(&self) -> Amount {
        self.size
    }
}

/// Order book snapshot for a single market.
///
/// Contains bid and ask ladders sorted by price (best prices first),
/// the price aggregation the snapshot was requested at, and the
/// snapshot timestamp. Consumed read-only; the simulation core never
/// mutates it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Orderbook {
    /// Bid (buy) levels, sorted by price descending.
    bids: Vec<OrderbookLevel>,
    /// Ask (sell) levels, sorted by price ascending.
    asks: Vec<OrderbookLevel>,
    /// Price aggregation level of the snapshot, in decimal places.
    aggregation: u32,
    /// When the snapshot was taken.
    timestamp: DateTime<Utc>,
}

impl Orderbook {
    /// Creates a book with the given ladders.
    ///
    /// Bids should be sorted by price descending, asks by price ascending.
    #[must_use]
    pub const fn with_levels(
        bids: Vec<OrderbookLevel>,
        asks: Vec<OrderbookLevel>,
        aggregation: u32,
        timestamp: DateTime<Utc>,
    ) -> Self {
        Self {
            bids,
            asks,
            aggregation,
            timestamp,
        }
    }

    /// Creates a book with ladder invariant validation.
    ///
    /// # Domain Invariants
    ///
    /// - bid prices strictly descending, ask prices strictly ascending
    /// - all prices positive, all sizes non-negative
    ///
    /// # Errors
    ///
    /// Returns `DomainError` if any invariant is violated.
    pub fn try_new(
        bids: Vec<OrderbookLevel>,
        asks: Vec<OrderbookLevel>,
        aggregation: u32,
        timestamp: DateTime<Utc>,
    ) -> Result<Self, DomainError> {
        Self::validate_ladder(&bids, BookSide::Bids)?;
        Self::validate_ladder(&asks, BookSide::Asks)?;
        Ok(Self::with_levels(bids, asks, aggregation, timestamp))
    }

    fn validate_ladder(levels: &[OrderbookLevel], side: BookSide) -> Result<(), DomainError> {
        for level in levels {
            if level.price() <= Amount::ZERO {
                return Err(DomainError::NonPositivePrice {
                    price: level.price(),
                });
            }
            if level.size() < Amount::ZERO {
                return Err(DomainError::NegativeSize { size: level.size() });
            }
        }
        let ordered = levels.windows(2).all(|pair| match side {
            BookSide::Bids => pair[0].price() > pair[1].price(),
            BookSide::Asks => pair[0].price() < pair[1].price(),
        });
        if ordered {
            Ok(())
        } else {
            Err(DomainError::UnsortedLadder { side })
        }
    }

    /// Returns all bid levels (sorted by price descending).
    #[must_use]
    pub fn bids(&self) -> &[OrderbookLevel] {
        &self.bids
    }

    /// Returns all ask levels (sorted by price ascending).
    #[must_use]
    pub fn asks(&self) -> &[OrderbookLevel] {
        &self.asks
    }

    /// Returns the ladder for the given side.
    #[must_use]
    pub fn side(&self, side: BookSide) -> &[OrderbookLevel] {
        match side {
            BookSide::Bids => &self.bids,
            BookSide::Asks => &self.asks,
        }
    }

    /// Returns the best bid (highest buy price).
    #[must_use]
    pub fn best_bid(&self) -> Option<&OrderbookLevel> {
        self.bids.first()
    }

    /// Returns the best ask (lowest sell price).
    #[must_use]
    pub fn best_ask(&self) -> Option<&OrderbookLevel> {
        self.asks.first()
    }

    /// Returns the price aggregation level of the snapshot.
    #[must_use]
    pub const fn aggregation(&self) -> u32 {
        self.aggregation
    }

    /// Returns when the snapshot was taken.
    #[must_use]
    pub const fn timestamp(&self) -> DateTime<Utc> {
        self.timestamp
    }
}
