//! Exchange-agnostic domain types consumed by the simulation core.

mod book;
mod error;
mod market;
mod money;
mod token;

// Core domain types
pub use book::{BookSide, Orderbook, OrderbookLevel};
pub use error::DomainError;
pub use market::Market;
pub use money::{Amount, Price};
pub use token::Token;
