//! Fixed-point arithmetic shared by the simulators.
//!
//! - [`scale`] - raw integer / decimal conversion and directional rounding
//! - [`fee`] - fee arithmetic in three directions

pub mod fee;
pub mod scale;

pub use fee::{value_after_fee, value_before_fee, value_with_fee};
pub use scale::{amount_to_raw, raw_to_amount, round_down, round_up, PrecisionError, MAX_SCALE};
