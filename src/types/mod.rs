//! Core fixture data types
//!
//! All types implement SSZ serialization for deterministic encoding.
//! Prices and volumes use coefficient/exponent fixed-point values.
//!
//! ## Types
//!
//! - [`CoExp`]: Fixed-point `co × 10^-exp`
//! - [`Order`]: A trade intent with a content-derived ID
//! - [`Parity`]: Buy or Sell
//! - [`OrderType`], [`Settlement`], [`Tokens`]: Order classification
//! - [`Computation`]: A candidate buy/sell match

mod coexp;
mod computation;
pub mod hash;
mod order;

// Re-export all types at module level
pub use coexp::{CoExp, MAX_DECIMAL_EXP};
pub use computation::{Computation, ComputationId};
pub use order::{Order, OrderId, OrderType, Parity, Settlement, Token, Tokens};
