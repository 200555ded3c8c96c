//! Computation type: a candidate match between a buy and a sell order.
//!
//! ## SSZ Serialization
//!
//! Computations are serialized using SSZ for deterministic encoding,
//! so they index and store identically on every node.

use ssz_rs::prelude::*;

use crate::types::hash::keccak256;
use crate::types::order::{Order, OrderId};

/// 32-byte computation identifier
pub type ComputationId = [u8; 32];

/// A proposed match between a buy order and a sell order.
///
/// `id` is always `keccak256(buy || sell)`, so computations built from the
/// same pair of order IDs are equal.
///
/// ## Example
///
/// ```
/// use darkpool_testutils::types::Computation;
///
/// let a = Computation::new([1u8; 32], [2u8; 32]);
/// let b = Computation::new([1u8; 32], [2u8; 32]);
/// assert_eq!(a, b);
/// assert_ne!(a.id, Computation::new([2u8; 32], [1u8; 32]).id);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Default, SimpleSerialize)]
pub struct Computation {
    /// Keccak-256 of `buy || sell`
    pub id: ComputationId,

    /// Buy order ID
    pub buy: OrderId,

    /// Sell order ID
    pub sell: OrderId,
}

impl Computation {
    /// Create a computation and derive its ID
    pub fn new(buy: OrderId, sell: OrderId) -> Self {
        Self {
            id: Self::compute_id(&buy, &sell),
            buy,
            sell,
        }
    }

    /// Create a computation from the two orders it pairs
    ///
    /// Parities are not checked; callers pass the buy order first.
    pub fn from_orders(buy: &Order, sell: &Order) -> Self {
        Self::new(buy.id, sell.id)
    }

    /// Hash two order IDs into a computation ID
    pub fn compute_id(buy: &OrderId, sell: &OrderId) -> ComputationId {
        keccak256(&[&buy[..], &sell[..]])
    }
}

// ============================================================================
// Unit Tests
// ============================================================================
