//! Identity/computation factory.

use rand::{Rng, RngCore};

use crate::fixtures::{Clock, Fixtures};
use crate::types::hash::keccak256;
use crate::types::Computation;

/// 32-byte identifier of a dark pool network
pub type NetworkId = [u8; 32];

impl<R: RngCore, C: Clock> Fixtures<R, C> {
    /// Keccak-256 of a random integer's decimal representation
    pub fn random_32_bytes(&mut self) -> [u8; 32] {
        let value: u64 = self.rng.gen();
        keccak256(&[value.to_string().as_bytes()])
    }

    /// Random network identifier
    pub fn random_network_id(&mut self) -> NetworkId {
        self.random_32_bytes()
    }

    /// Computation over an independent random buy and sell order.
    ///
    /// The two orders are not a valid match.
    pub fn random_computation(&mut self) -> Computation {
        let buy = self.random_buy_order();
        let sell = self.random_sell_order();
        Computation::from_orders(&buy, &sell)
    }
}
