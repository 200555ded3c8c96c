//! Order factory.
//!
//! Every order is a limit order settled by [`Settlement::RenEx`], with
//! `minimum_volume` drawn componentwise within `volume`.

use rand::{Rng, RngCore};

use crate::fixtures::{Clock, Fixtures};
use crate::types::{Order, OrderType, Parity, Settlement, Tokens};

/// Lifetime of a single random order
pub const ORDER_EXPIRY_SECS: u64 = 60 * 60;

/// Lifetime of both sides of a random match
pub const MATCH_EXPIRY_SECS: u64 = 24 * 60 * 60;

impl<R: RngCore, C: Clock> Fixtures<R, C> {
    /// Random order with random parity, expiring in one hour
    pub fn random_order(&mut self) -> Order {
        let parity = if self.rng.gen_bool(0.5) { Parity::Buy } else { Parity::Sell };
        self.order_with_parity(parity)
    }

    /// Random buy order, expiring in one hour
    pub fn random_buy_order(&mut self) -> Order {
        self.order_with_parity(Parity::Buy)
    }

    /// Random sell order, expiring in one hour
    pub fn random_sell_order(&mut self) -> Order {
        self.order_with_parity(Parity::Sell)
    }

    /// A buy order and a sell order that agree on everything but parity.
    ///
    /// Both expire in 24 hours and share tokens, price, volume, minimum
    /// volume and nonce, so match acceptance can be exercised without a
    /// real matcher.
    pub fn random_order_match(&mut self) -> (Order, Order) {
        let expiry = self.expiry_in(MATCH_EXPIRY_SECS);
        let buy = self.draw_order(Parity::Buy, expiry);

        let sell = Order::new(
            buy.order_type(),
            Parity::Sell,
            buy.settlement(),
            buy.expiry,
            buy.tokens(),
            buy.price,
            buy.volume,
            buy.minimum_volume,
            buy.nonce,
        );

        (buy, sell)
    }

    fn order_with_parity(&mut self, parity: Parity) -> Order {
        let expiry = self.expiry_in(ORDER_EXPIRY_SECS);
        self.draw_order(parity, expiry)
    }

    fn expiry_in(&self, secs: u64) -> u64 {
        self.clock.now_unix_secs().saturating_add(secs)
    }

    fn draw_order(&mut self, parity: Parity, expiry: u64) -> Order {
        let tokens = Tokens::random(&mut self.rng);
        let price = self.random_co_exp();
        let volume = self.random_co_exp();
        let minimum_volume = self.draw_within(volume);
        let nonce: u64 = self.rng.gen();

        Order::new(
            OrderType::Limit,
            parity,
            Settlement::RenEx,
            expiry,
            tokens,
            price,
            volume,
            minimum_volume,
            nonce,
        )
    }
}
