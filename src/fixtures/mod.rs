//! Randomized fixture generators.
//!
//! ## Design
//!
//! Every generator is a method on [`Fixtures`], which owns the random source
//! and the clock. Nothing is process-global:
//!
//! - A seeded [`Fixtures`] with a [`FixedClock`] yields bit-identical
//!   fixtures on every run.
//! - Parallel tests each own a [`Fixtures`], so no locking is involved.
//!
//! ## Generator Families
//!
//! | Family | Methods |
//! |--------|---------|
//! | Fixed-point sampler | `random_co_exp`, `less_random_co_exp` |
//! | Order factory | `random_order`, `random_buy_order`, `random_sell_order`, `random_order_match` |
//! | Network/config factory | `random_configs`, `random_configs_with` |
//! | Identity/computation factory | `random_32_bytes`, `random_network_id`, `random_computation` |
//!
//! ## Example
//!
//! ```
//! use darkpool_testutils::fixtures::{FixedClock, Fixtures};
//!
//! let mut a = Fixtures::seeded(42).with_clock(FixedClock(1_700_000_000));
//! let mut b = Fixtures::seeded(42).with_clock(FixedClock(1_700_000_000));
//!
//! assert_eq!(a.random_order(), b.random_order());
//! ```

mod configs;
mod identity;
mod orders;
mod sampler;

pub use identity::NetworkId;
pub use orders::{MATCH_EXPIRY_SECS, ORDER_EXPIRY_SECS};
pub use sampler::{MAX_RANDOM_CO, MAX_RANDOM_EXP};

use std::time::{SystemTime, UNIX_EPOCH};

use rand::{Rng, RngCore, SeedableRng};
use rand_chacha::ChaCha8Rng;

// ============================================================================
// Clock
// ============================================================================

/// Source of "now" for order expiries
pub trait Clock {
    /// Current unix time in seconds
    fn now_unix_secs(&self) -> u64;
}

/// Wall-clock time
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now_unix_secs(&self) -> u64 {
        SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map(|elapsed| elapsed.as_secs())
            .unwrap_or(0)
    }
}

/// A clock frozen at a unix timestamp (seconds)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FixedClock(pub u64);

impl Clock for FixedClock {
    fn now_unix_secs(&self) -> u64 {
        self.0
    }
}

// ============================================================================
// Fixtures
// ============================================================================

/// Generator handle owning a random source and a clock
#[derive(Debug, Clone)]
pub struct Fixtures<R = ChaCha8Rng, C = SystemClock> {
    rng: R,
    clock: C,
}

impl Fixtures<ChaCha8Rng, SystemClock> {
    /// Reproducible generator: same seed, same draws
    pub fn seeded(seed: u64) -> Self {
        Self::new(ChaCha8Rng::seed_from_u64(seed))
    }

    /// Generator with a fresh seed.
    ///
    /// The seed is logged at INFO so a failing run can be replayed with
    /// [`Fixtures::seeded`].
    pub fn from_entropy() -> Self {
        let seed: u64 = rand::thread_rng().gen();
        tracing::info!(seed, "Fixture generator seeded from entropy");
        Self::seeded(seed)
    }
}

impl<R: RngCore> Fixtures<R, SystemClock> {
    /// Wrap an existing random source, using the wall clock
    pub fn new(rng: R) -> Self {
        Self { rng, clock: SystemClock }
    }
}

impl<R: RngCore, C: Clock> Fixtures<R, C> {
    /// Replace the clock
    pub fn with_clock<C2: Clock>(self, clock: C2) -> Fixtures<R, C2> {
        Fixtures { rng: self.rng, clock }
    }

    /// The underlying random source, for extra draws in a test
    pub fn rng_mut(&mut self) -> &mut R {
        &mut self.rng
    }

    pub fn clock(&self) -> &C {
        &self.clock
    }

    /// Release the random source
    pub fn into_rng(self) -> R {
        self.rng
    }
}
