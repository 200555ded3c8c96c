//! # Dark Pool Test Utilities
//!
//! Randomized, reproducible test fixtures for dark pool order matching and
//! settlement.
//!
//! ## Architecture
//!
//! - **Types**: Fixture data structures (CoExp, Order, Computation)
//! - **Network**: Node identity and cluster configuration (Address, MultiAddress, Config)
//! - **Fixtures**: Generators that assemble internally consistent values
//!
//! ## Design Principles
//!
//! 1. **Determinism**: A seeded generator with a fixed clock repeats itself exactly
//! 2. **No Floating Point**: Prices and volumes are coefficient/exponent pairs
//! 3. **Content-Derived Identity**: Order and computation IDs are Keccak-256 of their content
//! 4. **No Globals**: Randomness and time are owned by the generator handle
//!
//! ## Example
//!
//! ```
//! use darkpool_testutils::Fixtures;
//!
//! let mut fixtures = Fixtures::seeded(7);
//! let (buy, sell) = fixtures.random_order_match();
//! assert_eq!(buy.price, sell.price);
//!
//! let configs = fixtures.random_configs(3, 2).unwrap();
//! assert_eq!(configs[2].bootstrap_multi_addresses.len(), 2);
//! ```

// ============================================================================
// Module declarations
// ============================================================================

/// Fixture data types: CoExp, Order, Computation
pub mod types;

/// Node identity and configuration
pub mod network;

/// Fixture generators
pub mod fixtures;

/// Error taxonomy
pub mod error;

// ============================================================================
// Re-exports for convenience
// ============================================================================

pub use error::{ConfigError, FixtureError, KeystoreError, MultiAddressError, PartialConfigs};
pub use fixtures::{Clock, FixedClock, Fixtures, NetworkId, SystemClock};
pub use network::{Address, Config, Keystore, KeystoreSource, MultiAddress, NetworkParams};
pub use types::{CoExp, Computation, Order, OrderType, Parity, Settlement, Tokens};
