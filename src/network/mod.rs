//! Network identity and node configuration for simulated clusters.
//!
//! ## Components
//!
//! - [`Address`]: 20-byte node identifier derived from key material
//! - [`MultiAddress`]: `/ip4/<host>/tcp/<port>/republic/<address>` peer locator
//! - [`Keystore`] / [`KeystoreSource`]: key material and how it is generated
//! - [`Config`]: one node's configuration, including bootstrap peers

pub mod address;
pub mod config;
pub mod keystore;

pub use address::{Address, MultiAddress};
pub use config::{Config, EthereumConfig, EthereumNetwork, LogOptions, LogPlugin, NetworkParams};
pub use keystore::{Keystore, KeystoreSource, RandomKeystore};
