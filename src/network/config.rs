//! Node configuration for simulated test clusters.
//!
//! ## Defaults
//!
//! | Setting | Default |
//! |---------|---------|
//! | Listen host | `0.0.0.0` |
//! | First listen port | `18514` |
//! | Settlement chain | local Ganache at `http://localhost:8545` |

use crate::network::{Address, Keystore, MultiAddress};

/// Listen host for every simulated node
pub const DEFAULT_HOST: &str = "0.0.0.0";

/// Port of node 0; node `i` listens on `DEFAULT_BASE_PORT + i`
pub const DEFAULT_BASE_PORT: u16 = 18514;

/// RPC endpoint of the local settlement chain
pub const DEFAULT_ETHEREUM_URI: &str = "http://localhost:8545";

/// Settlement chain a node connects to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum EthereumNetwork {
    /// Local development chain
    #[default]
    Ganache,
    Ropsten,
    Kovan,
    Mainnet,
}

/// Settlement chain connection settings
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EthereumConfig {
    pub network: EthereumNetwork,
    pub uri: String,
}

impl Default for EthereumConfig {
    fn default() -> Self {
        Self {
            network: EthereumNetwork::Ganache,
            uri: DEFAULT_ETHEREUM_URI.to_string(),
        }
    }
}

/// A log sink, passed through to the node untouched
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LogPlugin {
    File { path: String },
    WebSocket { host: String, port: u16 },
}

/// Logging options, passed through to the node untouched
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct LogOptions {
    pub plugins: Vec<LogPlugin>,
}

/// One simulated node's local configuration
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub keystore: Keystore,
    pub host: String,
    pub port: u16,

    /// Derived from `keystore`
    pub address: Address,

    /// Peers contacted for initial discovery. Never contains `address`.
    pub bootstrap_multi_addresses: Vec<MultiAddress>,

    pub logs: LogOptions,
    pub ethereum: EthereumConfig,
}

impl Config {
    /// Create a config with no bootstrap peers
    pub fn new(keystore: Keystore, host: &str, port: u16, logs: LogOptions, ethereum: EthereumConfig) -> Self {
        Self {
            address: keystore.address(),
            keystore,
            host: host.to_string(),
            port,
            bootstrap_multi_addresses: Vec::new(),
            logs,
            ethereum,
        }
    }

    /// This node's own multi-address
    pub fn multi_address(&self) -> Result<MultiAddress, crate::error::MultiAddressError> {
        MultiAddress::from_parts(&self.host, self.port, &self.address)
    }

    /// Whether any bootstrap entry points at `address`
    pub fn bootstraps_to(&self, address: &Address) -> bool {
        self.bootstrap_multi_addresses
            .iter()
            .any(|peer| &peer.address == address)
    }
}

/// Parameters shared by every node in a generated cluster
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NetworkParams {
    pub host: String,
    pub base_port: u16,
    pub logs: LogOptions,
    pub ethereum: EthereumConfig,
}

impl Default for NetworkParams {
    fn default() -> Self {
        Self {
            host: DEFAULT_HOST.to_string(),
            base_port: DEFAULT_BASE_PORT,
            logs: LogOptions::default(),
            ethereum: EthereumConfig::default(),
        }
    }
}
