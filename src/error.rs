//! Error types for fixture generation
//!
//! Only bounded sampling and network config assembly can fail; every other
//! generator is total.

use thiserror::Error;

use crate::network::Config;

/// Sampling errors
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum FixtureError {
    #[error("Invalid bound: coefficient must be at least 1, got {co}")]
    InvalidBound { co: u64 },
}

/// Key material generation failure
#[derive(Error, Debug)]
pub enum KeystoreError {
    #[error("Entropy source failed: {0}")]
    Entropy(#[from] rand::Error),

    #[error("Keystore generation failed: {message}")]
    Generation { message: String },
}

/// Multi-address parse failures
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum MultiAddressError {
    #[error("Multi-address must start with '/': {0}")]
    MissingLeadingSlash(String),

    #[error("Missing multi-address component: {component}")]
    MissingComponent { component: &'static str },

    #[error("Unexpected protocol: expected {expected}, found {found}")]
    UnexpectedProtocol { expected: &'static str, found: String },

    #[error("Invalid IPv4 host: {0}")]
    InvalidHost(String),

    #[error("Invalid TCP port: {0}")]
    InvalidPort(String),

    #[error("Invalid address: {0}")]
    InvalidAddress(String),

    #[error("Unexpected trailing components: {0}")]
    TrailingComponents(String),
}

/// Reasons a node config batch aborts
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Keystore error: {0}")]
    Keystore(#[from] KeystoreError),

    #[error("Multi-address error: {0}")]
    MultiAddress(#[from] MultiAddressError),

    #[error("Port overflow: base port {base} + node index {index} exceeds 65535")]
    PortOverflow { base: u16, index: usize },
}

/// A failed config batch, carrying every config built before the failure.
#[derive(Error, Debug)]
#[error("Config batch aborted after {} configs: {source}", .configs.len())]
pub struct PartialConfigs {
    /// Configs built so far
    pub configs: Vec<Config>,

    #[source]
    pub source: ConfigError,
}

impl PartialConfigs {
    /// Discard the partial batch, keeping only the cause
    pub fn into_source(self) -> ConfigError {
        self.source
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages() {
        assert_eq!(
            FixtureError::InvalidBound { co: 0 }.to_string(),
            "Invalid bound: coefficient must be at least 1, got 0"
        );

        let err = ConfigError::from(MultiAddressError::InvalidPort("abc".to_string()));
        assert_eq!(err.to_string(), "Multi-address error: Invalid TCP port: abc");

        let partial = PartialConfigs {
            configs: Vec::new(),
            source: ConfigError::PortOverflow { base: 65535, index: 1 },
        };
        assert!(partial.to_string().starts_with("Config batch aborted after 0 configs"));
        assert!(matches!(partial.into_source(), ConfigError::PortOverflow { .. }));
    }
}
