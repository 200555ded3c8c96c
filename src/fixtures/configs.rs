//! Network/config factory.
//!
//! ## Construction
//!
//! Two passes over the node indices:
//!
//! 1. Build `n` configs, each with fresh key material and port
//!    `base_port + i`, and no bootstrap peers.
//! 2. Wire node `i` to every node `j < b` with `j != i`.
//!
//! Any failure aborts the batch; the configs built so far are returned
//! inside [`PartialConfigs`].

use rand::RngCore;
use tracing::{debug, warn};

use crate::error::{ConfigError, PartialConfigs};
use crate::fixtures::{Clock, Fixtures};
use crate::network::{Config, KeystoreSource, MultiAddress, NetworkParams, RandomKeystore};

impl<R: RngCore, C: Clock> Fixtures<R, C> {
    /// `n` node configs bootstrapped to the first `b` nodes, using
    /// [`NetworkParams::default`] and [`RandomKeystore`]
    pub fn random_configs(&mut self, n: usize, b: usize) -> Result<Vec<Config>, PartialConfigs> {
        self.random_configs_with(n, b, &NetworkParams::default(), &mut RandomKeystore)
    }

    /// `n` node configs bootstrapped to the first `b` nodes.
    ///
    /// `b >= n` wires every node to every other node.
    pub fn random_configs_with<K: KeystoreSource>(
        &mut self,
        n: usize,
        b: usize,
        params: &NetworkParams,
        keystores: &mut K,
    ) -> Result<Vec<Config>, PartialConfigs> {
        let mut configs = Vec::with_capacity(n);

        for i in 0..n {
            match self.build_config(i, params, keystores) {
                Ok(config) => {
                    debug!(index = i, address = %config.address, port = config.port, "Built node config");
                    configs.push(config);
                }
                Err(source) => return Err(abort(configs, source)),
            }
        }

        // Every bootstrap node's locator, formatted once
        let mut bootstrap = Vec::with_capacity(b.min(n));
        for config in configs.iter().take(b) {
            match MultiAddress::from_parts(&config.host, config.port, &config.address) {
                Ok(peer) => bootstrap.push(peer),
                Err(err) => return Err(abort(configs, err.into())),
            }
        }

        for (i, config) in configs.iter_mut().enumerate() {
            for (j, peer) in bootstrap.iter().enumerate() {
                if i == j {
                    continue;
                }
                config.bootstrap_multi_addresses.push(*peer);
            }
            debug!(
                index = i,
                peers = config.bootstrap_multi_addresses.len(),
                "Wired bootstrap peers"
            );
        }

        Ok(configs)
    }

    fn build_config<K: KeystoreSource>(
        &mut self,
        index: usize,
        params: &NetworkParams,
        keystores: &mut K,
    ) -> Result<Config, ConfigError> {
        let port = u16::try_from(index)
            .ok()
            .and_then(|offset| params.base_port.checked_add(offset))
            .ok_or(ConfigError::PortOverflow {
                base: params.base_port,
                index,
            })?;
        let keystore = keystores.new_keystore(&mut self.rng)?;

        Ok(Config::new(
            keystore,
            &params.host,
            port,
            params.logs.clone(),
            params.ethereum.clone(),
        ))
    }
}

fn abort(configs: Vec<Config>, source: ConfigError) -> PartialConfigs {
    warn!(built = configs.len(), error = %source, "Config batch aborted");
    PartialConfigs { configs, source }
}
