//! Key material for simulated nodes.
//!
//! Real key generation and signing live elsewhere. Fixtures only need key
//! material that yields a stable, unique [`Address`], so a keystore here is a
//! 32-byte secret and its address is the last 20 bytes of the secret's
//! Keccak-256 hash.

use rand::RngCore;

use crate::error::KeystoreError;
use crate::network::Address;
use crate::types::hash::keccak256;

/// Opaque key material handle
#[derive(Clone, PartialEq, Eq)]
pub struct Keystore {
    secret: [u8; 32],
}

impl Keystore {
    pub fn from_secret(secret: [u8; 32]) -> Self {
        Self { secret }
    }

    /// Address derived from the key material
    pub fn address(&self) -> Address {
        let hash = keccak256(&[&self.secret[..]]);
        let mut bytes = [0u8; 20];
        bytes.copy_from_slice(&hash[12..]);
        Address(bytes)
    }
}

// Keep the secret out of logs and panic messages
impl std::fmt::Debug for Keystore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Keystore").field("address", &self.address()).finish_non_exhaustive()
    }
}

/// Capability that generates fresh key material
pub trait KeystoreSource {
    fn new_keystore(&mut self, rng: &mut dyn RngCore) -> Result<Keystore, KeystoreError>;
}

/// Default source: draws the secret from the caller's random source
#[derive(Debug, Clone, Copy, Default)]
pub struct RandomKeystore;

impl KeystoreSource for RandomKeystore {
    fn new_keystore(&mut self, rng: &mut dyn RngCore) -> Result<Keystore, KeystoreError> {
        let mut secret = [0u8; 32];
        rng.try_fill_bytes(&mut secret)?;
        Ok(Keystore::from_secret(secret))
    }
}

impl<F> KeystoreSource for F
where
    F: FnMut(&mut dyn RngCore) -> Result<Keystore, KeystoreError>,
{
    fn new_keystore(&mut self, rng: &mut dyn RngCore) -> Result<Keystore, KeystoreError> {
        self(rng)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    #[test]
    fn test_address_is_deterministic() {
        let keystore = Keystore::from_secret([7u8; 32]);
        assert_eq!(keystore.address(), keystore.address());
        assert_ne!(keystore.address(), Keystore::from_secret([8u8; 32]).address());
    }

    #[test]
    fn test_random_keystore_uses_rng() {
        let mut a = ChaCha8Rng::seed_from_u64(1);
        let mut b = ChaCha8Rng::seed_from_u64(1);

        let first = RandomKeystore.new_keystore(&mut a).unwrap();
        let second = RandomKeystore.new_keystore(&mut b).unwrap();
        assert_eq!(first, second);

        let third = RandomKeystore.new_keystore(&mut a).unwrap();
        assert_ne!(first.address(), third.address());
    }

    #[test]
    fn test_closure_source() {
        let mut calls = 0;
        let mut source = |_: &mut dyn RngCore| -> Result<Keystore, KeystoreError> {
            calls += 1;
            Err(KeystoreError::Generation { message: "hsm offline".to_string() })
        };
        let mut rng = ChaCha8Rng::seed_from_u64(1);
        assert!(source.new_keystore(&mut rng).is_err());
        assert_eq!(calls, 1);
    }

    #[test]
    fn test_debug_hides_secret() {
        let text = format!("{:?}", Keystore::from_secret([0xCD; 32]));
        assert!(text.contains("address"));
        assert!(!text.contains("secret"));
    }
}
