//! Keccak-256 hashing for content-derived identifiers.
//!
//! Every 32-byte identifier produced by this crate (order IDs, computation
//! IDs, random network IDs) goes through [`keccak256`], so two values built
//! from identical content always carry identical IDs.

use sha3::{Digest, Keccak256};

/// Compute the Keccak-256 hash of the concatenation of `parts`.
///
/// Hashing `[a, b]` is identical to hashing `[a ++ b]`.
///
/// # Example
///
/// ```
/// use darkpool_testutils::types::hash::keccak256;
///
/// let joined = keccak256(&[b"buy", b"sell"]);
/// assert_eq!(joined, keccak256(&[b"buysell"]));
/// ```
pub fn keccak256(parts: &[&[u8]]) -> [u8; 32] {
    let mut hasher = Keccak256::new();
    for part in parts {
        hasher.update(part);
    }
    let result = hasher.finalize();

    let mut hash = [0u8; 32];
    hash.copy_from_slice(&result);
    hash
}

/// Format a 32-byte identifier as lowercase hex
pub fn to_hex(id: &[u8; 32]) -> String {
    hex::encode(id)
}
