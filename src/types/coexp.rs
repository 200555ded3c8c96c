//! Coefficient/exponent fixed-point values.
//!
//! ## Overview
//!
//! Prices and volumes travel through the settlement layer as a pair of
//! unsigned integers `(co, exp)` denoting `co × 10^-exp`. No floating point
//! is involved at any stage.
//!
//! ## Componentwise Ordering
//!
//! [`CoExp::is_within`] compares coefficient and exponent independently.
//! This is the relation fixture generators guarantee between a volume and
//! its minimum volume. It is NOT the same as comparing decoded values:
//! `(1, 0)` is within `(5, 3)` componentwise, but decodes to `1` while the
//! bound decodes to `0.005`. Use [`CoExp::to_decimal`] to observe decoded values.
//!
//! ## Examples
//!
//! ```
//! use darkpool_testutils::types::CoExp;
//! use rust_decimal::Decimal;
//!
//! let price = CoExp::new(1250, 2);
//! assert_eq!(price.to_decimal(), Some(Decimal::new(1250, 2))); // 12.50
//! assert!(CoExp::new(3, 1).is_within(&price));
//! ```

use rust_decimal::Decimal;
use ssz_rs::prelude::*;

/// Largest exponent a [`Decimal`] can carry as its scale.
pub const MAX_DECIMAL_EXP: u64 = 28;

/// A fixed-point number `co × 10^-exp`.
///
/// ## SSZ Layout
///
/// Fixed-size container of two `u64` fields: 16 bytes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, SimpleSerialize)]
pub struct CoExp {
    /// Coefficient
    pub co: u64,

    /// Decimal exponent (negated power of ten)
    pub exp: u64,
}

impl CoExp {
    /// Create a new coefficient/exponent pair
    pub fn new(co: u64, exp: u64) -> Self {
        Self { co, exp }
    }

    /// Decode to a [`Decimal`]
    ///
    /// # Returns
    ///
    /// * `Some(Decimal)` - The value `co × 10^-exp`
    /// * `None` - If `co` exceeds the 96-bit mantissa or `exp` exceeds
    ///   [`MAX_DECIMAL_EXP`]
    pub fn to_decimal(&self) -> Option<Decimal> {
        if self.exp > MAX_DECIMAL_EXP {
            return None;
        }
        Decimal::try_from_i128_with_scale(self.co as i128, self.exp as u32).ok()
    }

    /// Componentwise check: `co <= bound.co` and `exp <= bound.exp`
    pub fn is_within(&self, bound: &CoExp) -> bool {
        self.co <= bound.co && self.exp <= bound.exp
    }

    /// Little-endian encoding, identical to the SSZ container layout
    pub(crate) fn to_le_bytes(self) -> [u8; 16] {
        let mut bytes = [0u8; 16];
        bytes[..8].copy_from_slice(&self.co.to_le_bytes());
        bytes[8..].copy_from_slice(&self.exp.to_le_bytes());
        bytes
    }
}

// ============================================================================
// Unit Tests
// ============================================================================
