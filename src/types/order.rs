//! Order types for dark pool settlement fixtures.
//!
//! ## SSZ Serialization
//!
//! `Order` derives `SimpleSerialize` from ssz_rs for deterministic encoding.
//! Per the SSZ spec (ethereum.org):
//! - Basic types (u8, u64): Direct little-endian encoding
//! - Fixed-size composites: Concatenated little-endian fields
//!
//! ## Content-Derived Identity
//!
//! An order's `id` is the Keccak-256 hash of every other field in SSZ
//! layout. [`Order::new`] computes it; two orders with identical content
//! always share an ID.

use rand::Rng;
use ssz_rs::prelude::*;

use crate::types::hash::keccak256;
use crate::types::CoExp;

/// 32-byte content-derived order identifier
pub type OrderId = [u8; 32];

// ============================================================================
// OrderType enum
// ============================================================================

/// Order type enumeration
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum OrderType {
    /// Executes at the midpoint of the best bid and ask
    Midpoint,
    /// Executes at the specified price or better
    #[default]
    Limit,
    /// Midpoint, fill-or-kill
    MidpointFok,
    /// Limit, fill-or-kill
    LimitFok,
}

impl OrderType {
    /// Convert to u8 for serialization
    pub fn to_u8(self) -> u8 {
        match self {
            OrderType::Midpoint => 0,
            OrderType::Limit => 1,
            OrderType::MidpointFok => 2,
            OrderType::LimitFok => 3,
        }
    }

    /// Convert from u8 for deserialization
    pub fn from_u8(value: u8) -> Option<Self> {
        match value {
            0 => Some(OrderType::Midpoint),
            1 => Some(OrderType::Limit),
            2 => Some(OrderType::MidpointFok),
            3 => Some(OrderType::LimitFok),
            _ => None,
        }
    }
}

// ============================================================================
// Parity enum
// ============================================================================

/// Order parity: Buy or Sell
///
/// Represented as u8 for SSZ compatibility:
/// - Buy = 0
/// - Sell = 1
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Parity {
    /// Buy order (bid)
    #[default]
    Buy,
    /// Sell order (ask)
    Sell,
}

impl Parity {
    /// Convert to u8 for serialization
    pub fn to_u8(self) -> u8 {
        match self {
            Parity::Buy => 0,
            Parity::Sell => 1,
        }
    }

    /// Convert from u8 for deserialization
    pub fn from_u8(value: u8) -> Option<Self> {
        match value {
            0 => Some(Parity::Buy),
            1 => Some(Parity::Sell),
            _ => None,
        }
    }

    /// Returns the opposite parity
    pub fn opposite(self) -> Self {
        match self {
            Parity::Buy => Parity::Sell,
            Parity::Sell => Parity::Buy,
        }
    }
}

// ============================================================================
// Settlement enum
// ============================================================================

/// Settlement scheme that finalizes a matched trade
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Settlement {
    /// Reference on-chain settlement
    #[default]
    RenEx,
    /// Cross-chain atomic swap settlement
    RenExAtomic,
}

impl Settlement {
    /// Convert to u8 for serialization
    pub fn to_u8(self) -> u8 {
        match self {
            Settlement::RenEx => 1,
            Settlement::RenExAtomic => 2,
        }
    }

    /// Convert from u8 for deserialization
    pub fn from_u8(value: u8) -> Option<Self> {
        match value {
            1 => Some(Settlement::RenEx),
            2 => Some(Settlement::RenExAtomic),
            _ => None,
        }
    }
}

// ============================================================================
// Token / Tokens
// ============================================================================

/// A single tradeable token
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Token {
    Btc,
    Eth,
    Dgx,
    Ren,
}

impl Token {
    /// Numeric token code. Lower codes have settlement priority.
    pub fn code(self) -> u32 {
        match self {
            Token::Btc => 0,
            Token::Eth => 1,
            Token::Dgx => 0x100,
            Token::Ren => 0x10000,
        }
    }

    pub fn from_code(code: u32) -> Option<Self> {
        match code {
            0 => Some(Token::Btc),
            1 => Some(Token::Eth),
            0x100 => Some(Token::Dgx),
            0x10000 => Some(Token::Ren),
            _ => None,
        }
    }
}

/// A trading pair, ordered (priority token, non-priority token).
///
/// Encoded as `(priority << 32) | non_priority`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Tokens {
    #[default]
    BtcEth,
    EthDgx,
    EthRen,
    DgxRen,
}

impl Tokens {
    /// Every trading pair fixtures draw from
    pub const ALL: [Tokens; 4] = [Tokens::BtcEth, Tokens::EthDgx, Tokens::EthRen, Tokens::DgxRen];

    /// Draw a trading pair uniformly from [`Tokens::ALL`]
    pub fn random<R: Rng>(rng: &mut R) -> Self {
        Self::ALL[rng.gen_range(0..Self::ALL.len())]
    }

    /// The pair's two tokens as (priority, non-priority)
    pub fn pair(self) -> (Token, Token) {
        match self {
            Tokens::BtcEth => (Token::Btc, Token::Eth),
            Tokens::EthDgx => (Token::Eth, Token::Dgx),
            Tokens::EthRen => (Token::Eth, Token::Ren),
            Tokens::DgxRen => (Token::Dgx, Token::Ren),
        }
    }

    pub fn priority_token(self) -> Token {
        self.pair().0
    }

    pub fn non_priority_token(self) -> Token {
        self.pair().1
    }

    /// Convert to u64 for serialization
    pub fn code(self) -> u64 {
        let (priority, non_priority) = self.pair();
        ((priority.code() as u64) << 32) | non_priority.code() as u64
    }

    /// Convert from u64 for deserialization
    pub fn from_code(code: u64) -> Option<Self> {
        Self::ALL.into_iter().find(|tokens| tokens.code() == code)
    }
}

// ============================================================================
// Order struct
// ============================================================================

/// A trade intent submitted to the dark pool.
///
/// ## SSZ Layout
///
/// Fixed-size container, 107 bytes:
/// id (32) + order_type_raw (1) + parity_raw (1) + settlement_raw (1) +
/// expiry (8) + tokens_raw (8) + price (16) + volume (16) +
/// minimum_volume (16) + nonce (8).
///
/// ## Example
///
/// ```
/// use darkpool_testutils::types::{CoExp, Order, OrderType, Parity, Settlement, Tokens};
///
/// let order = Order::new(
///     OrderType::Limit,
///     Parity::Buy,
///     Settlement::RenEx,
///     1_703_577_600,          // expiry (unix seconds)
///     Tokens::EthRen,
///     CoExp::new(1250, 2),    // price
///     CoExp::new(500, 1),     // volume
///     CoExp::new(100, 1),     // minimum volume
///     42,                     // nonce
/// );
/// assert_eq!(order.id, order.compute_id());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Default, SimpleSerialize)]
pub struct Order {
    /// Keccak-256 of all remaining fields
    pub id: OrderId,

    /// Order type as u8
    pub order_type_raw: u8,

    /// Parity as u8 (0=Buy, 1=Sell)
    pub parity_raw: u8,

    /// Settlement scheme as u8
    pub settlement_raw: u8,

    /// Unix timestamp in seconds after which the order is void
    pub expiry: u64,

    /// Trading pair code
    pub tokens_raw: u64,

    pub price: CoExp,

    pub volume: CoExp,

    /// Smallest acceptable fill
    pub minimum_volume: CoExp,

    pub nonce: u64,
}

impl Order {
    /// Create a new order and derive its ID from the content
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        order_type: OrderType,
        parity: Parity,
        settlement: Settlement,
        expiry: u64,
        tokens: Tokens,
        price: CoExp,
        volume: CoExp,
        minimum_volume: CoExp,
        nonce: u64,
    ) -> Self {
        let mut order = Self {
            id: [0u8; 32],
            order_type_raw: order_type.to_u8(),
            parity_raw: parity.to_u8(),
            settlement_raw: settlement.to_u8(),
            expiry,
            tokens_raw: tokens.code(),
            price,
            volume,
            minimum_volume,
            nonce,
        };
        order.id = order.compute_id();
        order
    }

    /// Hash the order content (every field except `id`)
    pub fn compute_id(&self) -> OrderId {
        keccak256(&[self.content_bytes().as_slice()])
    }

    /// SSZ layout of every field except `id`
    pub fn content_bytes(&self) -> Vec<u8> {
        let mut bytes = Vec::with_capacity(75);
        bytes.push(self.order_type_raw);
        bytes.push(self.parity_raw);
        bytes.push(self.settlement_raw);
        bytes.extend_from_slice(&self.expiry.to_le_bytes());
        bytes.extend_from_slice(&self.tokens_raw.to_le_bytes());
        bytes.extend_from_slice(&self.price.to_le_bytes());
        bytes.extend_from_slice(&self.volume.to_le_bytes());
        bytes.extend_from_slice(&self.minimum_volume.to_le_bytes());
        bytes.extend_from_slice(&self.nonce.to_le_bytes());
        bytes
    }

    /// Serialize the whole order, ID included
    pub fn to_ssz_bytes(&self) -> Result<Vec<u8>, SerializeError> {
        ssz_rs::serialize(self)
    }

    /// Get the order type
    pub fn order_type(&self) -> OrderType {
        OrderType::from_u8(self.order_type_raw).unwrap_or_default()
    }

    /// Get the order parity
    pub fn parity(&self) -> Parity {
        Parity::from_u8(self.parity_raw).unwrap_or_default()
    }

    /// Get the settlement scheme
    pub fn settlement(&self) -> Settlement {
        Settlement::from_u8(self.settlement_raw).unwrap_or_default()
    }

    /// Get the trading pair
    pub fn tokens(&self) -> Tokens {
        Tokens::from_code(self.tokens_raw).unwrap_or_default()
    }
}

// ============================================================================
// Unit Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_order(nonce: u64) -> Order {
        Order::new(
            OrderType::Limit,
            Parity::Buy,
            Settlement::RenEx,
            1_703_577_600,
            Tokens::EthRen,
            CoExp::new(1250, 2),
            CoExp::new(500, 1),
            CoExp::new(100, 1),
            nonce,
        )
    }

    #[test]
    fn test_parity_conversion() {
        assert_eq!(Parity::Buy.to_u8(), 0);
        assert_eq!(Parity::Sell.to_u8(), 1);
        assert_eq!(Parity::from_u8(0), Some(Parity::Buy));
        assert_eq!(Parity::from_u8(1), Some(Parity::Sell));
        assert_eq!(Parity::from_u8(2), None);
        assert_eq!(Parity::Buy.opposite(), Parity::Sell);
        assert_eq!(Parity::Sell.opposite(), Parity::Buy);
    }

    #[test]
    fn test_enum_codes_roundtrip() {
        for t in [OrderType::Midpoint, OrderType::Limit, OrderType::MidpointFok, OrderType::LimitFok] {
            assert_eq!(OrderType::from_u8(t.to_u8()), Some(t));
        }
        for s in [Settlement::RenEx, Settlement::RenExAtomic] {
            assert_eq!(Settlement::from_u8(s.to_u8()), Some(s));
        }
        assert_eq!(Settlement::from_u8(0), None);
        for tokens in Tokens::ALL {
            assert_eq!(Tokens::from_code(tokens.code()), Some(tokens));
        }
    }

    #[test]
    fn test_tokens_encoding() {
        assert_eq!(Tokens::BtcEth.code(), 1);
        assert_eq!(Tokens::EthDgx.code(), (1 << 32) | 0x100);
        assert_eq!(Tokens::DgxRen.code(), (0x100 << 32) | 0x10000);
        assert_eq!(Tokens::EthRen.priority_token(), Token::Eth);
        assert_eq!(Tokens::EthRen.non_priority_token(), Token::Ren);
        assert_eq!(Token::from_code(Token::Dgx.code()), Some(Token::Dgx));
        assert_eq!(Tokens::from_code(2), None);
    }

    #[test]
    fn test_tokens_random_covers_catalog() {
        use rand::SeedableRng;
        use rand_chacha::ChaCha8Rng;

        let mut rng = ChaCha8Rng::seed_from_u64(7);
        let mut seen = std::collections::HashSet::new();
        for _ in 0..200 {
            seen.insert(Tokens::random(&mut rng));
        }
        assert_eq!(seen.len(), Tokens::ALL.len());
    }

    #[test]
    fn test_order_new() {
        let order = sample_order(42);

        assert_eq!(order.order_type(), OrderType::Limit);
        assert_eq!(order.parity(), Parity::Buy);
        assert_eq!(order.settlement(), Settlement::RenEx);
        assert_eq!(order.tokens(), Tokens::EthRen);
        assert_eq!(order.expiry, 1_703_577_600);
        assert_eq!(order.price, CoExp::new(1250, 2));
        assert_eq!(order.nonce, 42);
        assert_ne!(order.id, [0u8; 32]);
        assert_eq!(order.id, order.compute_id());
    }

    #[test]
    fn test_order_id_is_content_derived() {
        assert_eq!(sample_order(1).id, sample_order(1).id);
        assert_ne!(sample_order(1).id, sample_order(2).id);
    }

    #[test]
    fn test_order_ssz_layout() {
        let order = sample_order(42);
        let bytes = order.to_ssz_bytes().expect("Failed to serialize");

        assert_eq!(bytes.len(), 107, "Order should serialize to 107 bytes");
        assert_eq!(&bytes[..32], &order.id[..]);
        assert_eq!(&bytes[32..], &order.content_bytes()[..]);
    }

    #[test]
    fn test_order_ssz_roundtrip() {
        let order = sample_order(42);
        let serialized = ssz_rs::serialize(&order).expect("Failed to serialize");
        let deserialized: Order = ssz_rs::deserialize(&serialized).expect("Failed to deserialize");

        assert_eq!(order, deserialized);
        assert_eq!(deserialized.id, deserialized.compute_id());
    }
}
