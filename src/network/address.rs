//! Node addresses and peer multi-addresses.
//!
//! ## Multi-Address Format
//!
//! Peers are advertised as
//!
//! ```text
//! /ip4/<host>/tcp/<port>/republic/<address>
//! ```
//!
//! where `<address>` is the node's 0x-prefixed hex [`Address`].

use std::fmt;
use std::net::Ipv4Addr;
use std::str::FromStr;

use crate::error::MultiAddressError;

/// 20-byte node identifier derived from key material
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, PartialOrd, Ord)]
pub struct Address(pub [u8; 20]);

impl Address {
    pub fn as_bytes(&self) -> &[u8; 20] {
        &self.0
    }
}

impl fmt::Display for Address {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "0x{}", hex::encode(self.0))
    }
}

impl FromStr for Address {
    type Err = MultiAddressError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let digits = s.strip_prefix("0x").unwrap_or(s);
        let mut bytes = [0u8; 20];
        hex::decode_to_slice(digits, &mut bytes)
            .map_err(|_| MultiAddressError::InvalidAddress(s.to_string()))?;
        Ok(Self(bytes))
    }
}

/// A peer's network location plus its node address.
///
/// ## Example
///
/// ```
/// use darkpool_testutils::network::MultiAddress;
///
/// let text = "/ip4/0.0.0.0/tcp/18514/republic/0x0000000000000000000000000000000000000001";
/// let multi: MultiAddress = text.parse().unwrap();
/// assert_eq!(multi.port, 18514);
/// assert_eq!(multi.to_string(), text);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct MultiAddress {
    pub host: Ipv4Addr,
    pub port: u16,
    pub address: Address,
}

impl MultiAddress {
    pub fn new(host: Ipv4Addr, port: u16, address: Address) -> Self {
        Self { host, port, address }
    }

    /// Format a host/port/address triple and parse it back.
    ///
    /// This is how peer entries are produced from config fields, so a
    /// malformed host surfaces as an error instead of a bad entry.
    pub fn from_parts(host: &str, port: u16, address: &Address) -> Result<Self, MultiAddressError> {
        format!("/ip4/{}/tcp/{}/republic/{}", host, port, address).parse()
    }
}

impl fmt::Display for MultiAddress {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "/ip4/{}/tcp/{}/republic/{}", self.host, self.port, self.address)
    }
}

/// Take the next `/<protocol>/<value>` pair, checking the protocol name
fn expect_component<'a, I>(
    parts: &mut I,
    protocol: &'static str,
    value_name: &'static str,
) -> Result<&'a str, MultiAddressError>
where
    I: Iterator<Item = &'a str>,
{
    let found = parts
        .next()
        .ok_or(MultiAddressError::MissingComponent { component: protocol })?;
    if found != protocol {
        return Err(MultiAddressError::UnexpectedProtocol {
            expected: protocol,
            found: found.to_string(),
        });
    }
    parts
        .next()
        .filter(|value| !value.is_empty())
        .ok_or(MultiAddressError::MissingComponent { component: value_name })
}

impl FromStr for MultiAddress {
    type Err = MultiAddressError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let rest = s
            .strip_prefix('/')
            .ok_or_else(|| MultiAddressError::MissingLeadingSlash(s.to_string()))?;
        let mut parts = rest.split('/');

        let host = expect_component(&mut parts, "ip4", "host")?;
        let host = host
            .parse::<Ipv4Addr>()
            .map_err(|_| MultiAddressError::InvalidHost(host.to_string()))?;

        let port = expect_component(&mut parts, "tcp", "port")?;
        let port = port
            .parse::<u16>()
            .map_err(|_| MultiAddressError::InvalidPort(port.to_string()))?;

        let address = expect_component(&mut parts, "republic", "address")?.parse::<Address>()?;

        let trailing: Vec<&str> = parts.collect();
        if !trailing.is_empty() {
            return Err(MultiAddressError::TrailingComponents(trailing.join("/")));
        }

        Ok(Self { host, port, address })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn address(last: u8) -> Address {
        let mut bytes = [0u8; 20];
        bytes[19] = last;
        Address(bytes)
    }

    #[test]
    fn test_address_display_and_parse() {
        let addr = address(0xAB);
        let text = addr.to_string();
        assert_eq!(text, "0x00000000000000000000000000000000000000ab");
        assert_eq!(text.parse::<Address>(), Ok(addr));
        assert_eq!(text.trim_start_matches("0x").parse::<Address>(), Ok(addr));
    }

    #[test]
    fn test_address_parse_rejects_bad_hex() {
        assert!(matches!("0x1234".parse::<Address>(), Err(MultiAddressError::InvalidAddress(_))));
        assert!(matches!("zz".repeat(20).parse::<Address>(), Err(MultiAddressError::InvalidAddress(_))));
    }

    #[test]
    fn test_multi_address_from_parts() {
        let multi = MultiAddress::from_parts("0.0.0.0", 18514, &address(1)).unwrap();
        assert_eq!(multi.host, Ipv4Addr::UNSPECIFIED);
        assert_eq!(multi.port, 18514);
        assert_eq!(multi.address, address(1));
        assert_eq!(
            multi.to_string(),
            "/ip4/0.0.0.0/tcp/18514/republic/0x0000000000000000000000000000000000000001"
        );
    }

    #[test]
    fn test_multi_address_invalid_host() {
        assert_eq!(
            MultiAddress::from_parts("localhost", 18514, &address(1)),
            Err(MultiAddressError::InvalidHost("localhost".to_string()))
        );
    }

    #[test]
    fn test_multi_address_parse_errors() {
        let addr = address(1).to_string();

        assert!(matches!(
            format!("ip4/0.0.0.0/tcp/1/republic/{}", addr).parse::<MultiAddress>(),
            Err(MultiAddressError::MissingLeadingSlash(_))
        ));
        assert_eq!(
            format!("/ip6/::1/tcp/1/republic/{}", addr).parse::<MultiAddress>(),
            Err(MultiAddressError::UnexpectedProtocol { expected: "ip4", found: "ip6".to_string() })
        );
        assert_eq!(
            "/ip4/0.0.0.0/tcp/99999/republic/0x00".parse::<MultiAddress>(),
            Err(MultiAddressError::InvalidPort("99999".to_string()))
        );
        assert_eq!(
            "/ip4/0.0.0.0/tcp/1".parse::<MultiAddress>(),
            Err(MultiAddressError::MissingComponent { component: "republic" })
        );
        assert_eq!(
            "/ip4/0.0.0.0/tcp/".parse::<MultiAddress>(),
            Err(MultiAddressError::MissingComponent { component: "port" })
        );
        assert_eq!(
            format!("/ip4/0.0.0.0/tcp/1/republic/{}/extra", addr).parse::<MultiAddress>(),
            Err(MultiAddressError::TrailingComponents("extra".to_string()))
        );
    }
}
