//! CIDR block value object used by the address-relevance queries.

use std::fmt;
use std::net::IpAddr;
use std::str::FromStr;
use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum CidrError {
    #[error("Invalid IP address in CIDR block: {0}")]
    InvalidAddress(String),

    #[error("Invalid CIDR notation: {0}")]
    InvalidNotation(String),

    #[error("Invalid prefix length: {0} (must be 0-32 for IPv4, 0-128 for IPv6)")]
    InvalidPrefixLength(u8),
}

/// An IPv4 or IPv6 network in `address/prefix` form.
///
/// The stored address is whatever the provider reported; host bits are
/// masked off when testing containment, so `10.1.2.3/16` behaves like
/// `10.1.0.0/16`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct CidrBlock {
    address: IpAddr,
    prefix_length: u8,
}

impl CidrBlock {
    pub fn new(address: IpAddr, prefix_length: u8) -> Result<Self, CidrError> {
        let max_prefix = match address {
            IpAddr::V4(_) => 32,
            IpAddr::V6(_) => 128,
        };
        if prefix_length > max_prefix {
            return Err(CidrError::InvalidPrefixLength(prefix_length));
        }
        Ok(Self {
            address,
            prefix_length,
        })
    }

    pub fn address(&self) -> IpAddr {
        self.address
    }

    pub fn prefix_length(&self) -> u8 {
        self.prefix_length
    }

    /// True iff `ip` is inside this block. Mixed address families never match.
    pub fn contains(&self, ip: IpAddr) -> bool {
        match (self.address, ip) {
            (IpAddr::V4(net), IpAddr::V4(candidate)) => {
                let mask = prefix_mask_u32(self.prefix_length);
                u32::from(net) & mask == u32::from(candidate) & mask
            }
            (IpAddr::V6(net), IpAddr::V6(candidate)) => {
                let mask = prefix_mask_u128(self.prefix_length);
                u128::from(net) & mask == u128::from(candidate) & mask
            }
            _ => false,
        }
    }

    /// Lenient containment over raw inventory text: an unparseable block contains nothing.
    pub fn text_contains(cidr: &str, ip: IpAddr) -> bool {
        cidr.parse::<CidrBlock>()
            .map(|block| block.contains(ip))
            .unwrap_or(false)
    }
}

fn prefix_mask_u32(prefix: u8) -> u32 {
    if prefix == 0 {
        0
    } else {
        u32::MAX << (32 - u32::from(prefix))
    }
}

fn prefix_mask_u128(prefix: u8) -> u128 {
    if prefix == 0 {
        0
    } else {
        u128::MAX << (128 - u32::from(prefix))
    }
}

impl fmt::Display for CidrBlock {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.address, self.prefix_length)
    }
}

impl FromStr for CidrBlock {
    type Err = CidrError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (addr_str, prefix_str) = s
            .trim()
            .split_once('/')
            .ok_or_else(|| CidrError::InvalidNotation(s.to_string()))?;

        let address = IpAddr::from_str(addr_str)
            .map_err(|_| CidrError::InvalidAddress(addr_str.to_string()))?;
        let prefix_length = prefix_str
            .parse::<u8>()
            .map_err(|_| CidrError::InvalidNotation(s.to_string()))?;

        Self::new(address, prefix_length)
    }
}
