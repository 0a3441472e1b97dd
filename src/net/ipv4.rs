//! IPv4 address parsing and private/public classification.
//!
//! The std [`Ipv4Addr`](std::net::Ipv4Addr) parser is deliberately not used
//! here: it rejects components with leading zeros, while configuration files
//! in the wild carry values like `"010.1.2.3"` that plainly integer-parse
//! into range. This module accepts exactly what an integer parse of each
//! dotted component accepts, and layers the `0.0.0.0` unset-sentinel policy
//! on top.

use std::fmt;

/// A parsed IPv4 address.
///
/// Parsing never fails with an error value; a candidate string either yields
/// an address or [`None`], and the caller decides what message that deserves.
///
/// # Examples
///
/// ```rust
/// use config_vet::net::Ipv4Address;
///
/// let addr = Ipv4Address::parse("192.168.10.4").unwrap();
/// assert!(addr.is_private());
/// assert!(!addr.is_public());
///
/// assert!(Ipv4Address::parse("172.32.0.0").unwrap().is_public());
/// assert!(Ipv4Address::parse("256.1.1.1").is_none());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Ipv4Address {
    bits: u32,
}

/// A CIDR block: a base address plus prefix length, tested via bitmask
/// equality rather than string prefix matching.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CidrRange {
    base: u32,
    mask: u32,
}

impl CidrRange {
    /// Create a range from dotted-quad base octets and a prefix length.
    pub const fn new(octets: [u8; 4], prefix_len: u32) -> Self {
        let mask = if prefix_len == 0 {
            0
        } else {
            u32::MAX << (32 - prefix_len)
        };
        Self {
            base: u32::from_be_bytes(octets),
            mask,
        }
    }

    /// Whether `address` falls inside this range.
    pub fn contains(&self, address: Ipv4Address) -> bool {
        address.bits & self.mask == self.base & self.mask
    }
}

/// The three private-use ranges of RFC 1918.
const PRIVATE_RANGES: [CidrRange; 3] = [
    CidrRange::new([10, 0, 0, 0], 8),
    CidrRange::new([172, 16, 0, 0], 12),
    CidrRange::new([192, 168, 0, 0], 16),
];

impl Ipv4Address {
    /// The `0.0.0.0` unset sentinel.
    ///
    /// Syntactically a valid address, but treated everywhere in this crate
    /// as "no address was configured".
    pub const UNSET: Ipv4Address = Ipv4Address { bits: 0 };

    /// Parse a dotted-quad candidate string.
    ///
    /// A candidate is accepted only if it contains exactly three `.`
    /// separators and each component parses as an integer in `[0, 255]`.
    /// Anything else, including the empty string, yields [`None`].
    ///
    /// Note that `"0.0.0.0"` *does* parse; use [`is_valid`](Self::is_valid)
    /// or [`is_unset`](Self::is_unset) to apply the sentinel policy.
    pub fn parse(candidate: &str) -> Option<Self> {
        let mut octets = [0u8; 4];
        let mut count = 0;
        for component in candidate.split('.') {
            if count == 4 {
                return None;
            }
            let number: u32 = component.parse().ok()?;
            if number > 255 {
                return None;
            }
            octets[count] = number as u8;
            count += 1;
        }
        if count != 4 {
            return None;
        }
        Some(Self {
            bits: u32::from_be_bytes(octets),
        })
    }

    /// Whether a candidate string is a usable IPv4 address: parseable and
    /// not the `0.0.0.0` sentinel.
    pub fn is_valid(candidate: &str) -> bool {
        match Self::parse(candidate) {
            Some(address) => !address.is_unset(),
            None => false,
        }
    }

    /// Whether this address is the `0.0.0.0` sentinel.
    pub fn is_unset(&self) -> bool {
        *self == Self::UNSET
    }

    /// Whether this address falls in one of the private-use ranges
    /// `10.0.0.0/8`, `172.16.0.0/12`, or `192.168.0.0/16`.
    pub fn is_private(&self) -> bool {
        PRIVATE_RANGES.iter().any(|range| range.contains(*self))
    }

    /// Whether this address is publicly routable: not the unset sentinel and
    /// not in any private-use range.
    pub fn is_public(&self) -> bool {
        !self.is_unset() && !self.is_private()
    }

    /// The four address octets, most significant first.
    pub fn octets(&self) -> [u8; 4] {
        self.bits.to_be_bytes()
    }
}

impl fmt::Display for Ipv4Address {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let [a, b, c, d] = self.octets();
        write!(f, "{}.{}.{}.{}", a, b, c, d)
    }
}
