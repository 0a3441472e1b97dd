//! Network address parsing and classification.

mod ipv4;

pub use ipv4::{CidrRange, Ipv4Address};
