//! Netmask length (prefix length) restricted to the supported range.

use super::ADDRESS_BITS;
use crate::error::{SubnetError, SubnetResult};
use std::fmt;

/// Shortest supported netmask (leaves 24 host bits).
pub const MIN_NETMASK_LENGTH: u8 = 8;

/// Longest supported netmask (leaves 2 host bits).
pub const MAX_NETMASK_LENGTH: u8 = 30;

pub(crate) const BAD_NETMASK_LENGTH: &str = "bad netmask length";

/// A prefix length between [`MIN_NETMASK_LENGTH`] and [`MAX_NETMASK_LENGTH`].
///
/// /31 and /32 are rejected because they leave no room for a network and a
/// broadcast address besides the hosts.
#[derive(Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct NetmaskLength(u8);

impl NetmaskLength {
    /// Validate `len` and wrap it.
    ///
    /// # Examples
    /// ```
    /// use subnetting_calcs::NetmaskLength;
    /// assert_eq!(NetmaskLength::new(24).unwrap().get(), 24);
    /// assert!(NetmaskLength::new(31).is_err());
    /// ```
    pub fn new(len: u8) -> SubnetResult<NetmaskLength> {
        if !(MIN_NETMASK_LENGTH..=MAX_NETMASK_LENGTH).contains(&len) {
            return Err(SubnetError::range(BAD_NETMASK_LENGTH));
        }
        Ok(NetmaskLength(len))
    }

    pub fn get(self) -> u8 {
        self.0
    }

    /// Number of host bits left by this mask.
    pub fn host_bits(self) -> u8 {
        ADDRESS_BITS as u8 - self.0
    }

    /// The netmask as a `u32`, leading `len` bits set.
    pub fn to_mask(self) -> u32 {
        // host_bits is at most 24 so the shift never overflows
        u32::MAX << self.host_bits()
    }
}

impl TryFrom<u8> for NetmaskLength {
    type Error = SubnetError;

    fn try_from(len: u8) -> SubnetResult<NetmaskLength> {
        NetmaskLength::new(len)
    }
}

impl From<NetmaskLength> for u8 {
    fn from(len: NetmaskLength) -> u8 {
        len.0
    }
}

impl fmt::Display for NetmaskLength {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
