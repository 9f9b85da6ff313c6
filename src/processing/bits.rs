//! Subnet derivations on `u32` addresses.

use crate::models::NetmaskLength;

/// Count of leading one bits in a mask.
pub fn netmask_length_u32(mask: u32) -> u8 {
    mask.leading_ones() as u8
}

/// Network prefix, the address with its host bits cleared.
pub fn net_prefix_u32(addr: u32, mask: u32) -> u32 {
    addr & mask
}

/// First usable host: the prefix with the last bit set.
pub fn low_host_u32(prefix: u32) -> u32 {
    prefix | 1
}

/// Last usable host: every host bit set except the last one.
pub fn hi_host_u32(prefix: u32, len: NetmaskLength) -> u32 {
    (prefix | !len.to_mask()) & !1
}

/// Broadcast address: the highest host with the last bit set.
pub fn broadcast_u32(hi_host: u32) -> u32 {
    hi_host | 1
}

/// Number of usable hosts, network and broadcast addresses excluded.
///
/// # Examples
/// ```
/// use subnetting_calcs::{processing::net_capacity, NetmaskLength};
/// assert_eq!(net_capacity(NetmaskLength::new(24).unwrap()), 254);
/// assert_eq!(net_capacity(NetmaskLength::new(8).unwrap()), 16_777_214);
/// ```
pub fn net_capacity(len: NetmaskLength) -> u32 {
    (1u32 << len.host_bits()) - 2
}
