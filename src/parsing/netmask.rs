//! Netmask parsing and validation.

use super::address::parse_dotted_address;
use crate::conversion::{binary_to_address, u32_to_binary};
use crate::error::{SubnetError, SubnetResult};
use crate::models::{BinaryAddress, DecimalAddress, NetmaskLength};

/// Octet values that can appear in a contiguous netmask.
pub const VALID_MASK_OCTETS: [u8; 9] = [255, 254, 252, 248, 240, 224, 192, 128, 0];

/// Highest last octet allowed, it keeps at least two host bits.
const MAX_LAST_OCTET: u8 = 252;

fn bad_netmask() -> SubnetError {
    SubnetError::format("bad netmask format")
}

/// Parse and validate a dotted netmask such as `"255.255.255.0"`.
///
/// The first octet must be 255 and the last at most 252, every octet must be
/// a valid mask octet, and an octet following one that is not 255 must be 0.
///
/// # Examples
/// ```
/// use subnetting_calcs::parsing::parse_netmask;
/// assert_eq!(parse_netmask("255.255.240.0").unwrap(), [255, 255, 240, 0]);
/// assert!(parse_netmask("255.255.0.255").is_err());
/// ```
pub fn parse_netmask(text: &str) -> SubnetResult<DecimalAddress> {
    log::trace!("parse_netmask({text})");
    let mask = parse_dotted_address(text).map_err(|_| bad_netmask())?;

    if mask[0] != 255 || mask[3] > MAX_LAST_OCTET {
        return Err(bad_netmask());
    }
    for pair in mask.windows(2) {
        let (prev, octet) = (pair[0], pair[1]);
        if !VALID_MASK_OCTETS.contains(&octet) {
            return Err(bad_netmask());
        }
        if prev != 255 && octet != 0 {
            return Err(bad_netmask());
        }
    }
    Ok(mask)
}

/// Netmask with the leading `len` binary digits set.
pub fn netmask_length_to_binary(len: u8) -> SubnetResult<BinaryAddress> {
    let len = NetmaskLength::new(len)?;
    Ok(u32_to_binary(len.to_mask()))
}

/// Netmask octets for a prefix length, e.g. 20 gives `[255, 255, 240, 0]`.
pub fn netmask_length_to_decimal(len: u8) -> SubnetResult<DecimalAddress> {
    binary_to_address(&netmask_length_to_binary(len)?)
}
