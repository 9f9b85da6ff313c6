//! Subnet derivations on 32 digit binary arrays.
//!
//! These follow the binary digit layout directly. Inputs that reach here
//! are expected to hold only 0 and 1, [`net_prefix`] checks it.

use crate::conversion::binary_to_u32;
use crate::error::{SubnetError, SubnetResult};
use crate::models::{BinaryAddress, NetmaskLength, ADDRESS_BITS};

const LAST_BIT: usize = ADDRESS_BITS - 1;

/// Length of the leading run of ones.
///
/// Contiguity is not checked again here, digits after the first zero are
/// ignored.
pub fn netmask_length(mask: &BinaryAddress) -> u8 {
    mask.iter().take_while(|bit| **bit == 1).count() as u8
}

/// Digit-wise AND of address and mask.
pub fn net_prefix(addr: &BinaryAddress, mask: &BinaryAddress) -> SubnetResult<BinaryAddress> {
    binary_to_u32(addr).map_err(|_| SubnetError::format("bad binary ip format"))?;
    binary_to_u32(mask).map_err(|_| SubnetError::format("bad binary netmask format"))?;

    let mut prefix = [0u8; ADDRESS_BITS];
    for ((bit, a), m) in prefix.iter_mut().zip(addr).zip(mask) {
        *bit = a & m;
    }
    Ok(prefix)
}

pub fn low_host(prefix: &BinaryAddress) -> BinaryAddress {
    let mut low = *prefix;
    low[LAST_BIT] = 1;
    low
}

pub fn hi_host(prefix: &BinaryAddress, len: NetmaskLength) -> BinaryAddress {
    let mut hi = *prefix;
    for bit in &mut hi[usize::from(len.get())..LAST_BIT] {
        *bit = 1;
    }
    hi[LAST_BIT] = 0;
    hi
}

pub fn broadcast(hi_host: &BinaryAddress) -> BinaryAddress {
    let mut broadcast = *hi_host;
    broadcast[LAST_BIT] = 1;
    broadcast
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::conversion::{binary_to_address, decimal_to_binary, u32_to_binary};
    use crate::processing::bits::{broadcast_u32, hi_host_u32, low_host_u32, net_prefix_u32};

    fn len(len: u8) -> NetmaskLength {
        NetmaskLength::new(len).unwrap()
    }

    #[test]
    fn test_netmask_length() {
        assert_eq!(netmask_length(&decimal_to_binary(&[255, 255, 255, 0])), 24);
        assert_eq!(netmask_length(&decimal_to_binary(&[255, 0, 0, 0])), 8);
        assert_eq!(netmask_length(&decimal_to_binary(&[255, 255, 255, 252])), 30);
        assert_eq!(netmask_length(&decimal_to_binary(&[255, 0, 255, 0])), 8);
    }

    #[test]
    fn test_derive_example() {
        let ip = decimal_to_binary(&[192, 168, 1, 10]);
        let mask = decimal_to_binary(&[255, 255, 255, 0]);

        let prefix = net_prefix(&ip, &mask).unwrap();
        assert_eq!(binary_to_address(&prefix).unwrap(), [192, 168, 1, 0]);
        assert_eq!(binary_to_address(&low_host(&prefix)).unwrap(), [192, 168, 1, 1]);
        let hi = hi_host(&prefix, len(24));
        assert_eq!(binary_to_address(&hi).unwrap(), [192, 168, 1, 254]);
        assert_eq!(binary_to_address(&broadcast(&hi)).unwrap(), [192, 168, 1, 255]);
    }

    #[test]
    fn test_net_prefix_idempotent() {
        let ip = decimal_to_binary(&[172, 16, 77, 201]);
        let mask = decimal_to_binary(&[255, 255, 240, 0]);
        let prefix = net_prefix(&ip, &mask).unwrap();
        assert_eq!(net_prefix(&prefix, &mask).unwrap(), prefix);
        assert_eq!(binary_to_address(&prefix).unwrap(), [172, 16, 64, 0]);
    }

    #[test]
    fn test_net_prefix_rejects_non_binary() {
        let mut ip = decimal_to_binary(&[10, 0, 0, 1]);
        let mut mask = decimal_to_binary(&[255, 0, 0, 0]);
        ip[3] = 2;
        assert_eq!(
            net_prefix(&ip, &mask).unwrap_err(),
            SubnetError::Format("bad binary ip format".to_string())
        );
        ip[3] = 0;
        mask[0] = 9;
        assert_eq!(
            net_prefix(&ip, &mask).unwrap_err(),
            SubnetError::Format("bad binary netmask format".to_string())
        );
    }

    #[test]
    fn test_binary_matches_u32() {
        let addr = 0x8D_5A_C3_17u32;
        for l in 8..=30u8 {
            let mask = len(l).to_mask();
            let prefix = net_prefix_u32(addr, mask);
            let prefix_bin = net_prefix(&u32_to_binary(addr), &u32_to_binary(mask)).unwrap();
            assert_eq!(prefix_bin, u32_to_binary(prefix), "/{l}");
            assert_eq!(low_host(&prefix_bin), u32_to_binary(low_host_u32(prefix)));
            let hi = hi_host_u32(prefix, len(l));
            assert_eq!(hi_host(&prefix_bin, len(l)), u32_to_binary(hi), "/{l}");
            assert_eq!(
                broadcast(&hi_host(&prefix_bin, len(l))),
                u32_to_binary(broadcast_u32(hi))
            );
        }
    }
}
