//! Binary digit array conversions.

use crate::error::{SubnetError, SubnetResult};
use crate::models::{BinaryAddress, DecimalAddress, ADDRESS_BITS, ADDRESS_OCTETS, OCTET_BITS};

fn octet_bits(octet: u8) -> [u8; OCTET_BITS] {
    let mut bits = [0u8; OCTET_BITS];
    for (i, bit) in bits.iter_mut().enumerate() {
        *bit = (octet >> (OCTET_BITS - 1 - i)) & 1;
    }
    bits
}

/// Convert a decimal value to its 8 binary digits, most significant first.
///
/// Fails with a range error when `value` does not fit an octet.
///
/// # Examples
/// ```
/// use subnetting_calcs::conversion::octet_to_binary;
/// assert_eq!(octet_to_binary(192).unwrap(), [1, 1, 0, 0, 0, 0, 0, 0]);
/// assert!(octet_to_binary(256).is_err());
/// ```
pub fn octet_to_binary(value: u32) -> SubnetResult<[u8; OCTET_BITS]> {
    let octet = u8::try_from(value)
        .map_err(|_| SubnetError::range("an octet decimal value should be from 0 to 255"))?;
    Ok(octet_bits(octet))
}

/// Convert 8 binary digits back to an octet.
pub fn binary_to_octet(bits: &[u8]) -> SubnetResult<u8> {
    if bits.len() != OCTET_BITS || bits.iter().any(|bit| *bit > 1) {
        return Err(SubnetError::format("bad octet array format"));
    }
    Ok(bits.iter().fold(0u8, |acc, bit| (acc << 1) | bit))
}

/// Concatenate the binary digits of the four octets.
pub fn decimal_to_binary(dec: &DecimalAddress) -> BinaryAddress {
    let mut bin = [0u8; ADDRESS_BITS];
    for (chunk, octet) in bin.chunks_exact_mut(OCTET_BITS).zip(dec) {
        chunk.copy_from_slice(&octet_bits(*octet));
    }
    bin
}

/// Convert any whole number of octets from binary digits to decimal.
pub fn binary_to_decimal(bits: &[u8]) -> SubnetResult<Vec<u8>> {
    if bits.len() % OCTET_BITS != 0 {
        return Err(SubnetError::format("not found octets in binary array"));
    }
    bits.chunks_exact(OCTET_BITS).map(binary_to_octet).collect()
}

/// Convert a 32 digit address to its four octets.
pub fn binary_to_address(bin: &BinaryAddress) -> SubnetResult<DecimalAddress> {
    let octets = binary_to_decimal(bin)?;
    let mut dec = [0u8; ADDRESS_OCTETS];
    dec.copy_from_slice(&octets);
    Ok(dec)
}

/// Pack a 32 digit address into a `u32`.
pub fn binary_to_u32(bin: &BinaryAddress) -> SubnetResult<u32> {
    if bin.iter().any(|bit| *bit > 1) {
        return Err(SubnetError::format("bad binary address format"));
    }
    Ok(bin.iter().fold(0u32, |acc, bit| (acc << 1) | u32::from(*bit)))
}

pub fn u32_to_binary(value: u32) -> BinaryAddress {
    let mut bin = [0u8; ADDRESS_BITS];
    for (i, bit) in bin.iter_mut().enumerate() {
        *bit = ((value >> (ADDRESS_BITS - 1 - i)) & 1) as u8;
    }
    bin
}

pub fn decimal_to_u32(dec: &DecimalAddress) -> u32 {
    u32::from_be_bytes(*dec)
}

pub fn u32_to_decimal(value: u32) -> DecimalAddress {
    value.to_be_bytes()
}
