//! Address shapes shared by every conversion and derivation.
//!
//! An IPv4 address travels through this crate in three forms:
//! - [`DecimalAddress`]: four octets, `[192, 168, 1, 10]`
//! - [`BinaryAddress`]: thirty-two binary digits, most significant bit first
//! - dotted text: `"192.168.1.10"`
//!
//! Internally the derived values are kept as `u32`, see [`crate::conversion`]
//! for the bridges between the forms.

/// One byte of an IPv4 address.
pub type Octet = u8;

/// An address as four octets, first octet first.
pub type DecimalAddress = [Octet; 4];

/// An address as 32 binary digits (each 0 or 1), index 0 is the most
/// significant bit of the first octet.
pub type BinaryAddress = [u8; ADDRESS_BITS];

/// Number of binary digits in an octet.
pub const OCTET_BITS: usize = 8;

/// Number of binary digits in an IPv4 address.
pub const ADDRESS_BITS: usize = 32;

/// Number of octets in an IPv4 address.
pub const ADDRESS_OCTETS: usize = 4;
