//! Conversions between the address representations.
//!
//! - [`binary`] - octets and addresses to and from binary digit arrays
//! - [`dotted`] - decimal octets to dotted text
//!
//! The `u32` bridges are the canonical form used by the derivations.

mod binary;
mod dotted;

pub use binary::{
    binary_to_address, binary_to_decimal, binary_to_octet, binary_to_u32, decimal_to_binary,
    decimal_to_u32, octet_to_binary, u32_to_binary, u32_to_decimal,
};
pub use dotted::decimal_to_dotted;
