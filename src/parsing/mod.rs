//! Text parsing and validation.
//!
//! - [`address`] - dotted decimal addresses and `a.b.c.d/len` text
//! - [`netmask`] - dotted netmasks and netmask lengths

mod address;
mod netmask;

pub use address::{parse_cidr, parse_dotted_address};
pub use netmask::{
    netmask_length_to_binary, netmask_length_to_decimal, parse_netmask, VALID_MASK_OCTETS,
};
