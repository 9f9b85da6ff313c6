//! Value types for subnet calculations.
//!
//! - [`DecimalAddress`] and [`BinaryAddress`] - address representations
//! - [`NetmaskLength`] - validated prefix length
//! - [`SubnetView`] - every derived value for one address and netmask

mod address;
mod netmask;
mod subnet_view;

pub use address::{
    BinaryAddress, DecimalAddress, Octet, ADDRESS_BITS, ADDRESS_OCTETS, OCTET_BITS,
};
pub(crate) use netmask::BAD_NETMASK_LENGTH;
pub use netmask::{NetmaskLength, MAX_NETMASK_LENGTH, MIN_NETMASK_LENGTH};
pub use subnet_view::SubnetView;
