//! Subnet derivations.
//!
//! - [`bits`] - derivations over the canonical `u32` form
//! - [`derive`] - the same derivations over 32 digit binary arrays

mod bits;
mod derive;

pub use bits::{
    broadcast_u32, hi_host_u32, low_host_u32, net_capacity, net_prefix_u32, netmask_length_u32,
};
pub use derive::{broadcast, hi_host, low_host, net_prefix, netmask_length};
