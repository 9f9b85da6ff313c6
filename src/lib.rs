//! IPv4 subnet arithmetic.
//!
//! Given an address and a netmask (dotted, or as a prefix length from 8 to
//! 30) this crate derives the network prefix, the first and last usable
//! host, the broadcast address and the host capacity of the subnet.
//!
//! - [`parsing`] - dotted text, netmask and CIDR validation
//! - [`conversion`] - decimal octets, binary digit arrays and dotted text
//! - [`processing`] - prefix, host range, broadcast and capacity
//! - [`models`] - value types and the [`SubnetView`] snapshot
//!
//! ```
//! use subnetting_calcs::SubnetView;
//!
//! let mut view = SubnetView::with_netmask_length("10.1.2.3", 20).unwrap();
//! assert_eq!(view.netmask(), "255.255.240.0");
//! assert_eq!(view.broadcast(), "10.1.15.255");
//!
//! view.set_netmask("255.255.255.0").unwrap();
//! assert_eq!(view.net_capacity(), 254);
//! ```

pub mod conversion;
pub mod error;
pub mod models;
pub mod parsing;
pub mod processing;

pub use error::{SubnetError, SubnetResult};
pub use models::{BinaryAddress, DecimalAddress, NetmaskLength, SubnetView};
