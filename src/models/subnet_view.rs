//! All derived values of one subnet, kept consistent together.

use super::{BinaryAddress, DecimalAddress, NetmaskLength};
use crate::conversion::{decimal_to_dotted, decimal_to_u32, u32_to_binary, u32_to_decimal};
use crate::error::{SubnetError, SubnetResult};
use crate::parsing::{netmask_length_to_decimal, parse_cidr, parse_dotted_address, parse_netmask};
use crate::processing::{
    broadcast_u32, hi_host_u32, low_host_u32, net_capacity, net_prefix_u32, netmask_length_u32,
};
use serde::de;
use serde::ser::SerializeStruct;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::net::Ipv4Addr;
use std::str::FromStr;

/// Generates the dotted, decimal, binary and [`Ipv4Addr`] accessors of one
/// address role.
macro_rules! address_accessors {
    ($field:ident, $dec:ident, $bin:ident, $addr:ident, $what:literal) => {
        #[doc = concat!("The ", $what, " in dotted decimal text.")]
        pub fn $field(&self) -> String {
            decimal_to_dotted(&self.$dec())
        }

        #[doc = concat!("The ", $what, " as four octets.")]
        pub fn $dec(&self) -> DecimalAddress {
            u32_to_decimal(self.$field)
        }

        #[doc = concat!("The ", $what, " as 32 binary digits.")]
        pub fn $bin(&self) -> BinaryAddress {
            u32_to_binary(self.$field)
        }

        #[doc = concat!("The ", $what, " as an [`Ipv4Addr`].")]
        pub fn $addr(&self) -> Ipv4Addr {
            Ipv4Addr::from(self.$field)
        }
    };
}

/// An IPv4 address with its netmask and everything derived from the pair:
/// network prefix, host range, broadcast address and capacity.
///
/// A view is rebuilt in full on every change. The setters build the new
/// view first and only then replace `self`, so a failed update leaves the
/// previous values in place.
///
/// # Examples
/// ```
/// use subnetting_calcs::SubnetView;
///
/// let view = SubnetView::new("192.168.1.10", "255.255.255.0").unwrap();
/// assert_eq!(view.netprefix(), "192.168.1.0");
/// assert_eq!(view.low_host(), "192.168.1.1");
/// assert_eq!(view.hi_host(), "192.168.1.254");
/// assert_eq!(view.broadcast(), "192.168.1.255");
/// assert_eq!(view.net_capacity(), 254);
/// ```
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub struct SubnetView {
    ip: u32,
    netmask: u32,
    netmask_length: NetmaskLength,
    netprefix: u32,
    low_host: u32,
    hi_host: u32,
    broadcast: u32,
    net_capacity: u32,
}

impl SubnetView {
    /// Build a view from a dotted address and a dotted netmask.
    pub fn new(ip: &str, netmask: &str) -> SubnetResult<SubnetView> {
        let ip = parse_dotted_address(ip)?;
        let netmask = parse_netmask(netmask)?;
        SubnetView::derive(decimal_to_u32(&ip), decimal_to_u32(&netmask))
    }

    /// Build a view from a dotted address and a netmask length (8 to 30).
    pub fn with_netmask_length(ip: &str, netmask_length: u8) -> SubnetResult<SubnetView> {
        let netmask = netmask_length_to_decimal(netmask_length)?;
        let ip = parse_dotted_address(ip)?;
        SubnetView::derive(decimal_to_u32(&ip), decimal_to_u32(&netmask))
    }

    /// Build a view from `"a.b.c.d/len"` text.
    pub fn from_cidr(cidr: &str) -> SubnetResult<SubnetView> {
        let (ip, netmask_length) = parse_cidr(cidr)?;
        SubnetView::derive(decimal_to_u32(&ip), netmask_length.to_mask())
    }

    fn derive(ip: u32, netmask: u32) -> SubnetResult<SubnetView> {
        let netmask_length = NetmaskLength::new(netmask_length_u32(netmask))?;
        let netprefix = net_prefix_u32(ip, netmask);
        let hi_host = hi_host_u32(netprefix, netmask_length);

        let view = SubnetView {
            ip,
            netmask,
            netmask_length,
            netprefix,
            low_host: low_host_u32(netprefix),
            hi_host,
            broadcast: broadcast_u32(hi_host),
            net_capacity: net_capacity(netmask_length),
        };
        log::debug!(
            "derived {view}: prefix={prefix} broadcast={broadcast} hosts={hosts}",
            prefix = view.netprefix(),
            broadcast = view.broadcast(),
            hosts = view.net_capacity
        );
        Ok(view)
    }

    /// Replace the address, keeping the netmask.
    pub fn set_ip(&mut self, ip: &str) -> SubnetResult<()> {
        let ip = parse_dotted_address(ip)?;
        *self = SubnetView::derive(decimal_to_u32(&ip), self.netmask)?;
        Ok(())
    }

    /// Replace the netmask, keeping the address.
    pub fn set_netmask(&mut self, netmask: &str) -> SubnetResult<()> {
        let netmask = parse_netmask(netmask)?;
        *self = SubnetView::derive(self.ip, decimal_to_u32(&netmask))?;
        Ok(())
    }

    /// Replace the netmask by one of the given length, keeping the address.
    pub fn set_netmask_length(&mut self, netmask_length: u8) -> SubnetResult<()> {
        let netmask = NetmaskLength::new(netmask_length)?.to_mask();
        *self = SubnetView::derive(self.ip, netmask)?;
        Ok(())
    }

    address_accessors!(ip, ip_dec, ip_bin, ip_addr, "current address");
    address_accessors!(netmask, netmask_dec, netmask_bin, netmask_addr, "netmask");
    address_accessors!(
        netprefix,
        netprefix_dec,
        netprefix_bin,
        netprefix_addr,
        "network prefix"
    );
    address_accessors!(
        low_host,
        low_host_dec,
        low_host_bin,
        low_host_addr,
        "lowest (first) host address"
    );
    address_accessors!(
        hi_host,
        hi_host_dec,
        hi_host_bin,
        hi_host_addr,
        "highest (last) host address"
    );
    address_accessors!(
        broadcast,
        broadcast_dec,
        broadcast_bin,
        broadcast_addr,
        "broadcast address"
    );

    /// Netmask length, from 8 to 30.
    pub fn netmask_length(&self) -> u8 {
        self.netmask_length.get()
    }

    /// How many hosts can be addressed in the network.
    pub fn net_capacity(&self) -> u32 {
        self.net_capacity
    }

    /// True when `addr` lies between the network prefix and the broadcast
    /// address, both included.
    pub fn contains(&self, addr: Ipv4Addr) -> bool {
        let addr = u32::from(addr);
        self.netprefix <= addr && addr <= self.broadcast
    }
}

impl fmt::Display for SubnetView {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}/{}", self.ip_addr(), self.netmask_length)
    }
}

impl FromStr for SubnetView {
    type Err = SubnetError;

    fn from_str(s: &str) -> SubnetResult<SubnetView> {
        SubnetView::from_cidr(s)
    }
}

impl Serialize for SubnetView {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let mut state = serializer.serialize_struct("SubnetView", 8)?;
        state.serialize_field("ip", &self.ip())?;
        state.serialize_field("netmask", &self.netmask())?;
        state.serialize_field("netmask_length", &self.netmask_length())?;
        state.serialize_field("netprefix", &self.netprefix())?;
        state.serialize_field("low_host", &self.low_host())?;
        state.serialize_field("hi_host", &self.hi_host())?;
        state.serialize_field("broadcast", &self.broadcast())?;
        state.serialize_field("net_capacity", &self.net_capacity)?;
        state.end()
    }
}

/// The two inputs a view is derived from, the rest is recomputed.
#[derive(Deserialize)]
struct SubnetViewInput {
    ip: String,
    netmask: String,
}

impl<'de> Deserialize<'de> for SubnetView {
    fn deserialize<D>(deserializer: D) -> Result<SubnetView, D::Error>
    where
        D: Deserializer<'de>,
    {
        let input = SubnetViewInput::deserialize(deserializer)?;
        SubnetView::new(&input.ip, &input.netmask).map_err(|e| {
            de::Error::custom(format!("invalid subnet {}/{}: {e}", input.ip, input.netmask))
        })
    }
}
