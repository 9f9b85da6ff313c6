//! Dotted decimal address parsing.

use crate::error::{SubnetError, SubnetResult};
use crate::models::{DecimalAddress, NetmaskLength, ADDRESS_OCTETS, BAD_NETMASK_LENGTH};
use regex::Regex;
use std::sync::OnceLock;

/// A dotted segment is one to three plain digits, no sign and no spaces.
static SEGMENT_REGEX: OnceLock<Regex> = OnceLock::new();

/// `address/length`, the length being one to three digits.
static CIDR_REGEX: OnceLock<Regex> = OnceLock::new();

fn get_segment_regex() -> &'static Regex {
    SEGMENT_REGEX.get_or_init(|| Regex::new(r"^[0-9]{1,3}$").expect("Invalid Regex"))
}

fn get_cidr_regex() -> &'static Regex {
    CIDR_REGEX.get_or_init(|| Regex::new(r"^([^/]+)/([0-9]{1,3})$").expect("Invalid Regex"))
}

fn bad_ip() -> SubnetError {
    SubnetError::format("bad dotted decimal IP format")
}

/// Parse `"a.b.c.d"` into four octets.
///
/// Surrounding whitespace is ignored. Exactly four segments are required and
/// each must be a number from 0 to 255.
///
/// # Examples
/// ```
/// use subnetting_calcs::parsing::parse_dotted_address;
/// assert_eq!(parse_dotted_address("192.168.1.10").unwrap(), [192, 168, 1, 10]);
/// assert!(parse_dotted_address("1.2.3").is_err());
/// ```
pub fn parse_dotted_address(text: &str) -> SubnetResult<DecimalAddress> {
    let text = text.trim();
    log::trace!("parse_dotted_address({text})");

    let segments: Vec<&str> = text.split('.').collect();
    if segments.len() != ADDRESS_OCTETS {
        return Err(bad_ip());
    }

    let mut octets = [0u8; ADDRESS_OCTETS];
    for (octet, segment) in octets.iter_mut().zip(&segments) {
        if !get_segment_regex().is_match(segment) {
            return Err(bad_ip());
        }
        *octet = segment.parse().map_err(|_| bad_ip())?;
    }
    Ok(octets)
}

/// Parse `"a.b.c.d/len"` into an address and a netmask length.
///
/// The address part follows [`parse_dotted_address`]. A length that is a
/// number but outside the supported range is a range error.
pub fn parse_cidr(text: &str) -> SubnetResult<(DecimalAddress, NetmaskLength)> {
    let text = text.trim();
    log::trace!("parse_cidr({text})");

    let caps = get_cidr_regex()
        .captures(text)
        .ok_or_else(|| SubnetError::format("bad CIDR format"))?;
    let addr = parse_dotted_address(&caps[1])?;
    let len: u16 = caps[2]
        .parse()
        .map_err(|_| SubnetError::format("bad CIDR format"))?;
    let len = u8::try_from(len).map_err(|_| SubnetError::range(BAD_NETMASK_LENGTH))?;

    Ok((addr, NetmaskLength::new(len)?))
}
