//! Integration tests for subnetting-calcs
//!
//! These tests go through the public API only: parse, derive, mutate and
//! serialize a subnet view.

use std::net::Ipv4Addr;
use subnetting_calcs::conversion::{binary_to_decimal, decimal_to_binary, decimal_to_dotted};
use subnetting_calcs::parsing::{parse_dotted_address, parse_netmask};
use subnetting_calcs::processing::{net_prefix, netmask_length};
use subnetting_calcs::{SubnetError, SubnetView};

fn init_logging() {
    // Already initialised by another test is fine.
    let _ = log4rs::init_file("log4rs.yml", Default::default());
}

#[test]
fn test_full_derivation_workflow() {
    init_logging();

    let view = SubnetView::new("192.168.1.10", "255.255.255.0").expect("Failed to build view");
    assert_eq!(view.netmask_length(), 24);
    assert_eq!(view.netprefix(), "192.168.1.0");
    assert_eq!(view.low_host(), "192.168.1.1");
    assert_eq!(view.hi_host(), "192.168.1.254");
    assert_eq!(view.broadcast(), "192.168.1.255");
    assert_eq!(view.net_capacity(), 254);

    // Every dotted output is the rendering of its decimal and binary forms
    let prefix_dec = binary_to_decimal(&view.netprefix_bin()).unwrap();
    assert_eq!(prefix_dec, view.netprefix_dec().to_vec());
    assert_eq!(decimal_to_dotted(&prefix_dec), view.netprefix());
}

#[test]
fn test_netmask_rules() {
    init_logging();

    let mask = parse_netmask("255.255.255.0").unwrap();
    assert_eq!(netmask_length(&decimal_to_binary(&mask)), 24);

    for bad in ["255.255.0.255", "254.0.0.0", "255.255.255.253"] {
        assert_eq!(
            parse_netmask(bad).unwrap_err(),
            SubnetError::Format("bad netmask format".to_string()),
            "{bad}"
        );
    }
}

#[test]
fn test_capacity_boundaries() {
    init_logging();

    let widest = SubnetView::with_netmask_length("10.0.0.1", 8).unwrap();
    assert_eq!(widest.net_capacity(), 16_777_214);
    let narrowest = SubnetView::with_netmask_length("10.0.0.1", 30).unwrap();
    assert_eq!(narrowest.net_capacity(), 2);

    for len in 8..=30u8 {
        let view = SubnetView::with_netmask_length("203.0.113.77", len).unwrap();
        assert_eq!(view.netmask_length(), len);
        assert_eq!(view.net_capacity(), (1u32 << (32 - len)) - 2, "/{len}");
        let hosts = u32::from(view.hi_host_addr()) - u32::from(view.low_host_addr()) + 1;
        assert_eq!(hosts, view.net_capacity(), "/{len}");
    }
}

#[test]
fn test_round_trips() {
    for text in ["0.0.0.0", "10.0.0.1", "172.16.254.3", "255.255.255.255"] {
        let dec = parse_dotted_address(text).unwrap();
        assert_eq!(decimal_to_dotted(&dec), text);
        assert_eq!(binary_to_decimal(&decimal_to_binary(&dec)).unwrap(), dec.to_vec());
    }
}

#[test]
fn test_prefix_idempotent() {
    let view = SubnetView::new("100.64.33.9", "255.255.224.0").unwrap();
    let again = net_prefix(&view.netprefix_bin(), &view.netmask_bin()).unwrap();
    assert_eq!(again, view.netprefix_bin());

    let rebuilt = SubnetView::new(&view.netprefix(), &view.netmask()).unwrap();
    assert_eq!(rebuilt.netprefix(), view.netprefix());
    assert_eq!(rebuilt.broadcast(), view.broadcast());
}

#[test]
fn test_invalid_ip_keeps_view() {
    init_logging();

    let mut view = SubnetView::from_cidr("192.168.1.10/24").unwrap();
    let before = view;
    for bad in ["1.2.3", "1.2.3.256", "a.b.c.d"] {
        assert!(SubnetView::new(bad, "255.255.255.0").is_err());
        assert!(matches!(view.set_ip(bad), Err(SubnetError::Format(_))));
        assert_eq!(view, before);
    }
    assert!(view.contains(Ipv4Addr::new(192, 168, 1, 200)));
}

#[test]
fn test_serde_json() {
    let view = SubnetView::new("192.168.1.10", "255.255.255.0").unwrap();
    let json = serde_json::to_value(view).unwrap();
    assert_eq!(
        json,
        serde_json::json!({
            "ip": "192.168.1.10",
            "netmask": "255.255.255.0",
            "netmask_length": 24,
            "netprefix": "192.168.1.0",
            "low_host": "192.168.1.1",
            "hi_host": "192.168.1.254",
            "broadcast": "192.168.1.255",
            "net_capacity": 254
        })
    );

    let parsed: SubnetView = serde_json::from_value(json).unwrap();
    assert_eq!(parsed, view);

    let input = r#"{ "ip": "10.9.8.7", "netmask": "255.255.252.0" }"#;
    let parsed: SubnetView = serde_json::from_str(input).unwrap();
    assert_eq!(parsed.netprefix(), "10.9.8.0");
    assert_eq!(parsed.broadcast(), "10.9.11.255");

    let bad = r#"{ "ip": "10.9.8.7", "netmask": "255.0.255.0" }"#;
    let err = serde_json::from_str::<SubnetView>(bad).unwrap_err();
    assert!(err.to_string().contains("bad netmask format"), "{err}");
}
