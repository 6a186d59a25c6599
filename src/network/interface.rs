//! Interface address lookup
//!
//! Maps a network interface name to its first IPv4 address.

use std::net::Ipv4Addr;

use if_addrs::IfAddr;

use crate::error::{Result, SodaError};

/// First IPv4 address assigned to the interface `name`
pub fn interface_ipv4(name: &str) -> Result<Ipv4Addr> {
    let interfaces = if_addrs::get_if_addrs()?;

    let mut found = false;
    for iface in interfaces.iter().filter(|iface| iface.name == name) {
        found = true;
        if let IfAddr::V4(v4) = &iface.addr {
            return Ok(v4.ip);
        }
    }

    let reason = if found {
        "no IPv4 address assigned"
    } else {
        "no such network interface"
    };
    Err(SodaError::Interface {
        name: name.to_string(),
        reason: reason.to_string(),
    })
}
