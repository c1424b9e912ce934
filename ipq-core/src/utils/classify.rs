//! IP address classification
//!
//! Pure functions from address text to [`IpCategory`] and address family.

use std::net::{IpAddr, Ipv4Addr, Ipv6Addr};

use crate::types::{Family, IpCategory, NOT_APPLICABLE, NOT_DETECTED};

/// Parse address text, accepting an IPv6 zone suffix (`fe80::1%eth0`).
fn parse_addr(text: &str) -> Option<IpAddr> {
    let text = text.trim();
    if let Ok(addr) = text.parse::<IpAddr>() {
        return Some(addr);
    }
    let (addr, zone) = text.split_once('%')?;
    if zone.is_empty() {
        return None;
    }
    addr.parse::<Ipv6Addr>().ok().map(IpAddr::V6)
}

/// Category of an address.
///
/// Placeholders and unparsable text are [`IpCategory::Invalid`]. An
/// IPv4-mapped IPv6 address is classified as the embedded IPv4 address.
#[must_use]
pub fn classify(text: &str) -> IpCategory {
    let text = text.trim();
    if text.is_empty() || text == NOT_DETECTED || text == NOT_APPLICABLE {
        return IpCategory::Invalid;
    }
    match parse_addr(text) {
        Some(IpAddr::V4(v4)) => classify_v4(v4),
        Some(IpAddr::V6(v6)) => match v6.to_ipv4_mapped() {
            Some(v4) => classify_v4(v4),
            None => classify_v6(v6),
        },
        None => IpCategory::Invalid,
    }
}

fn classify_v4(ip: Ipv4Addr) -> IpCategory {
    let [a, b, c, _] = ip.octets();

    if ip.is_unspecified() {
        IpCategory::Unspecified
    } else if ip.is_loopback() {
        IpCategory::Loopback
    } else if ip.is_link_local() {
        IpCategory::LinkLocal
    } else if ip.is_multicast() {
        IpCategory::Multicast
    } else if ip.is_private() {
        IpCategory::Private
    } else if is_reserved_v4(a, b, c) || ip.is_broadcast() {
        // Shared, documentation, benchmarking and class E space.
        IpCategory::Private
    } else {
        IpCategory::Public
    }
}

fn is_reserved_v4(a: u8, b: u8, c: u8) -> bool {
    matches!(
        (a, b, c),
        (100, 64..=127, _)
            | (192, 0, 2)
            | (198, 18..=19, _)
            | (198, 51, 100)
            | (203, 0, 113)
            | (240..=255, _, _)
    )
}

fn classify_v6(ip: Ipv6Addr) -> IpCategory {
    let first = ip.segments()[0];

    if ip.is_unspecified() {
        IpCategory::Unspecified
    } else if ip.is_loopback() {
        IpCategory::Loopback
    } else if first & 0xffc0 == 0xfe80 || first == 0xff02 {
        IpCategory::LinkLocal
    } else if ip.is_multicast() {
        IpCategory::Multicast
    } else if first & 0xfe00 == 0xfc00 {
        IpCategory::Private
    } else {
        IpCategory::Public
    }
}

/// Whether `text` is an IPv4 or IPv6 address.
#[must_use]
pub fn is_valid_ip(text: &str) -> bool {
    parse_addr(text).is_some()
}

/// Textual family of an address; `None` for anything that is not an IP.
#[must_use]
pub fn family_of(text: &str) -> Option<Family> {
    match parse_addr(text)? {
        IpAddr::V4(_) => Some(Family::V4),
        IpAddr::V6(_) => Some(Family::V6),
    }
}
