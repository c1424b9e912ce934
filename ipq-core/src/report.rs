//! Non-interactive query report
//!
//! One-shot counterpart of the interactive session, used by the text, JSON,
//! YAML and quiet outputs and by batch mode.

use serde::Serialize;

use crate::traits::LookupGateway;
use crate::types::{
    AddressSlot, Family, GeoDetail, IpCategory, Target, TargetKind, Unavailable, NOT_APPLICABLE,
    NOT_DETECTED,
};

const NOT_DETECTED_ERROR: &str = "Could not detect IP address";

/// Result of querying one target.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct QueryReport {
    pub target: String,
    pub ipv4: String,
    pub ipv6: String,
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub category: Option<IpCategory>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cname: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub detail: Option<GeoDetail>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub detail_error: Option<String>,
    pub success: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl QueryReport {
    /// Resolved addresses, IPv4 first.
    pub fn usable_addresses(&self) -> impl Iterator<Item = &str> {
        [self.ipv4.as_str(), self.ipv6.as_str()]
            .into_iter()
            .filter(|ip| !ip.is_empty() && *ip != NOT_DETECTED && *ip != NOT_APPLICABLE)
    }

    #[must_use]
    pub fn first_usable(&self) -> Option<&str> {
        self.usable_addresses().next()
    }
}

/// Query `target` once and collect everything into a [`QueryReport`].
///
/// Both families resolve concurrently; the CNAME lookup runs alongside them
/// for host name targets. Geolocation, when requested, uses the first usable
/// address.
pub async fn collect(
    gateway: &dyn LookupGateway,
    target: &Target,
    with_detail: bool,
) -> QueryReport {
    let cname_lookup = async {
        if target.kind() != TargetKind::Hostname {
            return None;
        }
        match gateway.fetch_cname(target.host()).await {
            Ok(cname) => cname,
            Err(e) => {
                log::debug!("CNAME lookup for {} failed: {e}", target.host());
                None
            }
        }
    };

    let (ipv4, ipv6, cname) = futures::join!(
        resolve(gateway, Family::V4, target),
        resolve(gateway, Family::V6, target),
        cname_lookup,
    );

    let mut report = QueryReport {
        target: if target.is_local() {
            "(localhost)".to_string()
        } else {
            target.host().to_string()
        },
        ipv4: display(&ipv4),
        ipv6: display(&ipv6),
        category: None,
        cname,
        detail: None,
        detail_error: None,
        success: true,
        error: None,
    };

    let Some(ip) = ipv4.usable().or_else(|| ipv6.usable()) else {
        report.success = false;
        report.error = Some(NOT_DETECTED_ERROR.to_string());
        return report;
    };
    report.category = ipv4.category().or_else(|| ipv6.category());

    if with_detail {
        match gateway.fetch_geo_detail(ip).await {
            Ok(detail) => report.detail = Some(detail),
            Err(e) => {
                log::warn!("geolocation of {ip} failed: {e}");
                report.detail_error = Some(e.to_string());
            }
        }
    }

    report
}

/// Settle one slot the same way the interactive session does.
async fn resolve(gateway: &dyn LookupGateway, family: Family, target: &Target) -> AddressSlot {
    if let TargetKind::Literal(literal) = target.kind() {
        if literal != family {
            return AddressSlot::Unavailable(Unavailable::NotApplicable);
        }
    }
    AddressSlot::from_lookup(gateway.fetch_address(family, target).await)
}

fn display(slot: &AddressSlot) -> String {
    slot.display_text().unwrap_or_default().to_string()
}
