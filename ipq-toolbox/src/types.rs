//! Public types returned by toolbox operations.

use serde::{Deserialize, Serialize};

/// Geolocation and network attributes of a single IP address.
///
/// Mirrors the subset of the ip-api.com response selected by
/// `fields=17023513` (status, message, country, regionName, city, isp, mobile,
/// proxy, hosting).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct IpGeoInfo {
    /// `"success"` or `"fail"`.
    #[serde(default)]
    pub status: String,
    /// Failure reason when `status == "fail"`.
    #[serde(default)]
    pub message: String,
    #[serde(default)]
    pub country: String,
    /// Region / province name.
    #[serde(default)]
    pub region_name: String,
    #[serde(default)]
    pub city: String,
    /// Internet service provider.
    #[serde(default)]
    pub isp: String,
    /// Mobile (cellular) network.
    #[serde(default)]
    pub mobile: bool,
    /// Proxy, VPN or Tor exit.
    #[serde(default)]
    pub proxy: bool,
    /// Hosting provider or data center.
    #[serde(default)]
    pub hosting: bool,
}

impl IpGeoInfo {
    pub fn is_failed(&self) -> bool {
        self.status == "fail"
    }
}
