//! 网络查询网关
//!
//! 把 ipq-toolbox 的 `ToolboxService` 适配为 ipq-core 的 `LookupGateway`。

use async_trait::async_trait;
use ipq_core::types::{GeoDetail, Target};
use ipq_core::{LookupError, LookupGateway, LookupResult};
use ipq_toolbox::{IpGeoInfo, ToolboxError, ToolboxService};

/// `LookupGateway` backed by the echo service, the system resolver and
/// ip-api.com.
#[derive(Debug, Clone, Copy, Default)]
pub struct ToolboxGateway {
    toolbox: ToolboxService,
}

impl ToolboxGateway {
    pub fn new(toolbox: ToolboxService) -> Self {
        Self { toolbox }
    }
}

fn lookup_error(e: ToolboxError) -> LookupError {
    match e {
        ToolboxError::Timeout(_) => LookupError::Timeout,
        other => LookupError::Failed(other.to_string()),
    }
}

fn geo_detail(info: IpGeoInfo) -> GeoDetail {
    GeoDetail {
        isp: info.isp,
        country: info.country,
        region: info.region_name,
        city: info.city,
        mobile: info.mobile,
        proxy: info.proxy,
        hosting: info.hosting,
    }
}

#[async_trait]
impl LookupGateway for ToolboxGateway {
    async fn fetch_ipv4(&self, target: &Target) -> LookupResult<String> {
        let result = if target.is_local() {
            self.toolbox.public_ipv4().await
        } else {
            self.toolbox.lookup_ipv4(target.host()).await
        };
        result.map_err(lookup_error)
    }

    async fn fetch_ipv6(&self, target: &Target) -> LookupResult<String> {
        let result = if target.is_local() {
            self.toolbox.public_ipv6().await
        } else {
            self.toolbox.lookup_ipv6(target.host()).await
        };
        result.map_err(lookup_error)
    }

    async fn fetch_geo_detail(&self, ip: &str) -> LookupResult<GeoDetail> {
        self.toolbox
            .geo_lookup(ip)
            .await
            .map(geo_detail)
            .map_err(lookup_error)
    }

    async fn fetch_cname(&self, host: &str) -> LookupResult<Option<String>> {
        self.toolbox.lookup_cname(host).await.map_err(lookup_error)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_timeout_maps_to_timeout() {
        assert_eq!(lookup_error(ToolboxError::Timeout(5000)), LookupError::Timeout);
    }

    #[test]
    fn test_api_error_message_is_kept() {
        assert_eq!(
            lookup_error(ToolboxError::ApiError("Private IP (no geolocation)".to_string())),
            LookupError::Failed("Private IP (no geolocation)".to_string())
        );
    }

    #[test]
    fn test_geo_detail_conversion() {
        let info = IpGeoInfo {
            status: "success".to_string(),
            country: "Japan".to_string(),
            region_name: "Tokyo".to_string(),
            city: "Tokyo".to_string(),
            isp: "Example Net".to_string(),
            hosting: true,
            ..IpGeoInfo::default()
        };
        let detail = geo_detail(info);
        assert_eq!(detail.region, "Tokyo");
        assert_eq!(detail.isp, "Example Net");
        assert!(detail.hosting);
        assert_eq!(detail.location().unwrap(), "Tokyo, Japan");
    }

    #[tokio::test]
    async fn test_literal_target_needs_no_network() {
        let gateway = ToolboxGateway::default();
        let target = Target::parse("192.0.2.1").unwrap();
        assert_eq!(
            gateway
                .fetch_address(ipq_core::types::Family::V4, &target)
                .await
                .unwrap(),
            "192.0.2.1"
        );
    }

    #[tokio::test]
    #[ignore = "requires network access"]
    async fn test_fetch_ipv4_hostname_real() {
        let gateway = ToolboxGateway::default();
        let target = Target::parse("one.one.one.one").unwrap();
        let ip = gateway.fetch_ipv4(&target).await.unwrap();
        assert!(ip.parse::<std::net::Ipv4Addr>().is_ok());
    }
}
