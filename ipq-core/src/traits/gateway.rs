//! 网络查询抽象 Trait

use async_trait::async_trait;
use thiserror::Error;

use crate::types::{Family, GeoDetail, Target, TargetKind};

/// Failure of a single lookup.
///
/// Address failures degrade a slot to "Not Detected"; geolocation failures
/// carry their message into the detail block.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum LookupError {
    #[error("{0}")]
    Failed(String),

    #[error("Request timed out")]
    Timeout,
}

pub type LookupResult<T> = std::result::Result<T, LookupError>;

/// Network lookups the session depends on.
///
/// Implementations enforce their own per-call timeout and report it as
/// [`LookupError::Timeout`]. Calls are independent: one failing or stalling
/// must not affect another.
///
/// 平台实现:
/// - `ipq` binary: `ToolboxGateway` (echo service + hickory DNS + ip-api.com)
/// - tests: `MockGateway`
#[async_trait]
pub trait LookupGateway: Send + Sync {
    /// IPv4 address of `target`; the public address when the target is local.
    async fn fetch_ipv4(&self, target: &Target) -> LookupResult<String>;

    /// IPv6 address of `target`; the public address when the target is local.
    async fn fetch_ipv6(&self, target: &Target) -> LookupResult<String>;

    /// Geolocation and network attributes of `ip`.
    async fn fetch_geo_detail(&self, ip: &str) -> LookupResult<GeoDetail>;

    /// Canonical name of a host name target, if it is an alias.
    async fn fetch_cname(&self, _host: &str) -> LookupResult<Option<String>> {
        Ok(None)
    }

    /// Address of `family` for `target`.
    ///
    /// A literal of the same family answers without I/O. Callers settle the
    /// other family of a literal as not applicable and never ask for it.
    async fn fetch_address(&self, family: Family, target: &Target) -> LookupResult<String> {
        if target.kind() == TargetKind::Literal(family) {
            return Ok(target.host().to_string());
        }
        match family {
            Family::V4 => self.fetch_ipv4(target).await,
            Family::V6 => self.fetch_ipv6(target).await,
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::test_utils::MockGateway;

    #[tokio::test]
    async fn test_fetch_address_literal_answers_locally() {
        let gateway = MockGateway::new();
        let target = Target::parse("fe80::1%eth0").unwrap();

        let ip = gateway.fetch_address(Family::V6, &target).await.unwrap();
        assert_eq!(ip, "fe80::1%eth0");
        assert_eq!(gateway.ipv6_calls(), 0);
    }

    #[tokio::test]
    async fn test_fetch_address_dispatches_by_family() {
        let gateway = MockGateway::new();
        let target = Target::parse("example.com").unwrap();

        let v4 = gateway.fetch_address(Family::V4, &target).await.unwrap();
        let v6 = gateway.fetch_address(Family::V6, &target).await.unwrap();
        assert_eq!(v4, MockGateway::IPV4);
        assert_eq!(v6, MockGateway::IPV6);
        assert_eq!(gateway.ipv4_calls(), 1);
        assert_eq!(gateway.ipv6_calls(), 1);
    }
}
