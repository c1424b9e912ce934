//! Service façade exposing all toolbox operations.
//!
//! Every method on [`ToolboxService`] is bounded by the service's timeout; an elapsed
//! ceiling surfaces as [`ToolboxError::Timeout`].

mod dns;
mod geo;
mod public_ip;
mod resolver;

use std::future::Future;
use std::sync::LazyLock;
use std::time::Duration;

use crate::error::{ToolboxError, ToolboxResult};
use crate::types::IpGeoInfo;

/// Default ceiling for a single lookup.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(5);

/// Shared HTTP client for the echo and geolocation services.
static HTTP_CLIENT: LazyLock<reqwest::Client> = LazyLock::new(reqwest::Client::new);

/// Validate and normalise a hostname for DNS resolution.
///
/// Trims whitespace and rejects empty or overlong inputs.
fn validate_host(host: &str) -> ToolboxResult<&str> {
    let host = host.trim();
    if host.is_empty() {
        return Err(ToolboxError::ValidationError(
            "Host name is required".to_string(),
        ));
    }
    if host.len() > 253 {
        return Err(ToolboxError::ValidationError(format!(
            "Host name exceeds maximum length of 253 characters (got {})",
            host.len()
        )));
    }
    Ok(host)
}

/// Entry point for all network lookups.
///
/// ```rust,no_run
/// use ipq_toolbox::ToolboxService;
/// # async fn demo() -> ipq_toolbox::ToolboxResult<()> {
/// let toolbox = ToolboxService::default();
/// let v4 = toolbox.lookup_ipv4("example.com").await?;
/// let geo = toolbox.geo_lookup(&v4).await?;
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone, Copy)]
pub struct ToolboxService {
    timeout: Duration,
}

impl Default for ToolboxService {
    fn default() -> Self {
        Self::new(DEFAULT_TIMEOUT)
    }
}

impl ToolboxService {
    pub fn new(timeout: Duration) -> Self {
        Self { timeout }
    }

    pub fn timeout(&self) -> Duration {
        self.timeout
    }

    /// Public IPv4 address of this host, as seen by an echo service.
    pub async fn public_ipv4(&self) -> ToolboxResult<String> {
        self.bounded(public_ip::fetch_public_ip(public_ip::IPV4_ECHO_URL, &HTTP_CLIENT))
            .await
    }

    /// Public IPv6 address of this host, as seen by an echo service.
    pub async fn public_ipv6(&self) -> ToolboxResult<String> {
        self.bounded(public_ip::fetch_public_ip(public_ip::IPV6_ECHO_URL, &HTTP_CLIENT))
            .await
    }

    /// First A record of `host`.
    pub async fn lookup_ipv4(&self, host: &str) -> ToolboxResult<String> {
        let host = validate_host(host)?;
        self.bounded(dns::lookup_ipv4(&resolver::DEFAULT_RESOLVER, host))
            .await
    }

    /// First AAAA record of `host`.
    pub async fn lookup_ipv6(&self, host: &str) -> ToolboxResult<String> {
        let host = validate_host(host)?;
        self.bounded(dns::lookup_ipv6(&resolver::DEFAULT_RESOLVER, host))
            .await
    }

    /// CNAME target of `host`, if it is an alias.
    pub async fn lookup_cname(&self, host: &str) -> ToolboxResult<Option<String>> {
        let host = validate_host(host)?;
        self.bounded(dns::lookup_cname(&resolver::DEFAULT_RESOLVER, host))
            .await
    }

    /// Geolocation and network attributes of `ip`.
    pub async fn geo_lookup(&self, ip: &str) -> ToolboxResult<IpGeoInfo> {
        let ip = ip.trim();
        if ip.parse::<std::net::IpAddr>().is_err() {
            return Err(ToolboxError::ValidationError(format!(
                "Invalid IP address: {ip}"
            )));
        }
        self.bounded(geo::geo_lookup(ip, &HTTP_CLIENT)).await
    }

    async fn bounded<T>(&self, fut: impl Future<Output = ToolboxResult<T>>) -> ToolboxResult<T> {
        match tokio::time::timeout(self.timeout, fut).await {
            Ok(result) => {
                if let Err(e) = &result {
                    log::warn!("lookup failed: {e}");
                }
                result
            }
            Err(_) => {
                log::warn!("lookup timed out after {:?}", self.timeout);
                Err(ToolboxError::Timeout(self.timeout.as_millis()))
            }
        }
    }
}
