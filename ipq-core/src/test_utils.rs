//! 测试辅助模块
//!
//! 提供 mock 网关和剪贴板实现。

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Mutex;
use std::time::Duration;

use async_trait::async_trait;

use crate::error::{CoreError, CoreResult};
use crate::traits::{ClipboardWriter, LookupGateway, LookupResult};
use crate::types::{GeoDetail, Target};

pub fn sample_detail() -> GeoDetail {
    GeoDetail {
        isp: "Edgecast Inc.".to_string(),
        country: "United States".to_string(),
        region: "Massachusetts".to_string(),
        city: "Norwell".to_string(),
        mobile: false,
        proxy: false,
        hosting: true,
    }
}

// ===== MockGateway =====

pub struct MockGateway {
    ipv4: LookupResult<String>,
    ipv6: LookupResult<String>,
    geo: LookupResult<GeoDetail>,
    cname: Option<String>,
    ipv4_delay: Duration,
    ipv6_delay: Duration,
    geo_delay: Duration,
    ipv4_calls: AtomicUsize,
    ipv6_calls: AtomicUsize,
    geo_ips: Mutex<Vec<String>>,
}

impl MockGateway {
    pub const IPV4: &'static str = "93.184.216.34";
    pub const IPV6: &'static str = "2606:2800:220:1:248:1893:25c8:1946";

    pub fn new() -> Self {
        Self {
            ipv4: Ok(Self::IPV4.to_string()),
            ipv6: Ok(Self::IPV6.to_string()),
            geo: Ok(sample_detail()),
            cname: None,
            ipv4_delay: Duration::ZERO,
            ipv6_delay: Duration::ZERO,
            geo_delay: Duration::ZERO,
            ipv4_calls: AtomicUsize::new(0),
            ipv6_calls: AtomicUsize::new(0),
            geo_ips: Mutex::new(Vec::new()),
        }
    }

    pub fn with_ipv4(mut self, result: LookupResult<String>) -> Self {
        self.ipv4 = result;
        self
    }

    pub fn with_ipv6(mut self, result: LookupResult<String>) -> Self {
        self.ipv6 = result;
        self
    }

    pub fn with_geo(mut self, result: LookupResult<GeoDetail>) -> Self {
        self.geo = result;
        self
    }

    pub fn with_cname(mut self, cname: &str) -> Self {
        self.cname = Some(cname.to_string());
        self
    }

    pub fn with_delays(mut self, ipv4: Duration, ipv6: Duration, geo: Duration) -> Self {
        self.ipv4_delay = ipv4;
        self.ipv6_delay = ipv6;
        self.geo_delay = geo;
        self
    }

    pub fn ipv4_calls(&self) -> usize {
        self.ipv4_calls.load(Ordering::SeqCst)
    }

    pub fn ipv6_calls(&self) -> usize {
        self.ipv6_calls.load(Ordering::SeqCst)
    }

    /// Addresses geolocation was requested for, in call order.
    #[allow(clippy::unwrap_used)]
    pub fn geo_ips(&self) -> Vec<String> {
        self.geo_ips.lock().unwrap().clone()
    }
}

async fn pause(delay: Duration) {
    if !delay.is_zero() {
        tokio::time::sleep(delay).await;
    }
}

#[async_trait]
impl LookupGateway for MockGateway {
    async fn fetch_ipv4(&self, _target: &Target) -> LookupResult<String> {
        self.ipv4_calls.fetch_add(1, Ordering::SeqCst);
        pause(self.ipv4_delay).await;
        self.ipv4.clone()
    }

    async fn fetch_ipv6(&self, _target: &Target) -> LookupResult<String> {
        self.ipv6_calls.fetch_add(1, Ordering::SeqCst);
        pause(self.ipv6_delay).await;
        self.ipv6.clone()
    }

    #[allow(clippy::unwrap_used)]
    async fn fetch_geo_detail(&self, ip: &str) -> LookupResult<GeoDetail> {
        self.geo_ips.lock().unwrap().push(ip.to_string());
        pause(self.geo_delay).await;
        self.geo.clone()
    }

    async fn fetch_cname(&self, _host: &str) -> LookupResult<Option<String>> {
        Ok(self.cname.clone())
    }
}

// ===== MockClipboard =====

pub struct MockClipboard {
    writes: Mutex<Vec<String>>,
    fail: bool,
}

impl MockClipboard {
    pub fn new() -> Self {
        Self {
            writes: Mutex::new(Vec::new()),
            fail: false,
        }
    }

    pub fn failing() -> Self {
        Self {
            writes: Mutex::new(Vec::new()),
            fail: true,
        }
    }

    #[allow(clippy::unwrap_used)]
    pub fn writes(&self) -> Vec<String> {
        self.writes.lock().unwrap().clone()
    }
}

#[async_trait]
impl ClipboardWriter for MockClipboard {
    #[allow(clippy::unwrap_used)]
    async fn write_text(&self, text: &str) -> CoreResult<()> {
        if self.fail {
            return Err(CoreError::ClipboardError("no terminal".to_string()));
        }
        self.writes.lock().unwrap().push(text.to_string());
        Ok(())
    }
}
