//! Network lookups for ipq
//!
//! 提供 ipq 所需的网络查询：公网 IP 回显、DNS A/AAAA/CNAME 解析、IP 地理位置。
//! 所有功能无状态，每次调用都受超时限制。

mod error;
mod services;
mod types;

pub use error::{ToolboxError, ToolboxResult};
pub use services::{ToolboxService, DEFAULT_TIMEOUT};
pub use types::IpGeoInfo;
