//! DNS 查询模块
//!
//! Resolves a hostname to its first A / AAAA address, and its CNAME target.

use hickory_resolver::{proto::rr::RecordType, TokioResolver};

use crate::error::{ToolboxError, ToolboxResult};

/// First IPv4 address (A record) of `host`.
pub async fn lookup_ipv4(resolver: &TokioResolver, host: &str) -> ToolboxResult<String> {
    let response = resolver
        .ipv4_lookup(host)
        .await
        .map_err(|e| ToolboxError::NetworkError(format!("DNS lookup failed: {e}")))?;

    response
        .iter()
        .next()
        .map(ToString::to_string)
        .ok_or_else(|| ToolboxError::NetworkError("no IPv4 address found".to_string()))
}

/// First IPv6 address (AAAA record) of `host`.
pub async fn lookup_ipv6(resolver: &TokioResolver, host: &str) -> ToolboxResult<String> {
    let response = resolver
        .ipv6_lookup(host)
        .await
        .map_err(|e| ToolboxError::NetworkError(format!("DNS lookup failed: {e}")))?;

    response
        .iter()
        .next()
        .map(ToString::to_string)
        .ok_or_else(|| ToolboxError::NetworkError("no IPv6 address found".to_string()))
}

/// Canonical name of `host`, without the trailing root dot.
///
/// A name without a CNAME record yields `Ok(None)`; only resolver failures other
/// than an empty answer are errors.
pub async fn lookup_cname(resolver: &TokioResolver, host: &str) -> ToolboxResult<Option<String>> {
    let response = match resolver.lookup(host, RecordType::CNAME).await {
        Ok(response) => response,
        Err(e) if e.is_no_records_found() => return Ok(None),
        Err(e) => {
            return Err(ToolboxError::NetworkError(format!(
                "CNAME lookup failed: {e}"
            )))
        }
    };

    Ok(response.record_iter().find_map(|record| {
        record
            .data()
            .as_cname()
            .map(|cname| trim_root(&cname.0.to_string()))
    }))
}

fn trim_root(name: &str) -> String {
    name.trim_end_matches('.').to_string()
}
