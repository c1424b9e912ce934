//! Public address discovery through a plain-text IP echo service.

use crate::error::{ToolboxError, ToolboxResult};

pub(crate) const IPV4_ECHO_URL: &str = "https://ipv4.icanhazip.com";
pub(crate) const IPV6_ECHO_URL: &str = "https://ipv6.icanhazip.com";

/// Fetch the caller's public address as reported by `url`.
///
/// The echo services answer with the bare address followed by a newline.
pub async fn fetch_public_ip(url: &str, client: &reqwest::Client) -> ToolboxResult<String> {
    log::debug!("GET {url}");

    let response = client
        .get(url)
        .send()
        .await
        .map_err(|e| ToolboxError::NetworkError(format!("network error: {e}")))?;

    if !response.status().is_success() {
        return Err(ToolboxError::NetworkError(format!(
            "server returned {}",
            response.status().as_u16()
        )));
    }

    let body = response
        .text()
        .await
        .map_err(|e| ToolboxError::NetworkError(format!("failed to read response: {e}")))?;

    parse_echo_body(&body)
}

fn parse_echo_body(body: &str) -> ToolboxResult<String> {
    let ip = body.trim();
    if ip.is_empty() {
        return Err(ToolboxError::NetworkError("empty response".to_string()));
    }
    Ok(ip.to_string())
}
