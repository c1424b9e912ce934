//! IP geolocation lookup module.
//!
//! Backed by ip-api.com (free tier, no API key, 45 requests per minute).

use crate::error::{ToolboxError, ToolboxResult};
use crate::types::IpGeoInfo;

const GEO_ENDPOINT: &str = "http://ip-api.com/json";

/// `status,message,country,regionName,city,isp,mobile,proxy,hosting` and
/// nothing else; extra bits such as `reverse` make the API do more work.
const GEO_FIELDS: u32 = 17_023_513;

fn geo_url(ip: &str) -> String {
    format!("{GEO_ENDPOINT}/{}?fields={GEO_FIELDS}", ip.trim())
}

/// Look up geolocation for a single IP address.
pub async fn geo_lookup(ip: &str, client: &reqwest::Client) -> ToolboxResult<IpGeoInfo> {
    let url = geo_url(ip);
    log::debug!("GET {url}");

    let response = client
        .get(&url)
        .send()
        .await
        .map_err(|e| ToolboxError::NetworkError(format!("API unreachable: {e}")))?;

    if !response.status().is_success() {
        return Err(ToolboxError::ApiError(format!(
            "API error (status {})",
            response.status().as_u16()
        )));
    }

    let info: IpGeoInfo = response
        .json()
        .await
        .map_err(|e| ToolboxError::ApiError(format!("invalid response: {e}")))?;

    if info.is_failed() {
        return Err(ToolboxError::ApiError(friendly_error(&info.message)));
    }

    Ok(info)
}

/// Translate an ip-api.com failure message into something a user can act on.
pub(crate) fn friendly_error(message: &str) -> String {
    match message {
        "private range" => "Private IP (no geolocation)".to_string(),
        "reserved range" => "Reserved IP (no geolocation)".to_string(),
        "invalid query" => "Invalid IP format".to_string(),
        "" => "Unknown error".to_string(),
        other => other.to_string(),
    }
}
