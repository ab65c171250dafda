use crate::config::SETTINGS;
use crate::error::ConvertError;
use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::time::Duration;

static IPV4_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"^(\d{1,3}\.){3}\d{1,3}$").unwrap());
static IPV6_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^([0-9a-fA-F]{1,4}:){7}[0-9a-fA-F]{1,4}$").unwrap());

const FIELDS: &str =
    "status,message,country,countryCode,region,regionName,city,zip,lat,lon,timezone,isp,org,as,query";

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GeoInfo {
    #[serde(rename = "query")]
    pub ip: String,
    pub country: String,
    #[serde(rename = "countryCode")]
    pub country_code: String,
    pub region: String,
    #[serde(rename = "regionName")]
    pub region_name: String,
    pub city: String,
    pub zip: String,
    #[serde(rename = "lat")]
    pub latitude: f64,
    #[serde(rename = "lon")]
    pub longitude: f64,
    pub timezone: String,
    pub isp: String,
    pub org: String,
    #[serde(rename = "as")]
    pub autonomous_system: String,
}

/// Accepts dotted-quad IPv4 (each octet 0-255) or full eight-group IPv6.
pub fn validate_ip(ip: &str) -> Result<(), ConvertError> {
    let ip = ip.trim();
    if ip.is_empty() {
        return Err(ConvertError::precondition("No IP address provided"));
    }
    if IPV4_RE.is_match(ip) {
        let octets_valid = ip
            .split('.')
            .all(|octet| octet.parse::<u32>().map(|n| n <= 255).unwrap_or(false));
        if octets_valid {
            return Ok(());
        }
    } else if IPV6_RE.is_match(ip) {
        return Ok(());
    }
    Err(ConvertError::precondition("Invalid IP address format"))
}

/// Looks up geolocation data for `ip` against the configured API.
pub fn lookup(ip: &str) -> Result<GeoInfo, ConvertError> {
    validate_ip(ip)?;
    let cfg = &*SETTINGS;
    let url = format!(
        "{}/{}?fields={}",
        cfg.geo_api_url.trim_end_matches('/'),
        ip.trim(),
        FIELDS
    );

    let agent = ureq::AgentBuilder::new()
        .timeout(Duration::from_secs(cfg.request_timeout_secs))
        .build();
    let response = agent
        .get(&url)
        .call()
        .map_err(|e| ConvertError::conversion(format!("Geolocation request failed: {}", e)))?;
    let body: serde_json::Value = response
        .into_json()
        .map_err(|e| ConvertError::conversion(format!("Invalid geolocation response: {}", e)))?;

    if body.get("status").and_then(|status| status.as_str()) == Some("fail") {
        let message = body
            .get("message")
            .and_then(|message| message.as_str())
            .unwrap_or("lookup failed");
        return Err(ConvertError::conversion(format!(
            "Geolocation lookup failed: {}",
            message
        )));
    }

    serde_json::from_value(body)
        .map_err(|e| ConvertError::conversion(format!("Invalid geolocation response: {}", e)))
}

/// Lookup rendered as pretty JSON, for the CLI and GUI.
pub fn lookup_text(ip: &str) -> Result<String, ConvertError> {
    let info = lookup(ip)?;
    serde_json::to_string_pretty(&info)
        .map_err(|e| ConvertError::conversion(format!("Failed to serialize result: {}", e)))
}
