//! Header utilities for outbound provider calls
//!
//! Client headers are never forwarded; every outbound call carries only the
//! headers built here.

use reqwest::header::{HeaderMap, HeaderValue, ACCEPT, AUTHORIZATION, CONTENT_TYPE};

use super::adapter::OutboundAuth;
use crate::error::{AppError, AppResult};

/// Headers shared by every provider call
pub fn json_headers() -> HeaderMap {
    let mut headers = HeaderMap::new();
    headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));
    headers.insert(ACCEPT, HeaderValue::from_static("application/json"));
    headers
}

/// Build the headers for an outbound call
///
/// Bearer credentials go into `Authorization`; query-string credentials add
/// nothing here.
pub fn build_provider_headers(auth: &OutboundAuth) -> AppResult<HeaderMap> {
    let mut headers = json_headers();

    if let OutboundAuth::Bearer(key) = auth {
        let mut value = HeaderValue::from_str(&format!("Bearer {}", key.expose()))
            .map_err(|_| AppError::BadRequest("API key contains invalid characters".to_string()))?;
        value.set_sensitive(true);
        headers.insert(AUTHORIZATION, value);
    }

    Ok(headers)
}
