use std::collections::BTreeMap;

use reqwest::header::{HeaderMap, HeaderName, HeaderValue};

use crate::config::OpenApiConfig;
use crate::error::OpenApiError;

pub const HEADER_API_KEY: &str = "X-Api-Key";
pub const HEADER_ZALO_APP_ID: &str = "X-Zalo-AppID";
pub const HEADER_SDK_VERSION: &str = "X-Sdk-Version";
pub const HEADER_SDK_NAME: &str = "X-Sdk-Name";

/// SDK version string reported to the service.
pub const SDK_VERSION: &str = env!("CARGO_PKG_VERSION");
/// SDK platform tag reported to the service.
pub const SDK_NAME: &str = "Rust";

/// Build the deterministic header map carried by every client request.
pub fn build_headers(config: &OpenApiConfig) -> Result<BTreeMap<String, String>, OpenApiError> {
    if config.api_key.trim().is_empty() {
        return Err(OpenApiError::MissingApiKey);
    }
    if config.zalo_app_id.trim().is_empty() {
        return Err(OpenApiError::MissingAppId);
    }

    let mut headers = BTreeMap::new();
    headers.insert(HEADER_API_KEY.to_owned(), config.api_key.trim().to_owned());
    headers.insert(
        HEADER_ZALO_APP_ID.to_owned(),
        config.zalo_app_id.trim().to_owned(),
    );
    headers.insert(HEADER_SDK_VERSION.to_owned(), SDK_VERSION.to_owned());
    headers.insert(HEADER_SDK_NAME.to_owned(), SDK_NAME.to_owned());
    Ok(headers)
}

/// Convert the deterministic map into the transport's header type.
pub(crate) fn header_map(config: &OpenApiConfig) -> Result<HeaderMap, OpenApiError> {
    let headers = build_headers(config)?;
    let mut out = HeaderMap::new();
    for (key, value) in headers {
        out.insert(
            HeaderName::from_bytes(key.as_bytes())
                .map_err(|_| OpenApiError::InvalidHeader(format!("invalid header key: {key}")))?,
            HeaderValue::from_str(&value).map_err(|_| {
                OpenApiError::InvalidHeader(format!("invalid header value for {key}"))
            })?,
        );
    }
    Ok(out)
}
