//! Shared request planning for every transport.
//!
//! Both client facades and the low-level functions reduce an operation
//! to a [`RequestPlan`] here, so routing, query construction, and
//! response decoding exist exactly once. The adapters only differ in
//! how they perform the HTTP exchange.

use reqwest::{Method, StatusCode};
use serde_json::{Map, Value};

use crate::error::OpenApiError;
use crate::url;

/// A fully routed request, ready for either transport to execute.
#[derive(Debug, Clone)]
pub struct RequestPlan {
    pub method: Method,
    pub url: String,
    pub query: Vec<(String, String)>,
    pub body: Option<Map<String, Value>>,
}

impl RequestPlan {
    pub fn post(url: String, body: Map<String, Value>) -> Self {
        Self {
            method: Method::POST,
            url,
            query: Vec::new(),
            body: Some(body),
        }
    }

    pub fn get(url: String, query: Vec<(String, String)>) -> Self {
        Self {
            method: Method::GET,
            url,
            query,
            body: None,
        }
    }
}

/// `POST /apps` with the app-info payload.
pub fn create_app_plan(base: &str, payload: Map<String, Value>) -> RequestPlan {
    RequestPlan::post(url::apps_url(base), payload)
}

/// `GET /apps` with the slice as query parameters.
pub fn list_apps_plan(base: &str, payload: Map<String, Value>) -> RequestPlan {
    RequestPlan::get(url::apps_url(base), query_pairs(&payload))
}

/// `POST /apps/{id}/upload` with the deploy payload.
pub fn deploy_app_plan(
    base: &str,
    payload: Map<String, Value>,
) -> Result<RequestPlan, OpenApiError> {
    let id = mini_app_id(&payload)?;
    Ok(RequestPlan::post(url::upload_url(base, &id), payload))
}

/// `GET /apps/{id}/versions` with the slice as query parameters.
///
/// The full slice map goes into the query string, so `miniAppId`
/// appears in both path and query. That is the wire contract.
pub fn list_versions_plan(
    base: &str,
    payload: Map<String, Value>,
) -> Result<RequestPlan, OpenApiError> {
    let id = mini_app_id(&payload)?;
    Ok(RequestPlan::get(
        url::versions_url(base, &id),
        query_pairs(&payload),
    ))
}

/// `POST /apps/{id}/request-publish` with the publish payload.
pub fn request_publish_plan(
    base: &str,
    payload: Map<String, Value>,
) -> Result<RequestPlan, OpenApiError> {
    let id = mini_app_id(&payload)?;
    Ok(RequestPlan::post(
        url::request_publish_url(base, &id),
        payload,
    ))
}

/// `POST /apps/{id}/publish` with the publish payload.
pub fn publish_plan(base: &str, payload: Map<String, Value>) -> Result<RequestPlan, OpenApiError> {
    let id = mini_app_id(&payload)?;
    Ok(RequestPlan::post(url::publish_url(base, &id), payload))
}

/// Extract the `miniAppId` a path-building operation needs.
///
/// String and integer ids are both accepted; anything else fails
/// before any network activity.
pub fn mini_app_id(payload: &Map<String, Value>) -> Result<String, OpenApiError> {
    match payload.get("miniAppId") {
        Some(Value::String(id)) if !id.trim().is_empty() => Ok(id.trim().to_owned()),
        Some(Value::Number(id)) => Ok(id.to_string()),
        _ => Err(OpenApiError::MissingMiniAppId),
    }
}

/// Flatten a payload map into query pairs.
pub fn query_pairs(payload: &Map<String, Value>) -> Vec<(String, String)> {
    payload
        .iter()
        .map(|(key, value)| {
            let rendered = match value {
                Value::String(text) => text.clone(),
                other => other.to_string(),
            };
            (key.clone(), rendered)
        })
        .collect()
}

/// Normalize a completed exchange into the caller-visible result.
///
/// Non-2xx statuses fail with the status and raw body. A 2xx body is
/// decoded as JSON, falling back to the raw text for non-JSON content.
/// The service's own `error`/`message` fields inside a 2xx body are
/// never interpreted here.
pub fn parse_response_parts(status: StatusCode, body: String) -> Result<Value, OpenApiError> {
    if !status.is_success() {
        return Err(OpenApiError::Status(status, body));
    }
    Ok(decode_body(body))
}

fn decode_body(body: String) -> Value {
    serde_json::from_str(&body).unwrap_or(Value::String(body))
}
