//! Stateless low-level API functions.
//!
//! Session-free counterparts of the client facade operations, taking
//! explicit positional arguments. No partner headers are attached and
//! no proxy is supported; callers pass the target domain themselves
//! (usually [`DOMAIN_PROD`](crate::url::DOMAIN_PROD)) and are
//! responsible for encoding any deploy file. Blocking variants live
//! under [`blocking`].

use serde_json::{json, Map, Value};

use crate::error::OpenApiError;
use crate::routes::{parse_response_parts, RequestPlan};
use crate::url;

/// Create a new mini-app.
pub async fn create_app(data: &Map<String, Value>, domain: &str) -> Result<Value, OpenApiError> {
    execute(RequestPlan::post(url::apps_url(domain), data.clone())).await
}

/// List mini-apps with a pagination window.
pub async fn get_apps(offset: u32, limit: u32, domain: &str) -> Result<Value, OpenApiError> {
    execute(RequestPlan::get(
        url::apps_url(domain),
        slice_query(offset, limit),
    ))
    .await
}

/// Deploy a new version of a mini-app.
pub async fn deploy_app(
    mini_app_id: &str,
    data: &Map<String, Value>,
    domain: &str,
) -> Result<Value, OpenApiError> {
    execute(RequestPlan::post(
        url::upload_url(domain, mini_app_id),
        data.clone(),
    ))
    .await
}

/// List versions of a mini-app with a pagination window.
pub async fn get_versions_app(
    mini_app_id: &str,
    offset: u32,
    limit: u32,
    domain: &str,
) -> Result<Value, OpenApiError> {
    execute(RequestPlan::get(
        url::versions_url(domain, mini_app_id),
        slice_query(offset, limit),
    ))
    .await
}

/// Submit a version for publish review.
pub async fn request_publish(
    mini_app_id: &str,
    version_id: i64,
    description: Option<&str>,
    domain: &str,
) -> Result<Value, OpenApiError> {
    execute(RequestPlan::post(
        url::request_publish_url(domain, mini_app_id),
        publish_body(version_id, description),
    ))
    .await
}

/// Publish a reviewed version to users.
pub async fn publish(
    mini_app_id: &str,
    version_id: i64,
    domain: &str,
) -> Result<Value, OpenApiError> {
    execute(RequestPlan::post(
        url::publish_url(domain, mini_app_id),
        publish_body(version_id, None),
    ))
    .await
}

async fn execute(plan: RequestPlan) -> Result<Value, OpenApiError> {
    let http = reqwest::Client::builder().build()?;
    let mut request = http.request(plan.method, &plan.url);
    if !plan.query.is_empty() {
        request = request.query(&plan.query);
    }
    if let Some(body) = &plan.body {
        request = request.json(body);
    }
    let response = request.send().await?;
    let status = response.status();
    let body = response.text().await?;
    parse_response_parts(status, body)
}

fn slice_query(offset: u32, limit: u32) -> Vec<(String, String)> {
    vec![
        ("offset".to_owned(), offset.to_string()),
        ("limit".to_owned(), limit.to_string()),
    ]
}

fn publish_body(version_id: i64, description: Option<&str>) -> Map<String, Value> {
    let mut body = Map::new();
    body.insert("versionId".to_owned(), json!(version_id));
    if let Some(description) = description {
        body.insert("description".to_owned(), json!(description));
    }
    body
}

/// Blocking variants of the low-level functions.
pub mod blocking {
    use serde_json::{Map, Value};

    use super::{publish_body, slice_query};
    use crate::error::OpenApiError;
    use crate::routes::{parse_response_parts, RequestPlan};
    use crate::url;

    /// Create a new mini-app.
    pub fn create_app(data: &Map<String, Value>, domain: &str) -> Result<Value, OpenApiError> {
        execute(RequestPlan::post(url::apps_url(domain), data.clone()))
    }

    /// List mini-apps with a pagination window.
    pub fn get_apps(offset: u32, limit: u32, domain: &str) -> Result<Value, OpenApiError> {
        execute(RequestPlan::get(
            url::apps_url(domain),
            slice_query(offset, limit),
        ))
    }

    /// Deploy a new version of a mini-app.
    pub fn deploy_app(
        mini_app_id: &str,
        data: &Map<String, Value>,
        domain: &str,
    ) -> Result<Value, OpenApiError> {
        execute(RequestPlan::post(
            url::upload_url(domain, mini_app_id),
            data.clone(),
        ))
    }

    /// List versions of a mini-app with a pagination window.
    pub fn get_versions_app(
        mini_app_id: &str,
        offset: u32,
        limit: u32,
        domain: &str,
    ) -> Result<Value, OpenApiError> {
        execute(RequestPlan::get(
            url::versions_url(domain, mini_app_id),
            slice_query(offset, limit),
        ))
    }

    /// Submit a version for publish review.
    pub fn request_publish(
        mini_app_id: &str,
        version_id: i64,
        description: Option<&str>,
        domain: &str,
    ) -> Result<Value, OpenApiError> {
        execute(RequestPlan::post(
            url::request_publish_url(domain, mini_app_id),
            publish_body(version_id, description),
        ))
    }

    /// Publish a reviewed version to users.
    pub fn publish(
        mini_app_id: &str,
        version_id: i64,
        domain: &str,
    ) -> Result<Value, OpenApiError> {
        execute(RequestPlan::post(
            url::publish_url(domain, mini_app_id),
            publish_body(version_id, None),
        ))
    }

    fn execute(plan: RequestPlan) -> Result<Value, OpenApiError> {
        let http = reqwest::blocking::Client::builder().build()?;
        let mut request = http.request(plan.method, &plan.url);
        if !plan.query.is_empty() {
            request = request.query(&plan.query);
        }
        if let Some(body) = &plan.body {
            request = request.json(body);
        }
        let response = request.send()?;
        let status = response.status();
        let body = response.text()?;
        parse_response_parts(status, body)
    }
}
