//! Blocking variant of the client facade.
//!
//! Same routing, headers, and response handling as the async client;
//! each call occupies the calling thread for one HTTP exchange.

use reqwest::blocking::Client;
use serde::Serialize;
use serde_json::Value;
use tracing::debug;

use crate::config::{OpenApiConfig, ProxyConfig};
use crate::error::OpenApiError;
use crate::file::encode_deploy_file;
use crate::headers::header_map;
use crate::payload::to_payload;
use crate::routes::{self, parse_response_parts, RequestPlan};

/// Blocking Zalo Mini App Open API client for partner integration.
///
/// See [`crate::OpenApiClient`] for the shared contract; only the call
/// style differs.
#[derive(Debug, Clone)]
pub struct OpenApiClient {
    config: OpenApiConfig,
}

impl OpenApiClient {
    /// Validate credentials and proxy configuration and build a client.
    pub fn new(config: OpenApiConfig) -> Result<Self, OpenApiError> {
        config.validate()?;
        Ok(Self { config })
    }

    pub fn config(&self) -> &OpenApiConfig {
        &self.config
    }

    /// Route subsequent requests through `http://{host}:{port}`.
    pub fn set_proxy(&mut self, proxy: ProxyConfig) -> Result<(), OpenApiError> {
        proxy.validate()?;
        self.config.proxy = Some(proxy);
        Ok(())
    }

    /// Restore direct connections for subsequent requests.
    pub fn clear_proxy(&mut self) {
        self.config.proxy = None;
    }

    /// Create a new mini-app under the configured Zalo App.
    pub fn create_mini_app<T: Serialize>(&self, app_info: &T) -> Result<Value, OpenApiError> {
        let payload = to_payload(app_info)?;
        let plan = routes::create_app_plan(&self.config.base_url, payload);
        self.execute(plan)
    }

    /// List mini-apps for the configured Zalo App.
    pub fn get_mini_apps<T: Serialize>(&self, app_slice: &T) -> Result<Value, OpenApiError> {
        let payload = to_payload(app_slice)?;
        let plan = routes::list_apps_plan(&self.config.base_url, payload);
        self.execute(plan)
    }

    /// Deploy a new version of a mini-app.
    pub fn deploy_mini_app<T: Serialize>(&self, deploy_app: &T) -> Result<Value, OpenApiError> {
        let payload = encode_deploy_file(to_payload(deploy_app)?)?;
        let plan = routes::deploy_app_plan(&self.config.base_url, payload)?;
        self.execute(plan)
    }

    /// List versions of a mini-app.
    pub fn get_versions_mini_app<T: Serialize>(&self, app_slice: &T) -> Result<Value, OpenApiError> {
        let payload = to_payload(app_slice)?;
        let plan = routes::list_versions_plan(&self.config.base_url, payload)?;
        self.execute(plan)
    }

    /// Submit a version for publish review.
    pub fn request_publish_mini_app<T: Serialize>(
        &self,
        publish_app: &T,
    ) -> Result<Value, OpenApiError> {
        let payload = to_payload(publish_app)?;
        let plan = routes::request_publish_plan(&self.config.base_url, payload)?;
        self.execute(plan)
    }

    /// Publish a reviewed version to users.
    pub fn publish_mini_app<T: Serialize>(&self, publish_app: &T) -> Result<Value, OpenApiError> {
        let payload = to_payload(publish_app)?;
        let plan = routes::publish_plan(&self.config.base_url, payload)?;
        self.execute(plan)
    }

    fn http_client(&self) -> Result<Client, OpenApiError> {
        let mut builder = Client::builder();
        if let Some(proxy) = self.config.reqwest_proxy()? {
            builder = builder.proxy(proxy);
        }
        builder.build().map_err(OpenApiError::from)
    }

    fn execute(&self, plan: RequestPlan) -> Result<Value, OpenApiError> {
        let headers = header_map(&self.config)?;
        let http = self.http_client()?;
        debug!(method = %plan.method, url = %plan.url, "dispatching request");

        let mut request = http.request(plan.method, &plan.url).headers(headers);
        if !plan.query.is_empty() {
            request = request.query(&plan.query);
        }
        if let Some(body) = &plan.body {
            request = request.json(body);
        }

        let response = request.send()?;
        let status = response.status();
        let body = response.text()?;
        debug!(status = status.as_u16(), "response received");
        parse_response_parts(status, body)
    }
}
