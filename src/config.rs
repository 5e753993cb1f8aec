use crate::error::OpenApiError;
use crate::url::DOMAIN_PROD;

/// Proxy endpoint for outbound API requests.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProxyConfig {
    /// Proxy server hostname or IP address.
    pub host: String,
    /// Proxy server port.
    pub port: u16,
}

impl ProxyConfig {
    pub fn new(host: impl Into<String>, port: u16) -> Self {
        Self {
            host: host.into(),
            port,
        }
    }

    /// Proxy URL in the form the transport expects: `http://{host}:{port}`.
    pub fn url(&self) -> String {
        format!("http://{}:{}", self.host, self.port)
    }

    pub(crate) fn validate(&self) -> Result<(), OpenApiError> {
        if self.host.trim().is_empty() {
            return Err(OpenApiError::InvalidProxy("host is empty".to_owned()));
        }
        if self.port == 0 {
            return Err(OpenApiError::InvalidProxy("port is zero".to_owned()));
        }
        Ok(())
    }
}

/// Transport configuration shared by the blocking and async clients.
#[derive(Debug, Clone)]
pub struct OpenApiConfig {
    /// Partner API key carried in `X-Api-Key`.
    pub api_key: String,
    /// Zalo App identifier carried in `X-Zalo-AppID`.
    pub zalo_app_id: String,
    /// Base URL for all endpoints. Defaults to the production domain.
    pub base_url: String,
    /// Optional proxy applied to every request while set.
    pub proxy: Option<ProxyConfig>,
}

impl OpenApiConfig {
    pub fn new(api_key: impl Into<String>, zalo_app_id: impl Into<String>) -> Self {
        Self {
            api_key: api_key.into(),
            zalo_app_id: zalo_app_id.into(),
            base_url: DOMAIN_PROD.to_string(),
            proxy: None,
        }
    }

    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    pub fn with_proxy(mut self, proxy: ProxyConfig) -> Self {
        self.proxy = Some(proxy);
        self
    }

    /// Credential and proxy checks performed at client construction,
    /// before any network activity.
    pub(crate) fn validate(&self) -> Result<(), OpenApiError> {
        if self.api_key.trim().is_empty() {
            return Err(OpenApiError::MissingApiKey);
        }
        if self.zalo_app_id.trim().is_empty() {
            return Err(OpenApiError::MissingAppId);
        }
        if let Some(proxy) = &self.proxy {
            proxy.validate()?;
        }
        Ok(())
    }

    /// Transport proxy for the current configuration, if one is set.
    ///
    /// Resolved at call time so proxy toggles apply to the next call.
    pub(crate) fn reqwest_proxy(&self) -> Result<Option<reqwest::Proxy>, OpenApiError> {
        let Some(proxy) = &self.proxy else {
            return Ok(None);
        };
        proxy.validate()?;
        let proxy = reqwest::Proxy::all(proxy.url())
            .map_err(|error| OpenApiError::InvalidProxy(error.to_string()))?;
        Ok(Some(proxy))
    }
}
