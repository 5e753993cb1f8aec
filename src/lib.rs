//! Zalo Mini App Open API SDK for solution partners.
//!
//! This crate wraps the partner REST endpoints for managing mini-apps:
//! creating apps, listing apps, deploying build artifacts, listing
//! versions, and requesting or performing publication. It marshals
//! typed request values into JSON-over-HTTPS calls and returns decoded
//! response bodies verbatim; interpreting the service's `error` and
//! `message` fields is left to the caller.
//!
//! Three call surfaces share one routing layer:
//! - [`OpenApiClient`]: async client with partner headers and optional
//!   proxy support
//! - [`blocking::OpenApiClient`]: the same contract in blocking form
//! - [`api`]: stateless low-level functions without header injection
//!
//! ```no_run
//! use zmp_openapi::{AppSlice, OpenApiClient, OpenApiConfig};
//!
//! # async fn run() -> Result<(), zmp_openapi::OpenApiError> {
//! let client = OpenApiClient::new(OpenApiConfig::new("api-key", "zalo-app-id"))?;
//! let apps = client.get_mini_apps(&AppSlice::new(0, 10)).await?;
//! println!("{apps}");
//! # Ok(())
//! # }
//! ```

pub mod api;
pub mod blocking;
pub mod category;
pub mod client;
pub mod config;
pub mod error;
pub mod file;
pub mod headers;
pub mod payload;
pub mod routes;
pub mod url;

pub use client::OpenApiClient;
pub use config::{OpenApiConfig, ProxyConfig};
pub use error::OpenApiError;
pub use file::encode_deploy_file;
pub use payload::{to_payload, AppInfo, AppSlice, DeployApp, FileSource, PublishApp};
pub use url::DOMAIN_PROD;
