use std::path::PathBuf;

use serde::ser::Serializer;
use serde::Serialize;
use serde_json::{Map, Value};

use crate::error::OpenApiError;

/// Mini-app information for app creation (`POST /apps`).
///
/// Field lengths and allowed characters are validated by the remote
/// service, not by the SDK.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AppInfo {
    #[serde(rename = "appName")]
    pub app_name: String,
    #[serde(rename = "appDescription")]
    pub app_description: String,
    #[serde(rename = "appCategory")]
    pub app_category: String,
    #[serde(rename = "appLogoUrl")]
    pub app_logo_url: String,
    /// Allow public display on Zalo and the Mini App Store.
    pub browsable: bool,
}

/// Pagination window for app or version listing.
///
/// `mini_app_id` is only meaningful for version listing, where it also
/// selects the app in the request path.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AppSlice {
    #[serde(rename = "miniAppId", skip_serializing_if = "Option::is_none")]
    pub mini_app_id: Option<String>,
    pub offset: u32,
    pub limit: u32,
}

impl AppSlice {
    pub fn new(offset: u32, limit: u32) -> Self {
        Self {
            mini_app_id: None,
            offset,
            limit,
        }
    }

    pub fn with_mini_app_id(mut self, mini_app_id: impl Into<String>) -> Self {
        self.mini_app_id = Some(mini_app_id.into());
        self
    }
}

/// Deployment request for uploading a new version (`POST /apps/{id}/upload`).
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DeployApp {
    #[serde(rename = "miniAppId")]
    pub mini_app_id: String,
    /// Build artifact in zip format. Rewritten to base64 by
    /// [`encode_deploy_file`](crate::file::encode_deploy_file) before
    /// transmission.
    pub file: FileSource,
    /// Version name.
    pub name: String,
    /// Version description.
    pub description: String,
}

/// Publish request shared by review submission and direct publish.
///
/// Direct publish ignores `description`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PublishApp {
    #[serde(rename = "miniAppId")]
    pub mini_app_id: String,
    #[serde(rename = "versionId")]
    pub version_id: i64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

/// Reference to a deploy artifact.
///
/// `Path` and `Text` serialize as JSON strings, `Bytes` as a JSON byte
/// array; the file encoder replaces all three with a base64 string. A
/// `Text` value that does not name an existing file is passed through
/// untouched, as an opaque pre-encoded value or remote reference.
#[derive(Debug, Clone, PartialEq)]
pub enum FileSource {
    /// Filesystem path to the artifact.
    ///
    /// The path is serialized as a UTF-8 string. A path whose name is
    /// not valid UTF-8 loses its original spelling in the JSON payload
    /// and will be passed through unencoded instead of read; use
    /// [`FileSource::Bytes`] with the file contents for such paths.
    Path(PathBuf),
    /// Raw artifact content.
    Bytes(Vec<u8>),
    /// Path string or opaque pre-encoded value.
    Text(String),
}

impl Serialize for FileSource {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        match self {
            Self::Path(path) => serializer.serialize_str(&path.to_string_lossy()),
            Self::Bytes(bytes) => serializer.collect_seq(bytes.iter()),
            Self::Text(text) => serializer.serialize_str(text),
        }
    }
}

impl From<PathBuf> for FileSource {
    fn from(path: PathBuf) -> Self {
        Self::Path(path)
    }
}

impl From<Vec<u8>> for FileSource {
    fn from(bytes: Vec<u8>) -> Self {
        Self::Bytes(bytes)
    }
}

impl From<String> for FileSource {
    fn from(text: String) -> Self {
        Self::Text(text)
    }
}

impl From<&str> for FileSource {
    fn from(text: &str) -> Self {
        Self::Text(text.to_owned())
    }
}

/// Convert a request value into a wire payload map.
///
/// Typed request models land here with wire field names and unset
/// optional fields already dropped. A raw map built with wire names
/// passes through unchanged. Anything that does not serialize to a
/// JSON object is rejected before any network activity.
pub fn to_payload<T: Serialize>(value: &T) -> Result<Map<String, Value>, OpenApiError> {
    match serde_json::to_value(value)? {
        Value::Object(map) => Ok(map),
        other => Err(OpenApiError::InvalidPayloadType(value_type_name(&other))),
    }
}

pub(crate) fn value_type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}
