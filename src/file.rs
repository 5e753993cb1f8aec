use std::fs;
use std::path::Path;

use base64::{engine::general_purpose, Engine as _};
use serde_json::{Map, Value};

use crate::error::OpenApiError;

/// Rewrite the `file` entry of a deploy payload as standard base64.
///
/// - entry absent: payload returned unchanged
/// - string naming an existing file: replaced with base64 of its contents
/// - string that is not an existing path: left unchanged
/// - byte array (raw artifact content): replaced with base64 of the bytes
///
/// The non-path string passthrough matches the service contract for
/// pre-encoded values and remote references.
pub fn encode_deploy_file(mut payload: Map<String, Value>) -> Result<Map<String, Value>, OpenApiError> {
    let Some(file_value) = payload.get("file") else {
        return Ok(payload);
    };

    let encoded = match file_value {
        Value::String(text) => {
            let path = Path::new(text);
            if !path.is_file() {
                return Ok(payload);
            }
            let bytes = fs::read(path)?;
            general_purpose::STANDARD.encode(bytes)
        }
        // The byte-array shape is how raw artifact content serializes;
        // any other array is not a file reference and passes through.
        Value::Array(items) => match byte_array(items) {
            Some(bytes) => general_purpose::STANDARD.encode(bytes),
            None => return Ok(payload),
        },
        _ => return Ok(payload),
    };

    payload.insert("file".to_owned(), Value::String(encoded));
    Ok(payload)
}

fn byte_array(items: &[Value]) -> Option<Vec<u8>> {
    items
        .iter()
        .map(|item| {
            item.as_u64()
                .and_then(|value| u8::try_from(value).ok())
        })
        .collect()
}
