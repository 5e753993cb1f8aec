use std::io::Write;

use serde_json::{json, Value};
use tempfile::NamedTempFile;
use zmp_openapi::{encode_deploy_file, to_payload, DeployApp, FileSource};

#[test]
fn raw_bytes_become_standard_base64() {
    let payload = to_payload(&json!({
        "miniAppId": "123",
        "file": b"ZIPDATA".to_vec(),
        "name": "v1",
    }))
    .expect("payload");

    let encoded = encode_deploy_file(payload).expect("encode");
    assert_eq!(encoded["file"], Value::String("WklQREFUQQ==".to_owned()));
    // Sibling fields are untouched.
    assert_eq!(encoded["miniAppId"], Value::String("123".to_owned()));
    assert_eq!(encoded["name"], Value::String("v1".to_owned()));
}

#[test]
fn existing_file_path_is_read_and_encoded() {
    let mut artifact = NamedTempFile::new().expect("temp file");
    artifact.write_all(b"ZIPDATA").expect("write artifact");

    let deploy = DeployApp {
        mini_app_id: "123".to_owned(),
        file: FileSource::Path(artifact.path().to_path_buf()),
        name: "v1.0.0".to_owned(),
        description: "Initial release".to_owned(),
    };

    let encoded = encode_deploy_file(to_payload(&deploy).expect("payload")).expect("encode");
    assert_eq!(encoded["file"], Value::String("WklQREFUQQ==".to_owned()));
}

#[test]
fn path_string_to_existing_file_is_encoded() {
    let mut artifact = NamedTempFile::new().expect("temp file");
    artifact.write_all(b"ZIPDATA").expect("write artifact");
    let path = artifact.path().to_string_lossy().into_owned();

    let payload = to_payload(&json!({"file": path})).expect("payload");
    let encoded = encode_deploy_file(payload).expect("encode");
    assert_eq!(encoded["file"], Value::String("WklQREFUQQ==".to_owned()));
}

#[test]
fn non_path_string_is_left_unchanged() {
    let payload = to_payload(&json!({"file": "not-a-real-path.zip"})).expect("payload");
    let encoded = encode_deploy_file(payload).expect("encode");
    assert_eq!(
        encoded["file"],
        Value::String("not-a-real-path.zip".to_owned())
    );
}

#[test]
fn absent_file_entry_returns_payload_unchanged() {
    let payload = to_payload(&json!({"miniAppId": "123", "name": "v1"})).expect("payload");
    let encoded = encode_deploy_file(payload.clone()).expect("encode");
    assert_eq!(encoded, payload);
}

#[test]
fn empty_bytes_encode_to_empty_string() {
    let payload = to_payload(&json!({"file": Vec::<u8>::new()})).expect("payload");
    let encoded = encode_deploy_file(payload).expect("encode");
    assert_eq!(encoded["file"], Value::String(String::new()));
}
