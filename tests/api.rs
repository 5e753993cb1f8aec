//! Low-level function surface: same paths as the facades, no partner
//! headers, caller-chosen domain.

use serde_json::{json, Map, Value};
use wiremock::matchers::{body_json, method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};
use zmp_openapi::api;

fn object(value: Value) -> Map<String, Value> {
    match value {
        Value::Object(map) => map,
        other => panic!("expected object, got {other}"),
    }
}

#[tokio::test]
async fn create_app_posts_to_apps() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/apps"))
        .and(body_json(json!({"appName": "Foo", "browsable": true})))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(json!({"error": 0, "appId": "123"})),
        )
        .mount(&server)
        .await;

    let data = object(json!({"appName": "Foo", "browsable": true}));
    let response = api::create_app(&data, &server.uri()).await.expect("create");
    assert_eq!(response["appId"], json!("123"));
}

#[tokio::test]
async fn get_apps_sends_offset_and_limit() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/apps"))
        .and(query_param("offset", "5"))
        .and(query_param("limit", "20"))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(json!({"error": 0, "total": 0, "apps": []})),
        )
        .mount(&server)
        .await;

    let response = api::get_apps(5, 20, &server.uri()).await.expect("list");
    assert_eq!(response["error"], json!(0));
}

#[tokio::test]
async fn deploy_app_posts_data_verbatim() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/apps/123/upload"))
        .and(body_json(json!({"file": "WklQREFUQQ==", "name": "v1"})))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(json!({"error": 0, "versionId": 789})),
        )
        .mount(&server)
        .await;

    let data = object(json!({"file": "WklQREFUQQ==", "name": "v1"}));
    let response = api::deploy_app("123", &data, &server.uri())
        .await
        .expect("deploy");
    assert_eq!(response["versionId"], json!(789));
}

#[tokio::test]
async fn get_versions_app_routes_by_id() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/apps/123/versions"))
        .and(query_param("offset", "0"))
        .and(query_param("limit", "10"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(json!({"error": 0, "total": 3, "versions": []})),
        )
        .mount(&server)
        .await;

    let response = api::get_versions_app("123", 0, 10, &server.uri())
        .await
        .expect("versions");
    assert_eq!(response["total"], json!(3));
}

#[tokio::test]
async fn request_publish_builds_version_payload() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/apps/123/request-publish"))
        .and(body_json(json!({"versionId": 789, "description": "ready"})))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"error": 0})))
        .mount(&server)
        .await;

    let response = api::request_publish("123", 789, Some("ready"), &server.uri())
        .await
        .expect("request publish");
    assert_eq!(response["error"], json!(0));
}

#[tokio::test]
async fn request_publish_omits_absent_description() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/apps/123/request-publish"))
        .and(body_json(json!({"versionId": 789})))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"error": 0})))
        .mount(&server)
        .await;

    let response = api::request_publish("123", 789, None, &server.uri())
        .await
        .expect("request publish");
    assert_eq!(response["error"], json!(0));
}

#[tokio::test]
async fn publish_builds_version_payload() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/apps/123/publish"))
        .and(body_json(json!({"versionId": 789})))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"error": 0})))
        .mount(&server)
        .await;

    let response = api::publish("123", 789, &server.uri())
        .await
        .expect("publish");
    assert_eq!(response["error"], json!(0));
}

#[tokio::test]
async fn non_2xx_fails_with_status() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/apps"))
        .respond_with(ResponseTemplate::new(404).set_body_string("missing"))
        .mount(&server)
        .await;

    let error = api::get_apps(0, 10, &server.uri())
        .await
        .expect_err("404 must fail");
    assert_eq!(error.status().map(|status| status.as_u16()), Some(404));
}

#[tokio::test(flavor = "multi_thread")]
async fn blocking_variants_share_path_construction() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/apps/123/versions"))
        .and(query_param("offset", "0"))
        .and(query_param("limit", "10"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(json!({"error": 0, "total": 3, "versions": []})),
        )
        .mount(&server)
        .await;
    Mock::given(method("POST"))
        .and(path("/apps/123/publish"))
        .and(body_json(json!({"versionId": 789})))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"error": 0})))
        .mount(&server)
        .await;

    let uri = server.uri();
    let (versions, published) = tokio::task::spawn_blocking(move || {
        let versions = api::blocking::get_versions_app("123", 0, 10, &uri);
        let published = api::blocking::publish("123", 789, &uri);
        (versions, published)
    })
    .await
    .expect("join");

    assert_eq!(versions.expect("versions")["total"], json!(3));
    assert_eq!(published.expect("publish")["error"], json!(0));
}
