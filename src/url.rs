/// Production domain for the Zalo Mini App Open API.
pub const DOMAIN_PROD: &str = "https://openapi.mini.zalo.me";

/// Mini-apps collection path.
pub const APPS: &str = "/apps";
/// Deploy-version suffix, appended after `/apps/{id}`.
pub const UPLOAD: &str = "/upload";
/// Version-listing suffix, appended after `/apps/{id}`.
pub const VERSIONS: &str = "/versions";
/// Review-request suffix, appended after `/apps/{id}`.
pub const REQUEST_PUBLISH: &str = "/request-publish";
/// Direct-publish suffix, appended after `/apps/{id}`.
pub const PUBLISH: &str = "/publish";

/// Normalize a base URL for endpoint construction.
///
/// Rules:
/// 1) empty/whitespace input falls back to the production domain
/// 2) trailing slashes are trimmed so path suffixes join cleanly
pub fn normalize_base_url(input: &str) -> String {
    let base = if input.trim().is_empty() {
        DOMAIN_PROD
    } else {
        input.trim()
    };
    base.trim_end_matches('/').to_string()
}

/// Build the `{base}/apps` URL for app creation and listing.
pub fn apps_url(base: &str) -> String {
    format!("{}{APPS}", normalize_base_url(base))
}

/// Build the `{base}/apps/{id}/upload` URL for deploying a new version.
pub fn upload_url(base: &str, mini_app_id: &str) -> String {
    format!("{}{APPS}/{mini_app_id}{UPLOAD}", normalize_base_url(base))
}

/// Build the `{base}/apps/{id}/versions` URL for version listing.
pub fn versions_url(base: &str, mini_app_id: &str) -> String {
    format!("{}{APPS}/{mini_app_id}{VERSIONS}", normalize_base_url(base))
}

/// Build the `{base}/apps/{id}/request-publish` URL for review submission.
pub fn request_publish_url(base: &str, mini_app_id: &str) -> String {
    format!(
        "{}{APPS}/{mini_app_id}{REQUEST_PUBLISH}",
        normalize_base_url(base)
    )
}

/// Build the `{base}/apps/{id}/publish` URL for publishing a reviewed version.
pub fn publish_url(base: &str, mini_app_id: &str) -> String {
    format!("{}{APPS}/{mini_app_id}{PUBLISH}", normalize_base_url(base))
}
