//! End-to-end tests driving the full router in-process.

use axum::body::{to_bytes, Body};
use axum::http::{header, Request, StatusCode};
use axum::Router;
use pretty_assertions::assert_eq;
use serde_json::{json, Value};
use tower::ServiceExt;

use hello_service::api::{create_router, AppState};
use hello_service::config::Config;

fn config_from(pairs: &[(&str, &str)]) -> Config {
    Config::from_vars(
        pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string())),
    )
    .expect("configuration should load")
}

fn app_with(pairs: &[(&str, &str)]) -> Router {
    create_router(AppState::new(config_from(pairs))).expect("router should build")
}

async fn get(app: Router, uri: &str) -> (StatusCode, axum::http::HeaderMap, Vec<u8>) {
    let response = app
        .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
        .await
        .unwrap();
    let status = response.status();
    let headers = response.headers().clone();
    let body = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    (status, headers, body.to_vec())
}

async fn get_json(app: Router, uri: &str) -> (StatusCode, Value) {
    let (status, _, body) = get(app, uri).await;
    (status, serde_json::from_slice(&body).unwrap())
}

#[tokio::test]
async fn production_scenario_reports_environment() {
    let config = config_from(&[("PORT", "9999"), ("ENVIRONMENT", "production")]);
    assert_eq!(config.port, 9999);

    let app = create_router(AppState::new(config)).unwrap();
    let (status, body) = get_json(app, "/").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(
        body,
        json!({"message": "OK 🚀", "version": "1.0.0", "environment": "production"})
    );
}

#[tokio::test]
async fn root_matches_configured_version() {
    let app = app_with(&[("API_VERSION", "4.2.0"), ("ENVIRONMENT", "testing")]);

    let (_, body) = get_json(app, "/").await;

    assert_eq!(body["version"], "4.2.0");
    assert_eq!(body["environment"], "testing");
}

#[tokio::test]
async fn greeting_echoes_segments_unmodified() {
    let app = app_with(&[]);

    for name in ["Alice", "bob-42", "a.b_c~d"] {
        let (status, body) = get_json(app.clone(), &format!("/api/hello/{name}")).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["message"], format!("Hello, {name}!"));
    }
}

#[tokio::test]
async fn greeting_decodes_percent_encoding() {
    let (status, body) = get_json(app_with(&[]), "/api/hello/Jane%20Doe").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!({"message": "Hello, Jane Doe!"}));
}

#[tokio::test]
async fn greeting_without_segment_is_world() {
    let (status, body) = get_json(app_with(&[]), "/api/hello").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!({"message": "Hello, World!"}));
}

#[tokio::test]
async fn extra_segments_are_not_found() {
    let (status, _, _) = get(app_with(&[]), "/api/hello/a/b").await;

    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn custom_prefix_moves_api_routes() {
    let app = app_with(&[("API_PREFIX", "/v2")]);

    let (status, body) = get_json(app.clone(), "/v2/health").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!({"status": "healthy", "message": "OK"}));

    let (status, _, _) = get(app.clone(), "/api/health").await;
    assert_eq!(status, StatusCode::NOT_FOUND);

    let (status, _) = get_json(app, "/").await;
    assert_eq!(status, StatusCode::OK);
}

#[tokio::test]
async fn docs_page_is_served_under_prefix() {
    let (status, headers, body) = get(app_with(&[]), "/api/docs").await;

    assert_eq!(status, StatusCode::OK);
    assert!(headers
        .get(header::CONTENT_TYPE)
        .unwrap()
        .to_str()
        .unwrap()
        .starts_with("text/html"));
    assert!(String::from_utf8_lossy(&body).contains("scalar"));
}

#[tokio::test]
async fn docs_page_follows_empty_prefix() {
    let (status, _, _) = get(app_with(&[("API_PREFIX", "")]), "/docs").await;

    assert_eq!(status, StatusCode::OK);
}

#[tokio::test]
async fn swagger_ui_is_served_under_prefix() {
    let (status, _, body) = get(app_with(&[]), "/api/swagger-ui/").await;

    assert_eq!(status, StatusCode::OK);
    assert!(String::from_utf8_lossy(&body).contains("swagger"));
}

#[tokio::test]
async fn redoc_is_served_under_prefix() {
    let (status, headers, body) = get(app_with(&[]), "/api/redoc").await;

    assert_eq!(status, StatusCode::OK);
    assert!(headers
        .get(header::CONTENT_TYPE)
        .unwrap()
        .to_str()
        .unwrap()
        .starts_with("text/html"));
    assert!(String::from_utf8_lossy(&body).contains("redoc"));
}

#[tokio::test]
async fn openapi_document_lists_prefixed_routes() {
    let app = app_with(&[("API_VERSION", "9.9.9")]);

    let (status, doc) = get_json(app, "/api/openapi.json").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(doc["info"]["version"], "9.9.9");
    assert_eq!(doc["info"]["title"], "Hello Service");
    for path in ["/", "/api/health", "/api/hello", "/api/hello/{name}"] {
        assert!(doc["paths"].get(path).is_some(), "{path} missing from document");
    }
}

#[test]
fn malformed_port_fails_configuration() {
    let result = Config::from_vars(vec![("PORT".to_string(), "not-a-port".to_string())]);

    assert!(result.is_err());
}
