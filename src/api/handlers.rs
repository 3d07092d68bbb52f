//! HTTP API handlers.

use std::sync::Arc;

use axum::{
    extract::{rejection::PathRejection, Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use serde::Serialize;
use utoipa::ToSchema;

use crate::config::Config;

/// Application state shared with handlers.
#[derive(Debug, Clone)]
pub struct AppState {
    /// Configuration loaded at startup.
    pub config: Arc<Config>,
}

impl AppState {
    /// Create new app state around the loaded configuration.
    pub fn new(config: Config) -> Self {
        Self {
            config: Arc::new(config),
        }
    }

    /// Borrow the configuration.
    pub fn config(&self) -> &Config {
        &self.config
    }
}

/// Root status response.
#[derive(Debug, Serialize, ToSchema)]
pub struct RootResponse {
    /// Always "OK 🚀".
    pub message: String,
    /// Configured API version.
    pub version: String,
    /// Configured environment name.
    pub environment: String,
}

/// Health check response.
#[derive(Debug, Serialize, ToSchema)]
pub struct HealthResponse {
    /// Status: "healthy".
    pub status: String,
    /// Status detail: "OK".
    pub message: String,
}

/// Greeting response.
#[derive(Debug, Serialize, ToSchema)]
pub struct HelloResponse {
    /// The greeting.
    pub message: String,
}

/// Body returned for every error response.
#[derive(Debug, Serialize, ToSchema)]
pub struct ErrorResponse {
    /// Error detail.
    pub detail: String,
}

/// Root handler - version and environment of the running service.
#[utoipa::path(
    get,
    path = "/",
    tag = "root",
    responses((status = 200, description = "Service status", body = RootResponse))
)]
pub async fn root(State(state): State<AppState>) -> Json<RootResponse> {
    let config = state.config();

    Json(RootResponse {
        message: "OK 🚀".to_string(),
        version: config.api_version.clone(),
        environment: config.environment.clone(),
    })
}

/// Health check handler - always returns 200.
#[utoipa::path(
    get,
    path = "/health",
    tag = "health",
    responses((status = 200, description = "Service is healthy", body = HealthResponse))
)]
pub async fn health() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "healthy".to_string(),
        message: "OK".to_string(),
    })
}

/// Static greeting.
#[utoipa::path(
    get,
    path = "/hello",
    tag = "hello",
    responses((status = 200, description = "A greeting", body = HelloResponse))
)]
pub async fn hello() -> Json<HelloResponse> {
    Json(greeting(None))
}

/// Personalized greeting; the segment is echoed back unmodified.
#[utoipa::path(
    get,
    path = "/hello/{name}",
    tag = "hello",
    params(("name" = String, Path, description = "Name to greet")),
    responses(
        (status = 200, description = "A personalized greeting", body = HelloResponse),
        (status = 400, description = "Segment is not valid UTF-8", body = ErrorResponse)
    )
)]
pub async fn hello_name(
    name: Result<Path<String>, PathRejection>,
) -> Result<Json<HelloResponse>, (StatusCode, Json<ErrorResponse>)> {
    let Path(name) =
        name.map_err(|rejection| error_body(rejection.status(), rejection.body_text()))?;
    Ok(Json(greeting(Some(&name))))
}

/// Fallback for unmatched routes.
pub async fn not_found() -> impl IntoResponse {
    error_body(StatusCode::NOT_FOUND, "Not Found")
}

/// Fallback for a matched path hit with an unsupported method.
pub async fn method_not_allowed() -> impl IntoResponse {
    error_body(StatusCode::METHOD_NOT_ALLOWED, "Method Not Allowed")
}

fn error_body(status: StatusCode, detail: impl Into<String>) -> (StatusCode, Json<ErrorResponse>) {
    (
        status,
        Json(ErrorResponse {
            detail: detail.into(),
        }),
    )
}

fn greeting(name: Option<&str>) -> HelloResponse {
    HelloResponse {
        message: format!("Hello, {}!", name.unwrap_or("World")),
    }
}
