//! OpenAPI document served behind the Swagger UI and ReDoc pages.

use utoipa::openapi::OpenApi as OpenApiDocument;
use utoipa::OpenApi;

use super::handlers::{self, ErrorResponse, HealthResponse, HelloResponse, RootResponse};
use crate::config::Config;

/// Unprefixed routes.
#[derive(OpenApi)]
#[openapi(
    info(
        title = "Hello Service",
        description = "Status, health and greeting endpoints"
    ),
    paths(handlers::root),
    components(schemas(RootResponse, ErrorResponse)),
    tags((name = "root", description = "Service status"))
)]
pub struct RootApi;

/// Routes mounted under the API prefix.
#[derive(OpenApi)]
#[openapi(
    paths(handlers::health, handlers::hello, handlers::hello_name),
    components(schemas(HealthResponse, HelloResponse)),
    tags(
        (name = "health", description = "Health checks"),
        (name = "hello", description = "Greetings")
    )
)]
pub struct PrefixedApi;

/// Build the document for a configuration: API paths carry the prefix and
/// the reported version is the configured one.
pub fn api_doc(config: &Config) -> OpenApiDocument {
    let mut doc = RootApi::openapi().nest(config.route_prefix(), PrefixedApi::openapi());
    doc.info.version = config.api_version.clone();
    doc
}
