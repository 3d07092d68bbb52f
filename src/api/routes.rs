//! HTTP API route definitions.

use axum::{middleware, routing::get, Router};
use tower_http::trace::TraceLayer;
use utoipa_redoc::{Redoc, Servable as _};
use utoipa_scalar::{Scalar, Servable as _};
use utoipa_swagger_ui::SwaggerUi;

use super::docs::api_doc;
use super::handlers::{
    health, hello, hello_name, method_not_allowed, not_found, root, AppState,
};
use super::middleware::{cors_layer, track_requests};
use crate::error::Result;

/// Create the service router.
///
/// `/` is always unprefixed; the API routes and the documentation pages live
/// under the configured prefix: Scalar at `docs`, ReDoc at `redoc` and
/// Swagger UI at `swagger-ui`, all reading `openapi.json`.
pub fn create_router(state: AppState) -> Result<Router> {
    let config = state.config();
    config.validate()?;

    let prefix = config.route_prefix().to_owned();
    let doc = api_doc(config);
    let cors = cors_layer(config)?;

    let api = Router::new()
        .route("/health", get(health))
        .route("/hello", get(hello))
        .route("/hello/:name", get(hello_name));

    let router = Router::new().route("/", get(root));
    let router = if prefix.is_empty() {
        router.merge(api)
    } else {
        router.nest(&prefix, api)
    };

    let router = router
        .method_not_allowed_fallback(method_not_allowed)
        .route_layer(middleware::from_fn(track_requests))
        .merge(
            SwaggerUi::new(format!("{prefix}/swagger-ui"))
                .url(format!("{prefix}/openapi.json"), doc.clone()),
        )
        .merge(Scalar::with_url(format!("{prefix}/docs"), doc.clone()))
        .merge(Redoc::with_url(format!("{prefix}/redoc"), doc))
        .fallback(not_found)
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .with_state(state);

    Ok(router)
}
