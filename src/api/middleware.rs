//! Cross-origin policy and request metrics middleware.

use std::time::Instant;

use axum::{
    extract::{MatchedPath, Request},
    http::HeaderValue,
    middleware::Next,
    response::Response,
};
use tower_http::cors::{AllowHeaders, AllowMethods, AllowOrigin, CorsLayer};
use tracing::debug;

use crate::config::Config;
use crate::error::{Result, ServiceError};
use crate::metrics;

/// CORS layer for the configured origins.
///
/// Credentials are allowed, which rules out literal `*` responses, so a
/// wildcard origin and all methods/headers are granted by mirroring the
/// request.
pub fn cors_layer(config: &Config) -> Result<CorsLayer> {
    let origin = if config.allows_any_origin() {
        AllowOrigin::mirror_request()
    } else {
        let origins = config
            .cors_origins
            .iter()
            .map(|origin| {
                HeaderValue::from_str(origin).map_err(|source| ServiceError::InvalidOrigin {
                    origin: origin.clone(),
                    source,
                })
            })
            .collect::<Result<Vec<_>>>()?;
        AllowOrigin::list(origins)
    };

    Ok(CorsLayer::new()
        .allow_origin(origin)
        .allow_methods(AllowMethods::mirror_request())
        .allow_headers(AllowHeaders::mirror_request())
        .allow_credentials(true))
}

/// Record count and latency of every routed request.
pub async fn track_requests(request: Request, next: Next) -> Response {
    let start = Instant::now();
    let route = request
        .extensions()
        .get::<MatchedPath>()
        .map(|path| path.as_str().to_owned())
        .unwrap_or_else(|| "unmatched".to_owned());

    let response = next.run(request).await;

    let status = response.status().as_u16();
    metrics::record_http_request(start, &route, status);
    debug!(route = %route, status, "request handled");

    response
}
