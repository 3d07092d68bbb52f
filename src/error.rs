//! Unified error types for the service.

use axum::http::header::InvalidHeaderValue;
use thiserror::Error;

/// Unified error type for the service.
///
/// Every variant is a startup failure; request handling itself cannot fail.
#[derive(Error, Debug)]
pub enum ServiceError {
    /// Configuration loading error (e.g. a non-numeric `PORT`).
    #[error("configuration error: {0}")]
    Config(#[from] envy::Error),

    /// Configuration loaded but cannot be served.
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),

    /// A configured CORS origin is not a valid header value.
    #[error("invalid CORS origin {origin:?}: {source}")]
    InvalidOrigin {
        /// The rejected origin.
        origin: String,
        /// Underlying header error.
        #[source]
        source: InvalidHeaderValue,
    },

    /// IO error (binding the listener, serving).
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
}

/// Convenient Result type alias.
pub type Result<T> = std::result::Result<T, ServiceError>;
