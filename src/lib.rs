//! Minimal HTTP status, health and greeting service.
//!
//! The service answers a handful of JSON endpoints and reports metadata taken
//! from its environment:
//!
//! ```text
//! GET /                    {"message":"OK 🚀","version":"1.0.0","environment":"development"}
//! GET /api/health          {"status":"healthy","message":"OK"}
//! GET /api/hello           {"message":"Hello, World!"}
//! GET /api/hello/{name}    {"message":"Hello, {name}!"}
//! ```
//!
//! The `/api` prefix is configurable through `API_PREFIX`; interactive
//! documentation is served at `<prefix>/docs` and `<prefix>/redoc`.
//!
//! # Modules
//!
//! - [`config`]: Configuration loading from environment
//! - [`error`]: Unified error types
//! - [`api`]: HTTP handlers, routes and documentation
//! - [`metrics`]: Request metrics
//! - [`server`]: Server lifecycle
//! - [`utils`]: Utility functions

pub mod api;
pub mod config;
pub mod error;
pub mod metrics;
pub mod server;
pub mod utils;

pub use config::Config;
pub use error::{Result, ServiceError};
