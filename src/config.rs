//! Application configuration loaded from environment variables.

use once_cell::sync::OnceCell;
use serde::{Deserialize, Deserializer};

use crate::error::{Result, ServiceError};

static SETTINGS: OnceCell<Config> = OnceCell::new();

/// Application configuration loaded from environment variables.
///
/// Every field has a default, so an empty environment yields a usable
/// development configuration. Values are never mutated after loading.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Config {
    // === Application ===
    /// Deployment environment name (development, testing, production, ...).
    #[serde(default = "default_environment")]
    pub environment: String,

    /// Debug flag; true only for a case-insensitive "true".
    #[serde(default, deserialize_with = "deserialize_flag")]
    pub debug: bool,

    /// Log level name (DEBUG, INFO, WARNING, ...).
    #[serde(default = "default_log_level")]
    pub log_level: String,

    // === API ===
    /// Path prefix every API route is mounted under.
    #[serde(default = "default_api_prefix")]
    pub api_prefix: String,

    /// Version reported by the root endpoint and the OpenAPI document.
    #[serde(default = "default_api_version")]
    pub api_version: String,

    // === CORS ===
    /// Allowed cross-origin sources, comma-separated in the environment.
    #[serde(default = "default_cors_origins")]
    pub cors_origins: Vec<String>,

    // === Server ===
    /// Listen host.
    #[serde(default = "default_host")]
    pub host: String,

    /// Listen port.
    #[serde(default = "default_port")]
    pub port: u16,
}

fn default_environment() -> String {
    "development".to_string()
}

fn default_log_level() -> String {
    "INFO".to_string()
}

fn default_api_prefix() -> String {
    "/api".to_string()
}

fn default_api_version() -> String {
    "1.0.0".to_string()
}

fn default_cors_origins() -> Vec<String> {
    vec!["*".to_string()]
}

fn default_host() -> String {
    "0.0.0.0".to_string()
}

fn default_port() -> u16 {
    8080
}

fn deserialize_flag<'de, D>(deserializer: D) -> std::result::Result<bool, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = String::deserialize(deserializer)?;
    Ok(raw.eq_ignore_ascii_case("true"))
}

impl Default for Config {
    fn default() -> Self {
        Self {
            environment: default_environment(),
            debug: false,
            log_level: default_log_level(),
            api_prefix: default_api_prefix(),
            api_version: default_api_version(),
            cors_origins: default_cors_origins(),
            host: default_host(),
            port: default_port(),
        }
    }
}

impl Config {
    /// Load configuration from environment, reading .env file first.
    pub fn load() -> std::result::Result<Self, envy::Error> {
        dotenvy::dotenv().ok();
        envy::from_env()
    }

    /// Build configuration from explicit `(NAME, value)` pairs.
    pub fn from_vars<I>(vars: I) -> std::result::Result<Self, envy::Error>
    where
        I: IntoIterator<Item = (String, String)>,
    {
        envy::from_iter(vars)
    }

    /// Check that the configuration can be served.
    pub fn validate(&self) -> Result<()> {
        if !self.api_prefix.is_empty() && !self.api_prefix.starts_with('/') {
            return Err(ServiceError::InvalidConfig(format!(
                "API_PREFIX must start with '/', got {:?}",
                self.api_prefix
            )));
        }

        if self.host.is_empty() {
            return Err(ServiceError::InvalidConfig("HOST must not be empty".to_string()));
        }

        Ok(())
    }

    /// Check if running in production environment.
    pub fn is_production(&self) -> bool {
        self.environment == "production"
    }

    /// Check if running in development environment.
    pub fn is_development(&self) -> bool {
        self.environment == "development"
    }

    /// API prefix without a trailing slash; `"/"` collapses to `""`.
    pub fn route_prefix(&self) -> &str {
        self.api_prefix.trim_end_matches('/')
    }

    /// Whether the wildcard origin is configured.
    pub fn allows_any_origin(&self) -> bool {
        self.cors_origins.iter().any(|origin| origin == "*")
    }

    /// `host:port` as given in the environment.
    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }

    /// Log level as a `tracing` directive.
    pub fn tracing_level(&self) -> String {
        match self.log_level.to_lowercase().as_str() {
            "warning" => "warn".to_string(),
            "critical" | "fatal" => "error".to_string(),
            other => other.to_string(),
        }
    }
}

/// Process-wide configuration, loaded on first call and cached afterwards.
pub fn get_settings() -> std::result::Result<&'static Config, envy::Error> {
    SETTINGS.get_or_try_init(Config::load)
}
