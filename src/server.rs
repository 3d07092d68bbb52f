//! HTTP server lifecycle: build the router, bind, serve until shutdown.

use std::future::Future;
use std::net::SocketAddr;

use axum::Router;
use tokio::net::TcpListener;
use tracing::info;

use crate::api::{create_router, AppState};
use crate::config::Config;
use crate::error::Result;

/// A router bound to its listener, ready to serve.
#[derive(Debug)]
pub struct Server {
    router: Router,
    listener: TcpListener,
}

impl Server {
    /// Build the router and bind the configured address.
    ///
    /// The router is built first, so an invalid configuration never binds
    /// the port.
    pub async fn bind(config: Config) -> Result<Self> {
        let host = config.host.clone();
        let port = config.port;

        let router = create_router(AppState::new(config))?;
        let listener = TcpListener::bind((host.as_str(), port)).await?;

        Ok(Self { router, listener })
    }

    /// Address actually bound (resolves port 0).
    pub fn local_addr(&self) -> Result<SocketAddr> {
        Ok(self.listener.local_addr()?)
    }

    /// Serve requests until `shutdown` resolves.
    pub async fn serve<F>(self, shutdown: F) -> Result<()>
    where
        F: Future<Output = ()> + Send + 'static,
    {
        info!("HTTP server listening on {}", self.local_addr()?);

        axum::serve(self.listener, self.router)
            .with_graceful_shutdown(shutdown)
            .await?;

        info!("HTTP server stopped");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ServiceError;

    fn local_config() -> Config {
        Config {
            host: "127.0.0.1".to_string(),
            port: 0,
            ..Config::default()
        }
    }

    #[tokio::test]
    async fn invalid_config_fails_before_binding() {
        // An unbindable host would surface as Io if binding ran first
        let config = Config {
            api_prefix: "api".to_string(),
            host: "256.0.0.1".to_string(),
            ..local_config()
        };

        let result = Server::bind(config).await;

        assert!(matches!(result, Err(ServiceError::InvalidConfig(_))));
    }

    #[tokio::test]
    async fn bind_error_is_io() {
        let config = Config {
            host: "256.0.0.1".to_string(),
            ..local_config()
        };

        let result = Server::bind(config).await;

        assert!(matches!(result, Err(ServiceError::Io(_))));
    }

    #[tokio::test]
    async fn binds_ephemeral_port_and_shuts_down() {
        let server = Server::bind(local_config()).await.unwrap();
        let addr = server.local_addr().unwrap();

        assert!(addr.ip().is_loopback());
        assert_ne!(addr.port(), 0);

        server.serve(async {}).await.unwrap();
    }
}
