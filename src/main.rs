//! Hello service entry point.

use anyhow::Context;
use clap::{Parser, Subcommand};
use tracing::info;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use hello_service::config::{get_settings, Config};
use hello_service::metrics;
use hello_service::server::Server;
use hello_service::utils::{log_directive, shutdown_signal};

/// Minimal HTTP status, health and greeting service.
#[derive(Parser, Debug)]
#[command(name = "hello-service")]
#[command(about = "Serves status, health and greeting endpoints over HTTP")]
#[command(version)]
struct Args {
    /// Enable verbose logging.
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Run the HTTP server (default).
    Serve,

    /// Check configuration validity.
    CheckConfig,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Parse CLI arguments
    let args = Args::parse();

    match args.command {
        Some(Command::CheckConfig) => cmd_check_config(),
        Some(Command::Serve) | None => {
            // Load configuration once; a malformed PORT stops here
            let config = get_settings().context("failed to load configuration")?;

            init_logging(config, args.verbose);
            metrics::init_metrics();

            cmd_serve(config.clone()).await
        }
    }
}

/// Initialize logging: `RUST_LOG` wins, then `LOG_LEVEL`; JSON in production.
fn init_logging(config: &Config, verbose: bool) {
    let verbose = verbose || config.debug;
    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(log_directive(&config.tracing_level(), verbose)))
        .unwrap_or_else(|_| EnvFilter::new("info"));

    let json_logs = config.is_production();
    tracing_subscriber::registry()
        .with(json_logs.then(|| fmt::layer().json()))
        .with((!json_logs).then(|| fmt::layer()))
        .with(filter)
        .init();
}

/// Check configuration validity.
fn cmd_check_config() -> anyhow::Result<()> {
    check_config(get_settings())
}

/// Print the configuration check for an already attempted load.
fn check_config<E: std::fmt::Display>(loaded: Result<&Config, E>) -> anyhow::Result<()> {
    println!("======================================================================");
    println!("HELLO SERVICE - CONFIGURATION CHECK");
    println!("======================================================================");

    // Load configuration
    print!("Loading configuration... ");
    let config = match loaded {
        Ok(c) => {
            println!("OK");
            c
        }
        Err(e) => {
            println!("FAILED");
            println!("  Error: {}", e);
            return Err(anyhow::anyhow!("Configuration load failed"));
        }
    };

    print!("Validating configuration... ");
    if let Err(e) = config.validate() {
        println!("FAILED");
        println!("  Error: {}", e);
        return Err(anyhow::anyhow!("Configuration validation failed"));
    }
    println!("OK");

    println!("----------------------------------------------------------------------");
    println!("Configuration Summary:");
    println!("  Environment: {}", config.environment);
    println!("  Debug: {}", config.debug);
    println!("  Log Level: {}", config.log_level);
    println!("  API Prefix: {}", config.api_prefix);
    println!("  API Version: {}", config.api_version);
    println!("  CORS Origins: {}", config.cors_origins.join(", "));
    println!("  Listen Address: {}", config.bind_address());
    println!("======================================================================");
    println!("CONFIGURATION CHECK PASSED");
    println!("======================================================================");

    Ok(())
}

/// Run the HTTP server until a shutdown signal arrives.
async fn cmd_serve(config: Config) -> anyhow::Result<()> {
    info!("Environment: {}", config.environment);
    info!("API version: {}", config.api_version);
    info!("API prefix: {}", config.api_prefix);
    if config.debug {
        info!("Debug mode enabled");
    }

    let prefix = config.route_prefix().to_owned();
    let bind_address = config.bind_address();

    let server = Server::bind(config)
        .await
        .with_context(|| format!("failed to start server on {}", bind_address))?;

    info!("API docs at {}/docs, {}/redoc and {}/swagger-ui", prefix, prefix, prefix);

    server.serve(shutdown_signal()).await?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn check_config_reports_load_failure() {
        let loaded = Config::from_vars(vec![("PORT".to_string(), "eighty".to_string())]);

        assert!(check_config(loaded.as_ref()).is_err());
    }

    #[test]
    fn check_config_reports_invalid_prefix() {
        let config = Config {
            api_prefix: "api".to_string(),
            ..Config::default()
        };

        assert!(check_config(Ok::<_, envy::Error>(&config)).is_err());
    }

    #[test]
    fn check_config_passes_defaults() {
        assert!(check_config(Ok::<_, envy::Error>(&Config::default())).is_ok());
    }
}
