//! TimeSync - time-entry bridge to a Notion workspace
//!
//! Main entry point for the HTTP server.

use std::sync::Arc;

use anyhow::Context;
use timesync_api::utils::logging::init_tracing;
use timesync_api::{router, AppContext};
use timesync_infra::config::{self, ConfigSource};
use tokio::net::TcpListener;
use tracing::{info, warn};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Logging is configured from the environment, so .env has to load first
    let dotenv = config::load_dotenv();
    let (config, source) = config::load().context("failed to load configuration")?;
    init_tracing(&config.logging)?;

    match dotenv {
        Ok(Some(path)) => info!(path = %path.display(), "Loaded .env file"),
        Ok(None) => {}
        Err(err) => warn!(error = %err, "Could not load .env file"),
    }

    match source {
        ConfigSource::Environment => info!("Configuration loaded from environment"),
        ConfigSource::File { path, reason } => {
            info!(path = %path.display(), %reason, "Configuration loaded from file")
        }
    }

    let context = Arc::new(AppContext::new(config)?);
    let bind_address = context.config.server.bind_address();
    let listener = TcpListener::bind(&bind_address)
        .await
        .with_context(|| format!("failed to bind {bind_address}"))?;

    info!(%bind_address, "TimeSync listening");

    axum::serve(listener, router(Arc::clone(&context)))
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("server error")?;

    context.shutdown();
    Ok(())
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(err) = tokio::signal::ctrl_c().await {
            warn!(error = %err, "failed to listen for Ctrl-C");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(err) => {
                warn!(error = %err, "failed to listen for SIGTERM");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        () = ctrl_c => {}
        () = terminate => {}
    }

    info!("shutdown signal received");
}
