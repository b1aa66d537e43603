//! # HTTP Server
//!
//! Combines the page, API and health routers into one axum application and
//! serves it until Ctrl+C or SIGTERM.

use std::sync::Arc;

use axum::Router;
use tokio::net::TcpListener;
use tokio::signal;
use tower_http::trace::TraceLayer;
use tracing::{error, info};

use super::api_routes::api_routes;
use super::config::HttpServerConfig;
use super::observability_routes::health_routes;
use super::page_routes::page_routes;
use super::state::GatewayState;

/// HTTP server for the quotes gateway
pub struct HttpServer {
    config: HttpServerConfig,
    router: Router,
}

impl HttpServer {
    /// Create a server over shared gateway state
    pub fn new(config: HttpServerConfig, state: Arc<GatewayState>) -> Self {
        let router = Self::build_router(state);
        Self { config, router }
    }

    /// Build the combined router with all endpoints
    pub fn build_router(state: Arc<GatewayState>) -> Router {
        Router::new()
            .merge(health_routes(state.clone()))
            .merge(page_routes(state.clone()))
            .nest("/api", api_routes(state))
            .layer(TraceLayer::new_for_http())
    }

    /// Get the socket address
    pub fn socket_addr(&self) -> String {
        self.config.socket_addr()
    }

    /// Get the router (for testing)
    pub fn router(self) -> Router {
        self.router
    }

    /// Bind and serve until a shutdown signal arrives
    pub async fn start(self) -> Result<(), std::io::Error> {
        let addr = self.config.bind_addr()?;

        let listener = TcpListener::bind(addr).await?;
        info!("Server started on {}", addr);

        axum::serve(listener, self.router)
            .with_graceful_shutdown(shutdown_signal())
            .await?;

        info!("Server shut down");
        Ok(())
    }
}

async fn shutdown_signal() {
    let ctrl_c = async {
        match signal::ctrl_c().await {
            Ok(()) => info!("Received Ctrl+C, shutting down"),
            Err(e) => {
                error!(error = %e, "Failed to install Ctrl+C handler");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut stream) => {
                stream.recv().await;
                info!("Received terminate signal, shutting down");
            }
            Err(e) => {
                error!(error = %e, "Failed to install terminate handler");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }
}
