//! YakSafe Server - HTTP moderation API.
//!
//! This crate provides the HTTP surface around the YakSafe classifier.
//!
//! ## Endpoints
//!
//! - `GET /` - Liveness payload
//! - `GET /health` - Health check
//! - `POST /moderate` - Classify a post and return a moderation verdict
//!
//! ## Example
//!
//! ```no_run
//! use yaksafe_server::{Server, ServerConfig};
//!
//! #[tokio::main]
//! async fn main() {
//!     let server = Server::new(ServerConfig::default()).unwrap();
//!     server.run().await.unwrap();
//! }
//! ```

pub mod error;
mod handlers;
pub mod models;
pub mod state;

use std::net::SocketAddr;

use axum::routing::{get, post};
use axum::Router;
use socket2::{Domain, Protocol, Socket, Type};
use thiserror::Error;
use tower_http::cors::{Any, CorsLayer};
use tracing::info;

pub use error::{ApiError, Result};
pub use state::AppState;

/// Default server port.
pub const DEFAULT_PORT: u16 = 5000;

/// Default server host (localhost only).
pub const DEFAULT_HOST: &str = "127.0.0.1";

/// Server configuration.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// Host to bind to (default: 127.0.0.1).
    pub host: String,
    /// Port to bind to (default: 5000).
    pub port: u16,
    /// Whether /moderate responses include the per-category hits map.
    pub include_hits: bool,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: DEFAULT_HOST.to_string(),
            port: DEFAULT_PORT,
            include_hits: true,
        }
    }
}

impl ServerConfig {
    /// Sets the port.
    pub fn with_port(mut self, port: u16) -> Self {
        self.port = port;
        self
    }

    /// Disables the hits map in moderation responses.
    pub fn without_hits(mut self) -> Self {
        self.include_hits = false;
        self
    }
}

/// Server error types.
#[derive(Debug, Error)]
pub enum ServerError {
    /// Failed to bind to address.
    #[error("failed to bind to {0}: {1}")]
    BindError(SocketAddr, std::io::Error),

    /// Server runtime error.
    #[error("server error: {0}")]
    Runtime(String),
}

/// The HTTP API server.
pub struct Server {
    router: Router,
    addr: SocketAddr,
}

impl Server {
    /// Creates a new server with the given configuration.
    pub fn new(config: ServerConfig) -> std::result::Result<Self, ServerError> {
        let state = AppState::new(config.include_hits);
        Self::with_state(config, state)
    }

    /// Creates a server with custom application state.
    pub fn with_state(
        config: ServerConfig,
        state: AppState,
    ) -> std::result::Result<Self, ServerError> {
        // Browser clients post directly to the API, so allow any origin.
        let cors = CorsLayer::new()
            .allow_origin(Any)
            .allow_methods(Any)
            .allow_headers(Any);

        let router = Router::new()
            .route("/", get(handlers::root))
            .route("/health", get(handlers::health))
            .route("/moderate", post(handlers::moderate))
            .layer(cors)
            .with_state(state);

        let addr = format!("{}:{}", config.host, config.port)
            .parse()
            .map_err(|e| ServerError::Runtime(format!("invalid address: {}", e)))?;

        Ok(Self { router, addr })
    }

    /// Returns the server address.
    pub fn addr(&self) -> SocketAddr {
        self.addr
    }

    /// Runs the server until shutdown.
    pub async fn run(self) -> std::result::Result<(), ServerError> {
        info!("Starting YakSafe API server on {}", self.addr);

        // Create socket with SO_REUSEADDR to allow binding even when sockets are lingering
        let socket = Socket::new(Domain::IPV4, Type::STREAM, Some(Protocol::TCP))
            .map_err(|e| ServerError::BindError(self.addr, e))?;

        socket
            .set_reuse_address(true)
            .map_err(|e| ServerError::BindError(self.addr, e))?;

        socket
            .bind(&self.addr.into())
            .map_err(|e| ServerError::BindError(self.addr, e))?;
        socket
            .listen(128)
            .map_err(|e| ServerError::BindError(self.addr, e))?;

        // Set non-blocking for tokio
        socket
            .set_nonblocking(true)
            .map_err(|e| ServerError::BindError(self.addr, e))?;

        let std_listener: std::net::TcpListener = socket.into();
        let listener = tokio::net::TcpListener::from_std(std_listener)
            .map_err(|e| ServerError::BindError(self.addr, e))?;

        axum::serve(listener, self.router)
            .await
            .map_err(|e| ServerError::Runtime(e.to_string()))?;

        Ok(())
    }

    /// Returns the router for testing.
    pub fn router(&self) -> Router {
        self.router.clone()
    }
}
