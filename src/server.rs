pub mod error;
pub mod handler;

use std::sync::Arc;

use axum::{
    Router,
    routing::{get, post},
};
use tokio::net::TcpListener;
use tower_http::trace::TraceLayer;
use tracing::{info, warn};

use crate::TokenIssuer;
use crate::config::{Config, JwtSettings};

pub const SIGN_IN_PATH: &str = "/users/sign-in";
pub const HEALTH_PATH: &str = "/health";

/// State shared by every request handler.
#[derive(Clone)]
pub struct AppState {
    pub token_issuer: Arc<dyn TokenIssuer>,
    pub jwt: Arc<JwtSettings>,
}

impl AppState {
    pub fn new(token_issuer: Arc<dyn TokenIssuer>, jwt: JwtSettings) -> Self {
        Self {
            token_issuer,
            jwt: Arc::new(jwt),
        }
    }
}

pub fn build_routes(state: AppState) -> Router {
    Router::new()
        .route(SIGN_IN_PATH, post(handler::sign_in))
        .route(HEALTH_PATH, get(health_check))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

async fn health_check() -> &'static str {
    "OK"
}

/// Bind to the configured address and serve until Ctrl-C is received.
pub async fn serve(config: Config, token_issuer: Arc<dyn TokenIssuer>) -> std::io::Result<()> {
    let listener = TcpListener::bind(&config.bind_address).await?;
    info!(address = %listener.local_addr()?, "sign-in server listening");

    let router = build_routes(AppState::new(token_issuer, config.jwt));
    axum::serve(listener, router)
        .with_graceful_shutdown(shutdown_signal())
        .await
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        warn!("failed to listen for shutdown signal: {e}");
        std::future::pending::<()>().await;
    }
    info!("shutting down sign-in server");
}
