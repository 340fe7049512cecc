//! Router construction and the interactive page server

use crate::config::ServerConfig;
use crate::error::{Result, ResumeRankerError};
use crate::processing::ranker::BatchRanker;
use crate::web::handlers;
use axum::extract::DefaultBodyLimit;
use axum::routing::{get, post};
use axum::Router;
use log::info;
use std::sync::Arc;
use tokio::net::TcpListener;

/// Shared state injected into the handlers
#[derive(Clone)]
pub struct AppState {
    pub ranker: Arc<BatchRanker>,
}

pub fn build_router(state: AppState, max_upload_mb: usize) -> Router {
    Router::new()
        .route("/", get(handlers::index))
        .route("/analyze", post(handlers::analyze))
        .layer(DefaultBodyLimit::max(max_upload_mb.saturating_mul(1024 * 1024)))
        .with_state(state)
}

/// Bind and serve the interactive page until the process is stopped
pub async fn serve(ranker: Arc<BatchRanker>, config: &ServerConfig) -> Result<()> {
    let addr = format!("{}:{}", config.host, config.port);
    let listener = TcpListener::bind(&addr)
        .await
        .map_err(|e| ResumeRankerError::Server(format!("Failed to bind {}: {}", addr, e)))?;

    info!("Interactive page available at http://{}", addr);
    let app = build_router(AppState { ranker }, config.max_upload_mb);
    axum::serve(listener, app)
        .await
        .map_err(|e| ResumeRankerError::Server(e.to_string()))?;

    Ok(())
}
