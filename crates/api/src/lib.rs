//! `api` crate — HTTP view surface for the dashboard UI.
//!
//! Exposes:
//!   GET  /api/v1/records         — full history, ascending
//!   GET  /api/v1/records/latest  — most recent record
//!   GET  /api/v1/status          — loading/updating flags + last error
//!   POST /api/v1/refresh         — run one refresh cycle

pub mod handlers;

use std::sync::Arc;

use axum::routing::{get, post};
use axum::Router;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;
use tracing::info;

use monitor::WaterMonitor;

/// Shared state handed to every handler.
#[derive(Clone)]
pub struct AppState {
    pub monitor: Arc<WaterMonitor>,
}

pub fn router(monitor: Arc<WaterMonitor>) -> Router {
    Router::new()
        .route("/api/v1/records", get(handlers::records::list))
        .route("/api/v1/records/latest", get(handlers::records::latest))
        .route("/api/v1/status", get(handlers::status::get))
        .route("/api/v1/refresh", post(handlers::refresh::trigger))
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
        .with_state(AppState { monitor })
}

/// Bind and serve until the process is stopped.
pub async fn serve(bind: &str, monitor: Arc<WaterMonitor>) -> std::io::Result<()> {
    let listener = tokio::net::TcpListener::bind(bind).await?;
    info!("view API listening on {bind}");
    axum::serve(listener, router(monitor)).await
}
