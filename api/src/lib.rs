//! HTTP surface of the advisor backend.
//!
//! Three routes: `POST /query` (initial question), `POST /followup`
//! (expand one of the offered options or a custom question), and
//! `GET /session/{id}` (full session record). All shared services live in
//! [`core::app_state::AppState`], built once from the environment at
//! startup and passed by `State` into every handler.

use std::{env, sync::Arc};

mod core;
mod error_handler;
mod routes;

use axum::{
    Router,
    routing::{get, post},
};
use tokio::signal;
use tracing::info;

use crate::{
    core::app_state::AppState,
    error_handler::AppError,
    routes::{
        followup::followup_route::followup, query::query_route::query,
        session::session_route::session_detail,
    },
};

pub async fn start() -> Result<(), AppError> {
    let host_url = env::var("API_ADDRESS").unwrap_or_else(|_| "0.0.0.0:8080".into());

    let state = Arc::new(AppState::from_env()?);
    let app = router(state);

    let listener = tokio::net::TcpListener::bind(&host_url)
        .await
        .map_err(AppError::Bind)?;
    info!(addr = %host_url, "advisor backend listening");

    // Start server with graceful shutdown on Ctrl+C
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .map_err(AppError::Server)?;

    Ok(())
}

/// Builds the application router over shared state.
fn router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/query", post(query))
        .route("/followup", post(followup))
        .route("/session/{id}", get(session_detail))
        .with_state(state)
}

/// Returns a future that resolves when Ctrl+C is pressed
async fn shutdown_signal() {
    signal::ctrl_c()
        .await
        .expect("Failed to listen for shutdown signal");
}
