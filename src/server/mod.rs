//! HTTP boundary for the synonym store.
//!
//! A thin axum layer over [`SynonymService`]: three synonym routes plus a
//! liveness endpoint. All validation and business policy lives in the
//! service; handlers only translate between HTTP and the service's error
//! taxonomy.

pub mod handlers;
pub mod payload;

use axum::Router;
use axum::routing::{delete, get, post};

use crate::config::ServerConfig;
use crate::error::{Result, ThesaurusError};
use crate::server::handlers::AppState;
use crate::service::SynonymService;

/// Build the application router around a service handle.
pub fn build_router(service: SynonymService) -> Router {
    let state = AppState { service };

    Router::new()
        .route("/health", get(handlers::health))
        .route("/api/synonyms/add", post(handlers::add_synonym))
        .route("/api/synonyms/get/:word", get(handlers::get_synonyms))
        .route(
            "/api/synonyms/delete/:word/:synonym",
            delete(handlers::delete_synonym),
        )
        .with_state(state)
}

/// Serve the synonym API until the process is stopped.
///
/// Blocking: builds its own multi-thread tokio runtime, binds the configured
/// address, and runs the axum server on it.
pub fn serve(service: SynonymService, config: &ServerConfig) -> Result<()> {
    let runtime = tokio::runtime::Builder::new_multi_thread()
        .enable_all()
        .build()
        .map_err(|e| ThesaurusError::server(format!("failed to build tokio runtime: {e}")))?;

    let bind_addr = config.bind_addr();
    runtime.block_on(async move {
        let listener = tokio::net::TcpListener::bind(&bind_addr)
            .await
            .map_err(|e| ThesaurusError::server(format!("failed to bind {bind_addr}: {e}")))?;

        tracing::info!(addr = %bind_addr, "synonym API listening");

        let app = build_router(service);
        axum::serve(listener, app)
            .await
            .map_err(|e| ThesaurusError::server(format!("server failed: {e}")))
    })
}
