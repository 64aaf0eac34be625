// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1

//! HTTP server wiring: router construction and the serve loop
//!
//! The loaded model is injected once at startup as an
//! `Arc<dyn EmbeddingProvider>` and shared read-only by every handler; no
//! request ever takes a lock or mutates state.

use axum::routing::get;
use axum::Router;
use std::net::SocketAddr;
use std::sync::Arc;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

use super::handlers;
use crate::config::NodeConfig;
use crate::embeddings::EmbeddingProvider;

/// Vocabulary counts captured at startup for the /model endpoint
#[derive(Debug, Clone, Copy)]
pub struct ModelStats {
    pub word_count: usize,
    pub entity_count: usize,
    pub neighbor_count: usize,
}

#[derive(Clone)]
pub struct AppState {
    pub provider: Arc<dyn EmbeddingProvider>,
    pub model_stats: ModelStats,
}

/// Build the router with all routes and middleware attached
///
/// Separated from [`start_server`] so tests can drive the router directly
/// with `tower::ServiceExt::oneshot`.
pub fn build_router(provider: Arc<dyn EmbeddingProvider>, model_stats: ModelStats) -> Router {
    let state = AppState {
        provider,
        model_stats,
    };

    Router::new()
        .route("/get_entity_vector/:entity", get(handlers::get_entity_vector))
        .route("/get_word_vector/:word", get(handlers::get_word_vector))
        .route("/most_similar/:entity", get(handlers::most_similar))
        .route("/health", get(handlers::health))
        .route("/model", get(handlers::model_info))
        .layer(TraceLayer::new_for_http())
        .layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any),
        )
        .with_state(state)
}

/// Bind the configured address and serve until shutdown
pub async fn start_server(
    config: &NodeConfig,
    provider: Arc<dyn EmbeddingProvider>,
    model_stats: ModelStats,
) -> anyhow::Result<()> {
    let app = build_router(provider, model_stats);

    let addr: SocketAddr = format!("{}:{}", config.bind_addr, config.api_port).parse()?;
    let listener = tokio::net::TcpListener::bind(addr).await?;

    tracing::info!("API server listening on {}", addr);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!("Failed to install ctrl-c handler: {}", e);
        return;
    }
    tracing::info!("Shutdown signal received");
}
