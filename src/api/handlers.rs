// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1

//! GET handlers for the embedding query endpoints
//!
//! Each handler extracts one URL-decoded path parameter, performs a single
//! provider call, and serializes the result. All failures are funneled
//! through [`ApiError`](super::ApiError) at this boundary.

use axum::extract::{Path, State};
use axum::Json;
use serde::{Deserialize, Serialize};

use super::errors::ApiError;
use super::http_server::AppState;
use crate::embeddings::Neighbor;

/// GET /health response body
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
    pub dimension: usize,
}

/// GET /model response body
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ModelInfoResponse {
    pub dimension: usize,
    pub word_count: usize,
    pub entity_count: usize,
    pub neighbor_count: usize,
    pub version: String,
}

/// GET /get_entity_vector/:entity
///
/// Returns the raw embedding vector for a recognized entity key as a JSON
/// array of floats. Unknown entities are a 404, never a zero vector.
pub async fn get_entity_vector(
    State(state): State<AppState>,
    Path(entity): Path<String>,
) -> Result<Json<Vec<f32>>, ApiError> {
    let vector = state.provider.entity_vector(&entity)?;
    Ok(Json(vector))
}

/// GET /get_word_vector/:word
pub async fn get_word_vector(
    State(state): State<AppState>,
    Path(word): Path<String>,
) -> Result<Json<Vec<f32>>, ApiError> {
    let vector = state.provider.word_vector(&word)?;
    Ok(Json(vector))
}

/// GET /most_similar/:entity
///
/// Two-step query: resolve the entity key, then rank its neighbors. The
/// response preserves the order the model yields (best match first).
pub async fn most_similar(
    State(state): State<AppState>,
    Path(entity): Path<String>,
) -> Result<Json<Vec<Neighbor>>, ApiError> {
    let handle = state.provider.resolve_entity(&entity)?;
    let neighbors = state.provider.nearest_neighbors(&handle)?;
    Ok(Json(neighbors))
}

/// GET /health
pub async fn health(State(state): State<AppState>) -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "healthy".to_string(),
        dimension: state.provider.dimension(),
    })
}

/// GET /model
pub async fn model_info(State(state): State<AppState>) -> Json<ModelInfoResponse> {
    Json(ModelInfoResponse {
        dimension: state.provider.dimension(),
        word_count: state.model_stats.word_count,
        entity_count: state.model_stats.entity_count,
        neighbor_count: state.model_stats.neighbor_count,
        version: crate::version::VERSION_NUMBER.to_string(),
    })
}
