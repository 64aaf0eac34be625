// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::{Deserialize, Serialize};
use std::fmt;

use crate::embeddings::EmbeddingError;

/// JSON error body returned for every failed request
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ErrorResponse {
    pub error_type: String,
    pub message: String,
}

/// API-level error, mapped to an HTTP status and an [`ErrorResponse`] body
#[derive(Debug, Clone)]
pub enum ApiError {
    UnknownEntity(String),
    UnknownWord(String),
    InternalError(String),
}

impl ApiError {
    pub fn to_response(&self) -> ErrorResponse {
        let (error_type, message) = match self {
            ApiError::UnknownEntity(entity) => (
                "unknown_entity",
                format!("Entity '{}' not found in model vocabulary", entity),
            ),
            ApiError::UnknownWord(word) => (
                "unknown_word",
                format!("Word '{}' not found in model vocabulary", word),
            ),
            ApiError::InternalError(msg) => ("internal_error", msg.clone()),
        };

        ErrorResponse {
            error_type: error_type.to_string(),
            message,
        }
    }

    pub fn status_code(&self) -> StatusCode {
        match self {
            ApiError::UnknownEntity(_) | ApiError::UnknownWord(_) => StatusCode::NOT_FOUND,
            ApiError::InternalError(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

/// Single boundary between handler and model: lookup misses become client
/// errors, everything else becomes a generic server error.
impl From<EmbeddingError> for ApiError {
    fn from(err: EmbeddingError) -> Self {
        match err {
            EmbeddingError::EntityNotFound(entity) => ApiError::UnknownEntity(entity),
            EmbeddingError::WordNotFound(word) => ApiError::UnknownWord(word),
            other => {
                tracing::error!("Embedding query failed: {}", other);
                ApiError::InternalError("Embedding query failed".to_string())
            }
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        (self.status_code(), Json(self.to_response())).into_response()
    }
}

impl fmt::Display for ApiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ApiError::UnknownEntity(entity) => write!(f, "Unknown entity: {}", entity),
            ApiError::UnknownWord(word) => write!(f, "Unknown word: {}", word),
            ApiError::InternalError(msg) => write!(f, "Internal error: {}", msg),
        }
    }
}

impl std::error::Error for ApiError {}
