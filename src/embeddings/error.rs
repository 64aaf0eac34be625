// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1

//! Error types for embedding model loading and queries
//!
//! Two families of failure exist:
//! - Load-time errors (missing file, undecodable content, inconsistent
//!   dimensions) are fatal: the service has no function without the model.
//! - Query-time lookup misses (unknown entity/word) are per-request errors
//!   that the API layer maps to client error responses.

use std::path::PathBuf;
use thiserror::Error;

/// Errors produced by the embedding model and its loader
#[derive(Error, Debug)]
pub enum EmbeddingError {
    /// Model file could not be read from disk
    #[error("Failed to read model file {path}: {source}")]
    ModelLoad {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Model file content could not be decoded
    #[error("Corrupt model file: {0}")]
    CorruptModel(String),

    /// A vocabulary entry's vector disagrees with the declared dimension
    #[error("Dimension mismatch for '{label}': expected {expected}D, got {actual}D")]
    DimensionMismatch {
        label: String,
        expected: usize,
        actual: usize,
    },

    /// Entity key is not in the model vocabulary
    #[error("Unknown entity: '{0}'")]
    EntityNotFound(String),

    /// Word token is not in the model vocabulary
    #[error("Unknown word: '{0}'")]
    WordNotFound(String),
}

impl EmbeddingError {
    /// True for per-request lookup misses, false for load-time faults
    pub fn is_not_found(&self) -> bool {
        matches!(
            self,
            EmbeddingError::EntityNotFound(_) | EmbeddingError::WordNotFound(_)
        )
    }
}
