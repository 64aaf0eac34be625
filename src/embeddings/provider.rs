// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1

//! Abstract embedding provider interface
//!
//! The HTTP layer only sees this trait. Any backend that can resolve
//! entities, look up vectors, and rank neighbors can sit behind it; the
//! bundled backend is [`crate::embeddings::Wiki2VecModel`].
//!
//! All operations are in-memory reads over an immutable structure, so the
//! trait is synchronous and implementations need no interior locking.

use serde::{Deserialize, Serialize};

use super::error::EmbeddingError;

/// Resolved entity token, valid for the provider that produced it
#[derive(Debug, Clone, PartialEq)]
pub struct EntityHandle {
    pub(crate) index: usize,
    pub(crate) label: String,
}

impl EntityHandle {
    /// Label of the resolved entity as stored in the vocabulary
    pub fn label(&self) -> &str {
        &self.label
    }
}

/// One neighbor from a similarity query
///
/// `word` may name either a word token or an entity; the model ranks both
/// in the same vector space.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Neighbor {
    pub word: String,
    pub similarity: f32,
}

/// Read-only query surface of a loaded embedding model
pub trait EmbeddingProvider: Send + Sync {
    /// Embedding vector for a recognized entity key
    fn entity_vector(&self, entity: &str) -> Result<Vec<f32>, EmbeddingError>;

    /// Embedding vector for an arbitrary word token
    fn word_vector(&self, word: &str) -> Result<Vec<f32>, EmbeddingError>;

    /// Resolve an entity key to a handle usable with `nearest_neighbors`
    fn resolve_entity(&self, entity: &str) -> Result<EntityHandle, EmbeddingError>;

    /// Neighbors of the given entity, best match first, query excluded
    fn nearest_neighbors(&self, handle: &EntityHandle) -> Result<Vec<Neighbor>, EmbeddingError>;

    /// Fixed vector dimensionality of this model
    fn dimension(&self) -> usize;
}
