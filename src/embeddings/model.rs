// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1

//! Pretrained word/entity embedding model
//!
//! Loads a bincode-serialized [`ModelFile`] from disk once at startup and
//! answers vector lookups and nearest-neighbor queries against it. The
//! structure is immutable after load and safe to share across request
//! handlers without locking.
//!
//! Neighbor ranking is an exact cosine-similarity scan over the full
//! vocabulary. Vector norms are precomputed at load so each query costs one
//! dot product per vocabulary entry.

use std::collections::HashMap;
use std::fs::File;
use std::io::BufReader;
use std::path::Path;

use serde::{Deserialize, Serialize};

use super::error::EmbeddingError;
use super::provider::{EmbeddingProvider, EntityHandle, Neighbor};

/// Default neighbor count for similarity queries
pub const DEFAULT_NEIGHBOR_COUNT: usize = 10;

/// Vocabulary entry kind: plain word token or recognized entity
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum EntryKind {
    Word,
    Entity,
}

/// One vocabulary entry in the serialized model file
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct VocabEntry {
    pub label: String,
    pub kind: EntryKind,
    pub vector: Vec<f32>,
}

/// On-disk model representation, bincode-encoded
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ModelFile {
    pub dimension: usize,
    pub entries: Vec<VocabEntry>,
}

impl ModelFile {
    /// Serialize to a writer in the format `Wiki2VecModel::load` expects
    pub fn write_to<W: std::io::Write>(&self, writer: W) -> Result<(), EmbeddingError> {
        bincode::serialize_into(writer, self)
            .map_err(|e| EmbeddingError::CorruptModel(e.to_string()))
    }
}

#[derive(Debug)]
struct Entry {
    label: String,
    kind: EntryKind,
    vector: Vec<f32>,
    norm: f32,
}

/// In-memory embedding model, read-only after `load`
#[derive(Debug)]
pub struct Wiki2VecModel {
    dimension: usize,
    entries: Vec<Entry>,
    words: HashMap<String, usize>,
    entities: HashMap<String, usize>,
    neighbor_count: usize,
}

impl Wiki2VecModel {
    /// Load a model file with the default neighbor count
    ///
    /// Fatal on missing/unreadable files, undecodable content, or entries
    /// whose vectors disagree with the declared dimension. The caller is
    /// expected to abort startup on any error here.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self, EmbeddingError> {
        Self::load_with_neighbor_count(path, DEFAULT_NEIGHBOR_COUNT)
    }

    /// Load a model file, overriding the neighbor count for similarity queries
    pub fn load_with_neighbor_count<P: AsRef<Path>>(
        path: P,
        neighbor_count: usize,
    ) -> Result<Self, EmbeddingError> {
        let path = path.as_ref();
        let file = File::open(path).map_err(|source| EmbeddingError::ModelLoad {
            path: path.to_path_buf(),
            source,
        })?;
        let model_file: ModelFile = bincode::deserialize_from(BufReader::new(file))
            .map_err(|e| EmbeddingError::CorruptModel(e.to_string()))?;

        Self::from_model_file(model_file, neighbor_count)
    }

    /// Build the in-memory structure from a decoded model file
    pub fn from_model_file(
        model_file: ModelFile,
        neighbor_count: usize,
    ) -> Result<Self, EmbeddingError> {
        if model_file.dimension == 0 {
            return Err(EmbeddingError::CorruptModel(
                "declared dimension is 0".to_string(),
            ));
        }

        let mut entries = Vec::with_capacity(model_file.entries.len());
        let mut words = HashMap::new();
        let mut entities = HashMap::new();

        for entry in model_file.entries {
            if entry.vector.len() != model_file.dimension {
                return Err(EmbeddingError::DimensionMismatch {
                    label: entry.label,
                    expected: model_file.dimension,
                    actual: entry.vector.len(),
                });
            }

            let index = entries.len();
            let norm = entry.vector.iter().map(|x| x * x).sum::<f32>().sqrt();
            match entry.kind {
                EntryKind::Word => words.insert(entry.label.clone(), index),
                EntryKind::Entity => entities.insert(entry.label.clone(), index),
            };
            entries.push(Entry {
                label: entry.label,
                kind: entry.kind,
                vector: entry.vector,
                norm,
            });
        }

        Ok(Self {
            dimension: model_file.dimension,
            entries,
            words,
            entities,
            neighbor_count,
        })
    }

    /// Number of word tokens in the vocabulary
    pub fn word_count(&self) -> usize {
        self.words.len()
    }

    /// Number of entities in the vocabulary
    pub fn entity_count(&self) -> usize {
        self.entities.len()
    }

    /// Configured neighbor count for similarity queries
    pub fn neighbor_count(&self) -> usize {
        self.neighbor_count
    }

    fn cosine_similarity(&self, a: usize, b: usize) -> f32 {
        let (ea, eb) = (&self.entries[a], &self.entries[b]);
        if ea.norm == 0.0 || eb.norm == 0.0 {
            return 0.0;
        }
        let dot: f32 = ea
            .vector
            .iter()
            .zip(eb.vector.iter())
            .map(|(x, y)| x * y)
            .sum();
        dot / (ea.norm * eb.norm)
    }
}

impl EmbeddingProvider for Wiki2VecModel {
    fn entity_vector(&self, entity: &str) -> Result<Vec<f32>, EmbeddingError> {
        let index = self
            .entities
            .get(entity)
            .ok_or_else(|| EmbeddingError::EntityNotFound(entity.to_string()))?;
        Ok(self.entries[*index].vector.clone())
    }

    fn word_vector(&self, word: &str) -> Result<Vec<f32>, EmbeddingError> {
        let index = self
            .words
            .get(word)
            .ok_or_else(|| EmbeddingError::WordNotFound(word.to_string()))?;
        Ok(self.entries[*index].vector.clone())
    }

    fn resolve_entity(&self, entity: &str) -> Result<EntityHandle, EmbeddingError> {
        let index = self
            .entities
            .get(entity)
            .ok_or_else(|| EmbeddingError::EntityNotFound(entity.to_string()))?;
        Ok(EntityHandle {
            index: *index,
            label: self.entries[*index].label.clone(),
        })
    }

    fn nearest_neighbors(&self, handle: &EntityHandle) -> Result<Vec<Neighbor>, EmbeddingError> {
        // Handles only come from resolve_entity on this model, but stale
        // indices must not panic.
        if handle.index >= self.entries.len() {
            return Err(EmbeddingError::EntityNotFound(handle.label.clone()));
        }

        let mut scored: Vec<(usize, f32)> = (0..self.entries.len())
            .filter(|&i| i != handle.index)
            .map(|i| (i, self.cosine_similarity(handle.index, i)))
            .collect();

        scored.sort_by(|a, b| b.1.partial_cmp(&a.1).unwrap_or(std::cmp::Ordering::Equal));
        scored.truncate(self.neighbor_count);

        Ok(scored
            .into_iter()
            .map(|(i, similarity)| Neighbor {
                word: self.entries[i].label.clone(),
                similarity,
            })
            .collect())
    }

    fn dimension(&self) -> usize {
        self.dimension
    }
}
