// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1
pub mod error;
pub mod model;
pub mod provider;

pub use error::EmbeddingError;
pub use model::{EntryKind, ModelFile, VocabEntry, Wiki2VecModel, DEFAULT_NEIGHBOR_COUNT};
pub use provider::{EmbeddingProvider, EntityHandle, Neighbor};
