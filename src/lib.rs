// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1
pub mod api;
pub mod config;
pub mod embeddings;
pub mod version;

pub use api::{build_router, start_server, ApiError, AppState, ErrorResponse, ModelStats};
pub use config::NodeConfig;
pub use embeddings::{
    EmbeddingError, EmbeddingProvider, EntityHandle, ModelFile, Neighbor, Wiki2VecModel,
};
