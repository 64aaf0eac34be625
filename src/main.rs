// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1
use anyhow::{Context, Result};
use std::env;
use std::sync::Arc;
use wiki2vec_node::{
    api::{self, ModelStats},
    config::NodeConfig,
    embeddings::{EmbeddingProvider, Wiki2VecModel},
    version,
};

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize tracing subscriber for logging
    if env::var("RUST_LOG").is_err() {
        env::set_var("RUST_LOG", "info");
    }
    tracing_subscriber::fmt::init();

    println!("🚀 Starting {}...", version::get_version_string());

    let config = NodeConfig::from_env()?;

    // Model load is the only blocking I/O in the process; it must succeed
    // before the listener is bound.
    tracing::info!("Loading embedding model from {:?}", config.model_path);
    let model = Wiki2VecModel::load_with_neighbor_count(&config.model_path, config.neighbor_count)
        .with_context(|| format!("Failed to load model from {:?}", config.model_path))?;

    let stats = ModelStats {
        word_count: model.word_count(),
        entity_count: model.entity_count(),
        neighbor_count: model.neighbor_count(),
    };
    tracing::info!(
        "Model loaded: {} words, {} entities, {}D vectors",
        stats.word_count,
        stats.entity_count,
        model.dimension(),
    );

    api::start_server(&config, Arc::new(model), stats).await
}
