// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1
// Shared fixtures for API integration tests

use axum::body::Body;
use axum::http::{Request, Response, StatusCode};
use axum::Router;
use std::sync::Arc;
use tower::ServiceExt;
use wiki2vec_node::api::{build_router, ModelStats};
use wiki2vec_node::embeddings::{EntryKind, ModelFile, VocabEntry, Wiki2VecModel};

/// Toy 3-dimensional model: three entities and two word tokens
///
/// "France" is nearly colinear with "Paris", so it must rank first among
/// Paris's neighbors; "banana" points elsewhere entirely.
pub fn toy_model() -> Wiki2VecModel {
    let file = ModelFile {
        dimension: 3,
        entries: vec![
            VocabEntry {
                label: "Paris".to_string(),
                kind: EntryKind::Entity,
                vector: vec![0.1, 0.2, 0.3],
            },
            VocabEntry {
                label: "France".to_string(),
                kind: EntryKind::Entity,
                vector: vec![0.1, 0.2, 0.29],
            },
            VocabEntry {
                label: "New York".to_string(),
                kind: EntryKind::Entity,
                vector: vec![0.3, -0.1, 0.2],
            },
            VocabEntry {
                label: "paris".to_string(),
                kind: EntryKind::Word,
                vector: vec![0.11, 0.19, 0.31],
            },
            VocabEntry {
                label: "banana".to_string(),
                kind: EntryKind::Word,
                vector: vec![-0.3, 0.1, -0.2],
            },
        ],
    };
    Wiki2VecModel::from_model_file(file, 10).unwrap()
}

pub fn toy_router() -> Router {
    let model = toy_model();
    let stats = ModelStats {
        word_count: model.word_count(),
        entity_count: model.entity_count(),
        neighbor_count: model.neighbor_count(),
    };
    build_router(Arc::new(model), stats)
}

/// Issue one GET against a fresh copy of the router
pub async fn get(app: Router, uri: &str) -> Response<Body> {
    app.oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
        .await
        .unwrap()
}

/// Collect a response body and decode it as JSON
pub async fn body_json(response: Response<Body>) -> serde_json::Value {
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    serde_json::from_slice(&bytes).unwrap()
}

/// Assert a structured error body with the expected status and error_type
pub async fn assert_error(response: Response<Body>, status: StatusCode, error_type: &str) {
    assert_eq!(response.status(), status);
    let body = body_json(response).await;
    assert_eq!(body["error_type"], error_type);
    assert!(body["message"].is_string());
}
