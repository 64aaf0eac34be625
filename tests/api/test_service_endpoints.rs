// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1
use axum::http::StatusCode;

use super::common::{body_json, get, toy_router};

#[tokio::test]
async fn test_health() {
    let response = get(toy_router(), "/health").await;
    assert_eq!(response.status(), StatusCode::OK);

    let body = body_json(response).await;
    assert_eq!(body["status"], "healthy");
    assert_eq!(body["dimension"], 3);
}

#[tokio::test]
async fn test_model_info() {
    let response = get(toy_router(), "/model").await;
    assert_eq!(response.status(), StatusCode::OK);

    let body = body_json(response).await;
    assert_eq!(body["dimension"], 3);
    assert_eq!(body["word_count"], 2);
    assert_eq!(body["entity_count"], 3);
    assert_eq!(body["neighbor_count"], 10);
    assert!(body["version"].is_string());
}

#[tokio::test]
async fn test_unroutable_path() {
    let response = get(toy_router(), "/no_such_route").await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}
