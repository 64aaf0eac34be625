// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1
use axum::http::StatusCode;

use super::common::{assert_error, body_json, get, toy_router};

#[tokio::test]
async fn test_entity_vector_known_key() {
    let response = get(toy_router(), "/get_entity_vector/Paris").await;
    assert_eq!(response.status(), StatusCode::OK);

    let body = body_json(response).await;
    let vector = body.as_array().expect("body must be a JSON array");
    assert_eq!(vector.len(), 3);
    assert!((vector[0].as_f64().unwrap() - 0.1).abs() < 1e-6);
    assert!((vector[1].as_f64().unwrap() - 0.2).abs() < 1e-6);
    assert!((vector[2].as_f64().unwrap() - 0.3).abs() < 1e-6);
}

#[tokio::test]
async fn test_entity_vector_unknown_key() {
    let response = get(toy_router(), "/get_entity_vector/Zzyxx_unknown").await;
    assert_error(response, StatusCode::NOT_FOUND, "unknown_entity").await;
}

#[tokio::test]
async fn test_word_vector_known_token() {
    let response = get(toy_router(), "/get_word_vector/banana").await;
    assert_eq!(response.status(), StatusCode::OK);

    let body = body_json(response).await;
    assert_eq!(body.as_array().unwrap().len(), 3);
}

#[tokio::test]
async fn test_word_vector_unknown_token() {
    let response = get(toy_router(), "/get_word_vector/zzyxx").await;
    assert_error(response, StatusCode::NOT_FOUND, "unknown_word").await;
}

#[tokio::test]
async fn test_word_and_entity_vocabularies_are_separate() {
    // "Paris" exists only as an entity; the word endpoint must miss
    let response = get(toy_router(), "/get_word_vector/Paris").await;
    assert_error(response, StatusCode::NOT_FOUND, "unknown_word").await;
}

#[tokio::test]
async fn test_url_encoded_path_parameter() {
    let response = get(toy_router(), "/get_entity_vector/New%20York").await;
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(body_json(response).await.as_array().unwrap().len(), 3);
}

#[tokio::test]
async fn test_repeated_lookups_are_identical() {
    let first = body_json(get(toy_router(), "/get_entity_vector/Paris").await).await;
    let second = body_json(get(toy_router(), "/get_entity_vector/Paris").await).await;
    assert_eq!(first, second);
}
