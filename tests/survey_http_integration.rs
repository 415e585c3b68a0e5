//! End-to-end tests driving the survey router through tower.

use std::sync::Arc;

use axum::body::{to_bytes, Body};
use axum::http::{header, Request, StatusCode};
use axum::Router;
use tower::ServiceExt;

use pairweight::adapters::http::{survey_router, SurveyAppState};
use pairweight::adapters::storage::InMemoryResponseStore;

fn test_app(store: Arc<InMemoryResponseStore>) -> Router {
    Router::new()
        .nest("/api/survey", survey_router())
        .with_state(SurveyAppState { store })
}

fn json_request(uri: &str, body: serde_json::Value) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(body.to_string()))
        .unwrap()
}

async fn response_json(response: axum::response::Response) -> serde_json::Value {
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    serde_json::from_slice(&bytes).unwrap()
}

#[tokio::test]
async fn evaluate_all_equal_judgments_returns_uniform_weights() {
    let app = test_app(Arc::new(InMemoryResponseStore::new()));

    let body = serde_json::json!({
        "criteria": ["X", "Y", "Z"],
        "judgments": [
            { "left": 0, "right": 1, "value": 1 },
            { "left": 0, "right": 2, "value": 1 },
            { "left": 1, "right": 2, "value": 1 }
        ],
        "method": "crisp_mean"
    });

    let response = app
        .oneshot(json_request("/api/survey/evaluate", body))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let json = response_json(response).await;
    let weights = json["weights"].as_array().unwrap();
    assert_eq!(weights.len(), 3);
    for entry in weights {
        assert!((entry["weight"].as_f64().unwrap() - 0.3333).abs() < 1e-9);
    }
    assert!(json["consistency"]["acceptable"].as_bool().unwrap());
    assert!((json["consistency"]["lambda_max"].as_f64().unwrap() - 3.0).abs() < 1e-9);
}

#[tokio::test]
async fn evaluate_dominant_pair_returns_ninety_ten_split() {
    let app = test_app(Arc::new(InMemoryResponseStore::new()));

    let body = serde_json::json!({
        "criteria": ["X", "Y"],
        "judgments": [{ "left": 0, "right": 1, "value": 9 }],
        "method": "crisp_mean"
    });

    let response = app
        .oneshot(json_request("/api/survey/evaluate", body))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let json = response_json(response).await;
    assert!((json["weights"][0]["weight"].as_f64().unwrap() - 0.9).abs() < 1e-9);
    assert!((json["weights"][1]["weight"].as_f64().unwrap() - 0.1).abs() < 1e-9);
    assert_eq!(json["comparison_matrix"]["values"][0][1].as_f64().unwrap(), 9.0);
}

#[tokio::test]
async fn evaluate_zero_magnitude_judgment_is_unprocessable() {
    let app = test_app(Arc::new(InMemoryResponseStore::new()));

    let body = serde_json::json!({
        "criteria": ["X", "Y"],
        "judgments": [{ "left": 0, "right": 1, "value": 0 }]
    });

    let response = app
        .oneshot(json_request("/api/survey/evaluate", body))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);

    let json = response_json(response).await;
    assert!(json["error"].as_str().unwrap().contains("reciprocal"));
}

#[tokio::test]
async fn evaluate_incomplete_judgment_set_is_unprocessable() {
    let app = test_app(Arc::new(InMemoryResponseStore::new()));

    let body = serde_json::json!({
        "criteria": ["X", "Y", "Z"],
        "judgments": [{ "left": 0, "right": 1, "value": 3 }]
    });

    let response = app
        .oneshot(json_request("/api/survey/evaluate", body))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
}

#[tokio::test]
async fn evaluate_defaults_to_fuzzy_extent_analysis() {
    let app = test_app(Arc::new(InMemoryResponseStore::new()));

    let body = serde_json::json!({
        "criteria": ["X", "Y"],
        "judgments": [{ "left": 0, "right": 1, "value": 5 }]
    });

    let response = app
        .oneshot(json_request("/api/survey/evaluate", body))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let json = response_json(response).await;
    assert_eq!(json["method"].as_str().unwrap(), "fuzzy_extent_analysis");
    assert_eq!(
        json["consistency"]["method"].as_str().unwrap(),
        "power_iteration"
    );
}

#[tokio::test]
async fn submit_persists_one_record() {
    let store = Arc::new(InMemoryResponseStore::new());
    let app = test_app(store.clone());

    let body = serde_json::json!({
        "respondent": {
            "age_range": "25-44",
            "field_of_work": "Environment",
            "suggestions": "Show the scale anchors inline"
        },
        "criteria": ["Precipitation", "Elevation", "Slope"],
        "judgments": [
            { "left": 0, "right": 1, "value": 3 },
            { "left": 0, "right": 2, "value": 5 },
            { "left": 1, "right": 2, "value": 2 }
        ]
    });

    let response = app
        .oneshot(json_request("/api/survey/submit", body))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let json = response_json(response).await;
    assert!(json["response_id"].as_str().is_some());
    assert!(json["saved_at_utc"].as_str().is_some());

    let records = store.records();
    assert_eq!(records.len(), 1);
    assert_eq!(records[0].criteria.len(), 3);
    assert_eq!(
        records[0].response_id.to_string(),
        json["response_id"].as_str().unwrap()
    );
}

#[tokio::test]
async fn submit_with_invalid_profile_persists_nothing() {
    let store = Arc::new(InMemoryResponseStore::new());
    let app = test_app(store.clone());

    let body = serde_json::json!({
        "respondent": {
            "age_range": "not-a-range",
            "field_of_work": "Environment"
        },
        "criteria": ["X", "Y"],
        "judgments": [{ "left": 0, "right": 1, "value": 2 }]
    });

    let response = app
        .oneshot(json_request("/api/survey/submit", body))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
    assert!(store.records().is_empty());
}

#[tokio::test]
async fn submit_inconsistent_judgments_succeeds_with_flag() {
    let store = Arc::new(InMemoryResponseStore::new());
    let app = test_app(store.clone());

    let body = serde_json::json!({
        "respondent": {
            "age_range": "45-64",
            "field_of_work": "Engineering"
        },
        "criteria": ["A", "B", "C"],
        "judgments": [
            { "left": 0, "right": 1, "value": 9 },
            { "left": 1, "right": 2, "value": 9 },
            { "left": 0, "right": 2, "value": -9 }
        ],
        "method": "crisp_mean"
    });

    let response = app
        .oneshot(json_request("/api/survey/submit", body))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let json = response_json(response).await;
    assert!(!json["evaluation"]["consistency"]["acceptable"]
        .as_bool()
        .unwrap());
    assert_eq!(store.records().len(), 1);
}
