//! Integration tests for the HTTP surface.
//!
//! Requests are driven through the full router (middleware included) with
//! `tower::ServiceExt::oneshot`.

use axum::Router;
use axum::body::Body;
use axum::http::{Request, StatusCode, header};
use serde_json::{Value, json};
use server::{ServerState, create_app};
use tower::ServiceExt;

fn app() -> (Router, ServerState) {
    let state = ServerState::new();
    (create_app(state.clone()), state)
}

async fn post(app: Router, uri: &str, body: String) -> (StatusCode, Vec<u8>, header::HeaderMap) {
    let response = app
        .oneshot(
            Request::builder()
                .method("POST")
                .uri(uri)
                .header(header::CONTENT_TYPE, "application/json")
                .body(Body::from(body))
                .unwrap(),
        )
        .await
        .unwrap();
    let status = response.status();
    let headers = response.headers().clone();
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    (status, bytes.to_vec(), headers)
}

async fn post_json(app: Router, body: Value) -> (StatusCode, Value) {
    let (status, bytes, _) = post(app, "/api/generate-teams", body.to_string()).await;
    (status, serde_json::from_slice(&bytes).unwrap())
}

#[tokio::test]
async fn test_generate_three_full_pools() {
    let (app, state) = app();
    let (status, body) = post_json(
        app,
        json!({
            "categories": {"A": ["a1", "a2", "a3"], "B": ["b1", "b2", "b3"], "C": ["c1", "c2", "c3"]},
            "options": {"teamSize": 3, "twoCategoryStrategy": "larger", "allowIncompleteTeams": true},
            "seed": 0
        }),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    let teams = body["teams"].as_array().unwrap();
    assert_eq!(teams.len(), 3);
    for team in teams {
        let prefixes: Vec<char> = team
            .as_array()
            .unwrap()
            .iter()
            .map(|m| m.as_str().unwrap().chars().next().unwrap())
            .collect();
        assert_eq!(prefixes, vec!['a', 'b', 'c']);
    }
    assert_eq!(body["meta"]["incompleteTeams"], 0);
    assert_eq!(body["meta"]["seedUsed"], 0);
    assert_eq!(state.metrics.generated(), 1);
}

#[tokio::test]
async fn test_generate_defaults_and_ignored_fields() {
    let (app, _) = app();
    let (status, body) = post_json(
        app,
        json!({
            "categories": {"A": ["a1", "a2"]},
            "options": {"allowReuse": false}
        }),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["teams"].as_array().unwrap().len(), 1);
    assert_eq!(body["meta"]["incompleteTeams"], 1);
    assert!(body["meta"]["seedUsed"].is_u64());
}

#[tokio::test]
async fn test_generate_drops_incomplete_when_disallowed() {
    let (app, _) = app();
    let (status, body) = post_json(
        app,
        json!({
            "categories": {"A": ["a1", "a2"], "B": [], "C": []},
            "options": {"allowIncompleteTeams": false},
            "seed": 5
        }),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert!(body["teams"].as_array().unwrap().is_empty());
    assert_eq!(body["meta"]["incompleteTeams"], 0);
    assert_eq!(body["meta"]["assignedParticipants"], 0);
}

#[tokio::test]
async fn test_empty_request_yields_no_teams() {
    let (app, _) = app();
    let (status, body) = post_json(app, json!({})).await;
    assert_eq!(status, StatusCode::OK);
    assert!(body["teams"].as_array().unwrap().is_empty());
}

#[tokio::test]
async fn test_same_seed_same_response() {
    let request = json!({
        "categories": {"A": ["a1", "a2", "a3", "a4"], "B": ["b1", "b2"], "C": ["c1"]},
        "options": {"twoCategoryStrategy": "random"},
        "seed": 31
    });
    let (_, first) = post_json(app().0, request.clone()).await;
    let (_, second) = post_json(app().0, request).await;
    assert_eq!(first, second);
}

#[tokio::test]
async fn test_unknown_strategy_is_400() {
    let (app, state) = app();
    let (status, body) = post_json(
        app,
        json!({"categories": {"A": ["a1"]}, "options": {"twoCategoryStrategy": "smallest"}}),
    )
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["status"], 400);
    assert!(body["error"].as_str().unwrap().contains("smallest"));
    assert_eq!(state.metrics.rejected(), 1);
}

#[tokio::test]
async fn test_non_positive_team_size_is_400() {
    for size in [0, -3] {
        let (status, body) = post_json(
            app().0,
            json!({"categories": {"A": ["a1"]}, "options": {"teamSize": size}}),
        )
        .await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert!(body["error"].as_str().unwrap().contains("teamSize"));
    }
}

#[tokio::test]
async fn test_malformed_pools_are_400() {
    let (status, body) = post_json(app().0, json!({"categories": {"A": "not a list"}})).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["status"], 400);

    let (status, _) = post_json(app().0, json!({"categories": {"Z": ["z1"]}})).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_invalid_json_is_400() {
    let (status, bytes, _) = post(app().0, "/api/generate-teams", "{not json".into()).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    let body: Value = serde_json::from_slice(&bytes).unwrap();
    assert_eq!(body["status"], 400);
}

#[tokio::test]
async fn test_csv_download() {
    let request = json!({
        "categories": {"A": ["Ann"], "B": ["Bo"], "C": ["Cy"]},
        "seed": 12
    });
    let (status, bytes, headers) =
        post(app().0, "/api/generate-teams/csv", request.to_string()).await;

    assert_eq!(status, StatusCode::OK);
    assert!(
        headers[header::CONTENT_TYPE]
            .to_str()
            .unwrap()
            .starts_with("text/csv")
    );
    assert_eq!(headers["x-seed-used"], "12");
    let csv = String::from_utf8(bytes).unwrap();
    assert_eq!(csv, "\"Team 1\",\"Ann\",\"Bo\",\"Cy\"");
}

#[tokio::test]
async fn test_health() {
    let (app, _) = app();
    let (status, _) = post_json(
        app.clone(),
        json!({
            "categories": {"A": ["a1", "a2"], "B": ["b1", "b2"], "C": ["c1", "c2"]},
            "seed": 3
        }),
    )
    .await;
    assert_eq!(status, StatusCode::OK);

    let response = app
        .oneshot(Request::builder().uri("/health").body(Body::empty()).unwrap())
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    let body: Value = serde_json::from_slice(&bytes).unwrap();
    assert_eq!(body["status"], "healthy");
    assert_eq!(body["generated"], 1);
    assert_eq!(body["rejected"], 0);
    assert_eq!(body["teams_formed"], 2);
}
