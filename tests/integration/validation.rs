//! Request rejection tests
//!
//! Every malformed request is answered with 400 before any provider call.

use axum::http::StatusCode;
use pretty_assertions::assert_eq;
use serde_json::{json, Value};

use crate::common::{openai_only_config, recording_server, TestHarness};

#[tokio::test]
async fn test_missing_or_blank_message_is_400_without_call() {
    let (server, provider) = recording_server(openai_only_config());

    for body in [
        json!({"provider": "openai"}),
        json!({"provider": "openai", "message": ""}),
        json!({"provider": "openai", "message": "   \t\n"}),
    ] {
        let response = server.post("/api/chat").json(&body).await;

        response.assert_status(StatusCode::BAD_REQUEST);
        assert_eq!(response.json::<Value>()["error"], "Message is required");
    }

    assert_eq!(provider.calls(), 0);
}

#[tokio::test]
async fn test_unsupported_provider_is_400_without_call() {
    let (server, provider) = recording_server(openai_only_config());

    let response = server
        .post("/api/chat")
        .json(&json!({"provider": "mistral", "message": "hi"}))
        .await;

    response.assert_status(StatusCode::BAD_REQUEST);
    assert_eq!(
        response.json::<Value>()["error"],
        "Unsupported provider: mistral"
    );
    assert_eq!(provider.calls(), 0);
}

#[tokio::test]
async fn test_unresolvable_key_is_400_without_call() {
    let (server, provider) = recording_server(openai_only_config());

    let response = server
        .post("/api/chat")
        .json(&json!({"provider": "gemini", "message": "hi"}))
        .await;

    response.assert_status(StatusCode::BAD_REQUEST);
    assert_eq!(
        response.json::<Value>()["error"],
        "Missing API key for provider gemini"
    );
    assert_eq!(provider.calls(), 0);
}

#[tokio::test]
async fn test_malformed_json_is_400_with_detail() {
    let (server, provider) = recording_server(openai_only_config());

    let response = server.post("/api/chat").text("{\"message\": ").await;

    response.assert_status(StatusCode::BAD_REQUEST);
    let body: Value = response.json();
    assert_eq!(body["error"], "Invalid JSON body");
    assert!(body["detail"].is_string());
    assert_eq!(provider.calls(), 0);
}

#[tokio::test]
async fn test_non_object_json_is_400_without_call() {
    let (server, provider) = recording_server(openai_only_config());

    for body in [json!([null, null, null, "hi"]), json!("hi"), json!(42)] {
        let response = server.post("/api/chat").json(&body).await;

        response.assert_status(StatusCode::BAD_REQUEST);
        assert_eq!(response.json::<Value>()["error"], "Invalid JSON body");
    }

    assert_eq!(provider.calls(), 0);
}

#[tokio::test]
async fn test_path_like_model_is_400_without_call() {
    let mut config = openai_only_config();
    config.gemini.api_key = Some("configured-gemini-key".to_string());
    let (server, provider) = recording_server(config);

    for model in ["../../../admin/files", "gemini/../../x", "m?key=other"] {
        let response = server
            .post("/api/chat")
            .json(&json!({"provider": "gemini", "model": model, "message": "hi"}))
            .await;

        response.assert_status(StatusCode::BAD_REQUEST);
    }

    assert_eq!(provider.calls(), 0);
}

#[tokio::test]
async fn test_valid_request_reaches_provider_once() {
    let (server, provider) = recording_server(openai_only_config());

    let response = server
        .post("/api/chat")
        .json(&json!({"message": "hi"}))
        .await;

    response.assert_status_ok();
    let body: Value = response.json();
    assert_eq!(body["text"], "recorded");
    assert_eq!(body["provider"], "openai");
    assert_eq!(provider.calls(), 1);
}

#[tokio::test]
async fn test_rejected_requests_never_reach_upstream() {
    let harness = TestHarness::new().await;

    harness
        .server
        .post("/api/chat")
        .json(&json!({"provider": "nope", "message": "hi"}))
        .await
        .assert_status(StatusCode::BAD_REQUEST);
    harness
        .server
        .post("/api/chat")
        .json(&json!({"provider": "gemini", "message": " "}))
        .await
        .assert_status(StatusCode::BAD_REQUEST);

    assert!(harness.upstream.received().await.is_empty());
}
