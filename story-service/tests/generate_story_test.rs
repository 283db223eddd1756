//! Request handling tests for `POST /generate_story`.
//!
//! The router is driven in-process with fake providers; no network is used.

mod common;

use axum::http::StatusCode;
use common::{live_router, post_story, router_with, FailingProvider, FixedTextProvider, PanickingProvider};
use story_service::services::providers::ProviderError;
use story_service::services::{mock_story, StoryGenerator};

#[tokio::test]
async fn mock_mode_returns_placeholder_story() {
    let (status, body) = post_story(router_with(StoryGenerator::mock()), r#"{"word":"luminous"}"#).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["word"], "luminous");
    assert_eq!(body["mock"], true);
    assert_eq!(body["length"], "short");
    assert!(body["story"].as_str().unwrap().contains("luminous"));
}

#[tokio::test]
async fn mock_mode_story_contains_every_word() {
    for word in ["ephemeral", "Serendipity", "ubiquitous", "café"] {
        let payload = serde_json::json!({ "word": word }).to_string();
        let (status, body) = post_story(router_with(StoryGenerator::mock()), &payload).await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["story"], mock_story(word));
        assert_eq!(body["mock"], true);
    }
}

#[tokio::test]
async fn response_echoes_trimmed_word() {
    let (_, mock_body) =
        post_story(router_with(StoryGenerator::mock()), r#"{"word":"  luminous \n"}"#).await;
    assert_eq!(mock_body["word"], "luminous");

    let (_, live_body) = post_story(
        live_router(FixedTextProvider("A luminous dragon...".to_string())),
        r#"{"word":"  luminous "}"#,
    )
    .await;
    assert_eq!(live_body["word"], "luminous");
}

#[tokio::test]
async fn live_mode_returns_provider_text() {
    let (status, body) = post_story(
        live_router(FixedTextProvider("A luminous dragon...".to_string())),
        r#"{"word":"luminous"}"#,
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(
        body,
        serde_json::json!({
            "word": "luminous",
            "story": "A luminous dragon...",
            "length": "short",
            "mock": false
        })
    );
}

#[tokio::test]
async fn requested_length_is_echoed() {
    let (status, body) = post_story(
        router_with(StoryGenerator::mock()),
        r#"{"word":"luminous","length":"long"}"#,
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["length"], "long");
}

#[tokio::test]
async fn invalid_words_are_rejected_in_every_mode() {
    let bodies = [
        r#"{"word":""}"#,
        r#"{"word":"   "}"#,
        r#"{"word":42}"#,
        r#"{"word":null}"#,
        r#"{}"#,
        r#"{"word":"luminous","length":"epic"}"#,
        "not json",
    ];

    for payload in bodies {
        let (status, body) = post_story(router_with(StoryGenerator::mock()), payload).await;
        assert_eq!(status, StatusCode::BAD_REQUEST, "mock: {payload}");
        assert!(body["error"].is_string(), "mock: {payload}");

        let (status, _) = post_story(
            live_router(FixedTextProvider("unused".to_string())),
            payload,
        )
        .await;
        assert_eq!(status, StatusCode::BAD_REQUEST, "live: {payload}");
    }
}

#[tokio::test]
async fn provider_failures_map_to_bad_gateway() {
    let failures: [fn() -> ProviderError; 5] = [
        || ProviderError::Timeout,
        || ProviderError::ApiError("Gemini API error 500: boom".to_string()),
        || ProviderError::RateLimited,
        || ProviderError::EmptyResponse,
        || ProviderError::ContentFiltered("safety filters".to_string()),
    ];

    for failure in failures {
        let (status, body) =
            post_story(live_router(FailingProvider(failure)), r#"{"word":"luminous"}"#).await;

        assert_eq!(status, StatusCode::BAD_GATEWAY);
        assert!(body["error"].as_str().unwrap().starts_with("Bad Gateway"));
    }
}

#[tokio::test]
async fn blank_provider_text_maps_to_bad_gateway() {
    let (status, _) = post_story(
        live_router(FixedTextProvider("   ".to_string())),
        r#"{"word":"luminous"}"#,
    )
    .await;

    assert_eq!(status, StatusCode::BAD_GATEWAY);
}

#[tokio::test]
async fn unexpected_failures_return_500_without_details() {
    let (status, body) = post_story(live_router(PanickingProvider), r#"{"word":"luminous"}"#).await;

    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(body["error"], "Internal server error");
    assert!(!body.to_string().contains("secret-internal-detail"));
}
