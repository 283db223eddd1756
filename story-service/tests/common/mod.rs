//! Shared helpers for story-service integration tests.

#![allow(dead_code)]

use async_trait::async_trait;
use axum::{
    body::Body,
    http::{Request, StatusCode},
    Router,
};
use std::sync::Arc;
use story_service::config::CorsConfig;
use story_service::services::providers::{
    FinishReason, GenerationParams, ProviderError, ProviderResponse, TextProvider,
};
use story_service::services::StoryGenerator;
use story_service::startup::{build_router, AppState};
use tower::util::ServiceExt;

/// Provider that always answers with the same text.
pub struct FixedTextProvider(pub String);

#[async_trait]
impl TextProvider for FixedTextProvider {
    fn name(&self) -> &str {
        "fixed"
    }

    async fn generate(
        &self,
        _prompt: &str,
        _params: &GenerationParams,
    ) -> Result<ProviderResponse, ProviderError> {
        Ok(ProviderResponse {
            text: Some(self.0.clone()),
            input_tokens: 10,
            output_tokens: 20,
            finish_reason: FinishReason::Complete,
        })
    }
}

/// Provider that fails every call with an error built by the closure.
pub struct FailingProvider(pub fn() -> ProviderError);

#[async_trait]
impl TextProvider for FailingProvider {
    fn name(&self) -> &str {
        "failing"
    }

    async fn generate(
        &self,
        _prompt: &str,
        _params: &GenerationParams,
    ) -> Result<ProviderResponse, ProviderError> {
        Err((self.0)())
    }
}

/// Provider whose handler blows up mid-request.
pub struct PanickingProvider;

#[async_trait]
impl TextProvider for PanickingProvider {
    fn name(&self) -> &str {
        "panicking"
    }

    async fn generate(
        &self,
        _prompt: &str,
        _params: &GenerationParams,
    ) -> Result<ProviderResponse, ProviderError> {
        panic!("provider state corrupted: secret-internal-detail")
    }
}

pub fn any_origin() -> CorsConfig {
    CorsConfig {
        allowed_origins: vec!["*".to_string()],
    }
}

pub fn router_with(generator: StoryGenerator) -> Router {
    build_router(AppState::new(generator), &any_origin())
}

pub fn live_router(provider: impl TextProvider + 'static) -> Router {
    router_with(StoryGenerator::with_provider(Arc::new(provider)))
}

/// POST `body` to `/generate_story` and return status plus parsed JSON body.
pub async fn post_story(app: Router, body: &str) -> (StatusCode, serde_json::Value) {
    let response = app
        .oneshot(
            Request::builder()
                .method("POST")
                .uri("/generate_story")
                .header("content-type", "application/json")
                .body(Body::from(body.to_string()))
                .unwrap(),
        )
        .await
        .unwrap();

    let status = response.status();
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    let json = serde_json::from_slice(&bytes).unwrap_or(serde_json::Value::Null);

    (status, json)
}
