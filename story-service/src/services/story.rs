//! Story generation: validates the word, then either fills the placeholder
//! template (mock mode) or asks the configured provider for a story.

use crate::config::GoogleConfig;
use crate::models::{GenerationConfig, StoryLength};
use crate::services::providers::gemini::{GeminiConfig, GeminiTextProvider};
use crate::services::providers::{GenerationParams, ProviderError, TextProvider};
use service_core::error::AppError;
use std::sync::Arc;
use std::time::Duration;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum StoryError {
    #[error("{0}")]
    InvalidInput(String),

    #[error("Story generation failed: {0}")]
    Provider(#[from] ProviderError),
}

impl From<StoryError> for AppError {
    fn from(err: StoryError) -> Self {
        match err {
            StoryError::InvalidInput(msg) => AppError::BadRequest(anyhow::anyhow!(msg)),
            StoryError::Provider(e) => AppError::BadGateway(format!("Story generation failed: {}", e)),
        }
    }
}

/// Placeholder story returned when no usable credential is configured.
pub fn mock_story(word: &str) -> String {
    format!(
        "This is a mock story for the word '{word}'. The story generation is currently running \
         in mock mode because the GOOGLE_API_KEY is not configured. Please set the API key in \
         your .env file to get real stories."
    )
}

#[derive(Clone)]
enum Mode {
    Mock,
    Live(Arc<dyn TextProvider>),
}

/// Produces story text for a vocabulary word.
///
/// The mode is fixed when the generator is built, so every request served by
/// one process reports the same `mock` flag.
#[derive(Clone)]
pub struct StoryGenerator {
    mode: Mode,
}

impl StoryGenerator {
    pub fn mock() -> Self {
        Self { mode: Mode::Mock }
    }

    pub fn with_provider(provider: Arc<dyn TextProvider>) -> Self {
        Self {
            mode: Mode::Live(provider),
        }
    }

    /// Gemini-backed generator when the key is usable, mock mode otherwise.
    pub fn from_config(google: &GoogleConfig) -> Result<Self, ProviderError> {
        let Some(api_key) = google.usable_api_key() else {
            tracing::warn!(
                "GOOGLE_API_KEY is missing or a placeholder; story generation runs in mock mode"
            );
            return Ok(Self::mock());
        };

        let provider = GeminiTextProvider::new(GeminiConfig {
            api_key: api_key.to_string(),
            model: google.text_model.clone(),
            api_base: google.api_base.clone(),
            timeout: Duration::from_secs(google.request_timeout_secs),
        })?;

        tracing::info!(model = %google.text_model, "Initialized Gemini text provider");

        Ok(Self::with_provider(Arc::new(provider)))
    }

    pub fn is_mock(&self) -> bool {
        matches!(self.mode, Mode::Mock)
    }

    /// Generate a story around `word`, returning the trimmed story text.
    pub async fn generate_story(
        &self,
        word: &str,
        length: StoryLength,
        config: &GenerationConfig,
    ) -> Result<String, StoryError> {
        let word = word.trim();
        if word.is_empty() {
            return Err(StoryError::InvalidInput(
                "'word' must be a non-empty string".to_string(),
            ));
        }
        config.check().map_err(StoryError::InvalidInput)?;

        let provider = match &self.mode {
            Mode::Mock => return Ok(mock_story(word)),
            Mode::Live(provider) => provider,
        };

        let params = GenerationParams {
            temperature: Some(config.temperature),
            max_tokens: Some(config.max_tokens_for(length)),
        };
        let prompt = length.prompt(word);

        let response = provider.generate(&prompt, &params).await.map_err(|e| {
            tracing::warn!(provider = provider.name(), error = %e, "Story generation failed");
            e
        })?;

        let story = response
            .text
            .as_deref()
            .map(str::trim)
            .filter(|text| !text.is_empty())
            .ok_or(ProviderError::EmptyResponse)?
            .to_string();

        tracing::info!(
            provider = provider.name(),
            length = %length,
            input_tokens = response.input_tokens,
            output_tokens = response.output_tokens,
            finish_reason = ?response.finish_reason,
            "Story generated"
        );

        Ok(story)
    }
}
