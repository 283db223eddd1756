//! Request/response types for story generation.

use serde::{Deserialize, Serialize};
use validator::{Validate, ValidationError};

/// Sampling temperature used when the caller does not choose one.
pub const DEFAULT_TEMPERATURE: f32 = 0.7;

/// Output token budget used when the caller does not choose one.
pub const DEFAULT_MAX_TOKENS: u32 = 500;

/// Body of `POST /generate_story`.
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct StoryRequest {
    /// The vocabulary word to build a story around.
    #[validate(custom(function = "validate_not_blank"))]
    pub word: String,
    #[serde(default)]
    pub length: StoryLength,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct StoryResponse {
    pub word: String,
    pub story: String,
    pub length: StoryLength,
    /// True when the story came from the placeholder template.
    pub mock: bool,
}

/// How long the generated story should be.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StoryLength {
    Brief,
    #[default]
    Short,
    Medium,
    Long,
}

impl StoryLength {
    /// Hard ceiling on output tokens for this length.
    pub fn token_cap(self) -> u32 {
        match self {
            StoryLength::Brief => 200,
            StoryLength::Short => 400,
            StoryLength::Medium => 650,
            StoryLength::Long => 1000,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            StoryLength::Brief => "brief",
            StoryLength::Short => "short",
            StoryLength::Medium => "medium",
            StoryLength::Long => "long",
        }
    }

    /// Instruction sent to the provider for `word`.
    pub fn prompt(self, word: &str) -> String {
        let shape = match self {
            StoryLength::Brief => "a very short fantasy story in just 1-2 paragraphs (100-150 words)",
            StoryLength::Short => "a short fantasy story (200-300 words)",
            StoryLength::Medium => {
                "a medium-length fantasy story (400-500 words) with rich details"
            }
            StoryLength::Long => {
                "a detailed, engaging fantasy story (600-800 words) with character development and a clear plot"
            }
        };

        format!(
            "Write {shape} that uses the vocabulary word '{word}' in context and clearly \
             demonstrates its meaning. Keep it educational and appropriate for children."
        )
    }
}

impl std::fmt::Display for StoryLength {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Sampling parameters for one generation call.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GenerationConfig {
    /// Valid range 0.0 - 2.0.
    pub temperature: f32,
    /// Must be positive.
    pub max_tokens: u32,
}

impl Default for GenerationConfig {
    fn default() -> Self {
        Self {
            temperature: DEFAULT_TEMPERATURE,
            max_tokens: DEFAULT_MAX_TOKENS,
        }
    }
}

impl GenerationConfig {
    pub fn check(&self) -> Result<(), String> {
        if !(0.0..=2.0).contains(&self.temperature) {
            return Err(format!(
                "temperature must be between 0.0 and 2.0, got {}",
                self.temperature
            ));
        }
        if self.max_tokens == 0 {
            return Err("max_tokens must be positive".to_string());
        }
        Ok(())
    }

    /// Token budget after applying the length's ceiling.
    pub fn max_tokens_for(&self, length: StoryLength) -> u32 {
        self.max_tokens.min(length.token_cap())
    }
}

fn validate_not_blank(value: &str) -> Result<(), ValidationError> {
    if value.trim().is_empty() {
        let mut err = ValidationError::new("blank");
        err.message = Some("'word' must be a non-empty string".into());
        return Err(err);
    }
    Ok(())
}
