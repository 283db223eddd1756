use secrecy::{ExposeSecret, Secret};
use service_core::config as core_config;
use service_core::error::AppError;
use std::env;

/// Default Gemini REST endpoint.
pub const DEFAULT_GEMINI_API_BASE: &str = "https://generativelanguage.googleapis.com/v1beta";

const DEFAULT_TEXT_MODEL: &str = "gemini-2.0-flash";

/// Upper bound on a single provider round trip.
const DEFAULT_PROVIDER_TIMEOUT_SECS: u64 = 30;

/// Key values shipped in sample `.env` files. Matching is case-insensitive.
const PLACEHOLDER_API_KEYS: [&str; 6] = [
    "your_google_api_key_here",
    "your_api_key_here",
    "AIza-placeholder",
    "placeholder",
    "xxx",
    "fake_key",
];

#[derive(Debug, Clone)]
pub struct StoryConfig {
    pub common: core_config::Config,
    pub google: GoogleConfig,
    pub cors: CorsConfig,
}

#[derive(Debug, Clone)]
pub struct GoogleConfig {
    /// Absent, blank or placeholder keys switch the service into mock mode.
    pub api_key: Option<Secret<String>>,
    pub api_base: String,
    pub text_model: String,
    pub request_timeout_secs: u64,
}

#[derive(Debug, Clone)]
pub struct CorsConfig {
    /// `*` (or an empty list) allows any origin.
    pub allowed_origins: Vec<String>,
}

impl StoryConfig {
    /// Every story setting has a default, in prod as elsewhere; only the
    /// credential is optional.
    pub fn load() -> Result<Self, AppError> {
        let common_config = core_config::Config::load()?;
        Self::from_vars(common_config, |key| env::var(key).ok())
    }

    /// Build the service settings from a variable lookup.
    pub fn from_vars(
        common: core_config::Config,
        vars: impl Fn(&str) -> Option<String>,
    ) -> Result<Self, AppError> {
        let setting = |key: &str, default: &str| vars(key).unwrap_or_else(|| default.to_string());

        Ok(StoryConfig {
            common,
            google: GoogleConfig {
                api_key: vars("GOOGLE_API_KEY").map(Secret::new),
                api_base: setting("GEMINI_API_BASE", DEFAULT_GEMINI_API_BASE),
                text_model: setting("STORY_TEXT_MODEL", DEFAULT_TEXT_MODEL),
                request_timeout_secs: parse_timeout_secs(vars("STORY_PROVIDER_TIMEOUT_SECS"))?,
            },
            cors: CorsConfig {
                allowed_origins: setting("CORS_ALLOWED_ORIGINS", "*")
                    .split(',')
                    .map(|origin| origin.trim().to_string())
                    .filter(|origin| !origin.is_empty())
                    .collect(),
            },
        })
    }
}

fn parse_timeout_secs(raw: Option<String>) -> Result<u64, AppError> {
    let Some(raw) = raw else {
        return Ok(DEFAULT_PROVIDER_TIMEOUT_SECS);
    };

    match raw.trim().parse::<u64>() {
        Ok(secs) if secs > 0 => Ok(secs),
        _ => Err(AppError::ConfigError(anyhow::anyhow!(
            "STORY_PROVIDER_TIMEOUT_SECS must be a positive number of seconds, got '{}'",
            raw
        ))),
    }
}

impl GoogleConfig {
    /// Settings for local runs and tests: no credential, default endpoint.
    pub fn without_credential() -> Self {
        Self {
            api_key: None,
            api_base: DEFAULT_GEMINI_API_BASE.to_string(),
            text_model: DEFAULT_TEXT_MODEL.to_string(),
            request_timeout_secs: DEFAULT_PROVIDER_TIMEOUT_SECS,
        }
    }

    /// The configured key, if it is one the provider could plausibly accept.
    pub fn usable_api_key(&self) -> Option<&str> {
        let key = self.api_key.as_ref()?.expose_secret().trim();
        if key.is_empty() || is_placeholder(key) {
            return None;
        }
        Some(key)
    }
}

fn is_placeholder(key: &str) -> bool {
    PLACEHOLDER_API_KEYS
        .iter()
        .any(|placeholder| placeholder.eq_ignore_ascii_case(key))
}
