//! Configuration handling for the application.
//!
//! Everything comes from environment variables (a `.env` file is loaded by
//! the binary before this runs). The API key is optional here so that the
//! offline paths (scraping, PDF extraction) work without one; the
//! generation client checks for it when it is actually needed.

use std::env;

use thiserror::Error;

/// Environment variable names. Public so tests can refer to them.
pub const ENV_GEMINI_API_KEY: &str = "GEMINI_API_KEY";
pub const ENV_MODEL: &str = "CONDENSE_MODEL";
pub const ENV_MAX_CHUNK_CHARS: &str = "CONDENSE_MAX_CHUNK_CHARS";

const DEFAULT_MODEL: &str = "gemini-2.0-flash";
const DEFAULT_MAX_CHUNK_CHARS: usize = 8000;

/// Application runtime configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    gemini_api_key: Option<String>,
    model: String,
    max_chunk_chars: usize,
}

impl Config {
    /// Create a new config explicitly.
    pub fn new(
        gemini_api_key: Option<String>,
        model: impl Into<String>,
        max_chunk_chars: usize,
    ) -> Result<Self, ConfigError> {
        if max_chunk_chars == 0 {
            return Err(ConfigError::InvalidValue {
                field: ENV_MAX_CHUNK_CHARS,
                reason: "must be at least 1".to_string(),
            });
        }
        Ok(Self {
            gemini_api_key,
            model: model.into(),
            max_chunk_chars,
        })
    }

    /// Load from environment variables, falling back to development
    /// defaults for everything except the API key.
    pub fn from_env() -> Result<Self, ConfigError> {
        let gemini_api_key = env::var(ENV_GEMINI_API_KEY)
            .ok()
            .filter(|v| !v.trim().is_empty());
        let model = env::var(ENV_MODEL).unwrap_or_else(|_| DEFAULT_MODEL.to_string());
        let max_chunk_chars = match env::var(ENV_MAX_CHUNK_CHARS) {
            Ok(raw) => raw.parse::<usize>().map_err(|_| ConfigError::InvalidValue {
                field: ENV_MAX_CHUNK_CHARS,
                reason: format!("'{raw}' is not a positive integer"),
            })?,
            Err(_) => DEFAULT_MAX_CHUNK_CHARS,
        };
        Self::new(gemini_api_key, model, max_chunk_chars)
    }

    /// Gemini API key, if one was supplied.
    pub fn gemini_api_key(&self) -> Option<&str> {
        self.gemini_api_key.as_deref()
    }

    /// Generation model identifier.
    pub fn model(&self) -> &str {
        &self.model
    }

    /// Upper bound, in characters, for content sent per generation call.
    pub fn max_chunk_chars(&self) -> usize {
        self.max_chunk_chars
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            gemini_api_key: None,
            model: DEFAULT_MODEL.to_string(),
            max_chunk_chars: DEFAULT_MAX_CHUNK_CHARS,
        }
    }
}

/// Errors that can occur while building a configuration.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    #[error("invalid value for '{field}': {reason}")]
    InvalidValue { field: &'static str, reason: String },
}
