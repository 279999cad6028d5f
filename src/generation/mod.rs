//! Gemini generation adapter.
//!
//! One `generateContent` call per request. Callers are responsible for
//! never passing more than one chunk of content; the multi-chunk fan-out
//! policy lives in the shell.

pub mod errors;
pub mod types;

pub use errors::GenerationError;

use async_trait::async_trait;
use reqwest::StatusCode;
use tracing::{info, instrument};

use crate::config::Config;
use crate::fetcher;
use self::types::{Candidate, Content, GenerateContentRequest, GenerateContentResponse, Part};

const DEFAULT_BASE_URL: &str = "https://generativelanguage.googleapis.com";

/// Prompt prefix for the video summary path.
pub const SUMMARY_PROMPT: &str = "You are a YouTube video summarizer. Take the transcript text \
and summarize the entire video within 500 words, organizing the important points under proper \
sub-headings in a concise manner. Provide the summary of the text given here:";

/// Prompt prefix for answering a question about stored content.
pub fn question_prompt(question: &str) -> String {
    format!("Answer the following based on the text:\n\n{question}\n\nContent:")
}

/// Anything that turns a prompt plus content into generated text. The
/// shell depends on this trait so tests can substitute a stub.
#[async_trait]
pub trait Generator: Send + Sync {
    async fn generate(&self, prompt_prefix: &str, content: &str)
    -> Result<String, GenerationError>;
}

#[derive(Debug, Clone)]
pub struct GeminiClient {
    http: reqwest::Client,
    base_url: String,
    model: String,
    api_key: String,
}

impl GeminiClient {
    pub fn new(config: &Config) -> Result<Self, GenerationError> {
        let api_key = config
            .gemini_api_key()
            .ok_or(GenerationError::MissingApiKey)?;
        Ok(Self {
            http: fetcher::get_client().clone(),
            base_url: DEFAULT_BASE_URL.to_string(),
            model: config.model().to_string(),
            api_key: api_key.to_string(),
        })
    }

    /// Point at a different endpoint. Used by tests to mock the API.
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }
}

#[async_trait]
impl Generator for GeminiClient {
    #[instrument(skip_all, fields(model = %self.model, content_chars = content.chars().count()))]
    async fn generate(
        &self,
        prompt_prefix: &str,
        content: &str,
    ) -> Result<String, GenerationError> {
        let url = format!(
            "{}/v1beta/models/{}:generateContent",
            self.base_url, self.model
        );
        let request = GenerateContentRequest {
            contents: vec![Content {
                parts: vec![Part {
                    text: format!("{prompt_prefix}\n\n{content}"),
                }],
            }],
        };

        let response = self
            .http
            .post(&url)
            .header("x-goog-api-key", &self.api_key)
            .json(&request)
            .send()
            .await?;

        let status = response.status();
        if status == StatusCode::UNAUTHORIZED || status == StatusCode::FORBIDDEN {
            return Err(GenerationError::Auth);
        }
        if status == StatusCode::TOO_MANY_REQUESTS {
            return Err(GenerationError::RateLimited);
        }
        if !status.is_success() {
            let message = response.text().await.unwrap_or_default();
            return Err(GenerationError::Api { status, message });
        }

        let parsed: GenerateContentResponse = response.json().await?;
        let text = parsed
            .candidates
            .first()
            .and_then(Candidate::text)
            .filter(|t| !t.trim().is_empty())
            .ok_or(GenerationError::EmptyResponse)?;

        info!(chars = text.chars().count(), "generated text");
        Ok(text)
    }
}
