//! Error presentation.
//!
//! Adapters return typed errors; this module decides what the user reads.
//! Keeping the mapping here means the error taxonomy can grow without
//! display strings leaking into adapter code.

use crate::fetcher::FetchError;
use crate::generation::GenerationError;
use crate::pdf::PdfError;
use crate::transcript::TranscriptError;

pub fn fetch_failure(err: &FetchError) -> String {
    match err {
        FetchError::InvalidUrl(_) => "that does not look like a valid URL".to_string(),
        FetchError::Connect(_) => "could not reach the site; check the address and your connection".to_string(),
        FetchError::Timeout => "the site took too long to respond".to_string(),
        FetchError::RedirectLoop => "the site redirected too many times".to_string(),
        FetchError::Http(status) => format!("the site answered with HTTP {status}"),
        FetchError::BodyTooLarge(bytes) => format!("the page is too large to process ({bytes} bytes)"),
        FetchError::UnsupportedContentType(ct) => format!("the URL is not an HTML page ({ct})"),
        FetchError::Charset(_) => "could not decode the page text".to_string(),
        FetchError::Io(_) | FetchError::Unknown(_) => format!("fetch failed: {err}"),
    }
}

pub fn pdf_failure(err: &PdfError) -> String {
    match err {
        PdfError::Parse(reason) => format!("could not read the PDF ({reason})"),
    }
}

pub fn transcript_failure(err: &TranscriptError) -> String {
    match err {
        TranscriptError::InvalidVideoId => {
            "that does not look like a YouTube video URL or id".to_string()
        }
        TranscriptError::CaptionsDisabled => {
            "this video has no captions, or captions are disabled".to_string()
        }
        TranscriptError::LanguageNotAvailable {
            requested,
            available,
        } => format!(
            "no '{requested}' captions for this video (available: {})",
            available.join(", ")
        ),
        TranscriptError::EmptyTranscript => "the caption track contained no text".to_string(),
        TranscriptError::Fetch(inner) => fetch_failure(inner),
    }
}

pub fn generation_failure(err: &GenerationError) -> String {
    match err {
        GenerationError::MissingApiKey => {
            "no API key configured; set GEMINI_API_KEY in the environment or a .env file".to_string()
        }
        GenerationError::Auth => "the API rejected the configured API key".to_string(),
        GenerationError::RateLimited => "rate limited by the API; try again in a moment".to_string(),
        GenerationError::Api { status, .. } => format!("the API returned an error (HTTP {status})"),
        GenerationError::EmptyResponse => "the model returned no usable text".to_string(),
        GenerationError::Http(_) => "could not reach the generation API".to_string(),
    }
}
