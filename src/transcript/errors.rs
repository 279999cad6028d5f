use thiserror::Error;

use crate::fetcher::FetchError;

#[derive(Error, Debug)]
pub enum TranscriptError {
    #[error("not a recognizable youtube video id or url")]
    InvalidVideoId,

    #[error("captions are disabled or unavailable for this video")]
    CaptionsDisabled,

    #[error("no caption track for language '{requested}' (available: {})", .available.join(", "))]
    LanguageNotAvailable {
        requested: String,
        available: Vec<String>,
    },

    #[error("caption track contained no text")]
    EmptyTranscript,

    #[error(transparent)]
    Fetch(#[from] FetchError),
}
