//! YouTube caption transcript adapter.
//!
//! There is no official transcript API; the watch page embeds a player
//! response JSON whose `captionTracks` array points at timed-text XML
//! documents, one per language. We pull the array out of the page, pick
//! the requested track and flatten its cues into plain text.

pub mod errors;
pub mod types;

pub use errors::TranscriptError;
pub use types::CaptionTrack;

use once_cell::sync::Lazy;
use regex::Regex;
use scraper::{Html, Selector};
use tracing::{info, instrument};

use crate::extractor::collapse_whitespace;
use crate::fetcher::{self, FetchError};

const DEFAULT_BASE_URL: &str = "https://www.youtube.com";
const CAPTIONS_MARKER: &str = "\"captionTracks\":";

static VIDEO_ID_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?:v=|/)([0-9A-Za-z_-]{11})").unwrap());
static RAW_ID_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"^[0-9A-Za-z_-]{11}$").unwrap());
static NUMERIC_ENTITY_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"&#(\d+);").unwrap());

/// Accepts a bare 11-character video id or any of the usual URL shapes
/// (`watch?v=`, `youtu.be/`, `/embed/`).
pub fn parse_video_id(input: &str) -> Option<String> {
    let input = input.trim();
    if RAW_ID_RE.is_match(input) {
        return Some(input.to_string());
    }
    VIDEO_ID_RE
        .captures(input)
        .map(|caps| caps[1].to_string())
}

#[derive(Debug, Clone)]
pub struct TranscriptClient {
    http: reqwest::Client,
    base_url: String,
}

impl Default for TranscriptClient {
    fn default() -> Self {
        Self {
            http: fetcher::get_client().clone(),
            base_url: DEFAULT_BASE_URL.to_string(),
        }
    }
}

impl TranscriptClient {
    pub fn new() -> Self {
        Self::default()
    }

    /// Point at a different host. Used by tests to mock the watch page.
    pub fn with_base_url(base_url: impl Into<String>) -> Self {
        Self {
            http: fetcher::get_client().clone(),
            base_url: base_url.into(),
        }
    }

    /// List the caption tracks available for a video.
    #[instrument(skip(self))]
    pub async fn list_languages(
        &self,
        video_id: &str,
    ) -> Result<Vec<CaptionTrack>, TranscriptError> {
        let html = self.watch_page(video_id).await?;
        let tracks = extract_caption_tracks(&html)?;
        info!(tracks = tracks.len(), "found caption tracks");
        Ok(tracks)
    }

    /// Fetch the transcript for one language as a single plain-text string.
    #[instrument(skip(self))]
    pub async fn fetch_transcript(
        &self,
        video_id: &str,
        language_code: &str,
    ) -> Result<String, TranscriptError> {
        let tracks = self.list_languages(video_id).await?;
        let track = tracks
            .iter()
            .find(|t| t.language_code == language_code)
            .ok_or_else(|| TranscriptError::LanguageNotAvailable {
                requested: language_code.to_string(),
                available: tracks.iter().map(|t| t.language_code.clone()).collect(),
            })?;

        let xml = self.get_text(&track.base_url).await?;
        let transcript = parse_cues(&xml);
        if transcript.is_empty() {
            return Err(TranscriptError::EmptyTranscript);
        }

        info!(chars = transcript.chars().count(), "fetched transcript");
        Ok(transcript)
    }

    async fn watch_page(&self, video_id: &str) -> Result<String, TranscriptError> {
        let url = format!("{}/watch?v={}", self.base_url, video_id);
        self.get_text(&url).await
    }

    async fn get_text(&self, url: &str) -> Result<String, TranscriptError> {
        let response = self
            .http
            .get(url)
            .send()
            .await
            .map_err(FetchError::from_reqwest_error)?;

        let status = response.status();
        if !status.is_success() {
            return Err(FetchError::Http(status).into());
        }

        Ok(response
            .text()
            .await
            .map_err(FetchError::from_reqwest_error)?)
    }
}

fn extract_caption_tracks(watch_html: &str) -> Result<Vec<CaptionTrack>, TranscriptError> {
    let Some(pos) = watch_html.find(CAPTIONS_MARKER) else {
        return Err(TranscriptError::CaptionsDisabled);
    };
    let json_start = &watch_html[pos + CAPTIONS_MARKER.len()..];

    // The array sits inside a much larger script blob; a streaming
    // deserializer reads exactly one JSON value and ignores the rest.
    let mut stream =
        serde_json::Deserializer::from_str(json_start).into_iter::<Vec<CaptionTrack>>();
    match stream.next() {
        Some(Ok(tracks)) if !tracks.is_empty() => Ok(tracks),
        _ => Err(TranscriptError::CaptionsDisabled),
    }
}

/// Flatten timed-text XML (`<transcript><text start=.. dur=..>`) into one
/// space-joined string, in cue order.
fn parse_cues(xml: &str) -> String {
    let fragment = Html::parse_fragment(xml);
    let cue_selector = Selector::parse("text").unwrap();

    let cues: Vec<String> = fragment
        .select(&cue_selector)
        .map(|el| el.text().collect::<String>())
        .map(|cue| collapse_whitespace(&unescape_entities(&cue)))
        .filter(|cue| !cue.is_empty())
        .collect();

    cues.join(" ")
}

/// Cue payloads arrive double-escaped (`&amp;#39;` in the raw XML), so one
/// round of entity decoding remains after the parser's.
fn unescape_entities(text: &str) -> String {
    let text = text.replace("&amp;", "&");
    let text = NUMERIC_ENTITY_RE.replace_all(&text, |caps: &regex::Captures| {
        caps[1]
            .parse::<u32>()
            .ok()
            .and_then(char::from_u32)
            .map(String::from)
            .unwrap_or_default()
    });
    text.replace("&quot;", "\"")
        .replace("&lt;", "<")
        .replace("&gt;", ">")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_video_id_from_watch_url() {
        assert_eq!(
            parse_video_id("https://www.youtube.com/watch?v=dQw4w9WgXcQ"),
            Some("dQw4w9WgXcQ".to_string())
        );
    }

    #[test]
    fn test_parse_video_id_from_short_url() {
        assert_eq!(
            parse_video_id("https://youtu.be/dQw4w9WgXcQ?t=42"),
            Some("dQw4w9WgXcQ".to_string())
        );
    }

    #[test]
    fn test_parse_video_id_raw() {
        assert_eq!(
            parse_video_id("dQw4w9WgXcQ"),
            Some("dQw4w9WgXcQ".to_string())
        );
    }

    #[test]
    fn test_parse_video_id_rejects_garbage() {
        assert_eq!(parse_video_id("not a video"), None);
        assert_eq!(parse_video_id(""), None);
    }

    #[test]
    fn test_extract_caption_tracks() {
        let html = r#"<html><script>var ytInitialPlayerResponse = {"captions":{"playerCaptionsTracklistRenderer":{"captionTracks":[{"baseUrl":"https://example.com/t?lang=en","languageCode":"en","name":{"simpleText":"English"}},{"baseUrl":"https://example.com/t?lang=ta","languageCode":"ta","kind":"asr"}],"audioTracks":[]}}};</script></html>"#;
        let tracks = extract_caption_tracks(html).unwrap();
        assert_eq!(tracks.len(), 2);
        assert_eq!(tracks[0].language_code, "en");
        assert_eq!(tracks[0].display_name(), "English");
        assert_eq!(tracks[1].display_name(), "ta (auto-generated)");
    }

    #[test]
    fn test_extract_caption_tracks_missing_is_disabled() {
        let html = "<html><body>no captions here</body></html>";
        assert!(matches!(
            extract_caption_tracks(html),
            Err(TranscriptError::CaptionsDisabled)
        ));
    }

    #[test]
    fn test_parse_cues_joins_in_order() {
        let xml = r#"<?xml version="1.0" encoding="utf-8"?><transcript><text start="0" dur="2">hello</text><text start="2" dur="3">world again</text></transcript>"#;
        assert_eq!(parse_cues(xml), "hello world again");
    }

    #[test]
    fn test_parse_cues_decodes_double_escaped_entities() {
        // The raw XML carries &amp;#39;; the parser's pass leaves &#39;
        let xml = r#"<transcript><text start="0" dur="1">it&amp;#39;s here</text></transcript>"#;
        assert_eq!(parse_cues(xml), "it's here");
    }

    #[test]
    fn test_parse_cues_skips_empty_cues(){
        let xml = r#"<transcript><text start="0" dur="1">  </text><text start="1" dur="1">kept</text></transcript>"#;
        assert_eq!(parse_cues(xml), "kept");
    }
}
