use serde::Deserialize;

/// One caption track from the watch page's player response. Only the
/// fields we consume; YouTube sends many more.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CaptionTrack {
    pub base_url: String,
    pub language_code: String,
    #[serde(default)]
    kind: Option<String>,
    #[serde(default)]
    name: Option<TrackName>,
}

impl CaptionTrack {
    /// Tracks produced by speech recognition carry kind "asr".
    pub fn is_auto_generated(&self) -> bool {
        self.kind.as_deref() == Some("asr")
    }

    /// Human-readable name for selection menus, falling back to the
    /// language code when YouTube sends no display name.
    pub fn display_name(&self) -> String {
        let base = self
            .name
            .as_ref()
            .and_then(TrackName::text)
            .unwrap_or_else(|| self.language_code.clone());
        if self.is_auto_generated() {
            format!("{base} (auto-generated)")
        } else {
            base
        }
    }
}

/// YouTube serializes track names either as `simpleText` or as `runs`.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
struct TrackName {
    #[serde(default)]
    simple_text: Option<String>,
    #[serde(default)]
    runs: Option<Vec<TrackNameRun>>,
}

impl TrackName {
    fn text(&self) -> Option<String> {
        if let Some(text) = &self.simple_text {
            return Some(text.clone());
        }
        self.runs
            .as_ref()
            .map(|runs| runs.iter().map(|r| r.text.as_str()).collect())
    }
}

#[derive(Debug, Clone, Deserialize)]
struct TrackNameRun {
    text: String,
}
