use serde::{Deserialize, Serialize};

use crate::extractor::normalizer::{collapse_whitespace, normalize};

/// Where a raw document came from; decides how it is cleaned.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SourceKind {
    Html,
    PdfText,
    Transcript,
}

impl SourceKind {
    pub fn label(&self) -> &'static str {
        match self {
            Self::Html => "website",
            Self::PdfText => "PDF",
            Self::Transcript => "transcript",
        }
    }
}

/// Raw output of an extraction adapter, immutable once produced.
#[derive(Debug, Clone)]
pub struct RawDocument {
    kind: SourceKind,
    body: String,
}

impl RawDocument {
    pub fn new(kind: SourceKind, body: impl Into<String>) -> Self {
        Self {
            kind,
            body: body.into(),
        }
    }

    pub fn html(body: impl Into<String>) -> Self {
        Self::new(SourceKind::Html, body)
    }

    pub fn pdf_text(body: impl Into<String>) -> Self {
        Self::new(SourceKind::PdfText, body)
    }

    pub fn transcript(body: impl Into<String>) -> Self {
        Self::new(SourceKind::Transcript, body)
    }

    pub fn kind(&self) -> SourceKind {
        self.kind
    }

    pub fn body(&self) -> &str {
        &self.body
    }

    /// Derive the cleaned text. HTML is reduced to visible body text;
    /// PDF and transcript text is already plain and passes through with
    /// only whitespace collapsing.
    pub fn clean(&self) -> String {
        match self.kind {
            SourceKind::Html => normalize(&self.body),
            SourceKind::PdfText | SourceKind::Transcript => collapse_whitespace(&self.body),
        }
    }
}
