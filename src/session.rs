//! Ephemeral per-run state.
//!
//! A single slot holding the cleaned text currently available for
//! question answering. Owned by the shell and passed by reference into
//! the core; overwritten whenever a new scrape or upload completes, gone
//! when the process exits.

use crate::extractor::SourceKind;

#[derive(Debug, Clone)]
pub struct SessionContent {
    pub source: SourceKind,
    pub origin: String,
    pub text: String,
}

#[derive(Debug, Default)]
pub struct Session {
    content: Option<SessionContent>,
}

impl Session {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the current content slot.
    pub fn replace(&mut self, source: SourceKind, origin: impl Into<String>, text: impl Into<String>) {
        self.content = Some(SessionContent {
            source,
            origin: origin.into(),
            text: text.into(),
        });
    }

    pub fn content(&self) -> Option<&SessionContent> {
        self.content.as_ref()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_starts_empty() {
        assert!(Session::new().content().is_none());
    }

    #[test]
    fn test_replace_overwrites() {
        let mut session = Session::new();
        session.replace(SourceKind::Html, "https://a.example", "first");
        session.replace(SourceKind::PdfText, "report.pdf", "second");

        let content = session.content().unwrap();
        assert_eq!(content.source, SourceKind::PdfText);
        assert_eq!(content.origin, "report.pdf");
        assert_eq!(content.text, "second");
    }
}
