//! PDF text extraction.
//!
//! Structural failures (not a PDF, broken xref) are errors; a well-formed
//! PDF with no text layer, such as a scanned document, yields an empty or
//! whitespace-only string the caller reports as "nothing extracted".

use thiserror::Error;
use tracing::{info, instrument};

#[derive(Error, Debug)]
pub enum PdfError {
    #[error("could not parse pdf: {0}")]
    Parse(String),
}

/// Extract the text layer of a PDF supplied as bytes.
#[instrument(skip_all, fields(bytes = file_bytes.len()))]
pub fn extract_text(file_bytes: &[u8]) -> Result<String, PdfError> {
    let text =
        pdf_extract::extract_text_from_mem(file_bytes).map_err(|e| PdfError::Parse(e.to_string()))?;

    info!(chars = text.chars().count(), "extracted pdf text");
    Ok(text)
}
