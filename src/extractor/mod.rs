//! Content normalization and chunking.
//!
//! The two pure pieces of the pipeline: reducing raw adapter output to
//! clean text, and splitting that text into bounded segments for a
//! token-limited generation model. No I/O happens here.

pub mod chunker;
pub mod model;
pub mod normalizer;

pub use chunker::{ChunkError, chunk};
pub use model::{RawDocument, SourceKind};
pub use normalizer::{collapse_whitespace, normalize};
