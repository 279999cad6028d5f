pub mod config;
pub mod extractor;
pub mod fetcher;
pub mod generation;
pub mod pdf;
pub mod session;
pub mod shell;
pub mod transcript;
