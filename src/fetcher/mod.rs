pub mod charset;
pub mod client;
pub mod errors;
pub mod types;

pub use client::{fetch, get_client};
pub use errors::FetchError;
pub use types::{Charset, PageResponse};
