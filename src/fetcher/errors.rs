use thiserror::Error;

/// Failures while fetching a page. All of these are recoverable at the
/// shell boundary; none should abort the process.
#[derive(Error, Debug)]
pub enum FetchError {
    #[error("invalid url: {0}")]
    InvalidUrl(#[from] url::ParseError),

    #[error("could not reach host: {0}")]
    Connect(String),

    #[error("request timed out")]
    Timeout,

    #[error("too many redirects")]
    RedirectLoop,

    #[error("server returned http {0}")]
    Http(reqwest::StatusCode),

    #[error("response body too large ({0} bytes)")]
    BodyTooLarge(u64),

    #[error("not an html page (content-type: {0})")]
    UnsupportedContentType(String),

    #[error("could not decode page text: {0}")]
    Charset(String),

    #[error("io error: {0}")]
    Io(String),

    #[error("request failed: {0}")]
    Unknown(String),
}

impl FetchError {
    pub fn from_reqwest_error(err: reqwest::Error) -> Self {
        if err.is_timeout() {
            Self::Timeout
        } else if err.is_redirect() {
            Self::RedirectLoop
        } else if let Some(status) = err.status() {
            Self::Http(status)
        } else if err.is_connect() || err.is_request() {
            // DNS resolution and connection failures land here
            Self::Connect(err.to_string())
        } else {
            Self::Unknown(err.to_string())
        }
    }
}
