use thiserror::Error;

#[derive(Error, Debug)]
pub enum GenerationError {
    #[error("no api key configured (set GEMINI_API_KEY)")]
    MissingApiKey,

    #[error("the api rejected the supplied api key")]
    Auth,

    #[error("rate limited or out of quota; try again later")]
    RateLimited,

    #[error("api error {status}: {message}")]
    Api {
        status: reqwest::StatusCode,
        message: String,
    },

    #[error("the model returned no usable text")]
    EmptyResponse,

    #[error("request failed: {0}")]
    Http(#[from] reqwest::Error),
}
