use thiserror::Error;

/// Errors surfaced by catalog API adapters.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum ApiError {
    #[error("request failed with status {0}")]
    Status(reqwest::StatusCode),

    /// The response body did not have the expected sequence/record shape.
    #[error("unexpected response shape")]
    MalformedPayload,

    #[error("not found")]
    NotFound,

    #[error("invalid API base url: {0}")]
    InvalidBaseUrl(String),

    /// Backend rejection injected by test fakes.
    #[error("unavailable: {0}")]
    Unavailable(String),

    #[error(transparent)]
    Http(#[from] reqwest::Error),
}
