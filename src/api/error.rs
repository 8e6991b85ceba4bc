use thiserror::Error;

pub type Result<T> = std::result::Result<T, ApiError>;

#[derive(Debug, Error)]
pub enum ApiError {
    #[error("request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("invalid server url: {0}")]
    Url(#[from] url::ParseError),

    #[error("contact not found on server")]
    NotFound,

    #[error("HTTP {0}")]
    Status(reqwest::StatusCode),

    #[error("background task dropped before completing")]
    Dropped,
}

impl ApiError {
    pub fn is_not_found(&self) -> bool {
        matches!(self, ApiError::NotFound)
    }
}
