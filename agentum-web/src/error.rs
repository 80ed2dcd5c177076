use thiserror::Error;

#[derive(Error, Debug)]
pub enum PreviewError {
    #[error("HTTP request error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Unexpected response from {table}: {detail}")]
    UnexpectedResponse { table: String, detail: String },

    #[error("Configuration error: {0}")]
    Config(String),
}

impl From<url::ParseError> for PreviewError {
    fn from(err: url::ParseError) -> Self {
        PreviewError::Config(format!("Invalid URL: {err}"))
    }
}

pub type Result<T> = std::result::Result<T, PreviewError>;
