use actix_web::http::StatusCode;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum SuggestionError {
    #[error("Configuration error: {0}")]
    ConfigError(String),
    #[error("Validation error: {0}")]
    ValidationError(String),
    #[error("Transport error: {0}")]
    TransportError(String),
    #[error("Encoding error: {0}")]
    EncodingError(String),
    #[error("Empty result: {0}")]
    EmptyResultError(String),
    #[error("{service} returned unexpected status {status}, body: {body}")]
    UnexpectedStatus {
        service: &'static str,
        status: u16,
        body: String,
    },
}

impl SuggestionError {
    /// HTTP status reported to the client when this error ends a request.
    pub fn status_code(&self) -> StatusCode {
        match self {
            SuggestionError::ValidationError(_) => StatusCode::BAD_REQUEST,
            _ => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

pub type Result<T> = std::result::Result<T, SuggestionError>;
