use thiserror::Error;

#[derive(Debug, Error)]
pub enum AppError {
    #[error("course not found: {0}")]
    NotFound(String),

    #[error("seat adjustment of {delta} on {id} would drop below zero (remaining: {remaining})")]
    InvalidAdjustment {
        id: String,
        delta: i64,
        remaining: u32,
    },

    #[error("{0}")]
    Validation(String),

    #[error("request failed: {0}")]
    Transport(String),

    #[error("{0}")]
    Remote(String),

    #[error("unexpected response: {0}")]
    UnexpectedResponse(String),

    #[error("storage error: {0}")]
    Storage(#[from] sqlx::Error),

    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("configuration error: {0}")]
    Config(String),
}
