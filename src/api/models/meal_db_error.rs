use thiserror::Error;

#[derive(Error, Debug)]
pub enum MealDbError {
    #[error("Invalid request: {0}")]
    InvalidRequest(String),

    #[error("Missing or malformed field: {0}")]
    MissingField(String),

    #[error("HTTP request failed: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("Unexpected HTTP status: {0}")]
    Status(u16),

    #[error("Expected an image but got {0}")]
    NotAnImage(String),

    #[error("Couldn't decode response: {0}")]
    Decode(#[from] serde_json::Error),
}
