use thiserror::Error;

/// Errors that can occur while talking to the recipe API
#[derive(Error, Debug)]
pub enum ClientError {
    /// Transport-level failure (DNS, connection refused, timeout)
    #[error("Request failed: {0}")]
    Network(#[from] reqwest::Error),

    /// Server answered with a non-success status
    #[error("HTTP error! status: {status}, body: {body}")]
    Status { status: u16, body: String },

    /// Response did not declare a JSON body
    #[error("Expected JSON, got {content_type}")]
    ContentType { content_type: String },

    /// Single-recipe lookup for an id the server does not know
    #[error("Recipe {id} not found")]
    NotFound { id: String },

    /// Response body could not be parsed into the expected shape
    #[error("Failed to decode response: {0}")]
    Decode(#[from] serde_json::Error),

    /// Builder configuration error
    #[error("Builder error: {0}")]
    Builder(String),

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(#[from] config::ConfigError),
}
