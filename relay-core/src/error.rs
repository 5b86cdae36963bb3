#[derive(Debug, thiserror::Error)]
pub enum RelayError {
    #[error("Model error: {0}")]
    Model(String),

    #[error("Model '{model}' returned no text content")]
    EmptyResponse { model: String },

    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Configuration error: {0}")]
    Config(String),
}

pub type Result<T> = std::result::Result<T, RelayError>;
