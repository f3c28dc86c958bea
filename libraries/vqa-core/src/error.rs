/// Core error types for the degradation engine
use thiserror::Error;

/// Result type alias using `VqaError`
pub type Result<T> = std::result::Result<T, VqaError>;

/// Core error type shared across the workspace
#[derive(Error, Debug)]
pub enum VqaError {
    /// Empty byte buffer, empty signal, or an out-of-range parameter
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// No decode capability could parse the input
    #[error("Decode error: {0}")]
    Decode(String),

    /// Encoding to the requested container failed
    #[error("Encode error: {0}")]
    Encode(String),

    /// Noise profile key is not in the catalog
    #[error("Unknown noise profile: {0}")]
    UnknownProfile(String),

    /// Engine configuration is missing or out of range
    #[error("Configuration error: {0}")]
    Config(String),

}

impl VqaError {
    /// Create an invalid input error
    pub fn invalid_input(msg: impl Into<String>) -> Self {
        Self::InvalidInput(msg.into())
    }
}
