/// Audio-specific errors
use thiserror::Error;

/// Result type alias using `AudioError`
pub type Result<T> = std::result::Result<T, AudioError>;

/// Audio error types
#[derive(Error, Debug)]
pub enum AudioError {
    /// Empty byte buffer or empty signal
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// Decoding error (all probes failed)
    #[error("Decode error: {0}")]
    DecodeError(String),

    /// Encoding error
    #[error("Encode error: {0}")]
    EncodeError(String),

    /// Invalid audio buffer
    #[error("Invalid audio buffer: {0}")]
    InvalidBuffer(String),

    /// Symphonia error
    #[error("Symphonia error: {0}")]
    Symphonia(String),
}

impl From<symphonia::core::errors::Error> for AudioError {
    fn from(err: symphonia::core::errors::Error) -> Self {
        Self::Symphonia(err.to_string())
    }
}

impl From<hound::Error> for AudioError {
    fn from(err: hound::Error) -> Self {
        Self::EncodeError(err.to_string())
    }
}

impl From<AudioError> for vqa_core::VqaError {
    fn from(err: AudioError) -> Self {
        match err {
            AudioError::InvalidInput(msg) | AudioError::InvalidBuffer(msg) => {
                vqa_core::VqaError::InvalidInput(msg)
            }
            AudioError::DecodeError(msg) | AudioError::Symphonia(msg) => {
                vqa_core::VqaError::Decode(msg)
            }
            AudioError::EncodeError(msg) => vqa_core::VqaError::Encode(msg),
        }
    }
}
