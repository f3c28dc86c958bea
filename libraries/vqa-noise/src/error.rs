//! Error types for noise synthesis and mixing

use thiserror::Error;

/// Result type for noise operations
pub type Result<T> = std::result::Result<T, NoiseError>;

/// Errors that can occur during synthesis or mixing
#[derive(Error, Debug)]
pub enum NoiseError {
    /// No samples were provided to mix into
    #[error("Signal is empty")]
    EmptySignal,

    /// Duration is negative, not finite, or too long to synthesize
    #[error("Invalid duration: {0} s")]
    InvalidDuration(f64),

    /// Sample rate is zero
    #[error("Invalid sample rate: {0} Hz")]
    InvalidSampleRate(u32),

    /// Target SNR is not a finite number
    #[error("Invalid target SNR: {0} dB")]
    InvalidSnr(f64),

    /// Profile key is not in the catalog
    #[error("Unknown noise profile: {0}")]
    UnknownProfile(String),
}

impl From<NoiseError> for vqa_core::VqaError {
    fn from(err: NoiseError) -> Self {
        match err {
            NoiseError::UnknownProfile(key) => vqa_core::VqaError::UnknownProfile(key),
            other => vqa_core::VqaError::InvalidInput(other.to_string()),
        }
    }
}
