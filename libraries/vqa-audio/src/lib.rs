//! Voice QA Audio
//!
//! Audio format conversion for the degradation engine.
//!
//! This crate provides:
//! - In-memory decoding via Symphonia (MP3, WAV, FLAC, OGG/Vorbis) through an
//!   ordered probe chain, downmixed to normalized mono f32
//! - Linear-interpolation resampling to a target rate
//! - Export to raw 16-bit PCM or WAV (FLAC and OGG/Vorbis behind features)
//!
//! # Example: Decoding Audio
//!
//! ```rust,no_run
//! use vqa_audio::{AudioConverter, ExportFormat};
//! use vqa_core::SampleRate;
//!
//! # fn example(bytes: &[u8]) -> Result<(), Box<dyn std::error::Error>> {
//! let converter = AudioConverter::new();
//! let buffer = converter.decode(bytes, SampleRate::SPEECH)?;
//! println!("Decoded {} samples at {}", buffer.len(), buffer.sample_rate);
//!
//! let wav = converter.encode(&buffer, ExportFormat::Wav, false)?;
//! # Ok(())
//! # }
//! ```

#![forbid(unsafe_code)]

mod converter;
pub mod decoder;
pub mod encoder;
mod error;
mod format;
pub mod resampling;

#[cfg(any(test, feature = "test-utils"))]
pub mod test_utils;

pub use converter::AudioConverter;
pub use decoder::{DecodeProbe, DecodedAudio, ProbeChain, ProbeOutcome};
pub use error::{AudioError, Result};
pub use format::ExportFormat;
