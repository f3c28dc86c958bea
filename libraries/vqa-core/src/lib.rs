//! Voice QA Core
//!
//! Platform-agnostic types and error handling shared by the degradation engine.
//!
//! # Architecture
//!
//! The core crate defines:
//! - **Audio Types**: `AudioBuffer` (mono, normalized f32) and `SampleRate`
//! - **Error Handling**: Unified `VqaError` and `Result` types
//!
//! # Example
//!
//! ```rust
//! use vqa_core::{AudioBuffer, SampleRate};
//!
//! let buffer = AudioBuffer::new(vec![0.0; 16_000], SampleRate::SPEECH);
//! assert_eq!(buffer.len(), 16_000);
//! assert!((buffer.duration_secs() - 1.0).abs() < 1e-9);
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]

pub mod error;
pub mod types;

pub use error::{Result, VqaError};
pub use types::{AudioBuffer, SampleRate};
