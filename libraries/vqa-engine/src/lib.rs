//! Voice QA Engine
//!
//! Audio degradation for voice-assistant QA: turn clean reference recordings
//! into realistic noisy variants for ASR robustness testing.
//!
//! # Example
//!
//! ```rust
//! use vqa_engine::{Engine, EngineConfig};
//!
//! # fn example() -> vqa_core::Result<()> {
//! let engine = Engine::new(EngineConfig {
//!     seed: Some(1),
//!     ..EngineConfig::default()
//! })?;
//!
//! let clean = vec![0.3f32; 16_000];
//! let noisy = engine.apply_profile_noise(&clean, "car_cabin_highway", 5.0, None)?;
//! assert_eq!(noisy.len(), clean.len());
//!
//! let metrics = engine.get_profile_metrics("car_cabin_highway");
//! assert_eq!(metrics.recommended_snr_range, (0.0, 20.0));
//! # Ok(())
//! # }
//! # example().unwrap();
//! ```

#![forbid(unsafe_code)]

pub mod config;
mod engine;

pub use config::EngineConfig;
pub use engine::Engine;

pub use vqa_audio::ExportFormat;
pub use vqa_core::{Result, VqaError};
pub use vqa_noise::{GenerationParameters, NoiseCategory, NoiseProfile, ProfileMetrics};
