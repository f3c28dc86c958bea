//! Voice QA Noise
//!
//! Synthetic acoustic environments for ASR robustness testing.
//!
//! This crate provides:
//! - A static catalog of vehicle, environmental and industrial noise profiles
//! - Colored noise synthesis (white, pink, brown, speech-shaped) band-limited
//!   to each profile's frequency range
//! - SNR-controlled mixing of profile noise or plain Gaussian noise
//! - Difficulty metrics and recommended SNR sweeps per profile
//!
//! Every operation is a pure function over caller-provided buffers; the only
//! randomness comes from the RNG the caller passes in.
//!
//! # Example
//!
//! ```rust
//! use rand::rngs::StdRng;
//! use rand::SeedableRng;
//! use vqa_noise::{catalog, mixer};
//!
//! let mut rng = StdRng::seed_from_u64(42);
//! let clean = vec![0.25f32; 16_000];
//! let profile = catalog::get("car_cabin_highway");
//! let degraded = mixer::apply_noise(&clean, profile, 10.0, 16_000, &mut rng).unwrap();
//! assert_eq!(degraded.len(), clean.len());
//! ```

#![forbid(unsafe_code)]

pub mod analysis;
pub mod catalog;
pub mod difficulty;
mod error;
pub mod filter;
pub mod mixer;
mod profile;
mod spectrum;
pub mod synth;

pub use difficulty::{estimated_wer_increase, metrics, ProfileMetrics};
pub use error::{NoiseError, Result};
pub use profile::{
    Difficulty, FrequencyRange, GenerationParameters, NoiseCategory, NoiseProfile, SpectralShape,
    TemporalVariation,
};
