//! Test utilities for audio testing
//!
//! Provides test signal generation, in-memory WAV fixtures, and analysis
//! tools for verifying decode and degradation behaviour.

pub mod analysis;
pub mod signals;

pub use analysis::*;
pub use signals::*;
