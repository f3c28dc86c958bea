//! Noise profile records and the parameters derived from them

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Broad family a noise environment belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum NoiseCategory {
    Vehicle,
    Environmental,
    Industrial,
    /// Only used by the sentinel profile
    Unknown,
}

impl NoiseCategory {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Vehicle => "vehicle",
            Self::Environmental => "environmental",
            Self::Industrial => "industrial",
            Self::Unknown => "unknown",
        }
    }
}

impl FromStr for NoiseCategory {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "vehicle" => Ok(Self::Vehicle),
            "environmental" => Ok(Self::Environmental),
            "industrial" => Ok(Self::Industrial),
            "unknown" => Ok(Self::Unknown),
            other => Err(format!("unknown noise category: {}", other)),
        }
    }
}

impl fmt::Display for NoiseCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Qualitative ASR difficulty tier
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Difficulty {
    Easy,
    Medium,
    Hard,
    VeryHard,
    Extreme,
    Unknown,
}

impl Difficulty {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Easy => "easy",
            Self::Medium => "medium",
            Self::Hard => "hard",
            Self::VeryHard => "very_hard",
            Self::Extreme => "extreme",
            Self::Unknown => "unknown",
        }
    }
}

impl fmt::Display for Difficulty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Spectral envelope used to color white noise
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SpectralShape {
    White,
    Pink,
    Brown,
    SpeechShaped,
}

impl SpectralShape {
    /// Naming rule used before shapes were stored on each record
    ///
    /// Order matters: the first matching group wins.
    pub fn from_key(key: &str) -> Self {
        if key.contains("hvac") || key.contains("cabin") {
            Self::Pink
        } else if key.contains("road") || key.contains("highway") {
            Self::Brown
        } else if key.contains("crowd") || key.contains("babble") {
            Self::SpeechShaped
        } else if key.contains("factory") || key.contains("industrial") {
            Self::White
        } else {
            Self::Pink
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::White => "white",
            Self::Pink => "pink",
            Self::Brown => "brown",
            Self::SpeechShaped => "speech_shaped",
        }
    }
}

impl fmt::Display for SpectralShape {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// How the noise level evolves over time
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TemporalVariation {
    Stationary,
    Modulated,
    Impulsive,
    SlowVariation,
}

impl TemporalVariation {
    /// Naming rule used before variations were stored on each record
    pub fn from_key(key: &str) -> Self {
        if key.contains("crowd") {
            Self::Modulated
        } else if key.contains("construction") {
            Self::Impulsive
        } else if key.contains("highway") || key.contains("road") {
            Self::SlowVariation
        } else {
            Self::Stationary
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Stationary => "stationary",
            Self::Modulated => "modulated",
            Self::Impulsive => "impulsive",
            Self::SlowVariation => "slow_variation",
        }
    }
}

impl fmt::Display for TemporalVariation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Inclusive frequency band in Hz
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct FrequencyRange {
    pub low_hz: f64,
    pub high_hz: f64,
}

impl FrequencyRange {
    pub const fn new(low_hz: f64, high_hz: f64) -> Self {
        Self { low_hz, high_hz }
    }

    pub fn bandwidth(&self) -> f64 {
        self.high_hz - self.low_hz
    }

    pub fn contains(&self, freq_hz: f64) -> bool {
        freq_hz >= self.low_hz && freq_hz <= self.high_hz
    }
}

/// A named acoustic environment
///
/// Records live in a static registry and are never mutated. Spectral shape
/// and temporal variation are resolved when the registry is written rather
/// than re-derived from the key on every call.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct NoiseProfile {
    pub key: &'static str,
    pub category: NoiseCategory,
    pub name: &'static str,
    pub description: &'static str,
    pub frequency_range: FrequencyRange,
    pub dominant_frequency_hz: f64,
    pub typical_snr_db: f64,
    pub difficulty: Difficulty,
    pub spectral_shape: SpectralShape,
    pub temporal_variation: TemporalVariation,
}

impl NoiseProfile {
    /// True for the sentinel returned on catalog misses
    pub fn is_unknown(&self) -> bool {
        self.category == NoiseCategory::Unknown
    }

    /// Parameters the synthesizer needs to realize this profile
    pub fn generation_parameters(&self) -> GenerationParameters {
        GenerationParameters {
            frequency_range: self.frequency_range,
            dominant_frequency_hz: self.dominant_frequency_hz,
            bandwidth_hz: self.frequency_range.bandwidth(),
            spectral_shape: self.spectral_shape,
            temporal_variation: self.temporal_variation,
            typical_snr_db: self.typical_snr_db,
        }
    }
}

/// Synthesis parameters derived per call from a profile
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GenerationParameters {
    pub frequency_range: FrequencyRange,
    pub dominant_frequency_hz: f64,
    pub bandwidth_hz: f64,
    pub spectral_shape: SpectralShape,
    pub temporal_variation: TemporalVariation,
    pub typical_snr_db: f64,
}
