/// Engine configuration
use serde::{Deserialize, Serialize};
use vqa_audio::ExportFormat;
use vqa_core::{Result, SampleRate, VqaError};

/// Highest sample rate accepted as a default target
pub const MAX_SAMPLE_RATE: u32 = 384_000;

#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct EngineConfig {
    /// Target rate for decoding and synthesis when the caller gives none
    #[serde(default = "default_sample_rate")]
    pub default_sample_rate: u32,

    /// Container used for encoded output (unavailable encoders fall back to WAV)
    #[serde(default)]
    pub export_format: ExportFormat,

    /// Fixed RNG seed; every call reuses it so runs are reproducible
    #[serde(default)]
    pub seed: Option<u64>,
}

impl EngineConfig {
    /// Validate configuration
    pub fn validate(&self) -> Result<()> {
        if self.default_sample_rate == 0 || self.default_sample_rate > MAX_SAMPLE_RATE {
            return Err(VqaError::Config(format!(
                "default_sample_rate must be between 1 and {} Hz, got {}",
                MAX_SAMPLE_RATE, self.default_sample_rate
            )));
        }
        Ok(())
    }

    pub fn sample_rate(&self) -> SampleRate {
        SampleRate::new(self.default_sample_rate)
    }
}

fn default_sample_rate() -> u32 {
    SampleRate::SPEECH.as_hz()
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            default_sample_rate: default_sample_rate(),
            export_format: ExportFormat::default(),
            seed: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults() {
        let config = EngineConfig::default();
        assert_eq!(config.default_sample_rate, 16_000);
        assert_eq!(config.export_format, ExportFormat::Wav);
        assert!(config.seed.is_none());
        assert!(config.validate().is_ok());
    }

    #[test]
    fn missing_fields_take_defaults() {
        let config: EngineConfig = toml::from_str("seed = 7").unwrap();
        assert_eq!(config.seed, Some(7));
        assert_eq!(config.default_sample_rate, 16_000);

        let config: EngineConfig = toml::from_str("export_format = \"flac\"").unwrap();
        assert_eq!(config.export_format, ExportFormat::Flac);
    }

    #[test]
    fn rejects_zero_rate() {
        let config = EngineConfig {
            default_sample_rate: 0,
            ..EngineConfig::default()
        };
        assert!(matches!(config.validate(), Err(VqaError::Config(_))));
    }

    #[test]
    fn rejects_absurd_rate() {
        let config = EngineConfig {
            default_sample_rate: 1_000_000,
            ..EngineConfig::default()
        };
        assert!(config.validate().is_err());
    }
}
