//! Degradation engine facade
//!
//! [`Engine`] bundles the audio converter, the noise catalog and the mixers
//! behind one set of byte- and buffer-level operations. It holds only
//! immutable configuration, so one instance can serve any number of threads.

use crate::config::EngineConfig;
use rand::rngs::StdRng;
use rand::SeedableRng;
use tracing::{debug, info};
use vqa_audio::{AudioConverter, ExportFormat};
use vqa_core::{AudioBuffer, Result, SampleRate, VqaError};
use vqa_noise::{
    catalog, difficulty, mixer, synth, GenerationParameters, NoiseCategory, NoiseProfile,
    ProfileMetrics,
};

pub struct Engine {
    config: EngineConfig,
    converter: AudioConverter,
}

impl Engine {
    /// Create an engine, rejecting invalid configuration
    pub fn new(config: EngineConfig) -> Result<Self> {
        config.validate()?;
        info!(
            sample_rate = config.default_sample_rate,
            export_format = %config.export_format,
            seeded = config.seed.is_some(),
            "engine configured"
        );
        Ok(Self {
            config,
            converter: AudioConverter::new(),
        })
    }

    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    /// Container that [`encode_signal`](Self::encode_signal) and
    /// [`decode_to_pcm`](Self::decode_to_pcm) actually write
    ///
    /// Differs from the configured format when that one has no encoder in
    /// this build.
    pub fn output_format(&self) -> ExportFormat {
        self.config.export_format.effective()
    }

    fn rate_or_default(&self, sample_rate_hz: Option<u32>) -> u32 {
        sample_rate_hz.unwrap_or(self.config.default_sample_rate)
    }

    fn rng(&self) -> StdRng {
        match self.config.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        }
    }

    fn known_profile(key: &str) -> Result<&'static NoiseProfile> {
        catalog::try_get(key).ok_or_else(|| VqaError::UnknownProfile(key.to_string()))
    }

    // ---- Format conversion ----

    /// Decode any supported input to mono at the target rate, then encode
    ///
    /// `raw` yields headerless 16-bit little-endian PCM; otherwise the
    /// configured export format is used.
    pub fn decode_to_pcm(
        &self,
        bytes: &[u8],
        target_rate_hz: Option<u32>,
        raw: bool,
    ) -> Result<Vec<u8>> {
        let buffer = self.decode_signal(bytes, target_rate_hz)?;
        Ok(self
            .converter
            .encode(&buffer, self.config.export_format, raw)?)
    }

    /// Decode to a normalized mono buffer at the target rate
    pub fn decode_signal(&self, bytes: &[u8], target_rate_hz: Option<u32>) -> Result<AudioBuffer> {
        let rate = self.rate_or_default(target_rate_hz);
        if rate == 0 {
            return Err(VqaError::invalid_input("target sample rate is zero"));
        }
        Ok(self.converter.decode(bytes, SampleRate::new(rate))?)
    }

    /// Clip `samples` to [-1, 1] and encode them in the configured format
    pub fn encode_signal(&self, samples: &[f32], sample_rate_hz: Option<u32>) -> Result<Vec<u8>> {
        let rate = SampleRate::new(self.rate_or_default(sample_rate_hz));
        let mut buffer = AudioBuffer::new(samples.to_vec(), rate);
        buffer.clip();
        Ok(self
            .converter
            .encode(&buffer, self.config.export_format, false)?)
    }

    /// Add white Gaussian noise at `snr_db` and return WAV bytes
    pub fn add_flat_noise(&self, bytes: &[u8], snr_db: f64) -> Result<Vec<u8>> {
        let buffer = self.decode_signal(bytes, None)?;
        let noisy = mixer::add_gaussian_noise(&buffer.samples, snr_db, &mut self.rng())?;

        let mut degraded = AudioBuffer::new(noisy, buffer.sample_rate);
        degraded.clip();
        debug!(snr_db, samples = degraded.len(), "added flat noise");
        Ok(self.converter.encode(&degraded, ExportFormat::Wav, false)?)
    }

    /// Whether `bytes` decode to non-empty audio; never fails
    pub fn is_valid_audio(&self, bytes: &[u8]) -> bool {
        self.converter.is_valid_format(bytes)
    }

    /// Duration of the encoded input at its native sample rate
    pub fn duration_seconds(&self, bytes: &[u8]) -> Result<f64> {
        let buffer = self.converter.decode_native(bytes)?;
        Ok(self.converter.duration(&buffer))
    }

    // ---- Catalog ----

    pub fn list_noise_categories(&self) -> Vec<&'static str> {
        catalog::categories()
            .into_iter()
            .map(|c| c.as_str())
            .collect()
    }

    /// Profile keys, optionally filtered by category name
    ///
    /// An unrecognized category matches nothing.
    pub fn list_noise_profiles(&self, category: Option<&str>) -> Vec<&'static str> {
        match category {
            None => catalog::list(None),
            Some(name) => match name.parse::<NoiseCategory>() {
                Ok(category) => catalog::list(Some(category)),
                Err(_) => Vec::new(),
            },
        }
    }

    /// Profile for `key`, or the sentinel (`category == unknown`) on a miss
    pub fn get_noise_profile(&self, key: &str) -> &'static NoiseProfile {
        catalog::get(key)
    }

    pub fn get_profile_parameters(&self, key: &str) -> GenerationParameters {
        catalog::parameters(key)
    }

    pub fn get_profile_metrics(&self, key: &str) -> ProfileMetrics {
        difficulty::metrics(key)
    }

    // ---- Synthesis and mixing ----

    /// Noise for `key` as raw samples with peak near 1.0
    ///
    /// # Errors
    /// `UnknownProfile` for keys missing from the catalog, `InvalidInput` for
    /// a negative or oversized duration or a zero rate.
    pub fn generate_noise(
        &self,
        key: &str,
        duration_seconds: f64,
        sample_rate_hz: Option<u32>,
    ) -> Result<Vec<f32>> {
        let profile = Self::known_profile(key)?;
        let rate = self.rate_or_default(sample_rate_hz);
        let buffer = synth::generate(profile, duration_seconds, rate, &mut self.rng())?;
        Ok(buffer.into_samples())
    }

    /// Mix profile noise into `signal` at `snr_db`; output is not clipped
    pub fn apply_profile_noise(
        &self,
        signal: &[f32],
        key: &str,
        snr_db: f64,
        sample_rate_hz: Option<u32>,
    ) -> Result<Vec<f32>> {
        let profile = Self::known_profile(key)?;
        let rate = self.rate_or_default(sample_rate_hz);
        Ok(mixer::apply_noise(
            signal,
            profile,
            snr_db,
            rate,
            &mut self.rng(),
        )?)
    }

    /// SNR points spanning the recommended range of `key` at `step_db` spacing
    ///
    /// # Errors
    /// `InvalidInput` when `step_db` is not finite or finer than
    /// [`difficulty::MIN_SWEEP_STEP_DB`].
    pub fn sweep_points(&self, key: &str, step_db: f64) -> Result<Vec<f64>> {
        if !difficulty::is_valid_sweep_step(step_db) {
            return Err(VqaError::invalid_input(format!(
                "sweep step must be a finite number of at least {} dB, got {}",
                difficulty::MIN_SWEEP_STEP_DB,
                step_db
            )));
        }
        Ok(difficulty::metrics(key).sweep_points(step_db))
    }

    /// Degrade `signal` at each point of the profile's recommended SNR sweep
    ///
    /// Returns `(snr_db, degraded)` pairs from the lowest SNR upward.
    /// Fails like [`sweep_points`](Self::sweep_points) for an unusable step.
    pub fn degrade_sweep(
        &self,
        signal: &[f32],
        key: &str,
        step_db: f64,
        sample_rate_hz: Option<u32>,
    ) -> Result<Vec<(f64, Vec<f32>)>> {
        Self::known_profile(key)?;
        let points = self.sweep_points(key, step_db)?;
        debug!(profile = key, points = points.len(), "running SNR sweep");

        points
            .into_iter()
            .map(|snr| {
                self.apply_profile_noise(signal, key, snr, sample_rate_hz)
                    .map(|degraded| (snr, degraded))
            })
            .collect()
    }
}

impl Default for Engine {
    fn default() -> Self {
        Self {
            config: EngineConfig::default(),
            converter: AudioConverter::new(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn seeded() -> Engine {
        Engine::new(EngineConfig {
            seed: Some(42),
            ..EngineConfig::default()
        })
        .unwrap()
    }

    #[test]
    fn engine_is_shareable_across_threads() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<Engine>();
    }

    #[test]
    fn rejects_invalid_config() {
        let config = EngineConfig {
            default_sample_rate: 0,
            ..EngineConfig::default()
        };
        assert!(Engine::new(config).is_err());
    }

    #[test]
    fn unknown_key_errors_for_synthesis_but_not_lookup() {
        let engine = seeded();
        assert!(engine.get_noise_profile("nope").is_unknown());
        assert!(matches!(
            engine.generate_noise("nope", 1.0, None),
            Err(VqaError::UnknownProfile(_))
        ));
        assert!(matches!(
            engine.apply_profile_noise(&[0.1; 10], "nope", 5.0, None),
            Err(VqaError::UnknownProfile(_))
        ));
    }

    #[test]
    fn seeded_engine_is_reproducible() {
        let engine = seeded();
        let a = engine.generate_noise("wind_outdoor", 0.2, None).unwrap();
        let b = engine.generate_noise("wind_outdoor", 0.2, None).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn default_rate_applies() {
        let engine = seeded();
        assert_eq!(engine.generate_noise("hvac_office", 1.0, None).unwrap().len(), 16_000);
        assert_eq!(
            engine.generate_noise("hvac_office", 1.0, Some(8_000)).unwrap().len(),
            8_000
        );
    }

    #[test]
    fn category_filter_by_name() {
        let engine = Engine::default();
        assert_eq!(engine.list_noise_profiles(Some("vehicle")).len(), 8);
        assert_eq!(engine.list_noise_profiles(Some("environmental")).len(), 8);
        assert!(engine.list_noise_profiles(Some("marine")).is_empty());
        assert_eq!(engine.list_noise_profiles(None).len(), 19);
        assert_eq!(
            engine.list_noise_categories(),
            vec!["vehicle", "environmental", "industrial"]
        );
    }

    #[test]
    fn sweep_rejects_unusable_steps() {
        let engine = seeded();
        for step in [1e-9, 1e-300, 0.0, -5.0, f64::NAN, f64::INFINITY] {
            assert!(
                matches!(
                    engine.degrade_sweep(&[0.1; 160], "hvac_office", step, None),
                    Err(VqaError::InvalidInput(_))
                ),
                "step {} accepted",
                step
            );
        }
        assert_eq!(
            engine.sweep_points("hvac_office", 5.0).unwrap(),
            vec![10.0, 15.0, 20.0, 25.0, 30.0]
        );
    }

    #[test]
    fn output_format_reflects_fallback() {
        let engine = Engine::new(EngineConfig {
            export_format: ExportFormat::Mp3,
            ..EngineConfig::default()
        })
        .unwrap();
        assert_eq!(engine.output_format(), ExportFormat::Wav);
        assert_eq!(Engine::default().output_format(), ExportFormat::Wav);
    }

    #[test]
    fn empty_signal_is_invalid_input() {
        let result = seeded().apply_profile_noise(&[], "bus_interior", 5.0, None);
        assert!(matches!(result, Err(VqaError::InvalidInput(_))));
    }
}
