/// Byte-level decode/resample/encode front end
use crate::decoder::ProbeChain;
use crate::encoder;
use crate::error::Result;
use crate::format::ExportFormat;
use crate::resampling::resample_linear;
use tracing::debug;
use vqa_core::{AudioBuffer, SampleRate};

/// Converts encoded audio bytes to normalized mono buffers and back
///
/// Holds only the (immutable) probe chain, so a single converter can be
/// shared freely between threads.
pub struct AudioConverter {
    probes: ProbeChain,
}

impl AudioConverter {
    /// Create a converter using the standard probe chain
    pub fn new() -> Self {
        Self {
            probes: ProbeChain::standard(),
        }
    }

    /// Create a converter with a custom probe chain
    pub fn with_probes(probes: ProbeChain) -> Self {
        Self { probes }
    }

    /// Decode to mono at `target_rate`, resampling linearly and clipping to [-1, 1]
    ///
    /// # Errors
    /// `InvalidInput` for empty bytes, `DecodeError` when no probe parses the input.
    pub fn decode(&self, bytes: &[u8], target_rate: SampleRate) -> Result<AudioBuffer> {
        let decoded = self.probes.decode(bytes)?;
        let mut samples = resample_linear(
            &decoded.samples,
            decoded.sample_rate,
            target_rate.as_hz(),
        )?;
        for sample in &mut samples {
            *sample = sample.clamp(-1.0, 1.0);
        }

        debug!(
            source_rate = decoded.sample_rate,
            target_rate = target_rate.as_hz(),
            samples = samples.len(),
            "decoded and resampled"
        );
        Ok(AudioBuffer::new(samples, target_rate))
    }

    /// Decode to mono at the source's own sample rate
    pub fn decode_native(&self, bytes: &[u8]) -> Result<AudioBuffer> {
        let decoded = self.probes.decode(bytes)?;
        Ok(AudioBuffer::new(
            decoded.samples,
            SampleRate::new(decoded.sample_rate),
        ))
    }

    /// Encode a buffer; see [`encoder::encode`] for fallback rules
    pub fn encode(&self, buffer: &AudioBuffer, format: ExportFormat, raw: bool) -> Result<Vec<u8>> {
        encoder::encode(buffer, format, raw)
    }

    /// Duration in seconds (sample count / sample rate)
    pub fn duration(&self, buffer: &AudioBuffer) -> f64 {
        buffer.duration_secs()
    }

    /// Whether `bytes` decode to a non-empty stream with a positive sample rate
    ///
    /// Never fails; decode errors are reported as `false`.
    pub fn is_valid_format(&self, bytes: &[u8]) -> bool {
        match self.decode_native(bytes) {
            Ok(buffer) => !buffer.is_empty() && buffer.sample_rate.as_hz() > 0,
            Err(e) => {
                debug!("input is not valid audio: {}", e);
                false
            }
        }
    }
}

impl Default for AudioConverter {
    fn default() -> Self {
        Self::new()
    }
}
