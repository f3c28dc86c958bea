//! Audio encoding
//!
//! Supports:
//! - Raw 16-bit little-endian PCM (headerless, for streaming transports)
//! - WAV 16-bit PCM (via hound), always available
//! - FLAC (via flac-bound, feature `flac`)
//! - OGG/Vorbis (via vorbis-encoder, feature `vorbis`)
//!
//! Requests for a container whose encoder is not compiled in (MP3 always)
//! fall back to WAV instead of failing.

use crate::error::{AudioError, Result};
use crate::format::ExportFormat;
use std::io::Cursor;
use tracing::warn;
use vqa_core::AudioBuffer;

/// Quantize one normalized sample to signed 16-bit
#[inline]
pub fn quantize_i16(sample: f32) -> i16 {
    (sample.clamp(-1.0, 1.0) * 32767.0) as i16
}

/// Audio encoder trait
pub trait AudioEncoder {
    /// Encode a mono buffer to bytes
    fn encode(&self, buffer: &AudioBuffer) -> Result<Vec<u8>>;

    /// Container produced by this encoder
    fn format(&self) -> ExportFormat;
}

/// Headerless 16-bit little-endian PCM
pub fn encode_raw_pcm(buffer: &AudioBuffer) -> Vec<u8> {
    let mut output = Vec::with_capacity(buffer.len() * 2);
    for &sample in &buffer.samples {
        output.extend_from_slice(&quantize_i16(sample).to_le_bytes());
    }
    output
}

/// Encode to `format`, or to raw PCM when `raw` is set
///
/// Unavailable containers are logged and exported as WAV.
pub fn encode(buffer: &AudioBuffer, format: ExportFormat, raw: bool) -> Result<Vec<u8>> {
    if buffer.sample_rate.as_hz() == 0 {
        return Err(AudioError::InvalidBuffer("sample rate is zero".to_string()));
    }
    if raw {
        return Ok(encode_raw_pcm(buffer));
    }

    let effective = format.effective();
    if effective != format {
        warn!(
            requested = %format,
            exported = %effective,
            "no encoder available for requested format, exporting fallback instead"
        );
    }

    encoder_for(effective).encode(buffer)
}

fn encoder_for(format: ExportFormat) -> Box<dyn AudioEncoder> {
    match format {
        #[cfg(feature = "flac")]
        ExportFormat::Flac => Box::new(FlacEncoder),
        #[cfg(feature = "vorbis")]
        ExportFormat::Ogg => Box::new(VorbisEncoder::default()),
        _ => Box::new(WavEncoder),
    }
}

/// WAV encoder using hound (mono, 16-bit PCM)
#[derive(Debug, Default, Clone, Copy)]
pub struct WavEncoder;

impl AudioEncoder for WavEncoder {
    fn encode(&self, buffer: &AudioBuffer) -> Result<Vec<u8>> {
        let mut output = Vec::with_capacity(44 + buffer.len() * 2);
        let spec = hound::WavSpec {
            channels: 1,
            sample_rate: buffer.sample_rate.as_hz(),
            bits_per_sample: 16,
            sample_format: hound::SampleFormat::Int,
        };

        let mut writer = hound::WavWriter::new(Cursor::new(&mut output), spec)?;
        for &sample in &buffer.samples {
            writer.write_sample(quantize_i16(sample))?;
        }
        writer.finalize()?;

        Ok(output)
    }

    fn format(&self) -> ExportFormat {
        ExportFormat::Wav
    }
}

/// FLAC encoder using flac-bound (mono, 16-bit)
#[cfg(feature = "flac")]
#[derive(Debug, Default, Clone, Copy)]
pub struct FlacEncoder;

#[cfg(feature = "flac")]
impl AudioEncoder for FlacEncoder {
    fn encode(&self, buffer: &AudioBuffer) -> Result<Vec<u8>> {
        use flac_bound::{FlacEncoder as FlacEnc, WriteWrapper};

        let mut output = Vec::new();
        {
            let mut wrapper = WriteWrapper(&mut output);
            let mut encoder = FlacEnc::new()
                .ok_or_else(|| AudioError::EncodeError("FLAC encoder init failed".to_string()))?
                .channels(1)
                .sample_rate(buffer.sample_rate.as_hz())
                .bits_per_sample(16)
                .compression_level(5)
                .init_write(&mut wrapper)
                .map_err(|e| AudioError::EncodeError(format!("FLAC init failed: {:?}", e)))?;

            let samples: Vec<i32> = buffer
                .samples
                .iter()
                .map(|&s| i32::from(quantize_i16(s)))
                .collect();

            for block in samples.chunks(4096) {
                encoder
                    .process_interleaved(block, block.len() as u32)
                    .map_err(|e| {
                        AudioError::EncodeError(format!("FLAC process failed: {:?}", e))
                    })?;
            }

            encoder
                .finish()
                .map_err(|e| AudioError::EncodeError(format!("FLAC finish failed: {:?}", e)))?;
        }
        Ok(output)
    }

    fn format(&self) -> ExportFormat {
        ExportFormat::Flac
    }
}

/// OGG/Vorbis encoder using vorbis-encoder (mono)
#[cfg(feature = "vorbis")]
#[derive(Debug, Clone, Copy)]
pub struct VorbisEncoder {
    /// libvorbis quality, -0.1 to 1.0
    pub quality: f32,
}

#[cfg(feature = "vorbis")]
impl Default for VorbisEncoder {
    fn default() -> Self {
        Self { quality: 0.5 }
    }
}

#[cfg(feature = "vorbis")]
impl AudioEncoder for VorbisEncoder {
    fn encode(&self, buffer: &AudioBuffer) -> Result<Vec<u8>> {
        let mut encoder = vorbis_encoder::Encoder::new(
            1,
            u64::from(buffer.sample_rate.as_hz()),
            self.quality.clamp(-0.1, 1.0),
        )
        .map_err(|e| AudioError::EncodeError(format!("Vorbis init failed: {}", e)))?;

        let samples: Vec<i16> = buffer.samples.iter().map(|&s| quantize_i16(s)).collect();
        let mut output = encoder
            .encode(&samples)
            .map_err(|e| AudioError::EncodeError(format!("Vorbis encode failed: {}", e)))?;
        let tail = encoder
            .flush()
            .map_err(|e| AudioError::EncodeError(format!("Vorbis flush failed: {}", e)))?;
        output.extend(tail);

        Ok(output)
    }

    fn format(&self) -> ExportFormat {
        ExportFormat::Ogg
    }
}
