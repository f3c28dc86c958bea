//! Test signal generation for audio testing
//!
//! All generators produce mono samples, matching the engine's internal
//! representation.

use std::f32::consts::PI;
use std::io::Cursor;

/// Generate a mono sine wave
///
/// # Arguments
/// * `frequency` - Frequency in Hz
/// * `sample_rate` - Sample rate in Hz
/// * `duration` - Duration in seconds
/// * `amplitude` - Peak amplitude (0.0 to 1.0)
pub fn generate_sine_wave(
    frequency: f32,
    sample_rate: u32,
    duration: f32,
    amplitude: f32,
) -> Vec<f32> {
    let num_samples = (sample_rate as f32 * duration).round() as usize;
    (0..num_samples)
        .map(|i| {
            let t = i as f32 / sample_rate as f32;
            (2.0 * PI * frequency * t).sin() * amplitude
        })
        .collect()
}

/// Encode interleaved samples as a 16-bit PCM WAV file in memory
///
/// Quantization matches the engine's encoder (`clamp * 32767`, truncating).
pub fn wav_bytes_i16(interleaved: &[f32], sample_rate: u32, channels: u16) -> Vec<u8> {
    let spec = hound::WavSpec {
        channels,
        sample_rate,
        bits_per_sample: 16,
        sample_format: hound::SampleFormat::Int,
    };

    let mut output = Vec::new();
    let mut writer =
        hound::WavWriter::new(Cursor::new(&mut output), spec).expect("valid WAV spec");
    for &sample in interleaved {
        writer
            .write_sample((sample.clamp(-1.0, 1.0) * 32767.0) as i16)
            .expect("in-memory write");
    }
    writer.finalize().expect("in-memory finalize");
    output
}

/// Encode interleaved samples as a 32-bit float WAV file in memory
pub fn wav_bytes_f32(interleaved: &[f32], sample_rate: u32, channels: u16) -> Vec<u8> {
    let spec = hound::WavSpec {
        channels,
        sample_rate,
        bits_per_sample: 32,
        sample_format: hound::SampleFormat::Float,
    };

    let mut output = Vec::new();
    let mut writer =
        hound::WavWriter::new(Cursor::new(&mut output), spec).expect("valid WAV spec");
    for &sample in interleaved {
        writer.write_sample(sample).expect("in-memory write");
    }
    writer.finalize().expect("in-memory finalize");
    output
}
