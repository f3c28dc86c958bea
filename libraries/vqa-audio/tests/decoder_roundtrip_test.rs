//! Decode / encode round-trip tests
//!
//! Tests for:
//! - Stability of repeated decode -> encode -> decode at fixed parameters
//! - Resampling during decode
//! - Float and multichannel sources
//! - Raw PCM export

use vqa_audio::test_utils::{calculate_peak, calculate_rms, generate_sine_wave, wav_bytes_f32, wav_bytes_i16};
use vqa_audio::{AudioConverter, ExportFormat};
use vqa_core::SampleRate;

#[test]
fn test_repeated_roundtrip_is_stable() {
    let converter = AudioConverter::new();
    let source = wav_bytes_i16(&generate_sine_wave(440.0, 44_100, 1.0, 0.6), 44_100, 1);

    let first = converter.decode(&source, SampleRate::SPEECH).unwrap();
    let wav_a = converter.encode(&first, ExportFormat::Wav, false).unwrap();
    let second = converter.decode(&wav_a, SampleRate::SPEECH).unwrap();
    let wav_b = converter.encode(&second, ExportFormat::Wav, false).unwrap();
    let third = converter.decode(&wav_b, SampleRate::SPEECH).unwrap();

    assert_eq!(first.len(), 16_000);
    assert_eq!(second.len(), first.len());
    assert_eq!(third.len(), first.len());

    // Each pass may lose at most one quantization step per sample
    for (a, b) in second.samples.iter().zip(&third.samples) {
        assert!((a - b).abs() <= 2.0 / 32768.0);
    }
    let rms_first = calculate_rms(&first.samples);
    let rms_third = calculate_rms(&third.samples);
    assert!((rms_first - rms_third).abs() < 1e-3);
}

#[test]
fn test_wav_bytes_are_identical_after_first_pass() {
    let converter = AudioConverter::new();
    let source = wav_bytes_i16(&generate_sine_wave(300.0, 16_000, 0.5, 0.3), 16_000, 1);

    let first = converter.decode(&source, SampleRate::SPEECH).unwrap();
    let wav_a = converter.encode(&first, ExportFormat::Wav, false).unwrap();
    let second = converter.decode(&wav_a, SampleRate::SPEECH).unwrap();
    let wav_b = converter.encode(&second, ExportFormat::Wav, false).unwrap();

    assert_eq!(wav_a.len(), wav_b.len());
}

#[test]
fn test_float_wav_is_clipped() {
    // 32-bit float WAV can carry overs; decode must bound them
    let hot: Vec<f32> = generate_sine_wave(440.0, 16_000, 0.2, 1.5);
    let bytes = wav_bytes_f32(&hot, 16_000, 1);
    let buffer = AudioConverter::new().decode(&bytes, SampleRate::SPEECH).unwrap();
    assert!(calculate_peak(&buffer.samples) <= 1.0);
}

#[test]
fn test_stereo_source_downmixed_and_resampled() {
    let mono = generate_sine_wave(440.0, 48_000, 0.5, 0.5);
    let mut stereo = Vec::with_capacity(mono.len() * 2);
    for s in &mono {
        stereo.push(*s);
        stereo.push(*s);
    }
    let bytes = wav_bytes_i16(&stereo, 48_000, 2);
    let buffer = AudioConverter::new().decode(&bytes, SampleRate::SPEECH).unwrap();

    assert_eq!(buffer.len(), 8_000);
    let rms = calculate_rms(&buffer.samples);
    // Sine RMS = amplitude / sqrt(2)
    assert!((rms - 0.5 / 2f32.sqrt()).abs() < 0.02);
}

#[test]
fn test_raw_export_length() {
    let converter = AudioConverter::new();
    let source = wav_bytes_i16(&generate_sine_wave(440.0, 8_000, 1.0, 0.5), 8_000, 1);
    let buffer = converter.decode(&source, SampleRate::SPEECH).unwrap();
    let raw = converter.encode(&buffer, ExportFormat::Wav, true).unwrap();

    assert_eq!(buffer.len(), 16_000);
    assert_eq!(raw.len(), 32_000);
}

#[test]
fn test_unavailable_format_exports_wav() {
    let converter = AudioConverter::new();
    let source = wav_bytes_i16(&generate_sine_wave(440.0, 16_000, 0.1, 0.5), 16_000, 1);
    let buffer = converter.decode(&source, SampleRate::SPEECH).unwrap();

    let bytes = converter.encode(&buffer, ExportFormat::Mp3, false).unwrap();
    assert_eq!(&bytes[0..4], b"RIFF");
    assert!(converter.is_valid_format(&bytes));
}
