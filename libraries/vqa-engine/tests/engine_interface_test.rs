//! Engine interface tests
//!
//! Tests for:
//! - Byte-level conversion, validation and duration
//! - Flat noise injection on encoded input
//! - Profile lookups, parameters and metrics
//! - Profile noise mixing and SNR sweeps

use vqa_audio::test_utils::{calculate_rms, generate_sine_wave, wav_bytes_i16};
use vqa_engine::{Engine, EngineConfig, ExportFormat, NoiseCategory, VqaError};
use vqa_noise::analysis::measure_snr_db;
use vqa_noise::{Difficulty, SpectralShape, TemporalVariation};

fn engine() -> Engine {
    Engine::new(EngineConfig {
        seed: Some(1234),
        ..EngineConfig::default()
    })
    .unwrap()
}

fn sine_wav(rate: u32, seconds: f32) -> Vec<u8> {
    wav_bytes_i16(&generate_sine_wave(440.0, rate, seconds, 0.5), rate, 1)
}

#[test]
fn test_decode_to_pcm_wav_and_raw() {
    let engine = engine();
    let input = sine_wav(44_100, 1.0);

    let wav = engine.decode_to_pcm(&input, None, false).unwrap();
    assert_eq!(&wav[0..4], b"RIFF");
    assert_eq!(wav.len(), 44 + 16_000 * 2);

    let raw = engine.decode_to_pcm(&input, Some(8_000), true).unwrap();
    assert_eq!(raw.len(), 8_000 * 2);
}

#[test]
fn test_decode_to_pcm_rejects_garbage() {
    let engine = engine();
    assert!(matches!(
        engine.decode_to_pcm(b"definitely not audio", None, false),
        Err(VqaError::Decode(_))
    ));
    assert!(matches!(
        engine.decode_to_pcm(&[], None, false),
        Err(VqaError::InvalidInput(_))
    ));
}

#[test]
fn test_unavailable_export_format_falls_back_to_wav() {
    let engine = Engine::new(EngineConfig {
        export_format: ExportFormat::Mp3,
        ..EngineConfig::default()
    })
    .unwrap();
    let out = engine.decode_to_pcm(&sine_wav(16_000, 0.1), None, false).unwrap();
    assert_eq!(&out[0..4], b"RIFF");
}

#[test]
fn test_validity_and_duration() {
    let engine = engine();
    assert!(!engine.is_valid_audio(b"not audio"));
    assert!(engine.is_valid_audio(&sine_wav(16_000, 0.5)));

    let duration = engine.duration_seconds(&sine_wav(22_050, 1.5)).unwrap();
    assert!((duration - 1.5).abs() < 1e-3);
    assert!(engine.duration_seconds(b"not audio").is_err());
}

#[test]
fn test_add_flat_noise_returns_noisy_wav() {
    let engine = engine();
    let input = sine_wav(16_000, 1.0);
    let noisy = engine.add_flat_noise(&input, 10.0).unwrap();
    assert_eq!(&noisy[0..4], b"RIFF");
    assert_eq!(noisy.len(), input.len());

    let clean = engine.decode_signal(&input, None).unwrap();
    let degraded = engine.decode_signal(&noisy, None).unwrap();
    let measured = measure_snr_db(&clean.samples, &degraded.samples);
    assert!((measured - 10.0).abs() < 1.0, "measured {}", measured);
}

#[test]
fn test_add_flat_noise_resamples_to_default_rate() {
    let engine = engine();
    let noisy = engine.add_flat_noise(&sine_wav(48_000, 1.0), 20.0).unwrap();
    assert_eq!(engine.duration_seconds(&noisy).unwrap(), 1.0);
    assert_eq!(noisy.len(), 44 + 16_000 * 2);
}

#[test]
fn test_profile_lookup_and_parameters() {
    let engine = engine();
    let profile = engine.get_noise_profile("hvac_office");
    assert_eq!(profile.category, NoiseCategory::Environmental);
    assert_eq!(profile.spectral_shape, SpectralShape::Pink);

    let params = engine.get_profile_parameters("crowd_stadium");
    assert_eq!(params.spectral_shape, SpectralShape::SpeechShaped);
    assert_eq!(params.temporal_variation, TemporalVariation::Modulated);
    assert_eq!(params.bandwidth_hz, 5_900.0);

    let sentinel = engine.get_noise_profile("does_not_exist");
    assert_eq!(sentinel.category, NoiseCategory::Unknown);
    assert_eq!(sentinel.difficulty, Difficulty::Unknown);
}

#[test]
fn test_profile_metrics() {
    let engine = engine();
    let metrics = engine.get_profile_metrics("babble_cafeteria");
    assert_eq!(metrics.estimated_wer_increase, 30.0);
    assert_eq!(metrics.recommended_snr_range, (-10.0, 10.0));

    let unknown = engine.get_profile_metrics("does_not_exist");
    assert_eq!(unknown.estimated_wer_increase, 10.0);
}

#[test]
fn test_generate_noise_for_all_profiles() {
    let engine = engine();
    for key in engine.list_noise_profiles(None) {
        let noise = engine.generate_noise(key, 0.5, None).unwrap();
        assert_eq!(noise.len(), 8_000, "{}", key);
        assert!(noise.iter().all(|s| s.abs() <= 1.0 + 1e-6), "{}", key);
    }
}

#[test]
fn test_construction_noise_dominates_at_negative_snr() {
    let engine = engine();
    let clean = generate_sine_wave(440.0, 16_000, 1.0, 0.5);
    let degraded = engine
        .apply_profile_noise(&clean, "construction", -5.0, Some(16_000))
        .unwrap();
    assert!(calculate_rms(&degraded) > calculate_rms(&clean));
}

#[test]
fn test_degrade_sweep_covers_recommended_range() {
    let engine = engine();
    let clean = generate_sine_wave(440.0, 16_000, 1.0, 0.5);
    let sweep = engine.degrade_sweep(&clean, "train_interior", 5.0, None).unwrap();

    let snrs: Vec<f64> = sweep.iter().map(|(snr, _)| *snr).collect();
    assert_eq!(snrs, vec![-2.0, 3.0, 8.0, 13.0, 18.0]);

    let mut previous = f64::NEG_INFINITY;
    for (snr, degraded) in &sweep {
        assert_eq!(degraded.len(), clean.len());
        let measured = measure_snr_db(&clean, degraded);
        assert!((measured - snr).abs() < 0.1);
        assert!(measured > previous);
        previous = measured;
    }
}

#[test]
fn test_degrade_sweep_rejects_unknown_profile() {
    let clean = vec![0.1f32; 100];
    assert!(matches!(
        engine().degrade_sweep(&clean, "nope", 5.0, None),
        Err(VqaError::UnknownProfile(_))
    ));
}

#[test]
fn test_degrade_sweep_rejects_tiny_step() {
    let clean = generate_sine_wave(440.0, 16_000, 0.1, 0.5);
    let result = engine().degrade_sweep(&clean, "hvac_office", 1e-9, None);
    assert!(matches!(result, Err(VqaError::InvalidInput(_))));
    assert!(engine().sweep_points("hvac_office", 1e-300).is_err());
}

#[test]
fn test_generate_noise_rejects_oversized_duration() {
    assert!(matches!(
        engine().generate_noise("hvac_office", 1e12, None),
        Err(VqaError::InvalidInput(_))
    ));
}
