//! Decoder edge case tests
//!
//! Tests for:
//! - Empty and garbage input
//! - Truncated headers
//! - MP3 magic with non-MP3 payload
//! - Custom probe chains

use vqa_audio::test_utils::{generate_sine_wave, wav_bytes_i16};
use vqa_audio::{AudioConverter, AudioError, DecodeProbe, DecodedAudio, ProbeChain, ProbeOutcome};
use vqa_core::SampleRate;

// ============================================================================
// CORRUPTED INPUT TESTS
// ============================================================================

#[test]
fn test_random_garbage_data() {
    let garbage: Vec<u8> = (0..1024).map(|i| (i % 251) as u8).collect();
    let result = AudioConverter::new().decode(&garbage, SampleRate::SPEECH);
    assert!(matches!(result, Err(AudioError::DecodeError(_))));
}

#[test]
fn test_truncated_riff_header() {
    let result = AudioConverter::new().decode(b"RIF", SampleRate::SPEECH);
    assert!(result.is_err(), "Truncated header should fail to decode");
}

#[test]
fn test_text_is_not_valid_audio() {
    assert!(!AudioConverter::new().is_valid_format(b"not audio"));
}

#[test]
fn test_id3_prefix_with_wav_payload_is_rejected_or_decoded() {
    // ID3 tag selects the MP3 probe first; whatever happens, no panic and
    // any error is a DecodeError
    let mut bytes = b"ID3".to_vec();
    bytes.extend(wav_bytes_i16(&generate_sine_wave(440.0, 16_000, 0.1, 0.5), 16_000, 1));
    match AudioConverter::new().decode(&bytes, SampleRate::SPEECH) {
        Ok(_) | Err(AudioError::DecodeError(_) | AudioError::Symphonia(_)) => {}
        Err(other) => panic!("unexpected error kind: {:?}", other),
    }
}

// ============================================================================
// PROBE CHAIN TESTS
// ============================================================================

struct FixedProbe {
    outcome: fn() -> ProbeOutcome,
}

impl DecodeProbe for FixedProbe {
    fn name(&self) -> &'static str {
        "fixed"
    }

    fn probe(&self, _bytes: &[u8]) -> ProbeOutcome {
        (self.outcome)()
    }
}

fn failing() -> ProbeOutcome {
    ProbeOutcome::Failed("always fails".to_string())
}

fn succeeding() -> ProbeOutcome {
    ProbeOutcome::Decoded(DecodedAudio {
        samples: vec![0.25; 8],
        sample_rate: 8_000,
        channels: 1,
    })
}

#[test]
fn test_first_success_wins_after_failure() {
    let chain = ProbeChain::with_probes(vec![
        Box::new(FixedProbe { outcome: failing }),
        Box::new(FixedProbe { outcome: succeeding }),
    ]);
    let converter = AudioConverter::with_probes(chain);
    let buffer = converter.decode(b"anything", SampleRate::SPEECH).unwrap();
    assert_eq!(buffer.len(), 16);
    assert!(buffer.samples.iter().all(|&s| (s - 0.25).abs() < 1e-6));
}

#[test]
fn test_all_failures_are_reported() {
    let chain = ProbeChain::with_probes(vec![
        Box::new(FixedProbe { outcome: failing }),
        Box::new(FixedProbe { outcome: failing }),
    ]);
    match chain.decode(b"anything") {
        Err(AudioError::DecodeError(msg)) => assert_eq!(msg.matches("always fails").count(), 2),
        other => panic!("expected DecodeError, got {:?}", other),
    }
}

#[test]
fn test_empty_chain_is_decode_error() {
    let chain = ProbeChain::with_probes(Vec::new());
    assert!(matches!(chain.decode(b"x"), Err(AudioError::DecodeError(_))));
}
