/// In-memory audio decoding using Symphonia
///
/// Decoding is an ordered chain of probes. Each probe reports a tagged outcome
/// and the first successful decode wins, so the MP3-specific path can fail
/// (or be skipped entirely for non-MP3 input) without any error being raised
/// until every probe has had its turn.
use crate::error::{AudioError, Result};
use std::io::Cursor;
use symphonia::core::audio::{AudioBufferRef, Signal};
use symphonia::core::codecs::DecoderOptions;
use symphonia::core::errors::Error as SymphoniaError;
use symphonia::core::formats::FormatOptions;
use symphonia::core::io::MediaSourceStream;
use symphonia::core::meta::MetadataOptions;
use symphonia::core::probe::Hint;
use tracing::{debug, warn};

/// Mono samples straight out of a decoder, before any resampling
#[derive(Debug, Clone, PartialEq)]
pub struct DecodedAudio {
    /// Mono f32 samples in [-1.0, 1.0]
    pub samples: Vec<f32>,
    /// Source sample rate in Hz
    pub sample_rate: u32,
    /// Channel count of the source stream (before downmix)
    pub channels: usize,
}

/// Result of running a single probe
#[derive(Debug)]
pub enum ProbeOutcome {
    /// The probe parsed the input
    Decoded(DecodedAudio),
    /// The probe does not handle this kind of input
    NotApplicable,
    /// The probe handles this input but failed to parse it
    Failed(String),
}

/// A single decode capability in the probe chain
pub trait DecodeProbe: Send + Sync {
    /// Short name used in logs and error messages
    fn name(&self) -> &'static str;

    /// Attempt to decode `bytes`
    fn probe(&self, bytes: &[u8]) -> ProbeOutcome;
}

/// Check for an ID3 tag or an MPEG frame sync at the start of the buffer
///
/// Frame sync is `0xFF` followed by a byte with its top three bits set.
pub fn looks_like_mp3(bytes: &[u8]) -> bool {
    if bytes.starts_with(b"ID3") {
        return true;
    }
    matches!(bytes, [0xFF, second, ..] if second & 0xE0 == 0xE0)
}

/// MP3-specific probe, only applicable when the magic bytes say MP3
#[derive(Debug, Default, Clone, Copy)]
pub struct Mp3Probe;

impl DecodeProbe for Mp3Probe {
    fn name(&self) -> &'static str {
        "mp3"
    }

    fn probe(&self, bytes: &[u8]) -> ProbeOutcome {
        if !looks_like_mp3(bytes) {
            return ProbeOutcome::NotApplicable;
        }
        match decode_with_symphonia(bytes, Some("mp3")) {
            Ok(decoded) => ProbeOutcome::Decoded(decoded),
            Err(e) => ProbeOutcome::Failed(e.to_string()),
        }
    }
}

/// Generic container probe (WAV, FLAC, OGG/Vorbis and anything else Symphonia can sniff)
#[derive(Debug, Default, Clone, Copy)]
pub struct ContainerProbe;

impl DecodeProbe for ContainerProbe {
    fn name(&self) -> &'static str {
        "container"
    }

    fn probe(&self, bytes: &[u8]) -> ProbeOutcome {
        match decode_with_symphonia(bytes, None) {
            Ok(decoded) => ProbeOutcome::Decoded(decoded),
            Err(e) => ProbeOutcome::Failed(e.to_string()),
        }
    }
}

/// Ordered list of probes; the first `Decoded` outcome wins
pub struct ProbeChain {
    probes: Vec<Box<dyn DecodeProbe>>,
}

impl ProbeChain {
    /// MP3 probe first, then the generic container probe
    pub fn standard() -> Self {
        Self::with_probes(vec![Box::new(Mp3Probe), Box::new(ContainerProbe)])
    }

    /// Build a chain from explicit probes (tried in order)
    pub fn with_probes(probes: Vec<Box<dyn DecodeProbe>>) -> Self {
        Self { probes }
    }

    /// Names of the probes, in the order they are tried
    pub fn probe_names(&self) -> Vec<&'static str> {
        self.probes.iter().map(|p| p.name()).collect()
    }

    /// Run the probes in order and return the first successful decode
    ///
    /// # Errors
    /// `InvalidInput` for an empty buffer, `DecodeError` listing each probe's
    /// failure when nothing could parse the input.
    pub fn decode(&self, bytes: &[u8]) -> Result<DecodedAudio> {
        if bytes.is_empty() {
            return Err(AudioError::InvalidInput("audio bytes are empty".to_string()));
        }

        let mut failures = Vec::new();
        for probe in &self.probes {
            match probe.probe(bytes) {
                ProbeOutcome::Decoded(decoded) => {
                    debug!(
                        probe = probe.name(),
                        sample_rate = decoded.sample_rate,
                        channels = decoded.channels,
                        samples = decoded.samples.len(),
                        "decoded audio"
                    );
                    return Ok(decoded);
                }
                ProbeOutcome::NotApplicable => {}
                ProbeOutcome::Failed(cause) => {
                    warn!(probe = probe.name(), %cause, "decode probe failed, trying next");
                    failures.push(format!("{}: {}", probe.name(), cause));
                }
            }
        }

        if failures.is_empty() {
            return Err(AudioError::DecodeError(
                "no decode probe accepted the input".to_string(),
            ));
        }
        Err(AudioError::DecodeError(failures.join("; ")))
    }
}

impl Default for ProbeChain {
    fn default() -> Self {
        Self::standard()
    }
}

/// Decode a complete in-memory stream to mono f32
fn decode_with_symphonia(bytes: &[u8], extension: Option<&str>) -> Result<DecodedAudio> {
    let cursor = Cursor::new(bytes.to_vec());
    let mss = MediaSourceStream::new(Box::new(cursor), Default::default());

    let mut hint = Hint::new();
    if let Some(ext) = extension {
        hint.with_extension(ext);
    }

    let probed = symphonia::default::get_probe()
        .format(
            &hint,
            mss,
            &FormatOptions::default(),
            &MetadataOptions::default(),
        )
        .map_err(|e| AudioError::Symphonia(format!("Failed to probe input: {}", e)))?;

    let mut format = probed.format;

    let track = format
        .default_track()
        .ok_or_else(|| AudioError::DecodeError("No audio tracks found".to_string()))?;

    let track_id = track.id;
    let mut sample_rate = track.codec_params.sample_rate;
    let mut channels = track.codec_params.channels.map(|c| c.count());

    let mut decoder = symphonia::default::get_codecs()
        .make(&track.codec_params, &DecoderOptions::default())
        .map_err(|e| AudioError::Symphonia(format!("Failed to create decoder: {}", e)))?;

    let mut samples = Vec::new();

    loop {
        let packet = match format.next_packet() {
            Ok(packet) => packet,
            Err(SymphoniaError::IoError(e)) if e.kind() == std::io::ErrorKind::UnexpectedEof => {
                break;
            }
            Err(SymphoniaError::ResetRequired) => break,
            Err(e) => {
                return Err(AudioError::Symphonia(format!("Error reading packet: {}", e)));
            }
        };

        if packet.track_id() != track_id {
            continue;
        }

        let decoded = match decoder.decode(&packet) {
            Ok(decoded) => decoded,
            Err(SymphoniaError::DecodeError(e)) => {
                debug!("skipping corrupt packet: {}", e);
                continue;
            }
            Err(e) => return Err(AudioError::DecodeError(format!("Decode error: {}", e))),
        };

        let spec = *decoded.spec();
        sample_rate.get_or_insert(spec.rate);
        channels.get_or_insert(spec.channels.count());

        samples.extend(convert_to_mono(decoded));
    }

    let sample_rate = sample_rate
        .filter(|&rate| rate > 0)
        .ok_or_else(|| AudioError::DecodeError("stream has no sample rate".to_string()))?;

    Ok(DecodedAudio {
        samples,
        sample_rate,
        channels: channels.unwrap_or(1),
    })
}

/// Convert a Symphonia buffer of any sample type to normalized mono f32
///
/// Signed integers use symmetric scaling (divide by 2^(N-1)); unsigned
/// integers are re-centred around zero.
fn convert_to_mono(decoded: AudioBufferRef) -> Vec<f32> {
    match decoded {
        AudioBufferRef::F32(buf) => downmix_to_mono(&buf, |s| s),
        AudioBufferRef::F64(buf) => downmix_to_mono(&buf, |s| s as f32),
        AudioBufferRef::S32(buf) => downmix_to_mono(&buf, |s| s as f32 / 2147483648.0),
        AudioBufferRef::S24(buf) => downmix_to_mono(&buf, |s| s.inner() as f32 / 8388608.0),
        AudioBufferRef::S16(buf) => downmix_to_mono(&buf, |s| f32::from(s) / 32768.0),
        AudioBufferRef::S8(buf) => downmix_to_mono(&buf, |s| f32::from(s) / 128.0),
        AudioBufferRef::U32(buf) => {
            downmix_to_mono(&buf, |s| (s as f32 / u32::MAX as f32) * 2.0 - 1.0)
        }
        AudioBufferRef::U24(buf) => {
            downmix_to_mono(&buf, |s| (s.inner() as f32 / 16777215.0) * 2.0 - 1.0)
        }
        AudioBufferRef::U16(buf) => {
            downmix_to_mono(&buf, |s| (f32::from(s) / f32::from(u16::MAX)) * 2.0 - 1.0)
        }
        AudioBufferRef::U8(buf) => {
            downmix_to_mono(&buf, |s| (f32::from(s) / f32::from(u8::MAX)) * 2.0 - 1.0)
        }
    }
}

/// Average all channels into one, clamping float input that overshoots
fn downmix_to_mono<T, F>(buf: &symphonia::core::audio::AudioBuffer<T>, normalize: F) -> Vec<f32>
where
    T: symphonia::core::sample::Sample + Copy,
    F: Fn(T) -> f32,
{
    let frames = buf.frames();
    let channels = buf.spec().channels.count();

    if channels == 0 {
        return vec![0.0; frames];
    }
    if channels == 1 {
        return buf
            .chan(0)
            .iter()
            .map(|&s| normalize(s).clamp(-1.0, 1.0))
            .collect();
    }

    let mut mono = vec![0.0f32; frames];
    for ch in 0..channels {
        for (acc, &s) in mono.iter_mut().zip(buf.chan(ch)) {
            *acc += normalize(s);
        }
    }
    let scale = 1.0 / channels as f32;
    for sample in &mut mono {
        *sample = (*sample * scale).clamp(-1.0, 1.0);
    }
    mono
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::{generate_sine_wave, wav_bytes_i16};

    #[test]
    fn detects_id3_prefix() {
        assert!(looks_like_mp3(b"ID3\x04\x00rest"));
    }

    #[test]
    fn detects_frame_sync() {
        assert!(looks_like_mp3(&[0xFF, 0xFB, 0x90, 0x00]));
        assert!(looks_like_mp3(&[0xFF, 0xE0]));
        assert!(!looks_like_mp3(&[0xFF, 0xC0, 0x00]));
        assert!(!looks_like_mp3(&[0xFF]));
        assert!(!looks_like_mp3(b"RIFF....WAVE"));
    }

    #[test]
    fn mp3_probe_skips_non_mp3() {
        let wav = wav_bytes_i16(&generate_sine_wave(440.0, 16_000, 0.1, 0.5), 16_000, 1);
        assert!(matches!(Mp3Probe.probe(&wav), ProbeOutcome::NotApplicable));
    }

    #[test]
    fn container_probe_decodes_wav() {
        let wav = wav_bytes_i16(&generate_sine_wave(440.0, 16_000, 0.25, 0.5), 16_000, 1);
        match ContainerProbe.probe(&wav) {
            ProbeOutcome::Decoded(decoded) => {
                assert_eq!(decoded.sample_rate, 16_000);
                assert_eq!(decoded.channels, 1);
                assert_eq!(decoded.samples.len(), 4_000);
            }
            other => panic!("expected decode, got {:?}", other),
        }
    }

    #[test]
    fn stereo_is_averaged_to_mono() {
        // Left at +0.5, right at -0.5 cancels to silence
        let mut interleaved = Vec::new();
        for _ in 0..1_000 {
            interleaved.push(0.5);
            interleaved.push(-0.5);
        }
        let wav = wav_bytes_i16(&interleaved, 8_000, 2);
        let decoded = ProbeChain::standard().decode(&wav).unwrap();
        assert_eq!(decoded.channels, 2);
        assert_eq!(decoded.samples.len(), 1_000);
        assert!(decoded.samples.iter().all(|s| s.abs() < 1e-3));
    }

    #[test]
    fn empty_bytes_are_invalid_input() {
        let result = ProbeChain::standard().decode(&[]);
        assert!(matches!(result, Err(AudioError::InvalidInput(_))));
    }

    #[test]
    fn garbage_fails_with_decode_error() {
        let result = ProbeChain::standard().decode(b"not audio");
        match result {
            Err(AudioError::DecodeError(msg)) => assert!(msg.contains("container")),
            other => panic!("expected DecodeError, got {:?}", other),
        }
    }

    #[test]
    fn fake_mp3_falls_back_to_container_probe() {
        // Frame-sync prefix that is not a real MP3: both probes fail, and the
        // error names both of them
        let mut bytes = vec![0xFF, 0xFB];
        bytes.extend_from_slice(&[0u8; 64]);
        match ProbeChain::standard().decode(&bytes) {
            Err(AudioError::DecodeError(msg)) => {
                assert!(msg.contains("mp3"));
                assert!(msg.contains("container"));
            }
            Ok(_) => {}
            Err(other) => panic!("unexpected error: {:?}", other),
        }
    }

    #[test]
    fn standard_chain_order() {
        assert_eq!(ProbeChain::standard().probe_names(), vec!["mp3", "container"]);
    }
}
