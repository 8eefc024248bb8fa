// src/core/decoder.rs
//
// Audio decoding: turns a file on disk into the mono AudioSignal the
// forensics pipeline consumes. Uses Symphonia for format-agnostic decoding.

use std::fs::File;
use std::path::Path;

use symphonia::core::audio::SampleBuffer;
use symphonia::core::codecs::{DecoderOptions, CODEC_TYPE_NULL};
use symphonia::core::formats::FormatOptions;
use symphonia::core::io::MediaSourceStream;
use symphonia::core::meta::MetadataOptions;
use symphonia::core::probe::Hint;

use crate::error::{AnalysisError, Result};

/// A decoded mono recording. Immutable for the lifetime of one analysis;
/// samples are normalized to [-1.0, 1.0].
#[derive(Debug, Clone)]
pub struct AudioSignal {
    pub samples: Vec<f32>,
    pub sample_rate: u32,
}

impl AudioSignal {
    /// Build a signal from raw mono samples, rejecting unusable input.
    pub fn new(samples: Vec<f32>, sample_rate: u32) -> Result<Self> {
        if samples.is_empty() {
            return Err(AnalysisError::Validation(
                "audio signal contains no samples".to_string(),
            ));
        }
        if sample_rate == 0 {
            return Err(AnalysisError::Validation(
                "audio signal reports a sample rate of 0 Hz".to_string(),
            ));
        }
        Ok(Self {
            samples,
            sample_rate,
        })
    }

    /// Duration in seconds
    pub fn duration(&self) -> f64 {
        self.samples.len() as f64 / self.sample_rate as f64
    }
}

/// Decode an audio file to a mono floating-point signal.
///
/// Multi-channel input is downmixed by averaging channels. An empty or
/// undecodable file yields `AnalysisError::Validation` so callers can
/// report a client-input error rather than a pipeline failure.
pub fn decode_audio(path: &Path) -> Result<AudioSignal> {
    let file = File::open(path).map_err(|e| {
        AnalysisError::Validation(format!("failed to open {}: {}", path.display(), e))
    })?;

    let mss = MediaSourceStream::new(Box::new(file), Default::default());

    let mut hint = Hint::new();
    if let Some(ext) = path.extension() {
        hint.with_extension(ext.to_str().unwrap_or(""));
    }

    let meta_opts = MetadataOptions::default();
    let fmt_opts = FormatOptions::default();

    let mut probed = symphonia::default::get_probe()
        .format(&hint, mss, &fmt_opts, &meta_opts)
        .map_err(|e| {
            AnalysisError::Validation(format!(
                "unsupported or corrupted audio format ({})",
                e
            ))
        })?;

    let track = probed
        .format
        .tracks()
        .iter()
        .find(|t| t.codec_params.codec != CODEC_TYPE_NULL)
        .ok_or_else(|| {
            AnalysisError::Validation("no supported audio track found in file".to_string())
        })?;

    let track_id = track.id;
    let sample_rate = track.codec_params.sample_rate.ok_or_else(|| {
        AnalysisError::Validation("file does not specify a sample rate".to_string())
    })?;

    let channels = track.codec_params.channels.map(|c| c.count()).unwrap_or(1);
    if channels == 0 {
        return Err(AnalysisError::Validation(
            "file reports 0 audio channels".to_string(),
        ));
    }

    let dec_opts = DecoderOptions::default();
    let mut decoder = symphonia::default::get_codecs()
        .make(&track.codec_params, &dec_opts)
        .map_err(|e| {
            AnalysisError::Processing(format!("failed to create decoder: {}", e))
        })?;

    let mut samples: Vec<f32> = Vec::new();
    let mut sample_buf: Option<SampleBuffer<f32>> = None;

    loop {
        let packet = match probed.format.next_packet() {
            Ok(packet) => packet,
            Err(symphonia::core::errors::Error::IoError(ref e))
                if e.kind() == std::io::ErrorKind::UnexpectedEof =>
            {
                break
            }
            Err(symphonia::core::errors::Error::ResetRequired) => {
                decoder.reset();
                continue;
            }
            Err(e) => {
                return Err(AnalysisError::Processing(format!("packet read failed: {}", e)))
            }
        };

        if packet.track_id() != track_id {
            continue;
        }

        let decoded = match decoder.decode(&packet) {
            Ok(buf) => buf,
            Err(symphonia::core::errors::Error::DecodeError(_)) => continue,
            Err(e) => {
                return Err(AnalysisError::Processing(format!("decode failed: {}", e)))
            }
        };

        if sample_buf.is_none() {
            let spec = *decoded.spec();
            let duration = decoded.capacity() as u64;
            sample_buf = Some(SampleBuffer::new(duration, spec));
        }

        if let Some(ref mut buf) = sample_buf {
            buf.copy_interleaved_ref(decoded);
            samples.extend_from_slice(buf.samples());
        }
    }

    if samples.is_empty() {
        return Err(AnalysisError::Validation(
            "no audio samples decoded from file".to_string(),
        ));
    }

    let mono = downmix_mono(&samples, channels);
    AudioSignal::new(mono, sample_rate)
}

/// Average interleaved channels down to mono
fn downmix_mono(interleaved: &[f32], channels: usize) -> Vec<f32> {
    if channels == 1 {
        return interleaved.to_vec();
    }

    let num_samples = interleaved.len() / channels;
    let mut mono = Vec::with_capacity(num_samples);

    for i in 0..num_samples {
        let mut sum = 0.0f32;
        for ch in 0..channels {
            sum += interleaved[i * channels + ch];
        }
        mono.push(sum / channels as f32);
    }

    mono
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_downmix_mono() {
        let interleaved = vec![0.5, -0.5, 0.3, -0.3];
        let mono = downmix_mono(&interleaved, 2);
        assert_eq!(mono.len(), 2);
        assert!((mono[0] - 0.0).abs() < 0.001);
        assert!((mono[1] - 0.0).abs() < 0.001);
    }

    #[test]
    fn test_empty_signal_rejected() {
        let err = AudioSignal::new(vec![], 44100).unwrap_err();
        assert!(err.is_validation());
    }

    #[test]
    fn test_zero_sample_rate_rejected() {
        let err = AudioSignal::new(vec![0.1, 0.2], 0).unwrap_err();
        assert!(err.is_validation());
    }

    #[test]
    fn test_duration() {
        let signal = AudioSignal::new(vec![0.0; 44100], 44100).unwrap();
        assert!((signal.duration() - 1.0).abs() < 1e-9);
    }
}
