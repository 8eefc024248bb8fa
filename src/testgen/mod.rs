// src/testgen/mod.rs
//
// Synthetic signal generation for testing and validation of the detector
// bank. Builds clean and deliberately-tampered signals in memory, and can
// write them to WAV for fixture generation.

use std::path::Path;

use crate::core::decoder::AudioSignal;
use crate::error::{AnalysisError, Result};

/// Steady sine tone
pub fn sine(freq: f32, amplitude: f32, duration_secs: f32, sample_rate: u32) -> AudioSignal {
    let count = (duration_secs * sample_rate as f32) as usize;
    let samples = (0..count)
        .map(|i| {
            amplitude * (2.0 * std::f32::consts::PI * freq * i as f32 / sample_rate as f32).sin()
        })
        .collect();
    AudioSignal {
        samples,
        sample_rate,
    }
}

/// Two tones butted together at `cut_secs` - a hard splice with both an
/// amplitude and a frequency step.
#[allow(clippy::too_many_arguments)]
pub fn splice(
    freq_a: f32,
    amp_a: f32,
    freq_b: f32,
    amp_b: f32,
    cut_secs: f32,
    duration_secs: f32,
    sample_rate: u32,
) -> AudioSignal {
    let count = (duration_secs * sample_rate as f32) as usize;
    let cut = (cut_secs * sample_rate as f32) as usize;

    let samples = (0..count)
        .map(|i| {
            let t = i as f32 / sample_rate as f32;
            if i < cut {
                amp_a * (2.0 * std::f32::consts::PI * freq_a * t).sin()
            } else {
                amp_b * (2.0 * std::f32::consts::PI * freq_b * t).sin()
            }
        })
        .collect();

    AudioSignal {
        samples,
        sample_rate,
    }
}

/// All-zero signal
pub fn silence(duration_secs: f32, sample_rate: u32) -> AudioSignal {
    let count = (duration_secs * sample_rate as f32) as usize;
    AudioSignal {
        samples: vec![0.0; count],
        sample_rate,
    }
}

/// Write a signal to a 16-bit mono WAV file
pub fn write_wav(signal: &AudioSignal, path: &Path) -> Result<()> {
    let spec = hound::WavSpec {
        channels: 1,
        sample_rate: signal.sample_rate,
        bits_per_sample: 16,
        sample_format: hound::SampleFormat::Int,
    };

    let mut writer = hound::WavWriter::create(path, spec)
        .map_err(|e| AnalysisError::Processing(format!("failed to create wav: {}", e)))?;

    for &sample in &signal.samples {
        let value = (sample.clamp(-1.0, 1.0) * i16::MAX as f32) as i16;
        writer
            .write_sample(value)
            .map_err(|e| AnalysisError::Processing(format!("failed to write wav: {}", e)))?;
    }

    writer
        .finalize()
        .map_err(|e| AnalysisError::Processing(format!("failed to finalize wav: {}", e)))?;

    Ok(())
}
