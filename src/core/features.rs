// src/core/features.rs
//
// Shared feature extraction for the detector bank. Everything here is
// computed once per analysis and read concurrently by all four detectors.

use crate::config::ForensicsConfig;
use crate::core::decoder::AudioSignal;
use crate::core::dsp::{stats, FftProcessor, WindowType};

/// Read-only feature bundle derived from one signal.
///
/// Frame-indexed vectors (phases, centroids, rms) use the STFT geometry
/// from the config (window 2048 / hop 512 by default); `segment_rms` uses
/// the noise-floor geometry (1-second segments, 50% overlap).
#[derive(Debug, Clone)]
pub struct FeatureSet {
    /// Per-frame phase spectrum (positive-frequency bins)
    pub phases: Vec<Vec<f32>>,
    /// Per-frame spectral centroid in Hz
    pub centroids: Vec<f32>,
    /// Per-frame RMS energy
    pub rms_frames: Vec<f32>,
    /// Per-segment RMS for the noise-floor detector
    pub segment_rms: Vec<f32>,
    /// Seconds between consecutive frames
    pub frame_hop_secs: f64,
    /// Seconds between consecutive noise-floor segments
    pub segment_hop_secs: f64,
    pub sample_rate: u32,
    pub duration: f64,
}

impl FeatureSet {
    /// Time of frame `i` in seconds
    pub fn frame_time(&self, i: usize) -> f64 {
        i as f64 * self.frame_hop_secs
    }

    /// Start time of noise-floor segment `i` in seconds
    pub fn segment_time(&self, i: usize) -> f64 {
        i as f64 * self.segment_hop_secs
    }
}

/// Extract the full feature set for one signal.
///
/// Signals shorter than one analysis window produce empty frame vectors;
/// the detectors treat that as "no evidence" rather than an error.
pub fn extract_features(signal: &AudioSignal, config: &ForensicsConfig) -> FeatureSet {
    let window = config.window_size;
    let hop = config.hop_size;
    let samples = &signal.samples;

    let mut fft = FftProcessor::new(window, WindowType::Hann);

    let mut phases = Vec::new();
    let mut centroids = Vec::new();
    let mut rms_frames = Vec::new();

    if samples.len() >= window {
        let frame_count = (samples.len() - window) / hop + 1;
        phases.reserve(frame_count);
        centroids.reserve(frame_count);
        rms_frames.reserve(frame_count);

        for start in (0..=samples.len() - window).step_by(hop) {
            let frame = &samples[start..start + window];
            let spectrum = fft.complex_spectrum(frame);

            let magnitudes: Vec<f32> = spectrum
                .iter()
                .map(|c| (c.re * c.re + c.im * c.im).sqrt())
                .collect();
            let phase: Vec<f32> = spectrum.iter().map(|c| c.im.atan2(c.re)).collect();

            centroids.push(stats::spectral_centroid(&magnitudes, signal.sample_rate));
            rms_frames.push(stats::rms(frame));
            phases.push(phase);
        }
    }

    let (segment_rms, segment_hop_secs) = segment_rms_series(signal, config);

    log::debug!(
        "extracted features: {} frames, {} noise segments",
        centroids.len(),
        segment_rms.len()
    );

    FeatureSet {
        phases,
        centroids,
        rms_frames,
        segment_rms,
        frame_hop_secs: hop as f64 / signal.sample_rate as f64,
        segment_hop_secs,
        sample_rate: signal.sample_rate,
        duration: signal.duration(),
    }
}

/// RMS over fixed-length segments with 50% overlap
fn segment_rms_series(signal: &AudioSignal, config: &ForensicsConfig) -> (Vec<f32>, f64) {
    let seg_len = (config.noise_segment_secs * signal.sample_rate as f32) as usize;
    let seg_hop = seg_len / 2;
    let hop_secs = seg_hop as f64 / signal.sample_rate as f64;

    if seg_len == 0 || seg_hop == 0 || signal.samples.len() < seg_len {
        return (Vec::new(), hop_secs.max(f64::EPSILON));
    }

    let series = (0..=signal.samples.len() - seg_len)
        .step_by(seg_hop)
        .map(|start| stats::rms(&signal.samples[start..start + seg_len]))
        .collect();

    (series, hop_secs)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testgen;

    #[test]
    fn test_frame_counts_match() {
        let signal = testgen::sine(440.0, 0.5, 2.0, 44100);
        let config = ForensicsConfig::default();
        let features = extract_features(&signal, &config);

        assert_eq!(features.phases.len(), features.centroids.len());
        assert_eq!(features.phases.len(), features.rms_frames.len());
        assert!(!features.centroids.is_empty());
    }

    #[test]
    fn test_centroid_tracks_tone_frequency() {
        let low = testgen::sine(440.0, 0.5, 1.0, 44100);
        let high = testgen::sine(4000.0, 0.5, 1.0, 44100);
        let config = ForensicsConfig::default();

        let c_low = extract_features(&low, &config).centroids;
        let c_high = extract_features(&high, &config).centroids;

        let mean = |v: &[f32]| v.iter().sum::<f32>() / v.len() as f32;
        assert!(mean(&c_high) > mean(&c_low));
    }

    #[test]
    fn test_short_signal_yields_no_frames() {
        let signal = AudioSignal::new(vec![0.1; 100], 44100).unwrap();
        let config = ForensicsConfig::default();
        let features = extract_features(&signal, &config);
        assert!(features.phases.is_empty());
        assert!(features.segment_rms.is_empty());
    }

    #[test]
    fn test_segment_count_for_five_seconds() {
        let signal = testgen::sine(440.0, 0.5, 5.0, 8000);
        let config = ForensicsConfig::default();
        let features = extract_features(&signal, &config);
        // 1 s segments, 0.5 s hop over 5 s -> 9 segments
        assert_eq!(features.segment_rms.len(), 9);
    }
}
