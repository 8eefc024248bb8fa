// src/config/thresholds.rs
//
// All tuning constants for the forensics pipeline, gathered into one value
// passed in at construction time. No ambient globals: two analyzers with
// different configurations can run in the same process.

use serde::{Deserialize, Serialize};

/// Complete forensics configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ForensicsConfig {
    /// STFT analysis window in samples
    pub window_size: usize,
    /// STFT hop in samples (frame detectors)
    pub hop_size: usize,

    /// Percentile threshold for the phase-discontinuity detector
    pub phase_percentile: f32,
    /// Percentile threshold for the spectral-centroid detector
    pub spectral_percentile: f32,
    /// Percentile threshold for the RMS-energy detector
    pub energy_percentile: f32,
    /// Noise-floor deviation threshold in dB (either direction)
    pub noise_floor_db: f32,
    /// Noise-floor segment length in seconds (50% overlap)
    pub noise_segment_secs: f32,

    /// Absolute margin above the series median a phase value must clear
    /// (radians). Keeps steady-state recordings from flagging their own
    /// percentile tail.
    pub phase_margin: f32,
    /// Margin for centroid first differences (Hz)
    pub spectral_margin: f32,
    /// Margin for RMS first differences (amplitude)
    pub energy_margin: f32,

    /// Candidates closer than this are one event (seconds)
    pub merge_window: f64,
    /// Cross-detector agreement window (seconds)
    pub corroboration_window: f64,
    /// Events below this confidence are dropped before classification
    pub min_confidence: f32,
    /// Maximum events retained in the report
    pub max_detections: usize,
    /// Per-event authenticity penalty cap
    pub penalty_cap: f64,

    /// Tampered timeline window before the event location (seconds)
    pub event_pre_secs: f64,
    /// Tampered timeline window after the event location (seconds)
    pub event_post_secs: f64,
}

impl Default for ForensicsConfig {
    fn default() -> Self {
        Self {
            window_size: 2048,
            hop_size: 512,
            phase_percentile: 97.0,
            spectral_percentile: 95.0,
            energy_percentile: 96.0,
            noise_floor_db: 12.0,
            noise_segment_secs: 1.0,
            phase_margin: 0.5,
            spectral_margin: 50.0,
            energy_margin: 0.005,
            merge_window: 0.5,
            corroboration_window: 0.3,
            min_confidence: 55.0,
            max_detections: 5,
            penalty_cap: 18.0,
            event_pre_secs: 0.4,
            event_post_secs: 0.8,
        }
    }
}

impl ForensicsConfig {
    /// Map a corroboration count (detectors agreeing within the
    /// corroboration window) to an event confidence.
    pub fn confidence_for_count(&self, count: usize) -> f32 {
        match count {
            1 => 60.0,
            2 => 75.0,
            3 => 88.0,
            4 => 96.0,
            // A merged timestamp can drift outside its own detector's
            // corroboration window; treat it as single-detector evidence.
            _ => 60.0,
        }
    }
}

/// Fluent builder mirroring the analyzer construction style
#[derive(Debug, Clone, Default)]
pub struct ConfigBuilder {
    config: ForensicsConfig,
}

impl ConfigBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn merge_window(mut self, secs: f64) -> Self {
        self.config.merge_window = secs;
        self
    }

    pub fn corroboration_window(mut self, secs: f64) -> Self {
        self.config.corroboration_window = secs;
        self
    }

    pub fn min_confidence(mut self, confidence: f32) -> Self {
        self.config.min_confidence = confidence;
        self
    }

    pub fn max_detections(mut self, count: usize) -> Self {
        self.config.max_detections = count;
        self
    }

    pub fn noise_floor_db(mut self, db: f32) -> Self {
        self.config.noise_floor_db = db;
        self
    }

    pub fn build(self) -> ForensicsConfig {
        self.config
    }
}
