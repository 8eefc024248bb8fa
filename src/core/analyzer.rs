// src/core/analyzer.rs
//
// High-level forensics API with builder pattern. One analyzer owns one
// immutable signal and one configuration; analyze() is a pure function of
// both, so repeated runs yield identical reports.

use std::path::{Path, PathBuf};
use std::time::Instant;

use crate::config::{ConfigBuilder, ForensicsConfig};
use crate::core::decoder::{decode_audio, AudioSignal};
use crate::core::detectors::run_detector_bank;
use crate::core::features::extract_features;
use crate::core::fusion::{fuse_events, retain_top_events};
use crate::detection::{authenticity_score, build_summary, build_timeline, TamperReport};
use crate::error::{AnalysisError, Result};

/// Run the full tamper analysis pipeline over one decoded signal.
///
/// Stages: feature extraction, parallel detector bank, timestamp merge,
/// corroboration scoring, classification, authenticity scoring, timeline
/// and summary assembly.
pub fn analyze_tampering(signal: &AudioSignal, config: &ForensicsConfig) -> Result<TamperReport> {
    if signal.samples.is_empty() {
        return Err(AnalysisError::Validation(
            "audio signal contains no samples".to_string(),
        ));
    }
    if signal.sample_rate == 0 {
        return Err(AnalysisError::Validation(
            "audio signal reports a sample rate of 0 Hz".to_string(),
        ));
    }

    let started = Instant::now();
    let duration = signal.duration();

    let features = extract_features(signal, config);
    let results = run_detector_bank(&features, config);

    let confirmed = fuse_events(&results, config);
    let detections = retain_top_events(confirmed, config.max_detections);

    let score = authenticity_score(&detections, config);
    let elapsed_ms = started.elapsed().as_millis() as u64;

    // Timeline walks events in ascending time order
    let mut by_time = detections.clone();
    by_time.sort_by(|a, b| {
        a.location
            .partial_cmp(&b.location)
            .unwrap_or(std::cmp::Ordering::Equal)
    });
    let timeline = build_timeline(&by_time, duration, config);
    let summary = build_summary(&detections, duration, elapsed_ms, config);

    log::info!(
        "analysis complete: {} detection(s), authenticity score {}",
        detections.len(),
        score
    );

    Ok(TamperReport {
        authenticity_score: score,
        tampering_detected: !detections.is_empty(),
        detections,
        summary,
        timeline,
    })
}

/// Builder for ForensicAnalyzer configuration
pub struct AnalyzerBuilder {
    config: ConfigBuilder,
}

impl AnalyzerBuilder {
    pub fn new() -> Self {
        Self {
            config: ConfigBuilder::new(),
        }
    }

    pub fn min_confidence(mut self, confidence: f32) -> Self {
        self.config = self.config.min_confidence(confidence);
        self
    }

    pub fn max_detections(mut self, count: usize) -> Self {
        self.config = self.config.max_detections(count);
        self
    }

    pub fn merge_window(mut self, secs: f64) -> Self {
        self.config = self.config.merge_window(secs);
        self
    }

    pub fn build<P: AsRef<Path>>(self, path: P) -> Result<ForensicAnalyzer> {
        let signal = decode_audio(path.as_ref())?;
        Ok(ForensicAnalyzer {
            path: Some(path.as_ref().to_path_buf()),
            signal,
            config: self.config.build(),
        })
    }

    pub fn build_from_signal(self, signal: AudioSignal) -> ForensicAnalyzer {
        ForensicAnalyzer {
            path: None,
            signal,
            config: self.config.build(),
        }
    }
}

impl Default for AnalyzerBuilder {
    fn default() -> Self {
        Self::new()
    }
}

/// Main forensic analyzer with fluent API
pub struct ForensicAnalyzer {
    path: Option<PathBuf>,
    signal: AudioSignal,
    config: ForensicsConfig,
}

impl ForensicAnalyzer {
    /// Decode a file and build an analyzer with default configuration
    pub fn new<P: AsRef<Path>>(path: P) -> Result<Self> {
        AnalyzerBuilder::new().build(path)
    }

    /// Wrap an already-decoded signal with a custom configuration
    pub fn with_config(signal: AudioSignal, config: ForensicsConfig) -> Self {
        Self {
            path: None,
            signal,
            config,
        }
    }

    /// Create a builder for custom configuration
    pub fn builder() -> AnalyzerBuilder {
        AnalyzerBuilder::new()
    }

    /// Run the full tamper analysis
    pub fn analyze(&self) -> Result<TamperReport> {
        analyze_tampering(&self.signal, &self.config)
    }

    pub fn signal(&self) -> &AudioSignal {
        &self.signal
    }

    pub fn path(&self) -> Option<&Path> {
        self.path.as_deref()
    }
}
