//! AudioForensics - Detect post-recording tampering in audio
//!
//! Analyzes a decoded mono recording for signs of splicing or editing and
//! produces an authenticity score, a list of classified tamper events, and
//! a segment-level timeline.
//!
//! ## How it works
//!
//! Four independent detectors scan shared signal features for
//! discontinuities:
//!
//! - **Phase**: mean absolute phase derivative between STFT frames
//! - **Spectral**: frame-to-frame jumps in the spectral centroid
//! - **Energy**: frame-to-frame jumps in RMS energy
//! - **Noise floor**: per-second RMS deviating >12 dB from the median
//!
//! Each detector self-calibrates with a percentile threshold over its own
//! value distribution, so no absolute magnitudes are assumed. Candidate
//! timestamps are merged (0.5 s window), scored by how many detectors
//! agree within ±0.3 s, classified (splice vs. edit), and converted into a
//! 0-100 authenticity score plus a gap-free timeline.
//!
//! ## Module Structure
//!
//! - `core` - decoding, feature extraction, detector bank, fusion
//! - `detection` - report types (events, timeline, summary)
//! - `config` - pipeline thresholds and builder
//! - `cli` - command-line interface
//! - `testgen` - synthetic signal generation for tests
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use audioforensics::core::ForensicAnalyzer;
//!
//! let analyzer = ForensicAnalyzer::new("recording.wav")?;
//! let report = analyzer.analyze()?;
//!
//! println!("Authenticity: {}/100", report.authenticity_score);
//! ```

pub mod cli;
pub mod config;
pub mod core;
pub mod detection;
pub mod error;
pub mod testgen;

// Re-export commonly used types at crate root for convenience
pub use config::{ConfigBuilder, ForensicsConfig};
pub use core::{
    analyze_tampering, decode_audio, AnalyzerBuilder, AudioSignal, DetectorKind, DetectorResult,
    ForensicAnalyzer,
};
pub use detection::{
    AnalysisSummary, SegmentStatus, Severity, TamperEvent, TamperReport, TamperType,
    TimelineSegment,
};
pub use error::AnalysisError;
