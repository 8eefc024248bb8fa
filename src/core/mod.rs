//! Core analysis pipeline

pub mod analyzer;
pub mod decoder;
pub mod detectors;
pub mod dsp;
pub mod features;
pub mod fusion;

pub use analyzer::{analyze_tampering, AnalyzerBuilder, ForensicAnalyzer};
pub use decoder::{decode_audio, AudioSignal};
pub use detectors::{DetectorKind, DetectorResult};
pub use features::{extract_features, FeatureSet};
