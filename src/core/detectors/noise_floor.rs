// src/core/detectors/noise_floor.rs
//
// Noise-floor-consistency detector. Every capture chain leaves a stable
// background level; a segment whose RMS sits far from the recording's
// median suggests material recorded elsewhere was pasted in.

use crate::config::ForensicsConfig;
use crate::core::dsp::stats;
use crate::core::features::FeatureSet;

use super::{DetectorKind, DetectorResult};

/// Segments quieter than this are ignored: true silence carries no
/// noise-floor information and would dominate the ratio test.
const SILENCE_RMS: f32 = 1e-6;

pub fn detect_noise_floor_shifts(
    features: &FeatureSet,
    config: &ForensicsConfig,
) -> DetectorResult {
    let segments = &features.segment_rms;
    if segments.len() < 3 {
        return DetectorResult::new(DetectorKind::NoiseFloorConsistency, Vec::new());
    }

    let active: Vec<f32> = segments
        .iter()
        .copied()
        .filter(|&rms| rms > SILENCE_RMS)
        .collect();
    if active.len() < 3 {
        return DetectorResult::new(DetectorKind::NoiseFloorConsistency, Vec::new());
    }

    let global_median = stats::median(&active);
    if global_median <= SILENCE_RMS {
        return DetectorResult::new(DetectorKind::NoiseFloorConsistency, Vec::new());
    }

    let high = stats::db_to_amplitude(config.noise_floor_db);
    let low = stats::db_to_amplitude(-config.noise_floor_db);

    let timestamps = segments
        .iter()
        .enumerate()
        .filter(|(_, &rms)| {
            if rms <= SILENCE_RMS {
                return false;
            }
            let ratio = rms / global_median;
            ratio > high || ratio < low
        })
        .map(|(i, _)| features.segment_time(i))
        .collect();

    DetectorResult::new(DetectorKind::NoiseFloorConsistency, timestamps)
}
