// src/core/detectors/phase.rs
//
// Phase-discontinuity detector. A splice breaks the phase progression of
// the underlying content across every bin at once, so the mean absolute
// phase derivative between consecutive frames spikes at the cut.

use crate::config::ForensicsConfig;
use crate::core::features::FeatureSet;

use super::{flag_above_percentile, DetectorKind, DetectorResult};

pub fn detect_phase_discontinuities(
    features: &FeatureSet,
    config: &ForensicsConfig,
) -> DetectorResult {
    let frames = &features.phases;
    if frames.len() < 2 {
        return DetectorResult::new(DetectorKind::PhaseDiscontinuity, Vec::new());
    }

    // Mean |dphi/dt| per frame pair
    let derivatives: Vec<f32> = frames
        .windows(2)
        .map(|pair| {
            let (prev, curr) = (&pair[0], &pair[1]);
            let sum: f32 = prev
                .iter()
                .zip(curr.iter())
                .map(|(&a, &b)| (b - a).abs())
                .sum();
            sum / prev.len() as f32
        })
        .collect();

    let timestamps = flag_above_percentile(
        &derivatives,
        config.phase_percentile,
        config.phase_margin,
    )
    .into_iter()
    // derivative i spans frames i..i+1; the discontinuity sits at i+1
    .map(|i| features.frame_time(i + 1))
    .collect();

    DetectorResult::new(DetectorKind::PhaseDiscontinuity, timestamps)
}
