// src/core/detectors/energy.rs
//
// Energy-discontinuity detector: an abrupt step in per-frame RMS that the
// recording's own loudness distribution cannot explain.

use crate::config::ForensicsConfig;
use crate::core::features::FeatureSet;

use super::{flag_above_percentile, DetectorKind, DetectorResult};

pub fn detect_energy_discontinuities(
    features: &FeatureSet,
    config: &ForensicsConfig,
) -> DetectorResult {
    let rms = &features.rms_frames;
    if rms.len() < 2 {
        return DetectorResult::new(DetectorKind::EnergyDiscontinuity, Vec::new());
    }

    let diffs: Vec<f32> = rms.windows(2).map(|w| (w[1] - w[0]).abs()).collect();

    let timestamps =
        flag_above_percentile(&diffs, config.energy_percentile, config.energy_margin)
            .into_iter()
            .map(|i| features.frame_time(i + 1))
            .collect();

    DetectorResult::new(DetectorKind::EnergyDiscontinuity, timestamps)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::features::extract_features;
    use crate::testgen;

    #[test]
    fn test_clean_tone_no_flags() {
        let signal = testgen::sine(440.0, 0.5, 3.0, 44100);
        let config = ForensicsConfig::default();
        let features = extract_features(&signal, &config);
        let result = detect_energy_discontinuities(&features, &config);
        assert!(result.timestamps.is_empty());
    }

    #[test]
    fn test_amplitude_step_flagged_near_cut() {
        let signal = testgen::splice(440.0, 0.9, 440.0, 0.1, 2.0, 4.0, 44100);
        let config = ForensicsConfig::default();
        let features = extract_features(&signal, &config);
        let result = detect_energy_discontinuities(&features, &config);

        assert!(!result.timestamps.is_empty());
        assert!(result
            .timestamps
            .iter()
            .any(|&t| (t - 2.0).abs() < 0.2));
    }
}
