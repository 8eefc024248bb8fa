// src/core/detectors/spectral.rs
//
// Spectral-discontinuity detector: large frame-to-frame jumps in the
// spectral centroid mark a sudden change in tonal content, as when
// material from a different source is edited in.

use crate::config::ForensicsConfig;
use crate::core::features::FeatureSet;

use super::{flag_above_percentile, DetectorKind, DetectorResult};

pub fn detect_spectral_discontinuities(
    features: &FeatureSet,
    config: &ForensicsConfig,
) -> DetectorResult {
    let centroids = &features.centroids;
    if centroids.len() < 2 {
        return DetectorResult::new(DetectorKind::SpectralDiscontinuity, Vec::new());
    }

    let diffs: Vec<f32> = centroids.windows(2).map(|w| (w[1] - w[0]).abs()).collect();

    let timestamps = flag_above_percentile(
        &diffs,
        config.spectral_percentile,
        config.spectral_margin,
    )
    .into_iter()
    .map(|i| features.frame_time(i + 1))
    .collect();

    DetectorResult::new(DetectorKind::SpectralDiscontinuity, timestamps)
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
        let result = detect_spectral_discontinuities(&features, &config);
        assert!(result.timestamps.is_empty());
    }

    #[test]
    fn test_frequency_jump_flagged_near_cut() {
        let signal = testgen::splice(440.0, 0.5, 4000.0, 0.5, 2.0, 4.0, 44100);
        let config = ForensicsConfig::default();
        let features = extract_features(&signal, &config);
        let result = detect_spectral_discontinuities(&features, &config);

        assert!(!result.timestamps.is_empty());
        assert!(result
            .timestamps
            .iter()
            .any(|&t| (t - 2.0).abs() < 0.2));
    }
}
