//! Detector bank
//!
//! Four independent discontinuity detectors, each a pure function from the
//! shared feature set to an ordered list of candidate timestamps. None of
//! them knows about the others; corroboration happens later in fusion.

mod energy;
mod noise_floor;
mod phase;
mod spectral;

pub use energy::detect_energy_discontinuities;
pub use noise_floor::detect_noise_floor_shifts;
pub use phase::detect_phase_discontinuities;
pub use spectral::detect_spectral_discontinuities;

use crate::config::ForensicsConfig;
use crate::core::dsp::stats;
use crate::core::features::FeatureSet;

/// Minimum series length for a meaningful percentile threshold
const MIN_SERIES_LEN: usize = 8;

/// Identity of a detector in the bank
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DetectorKind {
    PhaseDiscontinuity,
    SpectralDiscontinuity,
    EnergyDiscontinuity,
    NoiseFloorConsistency,
}

impl DetectorKind {
    pub fn label(&self) -> &'static str {
        match self {
            DetectorKind::PhaseDiscontinuity => "phase",
            DetectorKind::SpectralDiscontinuity => "spectral",
            DetectorKind::EnergyDiscontinuity => "energy",
            DetectorKind::NoiseFloorConsistency => "noise-floor",
        }
    }
}

/// One detector's candidate timestamps, ascending and deduplicated.
/// Never mutated after creation.
#[derive(Debug, Clone)]
pub struct DetectorResult {
    pub kind: DetectorKind,
    pub timestamps: Vec<f64>,
}

impl DetectorResult {
    fn new(kind: DetectorKind, mut timestamps: Vec<f64>) -> Self {
        timestamps.sort_by(|a, b| a.partial_cmp(b).unwrap_or(std::cmp::Ordering::Equal));
        timestamps.dedup();
        Self { kind, timestamps }
    }

    /// Does any raw candidate fall within `window` seconds of `t`?
    pub fn has_candidate_near(&self, t: f64, window: f64) -> bool {
        self.timestamps.iter().any(|&ts| (ts - t).abs() <= window)
    }
}

/// Run all four detectors over the shared features (fan-out).
///
/// The detectors only read `features`, so they are executed in parallel;
/// the returned array is the fan-in point the merger waits on.
pub fn run_detector_bank(features: &FeatureSet, config: &ForensicsConfig) -> [DetectorResult; 4] {
    let ((phase, spectral), (energy, noise)) = rayon::join(
        || {
            rayon::join(
                || detect_phase_discontinuities(features, config),
                || detect_spectral_discontinuities(features, config),
            )
        },
        || {
            rayon::join(
                || detect_energy_discontinuities(features, config),
                || detect_noise_floor_shifts(features, config),
            )
        },
    );

    for result in [&phase, &spectral, &energy, &noise] {
        log::debug!(
            "{} detector: {} candidate(s)",
            result.kind.label(),
            result.timestamps.len()
        );
    }

    [phase, spectral, energy, noise]
}

/// Percentile-threshold a value series, returning flagged indices.
///
/// The series self-calibrates via its own percentile, but a value must
/// also clear the series median by `margin` so that a steady-state
/// recording does not flag its own percentile tail (any finite
/// distribution has a top N%).
fn flag_above_percentile(values: &[f32], pct: f32, margin: f32) -> Vec<usize> {
    if values.len() < MIN_SERIES_LEN {
        return Vec::new();
    }

    let threshold = stats::percentile(values, pct);
    let floor = stats::median(values) + margin;

    values
        .iter()
        .enumerate()
        .filter(|(_, &v)| v > threshold && v > floor)
        .map(|(i, _)| i)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_flag_short_series_empty() {
        assert!(flag_above_percentile(&[1.0, 2.0, 3.0], 95.0, 0.0).is_empty());
    }

    #[test]
    fn test_flag_constant_series_empty() {
        let values = vec![0.5f32; 100];
        assert!(flag_above_percentile(&values, 97.0, 0.01).is_empty());
    }

    #[test]
    fn test_flag_single_spike() {
        let mut values = vec![0.1f32; 100];
        values[42] = 5.0;
        let flagged = flag_above_percentile(&values, 97.0, 0.05);
        assert_eq!(flagged, vec![42]);
    }

    #[test]
    fn test_result_ordering_and_dedup() {
        let result = DetectorResult::new(
            DetectorKind::PhaseDiscontinuity,
            vec![3.0, 1.0, 2.0, 1.0],
        );
        assert_eq!(result.timestamps, vec![1.0, 2.0, 3.0]);
    }

    #[test]
    fn test_has_candidate_near() {
        let result =
            DetectorResult::new(DetectorKind::EnergyDiscontinuity, vec![1.0, 5.0]);
        assert!(result.has_candidate_near(1.25, 0.3));
        assert!(!result.has_candidate_near(2.0, 0.3));
    }
}
