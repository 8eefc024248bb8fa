// src/core/fusion.rs
//
// Evidence fusion: union the detector candidates, collapse near-duplicate
// timestamps, score each merged event by cross-detector agreement, and
// classify the survivors.

use crate::config::ForensicsConfig;
use crate::core::detectors::{DetectorKind, DetectorResult};
use crate::detection::{Severity, TamperEvent, TamperType};

/// Collapse raw candidate timestamps into distinct events.
///
/// Greedy forward pass: after sorting and exact-dedup, the first timestamp
/// seeds a cluster and each later one is absorbed if it lies within
/// `window` of the LAST ACCEPTED value, else it becomes the next accepted
/// value. This is deliberately not symmetric density clustering; the
/// accepted-point semantics are part of the contract and changing them
/// shifts event counts on dense candidate runs.
pub fn merge_timestamps(raw: &[f64], window: f64) -> Vec<f64> {
    let mut sorted = raw.to_vec();
    sorted.sort_by(|a, b| a.partial_cmp(b).unwrap_or(std::cmp::Ordering::Equal));
    sorted.dedup();

    let mut merged: Vec<f64> = Vec::new();
    for t in sorted {
        match merged.last() {
            Some(&last) if t - last <= window => {} // absorbed into the previous cluster
            _ => merged.push(t),
        }
    }
    merged
}

/// How many detectors flagged anything within the corroboration window of `t`
pub fn corroboration_count(t: f64, results: &[DetectorResult], window: f64) -> usize {
    results
        .iter()
        .filter(|r| r.has_candidate_near(t, window))
        .count()
}

/// Merge, score, and classify the detector bank's output.
///
/// Returns confirmed events in ascending time order; the caller applies
/// the top-N confidence cut.
pub fn fuse_events(results: &[DetectorResult], config: &ForensicsConfig) -> Vec<TamperEvent> {
    let union: Vec<f64> = results
        .iter()
        .flat_map(|r| r.timestamps.iter().copied())
        .collect();

    let merged = merge_timestamps(&union, config.merge_window);
    log::debug!(
        "merged {} raw candidate(s) into {} event timestamp(s)",
        union.len(),
        merged.len()
    );

    merged
        .into_iter()
        .filter_map(|t| {
            let count = corroboration_count(t, results, config.corroboration_window);
            let confidence = config.confidence_for_count(count);
            // Guard against future confidence tables that can dip below
            // the bar; unreachable with the current lookup.
            if confidence < config.min_confidence {
                return None;
            }
            Some(classify_event(t, confidence, results, config))
        })
        .collect()
}

/// Assign type, method, severity, and description to one merged timestamp.
///
/// Rule order matters: phase evidence wins, then spectral; everything else
/// is attributed to RMS energy analysis (including events only the
/// noise-floor detector saw - a known labeling limitation).
fn classify_event(
    t: f64,
    confidence: f32,
    results: &[DetectorResult],
    config: &ForensicsConfig,
) -> TamperEvent {
    let window = config.corroboration_window;
    let near = |kind: DetectorKind| {
        results
            .iter()
            .find(|r| r.kind == kind)
            .map(|r| r.has_candidate_near(t, window))
            .unwrap_or(false)
    };

    let (tamper_type, method, description) = if near(DetectorKind::PhaseDiscontinuity) {
        (
            TamperType::Splice,
            "phase analysis",
            format!(
                "Abrupt phase discontinuity at {:.2}s consistent with spliced audio",
                t
            ),
        )
    } else if near(DetectorKind::SpectralDiscontinuity) {
        (
            TamperType::Edit,
            "spectral centroid analysis",
            format!(
                "Sudden spectral character change at {:.2}s suggesting edited content",
                t
            ),
        )
    } else {
        (
            TamperType::Edit,
            "RMS energy analysis",
            format!(
                "Unexplained energy level change at {:.2}s suggesting edited content",
                t
            ),
        )
    };

    TamperEvent {
        id: format!("{}-{:.2}", tamper_type.label(), t),
        tamper_type,
        location: t,
        confidence,
        severity: Severity::from_confidence(confidence),
        description,
        method: method.to_string(),
    }
}

/// Keep the `max` highest-confidence events.
///
/// The sort is stable over events in ascending time order, so equal
/// confidences retain earlier-first ordering.
pub fn retain_top_events(mut events: Vec<TamperEvent>, max: usize) -> Vec<TamperEvent> {
    events.sort_by(|a, b| {
        b.confidence
            .partial_cmp(&a.confidence)
            .unwrap_or(std::cmp::Ordering::Equal)
    });
    events.truncate(max);
    events
}
