//! Tamper report types: events, timeline, summary, and the scoring that
//! turns a confirmed event set into a 0-100 authenticity score.
//!
//! Everything here is derived per analysis and discarded with the report;
//! serialized field names match the service's JSON contract.

use serde::{Deserialize, Serialize};

use crate::config::ForensicsConfig;

/// Kind of tampering an event was classified as
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TamperType {
    Splice,
    Edit,
}

impl TamperType {
    pub fn label(&self) -> &'static str {
        match self {
            TamperType::Splice => "splice",
            TamperType::Edit => "edit",
        }
    }
}

/// Severity bucket derived from confidence
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Severity {
    Low,
    Medium,
    High,
}

impl Severity {
    pub fn from_confidence(confidence: f32) -> Self {
        match confidence {
            c if c >= 85.0 => Severity::High,
            c if c >= 70.0 => Severity::Medium,
            _ => Severity::Low,
        }
    }
}

/// One confirmed, classified tamper event
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TamperEvent {
    /// Unique within a report: type plus rounded location
    pub id: String,
    #[serde(rename = "type")]
    pub tamper_type: TamperType,
    /// Seconds from the start of the recording
    pub location: f64,
    /// Corroboration-derived confidence in [55, 98]
    pub confidence: f32,
    pub severity: Severity,
    pub description: String,
    /// Analysis method that triggered the classification
    pub method: String,
}

/// Status of one timeline segment
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SegmentStatus {
    Authentic,
    Tampered,
}

/// One segment of the gap-free timeline
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TimelineSegment {
    pub start: f64,
    pub end: f64,
    pub status: SegmentStatus,
}

/// Human-readable report summary
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AnalysisSummary {
    pub conclusion: String,
    /// Total seconds covered by event windows
    pub tampered_duration: f64,
    pub recommendation: String,
    pub processing_time_ms: u64,
}

/// Complete forensic report for one recording
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TamperReport {
    pub authenticity_score: u32,
    pub tampering_detected: bool,
    /// At most `max_detections` events, descending confidence
    pub detections: Vec<TamperEvent>,
    pub summary: AnalysisSummary,
    /// Ascending, non-overlapping, covers [0, duration] exactly
    pub timeline: Vec<TimelineSegment>,
}

/// Score the retained event set.
///
/// Each event contributes `min(cap, (confidence - 55) / 45 * cap)`;
/// the score is `clamp(round(100 - total), 0, 100)`.
pub fn authenticity_score(events: &[TamperEvent], config: &ForensicsConfig) -> u32 {
    let cap = config.penalty_cap;
    let total: f64 = events
        .iter()
        .map(|e| {
            let scaled = (e.confidence as f64 - 55.0) / 45.0 * cap;
            scaled.min(cap)
        })
        .sum();

    (100.0 - total).round().clamp(0.0, 100.0) as u32
}

/// Build the gap-free segment timeline for a set of events.
///
/// Events must be in ascending time order. Each event claims the window
/// `[max(0, L - pre), min(duration, L + post)]`; overlapping windows are
/// clamped to the running cursor so segments never overlap.
pub fn build_timeline(
    events: &[TamperEvent],
    duration: f64,
    config: &ForensicsConfig,
) -> Vec<TimelineSegment> {
    if events.is_empty() {
        return vec![TimelineSegment {
            start: 0.0,
            end: duration,
            status: SegmentStatus::Authentic,
        }];
    }

    let mut segments = Vec::new();
    let mut cursor = 0.0f64;

    for event in events {
        let start = (event.location - config.event_pre_secs).max(0.0);
        let end = (event.location + config.event_post_secs).min(duration);

        if end <= cursor {
            continue;
        }

        if start > cursor {
            segments.push(TimelineSegment {
                start: cursor,
                end: start,
                status: SegmentStatus::Authentic,
            });
            cursor = start;
        }

        segments.push(TimelineSegment {
            start: cursor,
            end,
            status: SegmentStatus::Tampered,
        });
        cursor = end;
    }

    if cursor < duration {
        segments.push(TimelineSegment {
            start: cursor,
            end: duration,
            status: SegmentStatus::Authentic,
        });
    }

    segments
}

/// Build the report summary for the retained event set.
pub fn build_summary(
    events: &[TamperEvent],
    duration: f64,
    elapsed_ms: u64,
    config: &ForensicsConfig,
) -> AnalysisSummary {
    let tampered_duration: f64 = events
        .iter()
        .map(|e| {
            let start = (e.location - config.event_pre_secs).max(0.0);
            let end = (e.location + config.event_post_secs).min(duration);
            end - start
        })
        .sum();

    let (conclusion, recommendation) = match events.len() {
        0 => (
            "No tampering evidence found. The recording appears authentic.".to_string(),
            "No further action needed.".to_string(),
        ),
        1 => (
            "1 suspected tamper event was detected in the recording.".to_string(),
            "Manual review of the flagged region is recommended before relying on this recording.".to_string(),
        ),
        n => (
            format!("{} suspected tamper events were detected in the recording.", n),
            "Manual review of the flagged regions is recommended before relying on this recording.".to_string(),
        ),
    };

    AnalysisSummary {
        conclusion,
        tampered_duration,
        recommendation,
        processing_time_ms: elapsed_ms,
    }
}
