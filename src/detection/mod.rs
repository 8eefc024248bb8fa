//! Detection result types

mod report;

pub use report::{
    authenticity_score, build_summary, build_timeline, AnalysisSummary, SegmentStatus, Severity,
    TamperEvent, TamperReport, TamperType, TimelineSegment,
};
