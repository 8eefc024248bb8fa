//! Output formatting for CLI results

use colorful::Colorful;

use crate::detection::{SegmentStatus, Severity, TamperReport};

/// Print a human-readable report to stdout
pub fn print_report(path: &str, report: &TamperReport) {
    if report.tampering_detected {
        println!("{} {}", "✗".red(), path);
    } else {
        println!("{} {}", "✓".green(), path);
    }
    println!("  Authenticity score: {}/100", report.authenticity_score);
    println!("  {}", report.summary.conclusion);

    if !report.detections.is_empty() {
        println!("\n  Detections:");
        for event in &report.detections {
            let severity = match event.severity {
                Severity::High => format!("{}", "HIGH".red()),
                Severity::Medium => format!("{}", "MED ".yellow()),
                Severity::Low => "LOW ".to_string(),
            };
            println!(
                "    {} {:>7.2}s  {:<6} conf {:>2.0}  via {}",
                severity,
                event.location,
                event.tamper_type.label(),
                event.confidence,
                event.method
            );
        }

        println!("\n  Timeline:");
        for segment in &report.timeline {
            let tag = match segment.status {
                SegmentStatus::Authentic => "authentic",
                SegmentStatus::Tampered => "tampered ",
            };
            println!("    {:>7.2}s - {:>7.2}s  {}", segment.start, segment.end, tag);
        }

        println!(
            "\n  Tampered duration: {:.2}s",
            report.summary.tampered_duration
        );
        println!("  {}", report.summary.recommendation);
    }

    println!("  analyzed in {} ms", report.summary.processing_time_ms);
    println!();
}

/// Print the report as pretty JSON
pub fn print_json(report: &TamperReport) -> anyhow::Result<()> {
    println!("{}", serde_json::to_string_pretty(report)?);
    Ok(())
}
