//! CLI argument parsing

use clap::{Parser, ValueEnum};
use std::path::PathBuf;

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    Text,
    Json,
}

#[derive(Parser, Debug)]
#[command(name = "audioforensics")]
#[command(about = "Detect splices and edits in audio recordings")]
pub struct Args {
    /// Input file or directory
    #[arg(short, long)]
    pub input: PathBuf,

    /// Output format
    #[arg(short, long, value_enum, default_value = "text")]
    pub format: OutputFormat,

    /// Minimum confidence for reported events
    #[arg(long, default_value = "55.0")]
    pub min_confidence: f32,

    /// Maximum number of reported events
    #[arg(long, default_value = "5")]
    pub max_detections: usize,

    /// Print per-detector candidate timestamps
    #[arg(short, long)]
    pub verbose: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let args = Args::parse_from(["audioforensics", "--input", "clip.wav"]);
        assert_eq!(args.format, OutputFormat::Text);
        assert_eq!(args.min_confidence, 55.0);
        assert_eq!(args.max_detections, 5);
        assert!(!args.verbose);
    }

    #[test]
    fn test_json_format_flag() {
        let args =
            Args::parse_from(["audioforensics", "--input", "clip.wav", "--format", "json"]);
        assert_eq!(args.format, OutputFormat::Json);
    }
}
