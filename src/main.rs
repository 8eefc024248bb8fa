// src/main.rs
use anyhow::{Context, Result};
use clap::Parser;
use colorful::Colorful;
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

use audioforensics::cli::{print_json, print_report, Args, OutputFormat};
use audioforensics::config::ConfigBuilder;
use audioforensics::core::{analyze_tampering, decode_audio, extract_features};
use audioforensics::core::detectors::run_detector_bank;
use audioforensics::AnalysisError;

fn main() -> Result<()> {
    env_logger::init();
    let args = Args::parse();

    let audio_files = collect_audio_files(&args.input)?;

    if audio_files.is_empty() {
        println!("{}", "No audio files found!".red());
        return Ok(());
    }

    let mut failures = 0usize;
    for file_path in &audio_files {
        if let Err(e) = process_file(file_path, &args) {
            failures += 1;
            eprintln!("{} {}: {}", "error:".red(), file_path.display(), e);
        }
    }

    if failures > 0 {
        anyhow::bail!("{} file(s) failed analysis", failures);
    }
    Ok(())
}

fn process_file(path: &Path, args: &Args) -> Result<()> {
    let config = ConfigBuilder::new()
        .min_confidence(args.min_confidence)
        .max_detections(args.max_detections)
        .build();

    let signal = match decode_audio(path) {
        Ok(signal) => signal,
        Err(e @ AnalysisError::Validation(_)) => {
            // Client-input problem, not a pipeline failure
            println!("{} {}: {}", "skipped".yellow(), path.display(), e);
            return Ok(());
        }
        Err(e) => return Err(e).context("decoding failed"),
    };

    if args.verbose {
        let features = extract_features(&signal, &config);
        for result in run_detector_bank(&features, &config) {
            println!(
                "  [{}] candidates: {:?}",
                result.kind.label(),
                result.timestamps
            );
        }
    }

    let report = analyze_tampering(&signal, &config).context("tamper analysis failed")?;

    match args.format {
        OutputFormat::Json => print_json(&report)?,
        OutputFormat::Text => print_report(&path.display().to_string(), &report),
    }

    Ok(())
}

fn collect_audio_files(path: &Path) -> Result<Vec<PathBuf>> {
    let mut files = Vec::new();
    let audio_extensions = ["flac", "wav", "mp3", "ogg", "m4a", "aac"];

    if path.is_file() {
        files.push(path.to_path_buf());
    } else if path.is_dir() {
        for entry in WalkDir::new(path).follow_links(true) {
            let entry = entry?;
            if !entry.file_type().is_file() {
                continue;
            }
            if let Some(ext) = entry.path().extension() {
                if audio_extensions.contains(&ext.to_str().unwrap_or("").to_lowercase().as_str()) {
                    files.push(entry.path().to_path_buf());
                }
            }
        }
        files.sort();
    }

    Ok(files)
}
