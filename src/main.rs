//! # Crypto-Sentinel CLI Entry Point
//!
//! This module provides the main entry point for the Crypto-Sentinel
//! command-line misuse scanner.

use anyhow::Result;
use clap::Parser;
use colored::*;
use crypto_sentinel::report::{DetailedVerdict, FileResult, Report};
use crypto_sentinel::{Cli, FeatureExtractor, NormalizeOptions, Normalizer, SignatureRegistry};
use std::path::PathBuf;

/// ASCII art banner displayed at startup.
const BANNER: &str = r#"
   ____                  _          ____             _   _            _
  / ___|_ __ _   _ _ __ | |_ ___   / ___|  ___ _ __ | |_(_)_ __   ___| |
 | |   | '__| | | | '_ \| __/ _ \  \___ \ / _ \ '_ \| __| | '_ \ / _ \ |
 | |___| |  | |_| | |_) | || (_) |  ___) |  __/ | | | |_| | | | |  __/ |
  \____|_|   \__, | .__/ \__\___/  |____/ \___|_| |_|\__|_|_| |_|\___|_|
             |___/|_|
              Cryptographic API Misuse Scanner for Java
"#;

/// Application entry point.
///
/// Initializes the logging system, parses command-line arguments, and
/// dispatches to the appropriate command handler.
fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let cli = Cli::parse();

    match cli.command {
        crypto_sentinel::cli::Commands::Scan {
            path,
            recursive,
            format,
            normalize,
            features,
            exclude,
            only,
        } => {
            run_scan(path, recursive, format, normalize, features, exclude, only)?;
        }
        crypto_sentinel::cli::Commands::Normalize {
            path,
            keep_comments,
            keep_whitespace,
            anonymize,
        } => {
            run_normalize(path, keep_comments, keep_whitespace, anonymize)?;
        }
        crypto_sentinel::cli::Commands::List => {
            list_signatures();
        }
        crypto_sentinel::cli::Commands::Version => {
            println!(
                "{} {}",
                "Crypto-Sentinel version:".green(),
                env!("CARGO_PKG_VERSION").yellow()
            );
        }
    }

    Ok(())
}

/// Executes the classification scan.
///
/// This function orchestrates the complete scanning workflow:
/// 1. Collects Java source files from the specified path
/// 2. Optionally normalizes each file's text
/// 3. Runs the signature registry, honoring `--only` / `--exclude`
/// 4. Optionally extracts features per file
/// 5. Renders the report in the requested format
///
/// # Arguments
///
/// * `path` - The file or directory path to scan
/// * `recursive` - Whether to scan directories recursively
/// * `format` - Output format: "terminal" or "json"
/// * `normalize` - Whether to normalize text before classification
/// * `features` - Whether to include extracted features in the report
/// * `exclude` - Signature IDs to skip
/// * `only` - When non-empty, the exclusive set of signature IDs to apply
fn run_scan(
    path: PathBuf,
    recursive: bool,
    format: String,
    normalize: bool,
    features: bool,
    exclude: Vec<String>,
    only: Vec<String>,
) -> Result<()> {
    let terminal = format != "json";

    if terminal {
        println!("{}", BANNER.cyan().bold());
        println!(
            "{} {}",
            "[*] Scanning:".green().bold(),
            path.display().to_string().yellow()
        );
    }

    let results = perform_scan(&path, recursive, normalize, features, &exclude, &only)?;
    let report = Report::new(results, path);

    if terminal {
        report.print_terminal();
        println!("\n{}", "=".repeat(60).cyan());
        report.print_summary();
    } else {
        println!("{}", serde_json::to_string_pretty(&report)?);
    }

    Ok(())
}

/// Performs the actual classification over a file or directory.
fn perform_scan(
    path: &PathBuf,
    recursive: bool,
    normalize: bool,
    features: bool,
    exclude: &[String],
    only: &[String],
) -> Result<Vec<FileResult>> {
    use indicatif::{ProgressBar, ProgressStyle};

    let files = if path.is_file() {
        vec![path.clone()]
    } else {
        collect_java_files(path, recursive)?
    };

    if files.is_empty() {
        return Ok(Vec::new());
    }

    let pb = ProgressBar::new(files.len() as u64);
    pb.set_style(
        ProgressStyle::default_bar()
            .template("{spinner:.green} [{elapsed_precise}] [{bar:40.cyan/blue}] {pos}/{len} {msg}")
            .unwrap()
            .progress_chars("=>-"),
    );

    let registry = SignatureRegistry::new();
    let extractor = FeatureExtractor::new();
    let normalizer = Normalizer::new();
    let normalize_options = NormalizeOptions::default();

    let mut results = Vec::new();

    for file_path in &files {
        pb.set_message(format!(
            "Classifying {}",
            file_path.file_name().unwrap_or_default().to_string_lossy()
        ));

        match std::fs::read_to_string(file_path) {
            Ok(source) => {
                let code = if normalize {
                    normalizer.normalize(&source, &normalize_options)
                } else {
                    source
                };

                let detailed = registry.detect_detailed(&code);
                let detailed = filter_triggered(detailed, exclude, only);

                let record = if features {
                    Some(extractor.extract(&code))
                } else {
                    None
                };

                results.push(FileResult::new(
                    file_path.display().to_string(),
                    detailed,
                    record,
                ));
            }
            Err(e) => {
                log::warn!("Failed to read {}: {}", file_path.display(), e);
            }
        }

        pb.inc(1);
    }

    pb.finish_and_clear();
    Ok(results)
}

/// Applies `--only` / `--exclude` signature filters to a detailed verdict.
///
/// The label is recomputed from the filtered list, so a file whose only
/// matches were filtered out is reported secure.
fn filter_triggered(detailed: DetailedVerdict, exclude: &[String], only: &[String]) -> DetailedVerdict {
    if exclude.is_empty() && only.is_empty() {
        return detailed;
    }

    let exclude_lower: Vec<String> = exclude.iter().map(|s| s.to_lowercase()).collect();
    let only_lower: Vec<String> = only.iter().map(|s| s.to_lowercase()).collect();

    let triggered = detailed
        .triggered_rules
        .into_iter()
        .filter(|id| !exclude_lower.contains(&id.to_lowercase()))
        .filter(|id| only_lower.is_empty() || only_lower.contains(&id.to_lowercase()))
        .collect();

    DetailedVerdict::from_triggered(triggered)
}

/// Collects Java source files from a directory.
///
/// Traverses the specified directory and collects all `.java` files,
/// excluding anything under build output directories.
fn collect_java_files(dir: &PathBuf, recursive: bool) -> Result<Vec<PathBuf>> {
    use walkdir::WalkDir;

    let walker = if recursive {
        WalkDir::new(dir)
    } else {
        WalkDir::new(dir).max_depth(1)
    };

    let files: Vec<PathBuf> = walker
        .into_iter()
        .filter_map(|e| e.ok())
        .filter(|e| {
            e.path().extension().map_or(false, |ext| ext == "java")
                && !e.path().to_string_lossy().contains("/build/")
                && !e.path().to_string_lossy().contains("/target/")
        })
        .map(|e| e.path().to_path_buf())
        .collect();

    Ok(files)
}

/// Normalizes a single file and prints the result to stdout.
fn run_normalize(
    path: PathBuf,
    keep_comments: bool,
    keep_whitespace: bool,
    anonymize: bool,
) -> Result<()> {
    let source = std::fs::read_to_string(&path)?;

    let options = NormalizeOptions {
        strip_comments: !keep_comments,
        collapse_whitespace: !keep_whitespace,
        anonymize_identifiers: anonymize,
    };

    let normalizer = Normalizer::new();
    println!("{}", normalizer.normalize(&source, &options));

    Ok(())
}

/// Displays all registered misuse signatures.
///
/// Prints a formatted list including IDs, names, CWE references, and
/// descriptions.
fn list_signatures() {
    let registry = SignatureRegistry::new();

    println!("{}", "[*] Available Misuse Signatures:".green().bold());
    println!("{}", "-".repeat(60).cyan());

    for signature in registry.signatures() {
        println!(
            "  {} {} [{}]",
            signature.id().cyan().bold(),
            signature.name().white(),
            signature.cwe().unwrap_or("-").yellow()
        );
        println!("     {}", signature.description().dimmed());
        println!();
    }
}
