//! # Report Generation Module
//!
//! Aggregates per-file classification results into a scan report and
//! renders it for the terminal or as JSON.
//!
//! ## Key Types
//!
//! - [`Report`] - Complete scan report with metadata and summary
//! - [`FileResult`] - Classification result for a single source file
//! - [`Verdict`] / [`DetailedVerdict`] - The classification outcomes

mod verdict;

pub use verdict::{DetailedVerdict, Verdict};

use crate::features::FeatureRecord;
use colored::*;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Complete scan report.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Report {
    /// Metadata about the scan operation.
    pub metadata: ReportMetadata,

    /// Per-file classification results.
    pub results: Vec<FileResult>,

    /// Summary statistics by verdict.
    pub summary: ReportSummary,
}

/// Metadata about the scan operation.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReportMetadata {
    /// Tool version used for the scan.
    pub version: String,

    /// Timestamp when the scan was performed.
    pub timestamp: String,

    /// Path that was scanned.
    pub scanned_path: String,

    /// Number of files analyzed.
    pub files_analyzed: usize,
}

/// Summary of results by verdict.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReportSummary {
    /// Count of files classified secure.
    pub secure: usize,

    /// Count of files classified insecure.
    pub insecure: usize,

    /// Total count of classified files.
    pub total: usize,
}

/// Classification result for a single source file.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FileResult {
    /// Path to the classified file.
    pub file_path: String,

    /// Binary verdict for the file.
    pub verdict: Verdict,

    /// Identifiers of the signatures that matched, in registration order.
    pub triggered_rules: Vec<String>,

    /// Extracted features, present when feature extraction was requested.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub features: Option<FeatureRecord>,
}

impl FileResult {
    /// Builds a result from a detailed verdict.
    pub fn new(
        file_path: String,
        detailed: DetailedVerdict,
        features: Option<FeatureRecord>,
    ) -> Self {
        Self {
            file_path,
            verdict: detailed.label,
            triggered_rules: detailed.triggered_rules,
            features,
        }
    }

    /// Prints the result to terminal with color formatting.
    ///
    /// # Arguments
    ///
    /// * `index` - The result number for display.
    pub fn print_terminal(&self, index: usize) {
        println!(
            "{} {} {}",
            format!("#{}", index).cyan().bold(),
            self.verdict.colored_label(),
            self.file_path.blue()
        );

        if !self.triggered_rules.is_empty() {
            println!(
                "   {} {}",
                "Triggered:".dimmed(),
                self.triggered_rules.join(", ").yellow()
            );
        }

        if let Some(ref features) = self.features {
            println!(
                "   {} {} api calls | {} keywords | {} imports | {} types | {} methods | {} secret candidates",
                "Features:".dimmed(),
                features.api_calls.len(),
                features.crypto_keywords.len(),
                features.structural_tokens.import_count,
                features.structural_tokens.class_count,
                features.structural_tokens.method_count,
                features.hardcoded_secrets.len()
            );
        }
    }
}

impl Report {
    /// Creates a new report from a collection of per-file results.
    ///
    /// Automatically calculates summary statistics from the results.
    ///
    /// # Arguments
    ///
    /// * `results` - Per-file classification results
    /// * `scanned_path` - Path that was analyzed
    pub fn new(results: Vec<FileResult>, scanned_path: PathBuf) -> Self {
        let summary = ReportSummary::from_results(&results);

        let metadata = ReportMetadata {
            version: env!("CARGO_PKG_VERSION").to_string(),
            timestamp: chrono_lite_timestamp(),
            scanned_path: scanned_path.display().to_string(),
            files_analyzed: results.len(),
        };

        Self {
            metadata,
            results,
            summary,
        }
    }

    /// Prints colorized output to the terminal.
    pub fn print_terminal(&self) {
        if self.results.is_empty() {
            println!("\n{}", "[!] No Java source files found.".yellow().bold());
            return;
        }

        println!("\n{}", "[*] Classification Results:".white().bold());
        println!("{}", "=".repeat(60).cyan());

        for (i, result) in self.results.iter().enumerate() {
            result.print_terminal(i + 1);
        }
    }

    /// Prints summary statistics to the terminal.
    pub fn print_summary(&self) {
        println!(
            "{}",
            format!(
                "[*] Summary: {} Secure | {} Insecure | {} Total",
                self.summary.secure, self.summary.insecure, self.summary.total
            )
            .bold()
        );

        if self.summary.insecure == 0 {
            println!("{}", "[+] No insecure crypto usage found.".green().bold());
        } else {
            println!(
                "{}",
                format!(
                    "[!] {} file(s) with insecure crypto usage",
                    self.summary.insecure
                )
                .red()
                .bold()
            );
        }
    }
}

impl ReportSummary {
    /// Creates a summary from a collection of results.
    fn from_results(results: &[FileResult]) -> Self {
        let insecure = results.iter().filter(|r| r.verdict.is_insecure()).count();

        Self {
            secure: results.len() - insecure,
            insecure,
            total: results.len(),
        }
    }
}

/// Generates a simple timestamp without external dependencies.
fn chrono_lite_timestamp() -> String {
    use std::time::{SystemTime, UNIX_EPOCH};

    let duration = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap_or_default();

    format!("{}", duration.as_secs())
}
