//! # CLI Module
//!
//! This module defines the command-line interface for Crypto-Sentinel using
//! the `clap` derive macros for declarative argument parsing.
//!
//! ## Commands
//!
//! - `scan` - Classify Java source files as secure or insecure
//! - `normalize` - Print the canonicalized form of a source file
//! - `list` - Display the signature catalog
//! - `version` - Show version information

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Crypto-Sentinel command-line interface.
///
/// A static analysis tool that flags insecure cryptographic API usage in
/// Java source code using a fixed catalog of misuse signatures.
#[derive(Parser, Debug)]
#[command(name = "crypto-sentinel")]
#[command(version)]
#[command(about = "Static analysis of cryptographic API misuse in Java source code")]
#[command(long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// The subcommand to execute.
    #[command(subcommand)]
    pub command: Commands,
}

/// Available subcommands for the Crypto-Sentinel CLI.
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Classify Java source files as secure or insecure.
    ///
    /// Evaluates the misuse-signature catalog against each file and
    /// reports the verdict together with the triggered signatures.
    Scan {
        /// Path to the file or directory to scan.
        ///
        /// If a directory is specified, all `.java` files within it will
        /// be classified.
        #[arg(value_name = "PATH")]
        path: PathBuf,

        /// Scan directories recursively.
        ///
        /// When enabled, subdirectories will also be searched for Java
        /// source files.
        #[arg(short, long, default_value_t = true)]
        recursive: bool,

        /// Output format for the classification report.
        ///
        /// Supported formats:
        /// - `terminal`: Colorized console output (default)
        /// - `json`: Machine-readable JSON format
        #[arg(short, long, default_value = "terminal")]
        format: String,

        /// Normalize each file before classification.
        ///
        /// Strips comments and collapses whitespace. Signature matching
        /// itself never normalizes; this makes the preprocessing explicit.
        #[arg(short, long)]
        normalize: bool,

        /// Include extracted features for each file in the report.
        #[arg(long)]
        features: bool,

        /// Exclude specific signatures from the scan.
        ///
        /// Comma-separated list of signature IDs to skip.
        /// Example: --exclude insecure_random,no_padding
        #[arg(short = 'x', long, value_delimiter = ',')]
        exclude: Vec<String>,

        /// Include only specific signatures in the scan.
        ///
        /// Comma-separated list of signature IDs to apply.
        /// Example: --only ecb_mode,md5_hash
        #[arg(long, value_delimiter = ',')]
        only: Vec<String>,
    },

    /// Print the canonicalized form of a Java source file.
    ///
    /// Applies the normalization passes and writes the result to stdout.
    Normalize {
        /// Path to the file to normalize.
        #[arg(value_name = "PATH")]
        path: PathBuf,

        /// Keep comments instead of stripping them.
        #[arg(long)]
        keep_comments: bool,

        /// Keep original whitespace instead of collapsing it.
        #[arg(long)]
        keep_whitespace: bool,

        /// Replace declared local-variable names with VAR0, VAR1, and so on.
        #[arg(short, long)]
        anonymize: bool,
    },

    /// List all available misuse signatures.
    ///
    /// Displays the ID, name, CWE reference, and description of each
    /// registered signature.
    List,

    /// Print version information.
    Version,
}
