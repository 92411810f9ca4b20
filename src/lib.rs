//! # Crypto-Sentinel Library
//!
//! A static analysis library for detecting cryptographic API misuse in
//! Java source code.
//!
//! This library provides the core functionality for classifying code
//! snippets as secure or insecure and for extracting structured features
//! for downstream statistical classifiers. All analysis is lexical:
//! snippets are matched against fixed pattern catalogs without building a
//! syntax tree.
//!
//! ## Modules
//!
//! - [`cli`] - Command-line interface definitions and argument parsing
//! - [`normalize`] - Snippet canonicalization (comments, whitespace, identifiers)
//! - [`signatures`] - Misuse-signature catalog and verdict aggregation
//! - [`features`] - Lexical feature extraction for statistical models
//! - [`report`] - Verdicts and scan report generation
//!
//! ## Example
//!
//! ```rust,ignore
//! use crypto_sentinel::{SignatureRegistry, Verdict};
//!
//! let registry = SignatureRegistry::new();
//! let verdict = registry.detect(r#"Cipher.getInstance("AES/ECB/PKCS5Padding")"#);
//! assert_eq!(verdict, Verdict::Insecure);
//! ```

pub mod cli;
pub mod features;
pub mod normalize;
pub mod report;
pub mod signatures;

pub use cli::Cli;
pub use features::{FeatureExtractor, FeatureRecord, StructuralTokens};
pub use normalize::{normalize, NormalizeOptions, Normalizer};
pub use report::{DetailedVerdict, Report, Verdict};
pub use signatures::{MisuseSignature, SignatureRegistry};
