//! # Feature Extraction Module
//!
//! Converts a snippet into a structured [`FeatureRecord`] for consumption
//! by a downstream statistical classifier. Unlike the signature registry,
//! this module produces no verdict; it only reports lexical signals.
//!
//! ## Sub-extractions
//!
//! Four independent scans, each a pure function of the snippet text:
//!
//! - API calls: every occurrence of known crypto API invocation shapes
//! - Crypto keywords: case-insensitive vocabulary membership, deduplicated
//! - Structural tokens: import, type-declaration, and method counts
//! - Hardcoded secrets: literal shapes that suggest embedded key material
//!
//! The method count is a permissive heuristic and overcounts in the
//! presence of calls that resemble declarations. Downstream feature
//! consumers are calibrated against this heuristic's statistical profile,
//! so it must not be replaced with a real parser.

use regex::Regex;
use serde::{Deserialize, Serialize};

/// Crypto API invocation shapes recorded with multiplicity.
const API_CALL_PATTERNS: &[&str] = &[
    r"Cipher\.getInstance\s*\(",
    r"MessageDigest\.getInstance\s*\(",
    r"SecretKeySpec\s*\(",
    r"KeyGenerator\.getInstance\s*\(",
    r"SecureRandom\s*\(",
    r"KeyPairGenerator\.getInstance\s*\(",
    r"Mac\.getInstance\s*\(",
    r"Signature\.getInstance\s*\(",
    r"KeyStore\.getInstance\s*\(",
    r"PBEKeySpec\s*\(",
    r"PBEParameterSpec\s*\(",
    r"IvParameterSpec\s*\(",
    r"GCMParameterSpec\s*\(",
    r"TrustManagerFactory\.getInstance\s*\(",
    r"SSLContext\.getInstance\s*\(",
];

/// Crypto vocabulary searched case-insensitively, reported at most once
/// each, in this order.
const CRYPTO_KEYWORDS: &[&str] = &[
    "AES", "DES", "DESede", "3DES", "Blowfish", "RC4", "RC2", "ChaCha20",
    "ECB", "CBC", "CTR", "GCM", "OFB", "CFB",
    "PKCS5Padding", "NoPadding", "PKCS7Padding",
    "MD5", "SHA-1", "SHA1", "SHA-256", "SHA-512", "SHA256", "SHA512",
    "RSA", "DSA", "ECDSA", "ECDH",
    "PBKDF2", "PBEWith", "HmacSHA",
    "SecureRandom", "java.util.Random",
    "TLS", "SSL", "TLSv1", "TLSv1.2", "TLSv1.3",
];

/// Literal shapes suggesting a hardcoded key, IV, or secret.
const HARDCODED_PATTERNS: &[&str] = &[
    // byte array literal: new byte[] { ... }
    r"new\s+byte\s*\[\s*\]\s*\{[^}]+\}",
    // string literal converted to bytes
    r#""[A-Za-z0-9/+=]{8,}"\.getBytes"#,
    // hexadecimal string literals
    r#""[0-9a-fA-F]{16,}""#,
];

/// Structural counts derived from line and text scanning.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct StructuralTokens {
    /// Lines beginning with an import statement.
    pub import_count: usize,

    /// Occurrences of class, interface, or enum declarations.
    pub class_count: usize,

    /// Heuristic count of method signatures. Overcounts by design.
    pub method_count: usize,
}

/// Structured, order-insensitive description of a snippet.
///
/// Every field is a pure function of the input text and is always present;
/// an input with no recognizable crypto usage yields empty collections and
/// zero counts, never an error.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FeatureRecord {
    /// Matched API call occurrences, duplicates preserved.
    pub api_calls: Vec<String>,

    /// Matched vocabulary keywords, each at most once.
    pub crypto_keywords: Vec<String>,

    /// Structural counts.
    pub structural_tokens: StructuralTokens,

    /// Potential hardcoded secrets, reported verbatim, not validated.
    pub hardcoded_secrets: Vec<String>,
}

impl FeatureRecord {
    /// Returns `true` when no extraction produced any signal.
    pub fn is_empty(&self) -> bool {
        self.api_calls.is_empty()
            && self.crypto_keywords.is_empty()
            && self.structural_tokens == StructuralTokens::default()
            && self.hardcoded_secrets.is_empty()
    }
}

/// Feature extractor with all scan patterns compiled up front.
///
/// Construct once and reuse; extraction is stateless across calls.
pub struct FeatureExtractor {
    api_calls: Vec<Regex>,
    hardcoded: Vec<Regex>,
    keywords_upper: Vec<String>,
    import_stmt: Regex,
    type_decl: Regex,
    method_sig: Regex,
}

impl FeatureExtractor {
    pub fn new() -> Self {
        let api_calls = API_CALL_PATTERNS
            .iter()
            .map(|p| Regex::new(p).expect("invalid API call pattern"))
            .collect();

        let hardcoded = HARDCODED_PATTERNS
            .iter()
            .map(|p| Regex::new(p).expect("invalid hardcoded secret pattern"))
            .collect();

        let keywords_upper = CRYPTO_KEYWORDS.iter().map(|k| k.to_uppercase()).collect();

        Self {
            api_calls,
            hardcoded,
            keywords_upper,
            import_stmt: Regex::new(r"(?m)^\s*import\s+").expect("invalid import pattern"),
            type_decl: Regex::new(r"\b(?:class|interface|enum)\s+\w+")
                .expect("invalid type declaration pattern"),
            method_sig: Regex::new(r"(?:public|private|protected|static|\s)+[\w<>\[\]]+\s+\w+\s*\(")
                .expect("invalid method signature pattern"),
        }
    }

    /// Extracts all features from a snippet.
    ///
    /// The four sub-extractions are independent; none reads another's
    /// output. Extraction never fails, including on empty input.
    ///
    /// # Arguments
    ///
    /// * `code` - Raw or normalized snippet text
    pub fn extract(&self, code: &str) -> FeatureRecord {
        FeatureRecord {
            api_calls: self.extract_api_calls(code),
            crypto_keywords: self.extract_crypto_keywords(code),
            structural_tokens: self.extract_structural_tokens(code),
            hardcoded_secrets: self.extract_hardcoded_secrets(code),
        }
    }

    /// Records every occurrence of each API call shape.
    fn extract_api_calls(&self, code: &str) -> Vec<String> {
        let mut matches = Vec::new();
        for pattern in &self.api_calls {
            for found in pattern.find_iter(code) {
                matches.push(found.as_str().to_string());
            }
        }
        matches
    }

    /// Reports each vocabulary keyword present in the snippet, at most
    /// once, in vocabulary order.
    fn extract_crypto_keywords(&self, code: &str) -> Vec<String> {
        let code_upper = code.to_uppercase();
        CRYPTO_KEYWORDS
            .iter()
            .zip(&self.keywords_upper)
            .filter(|(_, upper)| code_upper.contains(upper.as_str()))
            .map(|(kw, _)| kw.to_string())
            .collect()
    }

    /// Counts imports, type declarations, and method signatures.
    fn extract_structural_tokens(&self, code: &str) -> StructuralTokens {
        StructuralTokens {
            import_count: self.import_stmt.find_iter(code).count(),
            class_count: self.type_decl.find_iter(code).count(),
            method_count: self.method_sig.find_iter(code).count(),
        }
    }

    /// Records every literal shape that suggests embedded key material.
    fn extract_hardcoded_secrets(&self, code: &str) -> Vec<String> {
        let mut matches = Vec::new();
        for pattern in &self.hardcoded {
            for found in pattern.find_iter(code) {
                matches.push(found.as_str().to_string());
            }
        }
        matches
    }
}

impl Default for FeatureExtractor {
    fn default() -> Self {
        Self::new()
    }
}
