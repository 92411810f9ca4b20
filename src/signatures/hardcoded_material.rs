//! # Hardcoded Key Material Signatures
//!
//! Detects secret keys and initialization vectors constructed from
//! literals embedded in the source.
//!
//! ## Vulnerability Description
//!
//! A key or IV written into the source ships with every copy of the
//! program and cannot be rotated without a release. A fixed IV
//! additionally makes CBC and CTR modes deterministic.
//!
//! ## Detection Strategy
//!
//! Match the constructor call shapes directly: `new SecretKeySpec(` fed by
//! a byte-array literal or a string literal's `getBytes`, and
//! `new IvParameterSpec(` fed by a byte-array literal. Only the
//! construction site is examined; a literal assigned to a variable first
//! is not traced (no data-flow analysis).
//!
//! ## CWE Reference
//!
//! - CWE-321: Use of Hard-coded Cryptographic Key
//! - CWE-329: Not Using a Random IV with CBC Mode

use super::MisuseSignature;
use regex::Regex;

/// Signature for symmetric-key construction from an inline byte-array
/// literal.
pub struct HardcodedKeyBytesSignature {
    pattern: Regex,
}

impl HardcodedKeyBytesSignature {
    pub fn new() -> Self {
        Self {
            pattern: Regex::new(r"(?i)new\s+SecretKeySpec\s*\(\s*new\s+byte\s*\[\s*\]\s*\{")
                .expect("invalid hardcoded_key pattern"),
        }
    }
}

impl Default for HardcodedKeyBytesSignature {
    fn default() -> Self {
        Self::new()
    }
}

impl MisuseSignature for HardcodedKeyBytesSignature {
    fn id(&self) -> &'static str {
        "hardcoded_key"
    }

    fn name(&self) -> &'static str {
        "Hardcoded Key (byte array)"
    }

    fn description(&self) -> &'static str {
        "Detects a SecretKeySpec built directly from a byte-array literal. \
         The key is recoverable from the binary and identical across all \
         deployments."
    }

    fn cwe(&self) -> Option<&'static str> {
        Some("CWE-321")
    }

    fn remediation(&self) -> &'static str {
        "Load keys from a keystore or secret manager:\n\
         - KeyStore.getInstance(...) with a protected entry\n\
         - Generate session keys with KeyGenerator and SecureRandom"
    }

    fn matches(&self, code: &str) -> bool {
        self.pattern.is_match(code)
    }
}

/// Signature for symmetric-key construction from a string literal
/// converted to bytes.
pub struct HardcodedKeyStringSignature {
    pattern: Regex,
}

impl HardcodedKeyStringSignature {
    pub fn new() -> Self {
        Self {
            pattern: Regex::new(r#"(?i)new\s+SecretKeySpec\s*\(\s*"[^"]+"\.getBytes"#)
                .expect("invalid hardcoded_key_string pattern"),
        }
    }
}

impl Default for HardcodedKeyStringSignature {
    fn default() -> Self {
        Self::new()
    }
}

impl MisuseSignature for HardcodedKeyStringSignature {
    fn id(&self) -> &'static str {
        "hardcoded_key_string"
    }

    fn name(&self) -> &'static str {
        "Hardcoded Key (string literal)"
    }

    fn description(&self) -> &'static str {
        "Detects a SecretKeySpec built from a string literal via getBytes. \
         Besides being hardcoded, a printable-character key has far less \
         entropy than its byte length suggests."
    }

    fn cwe(&self) -> Option<&'static str> {
        Some("CWE-321")
    }

    fn remediation(&self) -> &'static str {
        "Never derive keys from string constants:\n\
         - Load key material from a keystore or secret manager\n\
         - If a password must be used, derive the key with PBKDF2"
    }

    fn matches(&self, code: &str) -> bool {
        self.pattern.is_match(code)
    }
}

/// Signature for initialization-vector construction from an inline
/// byte-array literal.
pub struct StaticIvSignature {
    pattern: Regex,
}

impl StaticIvSignature {
    pub fn new() -> Self {
        Self {
            pattern: Regex::new(r"(?i)new\s+IvParameterSpec\s*\(\s*new\s+byte\s*\[\s*\]\s*\{")
                .expect("invalid static_iv pattern"),
        }
    }
}

impl Default for StaticIvSignature {
    fn default() -> Self {
        Self::new()
    }
}

impl MisuseSignature for StaticIvSignature {
    fn id(&self) -> &'static str {
        "static_iv"
    }

    fn name(&self) -> &'static str {
        "Static Initialization Vector"
    }

    fn description(&self) -> &'static str {
        "Detects an IvParameterSpec built from a byte-array literal. A \
         fixed IV makes encryption deterministic and, for CTR-like modes, \
         reuses the keystream."
    }

    fn cwe(&self) -> Option<&'static str> {
        Some("CWE-329")
    }

    fn remediation(&self) -> &'static str {
        "Generate a fresh IV per encryption:\n\
         - byte[] iv = new byte[16]; new SecureRandom().nextBytes(iv);\n\
         - Transmit the IV alongside the ciphertext"
    }

    fn matches(&self, code: &str) -> bool {
        self.pattern.is_match(code)
    }
}
