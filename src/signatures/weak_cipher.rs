//! # Weak Cipher Configuration Signatures
//!
//! Detects `Cipher.getInstance` transformations that request a broken
//! algorithm or an unsafe mode of operation.
//!
//! ## Vulnerability Description
//!
//! ECB mode encrypts identical plaintext blocks to identical ciphertext
//! blocks, leaking structure. DES has a 56-bit effective key and is broken
//! by exhaustive search. NoPadding transformations are a common indicator
//! of hand-rolled padding and padding-oracle exposure.
//!
//! ## Detection Strategy
//!
//! Match the transformation string literal passed to `Cipher.getInstance`.
//! All matching is case-insensitive; the DES check excludes longer
//! algorithm names such as `DESede` by rejecting an `e` after the `DES`
//! token.
//!
//! ## CWE Reference
//!
//! - CWE-327: Use of a Broken or Risky Cryptographic Algorithm

use super::MisuseSignature;
use regex::Regex;

/// Signature for block-cipher instantiation requesting ECB mode.
pub struct EcbModeSignature {
    pattern: Regex,
}

impl EcbModeSignature {
    pub fn new() -> Self {
        Self {
            pattern: Regex::new(r#"(?i)Cipher\.getInstance\s*\(\s*"[^"]*ECB[^"]*""#)
                .expect("invalid ecb_mode pattern"),
        }
    }
}

impl Default for EcbModeSignature {
    fn default() -> Self {
        Self::new()
    }
}

impl MisuseSignature for EcbModeSignature {
    fn id(&self) -> &'static str {
        "ecb_mode"
    }

    fn name(&self) -> &'static str {
        "ECB Mode Encryption"
    }

    fn description(&self) -> &'static str {
        "Detects cipher transformations that request ECB mode. ECB encrypts \
         equal plaintext blocks to equal ciphertext blocks, so patterns in \
         the plaintext remain visible in the ciphertext."
    }

    fn cwe(&self) -> Option<&'static str> {
        Some("CWE-327")
    }

    fn remediation(&self) -> &'static str {
        "Use an authenticated mode such as AES/GCM/NoPadding, or at minimum \
         CBC with a random IV:\n\
         - Cipher.getInstance(\"AES/GCM/NoPadding\")\n\
         - Never rely on the provider default transformation"
    }

    fn matches(&self, code: &str) -> bool {
        self.pattern.is_match(code)
    }
}

/// Signature for cipher instantiation requesting the DES algorithm.
///
/// The trailing character class rejects `DESede` (triple DES), which is a
/// distinct algorithm and not flagged by this signature.
pub struct DesCipherSignature {
    pattern: Regex,
}

impl DesCipherSignature {
    pub fn new() -> Self {
        Self {
            pattern: Regex::new(r#"(?i)Cipher\.getInstance\s*\(\s*"DES[^e]"#)
                .expect("invalid des_usage pattern"),
        }
    }
}

impl Default for DesCipherSignature {
    fn default() -> Self {
        Self::new()
    }
}

impl MisuseSignature for DesCipherSignature {
    fn id(&self) -> &'static str {
        "des_usage"
    }

    fn name(&self) -> &'static str {
        "DES Cipher"
    }

    fn description(&self) -> &'static str {
        "Detects cipher transformations based on single DES. The 56-bit key \
         space of DES can be searched exhaustively with commodity hardware."
    }

    fn cwe(&self) -> Option<&'static str> {
        Some("CWE-327")
    }

    fn remediation(&self) -> &'static str {
        "Replace DES with AES (128-bit key or larger):\n\
         - Cipher.getInstance(\"AES/GCM/NoPadding\")\n\
         - Re-encrypt any data currently protected with DES"
    }

    fn matches(&self, code: &str) -> bool {
        self.pattern.is_match(code)
    }
}

/// Signature for cipher instantiation explicitly requesting no padding.
pub struct NoPaddingSignature {
    pattern: Regex,
}

impl NoPaddingSignature {
    pub fn new() -> Self {
        Self {
            pattern: Regex::new(r#"(?i)Cipher\.getInstance\s*\(\s*"[^"]*NoPadding[^"]*""#)
                .expect("invalid no_padding pattern"),
        }
    }
}

impl Default for NoPaddingSignature {
    fn default() -> Self {
        Self::new()
    }
}

impl MisuseSignature for NoPaddingSignature {
    fn id(&self) -> &'static str {
        "no_padding"
    }

    fn name(&self) -> &'static str {
        "Cipher Without Padding"
    }

    fn description(&self) -> &'static str {
        "Detects cipher transformations that explicitly disable padding. \
         Outside of AEAD modes this usually means ad-hoc padding in \
         application code, a common source of padding-oracle flaws."
    }

    fn cwe(&self) -> Option<&'static str> {
        Some("CWE-696")
    }

    fn remediation(&self) -> &'static str {
        "Use a standard padding scheme or an AEAD mode:\n\
         - Cipher.getInstance(\"AES/CBC/PKCS5Padding\") with a random IV\n\
         - Cipher.getInstance(\"AES/GCM/NoPadding\") where GCM handles it"
    }

    fn matches(&self, code: &str) -> bool {
        self.pattern.is_match(code)
    }
}
