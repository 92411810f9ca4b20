//! # Insecure Random Signature
//!
//! Detects construction of `java.util.Random` in code that is otherwise
//! handling cryptographic material, where `SecureRandom` is expected.
//!
//! ## CWE Reference
//!
//! - CWE-338: Use of Cryptographically Weak PRNG

use super::MisuseSignature;
use regex::Regex;

/// Signature for construction of a non-cryptographic pseudo-random
/// generator.
pub struct InsecureRandomSignature {
    pattern: Regex,
}

impl InsecureRandomSignature {
    pub fn new() -> Self {
        Self {
            pattern: Regex::new(r"(?i)new\s+Random\s*\(")
                .expect("invalid insecure_random pattern"),
        }
    }
}

impl Default for InsecureRandomSignature {
    fn default() -> Self {
        Self::new()
    }
}

impl MisuseSignature for InsecureRandomSignature {
    fn id(&self) -> &'static str {
        "insecure_random"
    }

    fn name(&self) -> &'static str {
        "Insecure Random Generator"
    }

    fn description(&self) -> &'static str {
        "Detects construction of java.util.Random. Its 48-bit linear \
         congruential state is predictable from a handful of outputs, so \
         it must not produce keys, IVs, salts, or tokens."
    }

    fn cwe(&self) -> Option<&'static str> {
        Some("CWE-338")
    }

    fn remediation(&self) -> &'static str {
        "Use SecureRandom for anything security-relevant:\n\
         - SecureRandom random = new SecureRandom();\n\
         - random.nextBytes(buffer);"
    }

    fn matches(&self, code: &str) -> bool {
        self.pattern.is_match(code)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_detect_util_random() {
        let sig = InsecureRandomSignature::new();
        assert!(sig.matches("Random rng = new Random();"));
        assert!(sig.matches("Random rng = new Random(42);"));
    }

    #[test]
    fn test_secure_random_not_flagged() {
        let sig = InsecureRandomSignature::new();
        assert!(!sig.matches("SecureRandom rng = new SecureRandom();"));
    }
}
