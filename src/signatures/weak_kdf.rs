//! # Weak Key Derivation Signature
//!
//! Detects password-based key derivation configured with an iteration
//! count below 1000.
//!
//! ## Detection Strategy
//!
//! The iteration count is the second-or-later argument of a `PBEKeySpec`
//! construction. A bare token of one to three digits in that positional
//! slot is below the minimum. This is the only signature evaluated
//! case-sensitively: the class name is matched as written, and the digit
//! scan needs no case folding.
//!
//! ## CWE Reference
//!
//! - CWE-916: Use of Password Hash With Insufficient Computational Effort

use super::MisuseSignature;
use regex::Regex;

/// Signature for PBE key derivation with an iteration count below 1000.
pub struct LowIterationPbeSignature {
    pattern: Regex,
}

impl LowIterationPbeSignature {
    pub fn new() -> Self {
        Self {
            pattern: Regex::new(r"PBEKeySpec\s*\([^)]*,\s*(?:[1-9]\d{0,2})\s*[,)]")
                .expect("invalid low_pbe_iterations pattern"),
        }
    }
}

impl Default for LowIterationPbeSignature {
    fn default() -> Self {
        Self::new()
    }
}

impl MisuseSignature for LowIterationPbeSignature {
    fn id(&self) -> &'static str {
        "low_pbe_iterations"
    }

    fn name(&self) -> &'static str {
        "Low PBE Iteration Count"
    }

    fn description(&self) -> &'static str {
        "Detects a PBEKeySpec constructed with an iteration count below \
         1000. Low counts make offline password guessing cheap."
    }

    fn cwe(&self) -> Option<&'static str> {
        Some("CWE-916")
    }

    fn remediation(&self) -> &'static str {
        "Raise the iteration count substantially:\n\
         - new PBEKeySpec(password, salt, 310000, 256) for PBKDF2-SHA256\n\
         - Follow current OWASP guidance for the chosen PRF"
    }

    fn matches(&self, code: &str) -> bool {
        self.pattern.is_match(code)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_detect_low_iteration_count() {
        let sig = LowIterationPbeSignature::new();
        assert!(sig.matches("new PBEKeySpec(password, salt, 100, 256);"));
        assert!(sig.matches("new PBEKeySpec(password, salt, 999)"));
    }

    #[test]
    fn test_high_iteration_count_not_flagged() {
        let sig = LowIterationPbeSignature::new();
        assert!(!sig.matches("new PBEKeySpec(password, salt, 10000);"));
        assert!(!sig.matches("new PBEKeySpec(password);"));
    }
}
