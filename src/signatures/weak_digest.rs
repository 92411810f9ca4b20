//! # Weak Digest Signatures
//!
//! Detects `MessageDigest.getInstance` calls requesting MD5 or SHA-1,
//! both of which have practical collision attacks.
//!
//! ## CWE Reference
//!
//! - CWE-328: Use of Weak Hash

use super::MisuseSignature;
use regex::Regex;

/// Signature for digest instantiation requesting MD5.
pub struct Md5DigestSignature {
    pattern: Regex,
}

impl Md5DigestSignature {
    pub fn new() -> Self {
        Self {
            pattern: Regex::new(r#"(?i)MessageDigest\.getInstance\s*\(\s*"MD5"\s*\)"#)
                .expect("invalid md5_hash pattern"),
        }
    }
}

impl Default for Md5DigestSignature {
    fn default() -> Self {
        Self::new()
    }
}

impl MisuseSignature for Md5DigestSignature {
    fn id(&self) -> &'static str {
        "md5_hash"
    }

    fn name(&self) -> &'static str {
        "MD5 Digest"
    }

    fn description(&self) -> &'static str {
        "Detects use of the MD5 digest algorithm. MD5 collisions can be \
         produced in seconds, so it must not be used for signatures, \
         certificates, or password hashing."
    }

    fn cwe(&self) -> Option<&'static str> {
        Some("CWE-328")
    }

    fn remediation(&self) -> &'static str {
        "Use SHA-256 or stronger:\n\
         - MessageDigest.getInstance(\"SHA-256\")\n\
         - For passwords, use a dedicated KDF such as PBKDF2 or bcrypt"
    }

    fn matches(&self, code: &str) -> bool {
        self.pattern.is_match(code)
    }
}

/// Signature for digest instantiation requesting SHA-1, with or without
/// the hyphen.
pub struct Sha1DigestSignature {
    pattern: Regex,
}

impl Sha1DigestSignature {
    pub fn new() -> Self {
        Self {
            pattern: Regex::new(r#"(?i)MessageDigest\.getInstance\s*\(\s*"SHA-?1"\s*\)"#)
                .expect("invalid sha1_hash pattern"),
        }
    }
}

impl Default for Sha1DigestSignature {
    fn default() -> Self {
        Self::new()
    }
}

impl MisuseSignature for Sha1DigestSignature {
    fn id(&self) -> &'static str {
        "sha1_hash"
    }

    fn name(&self) -> &'static str {
        "SHA-1 Digest"
    }

    fn description(&self) -> &'static str {
        "Detects use of the SHA-1 digest algorithm, for which chosen-prefix \
         collisions are practical."
    }

    fn cwe(&self) -> Option<&'static str> {
        Some("CWE-328")
    }

    fn remediation(&self) -> &'static str {
        "Use SHA-256 or stronger:\n\
         - MessageDigest.getInstance(\"SHA-256\")"
    }

    fn matches(&self, code: &str) -> bool {
        self.pattern.is_match(code)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_detect_md5() {
        let sig = Md5DigestSignature::new();
        assert!(sig.matches(r#"MessageDigest.getInstance("MD5")"#));
        assert!(sig.matches(r#"MessageDigest.getInstance( "md5" )"#));
    }

    #[test]
    fn test_detect_sha1_both_spellings() {
        let sig = Sha1DigestSignature::new();
        assert!(sig.matches(r#"MessageDigest.getInstance("SHA-1")"#));
        assert!(sig.matches(r#"MessageDigest.getInstance("SHA1")"#));
    }

    #[test]
    fn test_sha256_not_flagged() {
        let md5 = Md5DigestSignature::new();
        let sha1 = Sha1DigestSignature::new();
        let code = r#"MessageDigest.getInstance("SHA-256")"#;
        assert!(!md5.matches(code));
        assert!(!sha1.matches(code));
    }
}
