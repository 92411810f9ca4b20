//! # Misuse Signature Module
//!
//! This module provides the framework for rule-based misuse detection and
//! contains the catalog of all cryptographic misuse signatures.
//!
//! ## Architecture
//!
//! All signatures implement the [`MisuseSignature`] trait, which exposes a
//! stable identifier, documentation, and a single matching predicate over
//! snippet text. Aggregation into a verdict lives entirely in the
//! [`SignatureRegistry`], so the catalog can be extended or swapped without
//! touching the verdict logic.
//!
//! ## Signature Catalog
//!
//! | # | ID | Pattern |
//! |---|----|---------|
//! | 1 | ecb_mode | Cipher instantiation requesting ECB mode |
//! | 2 | md5_hash | MessageDigest instantiation requesting MD5 |
//! | 3 | sha1_hash | MessageDigest instantiation requesting SHA-1 |
//! | 4 | hardcoded_key | SecretKeySpec built from a byte-array literal |
//! | 5 | hardcoded_key_string | SecretKeySpec built from a string literal |
//! | 6 | static_iv | IvParameterSpec built from a byte-array literal |
//! | 7 | insecure_random | java.util.Random where SecureRandom is expected |
//! | 8 | des_usage | Cipher instantiation requesting DES |
//! | 9 | no_padding | Cipher instantiation requesting NoPadding |
//! | 10 | low_pbe_iterations | PBE key spec with iteration count below 1000 |

mod hardcoded_material;
mod insecure_random;
mod weak_cipher;
mod weak_digest;
mod weak_kdf;

pub use hardcoded_material::{HardcodedKeyBytesSignature, HardcodedKeyStringSignature, StaticIvSignature};
pub use insecure_random::InsecureRandomSignature;
pub use weak_cipher::{DesCipherSignature, EcbModeSignature, NoPaddingSignature};
pub use weak_digest::{Md5DigestSignature, Sha1DigestSignature};
pub use weak_kdf::LowIterationPbeSignature;

use crate::report::{DetailedVerdict, Verdict};

/// Trait implemented by every misuse signature.
///
/// A signature is a named, statically registered detection pattern. Its
/// presence in a snippet is treated as sufficient evidence of insecure
/// cryptographic usage; there are no signatures that indicate safety and
/// no signature ever cancels another's match.
///
/// # Example Implementation
///
/// ```rust,ignore
/// pub struct MySignature {
///     pattern: Regex,
/// }
///
/// impl MisuseSignature for MySignature {
///     fn id(&self) -> &'static str { "my_rule" }
///     fn name(&self) -> &'static str { "My Misuse Pattern" }
///     fn description(&self) -> &'static str { "Detects my misuse" }
///     fn remediation(&self) -> &'static str { "Use the safe API" }
///
///     fn matches(&self, code: &str) -> bool {
///         self.pattern.is_match(code)
///     }
/// }
/// ```
pub trait MisuseSignature: Send + Sync {
    /// Returns the stable identifier for this signature.
    ///
    /// Identifiers are snake_case strings (e.g., "ecb_mode") and are the
    /// values reported in [`DetailedVerdict::triggered_rules`].
    fn id(&self) -> &'static str;

    /// Returns the human-readable name of the misuse pattern.
    fn name(&self) -> &'static str;

    /// Returns a detailed description of what this signature looks for.
    fn description(&self) -> &'static str;

    /// Returns the CWE (Common Weakness Enumeration) ID if applicable.
    fn cwe(&self) -> Option<&'static str> {
        None
    }

    /// Returns remediation advice for addressing this misuse.
    fn remediation(&self) -> &'static str;

    /// Evaluates the signature's predicate against snippet text.
    ///
    /// # Arguments
    ///
    /// * `code` - Raw or normalized snippet text
    ///
    /// # Returns
    ///
    /// `true` if the misuse pattern is present anywhere in the snippet.
    fn matches(&self, code: &str) -> bool;
}

/// Registry containing the full misuse-signature catalog.
///
/// The catalog is constructed once, compiles every pattern up front, and is
/// immutable afterwards; a shared reference can be used freely across
/// threads.
///
/// # Example
///
/// ```rust,ignore
/// let registry = SignatureRegistry::new();
/// let verdict = registry.detect(code);
/// ```
pub struct SignatureRegistry {
    signatures: Vec<Box<dyn MisuseSignature>>,
}

impl SignatureRegistry {
    /// Creates a new registry with the default signature catalog.
    ///
    /// Registration order is stable and determines the ordering of
    /// [`DetailedVerdict::triggered_rules`].
    pub fn new() -> Self {
        let signatures: Vec<Box<dyn MisuseSignature>> = vec![
            Box::new(EcbModeSignature::new()),
            Box::new(Md5DigestSignature::new()),
            Box::new(Sha1DigestSignature::new()),
            Box::new(HardcodedKeyBytesSignature::new()),
            Box::new(HardcodedKeyStringSignature::new()),
            Box::new(StaticIvSignature::new()),
            Box::new(InsecureRandomSignature::new()),
            Box::new(DesCipherSignature::new()),
            Box::new(NoPaddingSignature::new()),
            Box::new(LowIterationPbeSignature::new()),
        ];

        Self { signatures }
    }

    /// Returns a reference to all registered signatures.
    pub fn signatures(&self) -> &[Box<dyn MisuseSignature>] {
        &self.signatures
    }

    /// Retrieves a signature by its identifier.
    ///
    /// # Arguments
    ///
    /// * `id` - The signature identifier to look up
    ///
    /// # Returns
    ///
    /// A reference to the signature if found.
    pub fn get_signature(&self, id: &str) -> Option<&dyn MisuseSignature> {
        for signature in &self.signatures {
            if signature.id() == id {
                return Some(signature.as_ref());
            }
        }
        None
    }

    /// Classifies a snippet as secure or insecure.
    ///
    /// Short-circuits on the first matching signature, since only the
    /// boolean outcome matters here. Evaluation order never changes the
    /// result: signatures are independent, so any match means `Insecure`.
    ///
    /// An empty or malformed snippet matches zero signatures and yields
    /// `Secure`; this operation never fails.
    ///
    /// # Arguments
    ///
    /// * `code` - Snippet text to classify
    pub fn detect(&self, code: &str) -> Verdict {
        for signature in &self.signatures {
            if signature.matches(code) {
                return Verdict::Insecure;
            }
        }
        Verdict::Secure
    }

    /// Classifies a snippet and reports every signature that matched.
    ///
    /// Evaluates the full catalog exhaustively and collects matching
    /// identifiers in registration order. The label is `Insecure` if and
    /// only if the triggered list is non-empty.
    ///
    /// # Arguments
    ///
    /// * `code` - Snippet text to classify
    pub fn detect_detailed(&self, code: &str) -> DetailedVerdict {
        let triggered: Vec<String> = self
            .signatures
            .iter()
            .filter(|s| s.matches(code))
            .map(|s| s.id().to_string())
            .collect();

        DetailedVerdict::from_triggered(triggered)
    }

    /// Classifies a batch of snippets.
    ///
    /// Results are returned in input order. Each snippet is classified
    /// independently; there is no shared state between items.
    ///
    /// # Arguments
    ///
    /// * `codes` - Snippets to classify
    pub fn detect_batch<S: AsRef<str>>(&self, codes: &[S]) -> Vec<Verdict> {
        codes.iter().map(|c| self.detect(c.as_ref())).collect()
    }
}

impl Default for SignatureRegistry {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_registry_creation() {
        let registry = SignatureRegistry::new();
        assert_eq!(registry.signatures().len(), 10);
    }

    #[test]
    fn test_signature_ids_unique() {
        let registry = SignatureRegistry::new();
        let mut ids: Vec<_> = registry.signatures().iter().map(|s| s.id()).collect();
        let len_before = ids.len();
        ids.sort();
        ids.dedup();
        assert_eq!(ids.len(), len_before, "Signature IDs must be unique");
    }

    #[test]
    fn test_registration_order() {
        let registry = SignatureRegistry::new();
        let ids: Vec<_> = registry.signatures().iter().map(|s| s.id()).collect();
        assert_eq!(
            ids,
            vec![
                "ecb_mode",
                "md5_hash",
                "sha1_hash",
                "hardcoded_key",
                "hardcoded_key_string",
                "static_iv",
                "insecure_random",
                "des_usage",
                "no_padding",
                "low_pbe_iterations",
            ]
        );
    }

    #[test]
    fn test_get_signature() {
        let registry = SignatureRegistry::new();
        assert!(registry.get_signature("ecb_mode").is_some());
        assert!(registry.get_signature("unknown_rule").is_none());
    }

    #[test]
    fn test_empty_snippet_is_secure() {
        let registry = SignatureRegistry::new();
        assert_eq!(registry.detect(""), Verdict::Secure);

        let detailed = registry.detect_detailed("");
        assert_eq!(detailed.label, Verdict::Secure);
        assert!(detailed.triggered_rules.is_empty());
    }

    #[test]
    fn test_detect_agrees_with_detailed() {
        let registry = SignatureRegistry::new();
        let snippets = [
            "Cipher.getInstance(\"AES/ECB/PKCS5Padding\");",
            "MessageDigest.getInstance(\"SHA-256\");",
            "int x = 1;",
            "",
        ];

        for snippet in snippets {
            let detailed = registry.detect_detailed(snippet);
            let expected = if detailed.triggered_rules.is_empty() {
                Verdict::Secure
            } else {
                Verdict::Insecure
            };
            assert_eq!(registry.detect(snippet), expected);
            assert_eq!(detailed.label, expected);
        }
    }

    #[test]
    fn test_multiple_signatures_reported_in_order() {
        let registry = SignatureRegistry::new();
        let code = r#"
            Cipher cipher = Cipher.getInstance("DES/ECB/NoPadding");
            MessageDigest md = MessageDigest.getInstance("MD5");
        "#;

        let detailed = registry.detect_detailed(code);
        assert_eq!(detailed.label, Verdict::Insecure);
        assert_eq!(
            detailed.triggered_rules,
            vec!["ecb_mode", "md5_hash", "des_usage", "no_padding"]
        );
    }

    #[test]
    fn test_detect_batch_preserves_input_order() {
        let registry = SignatureRegistry::new();
        let verdicts = registry.detect_batch(&[
            "MessageDigest.getInstance(\"MD5\");",
            "MessageDigest.getInstance(\"SHA-256\");",
        ]);
        assert_eq!(verdicts, vec![Verdict::Insecure, Verdict::Secure]);
    }
}
