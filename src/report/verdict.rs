//! # Verdict Definitions
//!
//! Defines the core data structures for representing classification
//! verdicts produced by the signature registry.

use colored::*;
use serde::{Deserialize, Serialize};

/// Binary classification verdict for a code snippet.
///
/// A snippet is `Insecure` if and only if at least one misuse signature
/// matched it. Absence of any known-bad pattern is treated as evidence of
/// safety (closed-world assumption).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Verdict {
    /// No misuse signature matched the snippet.
    Secure,

    /// At least one misuse signature matched the snippet.
    Insecure,
}

impl Verdict {
    /// Parses a verdict from a string.
    ///
    /// # Arguments
    ///
    /// * `s` - String representation of the verdict
    ///
    /// # Returns
    ///
    /// The corresponding `Verdict` variant, defaulting to `Secure` for
    /// unknown values.
    pub fn from_str(s: &str) -> Self {
        match s.to_lowercase().as_str() {
            "insecure" => Verdict::Insecure,
            _ => Verdict::Secure,
        }
    }

    /// Returns `true` if the verdict is `Insecure`.
    pub fn is_insecure(&self) -> bool {
        matches!(self, Verdict::Insecure)
    }

    /// Returns a colored label for terminal output.
    pub fn colored_label(&self) -> ColoredString {
        match self {
            Verdict::Insecure => "INSECURE".white().on_red().bold(),
            Verdict::Secure => "SECURE".black().on_green().bold(),
        }
    }
}

impl std::fmt::Display for Verdict {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Verdict::Secure => write!(f, "secure"),
            Verdict::Insecure => write!(f, "insecure"),
        }
    }
}

/// Verdict enriched with the identifiers of every signature that matched.
///
/// Invariant: `triggered_rules` is empty if and only if `label` is
/// [`Verdict::Secure`]. The identifiers appear in signature registration
/// order; a signature matching several times in the same snippet is listed
/// once.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DetailedVerdict {
    /// The binary verdict.
    pub label: Verdict,

    /// Identifiers of the signatures that matched, in registration order.
    pub triggered_rules: Vec<String>,
}

impl DetailedVerdict {
    /// Builds a detailed verdict from the set of triggered signature ids.
    ///
    /// The label is derived from the list: non-empty means `Insecure`.
    pub fn from_triggered(triggered_rules: Vec<String>) -> Self {
        let label = if triggered_rules.is_empty() {
            Verdict::Secure
        } else {
            Verdict::Insecure
        };

        Self {
            label,
            triggered_rules,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_verdict_from_str() {
        assert_eq!(Verdict::from_str("insecure"), Verdict::Insecure);
        assert_eq!(Verdict::from_str("INSECURE"), Verdict::Insecure);
        assert_eq!(Verdict::from_str("secure"), Verdict::Secure);
        assert_eq!(Verdict::from_str("unknown"), Verdict::Secure);
    }

    #[test]
    fn test_verdict_display() {
        assert_eq!(Verdict::Secure.to_string(), "secure");
        assert_eq!(Verdict::Insecure.to_string(), "insecure");
    }

    #[test]
    fn test_detailed_verdict_label_follows_triggered_list() {
        let clean = DetailedVerdict::from_triggered(Vec::new());
        assert_eq!(clean.label, Verdict::Secure);
        assert!(clean.triggered_rules.is_empty());

        let flagged = DetailedVerdict::from_triggered(vec!["ecb_mode".to_string()]);
        assert_eq!(flagged.label, Verdict::Insecure);
        assert_eq!(flagged.triggered_rules, vec!["ecb_mode"]);
    }

    #[test]
    fn test_verdict_serializes_lowercase() {
        let json = serde_json::to_string(&Verdict::Insecure).unwrap();
        assert_eq!(json, "\"insecure\"");
    }
}
