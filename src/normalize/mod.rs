//! # Snippet Normalizer Module
//!
//! Reduces a raw Java snippet to canonical text for the signature registry
//! and the feature extractor. Normalization is caller-controlled: neither
//! detection component applies it internally.
//!
//! ## Pipeline
//!
//! The three passes run in a fixed order when enabled:
//!
//! 1. Comment stripping (block comments, then line comments)
//! 2. Whitespace collapsing
//! 3. Identifier anonymization
//!
//! Comment stripping must precede whitespace collapsing so that a
//! comment-only line becomes an empty line the whitespace pass then drops.
//!
//! ## Known Limitations
//!
//! - A line-comment marker inside a string literal is treated as a comment.
//! - Anonymization renames every whole-word occurrence of a collected
//!   local, including a same-named field used elsewhere.
//!
//! Both are accepted false-positive sources of the lexical approach and
//! are intentionally left uncorrected.

use regex::Regex;

/// Local-variable names that are never anonymized.
///
/// Covers language keywords and common API identifiers whose renaming
/// would make snippets harder to compare, not easier.
const PROTECTED_IDENTIFIERS: &[&str] = &[
    "args", "main", "this", "super", "null", "true", "false", "System", "out", "println",
    "String", "Integer", "key",
];

/// Options controlling the normalization passes.
///
/// Each toggle is independent; enabled passes always run in the fixed
/// order comments, then whitespace, then identifiers.
#[derive(Debug, Clone, Copy)]
pub struct NormalizeOptions {
    /// Strip block and line comments.
    pub strip_comments: bool,

    /// Collapse runs of whitespace and drop empty lines.
    pub collapse_whitespace: bool,

    /// Replace declared local-variable names with positional placeholders.
    pub anonymize_identifiers: bool,
}

impl Default for NormalizeOptions {
    fn default() -> Self {
        Self {
            strip_comments: true,
            collapse_whitespace: true,
            anonymize_identifiers: false,
        }
    }
}

/// Snippet normalizer with all scan patterns compiled up front.
///
/// Construct once and reuse across snippets; normalization itself is a
/// pure function of the input text and options.
pub struct Normalizer {
    block_comment: Regex,
    line_comment: Regex,
    space_runs: Regex,
    declaration: Regex,
}

impl Normalizer {
    pub fn new() -> Self {
        Self {
            block_comment: Regex::new(r"(?s)/\*.*?\*/").expect("invalid block comment pattern"),
            line_comment: Regex::new(r"//[^\n]*").expect("invalid line comment pattern"),
            space_runs: Regex::new(r" {2,}").expect("invalid space run pattern"),
            declaration: Regex::new(
                r"(?i)\b(?:int|long|byte|short|float|double|boolean|char|String|byte\[\]|char\[\]|Object|var)\s+([a-z_]\w*)\s*[=;,)]",
            )
            .expect("invalid declaration pattern"),
        }
    }

    /// Normalizes a snippet according to the given options.
    ///
    /// The input is never mutated; a new string is returned even when all
    /// passes are disabled.
    ///
    /// # Arguments
    ///
    /// * `code` - Raw snippet text
    /// * `options` - Which passes to apply
    pub fn normalize(&self, code: &str, options: &NormalizeOptions) -> String {
        let mut code = code.to_string();

        if options.strip_comments {
            code = self.strip_comments(&code);
        }

        if options.collapse_whitespace {
            code = self.collapse_whitespace(&code);
        }

        if options.anonymize_identifiers {
            code = self.anonymize_identifiers(&code);
        }

        code
    }

    /// Removes block comments, then line comments.
    ///
    /// Block comments use the shortest open-to-close match. An unterminated
    /// block opener removes everything from the opener through end of text.
    /// Running the block pass first means a line marker inside a block
    /// comment disappears with the block instead of being processed on its
    /// own.
    fn strip_comments(&self, code: &str) -> String {
        let without_blocks = self.block_comment.replace_all(code, "");

        // Whatever /* remains has no matching close
        let without_blocks = match without_blocks.find("/*") {
            Some(pos) => without_blocks[..pos].to_string(),
            None => without_blocks.into_owned(),
        };

        self.line_comment.replace_all(&without_blocks, "").into_owned()
    }

    /// Collapses whitespace and removes blank lines.
    ///
    /// Tabs become single spaces, runs of two or more spaces collapse to
    /// one, every line is trimmed, empty lines are dropped, and the
    /// remaining lines are rejoined with single newlines. Applying this
    /// pass twice yields the same result as applying it once.
    fn collapse_whitespace(&self, code: &str) -> String {
        let code = code.replace('\t', " ");
        let code = self.space_runs.replace_all(&code, " ");

        code.lines()
            .map(str::trim)
            .filter(|line| !line.is_empty())
            .collect::<Vec<_>>()
            .join("\n")
    }

    /// Replaces declared local-variable names with VAR0, VAR1, and so on.
    ///
    /// Declarations are recognized as a fixed primitive-or-common type name
    /// followed by an identifier. Collected names (protected identifiers
    /// excluded) are replaced whole-word across the entire snippet in
    /// first-seen order. Class and method names carry no type prefix and
    /// are therefore never collected.
    fn anonymize_identifiers(&self, code: &str) -> String {
        let mut names: Vec<&str> = Vec::new();
        for caps in self.declaration.captures_iter(code) {
            let name = caps.get(1).map_or("", |m| m.as_str());
            if !name.is_empty() && !PROTECTED_IDENTIFIERS.contains(&name) && !names.contains(&name)
            {
                names.push(name);
            }
        }

        let mut result = code.to_string();
        for (idx, name) in names.iter().enumerate() {
            let whole_word = Regex::new(&format!(r"\b{}\b", regex::escape(name)))
                .expect("invalid identifier pattern");
            let placeholder = format!("VAR{}", idx);
            result = whole_word
                .replace_all(&result, placeholder.as_str())
                .into_owned();
        }

        result
    }
}

impl Default for Normalizer {
    fn default() -> Self {
        Self::new()
    }
}

/// Normalizes a snippet with a freshly constructed [`Normalizer`].
///
/// Convenience wrapper for one-shot callers; reuse a [`Normalizer`] when
/// processing many snippets.
pub fn normalize(code: &str, options: &NormalizeOptions) -> String {
    Normalizer::new().normalize(code, options)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn strip_only() -> NormalizeOptions {
        NormalizeOptions {
            strip_comments: true,
            collapse_whitespace: false,
            anonymize_identifiers: false,
        }
    }

    #[test]
    fn test_strip_block_and_line_comments() {
        let normalizer = Normalizer::new();
        let code = "int x = 1; /* block\ncomment */ int y = 2; // trailing";
        let out = normalizer.normalize(code, &strip_only());
        assert!(!out.contains("block"));
        assert!(!out.contains("trailing"));
        assert!(out.contains("int x = 1;"));
        assert!(out.contains("int y = 2;"));
    }

    #[test]
    fn test_unterminated_block_comment_swallows_rest() {
        let normalizer = Normalizer::new();
        let code = "int x = 1; /* never closed\nint y = 2;";
        let out = normalizer.normalize(code, &strip_only());
        assert_eq!(out, "int x = 1; ");
    }

    #[test]
    fn test_line_marker_inside_block_comment() {
        let normalizer = Normalizer::new();
        let code = "int x = 1; /* has // inside */ int y = 2;";
        let out = normalizer.normalize(code, &strip_only());
        assert!(out.contains("int y = 2;"));
    }

    #[test]
    fn test_whitespace_collapse() {
        let normalizer = Normalizer::new();
        let options = NormalizeOptions {
            strip_comments: false,
            collapse_whitespace: true,
            anonymize_identifiers: false,
        };
        let code = "int\tx  =   1;\n\n\n   int y = 2;   \n";
        let out = normalizer.normalize(code, &options);
        assert_eq!(out, "int x = 1;\nint y = 2;");
    }

    #[test]
    fn test_whitespace_collapse_is_idempotent() {
        let normalizer = Normalizer::new();
        let options = NormalizeOptions {
            strip_comments: false,
            collapse_whitespace: true,
            anonymize_identifiers: false,
        };
        let code = "int  a = 1;\n\n  String  s  = \"x\";\n";
        let once = normalizer.normalize(code, &options);
        let twice = normalizer.normalize(&once, &options);
        assert_eq!(once, twice);
    }

    #[test]
    fn test_comment_only_line_is_dropped() {
        let normalizer = Normalizer::new();
        let code = "int x = 1;\n// only a comment\nint y = 2;";
        let out = normalizer.normalize(code, &NormalizeOptions::default());
        assert_eq!(out, "int x = 1;\nint y = 2;");
    }

    #[test]
    fn test_anonymize_first_seen_order() {
        let normalizer = Normalizer::new();
        let options = NormalizeOptions {
            strip_comments: false,
            collapse_whitespace: false,
            anonymize_identifiers: true,
        };
        let code = "int count = 0; String label = \"x\"; count = count + 1;";
        let out = normalizer.normalize(code, &options);
        assert_eq!(out, "int VAR0 = 0; String VAR1 = \"x\"; VAR0 = VAR0 + 1;");
    }

    #[test]
    fn test_anonymize_whole_word_only() {
        let normalizer = Normalizer::new();
        let options = NormalizeOptions {
            strip_comments: false,
            collapse_whitespace: false,
            anonymize_identifiers: true,
        };
        let code = "int count = 0; int counter = count;";
        let out = normalizer.normalize(code, &options);
        assert_eq!(out, "int VAR0 = 0; int VAR1 = VAR0;");
    }

    #[test]
    fn test_anonymize_skips_protected_names() {
        let normalizer = Normalizer::new();
        let options = NormalizeOptions {
            strip_comments: false,
            collapse_whitespace: false,
            anonymize_identifiers: true,
        };
        let code = "String key = \"secret\"; int other = 1;";
        let out = normalizer.normalize(code, &options);
        assert!(out.contains("String key"));
        assert!(out.contains("int VAR0"));
    }

    #[test]
    fn test_anonymize_leaves_class_and_method_names() {
        let normalizer = Normalizer::new();
        let options = NormalizeOptions {
            strip_comments: false,
            collapse_whitespace: false,
            anonymize_identifiers: true,
        };
        let code = "class Encryptor { void process() { int total = 1; } }";
        let out = normalizer.normalize(code, &options);
        assert!(out.contains("class Encryptor"));
        assert!(out.contains("void process()"));
        assert!(out.contains("int VAR0 = 1;"));
    }

    #[test]
    fn test_all_passes_disabled_returns_input() {
        let normalizer = Normalizer::new();
        let options = NormalizeOptions {
            strip_comments: false,
            collapse_whitespace: false,
            anonymize_identifiers: false,
        };
        let code = "int x = 1; // unchanged";
        assert_eq!(normalizer.normalize(code, &options), code);
    }
}
