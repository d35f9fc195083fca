/// Regex patterns for grammar rule comments
///
/// Patterns are compiled once on first use via `LazyLock`.
use std::sync::LazyLock;

use regex::{Regex, RegexBuilder};

/// Token separating a rule's left-hand side from its right-hand side.
pub const DELIMITER: &str = "::=";

/// Build a regex from a compile-time constant pattern.
///
/// # Panics
///
/// Panics if the pattern is invalid. Patterns in this module are constants
/// covered by tests, so this can only fire on first access after an edit.
fn build_re(pattern: &str) -> Regex {
    RegexBuilder::new(pattern)
        .unicode(true)
        .build()
        .unwrap_or_else(|_| panic!("Invalid regex pattern: {pattern}"))
}

// `//`, one whitespace char, then anything up to the delimiter
pub static RULE_COMMENT_RE: LazyLock<Regex> =
    LazyLock::new(|| build_re(&format!(r"//\s.*{}.*$", regex::escape(DELIMITER))));

// Any line break: `\r\n`, lone `\n` or lone `\r`
pub static LINE_BREAK_RE: LazyLock<Regex> = LazyLock::new(|| build_re(r"\r\n|\r|\n"));

/// Check whether a raw source line carries a grammar rule comment.
#[must_use]
pub fn is_rule_comment(line: &str) -> bool {
    RULE_COMMENT_RE.is_match(line)
}
