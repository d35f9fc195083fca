//! Candidate line extraction
//!
//! A source document is filtered line by line with [`is_rule_comment`]. Each
//! matching line is trimmed and loses a fixed number of leading characters
//! (the `// ` comment introducer by default); what remains is a [`RuleLine`].

use super::patterns::{is_rule_comment, DELIMITER, LINE_BREAK_RE};

/// A grammar rule comment lifted out of the source document
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RuleLine {
    /// 1-based line number in the source document
    pub line_number: usize,
    /// Rule text with the comment prefix removed
    pub text: String,
    /// Byte offset of the first delimiter in `text`
    pub delimiter_offset: usize,
    /// Character column of the first delimiter in `text`
    pub delimiter_column: usize,
}

impl RuleLine {
    /// Build a rule line from already prefix-stripped text.
    ///
    /// Returns `None` when the text contains no delimiter.
    #[must_use]
    pub fn new(line_number: usize, text: &str) -> Option<Self> {
        let delimiter_offset = text.find(DELIMITER)?;
        Some(Self {
            line_number,
            text: text.to_string(),
            delimiter_offset,
            delimiter_column: text[..delimiter_offset].chars().count(),
        })
    }

    /// Left-hand side of the rule, up to the delimiter
    #[must_use]
    pub fn head(&self) -> &str {
        &self.text[..self.delimiter_offset]
    }

    /// Delimiter and everything after it
    #[must_use]
    pub fn tail(&self) -> &str {
        &self.text[self.delimiter_offset..]
    }
}

/// Drop the first `count` characters of `s`.
///
/// Counts characters, not bytes, so a multi-byte character is never split.
#[must_use]
pub fn strip_prefix_chars(s: &str, count: usize) -> &str {
    match s.char_indices().nth(count) {
        Some((offset, _)) => &s[offset..],
        None => "",
    }
}

/// Split `source` into lines on `\r\n`, `\n` or a lone `\r`.
///
/// A trailing line break does not produce a final empty line.
pub fn source_lines(source: &str) -> impl Iterator<Item = &str> {
    let body = source
        .strip_suffix("\r\n")
        .or_else(|| source.strip_suffix(['\n', '\r']))
        .unwrap_or(source);
    (!source.is_empty())
        .then(|| LINE_BREAK_RE.split(body))
        .into_iter()
        .flatten()
}

/// Extract every grammar rule comment from `source`, in source order.
///
/// Lines are matched on their raw text, then trimmed and stripped of
/// `prefix_width` leading characters. A line whose delimiter would be
/// consumed by the prefix is skipped.
#[must_use]
pub fn extract_rule_lines(source: &str, prefix_width: usize) -> Vec<RuleLine> {
    source_lines(source)
        .enumerate()
        .filter(|(_, line)| is_rule_comment(line))
        .filter_map(|(idx, line)| {
            RuleLine::new(idx + 1, strip_prefix_chars(line.trim(), prefix_width))
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_strip_prefix_chars() {
        assert_eq!(strip_prefix_chars("// a ::= b", 3), "a ::= b");
        assert_eq!(strip_prefix_chars("ab", 3), "");
        assert_eq!(strip_prefix_chars("abc", 0), "abc");
        assert_eq!(strip_prefix_chars("//\u{e9}x", 3), "x");
    }

    #[test]
    fn test_rule_line_columns() {
        let rule = RuleLine::new(1, "<type> ::= TYPE").unwrap();
        assert_eq!(rule.delimiter_offset, 7);
        assert_eq!(rule.delimiter_column, 7);
        assert_eq!(rule.head(), "<type> ");
        assert_eq!(rule.tail(), "::= TYPE");
    }

    #[test]
    fn test_rule_line_column_counts_chars() {
        let rule = RuleLine::new(1, "<tipo\u{f1}> ::= TYPE").unwrap();
        assert_eq!(rule.delimiter_column, 8);
        assert_eq!(rule.delimiter_offset, 9);
    }

    #[test]
    fn test_rule_line_uses_first_delimiter() {
        let rule = RuleLine::new(1, "a ::= \"::=\"").unwrap();
        assert_eq!(rule.delimiter_column, 2);
    }

    #[test]
    fn test_rule_line_without_delimiter() {
        assert!(RuleLine::new(1, "no rule here").is_none());
    }

    #[test]
    fn test_extract_filters_and_keeps_order() {
        let source = "\
int main(void) {
    // <program> ::= <statement>*
    // comment without delimiter
    return 0;
    // <statement> ::= <block> | <expr> \";\"
}
";
        let rules = extract_rule_lines(source, 3);
        assert_eq!(rules.len(), 2);
        assert_eq!(rules[0].line_number, 2);
        assert_eq!(rules[0].text, "<program> ::= <statement>*");
        assert_eq!(rules[1].line_number, 5);
        assert_eq!(rules[1].text, "<statement> ::= <block> | <expr> \";\"");
    }

    #[test]
    fn test_extract_strips_exactly_three_chars() {
        // Two spaces after the slashes leave one behind
        let rules = extract_rule_lines("//  start ::= decl", 3);
        assert_eq!(rules[0].text, " start ::= decl");
        assert_eq!(rules[0].delimiter_column, 7);
    }

    #[test]
    fn test_extract_strips_from_trimmed_line() {
        // Code before the comment is part of the trimmed line
        let rules = extract_rule_lines("x; // a ::= b", 3);
        assert_eq!(rules[0].text, "// a ::= b");
    }

    #[test]
    fn test_extract_empty_source() {
        assert!(extract_rule_lines("", 3).is_empty());
        assert!(extract_rule_lines("no\ngrammar\nhere\n", 3).is_empty());
    }

    #[test]
    fn test_extract_skips_when_prefix_swallows_delimiter() {
        let rules = extract_rule_lines("// ::= x", 5);
        assert!(rules.is_empty());
    }

    #[test]
    fn test_source_lines() {
        assert_eq!(source_lines("").count(), 0);
        assert_eq!(source_lines("a\n").collect::<Vec<_>>(), vec!["a"]);
        assert_eq!(source_lines("a\r\n\rb").collect::<Vec<_>>(), vec!["a", "", "b"]);
        assert_eq!(source_lines("a\rb\r").collect::<Vec<_>>(), vec!["a", "b"]);
    }

    #[test]
    fn test_extract_handles_lone_cr() {
        let rules = extract_rule_lines("// a ::= b\r// cc ::= d\r", 3);
        assert_eq!(rules.len(), 2);
        assert_eq!(rules[0].text, "a ::= b");
        assert_eq!(rules[1].text, "cc ::= d");
        assert_eq!(rules[1].line_number, 2);
    }

    #[test]
    fn test_extract_handles_crlf() {
        let rules = extract_rule_lines("// a ::= b\r\n// bb ::= c\r\n", 3);
        assert_eq!(rules.len(), 2);
        assert_eq!(rules[1].text, "bb ::= c");
    }
}
