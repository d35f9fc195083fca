/// `RuleAligner` - Aligns the `::=` delimiter across rule lines
///
/// The alignment column is the rightmost delimiter column of all rules.
/// Every rule is padded with spaces directly before its delimiter until the
/// delimiter reaches that column.
use crate::parser::RuleLine;

/// Pre-allocated buffer of spaces for padding.
const SPACES: &str = "                                                                ";

/// Aligner for extracted rule lines
pub struct RuleAligner<'a> {
    rules: &'a [RuleLine],
    column: usize,
}

impl<'a> RuleAligner<'a> {
    /// Measure the alignment column for `rules`.
    ///
    /// An empty slice yields column 0.
    #[must_use]
    pub fn new(rules: &'a [RuleLine]) -> Self {
        let column = rules
            .iter()
            .map(|rule| rule.delimiter_column)
            .max()
            .unwrap_or(0);
        Self { rules, column }
    }

    /// Column every delimiter is aligned to
    #[must_use]
    pub fn column(&self) -> usize {
        self.column
    }

    /// Number of spaces inserted before the delimiter of `rule`
    #[must_use]
    pub fn padding(&self, rule: &RuleLine) -> usize {
        self.column.saturating_sub(rule.delimiter_column)
    }

    /// Pad a single rule so its delimiter sits at the alignment column.
    #[must_use]
    pub fn align_line(&self, rule: &RuleLine) -> String {
        let padding = self.padding(rule);
        let mut aligned = String::with_capacity(rule.text.len() + padding);
        aligned.push_str(rule.head());
        push_spaces(&mut aligned, padding);
        aligned.push_str(rule.tail());
        aligned
    }

    /// Align every rule, preserving source order.
    #[must_use]
    pub fn aligned_lines(&self) -> Vec<String> {
        self.rules.iter().map(|rule| self.align_line(rule)).collect()
    }
}

fn push_spaces(out: &mut String, mut count: usize) {
    while count > 0 {
        let chunk = count.min(SPACES.len());
        out.push_str(&SPACES[..chunk]);
        count -= chunk;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parser::extract_rule_lines;

    fn delimiter_columns(lines: &[String]) -> Vec<usize> {
        lines
            .iter()
            .map(|line| line[..line.find("::=").unwrap()].chars().count())
            .collect()
    }

    #[test]
    fn test_empty_rules() {
        let aligner = RuleAligner::new(&[]);
        assert_eq!(aligner.column(), 0);
        assert!(aligner.aligned_lines().is_empty());
    }

    #[test]
    fn test_start_decl_scenario() {
        let rules = extract_rule_lines("//  start ::= decl\n//  decl    ::= NAME\n", 3);
        let aligner = RuleAligner::new(&rules);
        assert_eq!(aligner.column(), 9);

        let lines = aligner.aligned_lines();
        assert_eq!(lines, vec![" start   ::= decl", " decl    ::= NAME"]);
    }

    #[test]
    fn test_widest_rule_is_unchanged() {
        let rules = extract_rule_lines("// <a> ::= x\n// <assignment> ::= y\n", 3);
        let aligner = RuleAligner::new(&rules);
        assert_eq!(aligner.padding(&rules[1]), 0);
        assert_eq!(aligner.align_line(&rules[1]), "<assignment> ::= y");
        assert_eq!(aligner.align_line(&rules[0]), "<a>          ::= x");
    }

    #[test]
    fn test_all_delimiters_share_a_column() {
        let source = "\
    // <type> ::= TYPE
    // <arglist> ::= \"(\" ( <expr> (\",\" <expr>)* )? \")\"
    // <if> ::= \"if\" <expression> <block> (\"else\" <block>)?
    // <statement> ::= <block> | <procedure>
";
        let rules = extract_rule_lines(source, 3);
        let lines = RuleAligner::new(&rules).aligned_lines();
        assert_eq!(lines.len(), 4);
        assert!(delimiter_columns(&lines).iter().all(|&c| c == 12));
    }

    #[test]
    fn test_non_ascii_alignment() {
        let rules = extract_rule_lines("// <\u{e9}t\u{e9}> ::= x\n// <stage> ::= y\n", 3);
        let lines = RuleAligner::new(&rules).aligned_lines();
        let columns = delimiter_columns(&lines);
        assert_eq!(columns[0], columns[1]);
    }

    #[test]
    fn test_padding_only_before_first_delimiter() {
        let rules = extract_rule_lines("// a ::= \"::=\"\n// bbb ::= c\n", 3);
        let lines = RuleAligner::new(&rules).aligned_lines();
        assert_eq!(lines[0], "a   ::= \"::=\"");
    }

    #[test]
    fn test_wide_padding() {
        let long = format!("// {} ::= x\n// a ::= y\n", "n".repeat(200));
        let rules = extract_rule_lines(&long, 3);
        let lines = RuleAligner::new(&rules).aligned_lines();
        assert_eq!(lines[1], format!("a{}::= y", " ".repeat(200)));
    }
}
