//! Grammar comment recognition.
//!
//! - [`patterns`]: Precompiled regex for rule comments and the delimiter token
//! - [`rules`]: Filters a source document down to its [`RuleLine`]s
//!
//! Recognition is a substring match, not a parse: any line with a `//`
//! comment followed later by `::=` qualifies.

pub mod patterns;
pub mod rules;

pub use patterns::{is_rule_comment, DELIMITER, LINE_BREAK_RE, RULE_COMMENT_RE};
pub use rules::{extract_rule_lines, source_lines, strip_prefix_chars, RuleLine};
