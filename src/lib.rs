//! dumpgrammar - Extract and align BNF grammar comments
//!
//! Scans an annotated source file for `// <rule> ::= ...` comments and prints
//! them with every `::=` delimiter aligned to the same column.

#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::missing_panics_doc)]

pub mod cli;
pub mod config;
pub mod error;
pub mod format;
pub mod parser;
pub mod process;

// Re-export commonly used types
pub use cli::{build_cli, parse_args, parse_args_from, CliArgs};
pub use config::Config;
pub use error::Result;
pub use format::RuleAligner;
pub use parser::{extract_rule_lines, is_rule_comment, RuleLine};
pub use process::{dump_grammar, extract};
