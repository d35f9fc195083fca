//! Output formatting for extracted grammar rules.
//!
//! - [`aligner`]: Pads rule lines so every `::=` lands in the same column

pub mod aligner;

pub use aligner::RuleAligner;
