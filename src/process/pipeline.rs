//! Extraction pipeline
//!
//! Load, filter, measure, align, emit.

use std::fs::File;
use std::io::{Read, Write};
use std::path::Path;

use anyhow::Context;

use crate::config::Config;
use crate::format::RuleAligner;
use crate::parser::extract_rule_lines;
use crate::Result;

/// Largest source document accepted, in bytes (100 MB).
pub const MAX_SOURCE_SIZE: u64 = 100 * 1024 * 1024;

/// Read a whole source file into memory.
///
/// The file size is checked before reading so an oversized file is never
/// loaded. The handle is closed when this returns, on every path.
pub fn read_source(path: &Path) -> Result<Vec<u8>> {
    let metadata =
        std::fs::metadata(path).with_context(|| format!("failed to read {}", path.display()))?;
    if metadata.len() > MAX_SOURCE_SIZE {
        anyhow::bail!(
            "{} is too large ({} MB exceeds limit of {} MB)",
            path.display(),
            metadata.len() / (1024 * 1024),
            MAX_SOURCE_SIZE / (1024 * 1024)
        );
    }

    let mut contents = Vec::new();
    File::open(path)
        .and_then(|mut file| file.read_to_end(&mut contents))
        .with_context(|| format!("failed to read {}", path.display()))?;
    Ok(contents)
}

/// What a run of [`dump_grammar`] wrote
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DumpSummary {
    /// Source line number of each rule, in output order
    pub line_numbers: Vec<usize>,
    /// Column every delimiter was aligned to
    pub column: usize,
}

impl DumpSummary {
    /// Number of rule lines written
    #[must_use]
    pub fn rule_count(&self) -> usize {
        self.line_numbers.len()
    }
}

/// Filter, measure and align the grammar rules of an in-memory document.
///
/// Bytes that are not valid UTF-8 are replaced rather than rejected, so
/// binary input just produces fewer matches.
#[must_use]
pub fn align_source(contents: &[u8], config: &Config) -> Vec<String> {
    align_with_summary(contents, config).0
}

fn align_with_summary(contents: &[u8], config: &Config) -> (Vec<String>, DumpSummary) {
    let text = String::from_utf8_lossy(contents);
    let rules = extract_rule_lines(&text, config.prefix_width);
    let aligner = RuleAligner::new(&rules);
    let summary = DumpSummary {
        line_numbers: rules.iter().map(|rule| rule.line_number).collect(),
        column: aligner.column(),
    };
    (aligner.aligned_lines(), summary)
}

/// Extract the aligned grammar listing of the file at `path`.
pub fn extract(path: &Path, config: &Config) -> Result<Vec<String>> {
    let contents = read_source(path)?;
    Ok(align_source(&contents, config))
}

/// Read a source document from `reader` and write its aligned grammar to
/// `output`.
///
/// Returns a [`DumpSummary`] of the rules written. Nothing is written unless the
/// whole input was read successfully.
pub fn dump_grammar<R: Read, W: Write>(
    mut reader: R,
    output: &mut W,
    config: &Config,
    source_name: &str,
) -> Result<DumpSummary> {
    let mut contents = Vec::new();
    reader
        .read_to_end(&mut contents)
        .with_context(|| format!("failed to read {source_name}"))?;

    #[allow(clippy::cast_possible_truncation)]
    let size = contents.len() as u64;
    if size > MAX_SOURCE_SIZE {
        anyhow::bail!(
            "{source_name} is too large ({} MB exceeds limit of {} MB)",
            size / (1024 * 1024),
            MAX_SOURCE_SIZE / (1024 * 1024)
        );
    }

    let (lines, summary) = align_with_summary(&contents, config);
    for line in &lines {
        writeln!(output, "{line}")?;
    }
    output.flush()?;

    Ok(summary)
}
