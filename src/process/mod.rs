//! File processing pipeline.
//!
//! A source document is loaded completely before anything is written:
//!
//! - Read the file (or any reader) into memory
//! - Filter grammar rule comments and strip their prefix
//! - Measure the alignment column and pad each rule
//! - Write the aligned rules, one per line, in source order
//!
//! The entry points are [`extract`], which returns the aligned lines for a
//! path, and [`dump_grammar`], which streams them to any `Write`
//! implementation.

pub mod pipeline;

pub use pipeline::{
    align_source, dump_grammar, extract, read_source, DumpSummary, MAX_SOURCE_SIZE,
};
