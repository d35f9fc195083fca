//! Error types and result aliases for dumpgrammar.
//!
//! - [`Result<T>`]: Type alias for `anyhow::Result<T>` used throughout the crate
//!
//! Failing to read the source document surfaces as the underlying
//! [`std::io::Error`] with a `failed to read <path>` context attached.

use anyhow::Result as AnyhowResult;

pub type Result<T> = AnyhowResult<T>;
