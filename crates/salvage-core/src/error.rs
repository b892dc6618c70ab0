//! Error types for canonical rendering and typed extraction.

use thiserror::Error;

/// Errors that can escape the recovery pipeline.
///
/// Malformed or truncated input is never an error: the parser absorbs
/// truncation, missing terminators, unrecognized escapes, and stray
/// separators, and returns the most complete value it can. The variants
/// below cover the two remaining boundaries.
#[derive(Error, Debug)]
pub enum Error {
    /// Canonical serialization failed. The parser only builds finite numbers
    /// and well-formed trees, so this indicates an internal defect rather
    /// than bad input.
    #[error("canonical encoding failed: {0}")]
    Encode(#[source] serde_json::Error),

    /// The recovered value does not deserialize into the requested type.
    #[error("typed extraction failed: {0}")]
    Extract(#[source] serde_json::Error),
}

/// Convenience alias used throughout salvage-core.
pub type Result<T> = std::result::Result<T, Error>;
