//! Incremental accumulation for streaming callers.
//!
//! The parser is stateless: every call re-scans the whole candidate text and
//! builds a fresh tree, so re-parsing once per transport increment costs time
//! proportional to the square of the total streamed length. [`Accumulator`]
//! owns the growing text so callers can append increments cheaply and ask for
//! the current best-effort view on their own cadence — batching increments
//! between snapshots is the throughput lever.

use serde::de::DeserializeOwned;
use serde_json::Value;

use crate::error::Result;
use crate::parser;

/// Owns the cumulative text received so far from a streaming source.
///
/// Every snapshot is a from-scratch parse of the full buffer, so the view
/// for a given prefix is identical whether the text arrived in one chunk
/// or many.
///
/// # Examples
///
/// ```
/// use salvage_core::Accumulator;
///
/// let mut acc = Accumulator::new();
/// acc.push(r#"{ "status": "par"#);
/// assert_eq!(acc.snapshot().unwrap(), r#"{"status":"par"}"#);
///
/// acc.push(r#"tial" }"#);
/// assert_eq!(acc.snapshot().unwrap(), r#"{"status":"partial"}"#);
/// ```
#[derive(Debug, Clone, Default)]
pub struct Accumulator {
    buf: String,
}

impl Accumulator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append the next transport increment.
    pub fn push(&mut self, chunk: &str) {
        self.buf.push_str(chunk);
    }

    /// The raw accumulated text.
    pub fn text(&self) -> &str {
        &self.buf
    }

    pub fn is_empty(&self) -> bool {
        self.buf.is_empty()
    }

    /// Best-effort value for everything received so far.
    pub fn value(&self) -> Value {
        parser::parse_to_value(&self.buf)
    }

    /// Canonical encoding of the current value.
    pub fn snapshot(&self) -> Result<String> {
        parser::parse(&self.buf)
    }

    /// Typed view of the current value. Target types should treat
    /// not-yet-streamed fields as optional.
    pub fn snapshot_into<T: DeserializeOwned>(&self) -> Result<T> {
        parser::parse_into(&self.buf)
    }
}
