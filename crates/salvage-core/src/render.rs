//! Canonical rendering of recovered values.
//!
//! The observable output contract: the same abstract value always renders
//! to the same text, so successive snapshots of a growing stream can be
//! compared and diffed as strings.

use serde_json::Value;

use crate::error::{Error, Result};

/// Render a value tree deterministically.
///
/// Object keys are emitted in lexicographic order regardless of insertion
/// order (the default `serde_json::Map` is ordered by key), arrays keep
/// element order, strings use standard JSON escaping, and numbers render
/// per their integer/float classification.
///
/// A serialization failure here cannot be caused by input text — only the
/// parser constructs values, and it only builds finite numbers — so it is
/// surfaced loudly as [`Error::Encode`] instead of being tolerated.
///
/// ```
/// use salvage_core::render;
/// use serde_json::json;
///
/// let rendered = render(&json!({"b": 1, "a": [1.5, "x"]})).unwrap();
/// assert_eq!(rendered, r#"{"a":[1.5,"x"],"b":1}"#);
/// ```
pub fn render(value: &Value) -> Result<String> {
    serde_json::to_string(value).map_err(Error::Encode)
}
