//! # salvage-core
//!
//! Best-effort JSON recovery from streaming LLM output.
//!
//! A text-generation source emits structured output incrementally, often
//! wrapped in narrative prose and markdown fences, and the prefix available at
//! any moment is rarely syntactically complete. salvage-core turns any such
//! prefix into the most complete value currently derivable from it: parsing
//! never fails on malformed or truncated input, and the result is rendered in
//! a canonical form (sorted keys, standard escaping) suitable for display,
//! diffing, or feeding straight into `serde`.
//!
//! ## Quick start
//!
//! ```rust
//! use salvage_core::parse;
//!
//! // Mid-stream prefix: unterminated string, dangling key.
//! let prefix = r#"{ "fact": "something", "key"#;
//! assert_eq!(parse(prefix).unwrap(), r#"{"fact":"something"}"#);
//! ```
//!
//! ## Modules
//!
//! - [`extract`] — isolates the structured payload span inside narrative/fenced text
//! - [`parser`] — the tolerant recursive-descent parser
//! - [`render`] — canonical (deterministic) rendering of recovered values
//! - [`stream`] — accumulation helper for streaming callers
//! - [`error`] — error types for the non-tolerant boundaries

pub mod error;
pub mod extract;
pub mod parser;
pub mod render;
pub mod stream;

pub use error::{Error, Result};
pub use extract::extract_payload;
pub use parser::{parse, parse_into, parse_to_value, parse_value};
pub use render::render;
pub use stream::Accumulator;

/// The recovered value tree. Re-exported so callers don't need a direct
/// `serde_json` dependency for the common cases.
pub use serde_json::Value;
