//! Tolerant recursive-descent parser for truncated JSON prefixes.
//!
//! The parser never rejects input: it walks whatever prefix it is given and
//! returns the most complete `serde_json::Value` derivable from it. Handled
//! along the way:
//!
//! - Unterminated strings, objects, and arrays (closed implicitly at end of text)
//! - Dangling keys (dropped) and dangling colons (bound to null)
//! - Truncated literals (`t` already resolves to true, `n` to null)
//! - Trailing commas, stray separators, and junk between tokens (skipped silently)
//!
//! # Key design decisions
//!
//! - **Shared cursor, no shared state**: every sub-parser is a plain function
//!   over `(text, offset)` returning its value and a resume offset. The mutual
//!   recursion between the dispatcher and the composite parsers is ordinary
//!   function calls; recursion depth is bounded by input nesting depth.
//! - **Resume offsets point just past the value**: past a closing quote,
//!   brace, or bracket, and at a scalar's unconsumed terminator. A caller
//!   re-entering the dispatcher right after a sibling value may therefore be
//!   sitting on `}`, `,`, or `]`, which is why the dispatcher's skip set
//!   includes all three.
//! - **Fresh tree per call**: nothing persists between invocations, so the
//!   view for a given prefix is identical however the text arrived.

use serde::de::DeserializeOwned;
use serde_json::{Map, Value};

use crate::error::{Error, Result};

/// Recover the best-effort value from raw completion output and render it
/// canonically.
///
/// This is the full pipeline: [`crate::extract_payload`] isolates the
/// structured span, the parser builds the value tree, and
/// [`crate::render`] encodes it deterministically. Every input produces a
/// syntactically valid encoding — `"{}"`, or `"null"` for very early or
/// structure-free prefixes.
///
/// # Examples
///
/// ```
/// use salvage_core::parse;
///
/// assert_eq!(parse("").unwrap(), "null");
/// assert_eq!(parse("{ \"answer\": 4").unwrap(), r#"{"answer":4}"#);
/// ```
pub fn parse(raw: &str) -> Result<String> {
    crate::render::render(&parse_to_value(raw))
}

/// Recover the best-effort value tree from raw completion output.
///
/// Same pipeline as [`parse`] but stops at the [`Value`], for callers that
/// want to inspect or transform the tree instead of re-encoding it. An
/// empty or structure-free input yields [`Value::Null`].
///
/// ```
/// let v = salvage_core::parse_to_value("no structure here");
/// assert!(v.is_null());
/// ```
pub fn parse_to_value(raw: &str) -> Value {
    let payload = crate::extract::extract_payload(raw);
    let (value, _) = parse_value(&payload, 0);
    value.unwrap_or(Value::Null)
}

/// Recover a typed view of raw completion output.
///
/// Parses best-effort, then deserializes the tree into `T`. Fields the
/// stream has not produced yet are simply absent, so prefix-friendly
/// target types use `Option` or `#[serde(default)]` for anything that may
/// still be in flight.
///
/// # Examples
///
/// ```
/// use serde::Deserialize;
/// use salvage_core::parse_into;
///
/// #[derive(Deserialize)]
/// struct Answer {
///     fact: String,
/// }
///
/// let answer: Answer = parse_into(r#"{ "fact": "water is wet", "conf"#).unwrap();
/// assert_eq!(answer.fact, "water is wet");
/// ```
pub fn parse_into<T: DeserializeOwned>(raw: &str) -> Result<T> {
    serde_json::from_value(parse_to_value(raw)).map_err(Error::Extract)
}

/// The dispatcher: parse the next value in `text` starting at byte offset
/// `from`.
///
/// Skips insignificant characters — space, tab, newline, and the trailing
/// separators `}`, `,`, `]` a caller may still be sitting on — then
/// dispatches on the first significant one: `{` to the object parser, `[`
/// to the array parser, `"` to the string parser, anything else to the
/// scalar parser. Returns the value and the offset to resume scanning at;
/// `None` if the text ran out before any value started.
///
/// This is the entry point for payload-level text that needs no narrative
/// stripping (root arrays included, which [`parse`] never sees because the
/// preprocessor keys on `{`):
///
/// ```
/// use salvage_core::parse_value;
/// use serde_json::json;
///
/// let (value, _) = parse_value("[ true, false, t", 0);
/// assert_eq!(value.unwrap(), json!([true, false, true]));
/// ```
pub fn parse_value(text: &str, from: usize) -> (Option<Value>, usize) {
    let tail = text.get(from..).unwrap_or("");
    for (off, ch) in tail.char_indices() {
        let at = from + off;
        match ch {
            ' ' | '\t' | '\n' | '}' | ',' | ']' => {}
            '{' => {
                let (map, next) = parse_object(text, at + 1);
                return (Some(Value::Object(map)), next);
            }
            '[' => {
                let (items, next) = parse_array(text, at + 1);
                return (Some(Value::Array(items)), next);
            }
            '"' => {
                let (string, next) = parse_string(text, at);
                return (Some(Value::String(string)), next);
            }
            _ => return parse_scalar(text, at),
        }
    }
    (None, text.len())
}

#[derive(PartialEq)]
enum ObjectState {
    LookingForKey,
    InKey,
    LookingForColon,
    LookingForValue,
}

/// Parse object members starting just past `{`.
///
/// A small state machine: hunt for a `"` that opens a key, accumulate the
/// key, hunt for the colon, then delegate to [`parse_value`] and loop.
/// `}` in any state stops parsing and returns the map built so far; stray
/// characters between tokens are ignored.
///
/// Truncation rules: a key that never reached its colon is discarded
/// entirely; a key whose colon was seen but whose value never arrived is
/// kept, bound to null. Duplicate keys overwrite (last write wins).
fn parse_object(text: &str, from: usize) -> (Map<String, Value>, usize) {
    let mut map = Map::new();
    let mut state = ObjectState::LookingForKey;
    let mut key = String::new();
    let mut prev = '\0';
    let mut at = from;

    while let Some(ch) = char_at(text, at) {
        if ch == '}' {
            return (map, at + 1);
        }
        match state {
            ObjectState::LookingForKey => {
                if ch == '"' {
                    state = ObjectState::InKey;
                    key.clear();
                }
            }
            ObjectState::InKey => {
                // Keys keep their characters raw; only an unescaped quote
                // (previous char not a backslash) closes one.
                if ch == '"' && prev != '\\' {
                    state = ObjectState::LookingForColon;
                } else {
                    key.push(ch);
                }
            }
            ObjectState::LookingForColon => {
                if ch == ':' {
                    state = ObjectState::LookingForValue;
                }
            }
            ObjectState::LookingForValue => {
                let (value, next) = parse_value(text, at);
                map.insert(key.clone(), value.unwrap_or(Value::Null));
                state = ObjectState::LookingForKey;
                prev = ch;
                at = next;
                continue;
            }
        }
        prev = ch;
        at += ch.len_utf8();
    }

    // Text ran out with a colon seen but no value started.
    if state == ObjectState::LookingForValue {
        map.insert(key, Value::Null);
    }
    (map, text.len())
}

/// Parse array elements starting just past `[`.
///
/// Skips whitespace and commas between elements, so trailing and doubled
/// commas are harmless. A stray `[` is skipped only while the array is
/// still empty; after the first element it starts a nested array instead.
/// `]` stops parsing and returns the elements gathered so far.
fn parse_array(text: &str, from: usize) -> (Vec<Value>, usize) {
    let mut items = Vec::new();
    let mut found_value = false;
    let mut at = from;

    while let Some(ch) = char_at(text, at) {
        match ch {
            ']' => return (items, at + 1),
            ',' | ' ' | '\n' | '\t' => at += 1,
            '[' if !found_value => at += 1,
            _ => {
                found_value = true;
                let (value, next) = parse_value(text, at);
                items.push(value.unwrap_or(Value::Null));
                at = next;
            }
        }
    }
    (items, text.len())
}

enum StringState {
    Starting,
    InString,
    FoundSlash,
}

/// Parse a quoted string starting at its opening `"`.
///
/// Decodes the escapes `\"`, `\n`, `\t`, and `\\`; every other escape is
/// preserved literally as backslash-plus-character (`\u` sequences are
/// intentionally not decoded). An unescaped `"` ends the string; end of
/// text returns whatever accumulated, dropping a dangling trailing
/// backslash.
fn parse_string(text: &str, from: usize) -> (String, usize) {
    let mut out = String::new();
    let mut state = StringState::Starting;

    let tail = text.get(from..).unwrap_or("");
    for (off, ch) in tail.char_indices() {
        match state {
            StringState::Starting => {
                if ch == '"' {
                    state = StringState::InString;
                }
            }
            StringState::InString => match ch {
                '\\' => state = StringState::FoundSlash,
                '"' => return (out, from + off + 1),
                _ => out.push(ch),
            },
            StringState::FoundSlash => {
                match ch {
                    '"' => out.push('"'),
                    'n' => out.push('\n'),
                    't' => out.push('\t'),
                    '\\' => out.push('\\'),
                    other => {
                        out.push('\\');
                        out.push(other);
                    }
                }
                state = StringState::InString;
            }
        }
    }
    (out, text.len())
}

#[derive(Clone, Copy, PartialEq)]
enum LiteralKind {
    Number,
    Boolean,
    Null,
}

/// Parse a number, boolean, or null literal.
///
/// Skips leading whitespace, then consumes characters until a terminator
/// (`,`, `}`, `]`, space, tab, newline — left unconsumed) or end of text.
/// Classification runs per character:
///
/// - digits, `-`, `.` collect into a numeric run; a `.` anywhere makes it a
///   float, otherwise an integer (so `-0` parses to integer `0`, the sign
///   dropped)
/// - `t`/`f` locks in a boolean whose value is decided by that first
///   character alone — `t` is already true, the rest of the spelling is
///   never checked
/// - `n` locks in null the same way
///
/// A run that never classifies (pure junk) yields `None`.
fn parse_scalar(text: &str, from: usize) -> (Option<Value>, usize) {
    let mut kind: Option<LiteralKind> = None;
    let mut digits = String::new();
    let mut truth: Option<bool> = None;
    let mut in_run = false;
    let mut end = text.len();

    let tail = text.get(from..).unwrap_or("");
    for (off, ch) in tail.char_indices() {
        if in_run {
            if matches!(ch, ',' | '}' | ']' | ' ' | '\n' | '\t') {
                end = from + off;
                break;
            }
        } else if matches!(ch, ' ' | '\n' | '\t') {
            continue;
        }
        in_run = true;

        if ch.is_ascii_digit() || ch == '-' || ch == '.' {
            kind = Some(LiteralKind::Number);
            digits.push(ch);
        } else if ch == 't' || ch == 'f' || kind == Some(LiteralKind::Boolean) {
            kind = Some(LiteralKind::Boolean);
            truth.get_or_insert(ch == 't');
        } else if ch == 'n' || kind == Some(LiteralKind::Null) {
            kind = Some(LiteralKind::Null);
        }
    }

    let value = match kind {
        Some(LiteralKind::Number) => Some(parse_number(&digits)),
        Some(LiteralKind::Boolean) => Some(Value::Bool(truth.unwrap_or(false))),
        Some(LiteralKind::Null) => Some(Value::Null),
        None => None,
    };
    (value, end)
}

/// Turn a collected numeric run into a number value. Runs that fail to
/// parse fall back to zero; a float run that overflows f64 becomes null
/// (the tree never holds a non-finite number).
fn parse_number(run: &str) -> Value {
    if run.contains('.') {
        let float = run.parse::<f64>().unwrap_or(0.0);
        serde_json::Number::from_f64(float)
            .map(Value::Number)
            .unwrap_or(Value::Null)
    } else {
        Value::Number(run.parse::<i64>().unwrap_or(0).into())
    }
}

/// First char at byte offset `at`, if any. Offsets handed around by the
/// parsers always sit on char boundaries; out-of-range offsets read as
/// end of text.
fn char_at(text: &str, at: usize) -> Option<char> {
    text.get(at..).and_then(|rest| rest.chars().next())
}
