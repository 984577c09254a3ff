//! LaTeX special-character escaping over the finished resume record.
//!
//! # Contract
//! - One combined forward pass per string, never sequential independent
//!   substitutions: replacement text is emitted once and never rescanned.
//! - At each position the longest matching source pattern wins. Every current
//!   source is a single character, but the matcher must not assume that; a
//!   future multi-character source slots into the table unchanged.
//! - The traversal is total over the record's nested shape: mapping values
//!   and sequence elements recurse, string leaves are escaped, mapping keys
//!   and non-string leaves pass through untouched.
//! - Invoked exactly once, on the entire finished record, before rendering.

use serde_json::Value;

use crate::errors::AppError;
use crate::models::resume::Resume;

// ────────────────────────────────────────────────────────────────────────────
// Escape table
// ────────────────────────────────────────────────────────────────────────────

/// Ordered `(source, replacement)` escape table.
///
/// Invariant: replacements are never rescanned (single forward pass), so a
/// replacement containing `\` or `{}` cannot be re-escaped.
const LATEX_ESCAPES: &[(&str, &str)] = &[
    ("\\", "\\\\"),
    ("&", "\\&"),
    ("%", "\\%"),
    ("$", "\\$"),
    ("#", "\\#"),
    ("_", "\\_"),
    ("{", "\\{"),
    ("}", "\\}"),
    ("~", "\\textasciitilde{}"),
    ("^", "\\textasciicircum{}"),
];

/// Returns the longest table entry whose source pattern prefixes `s`.
fn longest_match(s: &str) -> Option<(&'static str, &'static str)> {
    LATEX_ESCAPES
        .iter()
        .copied()
        .filter(|(pattern, _)| s.starts_with(pattern))
        .max_by_key(|(pattern, _)| pattern.len())
}

/// Escapes every LaTeX-special character in `input` in a single forward pass.
pub fn escape_str(input: &str) -> String {
    let mut out = String::with_capacity(input.len());
    let mut rest = input;
    while let Some(ch) = rest.chars().next() {
        if let Some((pattern, replacement)) = longest_match(rest) {
            out.push_str(replacement);
            rest = &rest[pattern.len()..];
        } else {
            out.push(ch);
            rest = &rest[ch.len_utf8()..];
        }
    }
    out
}

// ────────────────────────────────────────────────────────────────────────────
// Recursive traversal
// ────────────────────────────────────────────────────────────────────────────

/// Produces a deep copy of `value` with every string leaf escaped.
///
/// Mapping keys are internal field names, not user data, and pass through
/// untouched.
pub fn sanitize_value(value: &Value) -> Value {
    match value {
        Value::String(s) => Value::String(escape_str(s)),
        Value::Array(items) => Value::Array(items.iter().map(sanitize_value).collect()),
        Value::Object(map) => Value::Object(
            map.iter()
                .map(|(key, item)| (key.clone(), sanitize_value(item)))
                .collect(),
        ),
        other => other.clone(),
    }
}

/// Serializes the collected record and returns its sanitized copy.
/// The input record is not consumed or mutated; raw data stays
/// introspectable up to this point.
pub fn sanitize_resume(resume: &Resume) -> Result<Value, AppError> {
    let raw = serde_json::to_value(resume)
        .map_err(|e| AppError::Internal(anyhow::anyhow!("failed to serialize resume: {e}")))?;
    Ok(sanitize_value(&raw))
}

// ────────────────────────────────────────────────────────────────────────────
// Tests
// ────────────────────────────────────────────────────────────────────────────
