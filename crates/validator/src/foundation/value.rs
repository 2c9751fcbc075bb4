//! Helpers for inspecting field values.
//!
//! Field values are [`serde_json::Value`]s. Rules read them through the
//! helpers here so blank detection, display and length are consistent
//! across every rule.

use serde_json::Value;
use std::borrow::Cow;
use std::fmt;

// ============================================================================
// VALUE KIND
// ============================================================================

/// The runtime kind of a field value.
///
/// # Examples
///
/// ```
/// use formcheck_validator::ValueKind;
/// use serde_json::json;
///
/// assert_eq!(ValueKind::of(&json!([1, 2])), ValueKind::List);
/// assert_eq!(ValueKind::of(&json!({"a": 1})), ValueKind::Mapping);
/// assert_eq!(ValueKind::of(&json!(1.5)), ValueKind::Float);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ValueKind {
    Null,
    Boolean,
    Integer,
    Float,
    String,
    List,
    Mapping,
}

impl ValueKind {
    /// Classifies a value.
    #[must_use]
    pub fn of(value: &Value) -> Self {
        match value {
            Value::Null => Self::Null,
            Value::Bool(_) => Self::Boolean,
            Value::Number(n) if n.is_i64() || n.is_u64() => Self::Integer,
            Value::Number(_) => Self::Float,
            Value::String(_) => Self::String,
            Value::Array(_) => Self::List,
            Value::Object(_) => Self::Mapping,
        }
    }

    /// Lowercase name used in messages.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Null => "null",
            Self::Boolean => "boolean",
            Self::Integer => "integer",
            Self::Float => "float",
            Self::String => "string",
            Self::List => "list",
            Self::Mapping => "mapping",
        }
    }
}

impl fmt::Display for ValueKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ============================================================================
// VALUE HELPERS
// ============================================================================

/// Returns true for `null` and for strings that are empty after trimming.
#[must_use]
pub fn is_blank(value: &Value) -> bool {
    match value {
        Value::Null => true,
        Value::String(s) => s.trim().is_empty(),
        _ => false,
    }
}

/// Renders a value for a message: strings raw, everything else as JSON.
#[must_use]
pub fn display(value: &Value) -> Cow<'_, str> {
    match value {
        Value::String(s) => Cow::Borrowed(s),
        other => Cow::Owned(other.to_string()),
    }
}

/// Text a pattern can be matched against.
///
/// Null, lists and mappings have no text.
#[must_use]
pub fn text(value: &Value) -> Option<Cow<'_, str>> {
    match value {
        Value::String(s) => Some(Cow::Borrowed(s)),
        Value::Number(n) => Some(Cow::Owned(n.to_string())),
        Value::Bool(b) => Some(Cow::Owned(b.to_string())),
        Value::Null | Value::Array(_) | Value::Object(_) => None,
    }
}

/// Length of a value: chars for strings, elements for lists and mappings,
/// display width for other scalars.
///
/// With `strip`, strings are trimmed first.
#[must_use]
pub fn length(value: &Value, strip: bool) -> usize {
    match value {
        Value::String(s) if strip => s.trim().chars().count(),
        Value::String(s) => s.chars().count(),
        Value::Array(items) => items.len(),
        Value::Object(map) => map.len(),
        other => display(other).chars().count(),
    }
}

/// Trims string values; other values are returned unchanged.
#[must_use]
pub fn stripped(value: &Value) -> Cow<'_, Value> {
    match value {
        Value::String(s) if s.trim().len() != s.len() => {
            Cow::Owned(Value::String(s.trim().to_owned()))
        }
        other => Cow::Borrowed(other),
    }
}

// ============================================================================
// TESTS
// ============================================================================
