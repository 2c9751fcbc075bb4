//! Presence rule

use serde_json::Value;

use crate::foundation::ValidationError;
use crate::macros::rule;

rule! {
    /// Passes unless the value is null or the empty string.
    ///
    /// Whitespace-only strings, `0`, `false` and empty lists count as present.
    /// Combine with [`IsLengthBetween`](super::IsLengthBetween) and `strip` to
    /// reject whitespace.
    pub IsRequired {};
    check(self, value) {
        match value {
            Value::Null => false,
            Value::String(s) => !s.is_empty(),
            _ => true,
        }
    }
    failure(self, value) { ValidationError::new("required", "This field requires a value.") }
    new() {}
    fn is_required;
}
