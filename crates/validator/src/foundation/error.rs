//! Error types
//!
//! Two kinds of failure never mix:
//!
//! - [`ValidationError`] is the expected, data-dependent outcome of a rule
//!   that did not hold. It is returned from [`Rule::run`](super::Rule::run)
//!   and surfaced as a message string through fields and collections.
//! - [`RuleError`] is a configuration mistake (for example a malformed
//!   regular expression) reported when the rule is built.
//!
//! String fields use `Cow<'static, str>` so static codes and messages do not
//! allocate.

use smallvec::SmallVec;
use std::borrow::Cow;
use std::fmt;

// ============================================================================
// VALIDATION ERROR
// ============================================================================

/// Template parameters attached to a failure, in insertion order.
///
/// Rules carry at most three parameters, so they stay inline.
pub type Params = SmallVec<[(Cow<'static, str>, Cow<'static, str>); 3]>;

/// A single rule failure.
///
/// # Examples
///
/// ```
/// use formcheck_validator::ValidationError;
///
/// let error = ValidationError::new("length", "String `bar` length does not equal `1`")
///     .with_param("length", "1");
///
/// assert_eq!(error.code, "length");
/// assert_eq!(error.param("length"), Some("1"));
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationError {
    /// Machine-readable code of the rule that failed.
    ///
    /// Examples: "matches", "length_between", "type_mismatch"
    pub code: Cow<'static, str>,

    /// Human-readable message.
    pub message: Cow<'static, str>,

    /// Parameters the message template was filled with.
    pub params: Params,
}

impl ValidationError {
    /// Creates a new validation error with a code and message.
    pub fn new(code: impl Into<Cow<'static, str>>, message: impl Into<Cow<'static, str>>) -> Self {
        Self {
            code: code.into(),
            message: message.into(),
            params: SmallVec::new(),
        }
    }

    /// Replaces the message, keeping code and parameters.
    #[must_use = "builder methods must be chained or built"]
    pub fn with_message(mut self, message: impl Into<Cow<'static, str>>) -> Self {
        self.message = message.into();
        self
    }

    /// Adds a parameter to the error.
    #[must_use = "builder methods must be chained or built"]
    pub fn with_param(
        mut self,
        key: impl Into<Cow<'static, str>>,
        value: impl Into<Cow<'static, str>>,
    ) -> Self {
        self.params.push((key.into(), value.into()));
        self
    }

    /// Looks up a parameter value by key.
    #[must_use]
    pub fn param(&self, key: &str) -> Option<&str> {
        self.params
            .iter()
            .find(|(k, _)| k.as_ref() == key)
            .map(|(_, v)| v.as_ref())
    }

    /// Consumes the error and returns its message.
    #[must_use]
    pub fn into_message(self) -> String {
        self.message.into_owned()
    }
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.code, self.message)
    }
}

impl std::error::Error for ValidationError {}

// ============================================================================
// RULE CONFIGURATION ERROR
// ============================================================================

/// A rule could not be built from the parameters it was given.
///
/// This is a programmer error, not a validation result: it is returned at
/// construction time and never appears in a field's error list.
#[derive(Debug, Clone, thiserror::Error)]
#[non_exhaustive]
pub enum RuleError {
    /// A regex rule was given an empty pattern.
    #[error("this rule requires a regular expression")]
    EmptyPattern,

    /// The pattern failed to compile.
    #[error("expression `{pattern}` failed to compile: {source}")]
    InvalidPattern {
        pattern: String,
        #[source]
        source: regex::Error,
    },
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_simple_error() {
        let error = ValidationError::new("test", "Test error");
        assert_eq!(error.code, "test");
        assert_eq!(error.message, "Test error");
        assert!(error.params.is_empty());
    }

    #[test]
    fn test_error_with_params() {
        let error = ValidationError::new("length_between", "out of range")
            .with_param("min", "1")
            .with_param("max", "3");

        assert_eq!(error.param("min"), Some("1"));
        assert_eq!(error.param("max"), Some("3"));
        assert_eq!(error.param("value"), None);
    }

    #[test]
    fn test_with_message_keeps_code() {
        let error = ValidationError::new("required", "This field requires a value.")
            .with_param("value", "")
            .with_message("Tell us your name");

        assert_eq!(error.code, "required");
        assert_eq!(error.param("value"), Some(""));
        assert_eq!(error.into_message(), "Tell us your name");
    }

    #[test]
    fn test_display() {
        let error = ValidationError::new("numeric", "This is not a number.");
        assert_eq!(error.to_string(), "numeric: This is not a number.");
    }

    #[test]
    fn test_params_stay_inline() {
        let error = ValidationError::new("length_between", "out of range")
            .with_param("value", "bar")
            .with_param("min", "1")
            .with_param("max", "1");
        assert_eq!(error.params.len(), 3);
        assert!(!error.params.spilled());
    }

    #[test]
    fn test_zero_alloc_static_strings() {
        let error = ValidationError::new("required", "This field requires a value.");
        assert!(matches!(error.code, Cow::Borrowed(_)));
        assert!(matches!(error.message, Cow::Borrowed(_)));
    }

    #[test]
    fn test_rule_error_display() {
        assert_eq!(
            RuleError::EmptyPattern.to_string(),
            "this rule requires a regular expression"
        );

        let pattern = String::from("(");
        let source = regex::Regex::new(&pattern).unwrap_err();
        let error = RuleError::InvalidPattern { pattern, source };
        let message = error.to_string();
        assert!(message.starts_with("expression `(` failed to compile: "));
    }
}
