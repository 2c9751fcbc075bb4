//! Regular-expression rules
//!
//! [`Regex`] applies a caller-supplied expression. The email, numeric,
//! alpha and alpha-numeric checks are the same type built with a fixed
//! pattern, code and message, so they get blank-skip and custom messages
//! for free.

use std::sync::LazyLock;

use serde_json::Value;

use crate::foundation::value::{display, text};
use crate::foundation::{Rule, RuleError, RuleOptions, ValidationError};
use crate::macros::impl_rule_options;

static EMAIL_REGEX: LazyLock<regex::Regex> = LazyLock::new(|| {
    regex::Regex::new(r"^[a-zA-Z0-9._%&'()*+]+@[a-zA-Z0-9._%-]+\.[a-zA-Z]{2,6}$")
        .expect("valid regex")
});

static NUMERIC_REGEX: LazyLock<regex::Regex> =
    LazyLock::new(|| regex::Regex::new(r"^[0-9]*$").expect("valid regex"));

static ALPHA_REGEX: LazyLock<regex::Regex> =
    LazyLock::new(|| regex::Regex::new(r"^[a-zA-Z]*$").expect("valid regex"));

static ALPHA_NUMERIC_REGEX: LazyLock<regex::Regex> =
    LazyLock::new(|| regex::Regex::new(r"^[a-zA-Z0-9]*$").expect("valid regex"));

// ============================================================================
// REGEX RULE
// ============================================================================

/// Passes when the expression matches the value's text starting at its
/// first character.
///
/// The expression is not implicitly anchored at the end; add `$` for a full
/// match. `$` only matches at the very end of the text, so a trailing
/// newline is not ignored: `^[0-9]*$` rejects `"123\n"`. Strings are matched
/// as-is, numbers and booleans through their display form. Null, lists and
/// mappings never match.
///
/// # Examples
///
/// ```
/// use formcheck_validator::prelude::*;
/// use serde_json::json;
///
/// let rule = regex("^[0-1]+$").unwrap();
/// assert!(rule.passes(&json!("10")));
/// assert!(!rule.passes(&json!("foo")));
///
/// assert!(regex("").is_err());
/// assert!(regex("(").is_err());
/// ```
#[derive(Debug, Clone)]
pub struct Regex {
    pattern: regex::Regex,
    code: &'static str,
    fixed_message: Option<&'static str>,
    options: RuleOptions,
}

impl Regex {
    /// Compiles `pattern` into a rule.
    ///
    /// # Errors
    ///
    /// Returns [`RuleError::EmptyPattern`] for an empty pattern and
    /// [`RuleError::InvalidPattern`] when it does not compile.
    pub fn new(pattern: &str) -> Result<Self, RuleError> {
        if pattern.is_empty() {
            tracing::warn!("regex rule built without an expression");
            return Err(RuleError::EmptyPattern);
        }

        let compiled = regex::Regex::new(pattern).map_err(|source| {
            tracing::warn!(pattern, error = %source, "regex rule failed to compile");
            RuleError::InvalidPattern {
                pattern: pattern.to_owned(),
                source,
            }
        })?;

        Ok(Self {
            pattern: compiled,
            code: "regex",
            fixed_message: None,
            options: RuleOptions::default(),
        })
    }

    fn preset(pattern: &regex::Regex, code: &'static str, message: &'static str) -> Self {
        Self {
            pattern: pattern.clone(),
            code,
            fixed_message: Some(message),
            options: RuleOptions::default(),
        }
    }

    /// Email address check.
    ///
    /// The local part accepts letters, digits and `._%&'()*+`; the domain
    /// accepts letters, digits and `._%-`, followed by a 2 to 6 letter
    /// top-level domain.
    #[must_use]
    pub fn email() -> Self {
        Self::preset(&EMAIL_REGEX, "email", "This is not a valid email address.")
    }

    /// Digits only (`^[0-9]*$`).
    #[must_use]
    pub fn numeric() -> Self {
        Self::preset(&NUMERIC_REGEX, "numeric", "This is not a number.")
    }

    /// ASCII letters only (`^[a-zA-Z]*$`).
    #[must_use]
    pub fn alpha() -> Self {
        Self::preset(&ALPHA_REGEX, "alpha", "This is not an alpha-only string.")
    }

    /// ASCII letters and digits only (`^[a-zA-Z0-9]*$`).
    #[must_use]
    pub fn alpha_numeric() -> Self {
        Self::preset(
            &ALPHA_NUMERIC_REGEX,
            "alpha_numeric",
            "This is not an alpha-numeric string.",
        )
    }

    /// The source text of the expression.
    #[must_use]
    pub fn as_str(&self) -> &str {
        self.pattern.as_str()
    }
}

impl_rule_options!(Regex);

impl Rule for Regex {
    fn options(&self) -> &RuleOptions {
        &self.options
    }

    fn check(&self, value: &Value) -> bool {
        text(value).is_some_and(|text| {
            self.pattern
                .find(&text)
                .is_some_and(|found| found.start() == 0)
        })
    }

    fn failure(&self, value: &Value) -> ValidationError {
        let pattern = self.pattern.as_str().to_owned();
        let error = match self.fixed_message {
            Some(message) => ValidationError::new(self.code, message),
            None => ValidationError::new(
                self.code,
                format!(
                    "Expression `{pattern}` failed when applied to `{}`",
                    display(value)
                ),
            ),
        };
        error.with_param("pattern", pattern)
    }
}

// ============================================================================
// FACTORIES
// ============================================================================

/// Creates a [`Regex`] rule.
///
/// # Errors
///
/// See [`Regex::new`].
pub fn regex(pattern: &str) -> Result<Regex, RuleError> {
    Regex::new(pattern)
}

/// Creates an email [`Regex`] rule.
#[must_use]
pub fn is_email() -> Regex {
    Regex::email()
}

/// Creates a digits-only [`Regex`] rule.
#[must_use]
pub fn is_numeric() -> Regex {
    Regex::numeric()
}

/// Creates a letters-only [`Regex`] rule.
#[must_use]
pub fn is_alpha() -> Regex {
    Regex::alpha()
}

/// Creates a letters-and-digits [`Regex`] rule.
#[must_use]
pub fn is_alpha_numeric() -> Regex {
    Regex::alpha_numeric()
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;
    use serde_json::json;

    #[test]
    fn test_regex() {
        let rule = regex("^[0-1]+$").unwrap();
        assert!(rule.passes(&json!("1")));
        assert!(rule.passes(&json!("10")));
        assert!(!rule.passes(&json!("foo")));
    }

    #[test]
    fn test_regex_matches_from_start_only() {
        let rule = regex("[0-9]+").unwrap();
        assert!(rule.passes(&json!("123abc")));
        assert!(!rule.passes(&json!("abc123")));
    }

    #[test]
    fn test_regex_on_non_text_values() {
        let rule = regex("^[0-9]+$").unwrap();
        assert!(rule.passes(&json!(42)));
        assert!(!rule.passes(&json!([4, 2])));
        assert!(!rule.passes(&json!(null)));
    }

    #[test]
    fn test_regex_message() {
        let err = regex("^[0-1]+$").unwrap().run(&json!("foo")).unwrap_err();
        assert_eq!(err.code, "regex");
        assert_eq!(
            err.message,
            "Expression `^[0-1]+$` failed when applied to `foo`"
        );
        assert_eq!(err.param("pattern"), Some("^[0-1]+$"));
    }

    #[test]
    fn test_empty_pattern_is_configuration_error() {
        assert!(matches!(regex(""), Err(RuleError::EmptyPattern)));
    }

    #[test]
    fn test_invalid_pattern_is_configuration_error() {
        let err = regex("[a-").unwrap_err();
        match err {
            RuleError::InvalidPattern { pattern, .. } => assert_eq!(pattern, "[a-"),
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[rstest]
    #[case("wilhelm.murdoch@gmail.com", true)]
    #[case("first+tag@sub.example.org", true)]
    #[case(",1320df9d,3.9kd", false)]
    #[case("user@", false)]
    #[case("@example.com", false)]
    #[case("o'brien@example.com", true)]
    #[case("admin@my_host.example.com", true)]
    #[case("first-last@example.com", false)]
    #[case("user@examplecom", false)]
    fn test_is_email(#[case] input: &str, #[case] valid: bool) {
        assert_eq!(is_email().passes(&json!(input)), valid);
    }

    #[rstest]
    #[case(is_numeric(), "1", "b", "This is not a number.")]
    #[case(is_alpha(), "abc", "123", "This is not an alpha-only string.")]
    #[case(is_alpha_numeric(), "abc123", ")(*&^&%^#$", "This is not an alpha-numeric string.")]
    fn test_presets(
        #[case] rule: Regex,
        #[case] good: &str,
        #[case] bad: &str,
        #[case] message: &str,
    ) {
        assert!(rule.passes(&json!(good)));
        let err = rule.run(&json!(bad)).unwrap_err();
        assert_eq!(err.message, message);
    }

    #[test]
    fn test_end_anchor_rejects_trailing_newline() {
        assert!(is_numeric().passes(&json!("123")));
        assert!(!is_numeric().passes(&json!("123\n")));
        assert!(!is_alpha().passes(&json!("abc\n")));
    }

    #[test]
    fn test_as_str_exposes_source() {
        assert_eq!(regex("^[0-1]+$").unwrap().as_str(), "^[0-1]+$");
        assert_eq!(is_numeric().as_str(), "^[0-9]*$");
    }

    #[test]
    fn test_presets_accept_empty_string() {
        assert!(is_numeric().passes(&json!("")));
        assert!(is_alpha().passes(&json!("")));
    }

    #[test]
    fn test_email_message_and_code() {
        let err = is_email().run(&json!("nope")).unwrap_err();
        assert_eq!(err.code, "email");
        assert_eq!(err.message, "This is not a valid email address.");
    }

    #[test]
    fn test_preset_custom_message() {
        let err = is_numeric()
            .with_message("Digits please")
            .run(&json!("x"))
            .unwrap_err();
        assert_eq!(err.code, "numeric");
        assert_eq!(err.message, "Digits please");
    }

    #[test]
    fn test_pass_on_blank() {
        assert!(is_email().pass_on_blank().passes(&json!("  ")));
        assert!(!is_email().passes(&json!("  ")));
    }
}
