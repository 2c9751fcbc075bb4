//! Equality rule
//!
//! Commonly used for password confirmation.

use serde_json::Value;

use crate::foundation::ValidationError;
use crate::foundation::value::display;
use crate::macros::rule;

rule! {
    /// Passes when the value equals `expected` exactly.
    ///
    /// No trimming or case folding is applied.
    ///
    /// # Examples
    ///
    /// ```
    /// use formcheck_validator::prelude::*;
    /// use serde_json::json;
    ///
    /// let rule = matches("merp");
    /// assert!(rule.passes(&json!("merp")));
    /// assert!(!rule.passes(&json!("prem")));
    /// assert!(!rule.passes(&json!("Merp")));
    /// ```
    pub Matches {
        /// The value the field must equal.
        expected: Value,
    };
    check(self, value) { *value == self.expected }
    failure(self, value) {
        let value = display(value);
        let expected = display(&self.expected);
        ValidationError::new(
            "matches",
            format!("Values `{value}` and `{expected}` do not match."),
        )
        .with_param("value", value.into_owned())
        .with_param("match", expected.into_owned())
    }
    new(expected: impl Into<Value>) { expected: expected.into() }
    fn matches;
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::foundation::Rule;
    use serde_json::json;

    #[test]
    fn test_matches() {
        let rule = matches("merp");
        assert!(rule.run(&json!("merp")).is_ok());
        assert!(rule.run(&json!("prem")).is_err());
    }

    #[test]
    fn test_no_trimming() {
        assert!(!matches("root").passes(&json!(" root")));
    }

    #[test]
    fn test_non_string_values() {
        assert!(matches(4).passes(&json!(4)));
        assert!(!matches(4).passes(&json!("4")));
    }

    #[test]
    fn test_message() {
        let err = matches("root").run(&json!("toor")).unwrap_err();
        assert_eq!(err.code, "matches");
        assert_eq!(err.message, "Values `toor` and `root` do not match.");
        assert_eq!(err.param("match"), Some("root"));
    }

    #[test]
    fn test_custom_message() {
        let err = matches("root")
            .with_message("Passwords differ")
            .run(&json!("toor"))
            .unwrap_err();
        assert_eq!(err.message, "Passwords differ");
    }

    #[test]
    fn test_equality_and_clone() {
        let rule = matches("root").with_message("Passwords differ");
        assert_eq!(rule.clone(), rule);
        assert_ne!(rule, matches("root"));
    }

    #[test]
    fn test_pass_on_blank() {
        assert!(matches("root").pass_on_blank().passes(&json!(" ")));
        assert!(!matches("root").passes(&json!(" ")));
    }
}
