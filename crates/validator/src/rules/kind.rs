//! Type rule

use crate::foundation::{ValidationError, ValueKind};
use crate::macros::rule;

rule! {
    /// Passes when the value is of the expected [`ValueKind`].
    ///
    /// # Examples
    ///
    /// ```
    /// use formcheck_validator::prelude::*;
    /// use serde_json::json;
    ///
    /// let rule = is_type(ValueKind::List);
    /// assert!(rule.passes(&json!([])));
    ///
    /// let err = rule.run(&json!({})).unwrap_err();
    /// assert_eq!(err.message, "Type of `mapping` is not of type `list`");
    /// ```
    pub IsType {
        /// The kind the value must have.
        expected: ValueKind,
    };
    check(self, value) { ValueKind::of(value) == self.expected }
    failure(self, value) {
        let actual = ValueKind::of(value);
        ValidationError::new(
            "type_mismatch",
            format!("Type of `{actual}` is not of type `{}`", self.expected),
        )
        .with_param("expected", self.expected.as_str())
        .with_param("actual", actual.as_str())
    }
    new(expected: ValueKind) { expected }
    fn is_type;
}
