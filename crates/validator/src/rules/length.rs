//! Length rules
//!
//! Length is measured in Unicode scalar values (chars) for strings and in
//! elements for lists and mappings. Other scalars are measured by their
//! display form. With `strip`, strings are trimmed before measuring; the
//! message always shows the value as given.

use crate::foundation::ValidationError;
use crate::foundation::value::{display, length};
use crate::macros::rule;

// ============================================================================
// EXACT LENGTH
// ============================================================================

rule! {
    /// Passes when the value's length equals `length`.
    ///
    /// # Examples
    ///
    /// ```
    /// use formcheck_validator::prelude::*;
    /// use serde_json::json;
    ///
    /// assert!(is_length(3).passes(&json!("abc")));
    /// assert!(!is_length(2).passes(&json!("abc")));
    /// assert!(is_length(3).strip().passes(&json!(" abc ")));
    /// ```
    pub IsLength {
        /// Required length.
        length: usize,
    } + strip;
    check(self, value) { length(value, self.strip) == self.length }
    failure(self, value) {
        let value = display(value);
        ValidationError::new(
            "length",
            format!("String `{value}` length does not equal `{}`", self.length),
        )
        .with_param("value", value.into_owned())
        .with_param("length", self.length.to_string())
    }
    new(length: usize) { length }
    fn is_length;
}

// ============================================================================
// LENGTH BETWEEN
// ============================================================================

rule! {
    /// Passes when `min <= length <= max`.
    ///
    /// Both bounds are inclusive. A range with `min > max` is accepted and never
    /// passes.
    ///
    /// # Examples
    ///
    /// ```
    /// use formcheck_validator::prelude::*;
    /// use serde_json::json;
    ///
    /// let rule = is_length_between(3, 10);
    /// assert!(rule.passes(&json!("wilhelm")));
    /// assert!(!rule.passes(&json!("wi")));
    /// ```
    pub IsLengthBetween {
        /// Minimum length (inclusive).
        min: usize,
        /// Maximum length (inclusive).
        max: usize,
    } + strip;
    check(self, value) {
        let len = length(value, self.strip);
        self.min <= len && len <= self.max
    }
    failure(self, value) {
        let value = display(value);
        ValidationError::new(
            "length_between",
            format!(
                "String `{value}` length is not within `{}` and `{}`",
                self.min, self.max
            ),
        )
        .with_param("value", value.into_owned())
        .with_param("min", self.min.to_string())
        .with_param("max", self.max.to_string())
    }
    new(min: usize, max: usize) { min, max }
    fn is_length_between;
}

// ============================================================================
// TESTS
// ============================================================================
