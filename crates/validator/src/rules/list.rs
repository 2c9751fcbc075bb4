//! Membership rule

use serde_json::Value;
use std::borrow::Cow;

use crate::foundation::ValidationError;
use crate::foundation::value::{display, stripped};
use crate::macros::rule;

rule! {
    /// Passes when the value is one of the permitted values.
    ///
    /// Values are compared with JSON equality, so `4` and `"4"` differ.
    ///
    /// # Examples
    ///
    /// ```
    /// use formcheck_validator::prelude::*;
    /// use serde_json::json;
    ///
    /// let rule = is_in_list([1, 2, 3, 4, 5]);
    /// assert!(rule.passes(&json!(4)));
    /// assert!(!rule.passes(&json!(10)));
    ///
    /// let colours = is_in_list(["red", "green"]).strip();
    /// assert!(colours.passes(&json!(" red ")));
    /// ```
    pub IsInList {
        /// Permitted values.
        permitted: Vec<Value>,
    } + strip;
    check(self, value) {
        let candidate = if self.strip {
            stripped(value)
        } else {
            Cow::Borrowed(value)
        };
        self.permitted.contains(&*candidate)
    }
    failure(self, value) {
        let value = display(value);
        ValidationError::new(
            "in_list",
            format!("Value of `{value}` is not within the list"),
        )
        .with_param("value", value.into_owned())
    }
    new(permitted: impl IntoIterator<Item = impl Into<Value>>) {
        permitted: permitted.into_iter().map(Into::into).collect(),
    }
    fn is_in_list;
}
