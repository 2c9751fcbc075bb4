//! Fields: a named value and the rules it must satisfy.

use serde_json::Value;
use std::ops::Index;

use crate::foundation::{IntoRules, Rule};

// ============================================================================
// FIELD
// ============================================================================

/// A named value with an ordered list of rules.
///
/// Rules run in the order they were appended. By default evaluation stops
/// at the first failing rule; call
/// [`stop_on_first_error(false)`](Field::stop_on_first_error) to collect
/// every failure.
///
/// # Examples
///
/// ```
/// use formcheck_validator::prelude::*;
///
/// let outcome = Field::new("foo", "bar")
///     .append(rules![is_length_between(1, 1), is_email()])
///     .run();
///
/// assert!(!outcome.passed);
/// assert_eq!(outcome.errors, ["String `bar` length is not within `1` and `1`"]);
/// ```
#[derive(Debug)]
pub struct Field {
    title: String,
    value: Value,
    stop_on_first_error: bool,
    rules: Vec<Box<dyn Rule>>,
}

impl Field {
    /// Creates a field with no rules that stops at the first error.
    pub fn new(title: impl Into<String>, value: impl Into<Value>) -> Self {
        Self {
            title: title.into(),
            value: value.into(),
            stop_on_first_error: true,
            rules: Vec::new(),
        }
    }

    /// Sets whether evaluation stops at the first failing rule.
    #[must_use = "builder methods must be chained or built"]
    pub fn stop_on_first_error(mut self, stop: bool) -> Self {
        self.stop_on_first_error = stop;
        self
    }

    /// Appends one rule or a sequence of rules.
    #[must_use = "builder methods must be chained or built"]
    pub fn append(mut self, rules: impl IntoRules) -> Self {
        self.push(rules);
        self
    }

    /// Appends one rule or a sequence of rules in place.
    pub fn push(&mut self, rules: impl IntoRules) -> &mut Self {
        self.rules.extend(rules.into_rules());
        self
    }

    /// Evaluates the rules against the value.
    #[must_use = "validation outcome must be checked"]
    pub fn run(&self) -> FieldOutcome {
        let mut errors = Vec::new();

        for rule in &self.rules {
            if let Err(error) = rule.run(&self.value) {
                tracing::trace!(field = %self.title, code = %error.code, "rule failed");
                errors.push(error.into_message());
                if self.stop_on_first_error {
                    break;
                }
            }
        }

        let passed = errors.is_empty();
        tracing::debug!(
            field = %self.title,
            passed,
            errors = errors.len(),
            "field validated"
        );

        FieldOutcome { passed, errors }
    }

    /// The field's title.
    #[must_use]
    pub fn title(&self) -> &str {
        &self.title
    }

    /// The value under validation.
    #[must_use]
    pub fn value(&self) -> &Value {
        &self.value
    }

    /// Whether evaluation stops at the first failing rule.
    #[must_use]
    pub fn stops_on_first_error(&self) -> bool {
        self.stop_on_first_error
    }

    /// The appended rules, in evaluation order.
    #[must_use]
    pub fn rules(&self) -> &[Box<dyn Rule>] {
        &self.rules
    }

    /// Number of appended rules.
    #[must_use]
    pub fn len(&self) -> usize {
        self.rules.len()
    }

    /// Returns true if no rules were appended.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }

    /// The rule at `index`, if any.
    #[must_use]
    pub fn get(&self, index: usize) -> Option<&dyn Rule> {
        self.rules.get(index).map(|rule| &**rule)
    }

    /// Iterates over the rules in evaluation order.
    pub fn iter(&self) -> impl Iterator<Item = &dyn Rule> {
        self.rules.iter().map(|rule| &**rule)
    }
}

impl Index<usize> for Field {
    type Output = dyn Rule;

    fn index(&self, index: usize) -> &Self::Output {
        &*self.rules[index]
    }
}

// ============================================================================
// OUTCOME
// ============================================================================

/// Result of running a field's rules.
///
/// `errors` is empty iff `passed` is true.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FieldOutcome {
    /// Whether every evaluated rule passed.
    pub passed: bool,
    /// Failure messages in rule order.
    pub errors: Vec<String>,
}

impl FieldOutcome {
    /// Splits into `(passed, errors)`.
    #[must_use]
    pub fn into_parts(self) -> (bool, Vec<String>) {
        (self.passed, self.errors)
    }
}

// ============================================================================
// TESTS
// ============================================================================
