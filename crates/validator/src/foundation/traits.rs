//! Core traits for the validation system
//!
//! This module defines the [`Rule`] capability every rule implements, the
//! shared [`RuleOptions`], and [`IntoRules`], which is what
//! [`Field::append`](crate::Field::append) accepts.

use serde_json::Value;

use super::RuleResult;
use super::error::ValidationError;
use super::value::is_blank;

// ============================================================================
// RULE OPTIONS
// ============================================================================

/// Options shared by every rule.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RuleOptions {
    /// Replaces the rule's templated message on failure.
    pub message: Option<String>,

    /// Treat blank values (null or whitespace-only strings) as passing.
    pub pass_on_blank: bool,
}

// ============================================================================
// CORE RULE TRAIT
// ============================================================================

/// A single predicate over one field value.
///
/// Implementors describe *what* to check ([`check`](Rule::check)) and how to
/// describe a failure ([`failure`](Rule::failure)). The provided
/// [`run`](Rule::run) applies the blank-skip and custom-message options the
/// same way for every rule.
///
/// Rules are immutable once built: `run` takes `&self` and returns the
/// failure rather than storing it, so one rule may be evaluated any number
/// of times, from any thread.
///
/// # Examples
///
/// ```
/// use formcheck_validator::{Rule, RuleOptions, ValidationError};
/// use serde_json::Value;
///
/// #[derive(Debug, Default)]
/// struct IsTrue {
///     options: RuleOptions,
/// }
///
/// impl Rule for IsTrue {
///     fn options(&self) -> &RuleOptions {
///         &self.options
///     }
///
///     fn check(&self, value: &Value) -> bool {
///         value == &Value::Bool(true)
///     }
///
///     fn failure(&self, _value: &Value) -> ValidationError {
///         ValidationError::new("is_true", "This must be checked.")
///     }
/// }
///
/// assert!(IsTrue::default().passes(&Value::Bool(true)));
/// assert!(IsTrue::default().run(&Value::Bool(false)).is_err());
/// ```
pub trait Rule: std::fmt::Debug + Send + Sync {
    /// The options this rule was configured with.
    fn options(&self) -> &RuleOptions;

    /// The predicate. Called only when the blank-skip did not apply.
    fn check(&self, value: &Value) -> bool;

    /// Describes a failure using the rule's message template.
    fn failure(&self, value: &Value) -> ValidationError;

    /// Evaluates the rule against a value.
    ///
    /// # Errors
    ///
    /// Returns the failure when the predicate does not hold. The message is
    /// the configured one if set, the templated one otherwise.
    fn run(&self, value: &Value) -> RuleResult {
        let options = self.options();
        if options.pass_on_blank && is_blank(value) {
            return Ok(());
        }
        if self.check(value) {
            return Ok(());
        }
        let error = self.failure(value);
        Err(match &options.message {
            Some(message) => error.with_message(message.clone()),
            None => error,
        })
    }

    /// Returns true when [`run`](Rule::run) succeeds.
    fn passes(&self, value: &Value) -> bool {
        self.run(value).is_ok()
    }
}

impl<R: Rule + ?Sized> Rule for Box<R> {
    fn options(&self) -> &RuleOptions {
        (**self).options()
    }

    fn check(&self, value: &Value) -> bool {
        (**self).check(value)
    }

    fn failure(&self, value: &Value) -> ValidationError {
        (**self).failure(value)
    }

    fn run(&self, value: &Value) -> RuleResult {
        (**self).run(value)
    }
}

// ============================================================================
// INTO RULES
// ============================================================================

/// Anything that can be appended to a field: one rule or an ordered
/// sequence of rules.
///
/// Use the [`rules!`](crate::rules) macro for a sequence of different rule
/// types.
pub trait IntoRules {
    /// Converts into boxed rules, preserving order.
    fn into_rules(self) -> Vec<Box<dyn Rule>>;
}

impl<R: Rule + 'static> IntoRules for R {
    fn into_rules(self) -> Vec<Box<dyn Rule>> {
        vec![Box::new(self)]
    }
}

impl<R: Rule + 'static> IntoRules for Vec<R> {
    fn into_rules(self) -> Vec<Box<dyn Rule>> {
        self.into_iter()
            .map(|rule| Box::new(rule) as Box<dyn Rule>)
            .collect()
    }
}

impl<R: Rule + 'static, const N: usize> IntoRules for [R; N] {
    fn into_rules(self) -> Vec<Box<dyn Rule>> {
        self.into_iter()
            .map(|rule| Box::new(rule) as Box<dyn Rule>)
            .collect()
    }
}

// ============================================================================
// TESTS
// ============================================================================
