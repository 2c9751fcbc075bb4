//! Core validation types and traits
//!
//! This module contains the building blocks every rule, field and
//! collection is written against:
//!
//! - **Traits**: [`Rule`], [`IntoRules`]
//! - **Options**: [`RuleOptions`]
//! - **Errors**: [`ValidationError`] for failed rules, [`RuleError`] for
//!   rules that could not be built
//! - **Values**: [`ValueKind`] and the [`value`] helpers
//!
//! # Architecture
//!
//! ## 1. Immutable rules
//!
//! A rule is configured once and never changes. [`Rule::run`] returns the
//! failure instead of recording it, so rules are `Send + Sync` and may be
//! evaluated repeatedly.
//!
//! ## 2. Uniform options
//!
//! Blank-skip and custom messages live in [`RuleOptions`] and are applied by
//! the provided [`Rule::run`], not re-implemented by each rule.
//!
//! ## 3. Two error classes
//!
//! Data that fails a rule yields a [`ValidationError`]. A rule that cannot be
//! built yields a [`RuleError`] at construction time.

pub mod error;
pub mod traits;
pub mod value;

pub use error::{Params, RuleError, ValidationError};
pub use traits::{IntoRules, Rule, RuleOptions};
pub use value::ValueKind;

// ============================================================================
// TYPE ALIASES
// ============================================================================

/// Result of evaluating a single rule.
pub type RuleResult = Result<(), ValidationError>;
