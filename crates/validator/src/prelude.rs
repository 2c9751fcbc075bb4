//! Prelude module for convenient imports.
//!
//! `use formcheck_validator::prelude::*;` brings in the traits, the field
//! and collection types, every built-in rule with its factory function, and
//! the [`rules!`](crate::rules!) macro.
//!
//! # Examples
//!
//! ```
//! use formcheck_validator::prelude::*;
//!
//! let field = Field::new("age", 42).append(is_type(ValueKind::Integer));
//! assert!(field.run().passed);
//! ```

// ============================================================================
// FOUNDATION: Core traits, errors, values
// ============================================================================

pub use crate::foundation::{
    IntoRules, Rule, RuleError, RuleOptions, RuleResult, ValidationError, ValueKind,
};

// ============================================================================
// FIELDS AND COLLECTIONS
// ============================================================================

pub use crate::collection::{CollatedRecord, Collection, IntoFields, Validator};
pub use crate::field::{Field, FieldOutcome};

// ============================================================================
// RULES: All built-in rules and the list macro
// ============================================================================

pub use crate::rules;
pub use crate::rules::{
    IsInList, IsLength, IsLengthBetween, IsRequired, IsType, Matches, Regex, is_alpha,
    is_alpha_numeric, is_email, is_in_list, is_length, is_length_between, is_numeric, is_required,
    is_type, matches, regex,
};
