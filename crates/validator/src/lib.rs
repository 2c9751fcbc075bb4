//! # formcheck-validator
//!
//! Declarative validation for form-like data: describe named fields, attach
//! rules to each, run them all, and read back pass/fail status with
//! human-readable messages.
//!
//! ## Quick Start
//!
//! ```
//! use formcheck_validator::prelude::*;
//!
//! let mut form = Collection::new().append([
//!     Field::new("username", "wilhelm").append(rules![
//!         is_required(),
//!         is_alpha_numeric(),
//!         is_length_between(3, 10),
//!     ]),
//!     Field::new("email", "not-an-email").append(is_email()),
//! ]);
//!
//! assert!(!form.run());
//! let errors = form.errors().unwrap();
//! assert_eq!(errors["email"], ["This is not a valid email address."]);
//! ```
//!
//! ## Layers
//!
//! - [`Rule`]: one predicate over one value ([`rules`](mod@rules) has the built-ins)
//! - [`Field`]: a named value and its ordered rules
//! - [`Collection`] (alias [`Validator`]): fields evaluated together
//!
//! ## Built-in Rules
//!
//! - **Equality**: [`Matches`](rules::Matches)
//! - **Pattern**: [`Regex`](rules::Regex), [`is_email`](rules::is_email),
//!   [`is_numeric`](rules::is_numeric), [`is_alpha`](rules::is_alpha),
//!   [`is_alpha_numeric`](rules::is_alpha_numeric)
//! - **Presence**: [`IsRequired`](rules::IsRequired)
//! - **Length**: [`IsLength`](rules::IsLength),
//!   [`IsLengthBetween`](rules::IsLengthBetween)
//! - **Membership**: [`IsInList`](rules::IsInList)
//! - **Type**: [`IsType`](rules::IsType)
//!
//! ## Errors
//!
//! Data that fails a rule is never an `Err` at the field or collection
//! level; it shows up in [`FieldOutcome`] and [`CollatedRecord`]. Only rule
//! misconfiguration, such as a regex that does not compile, is reported as
//! a [`RuleError`].

// ValidationError keeps its template params inline, so it exceeds the
// large-error threshold.
#![allow(clippy::result_large_err)]

pub mod collection;
pub mod field;
pub mod foundation;
mod macros;
pub mod prelude;
pub mod rules;

pub use collection::{CollatedRecord, Collection, IntoFields, Validator};
pub use field::{Field, FieldOutcome};
pub use foundation::{IntoRules, Rule, RuleError, RuleOptions, ValidationError, ValueKind};
