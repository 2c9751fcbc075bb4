//! Built-in rules
//!
//! Every rule implements [`Rule`](crate::Rule), shares the
//! `with_message(..)` / `pass_on_blank()` builders, and has a snake_case
//! factory function.
//!
//! # Categories
//!
//! - **Equality**: [`Matches`]
//! - **Pattern**: [`Regex`] and its presets [`is_email`], [`is_numeric`],
//!   [`is_alpha`], [`is_alpha_numeric`]
//! - **Presence**: [`IsRequired`]
//! - **Length**: [`IsLength`], [`IsLengthBetween`]
//! - **Membership**: [`IsInList`]
//! - **Type**: [`IsType`]
//!
//! # Examples
//!
//! ```
//! use formcheck_validator::prelude::*;
//! use serde_json::json;
//!
//! let postcode = regex(r"^[0-9]{4}$").unwrap().pass_on_blank();
//! assert!(postcode.passes(&json!("")));
//! assert!(postcode.passes(&json!("3000")));
//! assert!(!postcode.passes(&json!("30")));
//! ```

pub mod kind;
pub mod length;
pub mod list;
pub mod matches;
pub mod pattern;
pub mod required;

pub use kind::{IsType, is_type};
pub use length::{IsLength, IsLengthBetween, is_length, is_length_between};
pub use list::{IsInList, is_in_list};
pub use matches::{Matches, matches};
pub use pattern::{Regex, is_alpha, is_alpha_numeric, is_email, is_numeric, regex};
pub use required::{IsRequired, is_required};
