//! Macros for building rule lists and rule types.
//!
//! # Available Macros
//!
//! - [`rules!`]: build an ordered list of rules of different types
//! - `rule!` (crate-internal): declare a rule type with its constructor,
//!   [`Rule`](crate::Rule) impl and factory function in one block
//! - `impl_rule_options!` (crate-internal): the shared `with_message`,
//!   `pass_on_blank` and `strip` builders
//!
//! # Examples
//!
//! ```
//! use formcheck_validator::prelude::*;
//!
//! let field = Field::new("username", "wilhelm").append(rules![
//!     is_required(),
//!     is_alpha_numeric(),
//!     is_length_between(3, 10),
//! ]);
//! assert_eq!(field.len(), 3);
//! ```

// ============================================================================
// RULES MACRO
// ============================================================================

/// Builds a `Vec<Box<dyn Rule>>` from rules of any types, in order.
///
/// The result can be passed straight to
/// [`Field::append`](crate::Field::append).
///
/// ```
/// use formcheck_validator::prelude::*;
///
/// let list = rules![is_required(), matches("root")];
/// assert_eq!(list.len(), 2);
///
/// let empty = rules![];
/// assert!(empty.is_empty());
/// ```
#[macro_export]
macro_rules! rules {
    () => {
        ::std::vec::Vec::<::std::boxed::Box<dyn $crate::foundation::Rule>>::new()
    };
    ($($rule:expr),+ $(,)?) => {
        ::std::vec![
            $(::std::boxed::Box::new($rule) as ::std::boxed::Box<dyn $crate::foundation::Rule>),+
        ]
    };
}

// ============================================================================
// RULE OPTIONS MACRO
// ============================================================================

/// Implements the option builders every rule shares.
///
/// The struct must have an `options: RuleOptions` field.
macro_rules! impl_rule_options {
    ($name:ident) => {
        impl $name {
            /// Uses `message` instead of the templated message on failure.
            #[must_use = "builder methods must be chained or built"]
            pub fn with_message(mut self, message: impl Into<String>) -> Self {
                self.options.message = Some(message.into());
                self
            }

            /// Passes without checking when the value is blank.
            #[must_use = "builder methods must be chained or built"]
            pub fn pass_on_blank(mut self) -> Self {
                self.options.pass_on_blank = true;
                self
            }
        }
    };
    ($name:ident, strip) => {
        $crate::macros::impl_rule_options!($name);

        impl $name {
            /// Trims surrounding whitespace from string values before checking.
            #[must_use = "builder methods must be chained or built"]
            pub fn strip(mut self) -> Self {
                self.strip = true;
                self
            }
        }
    };
}

pub(crate) use impl_rule_options;

// ============================================================================
// RULE DECLARATION MACRO
// ============================================================================

/// Declares a rule: struct, `new`, option builders, [`Rule`] impl and
/// factory function.
///
/// Declared fields are public. Every rule also gets a private
/// `options: RuleOptions`; `+ strip` after the field list adds a private
/// `strip: bool` and the `strip()` builder.
///
/// ```text
/// rule! {
///     /// Passes when the value's length equals `length`.
///     pub IsLength { length: usize } + strip;
///     check(self, value) { length(value, self.strip) == self.length }
///     failure(self, value) { ValidationError::new("length", "...") }
///     new(length: usize) { length }
///     fn is_length;
/// }
/// ```
///
/// [`Rule`]: crate::Rule
macro_rules! rule {
    (
        $(#[$meta:meta])*
        $vis:vis $name:ident {
            $($(#[$fmeta:meta])* $field:ident: $fty:ty),* $(,)?
        } $(+ $strip:ident)?;
        check($self_:ident, $inp:ident) $check:block
        failure($self2:ident, $einp:ident) $failure:block
        new($($narg:ident: $naty:ty),* $(,)?) { $($init:ident $(: $iexpr:expr)?),* $(,)? }
        fn $factory:ident;
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, PartialEq, Eq)]
        $vis struct $name {
            $($(#[$fmeta])* pub $field: $fty,)*
            $($strip: bool,)?
            options: $crate::foundation::RuleOptions,
        }

        #[allow(clippy::new_without_default)]
        impl $name {
            #[doc = concat!("Creates a new [`", stringify!($name), "`].")]
            #[must_use]
            pub fn new($($narg: $naty),*) -> Self {
                Self {
                    $($init $(: $iexpr)?,)*
                    $($strip: false,)?
                    options: $crate::foundation::RuleOptions::default(),
                }
            }
        }

        $crate::macros::impl_rule_options!($name $(, $strip)?);

        impl $crate::foundation::Rule for $name {
            fn options(&self) -> &$crate::foundation::RuleOptions {
                &self.options
            }

            fn check(&$self_, $inp: &::serde_json::Value) -> bool $check

            #[allow(unused_variables)]
            fn failure(
                &$self2,
                $einp: &::serde_json::Value,
            ) -> $crate::foundation::ValidationError $failure
        }

        #[doc = concat!("Creates a [`", stringify!($name), "`] rule.")]
        #[must_use]
        $vis fn $factory($($narg: $naty),*) -> $name {
            $name::new($($narg),*)
        }
    };
}

pub(crate) use rule;
