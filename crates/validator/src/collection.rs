//! Collections: a set of fields validated together.
//!
//! A [`Collection`] runs every field in insertion order, records one
//! [`CollatedRecord`] per field, and exposes the form (title → value) and
//! errors (title → messages) views.
//!
//! # Examples
//!
//! ```
//! use formcheck_validator::prelude::*;
//!
//! let mut signup = Collection::new().append([
//!     Field::new("username", "wilhelm").append(rules![
//!         is_required(),
//!         is_alpha_numeric(),
//!         is_length_between(3, 10),
//!     ]),
//!     Field::new("password-confirm", "root").append(matches("root")),
//! ]);
//!
//! assert!(signup.run());
//! assert!(signup.errors().is_none());
//! assert_eq!(signup.form()["username"], "wilhelm");
//! ```

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::ops::Index;

use crate::field::Field;

// ============================================================================
// COLLATED RECORD
// ============================================================================

/// Per-field record produced by [`Collection::run`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CollatedRecord {
    /// Field title.
    pub field: String,
    /// Field value at the time of the run.
    pub value: Value,
    /// Whether the field passed.
    pub passed: bool,
    /// Failure messages; `None` when the field passed.
    pub errors: Option<Vec<String>>,
}

// ============================================================================
// COLLECTION
// ============================================================================

/// An ordered set of fields evaluated together.
///
/// Running takes `&mut self` because it replaces the stored results; a
/// collection that must be shared across threads needs external
/// synchronisation. Collections are cheap to build, so building one per
/// validation pass is usually simpler.
#[derive(Debug, Default)]
pub struct Collection {
    fields: Vec<Field>,
    collated_results: Vec<CollatedRecord>,
    passed: Option<bool>,
}

/// Alias for [`Collection`].
pub type Validator = Collection;

impl Collection {
    /// Creates an empty collection.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends one field or a sequence of fields.
    #[must_use = "builder methods must be chained or built"]
    pub fn append(mut self, fields: impl IntoFields) -> Self {
        self.push(fields);
        self
    }

    /// Appends one field or a sequence of fields in place.
    pub fn push(&mut self, fields: impl IntoFields) -> &mut Self {
        self.fields.extend(fields.into_fields());
        self
    }

    /// Runs every field and returns true if all of them passed.
    ///
    /// Previous results are discarded.
    pub fn run(&mut self) -> bool {
        self.collate();
        self.passed.unwrap_or(true)
    }

    /// Runs every field and returns the per-field records.
    ///
    /// Previous results are discarded.
    pub fn run_collated(&mut self) -> &[CollatedRecord] {
        self.collate();
        &self.collated_results
    }

    fn collate(&mut self) {
        self.collated_results.clear();
        let mut passed = true;

        for field in &self.fields {
            let outcome = field.run();
            passed &= outcome.passed;
            self.collated_results.push(CollatedRecord {
                field: field.title().to_owned(),
                value: field.value().clone(),
                passed: outcome.passed,
                errors: (!outcome.errors.is_empty()).then_some(outcome.errors),
            });
        }

        tracing::debug!(
            fields = self.fields.len(),
            failed = self.collated_results.iter().filter(|r| !r.passed).count(),
            passed,
            "collection validated"
        );

        self.passed = Some(passed);
    }

    /// Records from the latest run, empty before the first run.
    #[must_use]
    pub fn results(&self) -> &[CollatedRecord] {
        &self.collated_results
    }

    /// Aggregate result of the latest run, `None` before the first run.
    #[must_use]
    pub fn passed(&self) -> Option<bool> {
        self.passed
    }

    /// Current title → value pairs, in insertion order.
    ///
    /// Reflects the appended fields whether or not the collection has run.
    #[must_use]
    pub fn form(&self) -> IndexMap<String, Value> {
        self.fields
            .iter()
            .map(|field| (field.title().to_owned(), field.value().clone()))
            .collect()
    }

    /// Title → messages for every field that failed the latest run.
    ///
    /// Returns `None` when every field passed or before the first run.
    #[must_use]
    pub fn errors(&self) -> Option<IndexMap<String, Vec<String>>> {
        let errors: IndexMap<String, Vec<String>> = self
            .collated_results
            .iter()
            .filter_map(|record| {
                record
                    .errors
                    .as_ref()
                    .map(|errors| (record.field.clone(), errors.clone()))
            })
            .collect();

        (!errors.is_empty()).then_some(errors)
    }

    /// Number of appended fields.
    #[must_use]
    pub fn len(&self) -> usize {
        self.fields.len()
    }

    /// Returns true if no fields were appended.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    /// The field at `index`, if any.
    #[must_use]
    pub fn get(&self, index: usize) -> Option<&Field> {
        self.fields.get(index)
    }

    /// Iterates over the fields in insertion order.
    pub fn iter(&self) -> std::slice::Iter<'_, Field> {
        self.fields.iter()
    }
}

impl Index<usize> for Collection {
    type Output = Field;

    fn index(&self, index: usize) -> &Field {
        &self.fields[index]
    }
}

impl<'a> IntoIterator for &'a Collection {
    type Item = &'a Field;
    type IntoIter = std::slice::Iter<'a, Field>;

    fn into_iter(self) -> Self::IntoIter {
        self.fields.iter()
    }
}

// ============================================================================
// INTO FIELDS
// ============================================================================

/// Anything that can be appended to a collection: one field or an ordered
/// sequence of fields.
pub trait IntoFields {
    /// Converts into fields, preserving order.
    fn into_fields(self) -> Vec<Field>;
}

impl IntoFields for Field {
    fn into_fields(self) -> Vec<Field> {
        vec![self]
    }
}

impl IntoFields for Vec<Field> {
    fn into_fields(self) -> Vec<Field> {
        self
    }
}

impl<const N: usize> IntoFields for [Field; N] {
    fn into_fields(self) -> Vec<Field> {
        self.into()
    }
}

// ============================================================================
// TESTS
// ============================================================================
