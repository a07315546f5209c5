//! Decoding failure records.
//!
//! This module provides [`ValidationError`] for a single decoding failure and
//! [`ValidationErrors`] for the non-empty sequence a failed decode carries.

use std::fmt::{self, Display};

use serde_json::Value;
use stillwater::prelude::*;

use crate::context::ContextEntry;
use crate::path::KeyPath;
use crate::types::TypeDescriptor;

/// One decoding failure.
///
/// `ValidationError` captures where the failure happened and what was found:
/// - **context**: the trail of (key, type) steps from the decoding root to the
///   failure point, root first
/// - **value**: the input fragment at the failure point; `None` when the value
///   was absent
///
/// # Example
///
/// ```rust
/// use autopsy::{ContextEntry, TypeDescriptor, ValidationError};
/// use serde_json::json;
///
/// let person = TypeDescriptor::record([("age", TypeDescriptor::number())]);
/// let error = ValidationError::new(
///     vec![
///         ContextEntry::root(person),
///         ContextEntry::new("age", TypeDescriptor::number()),
///     ],
///     Some(json!("ten")),
/// );
///
/// assert_eq!(error.path().to_string(), "age");
/// assert_eq!(error.expected().map(|t| t.name()), Some("number"));
/// ```
#[derive(Debug, Clone)]
pub struct ValidationError {
    /// Steps from the decoding root to the failure point.
    pub context: Vec<ContextEntry>,
    /// The value found at the failure point, if any.
    pub value: Option<Value>,
}

impl ValidationError {
    /// Creates a validation error from a context trail and the offending value.
    pub fn new(context: Vec<ContextEntry>, value: Option<Value>) -> Self {
        Self { context, value }
    }

    /// Creates a validation error for a value that was absent.
    pub fn missing(context: Vec<ContextEntry>) -> Self {
        Self::new(context, None)
    }

    /// Returns the type expected at the failure point, or None for an empty trail.
    pub fn expected(&self) -> Option<&TypeDescriptor> {
        self.context.last().map(|entry| &entry.type_)
    }

    /// Returns the path of the failure point.
    pub fn path(&self) -> KeyPath {
        KeyPath::from_context(&self.context)
    }
}

impl Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let path = self.path();
        if path.is_root() {
            write!(f, "(root)")?;
        } else {
            write!(f, "{}", path)?;
        }
        match self.expected() {
            Some(expected) => write!(f, ": expected {}", expected.name()),
            None => write!(f, ": expected <no context>"),
        }
    }
}

const _: () = {
    const fn assert_send<T: Send>() {}
    const fn assert_sync<T: Sync>() {}
    assert_send::<ValidationError>();
    assert_sync::<ValidationError>();
};

/// A non-empty collection of validation errors, in decoder emission order.
///
/// `ValidationErrors` wraps a `NonEmptyVec<ValidationError>` so a failed
/// decode always carries at least one error. It implements `Semigroup`, so
/// errors from sibling fields or union branches concatenate in order:
///
/// ```rust
/// use autopsy::{ContextEntry, TypeDescriptor, ValidationError, ValidationErrors};
/// use stillwater::prelude::*;
///
/// let root = || vec![ContextEntry::root(TypeDescriptor::string())];
/// let first = ValidationErrors::single(ValidationError::missing(root()));
/// let second = ValidationErrors::single(ValidationError::missing(root()));
///
/// assert_eq!(first.combine(second).len(), 2);
/// ```
#[derive(Debug, Clone)]
pub struct ValidationErrors(NonEmptyVec<ValidationError>);

impl ValidationErrors {
    /// Creates a `ValidationErrors` containing a single error.
    pub fn single(error: ValidationError) -> Self {
        Self(NonEmptyVec::singleton(error))
    }

    /// Creates a `ValidationErrors` from a `NonEmptyVec` of errors.
    pub fn from_non_empty(errors: NonEmptyVec<ValidationError>) -> Self {
        Self(errors)
    }

    /// Creates a `ValidationErrors` from a `Vec`, or None if it is empty.
    pub fn from_vec(errors: Vec<ValidationError>) -> Option<Self> {
        NonEmptyVec::from_vec(errors).map(Self)
    }

    /// Returns the number of errors in this collection.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Always false; the collection is never empty.
    pub fn is_empty(&self) -> bool {
        false
    }

    /// Returns an iterator over the errors in emission order.
    pub fn iter(&self) -> impl Iterator<Item = &ValidationError> {
        self.0.iter()
    }

    /// Returns the first error in the collection.
    pub fn first(&self) -> &ValidationError {
        self.0.head()
    }

    /// Converts this collection into a `Vec<ValidationError>`.
    pub fn into_vec(self) -> Vec<ValidationError> {
        self.0.into_vec()
    }
}

impl Semigroup for ValidationErrors {
    fn combine(self, other: Self) -> Self {
        ValidationErrors(self.0.combine(other.0))
    }
}

impl IntoIterator for ValidationErrors {
    type Item = ValidationError;
    type IntoIter = std::vec::IntoIter<ValidationError>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_vec().into_iter()
    }
}

impl<'a> IntoIterator for &'a ValidationErrors {
    type Item = &'a ValidationError;
    type IntoIter = Box<dyn Iterator<Item = &'a ValidationError> + 'a>;

    fn into_iter(self) -> Self::IntoIter {
        Box::new(self.0.iter())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn error_at(keys: &[&str]) -> ValidationError {
        let mut context = vec![ContextEntry::root(TypeDescriptor::unknown())];
        context.extend(
            keys.iter()
                .map(|key| ContextEntry::new(*key, TypeDescriptor::number())),
        );
        ValidationError::new(context, Some(json!("x")))
    }

    #[test]
    fn test_expected_is_last_entry_type() {
        let error = error_at(&["a", "b"]);
        assert_eq!(error.expected().unwrap().name(), "number");

        let root_only = error_at(&[]);
        assert_eq!(root_only.expected().unwrap().name(), "unknown");
    }

    #[test]
    fn test_expected_none_for_empty_context() {
        let error = ValidationError::missing(Vec::new());
        assert!(error.expected().is_none());
        assert!(error.value.is_none());
    }

    #[test]
    fn test_display() {
        assert_eq!(error_at(&["age"]).to_string(), "age: expected number");
        assert_eq!(error_at(&[]).to_string(), "(root): expected unknown");
    }

    #[test]
    fn test_from_vec_rejects_empty() {
        assert!(ValidationErrors::from_vec(Vec::new()).is_none());
        let errors = ValidationErrors::from_vec(vec![error_at(&["a"])]).unwrap();
        assert_eq!(errors.len(), 1);
        assert!(!errors.is_empty());
    }

    #[test]
    fn test_combine_preserves_order() {
        let combined = ValidationErrors::single(error_at(&["a"]))
            .combine(ValidationErrors::single(error_at(&["b"])))
            .combine(ValidationErrors::single(error_at(&["c"])));

        let paths: Vec<String> = combined.iter().map(|e| e.path().to_string()).collect();
        assert_eq!(paths, vec!["a", "b", "c"]);
        assert_eq!(combined.first().path().to_string(), "a");
    }

    #[test]
    fn test_into_iter() {
        let errors = ValidationErrors::single(error_at(&["a"]))
            .combine(ValidationErrors::single(error_at(&["b"])));

        let borrowed: Vec<&ValidationError> = (&errors).into_iter().collect();
        assert_eq!(borrowed.len(), 2);

        let owned: Vec<ValidationError> = errors.into_iter().collect();
        assert_eq!(owned.len(), 2);
    }
}
