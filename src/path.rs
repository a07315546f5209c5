//! Dotted key paths reconstructed from a decoder's context trail.
//!
//! This module provides [`KeyPath`], the location of a failure inside the
//! original input, rendered as `children.0.gender`.

use std::fmt::{self, Display};

use crate::context::ContextEntry;

/// A path to a value in a decoded input.
///
/// Every segment is a structural key as the decoder reported it: an object
/// property name, an array index or a union branch index. Segments are always
/// non-empty; the root and other keyless steps contribute nothing.
///
/// # Example
///
/// ```rust
/// use autopsy::KeyPath;
///
/// let path = KeyPath::root()
///     .push("children")
///     .push("0")
///     .push("gender");
///
/// assert_eq!(path.to_string(), "children.0.gender");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub struct KeyPath {
    segments: Vec<String>,
}

impl KeyPath {
    /// Creates an empty path representing the root value.
    pub fn root() -> Self {
        Self::default()
    }

    /// Builds the path described by a context trail.
    ///
    /// The first entry is the decoding root and is never rendered. Empty keys
    /// further down the trail are skipped without breaking the chain.
    pub fn from_context(context: &[ContextEntry]) -> Self {
        context
            .iter()
            .skip(1)
            .fold(Self::root(), |path, entry| path.push(entry.key.as_str()))
    }

    /// Returns a new path with `key` appended.
    ///
    /// An empty key leaves the path unchanged.
    pub fn push(&self, key: impl Into<String>) -> Self {
        let key = key.into();
        let mut segments = self.segments.clone();
        if !key.is_empty() {
            segments.push(key);
        }
        Self { segments }
    }

    /// Returns true if this is the root path (no segments).
    pub fn is_root(&self) -> bool {
        self.segments.is_empty()
    }

    /// Returns the number of segments in this path.
    pub fn len(&self) -> usize {
        self.segments.len()
    }

    /// Returns true if this path has no segments.
    pub fn is_empty(&self) -> bool {
        self.segments.is_empty()
    }
}

impl Display for KeyPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, segment) in self.segments.iter().enumerate() {
            if i > 0 {
                write!(f, ".")?;
            }
            write!(f, "{}", segment)?;
        }
        Ok(())
    }
}
