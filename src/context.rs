//! Context trails and their resolution.
//!
//! A decoding engine records every failure with the trail of steps it took
//! from the root of the input to the failure point. This module turns such a
//! trail into the two facts a report line needs: where the failure is
//! ([`KeyPath`]) and what was expected there.
//!
//! Trails are taken as given. The engine is expected to emit them depth-first,
//! outer type before nested type, with union branches in declaration order;
//! nothing here re-derives or re-sorts that order.

use crate::error::ReportError;
use crate::path::KeyPath;
use crate::types::{MessageFn, TypeDescriptor};

/// One step of a context trail.
#[derive(Debug, Clone)]
pub struct ContextEntry {
    /// Property name, array index or union branch index. Empty at the root.
    pub key: String,
    /// The type expected at this step.
    pub type_: TypeDescriptor,
}

impl ContextEntry {
    /// Creates a context entry.
    pub fn new(key: impl Into<String>, type_: TypeDescriptor) -> Self {
        Self {
            key: key.into(),
            type_,
        }
    }

    /// Creates the root entry of a trail.
    pub fn root(type_: TypeDescriptor) -> Self {
        Self::new("", type_)
    }
}

/// The resolved location and expectation of one failure.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Resolved {
    /// Where the failure is.
    pub path: KeyPath,
    /// Display name of the type expected at the failure point.
    pub expected: String,
}

/// Resolves a context trail into a path and an expected type name.
///
/// The expected type is the one held by the last entry. The path is built
/// from every entry after the root; empty keys are skipped.
///
/// Returns [`ReportError::InvariantViolation`] if the trail is empty.
///
/// # Example
///
/// ```rust
/// use autopsy::{resolve, ContextEntry, TypeDescriptor};
///
/// let groups = TypeDescriptor::array(TypeDescriptor::array(TypeDescriptor::number()));
/// let context = vec![
///     ContextEntry::root(groups),
///     ContextEntry::new("0", TypeDescriptor::array(TypeDescriptor::number())),
///     ContextEntry::new("0", TypeDescriptor::number()),
/// ];
///
/// let resolved = resolve(&context).unwrap();
/// assert_eq!(resolved.path.to_string(), "0.0");
/// assert_eq!(resolved.expected, "number");
/// ```
pub fn resolve(context: &[ContextEntry]) -> Result<Resolved, ReportError> {
    let last = context
        .last()
        .ok_or_else(|| ReportError::invariant(0, "context trail is empty"))?;

    Ok(Resolved {
        path: KeyPath::from_context(context),
        expected: last.type_.name().to_string(),
    })
}

/// Finds the custom-message hook closest to the failure point.
///
/// Entries are scanned from the last one back to the root; the first
/// descriptor carrying a hook wins.
pub fn find_message_hook(context: &[ContextEntry]) -> Option<&MessageFn> {
    context
        .iter()
        .rev()
        .find_map(|entry| entry.type_.message_hook())
}
