//! Custom-message hooks attached to descriptors.

use std::sync::Arc;

use serde_json::Value;

use super::{Node, TypeDescriptor};
use crate::DecodeResult;

/// A custom-message hook.
///
/// The hook receives the decode outcome for the failing sub-value and may
/// return extra text for the report line. Returning `None` (or an empty
/// string) keeps the default message.
pub type MessageFn = Arc<dyn Fn(&DecodeResult) -> Option<String> + Send + Sync>;

/// The refinement predicate of a branded descriptor.
pub type PredicateFn = Arc<dyn Fn(&Value) -> bool + Send + Sync>;

impl TypeDescriptor {
    /// Returns a copy of this descriptor decorated with a custom-message hook.
    ///
    /// The copy keeps the kind and display name. Any hook already present is
    /// replaced.
    ///
    /// # Example
    ///
    /// ```rust
    /// use autopsy::TypeDescriptor;
    ///
    /// let positive = TypeDescriptor::branded(TypeDescriptor::number(), "Positive", |v| {
    ///     v.as_f64().is_some_and(|n| n >= 0.0)
    /// })
    /// .with_message(|_| Some("Don't be so negative!".to_string()));
    ///
    /// assert_eq!(positive.name(), "Positive");
    /// assert!(positive.message_hook().is_some());
    /// ```
    pub fn with_message<F>(&self, hook: F) -> Self
    where
        F: Fn(&DecodeResult) -> Option<String> + Send + Sync + 'static,
    {
        Self {
            node: Arc::new(Node {
                kind: self.node.kind.clone(),
                name: self.node.name.clone(),
                message: Some(Arc::new(hook)),
            }),
        }
    }
}
