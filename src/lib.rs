//! # Autopsy
//!
//! Turns the failure of a structural decode into a readable, ordered report.
//!
//! ## Overview
//!
//! A decoding engine validates input against a tree of type descriptors and,
//! on failure, hands back a non-empty list of errors. Each error carries the
//! trail of (key, type) steps from the root of the input to the failure point,
//! plus the value found there. Autopsy reconstructs a dotted path and the
//! expected type from that trail, renders the offending value, merges in any
//! custom message attached to a type, and returns one line per error in the
//! order the engine emitted them.
//!
//! ## Core Types
//!
//! - [`TypeDescriptor`]: a named type (primitive, literal, array, record, union
//!   or branded) with an optional custom-message hook
//! - [`ContextEntry`]: one step of a context trail
//! - [`ValidationError`] / [`ValidationErrors`]: the failures of a decode
//! - [`DecodeResult`]: a decode outcome, success or accumulated failures
//! - [`Reporter`] / [`report`]: rendering decode results as report lines
//!
//! ## Example
//!
//! ```rust
//! use autopsy::{report, ContextEntry, TypeDescriptor, ValidationError, ValidationErrors};
//! use serde_json::json;
//! use stillwater::Validation;
//!
//! let groups = TypeDescriptor::array(TypeDescriptor::array(TypeDescriptor::number()));
//! let error = ValidationError::new(
//!     vec![
//!         ContextEntry::root(groups),
//!         ContextEntry::new("0", TypeDescriptor::array(TypeDescriptor::number())),
//!         ContextEntry::new("0", TypeDescriptor::number()),
//!     ],
//!     Some(json!({})),
//! );
//!
//! let lines = report(&Validation::Failure(ValidationErrors::single(error))).unwrap();
//! assert_eq!(lines, vec!["Expecting number at 0.0 but instead got: {}"]);
//! ```

pub mod context;
pub mod error;
pub mod path;
pub mod render;
pub mod types;

pub use context::{find_message_hook, resolve, ContextEntry, Resolved};
pub use error::{ReportError, ValidationError, ValidationErrors};
pub use path::KeyPath;
pub use render::{report, stringify_value, Reporter};
pub use types::{MessageFn, PredicateFn, Primitive, TypeDescriptor, TypeKind};

/// The outcome of a decode: the decoded value, or every error found.
pub type DecodeResult = stillwater::Validation<serde_json::Value, ValidationErrors>;
