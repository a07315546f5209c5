//! Rendering decode failures as report lines.
//!
//! This module provides [`Reporter`], which turns each [`ValidationError`] of a
//! failed decode into one line of the form
//!
//! ```text
//! Expecting <type> at <path> but instead got: <value> (<custom message>)
//! ```
//!
//! The `at <path>` clause is left out for failures at the root, and the
//! parenthesised custom message only appears when a hook on the context trail
//! supplies one.
//!
//! # Example
//!
//! ```rust
//! use autopsy::{report, ContextEntry, TypeDescriptor, ValidationError, ValidationErrors};
//! use serde_json::json;
//! use stillwater::Validation;
//!
//! let failure = ValidationErrors::single(ValidationError::new(
//!     vec![ContextEntry::root(TypeDescriptor::string())],
//!     Some(json!(42)),
//! ));
//!
//! let lines = report(&Validation::Failure(failure)).unwrap();
//! assert_eq!(lines, vec!["Expecting string but instead got: 42"]);
//! ```

use std::panic::{self, AssertUnwindSafe};

use rayon::prelude::*;
use serde_json::Value;
use stillwater::Validation;
use tracing::{debug, warn};

use crate::context::{find_message_hook, resolve, Resolved};
use crate::error::{ReportError, ValidationError, ValidationErrors};
use crate::DecodeResult;

/// Renders a value the way it appears after `but instead got:`.
///
/// - absent values render as `undefined`
/// - strings render wrapped in double quotes, without escaping: embedded
///   quotes and control characters appear as-is, unlike a JSON string
/// - numbers with no fractional part render as integers (`100`, not `100.0`)
/// - everything else renders as compact JSON (`{}`, `[1,2]`, `-1`, `null`)
///
/// # Example
///
/// ```rust
/// use autopsy::stringify_value;
/// use serde_json::json;
///
/// assert_eq!(stringify_value(None), "undefined");
/// assert_eq!(stringify_value(Some(&json!("Whatever"))), "\"Whatever\"");
/// assert_eq!(stringify_value(Some(&json!([1, 2]))), "[1,2]");
/// ```
pub fn stringify_value(value: Option<&Value>) -> String {
    match value {
        None => "undefined".to_string(),
        Some(Value::String(s)) => format!("\"{}\"", s),
        Some(Value::Number(n)) => match n.as_f64() {
            Some(f) if n.is_f64() && f.fract() == 0.0 && fits_i64(f) => (f as i64).to_string(),
            _ => n.to_string(),
        },
        Some(other) => other.to_string(),
    }
}

fn fits_i64(f: f64) -> bool {
    f >= i64::MIN as f64 && f < i64::MAX as f64
}

/// Renders decode failures into report lines.
///
/// A `Reporter` holds only configuration and can be shared freely across
/// threads. The default configuration reproduces the plain line format; use
/// the builder methods to change it.
///
/// # Example
///
/// ```rust
/// use autopsy::Reporter;
///
/// let reporter = Reporter::new().truncate_long_types(80);
/// assert_eq!(reporter.max_type_len(), Some(80));
/// ```
#[derive(Debug, Clone, Default)]
pub struct Reporter {
    max_type_len: Option<usize>,
}

impl Reporter {
    /// Creates a reporter with the default configuration.
    pub fn new() -> Self {
        Self::default()
    }

    /// Truncates expected-type names longer than `max_chars` characters.
    ///
    /// Truncated names keep their first `max_chars - 3` characters followed by
    /// `...`. With a limit of 3 or less there is no room for the ellipsis, so
    /// the name is simply cut to `max_chars` characters. Large record and union
    /// names are the usual reason to turn this on.
    pub fn truncate_long_types(mut self, max_chars: usize) -> Self {
        self.max_type_len = Some(max_chars);
        self
    }

    /// Returns the configured type-name limit, if any.
    pub fn max_type_len(&self) -> Option<usize> {
        self.max_type_len
    }

    /// Renders a single validation error as one report line.
    ///
    /// Fails only if the error's context trail is empty. A custom-message hook
    /// that panics is caught and the default line is returned, but the process
    /// panic hook still runs and, by default, prints the panic to stderr.
    pub fn format_error(&self, error: &ValidationError) -> Result<String, ReportError> {
        let Resolved { path, expected } = resolve(&error.context)?;
        let expected = self.truncate_type(expected);
        let got = stringify_value(error.value.as_ref());

        let line = if path.is_root() {
            format!("Expecting {} but instead got: {}", expected, got)
        } else {
            format!("Expecting {} at {} but instead got: {}", expected, path, got)
        };

        Ok(match custom_message(error) {
            Some(message) => format!("{} ({})", line, message),
            None => line,
        })
    }

    /// Renders every error of a decode result, in emission order.
    ///
    /// A successful result yields an empty report. Errors are never sorted or
    /// deduplicated, so identical lines are kept.
    pub fn report(&self, result: &DecodeResult) -> Result<Vec<String>, ReportError> {
        let errors = match result {
            Validation::Success(_) => return Ok(Vec::new()),
            Validation::Failure(errors) => errors,
        };

        let lines = errors
            .iter()
            .enumerate()
            .map(|(index, error)| {
                self.format_error(error)
                    .map_err(|err| err.at_index(index))
            })
            .collect::<Result<Vec<_>, _>>()?;

        debug!(errors = lines.len(), "rendered decode report");
        Ok(lines)
    }

    /// Like [`Reporter::report`], but renders errors on the rayon thread pool.
    ///
    /// Line order still matches emission order. If several errors violate an
    /// invariant, which one is returned is unspecified.
    pub fn report_par(&self, result: &DecodeResult) -> Result<Vec<String>, ReportError> {
        let errors = match result {
            Validation::Success(_) => return Ok(Vec::new()),
            Validation::Failure(errors) => errors,
        };

        let errors: Vec<&ValidationError> = errors.iter().collect();
        let lines = errors
            .into_par_iter()
            .enumerate()
            .map(|(index, error)| {
                self.format_error(error)
                    .map_err(|err| err.at_index(index))
            })
            .collect::<Result<Vec<_>, _>>()?;

        debug!(errors = lines.len(), "rendered decode report in parallel");
        Ok(lines)
    }

    fn truncate_type(&self, name: String) -> String {
        match self.max_type_len {
            Some(max) if name.chars().count() > max => {
                if max <= 3 {
                    return name.chars().take(max).collect();
                }
                let kept: String = name.chars().take(max - 3).collect();
                format!("{}...", kept)
            }
            _ => name,
        }
    }
}

/// Renders a decode result with the default [`Reporter`].
///
/// Returns an empty report for a successful result and one line per error
/// otherwise.
pub fn report(result: &DecodeResult) -> Result<Vec<String>, ReportError> {
    Reporter::default().report(result)
}

/// Asks the closest hook on the trail for a custom message.
///
/// A hook that panics is logged and treated as if it returned nothing. The
/// panic is still reported by the process panic hook first, so the default
/// hook prints its `thread '...' panicked at` line to stderr; install a custom
/// hook with `std::panic::set_hook` to silence it.
fn custom_message(error: &ValidationError) -> Option<String> {
    let hook = find_message_hook(&error.context)?;
    let outcome: DecodeResult = Validation::Failure(ValidationErrors::single(error.clone()));

    match panic::catch_unwind(AssertUnwindSafe(|| hook(&outcome))) {
        Ok(Some(message)) if !message.is_empty() => Some(message),
        Ok(_) => None,
        Err(_) => {
            warn!(
                error = %error,
                "custom message hook panicked; using default message"
            );
            None
        }
    }
}
