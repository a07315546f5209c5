//! Error types.
//!
//! This module provides the failure records a decoding engine hands to the
//! reporter ([`ValidationError`], [`ValidationErrors`]) and the one error the
//! reporter itself can raise ([`ReportError`]).

mod report_error;
mod validation_error;

pub use report_error::ReportError;
pub use validation_error::{ValidationError, ValidationErrors};
