//! Client-side form state and validation.
//!
//! # Design
//! Each form is a single owned value changed only through its `apply`
//! method, one action at a time. Validation runs on demand and either
//! yields the request payload or the list of field errors to show next to
//! the inputs.

pub mod pool;
pub mod question;
pub mod submit;

pub use pool::PoolForm;
pub use question::{OptionControl, OptionDraft, QuestionAction, QuestionForm};
pub use submit::{field_key, FieldValue, SubmitAction, SubmitForm};

use std::fmt;

/// A validation failure attached to one form field.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldError {
    pub field: &'static str,
    pub message: &'static str,
}

/// All field errors found by one validation pass. Never empty.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationErrors(Vec<FieldError>);

impl ValidationErrors {
    pub fn errors(&self) -> &[FieldError] {
        &self.0
    }

    /// Message for `field`, if it failed.
    pub fn message(&self, field: &str) -> Option<&'static str> {
        self.0.iter().find(|e| e.field == field).map(|e| e.message)
    }
}

impl fmt::Display for ValidationErrors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut first = true;
        for error in &self.0 {
            if !first {
                write!(f, "; ")?;
            }
            write!(f, "{}: {}", error.field, error.message)?;
            first = false;
        }
        Ok(())
    }
}

impl std::error::Error for ValidationErrors {}

/// Accumulates field errors during a validation pass.
#[derive(Debug, Default)]
pub(crate) struct Checker(Vec<FieldError>);

impl Checker {
    /// Require at least `min` characters in `value`.
    pub(crate) fn min_len(&mut self, field: &'static str, value: &str, min: usize, message: &'static str) {
        if value.chars().count() < min {
            self.0.push(FieldError { field, message });
        }
    }

    pub(crate) fn finish(self) -> Result<(), ValidationErrors> {
        if self.0.is_empty() {
            Ok(())
        } else {
            Err(ValidationErrors(self.0))
        }
    }
}
