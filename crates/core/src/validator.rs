//! Accumulating field validator.
//!
//! A [`Validator`] is created fresh for each validation pass, handed to the
//! rule functions by `&mut`, and inspected once at the end. Only the first
//! failure recorded for a field is kept.

use std::collections::BTreeMap;

use crate::error::CoreError;

/// Field name -> error message. Ordered so error bodies are stable.
pub type FieldErrors = BTreeMap<String, String>;

#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct Validator {
    errors: FieldErrors,
}

impl Validator {
    pub fn new() -> Self {
        Self::default()
    }

    /// `true` when no errors have been recorded.
    pub fn valid(&self) -> bool {
        self.errors.is_empty()
    }

    /// Record `message` for `field` unless the field already has an error.
    pub fn add_error(&mut self, field: &str, message: impl Into<String>) {
        self.errors
            .entry(field.to_string())
            .or_insert_with(|| message.into());
    }

    /// Record `message` for `field` when `ok` is false.
    pub fn check(&mut self, ok: bool, field: &str, message: &str) {
        if !ok {
            self.add_error(field, message);
        }
    }

    pub fn errors(&self) -> &FieldErrors {
        &self.errors
    }

    /// Consume the validator, turning accumulated errors into
    /// [`CoreError::FailedValidation`].
    pub fn finish(self) -> Result<(), CoreError> {
        if self.valid() {
            Ok(())
        } else {
            Err(CoreError::FailedValidation(self.errors))
        }
    }
}

/// `true` when `value` is one of `permitted`.
pub fn permitted_value<T: PartialEq + ?Sized>(value: &T, permitted: &[&T]) -> bool {
    permitted.iter().any(|p| *p == value)
}
