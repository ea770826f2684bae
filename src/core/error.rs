//! # Form Errors
//!
//! Two families of error can stop a session from completing:
//!
//! - [`ValidationError`]: a field was left empty or the final confirm was
//!   declined. Shown in the error banner, fixed by the user.
//! - [`CoercionError`]: a raw answer could not be turned into its declared
//!   type. Returned as `Err` from coercion and surfaced the same way.
//!
//! [`FormError`] is the union of both and is what the session keeps in its
//! error set.

use std::fmt;

use crate::core::field::FieldType;

/// Message shown when the user declines the final confirmation.
pub const NOT_CONFIRMED_MESSAGE: &str = "Welp, finish up then";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    /// A required field was left empty.
    Required { key: String },
    /// The trailing "All done?" confirm was declined.
    NotConfirmed,
}

impl ValidationError {
    /// The field this error belongs to, if any (`None` for the confirm).
    pub fn key(&self) -> Option<&str> {
        match self {
            ValidationError::Required { key } => Some(key),
            ValidationError::NotConfirmed => None,
        }
    }
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ValidationError::Required { key } => write!(f, "{key} is a required field"),
            ValidationError::NotConfirmed => f.write_str(NOT_CONFIRMED_MESSAGE),
        }
    }
}

impl std::error::Error for ValidationError {}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CoercionError {
    /// Boolean answers must be exactly `"true"` or `"false"`.
    InvalidBoolean { key: String, raw: String },
    /// Integer answers must parse as base-10 `i64`.
    InvalidInteger { key: String, raw: String },
    /// The field type has no coercion (currently `object`).
    Unsupported { key: String, field_type: FieldType },
}

impl CoercionError {
    pub fn key(&self) -> &str {
        match self {
            CoercionError::InvalidBoolean { key, .. }
            | CoercionError::InvalidInteger { key, .. }
            | CoercionError::Unsupported { key, .. } => key,
        }
    }
}

impl fmt::Display for CoercionError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CoercionError::InvalidBoolean { key, raw } => {
                write!(f, "{key}: {raw:?} is not true or false")
            }
            CoercionError::InvalidInteger { key, raw } => {
                write!(f, "{key}: {raw:?} is not an integer")
            }
            CoercionError::Unsupported { key, field_type } => {
                write!(f, "{key}: {field_type} fields are not supported")
            }
        }
    }
}

impl std::error::Error for CoercionError {}

/// Anything that can sit in the session's error set.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FormError {
    Validation(ValidationError),
    Coercion(CoercionError),
}

impl FormError {
    /// The field this error belongs to, if any.
    pub fn key(&self) -> Option<&str> {
        match self {
            FormError::Validation(e) => e.key(),
            FormError::Coercion(e) => Some(e.key()),
        }
    }
}

impl fmt::Display for FormError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FormError::Validation(e) => e.fmt(f),
            FormError::Coercion(e) => e.fmt(f),
        }
    }
}

impl std::error::Error for FormError {}

impl From<ValidationError> for FormError {
    fn from(e: ValidationError) -> Self {
        FormError::Validation(e)
    }
}

impl From<CoercionError> for FormError {
    fn from(e: CoercionError) -> Self {
        FormError::Coercion(e)
    }
}
