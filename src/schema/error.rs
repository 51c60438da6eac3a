use std::fmt;
use std::fmt::Formatter;

use thiserror::Error;

use crate::schema::field_value::ValueKind;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FieldErrorKind {
    MissingField,
    TypeMismatch { expected: ValueKind, found: ValueKind },
    MalformedValue { reason: String },
}

/// One violated constraint. `field` is the front matter key, or `key[index]`
/// for list elements.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{field}: {kind}")]
pub struct FieldError {
    pub field: String,
    pub kind: FieldErrorKind,
}

impl FieldError {
    pub fn missing(field: &str) -> Self {
        FieldError { field: field.to_string(), kind: FieldErrorKind::MissingField }
    }

    pub fn type_mismatch(field: &str, expected: ValueKind, found: ValueKind) -> Self {
        FieldError { field: field.to_string(), kind: FieldErrorKind::TypeMismatch { expected, found } }
    }

    pub fn malformed(field: &str, reason: impl Into<String>) -> Self {
        FieldError { field: field.to_string(), kind: FieldErrorKind::MalformedValue { reason: reason.into() } }
    }
}

impl fmt::Display for FieldErrorKind {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            FieldErrorKind::MissingField => write!(f, "required field is missing"),
            FieldErrorKind::TypeMismatch { expected, found } => {
                write!(f, "expected {}, found {}", expected, found)
            }
            FieldErrorKind::MalformedValue { reason } => write!(f, "malformed value, {}", reason),
        }
    }
}

/// Every violation found in a single record, in schema field order.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub struct ValidationErrors(pub Vec<FieldError>);

impl ValidationErrors {
    pub fn errors(&self) -> &[FieldError] {
        &self.0
    }

    pub fn for_field(&self, field: &str) -> Option<&FieldError> {
        self.0.iter().find(|e| e.field == field)
    }
}

impl fmt::Display for ValidationErrors {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        let msgs: Vec<String> = self.0.iter().map(|e| e.to_string()).collect();
        write!(f, "{}", msgs.join("; "))
    }
}
