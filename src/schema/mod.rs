use chrono::NaiveDate;
use serde::Serialize;

pub mod error;
pub mod field_value;
pub mod validator;

pub use error::{FieldError, FieldErrorKind, ValidationErrors};
pub use field_value::{FieldValue, Record, ValueKind};
pub use validator::validate;

/// A blog post header that passed validation.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PostEntry {
    pub title: String,
    pub description: String,
    pub publish_date: NaiveDate,
    pub tags: Vec<String>,
    pub draft: bool,
}
