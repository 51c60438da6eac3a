use chrono::NaiveDate;
use spdlog::debug;

use crate::schema::error::{FieldError, ValidationErrors};
use crate::schema::field_value::{FieldValue, Record, ValueKind};
use crate::schema::PostEntry;
use crate::text_utils::parse_publish_date;

pub const TITLE: &str = "title";
pub const DESCRIPTION: &str = "description";
pub const PUBLISH_DATE: &str = "publishDate";
pub const TAGS: &str = "tags";
pub const DRAFT: &str = "draft";

const KNOWN_FIELDS: [&str; 5] = [TITLE, DESCRIPTION, PUBLISH_DATE, TAGS, DRAFT];

/// Checks a raw front matter record against the post schema.
///
/// All violations are collected, so a single run tells the author everything
/// that is wrong with the header. Fields that are not part of the schema are
/// ignored.
pub fn validate(record: &Record) -> Result<PostEntry, ValidationErrors> {
    let mut errors = vec![];

    let title = required_text(record, TITLE, &mut errors);
    let description = required_text(record, DESCRIPTION, &mut errors);
    let publish_date = required_date(record, PUBLISH_DATE, &mut errors);
    let tags = required_text_list(record, TAGS, &mut errors);
    let draft = optional_bool(record, DRAFT, &mut errors);

    for key in record.keys().filter(|k| !KNOWN_FIELDS.contains(&k.as_str())) {
        debug!("Ignoring unknown front matter field {}", key);
    }

    match (title, description, publish_date, tags, draft) {
        (Some(title), Some(description), Some(publish_date), Some(tags), Some(draft)) if errors.is_empty() => {
            Ok(PostEntry {
                title,
                description,
                publish_date,
                tags,
                draft: draft.unwrap_or(false),
            })
        }
        _ => Err(ValidationErrors(errors)),
    }
}

fn required<'a>(record: &'a Record, field: &str, errors: &mut Vec<FieldError>) -> Option<&'a FieldValue> {
    let value = record.get(field);
    if value.is_none() {
        errors.push(FieldError::missing(field));
    }
    value
}

fn non_blank_text(value: &FieldValue, field: &str, errors: &mut Vec<FieldError>) -> Option<String> {
    match value {
        FieldValue::Text(text) if text.trim().is_empty() => {
            errors.push(FieldError::malformed(field, "must not be empty"));
            None
        }
        FieldValue::Text(text) => Some(text.clone()),
        other => {
            errors.push(FieldError::type_mismatch(field, ValueKind::Text, other.kind()));
            None
        }
    }
}

fn required_text(record: &Record, field: &str, errors: &mut Vec<FieldError>) -> Option<String> {
    let value = required(record, field, errors)?;
    non_blank_text(value, field, errors)
}

fn required_date(record: &Record, field: &str, errors: &mut Vec<FieldError>) -> Option<NaiveDate> {
    let raw = match required(record, field, errors)? {
        FieldValue::Text(text) | FieldValue::DateTime(text) => text,
        other => {
            errors.push(FieldError::type_mismatch(field, ValueKind::Date, other.kind()));
            return None;
        }
    };

    match parse_publish_date(raw) {
        Ok(date) => Some(date),
        Err(reason) => {
            errors.push(FieldError::malformed(field, reason));
            None
        }
    }
}

fn required_text_list(record: &Record, field: &str, errors: &mut Vec<FieldError>) -> Option<Vec<String>> {
    let items = match required(record, field, errors)? {
        FieldValue::List(items) => items,
        other => {
            errors.push(FieldError::type_mismatch(field, ValueKind::List, other.kind()));
            return None;
        }
    };

    let before = errors.len();
    let list: Vec<String> = items.iter()
        .enumerate()
        .filter_map(|(i, item)| non_blank_text(item, &format!("{}[{}]", field, i), errors))
        .collect();

    if errors.len() > before {
        return None;
    }
    Some(list)
}

/// Outer `None` means the value is invalid, inner `None` means it is absent.
fn optional_bool(record: &Record, field: &str, errors: &mut Vec<FieldError>) -> Option<Option<bool>> {
    match record.get(field) {
        None => Some(None),
        Some(FieldValue::Bool(value)) => Some(Some(*value)),
        Some(other) => {
            errors.push(FieldError::type_mismatch(field, ValueKind::Bool, other.kind()));
            None
        }
    }
}
