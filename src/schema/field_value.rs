use std::collections::BTreeMap;
use std::fmt;
use std::fmt::Formatter;

/// Raw front matter, before validation.
pub type Record = BTreeMap<String, FieldValue>;

/// A value as decoded from a front matter block, independent of its syntax.
#[derive(Debug, Clone, PartialEq)]
pub enum FieldValue {
    Null,
    Bool(bool),
    Integer(i64),
    Float(f64),
    Text(String),
    /// Native date literal (TOML), kept in its textual form.
    DateTime(String),
    List(Vec<FieldValue>),
    Table(Record),
}

impl FieldValue {
    pub fn kind(&self) -> ValueKind {
        match self {
            FieldValue::Null => ValueKind::Null,
            FieldValue::Bool(_) => ValueKind::Bool,
            FieldValue::Integer(_) | FieldValue::Float(_) => ValueKind::Number,
            FieldValue::Text(_) => ValueKind::Text,
            FieldValue::DateTime(_) => ValueKind::Date,
            FieldValue::List(_) => ValueKind::List,
            FieldValue::Table(_) => ValueKind::Table,
        }
    }

    pub fn as_text(&self) -> Option<&str> {
        match self {
            FieldValue::Text(s) => Some(s.as_str()),
            _ => None,
        }
    }
}

impl From<&str> for FieldValue {
    fn from(value: &str) -> Self {
        FieldValue::Text(value.to_string())
    }
}

impl From<bool> for FieldValue {
    fn from(value: bool) -> Self {
        FieldValue::Bool(value)
    }
}

impl<T: Into<FieldValue>> From<Vec<T>> for FieldValue {
    fn from(value: Vec<T>) -> Self {
        FieldValue::List(value.into_iter().map(Into::into).collect())
    }
}

#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum ValueKind {
    Null,
    Bool,
    Number,
    Text,
    Date,
    List,
    Table,
}

impl fmt::Display for ValueKind {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        let name = match self {
            ValueKind::Null => "null",
            ValueKind::Bool => "boolean",
            ValueKind::Number => "number",
            ValueKind::Text => "text",
            ValueKind::Date => "date",
            ValueKind::List => "list",
            ValueKind::Table => "table",
        };
        write!(f, "{}", name)
    }
}
