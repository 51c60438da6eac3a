use crate::content::parsing_utils::{FrontMatter, FrontMatterFormat};
use crate::content::ContentError;
use crate::schema::{FieldValue, Record};

/// Decodes a front matter block into a raw record.
pub fn parse_record(front_matter: &FrontMatter) -> Result<Record, ContentError> {
    if front_matter.text.trim().is_empty() {
        return Ok(Record::new());
    }

    match front_matter.format {
        FrontMatterFormat::Yaml => {
            let value: serde_yaml::Value = serde_yaml::from_str(front_matter.text)?;
            match from_yaml(value)? {
                FieldValue::Table(record) => Ok(record),
                FieldValue::Null => Ok(Record::new()),
                other => Err(ContentError::NotAMapping(other.kind().to_string())),
            }
        }
        FrontMatterFormat::Toml => {
            let table: toml::Table = toml::from_str(front_matter.text)?;
            Ok(from_toml_table(table))
        }
    }
}

fn from_yaml(value: serde_yaml::Value) -> Result<FieldValue, ContentError> {
    use serde_yaml::Value;

    let field_value = match value {
        Value::Null => FieldValue::Null,
        Value::Bool(b) => FieldValue::Bool(b),
        Value::Number(n) => match n.as_i64() {
            Some(i) => FieldValue::Integer(i),
            None => FieldValue::Float(n.as_f64().unwrap_or(f64::NAN)),
        },
        Value::String(s) => FieldValue::Text(s),
        Value::Sequence(seq) => {
            let items = seq.into_iter()
                .map(from_yaml)
                .collect::<Result<Vec<_>, _>>()?;
            FieldValue::List(items)
        }
        Value::Mapping(mapping) => {
            let mut record = Record::new();
            for (key, val) in mapping {
                let key = match key {
                    Value::String(key) => key,
                    other => return Err(ContentError::NonTextKey(format!("{:?}", other))),
                };
                record.insert(key, from_yaml(val)?);
            }
            FieldValue::Table(record)
        }
        // Custom tags such as `!date` carry no meaning for the schema
        Value::Tagged(tagged) => from_yaml(tagged.value)?,
    };

    Ok(field_value)
}

fn from_toml_table(table: toml::Table) -> Record {
    table.into_iter()
        .map(|(key, val)| (key, from_toml(val)))
        .collect()
}

fn from_toml(value: toml::Value) -> FieldValue {
    use toml::Value;

    match value {
        Value::String(s) => FieldValue::Text(s),
        Value::Integer(i) => FieldValue::Integer(i),
        Value::Float(f) => FieldValue::Float(f),
        Value::Boolean(b) => FieldValue::Bool(b),
        Value::Datetime(dt) => FieldValue::DateTime(dt.to_string()),
        Value::Array(items) => FieldValue::List(items.into_iter().map(from_toml).collect()),
        Value::Table(table) => FieldValue::Table(from_toml_table(table)),
    }
}
