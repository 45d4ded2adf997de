use crate::{core::value::Value, error::ValueError, schema::Schema};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// One stored object: a field name to value map.
///
/// Records are schemaless at the row level; the schema only constrains what
/// predicates may ask about, not what a record actually carries.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct Record {
    values: BTreeMap<String, Value>,
}

impl Record {
    pub fn new() -> Self {
        Record::default()
    }

    pub fn with_value(mut self, field: &str, value: Value) -> Self {
        self.set(field, value);
        self
    }

    pub fn get(&self, field: &str) -> Option<&Value> {
        self.values.get(field)
    }

    pub fn set(&mut self, field: &str, value: Value) {
        self.values.insert(field.to_string(), value);
    }

    pub fn contains(&self, field: &str) -> bool {
        self.values.contains_key(field)
    }

    pub fn fields(&self) -> impl Iterator<Item = (&str, &Value)> {
        self.values.iter().map(|(k, v)| (k.as_str(), v))
    }

    /// Builds a record from a plain JSON object, coercing each field through
    /// the schema where it declares one and best-effort otherwise.
    pub fn from_json(json: &serde_json::Value, schema: &Schema) -> Result<Self, ValueError> {
        let object = json.as_object().ok_or_else(|| ValueError::NotAnObject {
            found: match json {
                serde_json::Value::Array(_) => "array".to_string(),
                other => other.to_string(),
            },
        })?;

        let mut record = Record::new();
        for (field, raw) in object {
            let value = match schema.field_type(field) {
                Some(expected) => Value::from_json(raw, expected).map_err(|err| match err {
                    ValueError::Coercion { expected, found } => ValueError::FieldCoercion {
                        field: field.clone(),
                        expected,
                        found,
                    },
                    other => other,
                })?,
                None => Value::from_json_untyped(raw)?,
            };
            record.set(field, value);
        }
        Ok(record)
    }

    pub fn to_json(&self) -> serde_json::Value {
        let map = self
            .values
            .iter()
            .map(|(k, v)| (k.clone(), v.to_json()))
            .collect();
        serde_json::Value::Object(map)
    }
}
