use crate::core::field_type::FieldType;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Field name to declared type mapping for one queryable entity.
///
/// Supplied by the caller and read-only to the engine; once published it must
/// not be mutated, which makes `&Schema` (or `Arc<Schema>`) safe to share
/// across concurrent compile calls.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct Schema {
    fields: HashMap<String, FieldType>,
}

impl Schema {
    pub fn new() -> Self {
        Schema::default()
    }

    pub fn with_field(mut self, name: &str, field_type: FieldType) -> Self {
        self.fields.insert(name.to_string(), field_type);
        self
    }

    pub fn field_type(&self, name: &str) -> Option<FieldType> {
        self.fields.get(name).copied()
    }

    pub fn contains(&self, name: &str) -> bool {
        self.fields.contains_key(name)
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }
}
