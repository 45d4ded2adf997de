use serde::{Deserialize, Serialize};
use std::fmt;

/// Declared type of a schema field.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub enum FieldType {
    String,
    Number,
    Boolean,
    Date,
}

impl FieldType {
    /// Ordering comparisons (`>`, `<`, `>=`, `<=`) are only meaningful for
    /// numbers and dates.
    pub fn supports_ordering(&self) -> bool {
        matches!(self, FieldType::Number | FieldType::Date)
    }
}

impl fmt::Display for FieldType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FieldType::String => write!(f, "string"),
            FieldType::Number => write!(f, "number"),
            FieldType::Boolean => write!(f, "boolean"),
            FieldType::Date => write!(f, "date"),
        }
    }
}
