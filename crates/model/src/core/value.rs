use crate::{core::field_type::FieldType, error::ValueError};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::{cmp::Ordering, fmt};

/// An application-level value: what records store and what callers supply as
/// substitution arguments.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub enum Value {
    String(String),
    Number(f64),
    Boolean(bool),
    Timestamp(DateTime<Utc>),
    Null,
}

impl Value {
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Value::String(v) => Some(v),
            _ => None,
        }
    }

    pub fn as_f64(&self) -> Option<f64> {
        match self {
            Value::Number(v) => Some(*v),
            Value::Boolean(v) => Some(if *v { 1.0 } else { 0.0 }),
            Value::String(v) => v.parse::<f64>().ok(),
            _ => None,
        }
    }

    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Value::Boolean(v) => Some(*v),
            _ => None,
        }
    }

    pub fn as_timestamp(&self) -> Option<DateTime<Utc>> {
        match self {
            Value::Timestamp(v) => Some(*v),
            _ => None,
        }
    }

    pub fn is_null(&self) -> bool {
        matches!(self, Value::Null)
    }

    /// Compares two values of the same variant. Mixed variants (and anything
    /// involving Null) have no ordering.
    pub fn compare(&self, other: &Value) -> Option<Ordering> {
        match (self, other) {
            (Value::String(a), Value::String(b)) => Some(a.cmp(b)),
            (Value::Number(a), Value::Number(b)) => a.partial_cmp(b),
            (Value::Boolean(a), Value::Boolean(b)) => Some(a.cmp(b)),
            (Value::Timestamp(a), Value::Timestamp(b)) => Some(a.cmp(b)),
            _ => None,
        }
    }

    /// Coerces a JSON value into the shape a schema field declares.
    pub fn from_json(json: &serde_json::Value, expected: FieldType) -> Result<Self, ValueError> {
        let coerced = match (expected, json) {
            (_, serde_json::Value::Null) => Some(Value::Null),
            (FieldType::String, serde_json::Value::String(s)) => Some(Value::String(s.clone())),
            (FieldType::Number, serde_json::Value::Number(n)) => n.as_f64().map(Value::Number),
            (FieldType::Boolean, serde_json::Value::Bool(b)) => Some(Value::Boolean(*b)),
            (FieldType::Date, serde_json::Value::String(s)) => DateTime::parse_from_rfc3339(s)
                .ok()
                .map(|dt| Value::Timestamp(dt.with_timezone(&Utc))),
            _ => None,
        };

        coerced.ok_or_else(|| ValueError::Coercion {
            expected: expected.to_string(),
            found: json_kind(json).to_string(),
        })
    }

    /// Best-effort conversion for fields the schema does not declare.
    /// Arrays and objects have no scalar representation.
    pub fn from_json_untyped(json: &serde_json::Value) -> Result<Self, ValueError> {
        match json {
            serde_json::Value::Null => Ok(Value::Null),
            serde_json::Value::Bool(b) => Ok(Value::Boolean(*b)),
            serde_json::Value::Number(n) => {
                n.as_f64().map(Value::Number).ok_or(ValueError::Coercion {
                    expected: "number".to_string(),
                    found: "non-finite number".to_string(),
                })
            }
            serde_json::Value::String(s) => Ok(Value::String(s.clone())),
            other => Err(ValueError::Coercion {
                expected: "scalar".to_string(),
                found: json_kind(other).to_string(),
            }),
        }
    }

    pub fn to_json(&self) -> serde_json::Value {
        match self {
            Value::String(s) => serde_json::Value::String(s.clone()),
            Value::Number(n) => serde_json::Number::from_f64(*n)
                .map(serde_json::Value::Number)
                .unwrap_or(serde_json::Value::Null),
            Value::Boolean(b) => serde_json::Value::Bool(*b),
            Value::Timestamp(t) => serde_json::Value::String(t.to_rfc3339()),
            Value::Null => serde_json::Value::Null,
        }
    }
}

fn json_kind(json: &serde_json::Value) -> &'static str {
    match json {
        serde_json::Value::Null => "null",
        serde_json::Value::Bool(_) => "boolean",
        serde_json::Value::Number(_) => "number",
        serde_json::Value::String(_) => "string",
        serde_json::Value::Array(_) => "array",
        serde_json::Value::Object(_) => "object",
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::String(s) => write!(f, "{}", s),
            Value::Number(n) => write!(f, "{}", n),
            Value::Boolean(b) => write!(f, "{}", b),
            Value::Timestamp(t) => write!(f, "{}", t.to_rfc3339()),
            Value::Null => write!(f, "null"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn test_same_variant_comparison() {
        assert_eq!(
            Value::Number(1.0).compare(&Value::Number(2.0)),
            Some(Ordering::Less)
        );
        assert_eq!(
            Value::String("b".into()).compare(&Value::String("a".into())),
            Some(Ordering::Greater)
        );
    }

    #[test]
    fn test_mixed_variants_have_no_ordering() {
        assert_eq!(Value::Number(1.0).compare(&Value::String("1".into())), None);
        assert_eq!(Value::Null.compare(&Value::Null), None);
    }

    #[test]
    fn test_from_json_coerces_by_field_type() {
        let json = serde_json::json!("2018-04-26T08:00:00Z");
        let value = Value::from_json(&json, FieldType::Date).unwrap();
        assert_eq!(
            value,
            Value::Timestamp(Utc.with_ymd_and_hms(2018, 4, 26, 8, 0, 0).unwrap())
        );
    }

    #[test]
    fn test_from_json_rejects_wrong_shape() {
        let json = serde_json::json!(42);
        let err = Value::from_json(&json, FieldType::String).unwrap_err();
        assert!(matches!(err, ValueError::Coercion { .. }));
    }
}
