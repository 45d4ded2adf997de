use crate::error::ValidationError;
use model::{FieldType, Schema};
use sift_syntax::{Literal, Predicate, PredicateKind};

/// Depth-first schema check over a parsed predicate. Pure verification: the
/// tree is never mutated and the first problem found is returned.
pub fn validate(predicate: &Predicate, schema: &Schema) -> Result<(), ValidationError> {
    match &predicate.kind {
        PredicateKind::Comparison { field, op, value } => {
            let Some(declared) = schema.field_type(&field.name) else {
                return Err(ValidationError::UnknownField {
                    name: field.name.clone(),
                    span: field.span,
                });
            };

            let compatible = matches!(
                (declared, value),
                (FieldType::String, Literal::String(_))
                    | (FieldType::Number, Literal::Number(_))
                    | (FieldType::Boolean, Literal::Boolean(_))
                    | (FieldType::Date, Literal::Date(_))
            );
            if !compatible || (op.is_ordering() && !declared.supports_ordering()) {
                return Err(ValidationError::TypeMismatch {
                    field: field.name.clone(),
                    op: *op,
                    expected: declared,
                    found: value.type_name(),
                    span: predicate.span,
                });
            }
            Ok(())
        }
        PredicateKind::Not(inner) => validate(inner, schema),
        PredicateKind::And(left, right) | PredicateKind::Or(left, right) => {
            validate(left, schema)?;
            validate(right, schema)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use sift_syntax::parse_predicate;

    fn task_schema() -> Schema {
        Schema::new()
            .with_field("body", FieldType::String)
            .with_field("isDone", FieldType::Boolean)
            .with_field("timestamp", FieldType::Date)
            .with_field("priority", FieldType::Number)
    }

    fn check(text: &str) -> Result<(), ValidationError> {
        let predicate = parse_predicate(text, &[]).unwrap();
        validate(&predicate, &task_schema())
    }

    #[test]
    fn test_valid_predicate() {
        assert!(check("body == 'jonah' && isDone != true").is_ok());
        assert!(check("priority > 2 || priority <= 0").is_ok());
    }

    #[test]
    fn test_unknown_field() {
        let err = check("foo == 'x'").unwrap_err();
        assert!(matches!(err, ValidationError::UnknownField { name, .. } if name == "foo"));
    }

    #[test]
    fn test_unknown_field_deeply_nested() {
        let err = check("body == 'a' && (isDone == true || NOT foo == 'x')").unwrap_err();
        assert!(matches!(err, ValidationError::UnknownField { name, .. } if name == "foo"));
    }

    #[test]
    fn test_literal_variant_must_match_field_type() {
        let err = check("body == 5").unwrap_err();
        assert!(matches!(
            err,
            ValidationError::TypeMismatch { field, found, .. }
                if field == "body" && found == "number"
        ));
    }

    #[test]
    fn test_ordering_needs_ordered_type() {
        // equality on a string field is fine, ordering is not
        assert!(check("body != 'x'").is_ok());
        let err = check("body > 'x'").unwrap_err();
        assert!(matches!(
            err,
            ValidationError::TypeMismatch {
                op: sift_syntax::ComparisonOp::GreaterThan,
                ..
            }
        ));

        assert!(check("isDone == false").is_ok());
        assert!(check("isDone < true").is_err());
    }

    #[test]
    fn test_first_error_wins() {
        let err = check("foo == 'x' && bar == 'y'").unwrap_err();
        assert!(matches!(err, ValidationError::UnknownField { name, .. } if name == "foo"));
    }
}
