use crate::filter::Filter;
use model::{Record, Value};
use sift_syntax::{ComparisonOp, Literal};
use std::cmp::Ordering;

impl Filter {
    /// Evaluates the filter against one record. Records are schemaless at
    /// the row level: a missing field, a Null, or a value whose runtime type
    /// does not line up with the literal simply does not match the term.
    pub fn matches(&self, record: &Record) -> bool {
        match self {
            Filter::Term { field, op, value } => record
                .get(field)
                .is_some_and(|actual| term_matches(actual, *op, value)),
            Filter::And(left, right) => left.matches(record) && right.matches(record),
            Filter::Or(left, right) => left.matches(record) || right.matches(record),
            Filter::Not(inner) => !inner.matches(record),
        }
    }
}

fn term_matches(actual: &Value, op: ComparisonOp, literal: &Literal) -> bool {
    let Some(ordering) = compare(actual, literal) else {
        return false;
    };
    match op {
        ComparisonOp::Equal => ordering == Ordering::Equal,
        ComparisonOp::NotEqual => ordering != Ordering::Equal,
        ComparisonOp::GreaterThan => ordering == Ordering::Greater,
        ComparisonOp::LessThan => ordering == Ordering::Less,
        ComparisonOp::GreaterOrEqual => ordering != Ordering::Less,
        ComparisonOp::LessOrEqual => ordering != Ordering::Greater,
    }
}

fn compare(actual: &Value, literal: &Literal) -> Option<Ordering> {
    match (actual, literal) {
        (Value::String(a), Literal::String(b)) => Some(a.cmp(b)),
        (Value::Number(a), Literal::Number(b)) => a.partial_cmp(b),
        (Value::Boolean(a), Literal::Boolean(b)) => Some(a.cmp(b)),
        (Value::Timestamp(a), Literal::Date(b)) => Some(a.cmp(b)),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{TimeZone, Utc};

    fn term(field: &str, op: ComparisonOp, value: Literal) -> Filter {
        Filter::Term {
            field: field.into(),
            op,
            value,
        }
    }

    fn task(body: &str, done: bool) -> Record {
        Record::new()
            .with_value("body", Value::String(body.into()))
            .with_value("isDone", Value::Boolean(done))
    }

    #[test]
    fn test_term_matching() {
        let filter = term("body", ComparisonOp::Equal, Literal::String("jonah".into()));
        assert!(filter.matches(&task("jonah", false)));
        assert!(!filter.matches(&task("zach", false)));
    }

    #[test]
    fn test_timestamp_ordering() {
        let cutoff = Utc.with_ymd_and_hms(2018, 4, 26, 8, 0, 0).unwrap();
        let later = Utc.with_ymd_and_hms(2018, 5, 1, 0, 0, 0).unwrap();
        let record = Record::new().with_value("timestamp", Value::Timestamp(later));

        let filter = term("timestamp", ComparisonOp::GreaterThan, Literal::Date(cutoff));
        assert!(filter.matches(&record));

        let filter = term("timestamp", ComparisonOp::LessOrEqual, Literal::Date(cutoff));
        assert!(!filter.matches(&record));
    }

    #[test]
    fn test_missing_field_does_not_match() {
        let filter = term("priority", ComparisonOp::Equal, Literal::Number(1.0));
        assert!(!filter.matches(&task("jonah", false)));

        // NotEqual against a missing field is still "no match"
        let filter = term("priority", ComparisonOp::NotEqual, Literal::Number(1.0));
        assert!(!filter.matches(&task("jonah", false)));
    }

    #[test]
    fn test_type_skewed_value_does_not_match() {
        let record = Record::new().with_value("body", Value::Number(7.0));
        let filter = term("body", ComparisonOp::Equal, Literal::String("7".into()));
        assert!(!filter.matches(&record));
    }

    #[test]
    fn test_combinators() {
        let jonah = term("body", ComparisonOp::Equal, Literal::String("jonah".into()));
        let open = term("isDone", ComparisonOp::Equal, Literal::Boolean(false));

        let both = Filter::And(Box::new(jonah.clone()), Box::new(open.clone()));
        assert!(both.matches(&task("jonah", false)));
        assert!(!both.matches(&task("jonah", true)));

        let either = Filter::Or(Box::new(jonah.clone()), Box::new(open));
        assert!(either.matches(&task("zach", false)));
        assert!(!either.matches(&task("zach", true)));

        let negated = Filter::Not(Box::new(jonah));
        assert!(negated.matches(&task("zach", true)));
        assert!(!negated.matches(&task("jonah", true)));
    }
}
