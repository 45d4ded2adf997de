use super::*;
use crate::parse_predicate;
use chrono::{TimeZone, Utc};

fn parse(text: &str) -> Predicate {
    parse_predicate(text, &[]).unwrap()
}

fn parse_err(text: &str) -> SyntaxError {
    parse_predicate(text, &[]).unwrap_err()
}

fn comparison(p: &Predicate) -> (&str, ComparisonOp, &Literal) {
    match &p.kind {
        PredicateKind::Comparison { field, op, value } => (field.name.as_str(), *op, value),
        other => panic!("expected a comparison, got {:?}", other),
    }
}

#[test]
fn test_simple_comparison() {
    let p = parse("body == 'jonah'");
    let (field, op, value) = comparison(&p);
    assert_eq!(field, "body");
    assert_eq!(op, ComparisonOp::Equal);
    assert_eq!(value, &Literal::String("jonah".into()));
    assert_eq!(p.span, Span::new(0, 15));
}

#[test]
fn test_comparison_span_ends_at_literal() {
    let p = parse("timestamp >= 1524729600");
    assert_eq!(p.span, Span::new(0, 23));
    let p = parse("isDone != true");
    assert_eq!(p.span, Span::new(0, 14));
}

#[test]
fn test_and_binds_tighter_than_or() {
    let p = parse("a == 1 OR b == 2 AND c == 3");
    let PredicateKind::Or(left, right) = &p.kind else {
        panic!("expected Or at the root, got {:?}", p.kind);
    };
    assert_eq!(comparison(left).0, "a");
    let PredicateKind::And(b, c) = &right.kind else {
        panic!("expected And on the right, got {:?}", right.kind);
    };
    assert_eq!(comparison(b).0, "b");
    assert_eq!(comparison(c).0, "c");
}

#[test]
fn test_logical_ops_are_left_associative() {
    let p = parse("a == 1 && b == 2 && c == 3");
    let PredicateKind::And(left, right) = &p.kind else {
        panic!("expected And at the root");
    };
    assert_eq!(comparison(right).0, "c");
    assert!(matches!(left.kind, PredicateKind::And(_, _)));
}

#[test]
fn test_not_binds_tighter_than_and() {
    let p = parse("NOT a == 1 AND b == 2");
    let PredicateKind::And(left, right) = &p.kind else {
        panic!("expected And at the root, got {:?}", p.kind);
    };
    assert!(matches!(left.kind, PredicateKind::Not(_)));
    assert_eq!(comparison(right).0, "b");
}

#[test]
fn test_not_is_right_associative() {
    let p = parse("NOT NOT isDone == true");
    let PredicateKind::Not(inner) = &p.kind else {
        panic!("expected Not at the root");
    };
    assert!(matches!(inner.kind, PredicateKind::Not(_)));
}

#[test]
fn test_parentheses_reset_precedence() {
    let p = parse("(a == 1 OR b == 2) AND c == 3");
    let PredicateKind::And(left, _) = &p.kind else {
        panic!("expected And at the root");
    };
    assert!(matches!(left.kind, PredicateKind::Or(_, _)));
}

#[test]
fn test_end_to_end_sample() {
    let p = parse("(body == 'jonah' && isDone != true) OR NOT body == 'zach'");
    let PredicateKind::Or(left, right) = &p.kind else {
        panic!("expected Or at the root");
    };
    let PredicateKind::And(body, done) = &left.kind else {
        panic!("expected And on the left");
    };
    assert_eq!(
        comparison(body),
        (
            "body",
            ComparisonOp::Equal,
            &Literal::String("jonah".into())
        )
    );
    assert_eq!(
        comparison(done),
        ("isDone", ComparisonOp::NotEqual, &Literal::Boolean(true))
    );
    let PredicateKind::Not(zach) = &right.kind else {
        panic!("expected Not on the right");
    };
    assert_eq!(
        comparison(zach),
        ("body", ComparisonOp::Equal, &Literal::String("zach".into()))
    );
}

#[test]
fn test_placeholders_resolve_left_to_right() {
    let when = Utc.with_ymd_and_hms(2018, 4, 26, 8, 0, 0).unwrap();
    let values = vec![Value::String("jonah".into()), Value::Timestamp(when)];

    let p = parse_predicate("body == %@ && timestamp > %@", &values).unwrap();
    let PredicateKind::And(left, right) = &p.kind else {
        panic!("expected And at the root");
    };
    assert_eq!(
        comparison(left),
        (
            "body",
            ComparisonOp::Equal,
            &Literal::String("jonah".into())
        )
    );
    assert_eq!(
        comparison(right),
        ("timestamp", ComparisonOp::GreaterThan, &Literal::Date(when))
    );
}

#[test]
fn test_under_supplied_substitutions() {
    let values = vec![Value::String("jonah".into())];
    let err = parse_predicate("body == %@ && timestamp > %@", &values).unwrap_err();
    assert_eq!(
        err,
        SyntaxError::Substitution(crate::errors::SubstitutionError::Exhausted { index: 1 })
    );
}

#[test]
fn test_extra_substitutions_are_allowed() {
    let values = vec![Value::String("jonah".into()), Value::Number(9.0)];
    assert!(parse_predicate("body == %@", &values).is_ok());
}

#[test]
fn test_unbalanced_open_paren() {
    let err = parse_err("(body == 'x'");
    assert_eq!(
        err,
        SyntaxError::Parse(ParseError::UnbalancedParens { offset: 0 })
    );
}

#[test]
fn test_unbalanced_close_paren() {
    let err = parse_err("body == 'x')");
    assert_eq!(
        err,
        SyntaxError::Parse(ParseError::UnbalancedParens { offset: 11 })
    );
}

#[test]
fn test_incomplete_predicate() {
    assert!(matches!(
        parse_err("body =="),
        SyntaxError::Parse(ParseError::Incomplete { .. })
    ));
    assert!(matches!(
        parse_err("body == 'x' &&"),
        SyntaxError::Parse(ParseError::Incomplete { .. })
    ));
    assert!(matches!(
        parse_err(""),
        SyntaxError::Parse(ParseError::Incomplete { .. })
    ));
}

#[test]
fn test_trailing_tokens() {
    let err = parse_err("body == 'x' isDone");
    assert_eq!(
        err,
        SyntaxError::Parse(ParseError::TrailingTokens {
            found: "isDone".into(),
            offset: 12
        })
    );
}

#[test]
fn test_literal_on_left_is_unsupported() {
    assert!(matches!(
        parse_err("'jonah' == body"),
        SyntaxError::Parse(ParseError::UnsupportedForm { offset: 0, .. })
    ));
    assert!(matches!(
        parse_err("5 < timestamp"),
        SyntaxError::Parse(ParseError::UnsupportedForm { .. })
    ));
}

#[test]
fn test_identifier_on_right_is_rejected() {
    assert!(matches!(
        parse_err("body == other_field"),
        SyntaxError::Parse(ParseError::UnexpectedToken { .. })
    ));
}

/// Erases all source spans so trees can be compared by structure alone.
/// Printing normalizes keyword spellings (`OR` becomes `||`), which
/// shifts the offsets of everything after them.
fn without_spans(p: &Predicate) -> Predicate {
    let kind = match &p.kind {
        PredicateKind::Comparison { field, op, value } => PredicateKind::Comparison {
            field: Identifier::new(&field.name, Span::new(0, 0)),
            op: *op,
            value: value.clone(),
        },
        PredicateKind::Not(inner) => PredicateKind::Not(Box::new(without_spans(inner))),
        PredicateKind::And(left, right) => PredicateKind::And(
            Box::new(without_spans(left)),
            Box::new(without_spans(right)),
        ),
        PredicateKind::Or(left, right) => PredicateKind::Or(
            Box::new(without_spans(left)),
            Box::new(without_spans(right)),
        ),
    };
    Predicate {
        kind,
        span: Span::new(0, 0),
    }
}

#[test]
fn test_parse_display_reparse_is_stable() {
    let samples = [
        "body == 'jonah'",
        "a == 1 OR b == 2 AND c == 3",
        "NOT a == 1 AND b == 2",
        "NOT NOT isDone == true",
        "(a == 1 || b == 2) && NOT c >= 3",
        "(body == 'jonah' && isDone != true) OR NOT body == 'zach'",
    ];
    for sample in samples {
        let first = parse(sample);
        let printed = first.to_string();
        let second = parse(&printed);
        assert_eq!(
            without_spans(&first),
            without_spans(&second),
            "round-trip changed structure for {sample:?}"
        );
        assert_eq!(
            printed,
            second.to_string(),
            "printing is not a fixed point for {sample:?}"
        );
    }
}
