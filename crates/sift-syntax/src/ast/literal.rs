use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Literal values on the right side of a comparison.
///
/// Dates never appear literally in predicate text; they enter through `%@`
/// substitution. The variant still exists so resolved placeholders carry
/// their value through the AST like any other literal.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Literal {
    String(String),
    Number(f64),
    Boolean(bool),
    Date(DateTime<Utc>),
}

impl Literal {
    pub fn type_name(&self) -> &'static str {
        match self {
            Literal::String(_) => "string",
            Literal::Number(_) => "number",
            Literal::Boolean(_) => "boolean",
            Literal::Date(_) => "date",
        }
    }
}

impl fmt::Display for Literal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Literal::String(s) => write!(f, "'{}'", s),
            Literal::Number(n) => write!(f, "{}", n),
            Literal::Boolean(b) => write!(f, "{}", b),
            Literal::Date(d) => write!(f, "date('{}')", d.to_rfc3339()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_literal_display() {
        assert_eq!(format!("{}", Literal::String("jonah".into())), "'jonah'");
        assert_eq!(format!("{}", Literal::Number(42.5)), "42.5");
        assert_eq!(format!("{}", Literal::Boolean(true)), "true");
    }

    #[test]
    fn test_type_names() {
        assert_eq!(Literal::String("x".into()).type_name(), "string");
        assert_eq!(Literal::Number(0.0).type_name(), "number");
    }
}
