use crate::ast::{ident::Identifier, literal::Literal, operator::ComparisonOp, span::Span};
use serde::{Deserialize, Serialize};
use std::fmt;

/// A predicate AST node. The tree is transient: built by one parse call,
/// consumed by validation and compilation, then dropped.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Predicate {
    pub kind: PredicateKind,
    pub span: Span,
}

impl Predicate {
    pub fn new(kind: PredicateKind, span: Span) -> Self {
        Predicate { kind, span }
    }
}

/// Predicate node variants. A closed enum so the query compiler's lowering
/// match is exhaustive by construction.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum PredicateKind {
    Comparison {
        field: Identifier,
        op: ComparisonOp,
        value: Literal,
    },
    Not(Box<Predicate>),
    And(Box<Predicate>, Box<Predicate>),
    Or(Box<Predicate>, Box<Predicate>),
}

impl PredicateKind {
    /// Binding strength, used when re-serializing to decide where
    /// parentheses are needed.
    fn precedence(&self) -> u8 {
        match self {
            PredicateKind::Or(_, _) => 1,
            PredicateKind::And(_, _) => 2,
            PredicateKind::Not(_) => 3,
            PredicateKind::Comparison { .. } => 4,
        }
    }
}

/// Re-serialization. Prints the minimal parentheses that make re-parsing
/// yield a structurally identical tree.
impl fmt::Display for Predicate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fn child(f: &mut fmt::Formatter<'_>, node: &Predicate, min_prec: u8) -> fmt::Result {
            if node.kind.precedence() < min_prec {
                write!(f, "({})", node)
            } else {
                write!(f, "{}", node)
            }
        }

        match &self.kind {
            PredicateKind::Comparison { field, op, value } => {
                write!(f, "{} {} {}", field, op, value)
            }
            PredicateKind::Not(inner) => {
                write!(f, "NOT ")?;
                child(f, inner, 3)
            }
            PredicateKind::And(left, right) => {
                child(f, left, 2)?;
                write!(f, " && ")?;
                // left-associative: an And on the right needs parens
                child(f, right, 3)
            }
            PredicateKind::Or(left, right) => {
                child(f, left, 1)?;
                write!(f, " || ")?;
                child(f, right, 2)
            }
        }
    }
}
