use serde::{Deserialize, Serialize};
use std::fmt;

/// Comparison operators
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ComparisonOp {
    Equal,
    NotEqual,
    GreaterThan,
    LessThan,
    GreaterOrEqual,
    LessOrEqual,
}

impl ComparisonOp {
    /// True for the operators that require an ordered operand type.
    pub fn is_ordering(&self) -> bool {
        !matches!(self, ComparisonOp::Equal | ComparisonOp::NotEqual)
    }

    /// The operator expressing the logical complement, used when negations
    /// are pushed down to comparison level.
    pub fn negated(&self) -> ComparisonOp {
        match self {
            ComparisonOp::Equal => ComparisonOp::NotEqual,
            ComparisonOp::NotEqual => ComparisonOp::Equal,
            ComparisonOp::GreaterThan => ComparisonOp::LessOrEqual,
            ComparisonOp::LessThan => ComparisonOp::GreaterOrEqual,
            ComparisonOp::GreaterOrEqual => ComparisonOp::LessThan,
            ComparisonOp::LessOrEqual => ComparisonOp::GreaterThan,
        }
    }
}

impl fmt::Display for ComparisonOp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ComparisonOp::Equal => write!(f, "=="),
            ComparisonOp::NotEqual => write!(f, "!="),
            ComparisonOp::GreaterThan => write!(f, ">"),
            ComparisonOp::LessThan => write!(f, "<"),
            ComparisonOp::GreaterOrEqual => write!(f, ">="),
            ComparisonOp::LessOrEqual => write!(f, "<="),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_comparison_op_display() {
        assert_eq!(format!("{}", ComparisonOp::Equal), "==");
        assert_eq!(format!("{}", ComparisonOp::GreaterOrEqual), ">=");
    }

    #[test]
    fn test_negation_is_involutive() {
        for op in [
            ComparisonOp::Equal,
            ComparisonOp::NotEqual,
            ComparisonOp::GreaterThan,
            ComparisonOp::LessThan,
            ComparisonOp::GreaterOrEqual,
            ComparisonOp::LessOrEqual,
        ] {
            assert_eq!(op.negated().negated(), op);
        }
    }
}
