use crate::{
    capabilities::TargetCapabilities,
    compile::QueryTarget,
    error::CompileError,
};
use serde::{Deserialize, Serialize};
use sift_syntax::{ComparisonOp, Identifier, Literal};
use std::fmt;

/// The default compiled-query representation: a structured predicate tree
/// the in-memory store evaluates directly. Immutable once produced.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Filter {
    Term {
        field: String,
        op: ComparisonOp,
        value: Literal,
    },
    And(Box<Filter>, Box<Filter>),
    Or(Box<Filter>, Box<Filter>),
    Not(Box<Filter>),
}

impl fmt::Display for Filter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Filter::Term { field, op, value } => write!(f, "{field} {op} {value}"),
            Filter::And(l, r) => write!(f, "({l} && {r})"),
            Filter::Or(l, r) => write!(f, "({l} || {r})"),
            Filter::Not(inner) => write!(f, "NOT ({inner})"),
        }
    }
}

/// Full-capability target producing [`Filter`] trees.
#[derive(Debug, Clone, Copy, Default)]
pub struct FilterTarget;

impl QueryTarget for FilterTarget {
    type Query = Filter;

    fn name(&self) -> &str {
        "filter"
    }

    fn capabilities(&self) -> TargetCapabilities {
        TargetCapabilities::full()
    }

    fn term(
        &self,
        field: &Identifier,
        op: ComparisonOp,
        value: &Literal,
    ) -> Result<Filter, CompileError> {
        Ok(Filter::Term {
            field: field.name.clone(),
            op,
            value: value.clone(),
        })
    }

    fn conjunction(&self, left: Filter, right: Filter) -> Filter {
        Filter::And(Box::new(left), Box::new(right))
    }

    fn disjunction(&self, left: Filter, right: Filter) -> Filter {
        Filter::Or(Box::new(left), Box::new(right))
    }

    fn negation(&self, inner: Filter) -> Result<Filter, CompileError> {
        Ok(Filter::Not(Box::new(inner)))
    }
}
