use model::FieldType;
use sift_syntax::{ComparisonOp, Span, SyntaxError};
use thiserror::Error;

#[derive(Debug, Error, PartialEq)]
pub enum ValidationError {
    #[error("unknown field '{name}' at {span}")]
    UnknownField { name: String, span: Span },

    #[error(
        "type mismatch at {span}: field '{field}' is {expected} and cannot be compared with a {found} value using '{op}'"
    )]
    TypeMismatch {
        field: String,
        op: ComparisonOp,
        expected: FieldType,
        found: &'static str,
        span: Span,
    },
}

impl ValidationError {
    pub fn span(&self) -> Span {
        match self {
            ValidationError::UnknownField { span, .. }
            | ValidationError::TypeMismatch { span, .. } => *span,
        }
    }
}

#[derive(Debug, Error, PartialEq)]
pub enum CompileError {
    #[error("target '{target}' cannot express '{op}' on field '{field}'")]
    UnsupportedComparison {
        field: String,
        op: ComparisonOp,
        target: String,
    },

    #[error("target '{target}' has no native {combinator} combinator")]
    UnsupportedCombinator { combinator: String, target: String },
}

/// Umbrella over the whole compile pipeline, one variant per stage.
#[derive(Debug, Error, PartialEq)]
pub enum EngineError {
    #[error(transparent)]
    Syntax(#[from] SyntaxError),

    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error(transparent)]
    Compile(#[from] CompileError),
}

impl EngineError {
    /// Source offset for diagnostics, where the failing stage has one.
    pub fn offset(&self) -> Option<usize> {
        match self {
            EngineError::Syntax(err) => err.offset(),
            EngineError::Validation(err) => Some(err.span().start),
            EngineError::Compile(_) => None,
        }
    }
}
