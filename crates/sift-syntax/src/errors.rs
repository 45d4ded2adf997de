use crate::lexer::error::LexError;
use thiserror::Error;

#[derive(Debug, Error, PartialEq)]
pub enum ParseError {
    #[error("unexpected end of predicate at offset {offset}")]
    Incomplete { offset: usize },

    #[error("unexpected trailing input '{found}' at offset {offset}")]
    TrailingTokens { found: String, offset: usize },

    #[error("unbalanced parentheses at offset {offset}")]
    UnbalancedParens { offset: usize },

    #[error("comparisons must have the field on the left, found '{found}' at offset {offset}")]
    UnsupportedForm { found: String, offset: usize },

    #[error("expected {expected}, found '{found}' at offset {offset}")]
    UnexpectedToken {
        expected: String,
        found: String,
        offset: usize,
    },
}

impl ParseError {
    pub fn offset(&self) -> usize {
        match self {
            ParseError::Incomplete { offset }
            | ParseError::TrailingTokens { offset, .. }
            | ParseError::UnbalancedParens { offset }
            | ParseError::UnsupportedForm { offset, .. }
            | ParseError::UnexpectedToken { offset, .. } => *offset,
        }
    }
}

#[derive(Debug, Error, PartialEq)]
pub enum SubstitutionError {
    #[error("substitution list exhausted: no value for placeholder {index}")]
    Exhausted { index: usize },

    #[error("substitution value {index} has no literal representation ({kind})")]
    Unrepresentable { index: usize, kind: String },
}

/// Umbrella over everything that can go wrong between raw text and AST.
#[derive(Debug, Error, PartialEq)]
pub enum SyntaxError {
    #[error(transparent)]
    Lex(#[from] LexError),

    #[error(transparent)]
    Parse(#[from] ParseError),

    #[error(transparent)]
    Substitution(#[from] SubstitutionError),
}

impl SyntaxError {
    /// Source offset of the failure, where one exists. Substitution errors
    /// are positional in the value list, not the text.
    pub fn offset(&self) -> Option<usize> {
        match self {
            SyntaxError::Lex(err) => Some(err.offset()),
            SyntaxError::Parse(err) => Some(err.offset()),
            SyntaxError::Substitution(_) => None,
        }
    }
}
