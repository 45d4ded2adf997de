use chrono::{DateTime, Utc};
use std::fmt;

#[derive(Debug, Clone, PartialEq)]
pub struct Token {
    pub kind: TokenKind,
    pub lexeme: String,
    pub offset: usize,
}

impl Token {
    pub fn new(kind: TokenKind, lexeme: impl Into<String>, offset: usize) -> Self {
        Token {
            kind,
            lexeme: lexeme.into(),
            offset,
        }
    }

    /// Byte offset one past the end of the lexeme.
    pub fn end(&self) -> usize {
        self.offset + self.lexeme.len()
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum TokenKind {
    // Literals
    String(String),
    Number(f64),
    Boolean(bool),
    Date(DateTime<Utc>),

    // Identifiers
    Identifier(String),

    // Positional substitution marker
    Placeholder, // %@

    // Comparison operators
    Equal,          // ==
    NotEqual,       // !=
    GreaterThan,    // >
    LessThan,       // <
    GreaterOrEqual, // >=
    LessOrEqual,    // <=

    // Logical operators (keyword and symbolic spellings collapse here)
    And, // AND, &&
    Or,  // OR, ||
    Not, // NOT

    // Delimiters
    LeftParen,  // (
    RightParen, // )

    // Special
    Eof,
}

impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TokenKind::String(s) => write!(f, "'{}'", s),
            TokenKind::Number(n) => write!(f, "{}", n),
            TokenKind::Boolean(b) => write!(f, "{}", b),
            TokenKind::Date(d) => write!(f, "date('{}')", d.to_rfc3339()),
            TokenKind::Identifier(s) => write!(f, "{}", s),
            TokenKind::Placeholder => write!(f, "%@"),
            TokenKind::Equal => write!(f, "=="),
            TokenKind::NotEqual => write!(f, "!="),
            TokenKind::GreaterThan => write!(f, ">"),
            TokenKind::LessThan => write!(f, "<"),
            TokenKind::GreaterOrEqual => write!(f, ">="),
            TokenKind::LessOrEqual => write!(f, "<="),
            TokenKind::And => write!(f, "&&"),
            TokenKind::Or => write!(f, "||"),
            TokenKind::Not => write!(f, "NOT"),
            TokenKind::LeftParen => write!(f, "("),
            TokenKind::RightParen => write!(f, ")"),
            TokenKind::Eof => write!(f, "EOF"),
        }
    }
}
