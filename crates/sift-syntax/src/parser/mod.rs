use crate::{
    ast::{
        ident::Identifier,
        literal::Literal,
        operator::ComparisonOp,
        predicate::{Predicate, PredicateKind},
        span::Span,
    },
    errors::{ParseError, SyntaxError},
    lexer::token::{Token, TokenKind},
    parser::substitution::SubstitutionCursor,
};
use model::Value;
use tracing::debug;

pub mod substitution;

#[cfg(test)]
mod tests;

/// Recursive-descent parser over the token stream. Placeholder resolution is
/// integrated here: `%@` pulls from the substitution cursor as it is parsed,
/// so resolution order matches textual occurrence order regardless of the
/// shape of the resulting tree.
pub struct Parser<'a> {
    tokens: Vec<Token>,
    position: usize,
    substitutions: SubstitutionCursor<'a>,
}

impl<'a> Parser<'a> {
    pub fn new(tokens: Vec<Token>, substitutions: &'a [Value]) -> Self {
        Self {
            tokens,
            position: 0,
            substitutions: SubstitutionCursor::new(substitutions),
        }
    }

    pub fn parse(mut self) -> Result<Predicate, SyntaxError> {
        let predicate = self.parse_or()?;

        match &self.current().kind {
            TokenKind::Eof => {
                debug!(
                    substitutions = self.substitutions.consumed(),
                    "parsed predicate"
                );
                Ok(predicate)
            }
            TokenKind::RightParen => Err(ParseError::UnbalancedParens {
                offset: self.current().offset,
            }
            .into()),
            other => Err(ParseError::TrailingTokens {
                found: other.to_string(),
                offset: self.current().offset,
            }
            .into()),
        }
    }

    fn current(&self) -> &Token {
        // The token stream always ends with Eof, so position stays in range.
        &self.tokens[self.position.min(self.tokens.len() - 1)]
    }

    fn advance(&mut self) {
        if self.position < self.tokens.len() - 1 {
            self.position += 1;
        }
    }

    // orExpr := andExpr ( OR andExpr )*
    fn parse_or(&mut self) -> Result<Predicate, SyntaxError> {
        let mut left = self.parse_and()?;

        while self.current().kind == TokenKind::Or {
            self.advance();
            let right = self.parse_and()?;
            let span = left.span.merge(right.span);
            left = Predicate::new(PredicateKind::Or(Box::new(left), Box::new(right)), span);
        }
        Ok(left)
    }

    // andExpr := notExpr ( AND notExpr )*
    fn parse_and(&mut self) -> Result<Predicate, SyntaxError> {
        let mut left = self.parse_not()?;

        while self.current().kind == TokenKind::And {
            self.advance();
            let right = self.parse_not()?;
            let span = left.span.merge(right.span);
            left = Predicate::new(PredicateKind::And(Box::new(left), Box::new(right)), span);
        }
        Ok(left)
    }

    // notExpr := NOT notExpr | comparison | '(' expr ')'
    fn parse_not(&mut self) -> Result<Predicate, SyntaxError> {
        if self.current().kind == TokenKind::Not {
            let start = self.current().offset;
            self.advance();
            let inner = self.parse_not()?;
            let span = Span::new(start, inner.span.end);
            return Ok(Predicate::new(PredicateKind::Not(Box::new(inner)), span));
        }
        self.parse_primary()
    }

    fn parse_primary(&mut self) -> Result<Predicate, SyntaxError> {
        let token = self.current().clone();
        match token.kind {
            TokenKind::LeftParen => {
                self.advance();
                let inner = self.parse_or()?;
                if self.current().kind == TokenKind::RightParen {
                    self.advance();
                    Ok(inner)
                } else {
                    Err(ParseError::UnbalancedParens {
                        offset: token.offset,
                    }
                    .into())
                }
            }
            TokenKind::Identifier(_) => self.parse_comparison(),
            // Literal in field position: the grammar only supports
            // field-on-left comparisons.
            TokenKind::String(_)
            | TokenKind::Number(_)
            | TokenKind::Boolean(_)
            | TokenKind::Date(_)
            | TokenKind::Placeholder => Err(ParseError::UnsupportedForm {
                found: token.kind.to_string(),
                offset: token.offset,
            }
            .into()),
            TokenKind::Eof => Err(ParseError::Incomplete {
                offset: token.offset,
            }
            .into()),
            other => Err(ParseError::UnexpectedToken {
                expected: "a comparison or '('".to_string(),
                found: other.to_string(),
                offset: token.offset,
            }
            .into()),
        }
    }

    // comparison := identifier operator literalOrPlaceholder
    fn parse_comparison(&mut self) -> Result<Predicate, SyntaxError> {
        let field_token = self.current().clone();
        let TokenKind::Identifier(name) = &field_token.kind else {
            unreachable!("parse_comparison entered on a non-identifier token");
        };
        let field = Identifier::new(name, Span::new(field_token.offset, field_token.end()));
        self.advance();

        let op = self.parse_operator()?;
        let (value, value_end) = self.parse_value()?;

        let span = Span::new(field.span.start, value_end);
        Ok(Predicate::new(
            PredicateKind::Comparison { field, op, value },
            span,
        ))
    }

    fn parse_operator(&mut self) -> Result<ComparisonOp, SyntaxError> {
        let token = self.current().clone();
        let op = match token.kind {
            TokenKind::Equal => ComparisonOp::Equal,
            TokenKind::NotEqual => ComparisonOp::NotEqual,
            TokenKind::GreaterThan => ComparisonOp::GreaterThan,
            TokenKind::LessThan => ComparisonOp::LessThan,
            TokenKind::GreaterOrEqual => ComparisonOp::GreaterOrEqual,
            TokenKind::LessOrEqual => ComparisonOp::LessOrEqual,
            TokenKind::Eof => {
                return Err(ParseError::Incomplete {
                    offset: token.offset,
                }
                .into());
            }
            other => {
                return Err(ParseError::UnexpectedToken {
                    expected: "a comparison operator".to_string(),
                    found: other.to_string(),
                    offset: token.offset,
                }
                .into());
            }
        };
        self.advance();
        Ok(op)
    }

    fn parse_value(&mut self) -> Result<(Literal, usize), SyntaxError> {
        let token = self.current().clone();
        let end = token.end();
        let literal = match token.kind {
            TokenKind::String(s) => Literal::String(s),
            TokenKind::Number(n) => Literal::Number(n),
            TokenKind::Boolean(b) => Literal::Boolean(b),
            TokenKind::Date(d) => Literal::Date(d),
            TokenKind::Placeholder => self.substitutions.resolve()?,
            TokenKind::Eof => {
                return Err(ParseError::Incomplete {
                    offset: token.offset,
                }
                .into());
            }
            other => {
                return Err(ParseError::UnexpectedToken {
                    expected: "a literal value or '%@'".to_string(),
                    found: other.to_string(),
                    offset: token.offset,
                }
                .into());
            }
        };
        self.advance();
        Ok((literal, end))
    }
}
