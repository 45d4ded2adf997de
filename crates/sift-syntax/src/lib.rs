pub mod ast;
pub mod errors;
pub mod lexer;
pub mod parser;

use model::Value;

pub use ast::ident::Identifier;
pub use ast::literal::Literal;
pub use ast::operator::ComparisonOp;
pub use ast::predicate::{Predicate, PredicateKind};
pub use ast::span::Span;
pub use errors::SyntaxError;
pub use lexer::Lexer;
pub use parser::Parser;

/// Parses a predicate string, resolving `%@` placeholders against
/// `substitutions` in textual occurrence order.
pub fn parse_predicate(text: &str, substitutions: &[Value]) -> Result<Predicate, SyntaxError> {
    let tokens = Lexer::new(text).tokenize()?;
    Parser::new(tokens, substitutions).parse()
}
