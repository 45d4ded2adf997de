pub mod ident;
pub mod literal;
pub mod operator;
pub mod predicate;
pub mod span;
